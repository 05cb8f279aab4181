use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Free-text instructions split on line breaks or "1." style step markers.
static STEP_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|\r|\d+\.").expect("step split pattern"));

/// One ingredient line as stored on a recipe document: either free text
/// ("2 slices of bread") or a structured object. Structured fields are all
/// optional and `amount` may arrive as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientLine {
    Text(String),
    Structured {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

/// Recipe instructions come in two storage shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instructions {
    Text(String),
    Steps(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    #[serde(rename = "recipe", skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Instructions>,
}

impl Recipe {
    /// Instruction steps regardless of storage shape: lists pass through,
    /// free text splits on newlines or numbered-step markers. Empty
    /// fragments drop out.
    pub fn instruction_steps(&self) -> Vec<String> {
        match &self.instructions {
            None => Vec::new(),
            Some(Instructions::Steps(steps)) => steps
                .iter()
                .map(|step| step.trim().to_string())
                .filter(|step| !step.is_empty())
                .collect(),
            Some(Instructions::Text(text)) => STEP_SPLIT
                .split(text)
                .map(str::trim)
                .filter(|step| !step.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}
