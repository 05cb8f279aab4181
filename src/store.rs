use std::fs;
use std::path::Path;

use pantryswipe_catalog::{IngredientCatalog, IngredientDefinition};
use pantryswipe_mealplan::MealPlan;
use pantryswipe_pantry::PantryDocument;

use crate::error::AppError;

/// JSON-file stand-in for the external document store. Reads return whole
/// snapshots, writes replace the document wholesale; missing files read as
/// empty documents, matching a store that has no document yet.
pub fn load_catalog(path: &Path) -> Result<IngredientCatalog, AppError> {
    if !path.exists() {
        return Ok(IngredientCatalog::new());
    }
    let raw = fs::read_to_string(path)?;
    let defs: Vec<IngredientDefinition> = serde_json::from_str(&raw)?;
    Ok(IngredientCatalog::from_definitions(defs))
}

pub fn load_pantry(path: &Path) -> Result<PantryDocument, AppError> {
    if !path.exists() {
        return Ok(PantryDocument::new());
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

pub fn save_pantry(path: &Path, pantry: &PantryDocument) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(pantry)?)?;
    Ok(())
}

pub fn load_meal_plan(path: &Path) -> Result<MealPlan, AppError> {
    if !path.exists() {
        return Ok(MealPlan::new());
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

pub fn save_meal_plan(path: &Path, plan: &MealPlan) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(plan)?)?;
    Ok(())
}
