use std::collections::BTreeMap;

use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::Recipe;

/// Meal-course bucket. Recipe documents carry free-text courses, so
/// bucketing is by case-insensitive substring; anything unrecognized lands
/// in Other.
#[derive(
    AsRefStr,
    Display,
    EnumString,
    VariantArray,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum Course {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Other,
}

impl Course {
    pub fn classify(course: Option<&str>) -> Course {
        let text = course.unwrap_or("").to_lowercase();
        if text.contains("breakfast") {
            Course::Breakfast
        } else if text.contains("lunch") {
            Course::Lunch
        } else if text.contains("dinner") {
            Course::Dinner
        } else {
            Course::Other
        }
    }
}

impl Recipe {
    pub fn course_group(&self) -> Course {
        Course::classify(self.course.as_deref())
    }
}

/// Bucket recipes by course in display order (Breakfast, Lunch, Dinner,
/// Other), preserving input order within each bucket. Empty buckets are
/// omitted.
pub fn group_by_course(recipes: &[Recipe]) -> Vec<(Course, Vec<&Recipe>)> {
    let mut buckets: BTreeMap<Course, Vec<&Recipe>> = BTreeMap::new();
    for recipe in recipes {
        buckets.entry(recipe.course_group()).or_default().push(recipe);
    }
    buckets.into_iter().collect()
}
