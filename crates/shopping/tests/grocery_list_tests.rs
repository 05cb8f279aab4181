use pantryswipe_mealplan::{Day, Meal, MealPlan};
use pantryswipe_pantry::PantryDocument;
use pantryswipe_recipe::{IngredientLine, Recipe};
use pantryswipe_shopping::compute_grocery_list;

fn recipe(title: &str, course: &str, ingredients: Vec<IngredientLine>) -> Recipe {
    Recipe {
        title: title.to_string(),
        course: Some(course.to_string()),
        ingredients,
        ..Recipe::default()
    }
}

fn text(line: &str) -> IngredientLine {
    IngredientLine::Text(line.to_string())
}

#[test]
fn test_grocery_list_groups_and_sums_across_recipes() {
    let mut plan = MealPlan::new();
    plan.assign(
        Day::Monday,
        Meal::Breakfast,
        recipe(
            "French Toast",
            "breakfast",
            vec![text("2 slices of bread"), text("3 eggs")],
        ),
    );
    plan.assign(
        Day::Tuesday,
        Meal::Breakfast,
        recipe(
            "Eggy Bread",
            "breakfast",
            vec![text("4 slices of bread"), text("2 eggs")],
        ),
    );

    let items = compute_grocery_list(&plan, &PantryDocument::new());
    let texts: Vec<&str> = items.iter().map(|i| i.display_text.as_str()).collect();
    assert_eq!(texts, vec!["6 slices of bread", "5 of eggs"]);
    assert!(items.iter().all(|i| !i.already_owned));
}

#[test]
fn test_grocery_list_keeps_different_units_separate() {
    let mut plan = MealPlan::new();
    plan.assign(
        Day::Monday,
        Meal::Dinner,
        recipe(
            "Bread Soup",
            "dinner",
            vec![text("1 loaf of bread"), text("2 slices of bread")],
        ),
    );

    let items = compute_grocery_list(&plan, &PantryDocument::new());
    let texts: Vec<&str> = items.iter().map(|i| i.display_text.as_str()).collect();
    assert_eq!(texts, vec!["1 loaf of bread", "2 slices of bread"]);
}

#[test]
fn test_grocery_list_suppression_by_pantry_free_text() {
    let mut plan = MealPlan::new();
    plan.assign(
        Day::Monday,
        Meal::Breakfast,
        recipe("Toast", "breakfast", vec![text("2 slices of bread")]),
    );

    let mut pantry = PantryDocument::new();
    pantry.record_owned("2 slices of bread");
    pantry.record_owned("2 slices of bread");

    let items = compute_grocery_list(&plan, &pantry);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_text, "2 slices of bread");
    assert!(items[0].already_owned);
}

#[test]
fn test_grocery_list_suppression_is_exact_text_match() {
    let mut plan = MealPlan::new();
    plan.assign(
        Day::Monday,
        Meal::Breakfast,
        recipe("Toast", "breakfast", vec![text("2 slices of bread")]),
    );

    let mut pantry = PantryDocument::new();
    pantry.record_owned("2 Slices of Bread");

    let items = compute_grocery_list(&plan, &pantry);
    assert!(!items[0].already_owned);
}

#[test]
fn test_marking_owned_then_recomputing_flags_the_line() {
    let mut plan = MealPlan::new();
    plan.assign(
        Day::Sunday,
        Meal::Dinner,
        recipe("Omelette", "dinner", vec![text("3 eggs"), text("50 g of butter")]),
    );

    let mut pantry = PantryDocument::new();
    let first_pass = compute_grocery_list(&plan, &pantry);
    assert_eq!(first_pass.len(), 2);

    pantry.record_owned(&first_pass[0].display_text);

    let second_pass = compute_grocery_list(&plan, &pantry);
    assert!(second_pass[0].already_owned);
    assert!(!second_pass[1].already_owned);
}

#[test]
fn test_malformed_lines_still_show_up() {
    let mut plan = MealPlan::new();
    plan.assign(
        Day::Friday,
        Meal::Lunch,
        recipe(
            "Improvised Salad",
            "lunch",
            vec![text("salt"), text("a few olives")],
        ),
    );

    let items = compute_grocery_list(&plan, &PantryDocument::new());
    let texts: Vec<&str> = items.iter().map(|i| i.display_text.as_str()).collect();
    assert_eq!(texts, vec!["1 of salt", "1 of a few olives"]);
}

#[test]
fn test_structured_and_text_lines_group_together() {
    let mut plan = MealPlan::new();
    plan.assign(
        Day::Monday,
        Meal::Dinner,
        recipe(
            "Pasta",
            "dinner",
            vec![
                text("2 cups of flour"),
                IngredientLine::Structured {
                    amount: Some(serde_json::json!(1)),
                    unit: Some("cups".to_string()),
                    name: Some("Flour".to_string()),
                },
            ],
        ),
    );

    let items = compute_grocery_list(&plan, &PantryDocument::new());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_text, "3 cups of flour");
}
