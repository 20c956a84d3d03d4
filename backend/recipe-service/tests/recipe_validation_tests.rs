use recipe_service::handlers::recipes::{CreateRecipeRequest, UpdateRecipeRequest};
use recipe_service::validators::first_violation_message;
use validator::Validate;

fn valid_request() -> CreateRecipeRequest {
    CreateRecipeRequest {
        title: "Garlic Butter Shrimp".to_string(),
        ingredients: vec![
            "500g shrimp".to_string(),
            "3 cloves garlic".to_string(),
            "50g butter".to_string(),
        ],
        instructions: "Melt the butter, fry the garlic, then toss the shrimp for three minutes."
            .to_string(),
        category: "Main Course".to_string(),
        cooking_time: 15,
    }
}

#[test]
fn test_valid_request_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_title_too_short() {
    let mut req = valid_request();
    req.title = "ab".to_string();
    let errors = req.validate().expect_err("short title must fail");
    assert_eq!(
        first_violation_message(&errors),
        "title must be between 3 and 255 characters"
    );
}

#[test]
fn test_title_too_long() {
    let mut req = valid_request();
    req.title = "a".repeat(256);
    assert!(req.validate().is_err());

    req.title = "a".repeat(255);
    assert!(req.validate().is_ok());
}

#[test]
fn test_empty_ingredients() {
    let mut req = valid_request();
    req.ingredients = vec![];
    let errors = req.validate().expect_err("empty ingredients must fail");
    assert_eq!(
        first_violation_message(&errors),
        "ingredients must contain at least 1 item"
    );
}

#[test]
fn test_blank_ingredient_item() {
    let mut req = valid_request();
    req.ingredients = vec!["500g shrimp".to_string(), "  ".to_string()];
    let errors = req.validate().expect_err("blank item must fail");
    assert_eq!(
        first_violation_message(&errors),
        "ingredients items must be non-empty"
    );
}

#[test]
fn test_instructions_too_short() {
    let mut req = valid_request();
    req.instructions = "Fry it".to_string();
    let errors = req.validate().expect_err("short instructions must fail");
    assert_eq!(
        first_violation_message(&errors),
        "instructions must be at least 10 characters"
    );
}

#[test]
fn test_unknown_category() {
    let mut req = valid_request();
    req.category = "Soup".to_string();
    let errors = req.validate().expect_err("unknown category must fail");
    assert_eq!(
        first_violation_message(&errors),
        "category must be one of Appetizer, Main Course, Dessert"
    );
}

#[test]
fn test_cooking_time_below_minimum() {
    let mut req = valid_request();
    req.cooking_time = 0;
    let errors = req.validate().expect_err("zero cooking time must fail");
    assert_eq!(
        first_violation_message(&errors),
        "cookingTime must be at least 1"
    );

    req.cooking_time = 1;
    assert!(req.validate().is_ok());
}

#[test]
fn test_first_violation_follows_schema_field_order() {
    let mut req = valid_request();
    req.title = "ab".to_string();
    req.category = "Soup".to_string();
    req.cooking_time = 0;
    let errors = req.validate().expect_err("several fields invalid");
    assert_eq!(
        first_violation_message(&errors),
        "title must be between 3 and 255 characters"
    );

    let mut req = valid_request();
    req.category = "Soup".to_string();
    req.cooking_time = 0;
    let errors = req.validate().expect_err("two fields invalid");
    assert_eq!(
        first_violation_message(&errors),
        "category must be one of Appetizer, Main Course, Dessert"
    );
}

#[test]
fn test_empty_update_is_valid() {
    let req = UpdateRecipeRequest {
        title: None,
        ingredients: None,
        instructions: None,
        category: None,
        cooking_time: None,
    };
    assert!(req.validate().is_ok());
}

#[test]
fn test_update_validates_provided_fields_only() {
    let req = UpdateRecipeRequest {
        title: Some("Better Shrimp".to_string()),
        ingredients: None,
        instructions: None,
        category: None,
        cooking_time: None,
    };
    assert!(req.validate().is_ok());

    let req = UpdateRecipeRequest {
        title: None,
        ingredients: None,
        instructions: None,
        category: Some("Soup".to_string()),
        cooking_time: None,
    };
    let errors = req.validate().expect_err("bad category in patch must fail");
    assert_eq!(
        first_violation_message(&errors),
        "category must be one of Appetizer, Main Course, Dessert"
    );

    let req = UpdateRecipeRequest {
        title: None,
        ingredients: Some(vec![]),
        instructions: None,
        category: None,
        cooking_time: None,
    };
    assert!(req.validate().is_err());
}
