use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

use crate::models::RecipeCategory;

/// Input validation utilities for recipe-service

pub const TITLE_MESSAGE: &str = "title must be between 3 and 255 characters";
pub const INGREDIENTS_MIN_MESSAGE: &str = "ingredients must contain at least 1 item";
pub const INGREDIENT_ITEM_MESSAGE: &str = "ingredients items must be non-empty";
pub const INSTRUCTIONS_MESSAGE: &str = "instructions must be at least 10 characters";
pub const CATEGORY_MESSAGE: &str = "category must be one of Appetizer, Main Course, Dessert";
pub const COOKING_TIME_MESSAGE: &str = "cookingTime must be at least 1";

/// Schema field order; the first violated field's message is the one surfaced.
const FIELD_ORDER: [&str; 5] = [
    "title",
    "ingredients",
    "instructions",
    "category",
    "cooking_time",
];

/// validator crate compatible check that every ingredient entry has content
pub fn validate_ingredients(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.trim().is_empty()) {
        let mut error = ValidationError::new("ingredient_item_empty");
        error.message = Some(Cow::Borrowed(INGREDIENT_ITEM_MESSAGE));
        return Err(error);
    }
    Ok(())
}

/// validator crate compatible check for the category enumeration
pub fn validate_category(value: &str) -> Result<(), ValidationError> {
    if RecipeCategory::parse(value).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("unknown_category");
        error.message = Some(Cow::Borrowed(CATEGORY_MESSAGE));
        Err(error)
    }
}

/// Pick the first violated constraint's message, in schema field order.
///
/// The `validator` error map is unordered, so the ordering is imposed here.
pub fn first_violation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    for field in FIELD_ORDER {
        if let Some(violations) = field_errors.get(field) {
            if let Some(violation) = violations.first() {
                if let Some(message) = &violation.message {
                    return message.to_string();
                }
                return format!("{field} is invalid");
            }
        }
    }
    errors.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ingredients() {
        let items = vec!["2 eggs".to_string(), "salt".to_string()];
        assert!(validate_ingredients(&items).is_ok());
    }

    #[test]
    fn test_blank_ingredient_rejected() {
        let items = vec!["2 eggs".to_string(), "   ".to_string()];
        let error = validate_ingredients(&items).expect_err("blank item must fail");
        assert_eq!(
            error.message.as_deref(),
            Some(INGREDIENT_ITEM_MESSAGE)
        );
    }

    #[test]
    fn test_valid_categories() {
        assert!(validate_category("Appetizer").is_ok());
        assert!(validate_category("Main Course").is_ok());
        assert!(validate_category("Dessert").is_ok());
    }

    #[test]
    fn test_invalid_category() {
        let error = validate_category("Soup").expect_err("unknown category must fail");
        assert_eq!(error.message.as_deref(), Some(CATEGORY_MESSAGE));
    }
}
