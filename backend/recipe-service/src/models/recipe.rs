use chrono::{DateTime, Utc};
/// Recipe model
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Recipe category, stored as the `recipe_category` Postgres enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "recipe_category")]
pub enum RecipeCategory {
    #[sqlx(rename = "Appetizer")]
    Appetizer,
    #[serde(rename = "Main Course")]
    #[sqlx(rename = "Main Course")]
    MainCourse,
    #[sqlx(rename = "Dessert")]
    Dessert,
}

impl RecipeCategory {
    /// Accepted wire values, in display order.
    pub const ALLOWED: [&'static str; 3] = ["Appetizer", "Main Course", "Dessert"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Appetizer" => Some(RecipeCategory::Appetizer),
            "Main Course" => Some(RecipeCategory::MainCourse),
            "Dessert" => Some(RecipeCategory::Dessert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::Appetizer => "Appetizer",
            RecipeCategory::MainCourse => "Main Course",
            RecipeCategory::Dessert => "Dessert",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: RecipeCategory,
    pub cooking_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new recipe. The store assigns `id` and timestamps.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: RecipeCategory,
    pub cooking_time: i32,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub category: Option<RecipeCategory>,
    pub cooking_time: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip() {
        for value in RecipeCategory::ALLOWED {
            let category = RecipeCategory::parse(value).expect("allowed category parses");
            assert_eq!(category.as_str(), value);
        }
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert!(RecipeCategory::parse("Soup").is_none());
        assert!(RecipeCategory::parse("appetizer").is_none());
        assert!(RecipeCategory::parse("").is_none());
    }

    #[test]
    fn test_category_serializes_with_space() {
        let json = serde_json::to_string(&RecipeCategory::MainCourse).expect("serialize");
        assert_eq!(json, "\"Main Course\"");
    }
}
