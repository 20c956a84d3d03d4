/// Data models for recipe-service
pub mod recipe;

pub use recipe::{NewRecipe, Recipe, RecipeCategory, RecipePatch};
