/// HTTP handlers for recipe endpoints
pub mod recipes;

// Re-export handler functions at module level
pub use recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
