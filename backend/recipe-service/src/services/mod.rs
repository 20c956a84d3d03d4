/// Business logic layer
pub mod recipes;

pub use recipes::RecipeService;
