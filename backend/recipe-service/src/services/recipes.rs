/// Recipe service - validate-then-persist and validate-then-query passes
/// over the recipe repository.
///
/// The failure policy is deliberately per-operation: create hides store
/// detail behind a static message, update downgrades store failures to a
/// client error with the raw message, and the remaining operations surface
/// the raw message as a server error.
use crate::db::recipe_repo;
use crate::error::{AppError, Result};
use crate::models::{NewRecipe, Recipe, RecipePatch};
use sqlx::PgPool;
use uuid::Uuid;

pub const NOT_FOUND_MESSAGE: &str = "Recipe not found";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create recipe. Please try again later.";

pub struct RecipeService {
    pool: PgPool,
}

impl RecipeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated recipe and return it with its assigned id
    pub async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe> {
        recipe_repo::create(&self.pool, &recipe).await.map_err(|err| {
            tracing::error!("Recipe insert failed: {}", err);
            AppError::Internal(CREATE_FAILED_MESSAGE.to_string())
        })
    }

    /// Fetch one page of recipes plus the total count of stored recipes
    pub async fn list_recipes(&self, page: i64, page_size: i64) -> Result<(Vec<Recipe>, i64)> {
        let skip = (page - 1).saturating_mul(page_size);
        let recipes = recipe_repo::find_page(&self.pool, skip, page_size).await?;
        let total_items = recipe_repo::count(&self.pool).await?;

        Ok((recipes, total_items))
    }

    /// Get a recipe by id
    pub async fn get_recipe(&self, recipe_id: Uuid) -> Result<Recipe> {
        match recipe_repo::find_by_id(&self.pool, recipe_id).await? {
            Some(recipe) => Ok(recipe),
            None => Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string())),
        }
    }

    /// Apply a validated patch and return the post-update recipe
    pub async fn update_recipe(&self, recipe_id: Uuid, patch: RecipePatch) -> Result<Recipe> {
        let updated = recipe_repo::find_by_id_and_update(&self.pool, recipe_id, &patch)
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        match updated {
            Some(recipe) => Ok(recipe),
            None => Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string())),
        }
    }

    /// Remove a recipe by id, returning the removed row
    pub async fn delete_recipe(&self, recipe_id: Uuid) -> Result<Recipe> {
        match recipe_repo::find_by_id_and_delete(&self.pool, recipe_id).await? {
            Some(recipe) => Ok(recipe),
            None => Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string())),
        }
    }
}
