/// Recipe handlers - HTTP endpoints for recipe CRUD operations
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{NewRecipe, Recipe, RecipeCategory, RecipePatch};
use crate::services::RecipeService;
use crate::validators;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[validate(length(min = 3, max = 255, message = "title must be between 3 and 255 characters"))]
    pub title: String,
    #[validate(
        length(min = 1, message = "ingredients must contain at least 1 item"),
        custom(function = "crate::validators::validate_ingredients")
    )]
    pub ingredients: Vec<String>,
    #[validate(length(min = 10, message = "instructions must be at least 10 characters"))]
    pub instructions: String,
    #[validate(custom(function = "crate::validators::validate_category"))]
    pub category: String,
    #[validate(range(min = 1, message = "cookingTime must be at least 1"))]
    pub cooking_time: i32,
}

impl CreateRecipeRequest {
    fn into_new_recipe(self) -> Result<NewRecipe> {
        let category = RecipeCategory::parse(&self.category)
            .ok_or_else(|| AppError::Validation(validators::CATEGORY_MESSAGE.to_string()))?;

        Ok(NewRecipe {
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            category,
            cooking_time: self.cooking_time,
        })
    }
}

/// Partial or full update; absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 3, max = 255, message = "title must be between 3 and 255 characters"))]
    pub title: Option<String>,
    #[validate(
        length(min = 1, message = "ingredients must contain at least 1 item"),
        custom(function = "crate::validators::validate_ingredients")
    )]
    pub ingredients: Option<Vec<String>>,
    #[validate(length(min = 10, message = "instructions must be at least 10 characters"))]
    pub instructions: Option<String>,
    #[validate(custom(function = "crate::validators::validate_category"))]
    pub category: Option<String>,
    #[validate(range(min = 1, message = "cookingTime must be at least 1"))]
    pub cooking_time: Option<i32>,
}

impl UpdateRecipeRequest {
    fn into_patch(self) -> Result<RecipePatch> {
        let category = match self.category {
            Some(value) => Some(
                RecipeCategory::parse(&value)
                    .ok_or_else(|| AppError::BadRequest(validators::CATEGORY_MESSAGE.to_string()))?,
            ),
            None => None,
        };

        Ok(RecipePatch {
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            category,
            cooking_time: self.cooking_time,
        })
    }
}

/// Pagination query parameters, kept as raw text so malformed or
/// non-positive values fall back to the defaults instead of failing.
#[derive(Debug, Deserialize)]
pub struct ListRecipesQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl ListRecipesQuery {
    fn page(&self) -> i64 {
        parse_positive(self.page.as_deref(), DEFAULT_PAGE)
    }

    fn page_size(&self) -> i64 {
        parse_positive(self.page_size.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

fn parse_positive(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if total_items == 0 {
        0
    } else {
        total_items.saturating_add(page_size - 1) / page_size
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListResponse {
    pub total_items: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub recipes: Vec<Recipe>,
}

/// Confirmation or error payload
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a new recipe
#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "Recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Validation failed", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_recipe(
    pool: web::Data<PgPool>,
    req: web::Json<CreateRecipeRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    req.validate()
        .map_err(|errors| AppError::Validation(validators::first_violation_message(&errors)))?;

    let service = RecipeService::new(pool.get_ref().clone());
    let recipe = service.create_recipe(req.into_new_recipe()?).await?;

    Ok(HttpResponse::Created().json(recipe))
}

/// List recipes with pagination
#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "Recipes",
    params(
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1"),
        ("pageSize" = Option<String>, Query, description = "Page size, defaults to 10"),
    ),
    responses(
        (status = 200, description = "One page of recipes", body = RecipeListResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_recipes(
    pool: web::Data<PgPool>,
    query: web::Query<ListRecipesQuery>,
) -> Result<HttpResponse> {
    let page = query.page();
    let page_size = query.page_size();

    let service = RecipeService::new(pool.get_ref().clone());
    let (recipes, total_items) = service.list_recipes(page, page_size).await?;

    Ok(HttpResponse::Ok().json(RecipeListResponse {
        total_items,
        current_page: page,
        total_pages: total_pages(total_items, page_size),
        recipes,
    }))
}

/// Get a recipe by ID
#[utoipa::path(
    get,
    path = "/api/v1/recipes/{recipe_id}",
    tag = "Recipes",
    params(("recipe_id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe found", body = Recipe),
        (status = 404, description = "No recipe with that id", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn get_recipe(
    pool: web::Data<PgPool>,
    recipe_id: web::Path<String>,
) -> Result<HttpResponse> {
    // A malformed id is indistinguishable from a store failure to callers
    let recipe_id = Uuid::parse_str(&recipe_id)
        .map_err(|err| AppError::Database(err.to_string()))?;

    let service = RecipeService::new(pool.get_ref().clone());
    let recipe = service.get_recipe(recipe_id).await?;

    Ok(HttpResponse::Ok().json(recipe))
}

/// Update a recipe
#[utoipa::path(
    put,
    path = "/api/v1/recipes/{recipe_id}",
    tag = "Recipes",
    params(("recipe_id" = String, Path, description = "Recipe id")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe", body = Recipe),
        (status = 400, description = "Validation or store failure", body = MessageResponse),
        (status = 404, description = "No recipe with that id", body = MessageResponse)
    )
)]
pub async fn update_recipe(
    pool: web::Data<PgPool>,
    recipe_id: web::Path<String>,
    req: web::Json<UpdateRecipeRequest>,
) -> Result<HttpResponse> {
    // Update surfaces every non-404 failure as a client error
    let recipe_id = Uuid::parse_str(&recipe_id)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let req = req.into_inner();
    req.validate()
        .map_err(|errors| AppError::BadRequest(validators::first_violation_message(&errors)))?;

    let service = RecipeService::new(pool.get_ref().clone());
    let recipe = service.update_recipe(recipe_id, req.into_patch()?).await?;

    Ok(HttpResponse::Ok().json(recipe))
}

/// Delete a recipe
#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{recipe_id}",
    tag = "Recipes",
    params(("recipe_id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 404, description = "No recipe with that id", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn delete_recipe(
    pool: web::Data<PgPool>,
    recipe_id: web::Path<String>,
) -> Result<HttpResponse> {
    let recipe_id = Uuid::parse_str(&recipe_id)
        .map_err(|err| AppError::Database(err.to_string()))?;

    let service = RecipeService::new(pool.get_ref().clone());
    service.delete_recipe(recipe_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_defaults() {
        assert_eq!(parse_positive(None, DEFAULT_PAGE), 1);
        assert_eq!(parse_positive(Some("abc"), DEFAULT_PAGE_SIZE), 10);
        assert_eq!(parse_positive(Some(""), DEFAULT_PAGE_SIZE), 10);
        assert_eq!(parse_positive(Some("0"), DEFAULT_PAGE), 1);
        assert_eq!(parse_positive(Some("-3"), DEFAULT_PAGE), 1);
    }

    #[test]
    fn test_parse_positive_accepts_values() {
        assert_eq!(parse_positive(Some("2"), DEFAULT_PAGE), 2);
        assert_eq!(parse_positive(Some(" 25 "), DEFAULT_PAGE_SIZE), 25);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, i64::MAX), 1);
    }
}
