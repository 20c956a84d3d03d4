use utoipa::OpenApi;

use crate::handlers::recipes::{
    CreateRecipeRequest, MessageResponse, RecipeListResponse, UpdateRecipeRequest,
};
use crate::models::{Recipe, RecipeCategory};

/// OpenAPI document covering the recipe REST endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::recipes::create_recipe,
        crate::handlers::recipes::list_recipes,
        crate::handlers::recipes::get_recipe,
        crate::handlers::recipes::update_recipe,
        crate::handlers::recipes::delete_recipe
    ),
    components(schemas(
        Recipe,
        RecipeCategory,
        CreateRecipeRequest,
        UpdateRecipeRequest,
        RecipeListResponse,
        MessageResponse
    )),
    tags(
        (name = "Recipes", description = "Recipe CRUD APIs")
    )
)]
pub struct ApiDoc;
