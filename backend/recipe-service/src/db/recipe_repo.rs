use crate::models::{NewRecipe, Recipe, RecipePatch};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Insert a new recipe; the store assigns id and timestamps.
/// Returns the created recipe.
pub async fn create(pool: &PgPool, recipe: &NewRecipe) -> Result<Recipe, sqlx::Error> {
    let recipe = sqlx::query_as::<_, Recipe>(
        r#"
        INSERT INTO recipes (title, ingredients, instructions, category, cooking_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, ingredients, instructions, category, cooking_time,
                  created_at, updated_at
        "#,
    )
    .bind(&recipe.title)
    .bind(&recipe.ingredients)
    .bind(&recipe.instructions)
    .bind(recipe.category)
    .bind(recipe.cooking_time)
    .fetch_one(pool)
    .await?;

    Ok(recipe)
}

/// Fetch one page of recipes in insertion order
pub async fn find_page(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Recipe>, sqlx::Error> {
    let recipes = sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, title, ingredients, instructions, category, cooking_time,
               created_at, updated_at
        FROM recipes
        ORDER BY created_at, id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(recipes)
}

/// Count all recipes in the store
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM recipes")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Find a recipe by id
pub async fn find_by_id(pool: &PgPool, recipe_id: Uuid) -> Result<Option<Recipe>, sqlx::Error> {
    let recipe = sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, title, ingredients, instructions, category, cooking_time,
               created_at, updated_at
        FROM recipes
        WHERE id = $1
        "#,
    )
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?;

    Ok(recipe)
}

/// Apply a partial update and return the post-update recipe.
/// `None` patch fields keep their stored value.
pub async fn find_by_id_and_update(
    pool: &PgPool,
    recipe_id: Uuid,
    patch: &RecipePatch,
) -> Result<Option<Recipe>, sqlx::Error> {
    let recipe = sqlx::query_as::<_, Recipe>(
        r#"
        UPDATE recipes
        SET title = COALESCE($2, title),
            ingredients = COALESCE($3, ingredients),
            instructions = COALESCE($4, instructions),
            category = COALESCE($5, category),
            cooking_time = COALESCE($6, cooking_time),
            updated_at = now()
        WHERE id = $1
        RETURNING id, title, ingredients, instructions, category, cooking_time,
                  created_at, updated_at
        "#,
    )
    .bind(recipe_id)
    .bind(patch.title.as_deref())
    .bind(patch.ingredients.as_ref())
    .bind(patch.instructions.as_deref())
    .bind(patch.category)
    .bind(patch.cooking_time)
    .fetch_optional(pool)
    .await?;

    Ok(recipe)
}

/// Delete a recipe by id, returning the removed row
pub async fn find_by_id_and_delete(
    pool: &PgPool,
    recipe_id: Uuid,
) -> Result<Option<Recipe>, sqlx::Error> {
    let recipe = sqlx::query_as::<_, Recipe>(
        r#"
        DELETE FROM recipes
        WHERE id = $1
        RETURNING id, title, ingredients, instructions, category, cooking_time,
                  created_at, updated_at
        "#,
    )
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?;

    Ok(recipe)
}
