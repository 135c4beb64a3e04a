//! Repository for the `recipes` table.

use pantry_core::difficulty;
use pantry_core::domain::Recipe;
use pantry_core::types::DbId;
use sqlx::PgPool;

use super::PgTransaction;
use crate::models::recipe::RecipeRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, prep_time, cook_time, servings, source, url, \
    directions, difficulty, image, image_content_type, created_at, updated_at";

/// Provides CRUD operations for the recipe root row.
///
/// Child rows (note, categories, ingredients) are written by their own
/// repositories inside the same transaction.
pub struct RecipeRepo;

impl RecipeRepo {
    /// List all recipes, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<RecipeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id");
        sqlx::query_as::<_, RecipeRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RecipeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, RecipeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new recipe row, returning its generated id.
    pub async fn insert(tx: &mut PgTransaction<'_>, recipe: &Recipe) -> Result<DbId, sqlx::Error> {
        let (content_type, bytes) = image_parts(recipe);
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO recipes
                (description, prep_time, cook_time, servings, source, url,
                 directions, difficulty, image, image_content_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(&recipe.description)
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.servings)
        .bind(&recipe.source)
        .bind(&recipe.url)
        .bind(&recipe.directions)
        .bind(difficulty::encode(recipe.difficulty))
        .bind(bytes)
        .bind(content_type)
        .fetch_one(&mut **tx)
        .await?;
        Ok(id)
    }

    /// Overwrite every column of an existing recipe row.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        tx: &mut PgTransaction<'_>,
        id: DbId,
        recipe: &Recipe,
    ) -> Result<bool, sqlx::Error> {
        let (content_type, bytes) = image_parts(recipe);
        let result = sqlx::query(
            "UPDATE recipes SET
                description = $2,
                prep_time = $3,
                cook_time = $4,
                servings = $5,
                source = $6,
                url = $7,
                directions = $8,
                difficulty = $9,
                image = $10,
                image_content_type = $11
             WHERE id = $1",
        )
        .bind(id)
        .bind(&recipe.description)
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.servings)
        .bind(&recipe.source)
        .bind(&recipe.url)
        .bind(&recipe.directions)
        .bind(difficulty::encode(recipe.difficulty))
        .bind(bytes)
        .bind(content_type)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a recipe by ID. Child rows go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn image_parts(recipe: &Recipe) -> (Option<&str>, Option<&[u8]>) {
    match &recipe.image {
        Some(image) => (Some(image.content_type.as_str()), Some(image.bytes.as_slice())),
        None => (None, None),
    }
}
