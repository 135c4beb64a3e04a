//! Repository for the `categories` and `recipe_categories` tables.

use pantry_core::types::DbId;
use sqlx::PgPool;

use super::PgTransaction;
use crate::models::category::CategoryRow;

/// Column list for categories queries.
const COLUMNS: &str = "id, description, created_at, updated_at";

/// Column list for categories queries joined through `recipe_categories`.
const JOINED_COLUMNS: &str = "c.id, c.description, c.created_at, c.updated_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Categories assigned to a recipe, ordered by id.
    pub async fn list_for_recipe(
        pool: &PgPool,
        recipe_id: DbId,
    ) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM categories c \
             JOIN recipe_categories rc ON rc.category_id = c.id \
             WHERE rc.recipe_id = $1 \
             ORDER BY c.id"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(recipe_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a recipe's category assignments within an open transaction.
    pub async fn set_for_recipe(
        tx: &mut PgTransaction<'_>,
        recipe_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM recipe_categories WHERE recipe_id = $1")
            .bind(recipe_id)
            .execute(&mut **tx)
            .await?;

        for &category_id in category_ids {
            sqlx::query(
                "INSERT INTO recipe_categories (recipe_id, category_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(recipe_id)
            .bind(category_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
