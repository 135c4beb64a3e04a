//! Repository for the `ingredients` table.

use pantry_core::domain::Ingredient;
use pantry_core::types::DbId;
use sqlx::PgPool;

use super::PgTransaction;
use crate::models::ingredient::IngredientRow;

/// Column list for ingredient queries, joined with `units_of_measure u`.
const JOINED_COLUMNS: &str =
    "i.id, i.recipe_id, i.description, i.amount, i.unit_of_measure_id, u.measurement";

pub struct IngredientRepo;

impl IngredientRepo {
    /// Ingredients of a recipe with their unit labels, ordered by id.
    pub async fn list_for_recipe(
        pool: &PgPool,
        recipe_id: DbId,
    ) -> Result<Vec<IngredientRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM ingredients i \
             JOIN units_of_measure u ON u.id = i.unit_of_measure_id \
             WHERE i.recipe_id = $1 \
             ORDER BY i.id"
        );
        sqlx::query_as::<_, IngredientRow>(&query)
            .bind(recipe_id)
            .fetch_all(pool)
            .await
    }

    /// Make the stored ingredient set of a recipe equal `ingredients`.
    ///
    /// Rows missing from the set are deleted (orphan cleanup), rows with an
    /// id are updated, and rows without one are inserted.
    ///
    /// An id that is not owned by `recipe_id` fails with `RowNotFound`.
    pub async fn sync_for_recipe(
        tx: &mut PgTransaction<'_>,
        recipe_id: DbId,
        ingredients: &[Ingredient],
    ) -> Result<(), sqlx::Error> {
        let keep: Vec<DbId> = ingredients.iter().filter_map(|i| i.id).collect();

        let removed = sqlx::query(
            "DELETE FROM ingredients WHERE recipe_id = $1 AND NOT (id = ANY($2))",
        )
        .bind(recipe_id)
        .bind(&keep)
        .execute(&mut **tx)
        .await?
        .rows_affected();
        if removed > 0 {
            tracing::debug!(recipe_id, removed, "Deleted orphaned ingredients");
        }

        for ingredient in ingredients {
            match ingredient.id {
                Some(id) => {
                    let updated = sqlx::query(
                        "UPDATE ingredients SET \
                            description = $3, \
                            amount = $4, \
                            unit_of_measure_id = $5 \
                         WHERE id = $1 AND recipe_id = $2",
                    )
                    .bind(id)
                    .bind(recipe_id)
                    .bind(&ingredient.description)
                    .bind(ingredient.amount)
                    .bind(ingredient.unit_of_measure.id)
                    .execute(&mut **tx)
                    .await?;
                    if updated.rows_affected() == 0 {
                        return Err(sqlx::Error::RowNotFound);
                    }
                }
                None => {
                    sqlx::query(
                        "INSERT INTO ingredients \
                            (recipe_id, description, amount, unit_of_measure_id) \
                         VALUES ($1, $2, $3, $4)",
                    )
                    .bind(recipe_id)
                    .bind(&ingredient.description)
                    .bind(ingredient.amount)
                    .bind(ingredient.unit_of_measure.id)
                    .execute(&mut **tx)
                    .await?;
                }
            }
        }

        Ok(())
    }
}
