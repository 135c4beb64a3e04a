//! Repository for the `notes` table.

use pantry_core::domain::Note;
use pantry_core::types::DbId;
use sqlx::PgPool;

use super::PgTransaction;
use crate::models::note::NoteRow;

/// Column list for notes queries.
const COLUMNS: &str = "id, recipe_id, recipe_notes, created_at, updated_at";

pub struct NoteRepo;

impl NoteRepo {
    pub async fn find_for_recipe(
        pool: &PgPool,
        recipe_id: DbId,
    ) -> Result<Option<NoteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE recipe_id = $1");
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(recipe_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert or remove a recipe's note within an open transaction.
    ///
    /// A recipe has at most one note, so the existing row keeps its id.
    pub async fn replace_for_recipe(
        tx: &mut PgTransaction<'_>,
        recipe_id: DbId,
        note: Option<&Note>,
    ) -> Result<(), sqlx::Error> {
        match note {
            Some(note) => {
                sqlx::query(
                    "INSERT INTO notes (recipe_id, recipe_notes) VALUES ($1, $2) \
                     ON CONFLICT (recipe_id) DO UPDATE SET recipe_notes = EXCLUDED.recipe_notes",
                )
                .bind(recipe_id)
                .bind(&note.recipe_notes)
                .execute(&mut **tx)
                .await?;
            }
            None => {
                sqlx::query("DELETE FROM notes WHERE recipe_id = $1")
                    .bind(recipe_id)
                    .execute(&mut **tx)
                    .await?;
            }
        }
        Ok(())
    }
}
