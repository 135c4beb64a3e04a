//! Recipe note model.

use pantry_core::domain::Note;
use pantry_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NoteRow {
    pub id: DbId,
    pub recipe_id: DbId,
    pub recipe_notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: Some(row.id),
            recipe_notes: row.recipe_notes,
        }
    }
}
