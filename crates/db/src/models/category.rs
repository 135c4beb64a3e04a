//! Category model.

use pantry_core::domain::Category;
use pantry_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
        }
    }
}
