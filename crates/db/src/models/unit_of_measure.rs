//! Unit of measure model.

use pantry_core::domain::UnitOfMeasure;
use pantry_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `units_of_measure` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UnitOfMeasureRow {
    pub id: DbId,
    pub measurement: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<UnitOfMeasureRow> for UnitOfMeasure {
    fn from(row: UnitOfMeasureRow) -> Self {
        Self {
            id: row.id,
            measurement: row.measurement,
        }
    }
}
