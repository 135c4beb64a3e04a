//! Repository for the `units_of_measure` table.

use pantry_core::types::DbId;
use sqlx::PgPool;

use crate::models::unit_of_measure::UnitOfMeasureRow;

/// Column list for units_of_measure queries.
const COLUMNS: &str = "id, measurement, created_at, updated_at";

/// Read-only access to units of measure (seeded by migration).
pub struct UnitOfMeasureRepo;

impl UnitOfMeasureRepo {
    /// List all units, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<UnitOfMeasureRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units_of_measure ORDER BY id");
        sqlx::query_as::<_, UnitOfMeasureRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a unit by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UnitOfMeasureRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units_of_measure WHERE id = $1");
        sqlx::query_as::<_, UnitOfMeasureRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
