//! Ingredient model.

use pantry_core::domain::{Ingredient, UnitOfMeasure};
use pantry_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// An `ingredients` row joined with its unit's measurement label.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IngredientRow {
    pub id: DbId,
    pub recipe_id: DbId,
    pub description: String,
    pub amount: f64,
    pub unit_of_measure_id: DbId,
    pub measurement: String,
}

impl From<IngredientRow> for Ingredient {
    fn from(row: IngredientRow) -> Self {
        Self {
            id: Some(row.id),
            description: row.description,
            amount: row.amount,
            unit_of_measure: UnitOfMeasure {
                id: row.unit_of_measure_id,
                measurement: row.measurement,
            },
            recipe_id: Some(row.recipe_id),
        }
    }
}
