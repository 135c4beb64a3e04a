//! Command objects: relation-free snapshots used at the HTTP boundary.
//!
//! Commands are built per request from JSON payloads and discarded once the
//! response is produced. They carry identifiers instead of entity references.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::difficulty::Difficulty;
use crate::types::DbId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitOfMeasureCommand {
    pub id: Option<DbId>,
    #[serde(default)]
    pub measurement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCommand {
    pub id: DbId,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteCommand {
    pub id: Option<DbId>,
    #[serde(default)]
    pub recipe_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct IngredientCommand {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub recipe_id: Option<DbId>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "description must be 1-255 characters"))]
    pub description: String,
    #[serde(default)]
    #[validate(
        required(message = "amount is required"),
        range(min = 0.0, message = "amount must not be negative")
    )]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit_of_measure: UnitOfMeasureCommand,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecipeCommand {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 3, max = 255, message = "description must be 3-255 characters"))]
    pub description: String,
    #[validate(range(min = 1, max = 999, message = "prep_time must be 1-999 minutes"))]
    pub prep_time: Option<i32>,
    #[validate(range(min = 1, max = 999, message = "cook_time must be 1-999 minutes"))]
    pub cook_time: Option<i32>,
    #[validate(range(min = 1, max = 100, message = "servings must be 1-100"))]
    pub servings: Option<i32>,
    pub source: Option<String>,
    #[validate(url(message = "url must be a valid URL"))]
    pub url: Option<String>,
    pub directions: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// `None` leaves the persisted ingredient set untouched on update.
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientCommand>>,
    #[serde(default)]
    pub categories: Vec<CategoryCommand>,
    #[serde(default)]
    pub notes: Option<NoteCommand>,
    /// Read-only: whether an image has been uploaded.
    #[serde(default, skip_deserializing)]
    pub has_image: bool,
}
