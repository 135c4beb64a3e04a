//! Recipe model.

use pantry_core::difficulty;
use pantry_core::domain::{Category, Ingredient, Note, Recipe, RecipeImage};
use pantry_core::error::CoreError;
use pantry_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `recipes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeRow {
    pub id: DbId,
    pub description: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub directions: Option<String>,
    /// Persistence code, see [`pantry_core::difficulty`].
    pub difficulty: Option<String>,
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RecipeRow {
    /// Assemble the aggregate from this row and its child rows.
    ///
    /// Fails if the stored difficulty code is not a known one.
    pub fn into_recipe(
        self,
        ingredients: Vec<Ingredient>,
        categories: Vec<Category>,
        note: Option<Note>,
    ) -> Result<Recipe, CoreError> {
        let difficulty = difficulty::decode(self.difficulty.as_deref())?;
        let image = match (self.image, self.image_content_type) {
            (Some(bytes), content_type) => Some(RecipeImage {
                content_type: content_type.unwrap_or_else(|| "application/octet-stream".to_string()),
                bytes,
            }),
            (None, _) => None,
        };

        Ok(Recipe {
            id: Some(self.id),
            description: self.description,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            source: self.source,
            url: self.url,
            directions: self.directions,
            difficulty,
            ingredients,
            categories,
            note,
            image,
        })
    }
}
