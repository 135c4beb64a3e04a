use std::sync::Arc;

use tracing::Span;

use crate::domain::RecipeImage;
use crate::error::CoreError;
use crate::store::RecipeStore;
use crate::types::DbId;

/// Stores and serves the single image attached to a recipe.
#[derive(Clone)]
pub struct ImageService {
    recipes: Arc<dyn RecipeStore>,
    span: Span,
}

impl ImageService {
    pub fn new(recipes: Arc<dyn RecipeStore>, span: Span) -> Self {
        Self { recipes, span }
    }

    /// Replace a recipe's image with the given bytes. No size or format checks.
    pub async fn save_image(
        &self,
        recipe_id: DbId,
        bytes: Vec<u8>,
        content_type: String,
    ) -> Result<(), CoreError> {
        let mut recipe = self
            .recipes
            .find_by_id(recipe_id)
            .await
            .map_err(CoreError::store)?
            .ok_or(CoreError::NotFound {
                entity: "Recipe",
                id: recipe_id,
            })?;

        let size = bytes.len();
        recipe.image = Some(RecipeImage {
            content_type,
            bytes,
        });
        self.recipes.save(recipe).await.map_err(CoreError::store)?;

        tracing::debug!(parent: &self.span, recipe_id, size, "Stored recipe image");
        Ok(())
    }

    pub async fn get_image(&self, recipe_id: DbId) -> Result<RecipeImage, CoreError> {
        let recipe = self
            .recipes
            .find_by_id(recipe_id)
            .await
            .map_err(CoreError::store)?
            .ok_or(CoreError::NotFound {
                entity: "Recipe",
                id: recipe_id,
            })?;

        recipe.image.ok_or(CoreError::NotFound {
            entity: "RecipeImage",
            id: recipe_id,
        })
    }
}
