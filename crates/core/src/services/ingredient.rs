//! Ingredient save/update/delete reconciliation against a recipe's
//! ingredient collection.

use std::sync::Arc;

use serde::Serialize;
use tracing::Span;
use validator::Validate;

use super::resolve_unit;
use crate::commands::{IngredientCommand, UnitOfMeasureCommand};
use crate::converters::ingredient_from_command;
use crate::domain::{Ingredient, Recipe};
use crate::error::CoreError;
use crate::store::{RecipeStore, UnitOfMeasureStore};
use crate::types::DbId;

/// Outcome of deleting an ingredient from a recipe.
///
/// Absent recipes and ingredients are reported rather than raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngredientRemoval {
    /// The ingredient was detached and the recipe saved. The command
    /// reflects the detached ingredient (`recipe_id` is `None`).
    Removed { ingredient: IngredientCommand },
    RecipeAbsent,
    IngredientAbsent,
}

#[derive(Clone)]
pub struct IngredientService {
    recipes: Arc<dyn RecipeStore>,
    units: Arc<dyn UnitOfMeasureStore>,
    span: Span,
}

impl IngredientService {
    pub fn new(
        recipes: Arc<dyn RecipeStore>,
        units: Arc<dyn UnitOfMeasureStore>,
        span: Span,
    ) -> Self {
        Self {
            recipes,
            units,
            span,
        }
    }

    async fn load_recipe(&self, recipe_id: DbId) -> Result<Option<Recipe>, CoreError> {
        self.recipes
            .find_by_id(recipe_id)
            .await
            .map_err(CoreError::store)
    }

    async fn require_recipe(&self, recipe_id: DbId) -> Result<Recipe, CoreError> {
        self.load_recipe(recipe_id).await?.ok_or_else(|| {
            tracing::warn!(parent: &self.span, recipe_id, "Recipe not found");
            CoreError::NotFound {
                entity: "Recipe",
                id: recipe_id,
            }
        })
    }

    pub async fn find_by_recipe_id_and_ingredient_id(
        &self,
        recipe_id: DbId,
        ingredient_id: DbId,
    ) -> Result<IngredientCommand, CoreError> {
        let recipe = self.require_recipe(recipe_id).await?;
        let ingredient = recipe.find_ingredient(ingredient_id).ok_or_else(|| {
            tracing::warn!(parent: &self.span, recipe_id, ingredient_id, "Ingredient not found");
            CoreError::NotFound {
                entity: "Ingredient",
                id: ingredient_id,
            }
        })?;
        Ok(IngredientCommand::from(ingredient))
    }

    /// Every ingredient of a recipe, ordered by id.
    pub async fn list_for_recipe(
        &self,
        recipe_id: DbId,
    ) -> Result<Vec<IngredientCommand>, CoreError> {
        let recipe = self.require_recipe(recipe_id).await?;
        let mut ingredients: Vec<IngredientCommand> =
            recipe.ingredients.iter().map(IngredientCommand::from).collect();
        ingredients.sort_by_key(|i| i.id);
        Ok(ingredients)
    }

    /// A blank command for adding an ingredient to an existing recipe.
    pub async fn new_for_recipe(&self, recipe_id: DbId) -> Result<IngredientCommand, CoreError> {
        self.require_recipe(recipe_id).await?;
        Ok(IngredientCommand {
            recipe_id: Some(recipe_id),
            unit_of_measure: UnitOfMeasureCommand::default(),
            ..Default::default()
        })
    }

    /// Add a new ingredient to its recipe, or update an existing one in place.
    ///
    /// The recipe is persisted as a whole. The saved ingredient is then
    /// located in the stored aggregate by id, falling back to its field
    /// values for freshly inserted ingredients.
    pub async fn save(&self, command: IngredientCommand) -> Result<IngredientCommand, CoreError> {
        command.validate()?;
        let recipe_id = command
            .recipe_id
            .ok_or_else(|| CoreError::Validation("recipe_id is required".to_string()))?;

        let mut recipe = self.require_recipe(recipe_id).await?;
        let unit = resolve_unit(self.units.as_ref(), command.unit_of_measure.id).await?;
        let prior_ids = recipe.ingredient_ids();

        match command.id {
            Some(ingredient_id) => {
                let existing = recipe.find_ingredient_mut(ingredient_id).ok_or_else(|| {
                    CoreError::Conflict(format!(
                        "ingredient {ingredient_id} does not belong to recipe {recipe_id}"
                    ))
                })?;
                existing.description = command.description.clone();
                existing.amount = command.amount.unwrap_or_default();
                existing.unit_of_measure = unit;
                tracing::debug!(parent: &self.span, recipe_id, ingredient_id, "Updating ingredient");
            }
            None => {
                recipe.add_ingredient(ingredient_from_command(&command, unit));
                tracing::debug!(parent: &self.span, recipe_id, "Adding ingredient");
            }
        }

        let saved = self.recipes.save(recipe).await.map_err(CoreError::store)?;

        let located = locate_saved_ingredient(&saved, &command, &prior_ids).ok_or_else(|| {
            tracing::error!(parent: &self.span, recipe_id, "Saved ingredient missing from recipe");
            CoreError::Internal(format!(
                "saved ingredient could not be located in recipe {recipe_id}"
            ))
        })?;

        tracing::debug!(
            parent: &self.span,
            recipe_id,
            ingredient_id = located.id,
            "Saved ingredient"
        );
        Ok(IngredientCommand::from(located))
    }

    /// Detach an ingredient from its recipe and persist the recipe.
    pub async fn delete_by_id(
        &self,
        recipe_id: DbId,
        ingredient_id: DbId,
    ) -> Result<IngredientRemoval, CoreError> {
        tracing::debug!(parent: &self.span, recipe_id, ingredient_id, "Deleting ingredient");

        let Some(mut recipe) = self.load_recipe(recipe_id).await? else {
            tracing::debug!(parent: &self.span, recipe_id, "Recipe not found, nothing to delete");
            return Ok(IngredientRemoval::RecipeAbsent);
        };

        let Some(removed) = recipe.remove_ingredient(ingredient_id) else {
            tracing::debug!(
                parent: &self.span,
                recipe_id,
                ingredient_id,
                "Ingredient not found, nothing to delete"
            );
            return Ok(IngredientRemoval::IngredientAbsent);
        };

        self.recipes.save(recipe).await.map_err(CoreError::store)?;
        Ok(IngredientRemoval::Removed {
            ingredient: IngredientCommand::from(&removed),
        })
    }
}

/// Find the ingredient a command was saved as.
///
/// Tries the command's identity first. Otherwise matches on description,
/// amount and unit, preferring ingredients whose identity did not exist
/// before the save. With duplicate ingredients the match may be the wrong
/// record; a later fetch by id returns the authoritative state.
fn locate_saved_ingredient<'a>(
    saved: &'a Recipe,
    command: &IngredientCommand,
    prior_ids: &[DbId],
) -> Option<&'a Ingredient> {
    if let Some(found) = command.id.and_then(|id| saved.find_ingredient(id)) {
        return Some(found);
    }

    let unit_id = command.unit_of_measure.id?;
    let amount = command.amount.unwrap_or_default();
    let mut candidates = saved
        .ingredients
        .iter()
        .filter(|i| i.matches_fields(&command.description, amount, unit_id));

    let first = candidates.clone().next();
    candidates
        .find(|i| i.id.is_some_and(|id| !prior_ids.contains(&id)))
        .or(first)
}
