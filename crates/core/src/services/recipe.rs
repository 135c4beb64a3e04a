use std::collections::HashSet;
use std::sync::Arc;

use tracing::Span;
use validator::Validate;

use super::resolve_unit;
use crate::commands::{CategoryCommand, IngredientCommand, RecipeCommand};
use crate::converters::{apply_recipe_command, ingredient_from_command, recipe_from_command};
use crate::domain::{Category, Ingredient, Recipe};
use crate::error::CoreError;
use crate::store::{CategoryStore, RecipeStore, UnitOfMeasureStore};
use crate::types::DbId;

#[derive(Clone)]
pub struct RecipeService {
    recipes: Arc<dyn RecipeStore>,
    units: Arc<dyn UnitOfMeasureStore>,
    categories: Arc<dyn CategoryStore>,
    span: Span,
}

impl RecipeService {
    pub fn new(
        recipes: Arc<dyn RecipeStore>,
        units: Arc<dyn UnitOfMeasureStore>,
        categories: Arc<dyn CategoryStore>,
        span: Span,
    ) -> Self {
        Self {
            recipes,
            units,
            categories,
            span,
        }
    }

    /// Every recipe in the store. No pagination or filtering.
    pub async fn list_all(&self) -> Result<Vec<Recipe>, CoreError> {
        tracing::debug!(parent: &self.span, "Listing recipes");
        self.recipes.find_all().await.map_err(CoreError::store)
    }

    pub async fn list_commands(&self) -> Result<Vec<RecipeCommand>, CoreError> {
        let recipes = self.list_all().await?;
        Ok(recipes.iter().map(RecipeCommand::from).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Recipe, CoreError> {
        let recipe = self.recipes.find_by_id(id).await.map_err(CoreError::store)?;
        recipe.ok_or_else(|| {
            tracing::warn!(parent: &self.span, recipe_id = id, "Recipe not found");
            CoreError::NotFound {
                entity: "Recipe",
                id,
            }
        })
    }

    pub async fn get_command_by_id(&self, id: DbId) -> Result<RecipeCommand, CoreError> {
        let recipe = self.get_by_id(id).await?;
        Ok(RecipeCommand::from(&recipe))
    }

    /// Create or update a recipe from a command.
    ///
    /// Updates overwrite scalar fields, categories and note. The persisted
    /// ingredient set is reconciled by identity only when the command carries
    /// an ingredient list; the image is never touched.
    pub async fn save(&self, command: RecipeCommand) -> Result<RecipeCommand, CoreError> {
        command.validate()?;
        if let Some(ingredients) = &command.ingredients {
            for ingredient in ingredients {
                ingredient.validate()?;
            }
        }

        let categories = self.resolve_categories(&command.categories).await?;

        let recipe = match command.id {
            None => {
                let ingredients = match &command.ingredients {
                    Some(commands) => self.build_new_ingredients(commands).await?,
                    None => Vec::new(),
                };
                recipe_from_command(&command, categories, ingredients)
            }
            Some(id) => {
                let mut existing = self.get_by_id(id).await?;
                apply_recipe_command(&mut existing, &command, categories);
                if let Some(commands) = &command.ingredients {
                    self.reconcile_ingredients(&mut existing, commands).await?;
                }
                existing
            }
        };

        let saved = self.recipes.save(recipe).await.map_err(CoreError::store)?;
        tracing::debug!(parent: &self.span, recipe_id = saved.id, "Saved recipe");
        Ok(RecipeCommand::from(&saved))
    }

    /// Delete a recipe. Deleting an absent id is not an error.
    pub async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        tracing::debug!(parent: &self.span, recipe_id = id, "Deleting recipe");
        let deleted = self.recipes.delete_by_id(id).await.map_err(CoreError::store)?;
        if !deleted {
            tracing::debug!(parent: &self.span, recipe_id = id, "Recipe already absent");
        }
        Ok(deleted)
    }

    async fn resolve_categories(
        &self,
        commands: &[CategoryCommand],
    ) -> Result<Vec<Category>, CoreError> {
        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(commands.len());
        for command in commands {
            if !seen.insert(command.id) {
                continue;
            }
            let category = self
                .categories
                .find_by_id(command.id)
                .await
                .map_err(CoreError::store)?
                .ok_or(CoreError::NotFound {
                    entity: "Category",
                    id: command.id,
                })?;
            categories.push(category);
        }
        Ok(categories)
    }

    async fn build_new_ingredients(
        &self,
        commands: &[IngredientCommand],
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut ingredients = Vec::with_capacity(commands.len());
        for command in commands {
            if let Some(id) = command.id {
                return Err(CoreError::Conflict(format!(
                    "ingredient {id} belongs to another recipe"
                )));
            }
            let unit = resolve_unit(self.units.as_ref(), command.unit_of_measure.id).await?;
            ingredients.push(ingredient_from_command(command, unit));
        }
        Ok(ingredients)
    }

    /// Replace the recipe's ingredient set with the command's, matching by
    /// identity. Persisted ingredients absent from the command are dropped.
    async fn reconcile_ingredients(
        &self,
        recipe: &mut Recipe,
        commands: &[IngredientCommand],
    ) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        let mut reconciled = Vec::with_capacity(commands.len());

        for command in commands {
            let unit = resolve_unit(self.units.as_ref(), command.unit_of_measure.id).await?;
            match command.id {
                Some(id) => {
                    if !seen.insert(id) {
                        return Err(CoreError::Validation(format!(
                            "ingredient {id} is listed more than once"
                        )));
                    }
                    let mut existing = recipe.find_ingredient(id).cloned().ok_or_else(|| {
                        CoreError::Conflict(format!(
                            "ingredient {id} does not belong to this recipe"
                        ))
                    })?;
                    existing.description = command.description.clone();
                    existing.amount = command.amount.unwrap_or_default();
                    existing.unit_of_measure = unit;
                    reconciled.push(existing);
                }
                None => {
                    let mut ingredient = ingredient_from_command(command, unit);
                    ingredient.recipe_id = recipe.id;
                    reconciled.push(ingredient);
                }
            }
        }

        let dropped = recipe
            .ingredients
            .iter()
            .filter(|i| i.id.map_or(true, |id| !seen.contains(&id)))
            .count();
        if dropped > 0 {
            tracing::debug!(
                parent: &self.span,
                recipe_id = recipe.id,
                dropped,
                "Dropping ingredients missing from the command"
            );
        }

        recipe.ingredients = reconciled;
        Ok(())
    }
}
