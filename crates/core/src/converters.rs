//! Pure entity <-> command mapping.
//!
//! Entity-to-command conversions are `From` impls. Command-to-entity
//! conversions take the already-resolved reference data as arguments, so no
//! conversion ever reaches into a store.

use crate::commands::{
    CategoryCommand, IngredientCommand, NoteCommand, RecipeCommand, UnitOfMeasureCommand,
};
use crate::domain::{Category, Ingredient, Note, Recipe, UnitOfMeasure};

impl From<&UnitOfMeasure> for UnitOfMeasureCommand {
    fn from(unit: &UnitOfMeasure) -> Self {
        Self {
            id: Some(unit.id),
            measurement: Some(unit.measurement.clone()),
        }
    }
}

impl From<&Category> for CategoryCommand {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            description: category.description.clone(),
        }
    }
}

impl From<&Note> for NoteCommand {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            recipe_notes: note.recipe_notes.clone(),
        }
    }
}

impl From<&NoteCommand> for Note {
    fn from(command: &NoteCommand) -> Self {
        Self {
            id: command.id,
            recipe_notes: command.recipe_notes.clone(),
        }
    }
}

impl From<&Ingredient> for IngredientCommand {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            recipe_id: ingredient.recipe_id,
            description: ingredient.description.clone(),
            amount: Some(ingredient.amount),
            unit_of_measure: UnitOfMeasureCommand::from(&ingredient.unit_of_measure),
        }
    }
}

impl From<&Recipe> for RecipeCommand {
    fn from(recipe: &Recipe) -> Self {
        let mut ingredients: Vec<IngredientCommand> =
            recipe.ingredients.iter().map(IngredientCommand::from).collect();
        ingredients.sort_by_key(|i| i.id);

        Self {
            id: recipe.id,
            description: recipe.description.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            source: recipe.source.clone(),
            url: recipe.url.clone(),
            directions: recipe.directions.clone(),
            difficulty: recipe.difficulty,
            ingredients: Some(ingredients),
            categories: recipe.categories.iter().map(CategoryCommand::from).collect(),
            notes: recipe.note.as_ref().map(NoteCommand::from),
            has_image: recipe.image.is_some(),
        }
    }
}

/// Build a detached ingredient from a command and its resolved unit.
///
/// The amount defaults to zero when absent; callers validate first.
pub fn ingredient_from_command(command: &IngredientCommand, unit: UnitOfMeasure) -> Ingredient {
    Ingredient {
        id: command.id,
        description: command.description.clone(),
        amount: command.amount.unwrap_or_default(),
        unit_of_measure: unit,
        recipe_id: command.recipe_id,
    }
}

/// Copy the scalar fields, note and categories of a command onto a recipe.
///
/// Ingredients and the image are left as they are. The note always keeps
/// the recipe's persisted identity; a note id in the command is ignored.
pub fn apply_recipe_command(
    target: &mut Recipe,
    command: &RecipeCommand,
    categories: Vec<Category>,
) {
    target.description = command.description.clone();
    target.prep_time = command.prep_time;
    target.cook_time = command.cook_time;
    target.servings = command.servings;
    target.source = command.source.clone();
    target.url = command.url.clone();
    target.directions = command.directions.clone();
    target.difficulty = command.difficulty;
    target.categories = categories;

    let persisted_note_id = target.note.as_ref().and_then(|existing| existing.id);
    target.note = command.notes.as_ref().map(|notes| Note {
        id: persisted_note_id,
        ..Note::from(notes)
    });
}

/// Build a new, unsaved recipe from a command.
pub fn recipe_from_command(
    command: &RecipeCommand,
    categories: Vec<Category>,
    ingredients: Vec<Ingredient>,
) -> Recipe {
    let mut recipe = Recipe {
        id: command.id,
        ..Default::default()
    };
    apply_recipe_command(&mut recipe, command, categories);
    for ingredient in ingredients {
        recipe.add_ingredient(ingredient);
    }
    recipe
}
