//! Persistent recipe entities.
//!
//! A [`Recipe`] is the aggregate root: it owns its ingredients, note and
//! image, and references shared categories. Ingredients point back at their
//! recipe through `recipe_id` only; the recipe owns the relation.

use crate::difficulty::Difficulty;
use crate::types::DbId;

/// Reference data: a unit ingredients are measured in.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOfMeasure {
    pub id: DbId,
    pub measurement: String,
}

/// Reference data shared across recipes.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: DbId,
    pub description: String,
}

/// Free-form notes owned by a single recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: Option<DbId>,
    pub recipe_notes: String,
}

/// Uploaded image payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    /// `None` until the store assigns an identity on insert.
    pub id: Option<DbId>,
    pub description: String,
    pub amount: f64,
    pub unit_of_measure: UnitOfMeasure,
    /// Back-reference to the owning recipe. Cleared when detached.
    pub recipe_id: Option<DbId>,
}

impl Ingredient {
    /// Whether this ingredient has the given description, amount and unit.
    pub fn matches_fields(&self, description: &str, amount: f64, unit_id: DbId) -> bool {
        self.description == description && self.amount == amount && self.unit_of_measure.id == unit_id
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub id: Option<DbId>,
    pub description: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub directions: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<Category>,
    pub note: Option<Note>,
    pub image: Option<RecipeImage>,
}

impl Recipe {
    /// Find an ingredient by identity. Unsaved ingredients never match.
    pub fn find_ingredient(&self, ingredient_id: DbId) -> Option<&Ingredient> {
        self.ingredients
            .iter()
            .find(|ingredient| ingredient.id == Some(ingredient_id))
    }

    pub fn find_ingredient_mut(&mut self, ingredient_id: DbId) -> Option<&mut Ingredient> {
        self.ingredients
            .iter_mut()
            .find(|ingredient| ingredient.id == Some(ingredient_id))
    }

    /// Attach an ingredient, pointing its back-reference at this recipe.
    pub fn add_ingredient(&mut self, mut ingredient: Ingredient) {
        ingredient.recipe_id = self.id;
        self.ingredients.push(ingredient);
    }

    /// Detach an ingredient by identity, clearing its back-reference.
    pub fn remove_ingredient(&mut self, ingredient_id: DbId) -> Option<Ingredient> {
        let index = self
            .ingredients
            .iter()
            .position(|ingredient| ingredient.id == Some(ingredient_id))?;
        let mut removed = self.ingredients.remove(index);
        removed.recipe_id = None;
        Some(removed)
    }

    /// Identities of every persisted ingredient in the collection.
    pub fn ingredient_ids(&self) -> Vec<DbId> {
        self.ingredients.iter().filter_map(|i| i.id).collect()
    }
}
