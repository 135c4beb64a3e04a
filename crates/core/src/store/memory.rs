//! In-memory store used when no database is configured, and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    CategoryStore, RecipeStore, StoreResult, UnitOfMeasureStore, DEFAULT_CATEGORIES,
    DEFAULT_UNITS_OF_MEASURE,
};
use crate::domain::{Category, Recipe, UnitOfMeasure};
use crate::error::CoreError;
use crate::types::DbId;

#[derive(Debug, Default)]
struct Tables {
    recipes: BTreeMap<DbId, Recipe>,
    units: BTreeMap<DbId, UnitOfMeasure>,
    categories: BTreeMap<DbId, Category>,
    last_recipe_id: DbId,
    last_ingredient_id: DbId,
    last_note_id: DbId,
}

impl Tables {
    fn next_recipe_id(&mut self) -> DbId {
        self.last_recipe_id += 1;
        self.last_recipe_id
    }

    fn next_ingredient_id(&mut self) -> DbId {
        self.last_ingredient_id += 1;
        self.last_ingredient_id
    }

    fn next_note_id(&mut self) -> DbId {
        self.last_note_id += 1;
        self.last_note_id
    }
}

/// Implements every store trait over maps guarded by a single lock.
///
/// Identities are assigned from per-table counters starting at 1, the same
/// way BIGSERIAL columns behave.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// An empty store with no reference data.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the default units of measure and categories.
    pub fn seeded() -> Self {
        Self::with_reference_data(DEFAULT_UNITS_OF_MEASURE, DEFAULT_CATEGORIES)
    }

    /// A store preloaded with the given reference data, ids assigned from 1
    /// in slice order.
    pub fn with_reference_data(units: &[&str], categories: &[&str]) -> Self {
        let mut tables = Tables::default();
        for (id, measurement) in (1..).zip(units) {
            tables.units.insert(
                id,
                UnitOfMeasure {
                    id,
                    measurement: measurement.to_string(),
                },
            );
        }
        for (id, description) in (1..).zip(categories) {
            tables.categories.insert(
                id,
                Category {
                    id,
                    description: description.to_string(),
                },
            );
        }
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Recipe>> {
        let tables = self.tables.read().await;
        Ok(tables.recipes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Recipe>> {
        let tables = self.tables.read().await;
        Ok(tables.recipes.get(&id).cloned())
    }

    async fn save(&self, mut recipe: Recipe) -> StoreResult<Recipe> {
        let mut tables = self.tables.write().await;

        let recipe_id = match recipe.id {
            Some(id) if tables.recipes.contains_key(&id) => id,
            Some(id) => {
                return Err(Box::new(CoreError::NotFound {
                    entity: "Recipe",
                    id,
                }));
            }
            None => tables.next_recipe_id(),
        };
        recipe.id = Some(recipe_id);

        if let Some(note) = recipe.note.as_mut() {
            if note.id.is_none() {
                note.id = Some(tables.next_note_id());
            }
        }

        for ingredient in &mut recipe.ingredients {
            if ingredient.id.is_none() {
                ingredient.id = Some(tables.next_ingredient_id());
            }
            ingredient.recipe_id = Some(recipe_id);
        }

        tables.recipes.insert(recipe_id, recipe.clone());
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.recipes.remove(&id).is_some())
    }
}

#[async_trait]
impl UnitOfMeasureStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<UnitOfMeasure>> {
        let tables = self.tables.read().await;
        Ok(tables.units.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<UnitOfMeasure>> {
        let tables = self.tables.read().await;
        Ok(tables.units.get(&id).cloned())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }
}
