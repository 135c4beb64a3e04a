//! Store abstraction the domain services persist through.
//!
//! Each trait is object-safe and shared as `Arc<dyn ...>`, so the services
//! are agnostic of whether PostgreSQL or the in-memory store sits behind them.

pub mod memory;

use async_trait::async_trait;

use crate::domain::{Category, Recipe, UnitOfMeasure};
use crate::error::StoreError;
use crate::types::DbId;

pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Units of measure seeded into every fresh store.
pub const DEFAULT_UNITS_OF_MEASURE: &[&str] = &[
    "Teaspoon",
    "Tablespoon",
    "Cup",
    "Pinch",
    "Ounce",
    "Each",
    "Dash",
    "Pint",
];

/// Categories seeded into every fresh store.
pub const DEFAULT_CATEGORIES: &[&str] = &["American", "Italian", "Mexican", "Fast Food"];

/// Aggregate persistence for recipes.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every recipe, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Recipe>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Recipe>>;

    /// Persist a recipe together with its note, categories and ingredients.
    ///
    /// Inserts when `recipe.id` is `None`, otherwise updates in place. An
    /// update of a recipe that no longer exists fails; it is never
    /// re-inserted.
    /// Ingredients without an id are inserted; persisted ingredients missing
    /// from the collection are deleted. Returns the aggregate as stored,
    /// with every generated identity filled in.
    async fn save(&self, recipe: Recipe) -> StoreResult<Recipe>;

    /// Returns `true` if a recipe was removed.
    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool>;

    /// Reachability check used by the health endpoint.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
pub trait UnitOfMeasureStore: Send + Sync {
    /// Every unit, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<UnitOfMeasure>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<UnitOfMeasure>>;
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Every category, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Category>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Category>>;
}
