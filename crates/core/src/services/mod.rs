//! Domain services: find/convert/save orchestration over the stores.
//!
//! Every service receives its stores and a [`tracing::Span`] at
//! construction. All events a service emits use that span as their parent.

pub mod category;
pub mod image;
pub mod ingredient;
pub mod recipe;
pub mod unit_of_measure;

use std::sync::Arc;

use crate::domain::UnitOfMeasure;
use crate::error::CoreError;
use crate::store::{CategoryStore, RecipeStore, UnitOfMeasureStore};
use crate::types::DbId;

pub use category::CategoryService;
pub use image::ImageService;
pub use ingredient::{IngredientRemoval, IngredientService};
pub use recipe::RecipeService;
pub use unit_of_measure::UnitOfMeasureService;

/// The full set of services, wired to one backing store.
#[derive(Clone)]
pub struct Services {
    pub recipes: RecipeService,
    pub ingredients: IngredientService,
    pub units: UnitOfMeasureService,
    pub categories: CategoryService,
    pub images: ImageService,
}

impl Services {
    /// Wire every service to the given stores, each with its own span.
    pub fn new(
        recipes: Arc<dyn RecipeStore>,
        units: Arc<dyn UnitOfMeasureStore>,
        categories: Arc<dyn CategoryStore>,
    ) -> Self {
        Self {
            recipes: RecipeService::new(
                Arc::clone(&recipes),
                Arc::clone(&units),
                Arc::clone(&categories),
                tracing::info_span!("recipe_service"),
            ),
            ingredients: IngredientService::new(
                Arc::clone(&recipes),
                Arc::clone(&units),
                tracing::info_span!("ingredient_service"),
            ),
            units: UnitOfMeasureService::new(
                Arc::clone(&units),
                tracing::info_span!("unit_of_measure_service"),
            ),
            categories: CategoryService::new(categories, tracing::info_span!("category_service")),
            images: ImageService::new(recipes, tracing::info_span!("image_service")),
        }
    }

    /// Wire every service to a single store implementing all three traits.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: RecipeStore + UnitOfMeasureStore + CategoryStore + 'static,
    {
        Self::new(
            Arc::clone(&store) as Arc<dyn RecipeStore>,
            Arc::clone(&store) as Arc<dyn UnitOfMeasureStore>,
            store as Arc<dyn CategoryStore>,
        )
    }
}

/// Resolve the unit referenced by a command.
pub(crate) async fn resolve_unit(
    units: &dyn UnitOfMeasureStore,
    unit_id: Option<DbId>,
) -> Result<UnitOfMeasure, CoreError> {
    let unit_id = unit_id
        .ok_or_else(|| CoreError::Validation("unit_of_measure.id is required".to_string()))?;
    units
        .find_by_id(unit_id)
        .await
        .map_err(CoreError::store)?
        .ok_or(CoreError::NotFound {
            entity: "UnitOfMeasure",
            id: unit_id,
        })
}
