//! Read-only reference data routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

/// ```text
/// GET /units-of-measure                            -> lookups::list_units_of_measure
/// GET /categories                                  -> lookups::list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/units-of-measure", get(lookups::list_units_of_measure))
        .route("/categories", get(lookups::list_categories))
}
