pub mod health;
pub mod lookups;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes                                         list, save
/// /recipes/{id}                                    get, delete
/// /recipes/{id}/ingredients                        list, save
/// /recipes/{id}/ingredients/new                    blank ingredient
/// /recipes/{id}/ingredients/{ingredient_id}        get, delete
/// /recipes/{id}/image                              get, upload (multipart)
///
/// /units-of-measure                                list
/// /categories                                      list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipes::router())
        .merge(lookups::router())
}
