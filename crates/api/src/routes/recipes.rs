//! Route definitions for recipes and their nested ingredients and image.

use axum::routing::get;
use axum::Router;

use crate::handlers::{images, ingredients, recipes};
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /                                         -> recipes::list
/// POST   /                                         -> recipes::save
/// GET    /{id}                                     -> recipes::get_by_id
/// DELETE /{id}                                     -> recipes::delete
/// GET    /{id}/ingredients                         -> ingredients::list
/// POST   /{id}/ingredients                         -> ingredients::save
/// GET    /{id}/ingredients/new                     -> ingredients::new_form
/// GET    /{id}/ingredients/{ingredient_id}         -> ingredients::get_by_id
/// DELETE /{id}/ingredients/{ingredient_id}         -> ingredients::delete
/// GET    /{id}/image                               -> images::get
/// POST   /{id}/image                               -> images::upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list).post(recipes::save))
        .route("/{id}", get(recipes::get_by_id).delete(recipes::delete))
        .route(
            "/{id}/ingredients",
            get(ingredients::list).post(ingredients::save),
        )
        .route("/{id}/ingredients/new", get(ingredients::new_form))
        .route(
            "/{id}/ingredients/{ingredient_id}",
            get(ingredients::get_by_id).delete(ingredients::delete),
        )
        .route("/{id}/image", get(images::get).post(images::upload))
}
