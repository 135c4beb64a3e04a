//! Handlers for `/recipes/{id}/ingredients`.
//!
//! The recipe id always comes from the URL path. A body carrying a
//! different `recipe_id` is rejected.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::HeaderName;
use axum::Json;
use pantry_core::commands::IngredientCommand;
use pantry_core::services::IngredientRemoval;
use pantry_core::types::DbId;

use super::ingredient_location;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recipes/{id}/ingredients
pub async fn list(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<IngredientCommand>>>> {
    let ingredients = state.services.ingredients.list_for_recipe(recipe_id).await?;
    Ok(Json(DataResponse { data: ingredients }))
}

/// GET /api/v1/recipes/{id}/ingredients/new
pub async fn new_form(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<Json<DataResponse<IngredientCommand>>> {
    let blank = state.services.ingredients.new_for_recipe(recipe_id).await?;
    Ok(Json(DataResponse { data: blank }))
}

/// GET /api/v1/recipes/{id}/ingredients/{ingredient_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((recipe_id, ingredient_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<IngredientCommand>>> {
    let ingredient = state
        .services
        .ingredients
        .find_by_recipe_id_and_ingredient_id(recipe_id, ingredient_id)
        .await?;
    Ok(Json(DataResponse { data: ingredient }))
}

/// POST /api/v1/recipes/{id}/ingredients
///
/// Creates or updates an ingredient. `Location` points at the saved one.
pub async fn save(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
    Json(mut input): Json<IngredientCommand>,
) -> AppResult<([(HeaderName, String); 1], Json<DataResponse<IngredientCommand>>)> {
    if let Some(body_id) = input.recipe_id.filter(|&id| id != recipe_id) {
        return Err(AppError::BadRequest(format!(
            "recipe_id {body_id} in body does not match recipe {recipe_id} in path"
        )));
    }
    input.recipe_id = Some(recipe_id);

    let saved = state.services.ingredients.save(input).await?;
    let ingredient_id = saved
        .id
        .ok_or_else(|| AppError::InternalError("saved ingredient has no id".to_string()))?;

    Ok((
        [(LOCATION, ingredient_location(recipe_id, ingredient_id))],
        Json(DataResponse { data: saved }),
    ))
}

/// DELETE /api/v1/recipes/{id}/ingredients/{ingredient_id}
///
/// Absent recipes and ingredients are reported in the body, not as errors.
pub async fn delete(
    State(state): State<AppState>,
    Path((recipe_id, ingredient_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<IngredientRemoval>>> {
    let outcome = state
        .services
        .ingredients
        .delete_by_id(recipe_id, ingredient_id)
        .await?;
    Ok(Json(DataResponse { data: outcome }))
}
