//! Handlers for the `/recipes` resource.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use pantry_core::commands::RecipeCommand;
use pantry_core::types::DbId;

use super::recipe_location;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recipes
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<RecipeCommand>>>> {
    let recipes = state.services.recipes.list_commands().await?;
    Ok(Json(DataResponse { data: recipes }))
}

/// GET /api/v1/recipes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RecipeCommand>>> {
    let recipe = state.services.recipes.get_command_by_id(id).await?;
    Ok(Json(DataResponse { data: recipe }))
}

/// POST /api/v1/recipes
///
/// Creates the recipe when the body has no `id` (201), otherwise updates it
/// (200). Either way `Location` points at the saved recipe.
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<RecipeCommand>,
) -> AppResult<(
    StatusCode,
    [(HeaderName, String); 1],
    Json<DataResponse<RecipeCommand>>,
)> {
    let status = if input.id.is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    let saved = state.services.recipes.save(input).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::InternalError("saved recipe has no id".to_string()))?;

    Ok((
        status,
        [(LOCATION, recipe_location(id))],
        Json(DataResponse { data: saved }),
    ))
}

/// DELETE /api/v1/recipes/{id}
///
/// Responds 204 whether or not the recipe existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = state.services.recipes.delete_by_id(id).await?;
    tracing::debug!(recipe_id = id, deleted, "Recipe delete handled");
    Ok(StatusCode::NO_CONTENT)
}
