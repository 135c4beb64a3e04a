//! Handlers for `/recipes/{id}/image`.

use axum::extract::{Multipart, Path, State};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderName, StatusCode};
use axum::response::IntoResponse;
use pantry_core::types::DbId;

use super::recipe_location;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
const IMAGE_FIELD: &str = "imagefile";

/// Content type recorded when the upload does not declare one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// GET /api/v1/recipes/{id}/image
///
/// Streams back the stored bytes with their recorded content type.
pub async fn get(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image = state.services.images.get_image(recipe_id).await?;
    Ok(([(CONTENT_TYPE, image.content_type)], image.bytes))
}

/// POST /api/v1/recipes/{id}/image
///
/// Reads the `imagefile` part into memory and stores it on the recipe.
/// Other parts are ignored.
pub async fn upload(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, [(HeaderName, String); 1])> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field.bytes().await?;

        state
            .services
            .images
            .save_image(recipe_id, bytes.to_vec(), content_type)
            .await?;

        return Ok((
            StatusCode::CREATED,
            [(LOCATION, recipe_location(recipe_id))],
        ));
    }

    Err(AppError::BadRequest(format!(
        "multipart field '{IMAGE_FIELD}' is required"
    )))
}
