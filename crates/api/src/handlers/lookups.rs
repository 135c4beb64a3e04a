use axum::extract::State;
use axum::Json;
use pantry_core::commands::{CategoryCommand, UnitOfMeasureCommand};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/units-of-measure
pub async fn list_units_of_measure(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UnitOfMeasureCommand>>>> {
    let units = state.services.units.list_all().await?;
    Ok(Json(DataResponse { data: units }))
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CategoryCommand>>>> {
    let categories = state.services.categories.list_all().await?;
    Ok(Json(DataResponse { data: categories }))
}
