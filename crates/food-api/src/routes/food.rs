//! Food record lookup endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::state::AppState;

/// Response for `GET /get-food-name`.
///
/// `full_data` carries the whole document, `food_name` included, so the
/// name appears twice; that duplication is part of the published shape.
#[derive(Debug, Serialize)]
pub struct FoodNameResponse {
    pub food_form_json: String,
    pub full_data: Value,
}

/// GET /get-food-name — read the backing file and extract `food_name`.
pub async fn get_food_name(State(state): State<AppState>) -> ApiResult<Json<FoodNameResponse>> {
    let record = state.store.read().await?;
    tracing::debug!(food_name = %record.food_name, "served food record");

    Ok(Json(FoodNameResponse {
        food_form_json: record.food_name,
        full_data: record.document,
    }))
}
