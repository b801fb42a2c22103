use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::{FoodDefinition, FoodDraft};
use crate::{error::AppError, state::AppState};

pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/foods", get(list_foods).post(create_food))
}

#[instrument(skip(state))]
pub async fn list_foods(State(state): State<AppState>) -> Json<Vec<FoodDefinition>> {
    Json(state.session().catalog().list_all().to_vec())
}

/// POST /foods { name, calories, protein, carbs, fat }, amounts as text; blanks become 0.
#[instrument(skip(state))]
pub async fn create_food(
    State(state): State<AppState>,
    payload: Result<Json<FoodDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<FoodDefinition>), AppError> {
    let Json(draft) = payload?;
    let food = state.session().add_food(&draft);
    Ok((StatusCode::CREATED, Json(food)))
}
