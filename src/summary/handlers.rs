use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    dto::{PieChart, Summary},
    services::summarize,
};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: Summary,
    pub chart: PieChart,
}

pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}

#[instrument(skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let summary = summarize(state.session().log().entries());
    let chart = summary.chart();
    Json(SummaryResponse { summary, chart })
}
