use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::LogEntry;
use crate::{state::AppState, tracker::Action};

pub fn journal_routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries))
        .route("/entries/:id", delete(delete_entry))
}

#[instrument(skip(state))]
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<LogEntry>> {
    Json(state.session().log().entries().to_vec())
}

/// Always 204: deleting an id that is not in the log is a no-op.
#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    state.session().dispatch(Action::DeleteEntry { id });
    StatusCode::NO_CONTENT
}
