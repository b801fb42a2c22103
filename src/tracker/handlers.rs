use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    actions::{Action, Outcome},
    view::View,
};
use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub outcome: Outcome,
    pub view: View,
}

pub fn tracker_routes() -> Router<AppState> {
    Router::new()
        .route("/view", get(get_view))
        .route("/actions", post(post_action))
}

#[instrument(skip(state))]
pub async fn get_view(State(state): State<AppState>) -> Json<View> {
    Json(state.session().render())
}

/// POST /actions with one [`Action`]; answers with what happened and the re-rendered view.
#[instrument(skip(state))]
pub async fn post_action(
    State(state): State<AppState>,
    payload: Result<Json<Action>, JsonRejection>,
) -> Result<Json<ActionResponse>, AppError> {
    let Json(action) = payload?;
    let mut tracker = state.session();
    let outcome = tracker.dispatch(action);
    let view = tracker.render();
    Ok(Json(ActionResponse { outcome, view }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{app::build_app, tracker::actions::IgnoredReason};

    async fn post(app: &Router, body: Value) -> (StatusCode, Option<ActionResponse>) {
        let req = Request::post("/api/v1/actions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).ok())
    }

    async fn act(app: &Router, body: Value) -> ActionResponse {
        let (status, res) = post(app, body).await;
        assert_eq!(status, StatusCode::OK);
        res.expect("action response")
    }

    #[tokio::test]
    async fn get_view_renders_initial_screen() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(Request::get("/api/v1/view").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let view: View = serde_json::from_slice(&body).unwrap();
        assert_eq!(view.form.foods.len(), 4);
        assert!(view.entries.is_empty());
    }

    #[tokio::test]
    async fn add_entry_flow_over_http() {
        let app = build_app(AppState::fake());
        act(&app, json!({"type": "select_meal_type", "meal_type": "Breakfast"})).await;
        act(&app, json!({"type": "select_food", "food_id": 1})).await;
        act(&app, json!({"type": "set_quantity", "quantity": "2"})).await;
        let res = act(&app, json!({"type": "add_entry"})).await;

        assert!(matches!(res.outcome, Outcome::EntryAdded { .. }));
        assert_eq!(res.view.entries.len(), 1);
        assert_eq!(res.view.entries[0].primary, "2x Apple");
        assert_eq!(res.view.entries[0].secondary, "190 cal (Breakfast)");
        assert_eq!(res.view.summary.total_calories, 190.0);
        assert_eq!(res.view.form.selected_food, None);
        assert_eq!(res.view.form.quantity, 1);
    }

    #[tokio::test]
    async fn add_entry_without_food_reports_ignored() {
        let app = build_app(AppState::fake());
        let res = act(&app, json!({"type": "add_entry"})).await;
        assert_eq!(
            res.outcome,
            Outcome::Ignored {
                reason: IgnoredReason::NoFoodSelected
            }
        );
        assert!(res.view.entries.is_empty());
    }

    #[tokio::test]
    async fn custom_food_modal_flow_over_http() {
        let app = build_app(AppState::fake());
        let res = act(&app, json!({"type": "open_modal"})).await;
        assert!(res.view.modal.open);

        for (field, value) in [
            ("name", "Test Bar"),
            ("calories", "200"),
            ("protein", "10"),
            ("carbs", "20"),
            ("fat", "5"),
        ] {
            act(&app, json!({"type": "edit_draft", "field": field, "value": value})).await;
        }
        let res = act(&app, json!({"type": "add_custom_food"})).await;
        assert!(!res.view.modal.open);
        assert_eq!(res.view.modal.draft.name, "");
        let last = res.view.form.foods.last().expect("foods");
        assert_eq!(last.label, "Test Bar (200 cal)");
    }

    #[tokio::test]
    async fn unknown_action_is_rejected_by_the_extractor() {
        let app = build_app(AppState::fake());
        let (status, res) = post(&app, json!({"type": "edit_entry", "quantity": 3})).await;
        assert!(status.is_client_error());
        assert!(res.is_none());
    }
}
