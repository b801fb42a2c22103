pub mod actions;
pub mod handlers;
pub mod services;
pub mod view;

use crate::state::AppState;
use axum::Router;

pub use actions::Action;
pub use services::Tracker;

pub fn router() -> Router<AppState> {
    handlers::tracker_routes()
}
