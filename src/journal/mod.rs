pub mod dto;
pub mod handlers;
pub mod repo;

use crate::state::AppState;
use axum::Router;

pub use dto::{LogEntry, MealType, Quantity, QuantityInput};
pub use repo::EntryLog;

pub fn router() -> Router<AppState> {
    handlers::journal_routes()
}
