pub mod dto;
pub mod handlers;
pub mod repo;

use crate::state::AppState;
use axum::Router;

pub use dto::{DraftField, FoodDefinition, FoodDraft, FoodId};
pub use repo::FoodCatalog;

pub fn router() -> Router<AppState> {
    handlers::catalog_routes()
}
