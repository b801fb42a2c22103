pub mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use dto::{MacroSlice, PieChart};
pub use services::{format_amount, summarize};

pub fn router() -> Router<AppState> {
    handlers::summary_routes()
}
