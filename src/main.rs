mod app;
mod catalog;
mod config;
mod error;
mod journal;
mod state;
mod summary;
mod tracker;

use crate::config::LogConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let state = AppState::init()?;
    init_tracing(&state.config.log);

    let catalog_size = state.session().catalog().len();
    tracing::info!(foods = catalog_size, "session started with seed catalog");

    let app = app::build_app(state.clone());
    app::serve(app, &state).await
}

fn init_tracing(log: &LogConfig) {
    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .init();
    }
}
