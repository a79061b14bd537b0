pub mod config;
pub mod error;
pub mod observability;
pub mod planner;
pub mod routes;

pub use planner::Planner;
pub use routes::{AppState, router};

/// Create app router from configuration
///
/// Builds the same router `serve` runs, useful for integration testing
/// without binding a socket.
pub fn create_app(config: &config::Config) -> anyhow::Result<axum::Router> {
    Ok(router(AppState::from_config(config)?))
}
