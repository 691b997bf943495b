use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The layout engine is stateless; handlers only need configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
