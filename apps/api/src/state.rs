use std::sync::Arc;

use crate::clock::Clock;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Supplies the calendar anchor when a request does not pin one.
    pub clock: Arc<dyn Clock>,
}
