use std::sync::Arc;

use crate::config::Config;

/// Read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub version: Arc<str>,
}

impl AppState {
    pub fn new(version: &str) -> Self {
        Self {
            version: Arc::from(version),
        }
    }
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self::new(&config.version)
    }
}
