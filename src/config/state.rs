// Application state module
// Shared, read-only runtime state built from the loaded configuration

use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Application state shared by every connection.
///
/// The configuration is fixed for the process lifetime; the access-log flag
/// is cached in an atomic so the request path never takes a lock.
pub struct AppState {
    pub config: Config,
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
