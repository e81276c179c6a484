// Application state module
// Shared, read-only state handed to every connection

use std::sync::atomic::AtomicUsize;

use super::types::Config;
use crate::routing::RouteTable;

/// Application state
///
/// Built once before the listener starts and shared behind an `Arc`. Only the
/// connection counter changes after startup.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub const fn new(config: Config, routes: RouteTable) -> Self {
        Self {
            config,
            routes,
            active_connections: AtomicUsize::new(0),
        }
    }

    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
