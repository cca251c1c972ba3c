pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod rest;
pub mod service;
pub mod store;
pub mod validate;

use std::sync::Arc;

use config::ServerConfig;
use service::TaskService;

/// Shared application state passed to every REST handler.
///
/// Built once per server (and once per test) — the store lives inside the
/// service, so two contexts never share state.
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub service: TaskService,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            service: TaskService::new(),
            started_at: std::time::Instant::now(),
        }
    }
}
