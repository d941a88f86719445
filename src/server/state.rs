//! Server State
//!
//! Immutable settings shared by all handlers.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn dist_dir(&self) -> &Path {
        &self.config.dist_dir
    }

    /// Entry page of the compiled front-end
    pub fn index_path(&self) -> std::path::PathBuf {
        self.config.dist_dir.join("index.html")
    }
}
