//! Server configuration
//!
//! The service is not configured through the environment or flags: the
//! production values are the `Default`. Tests build their own config to point
//! the data file somewhere disposable.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Largest accepted request body (50 MiB)
pub const DEFAULT_BODY_LIMIT: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub data_file: PathBuf,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
