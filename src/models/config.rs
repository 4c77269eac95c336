use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding capture files and their CSV reports
    pub traffic_dir: PathBuf,

    /// Address the REST API binds to
    pub bind_address: String,

    /// Port for the REST API server
    pub port: u16,
}

impl AppConfig {
    /// Socket address string for the HTTP server
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
