pub mod handlers;
pub mod routes;

use crate::models::config::AppConfig;
use crate::traffic::service::TrafficService;

/// Shared state handed to every request handler
pub struct AppState {
    pub config: AppConfig,
    pub traffic: TrafficService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let traffic = TrafficService::new(config.traffic_dir.clone());
        Self { config, traffic }
    }
}
