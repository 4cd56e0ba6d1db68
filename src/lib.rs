pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{jd_service::JdService, scan_service::ScanService};
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub jd_service: JdService,
    pub scan_service: ScanService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        let jd_service = JdService::new(config.default_currency.clone());
        let scan_service = ScanService::new(http_client, config.scan_service_url.clone());

        Self {
            jd_service,
            scan_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
