use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::dto::jd_dto::deserialize_count_flexible;
use crate::error::{Error, Result};
use crate::models::job_description::Mode;

/// Structured suggestions returned by the external extraction service. Every
/// field is optional; the form pre-fills whatever came back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanExtraction {
    pub title: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub skillset_category: Option<i32>,
    pub mode: Option<Mode>,
    pub tenure_months: Option<i32>,
    pub experience_min: Option<Decimal>,
    pub experience_max: Option<Decimal>,
    pub open_positions: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_count_flexible")]
    pub available_positions: Option<String>,
    pub revenue_potential: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Proxy to the scanning collaborator. This service holds no extraction
/// logic of its own; everything happens behind the single HTTP call.
#[derive(Clone)]
pub struct ScanService {
    client: Client,
    base_url: Option<String>,
}

impl ScanService {
    pub fn new(client: Client, base_url: Option<String>) -> Self {
        Self { client, base_url }
    }

    pub async fn scan(&self, jd_text: &str) -> Result<ScanExtraction> {
        let base_url = self.base_url.as_deref().ok_or_else(|| {
            Error::ServiceUnavailable("Scan service is not configured".to_string())
        })?;

        let url = format!("{}/scan", base_url.trim_end_matches('/'));
        info!("Forwarding job description text to scan service at {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "jd_text": jd_text }))
            .send()
            .await?;
        let extraction = response
            .error_for_status()?
            .json::<ScanExtraction>()
            .await?;
        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_scan_service_is_reported_unavailable() {
        let service = ScanService::new(Client::new(), None);
        let result = service.scan("some job text").await;
        assert!(matches!(result, Err(Error::ServiceUnavailable(_))));
    }

    #[test]
    fn extraction_accepts_integer_or_string_positions() {
        let from_int: ScanExtraction =
            serde_json::from_value(json!({ "available_positions": 4 })).expect("int");
        assert_eq!(from_int.available_positions.as_deref(), Some("4"));

        let from_string: ScanExtraction =
            serde_json::from_value(json!({ "available_positions": "4" })).expect("string");
        assert_eq!(from_string.available_positions.as_deref(), Some("4"));

        let absent: ScanExtraction = serde_json::from_value(json!({})).expect("absent");
        assert!(absent.available_positions.is_none());
        assert!(absent.skills.is_empty());
    }
}
