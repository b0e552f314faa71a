// Analysis Service Client
// HTTP boundary to the external multi-model analysis service

use crate::models::{AnalysisResult, AnalyzeRequest};
use reqwest::Client;
use std::env;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_ANALYZE_URL: &str = "http://127.0.0.1:8000/api/analyze/";

// Transport-level timeout; the lifecycle itself imposes none.
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("JSON parse error: {0}")]
    Json(String),
}

/// Derive the user-facing error message for a failing response.
/// Priority: a `details` field, else an `error` field, else "HTTP <status>".
/// An unparsable body has neither field and falls through to the generic form.
pub fn derive_error_message(status: u16, body: &str) -> String {
    if let Ok(data) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(details) = data.get("details").and_then(|v| v.as_str()) {
            return details.to_string();
        }
        if let Some(error) = data.get("error").and_then(|v| v.as_str()) {
            return error.to_string();
        }
    }
    format!("HTTP {}", status)
}

pub struct PanelClient {
    client: Client,
    analyze_url: String,
}

impl Default for PanelClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            analyze_url: resolve_analyze_url(None),
        }
    }

    pub fn with_url(url: &str) -> Self {
        let mut client = Self::new();
        client.analyze_url = resolve_analyze_url(Some(url));
        client
    }

    pub fn with_proxy(proxy_url: &str) -> Result<Self, PanelError> {
        let proxy = reqwest::Proxy::all(proxy_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .proxy(proxy)
            .build()?;

        Ok(Self {
            client,
            analyze_url: resolve_analyze_url(None),
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    /// Submit a text to the analysis service and deserialize the result
    /// envelope. Failing statuses are mapped through `derive_error_message`.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, PanelError> {
        let request = AnalyzeRequest {
            text: text.to_string(),
        };

        let start = Instant::now();

        let response = self
            .client
            .post(&self.analyze_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as i64;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = derive_error_message(status.as_u16(), &body);
            warn!(
                "[PANEL_CLIENT] analyze failed status={} latency_ms={} : {}",
                status.as_u16(),
                latency_ms,
                message
            );
            return Err(PanelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = response
            .json()
            .await
            .map_err(|e| PanelError::Json(e.to_string()))?;

        info!(
            "[PANEL_CLIENT] analyze ok judgements={} latency_ms={}",
            result.per_model.len(),
            latency_ms
        );

        Ok(result)
    }
}

fn resolve_analyze_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        let url = url.trim();
        if !url.is_empty() {
            return url.to_string();
        }
    }
    env::var("PANEL_API_URL").unwrap_or_else(|_| DEFAULT_ANALYZE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_details() {
        let message = derive_error_message(500, r#"{"details":"d","error":"e"}"#);
        assert_eq!(message, "d");
    }

    #[test]
    fn test_error_message_falls_back_to_error_field() {
        let message = derive_error_message(500, r#"{"error":"e"}"#);
        assert_eq!(message, "e");
    }

    #[test]
    fn test_error_message_generic_for_unparsable_body() {
        assert_eq!(derive_error_message(500, "<html>oops</html>"), "HTTP 500");
        assert_eq!(derive_error_message(502, ""), "HTTP 502");
    }

    #[test]
    fn test_error_message_generic_when_fields_not_strings() {
        // A parsable body whose fields are the wrong type has neither field.
        assert_eq!(
            derive_error_message(400, r#"{"details": 7, "error": null}"#),
            "HTTP 400"
        );
    }

    #[test]
    fn test_explicit_url_wins() {
        let client = PanelClient::with_url("http://example.test/analyze/");
        assert_eq!(client.analyze_url(), "http://example.test/analyze/");
    }

    #[test]
    fn test_blank_explicit_url_falls_back() {
        let client = PanelClient::with_url("   ");
        assert!(!client.analyze_url().is_empty());
    }
}
