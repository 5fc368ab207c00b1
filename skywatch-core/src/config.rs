use std::env;

use thiserror::Error;

/// Environment variable holding the destination webhook URL.
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";

/// Version tag shown in the embed footer and the final status line.
/// Bump when redeploying.
pub const REPORT_VERSION: &str = "v2.4";

/// Public Open-Meteo forecast endpoint. No API key required.
pub const DEFAULT_FORECAST_API: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Error)]
#[error("No webhook URL configured.\nHint: set the WEBHOOK_URL environment variable.")]
pub struct MissingWebhookUrl;

/// Fixed report location and endpoints, plus the one environment-provided
/// secret. Everything except the webhook URL is a source constant.
#[derive(Debug, Clone)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    pub city_name: String,
    pub forecast_api: String,
    pub webhook_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latitude: 40.70,
            longitude: -77.60,
            city_name: "Augustine".to_string(),
            forecast_api: DEFAULT_FORECAST_API.to_string(),
            webhook_url: None,
        }
    }
}

impl Config {
    /// Fixed config with the webhook URL picked up from the environment.
    pub fn from_env() -> Self {
        Self {
            webhook_url: env::var(WEBHOOK_URL_VAR).ok(),
            ..Self::default()
        }
    }

    /// Destination webhook URL.
    pub fn webhook_url(&self) -> Result<&str, MissingWebhookUrl> {
        self.webhook_url.as_deref().ok_or(MissingWebhookUrl)
    }
}
