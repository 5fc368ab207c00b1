use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;

use crate::model::Observation;

/// Current-conditions fields requested from the forecast API.
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m";

/// Daily aggregate fields requested from the forecast API.
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Open-Meteo forecast client. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    endpoint: String,
    http: Client,
}

impl OpenMeteo {
    /// Client against the given forecast endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for Open-Meteo")?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Fetch current conditions plus today's high/low for one location.
    ///
    /// Any transport error, non-success status, or missing/malformed field is
    /// an error; there is no retry and no partial result.
    pub async fn current_observation(&self, latitude: f64, longitude: f64) -> Result<Observation> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("forecast_days", "1".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: ForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo JSON")?;

        tracing::debug!(%status, "Open-Meteo forecast received");

        let high_c = *parsed
            .daily
            .temperature_2m_max
            .first()
            .ok_or_else(|| anyhow!("Open-Meteo response contained no daily maximum"))?;
        let low_c = *parsed
            .daily
            .temperature_2m_min
            .first()
            .ok_or_else(|| anyhow!("Open-Meteo response contained no daily minimum"))?;

        let current = parsed.current;

        Ok(Observation {
            temperature_c: current.temperature_2m,
            feels_like_c: current.apparent_temperature,
            humidity_pct: current.relative_humidity_2m,
            wind_speed_mps: current.wind_speed_10m,
            weather_code: current.weather_code,
            high_c,
            low_c,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
    daily: DailyRange,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: u8,
    apparent_temperature: f64,
    weather_code: i32,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct DailyRange {
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
