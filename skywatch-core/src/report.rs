//! The run-once pipeline: fetch → derive → compose → deliver.

use std::fmt;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::StatusCode;

use crate::config::{Config, REPORT_VERSION};
use crate::embed::{build_payload, compose_report};
use crate::fetch::OpenMeteo;
use crate::webhook::WebhookClient;

/// How the delivery attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The webhook answered; non-success statuses land here too.
    Sent(StatusCode),
    /// The request itself failed (connect error, timeout).
    Failed(String),
}

/// Result of one report run, rendered for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub delivery: Delivery,
}

impl fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.delivery {
            Delivery::Sent(status) => {
                write!(f, "Status: {} | Version: {}", status.as_u16(), REPORT_VERSION)
            }
            Delivery::Failed(reason) => {
                write!(f, "Status: send failed ({reason}) | Version: {REPORT_VERSION}")
            }
        }
    }
}

/// Run the whole pipeline once.
///
/// Fetch-side failures abort the run; delivery failures are captured in the
/// outcome. `now` and `today` are passed in rather than read from ambient
/// clocks.
pub async fn run(config: &Config, now: DateTime<Utc>, today: NaiveDate) -> Result<ReportOutcome> {
    let webhook_url = config.webhook_url()?;

    let meteo = OpenMeteo::new(config.forecast_api.clone())?;
    let observation = meteo
        .current_observation(config.latitude, config.longitude)
        .await?;

    tracing::debug!(city = %config.city_name, "composing sky report");
    let payload = build_payload(&config.city_name, &observation, now, today);

    let webhook = WebhookClient::new(webhook_url)?;
    let delivery = match webhook.deliver(&payload).await {
        Ok(status) => Delivery::Sent(status),
        Err(err) => {
            tracing::warn!(error = %err, "webhook delivery failed");
            Delivery::Failed(format!("{err:#}"))
        }
    };

    Ok(ReportOutcome { delivery })
}

/// Fetch and render the description block without delivering anything.
pub async fn preview(config: &Config, today: NaiveDate) -> Result<String> {
    let meteo = OpenMeteo::new(config.forecast_api.clone())?;
    let observation = meteo
        .current_observation(config.latitude, config.longitude)
        .await?;

    Ok(compose_report(&config.city_name, &observation, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn forecast_body() -> serde_json::Value {
        json!({
            "current": {
                "temperature_2m": 20.0,
                "relative_humidity_2m": 50,
                "apparent_temperature": 18.0,
                "precipitation": 0.0,
                "weather_code": 0,
                "wind_speed_10m": 5.0
            },
            "daily": {
                "temperature_2m_max": [25.0],
                "temperature_2m_min": [15.0]
            }
        })
    }

    fn fixed_now() -> DateTime<Utc> {
        use chrono::TimeZone;
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    async fn server_with_forecast() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("forecast_days", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .mount(&server)
            .await;
        server
    }

    fn config_for(server: &MockServer) -> Config {
        Config {
            forecast_api: format!("{}/forecast", server.uri()),
            webhook_url: Some(format!("{}/hook", server.uri())),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn end_to_end_reports_delivery_status() {
        let server = server_with_forecast().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_partial_json(json!({"username": "Sky Watch"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = run(&config_for(&server), fixed_now(), fixed_today())
            .await
            .unwrap();

        assert_eq!(outcome.delivery, Delivery::Sent(StatusCode::NO_CONTENT));
        assert_eq!(outcome.to_string(), "Status: 204 | Version: v2.4");
    }

    #[tokio::test]
    async fn non_success_delivery_is_reported_not_fatal() {
        let server = server_with_forecast().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = run(&config_for(&server), fixed_now(), fixed_today())
            .await
            .unwrap();

        assert_eq!(outcome.delivery, Delivery::Sent(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(outcome.to_string().starts_with("Status: 500"));
    }

    #[tokio::test]
    async fn unreachable_webhook_is_reported_not_fatal() {
        let server = server_with_forecast().await;
        let config = Config {
            webhook_url: Some("http://127.0.0.1:9/hook".to_string()),
            ..config_for(&server)
        };

        let outcome = run(&config, fixed_now(), fixed_today()).await.unwrap();

        assert!(matches!(outcome.delivery, Delivery::Failed(_)));
        assert!(outcome.to_string().contains("send failed"));
        assert!(outcome.to_string().contains("Version: v2.4"));
    }

    #[tokio::test]
    async fn fetch_failure_aborts_the_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let config = Config {
            forecast_api: format!("{}/forecast", server.uri()),
            webhook_url: Some(format!("{}/hook", server.uri())),
            ..Config::default()
        };
        let err = run(&config, fixed_now(), fixed_today()).await.unwrap_err();

        assert!(err.to_string().contains("failed with status 503"));
    }

    #[tokio::test]
    async fn missing_webhook_url_fails_before_fetching() {
        let server = MockServer::start().await;
        // no forecast mock mounted: the run must not get that far
        let config = Config {
            forecast_api: format!("{}/forecast", server.uri()),
            webhook_url: None,
            ..Config::default()
        };

        let err = run(&config, fixed_now(), fixed_today()).await.unwrap_err();

        assert!(err.to_string().contains("No webhook URL configured"));
    }

    #[tokio::test]
    async fn preview_renders_without_posting() {
        let server = server_with_forecast().await;
        // no POST mock mounted: a delivery attempt would 404 into the test log,
        // but more importantly preview never needs a webhook URL
        let config = Config {
            forecast_api: format!("{}/forecast", server.uri()),
            webhook_url: None,
            ..Config::default()
        };

        let description = preview(&config, fixed_today()).await.unwrap();

        assert!(description.contains("Clear Sky"));
        assert!(description.contains("20°C / 68°F"));
    }
}
