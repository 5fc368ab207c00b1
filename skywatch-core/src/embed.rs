//! Message composition: unit conversions, the quote-framed description block,
//! and the webhook payload envelope.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::REPORT_VERSION;
use crate::lore::werewolf_note;
use crate::model::Observation;
use crate::moon::LunarState;
use crate::sky::SkyCondition;

/// Embed accent color.
const EMBED_COLOR: u32 = 0x2F3136;

/// Display name the webhook posts under.
const WEBHOOK_USERNAME: &str = "Sky Watch";

const MPH_PER_MPS: f64 = 2.237;

/// °C → °F.
pub fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// m/s → mph.
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPH_PER_MPS
}

/// Capitalize the first letter of each space-separated word.
fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub color: u32,
    pub description: String,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

/// Top-level webhook body: `{username, embeds: [..]}`.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub embeds: Vec<Embed>,
}

/// The quote-framed description block, all values rounded to whole numbers.
pub fn compose_description(
    city_name: &str,
    obs: &Observation,
    sky: SkyCondition,
    moon: LunarState,
    note: &str,
) -> String {
    let temp_f = c_to_f(obs.temperature_c);
    let feels_f = c_to_f(obs.feels_like_c);
    let high_f = c_to_f(obs.high_c);
    let low_f = c_to_f(obs.low_c);
    let wind_mph = mps_to_mph(obs.wind_speed_mps);

    let lines = [
        "> ⠀".to_string(),
        format!(">  **{city_name} · Weather & Moon**"),
        "> ⠀".to_string(),
        format!(">  {} **{}**", sky.icon, title_case(sky.label)),
        format!(
            ">  **{:.0}°C / {:.0}°F**, feels {:.0}°C / {:.0}°F",
            obs.temperature_c, temp_f, obs.feels_like_c, feels_f
        ),
        format!(
            ">  🔺 High {:.0}°C / {:.0}°F · 🔻 Low {:.0}°C / {:.0}°F",
            obs.high_c, high_f, obs.low_c, low_f
        ),
        format!(">  💨 {:.0} mph · 💧{}% humidity", wind_mph, obs.humidity_pct),
        "> ⠀".to_string(),
        format!(
            ">  {} {} ({}% lit)",
            moon.phase.icon(),
            moon.phase.label(),
            moon.illumination
        ),
        "> ⠀".to_string(),
        format!(">  *{note}*"),
        "> ⠀".to_string(),
    ];

    lines.join("\n")
}

/// Derive the sky/moon/lore facts for `today` and render the description.
pub fn compose_report(city_name: &str, obs: &Observation, today: NaiveDate) -> String {
    let sky = SkyCondition::from_code(obs.weather_code);
    let moon = LunarState::for_date(today);
    let note = werewolf_note(moon.phase);

    compose_description(city_name, obs, sky, moon, &note)
}

/// Assemble the full webhook payload for one observation.
pub fn build_payload(
    city_name: &str,
    obs: &Observation,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> WebhookPayload {
    WebhookPayload {
        username: WEBHOOK_USERNAME.to_string(),
        embeds: vec![Embed {
            color: EMBED_COLOR,
            description: compose_report(city_name, obs, today),
            footer: EmbedFooter {
                text: format!("Sky Watch · {REPORT_VERSION}"),
            },
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }],
    }
}
