use serde::{Deserialize, Serialize};

/// Current conditions plus today's range, taken once from the forecast API
/// at the start of a run and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    /// Wind as reported upstream; converted to mph at display time.
    pub wind_speed_mps: f64,
    /// WMO weather code, e.g. 0 = clear sky, 95 = thunderstorm.
    pub weather_code: i32,
    pub high_c: f64,
    pub low_c: f64,
}
