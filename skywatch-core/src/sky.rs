/// Icon + label pair describing the sky for one WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyCondition {
    pub icon: &'static str,
    pub label: &'static str,
}

impl SkyCondition {
    /// Map a WMO weather code to its display pair.
    /// See: https://open-meteo.com/en/docs#weathervariables
    ///
    /// Total over all inputs; unknown codes get a neutral fallback.
    pub const fn from_code(code: i32) -> Self {
        let (icon, label) = match code {
            0 => ("☀️", "clear sky"),
            1 => ("🌤️", "mostly clear"),
            2 => ("⛅", "partly cloudy"),
            3 => ("☁️", "overcast"),
            45 | 48 => ("🌫️", "fog"),
            51 | 53 | 55 => ("🌦️", "drizzle"),
            56 | 57 => ("🥶🌧️", "freezing drizzle"),
            61 | 63 | 65 => ("🌧️", "rain"),
            66 | 67 => ("🥶🌧️", "freezing rain"),
            71 | 73 | 75 => ("🌨️", "snow"),
            77 => ("🌨️", "snow grains"),
            80 | 81 | 82 => ("🌦️", "rain showers"),
            85 | 86 => ("🌨️", "snow showers"),
            95 => ("⛈️", "thunderstorm"),
            96 | 99 => ("⛈️🧊", "thunderstorm w/ hail"),
            _ => ("🌤️", "conditions"),
        };

        Self { icon, label }
    }
}
