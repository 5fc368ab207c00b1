//! Approximate lunar phase from the calendar date.
//!
//! The arithmetic is a fixed closed-form approximation, not an ephemeris.
//! Reproducibility for a given date is the only guaranteed property; exact
//! agreement with astronomical tables is not.

use chrono::{Datelike, NaiveDate};

/// Mean synodic month, in days.
const SYNODIC_MONTH: f64 = 29.53;

/// Width of one phase bucket, in lunar days.
const BUCKET_WIDTH: f64 = 3.7;

/// One of the eight coarse lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    const BUCKETS: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    pub const fn icon(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

/// Approximate lunar state for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarState {
    /// Approximate lunar day, 0..=29.
    pub phase_index: u8,
    /// Estimated percentage of the disk lit, 0..=100.
    pub illumination: u8,
    pub phase: MoonPhase,
}

impl LunarState {
    /// Compute the state for `date`.
    ///
    /// All intermediate modulos are Euclidean: the Metonic remainder goes
    /// negative for part of the cycle and the century correction can push the
    /// running total below zero.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = i64::from(date.year());
        let month = i64::from(date.month());
        let day = i64::from(date.day());

        let mut r = year % 100;
        r %= 19;
        if r > 9 {
            r -= 19;
        }
        r = (r * 11).rem_euclid(30) + month + day;
        if month < 3 {
            r += 2;
        }
        let phase_index = (r + 2 - year / 100 + year / 400).rem_euclid(30);

        let illumination = (phase_index as f64 / SYNODIC_MONTH * 100.0).round() as u8;
        let bucket = (phase_index as f64 / BUCKET_WIDTH) as usize;

        Self {
            phase_index: phase_index as u8,
            illumination,
            phase: MoonPhase::BUCKETS[bucket],
        }
    }
}
