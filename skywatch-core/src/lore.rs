//! Werewolf lore keyed to the lunar phase.

use crate::moon::MoonPhase;

const DARK_WINDOW_NOTE: &str = "Many wolves avoid going out after sundown between **Third Quarter → First Quarter** (around the new moon).";

const FULL_MOON_NOTE: &str =
    "**Full moon tonight:** the shift is **unavoidable** and **painful**; born wolves handle it best.";

const WAXING_GIBBOUS_NOTE: &str = "**Waxing gibbous:** most **ill-tempered**; moodiness and restlessness peak for wolves before the full moon.";

const WANING_GIBBOUS_NOTE: &str =
    "**Waning gibbous:** Wolves most **physically & emotionally exhausted** after the full moon.";

const NEW_MOON_NOTE: &str = "**New moon:** calmest period for wolves. Only time new wolves can be created via an **alpha** bite; others leave a mark but don’t pass the curse.";

const FALLBACK_NOTE: &str =
    "Wolves feel the lunar pull; phases influence mood, stamina, and control.";

/// Lore note for the given phase. The dark-window line stacks on top of the
/// per-phase line; quarters get the generic fallback.
pub fn werewolf_note(phase: MoonPhase) -> String {
    let mut notes: Vec<&str> = Vec::new();

    if matches!(
        phase,
        MoonPhase::WaningCrescent | MoonPhase::NewMoon | MoonPhase::WaxingCrescent
    ) {
        notes.push(DARK_WINDOW_NOTE);
    }

    match phase {
        MoonPhase::FullMoon => notes.push(FULL_MOON_NOTE),
        MoonPhase::WaxingGibbous => notes.push(WAXING_GIBBOUS_NOTE),
        MoonPhase::WaningGibbous => notes.push(WANING_GIBBOUS_NOTE),
        MoonPhase::NewMoon => notes.push(NEW_MOON_NOTE),
        _ => {}
    }

    if notes.is_empty() {
        FALLBACK_NOTE.to_string()
    } else {
        notes.join("\n")
    }
}
