// ui/system_theme.rs - Ambient light/dark preference detection

use crate::mode::Mode;

/// Source of the host environment's preferred mode.
pub trait ModePreference {
    /// `None` when the environment expresses no preference.
    fn preferred_mode(&self) -> Option<Mode>;
}

/// Reads the preference from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPreference;

impl ModePreference for SystemPreference {
    fn preferred_mode(&self) -> Option<Mode> {
        detect_system_mode(|key| std::env::var(key).ok())
    }
}

/// Fixed answer, for embedding hosts that already know the preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPreference(pub Option<Mode>);

impl ModePreference for FixedPreference {
    fn preferred_mode(&self) -> Option<Mode> {
        self.0
    }
}

/// Detect the preferred mode from environment variables.
///
/// Checked in order: `TINTBOX_MODE`, `COLORFGBG` (background color index),
/// `DARK_MODE`.
pub fn detect_system_mode<F>(lookup: F) -> Option<Mode>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = lookup("TINTBOX_MODE")
        && let Ok(mode) = explicit.parse::<Mode>()
    {
        return Some(mode);
    }

    // "fg;bg" or "fg;default;bg"; the last field is the background palette index
    if let Some(colorfgbg) = lookup("COLORFGBG")
        && let Some(bg) = colorfgbg
            .rsplit(';')
            .next()
            .and_then(|s| s.trim().parse::<u8>().ok())
    {
        return Some(if bg <= 6 || bg == 8 {
            Mode::Dark
        } else {
            Mode::Light
        });
    }

    if lookup("DARK_MODE").is_some_and(|v| v != "0" && !v.eq_ignore_ascii_case("false")) {
        return Some(Mode::Dark);
    }

    None
}
