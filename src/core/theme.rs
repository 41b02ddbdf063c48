//! # Theme
//!
//! The light/dark presentation preference. Stateless: a [`Theme`] token maps
//! to a fixed [`Palette`] pair, and applying it is idempotent. No state
//! machine, no persistence.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The two surface colors a theme controls. Every other accent color is
/// fixed; the theme only swaps which surface is text and which is background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Text / foreground surface.
    pub dark: Color,
    /// Background surface.
    pub light: Color,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// The surface pair for this theme. Night inverts Day.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Night => Palette {
                dark: Color::Rgb(255, 255, 255),
                light: Color::Rgb(10, 10, 20),
            },
            Theme::Day => Palette {
                dark: Color::Rgb(10, 10, 20),
                light: Color::Rgb(255, 255, 255),
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        }
    }
}

/// Theme selection as configured: an explicit theme, or `Auto` to follow the
/// terminal's dark-mode preference at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Day,
    Night,
}

impl ThemePreference {
    /// Collapse the preference to a concrete theme.
    pub fn resolve(self) -> Theme {
        match self {
            ThemePreference::Day => Theme::Day,
            ThemePreference::Night => Theme::Night,
            ThemePreference::Auto => detect_terminal_theme(),
        }
    }
}

/// Best-effort dark-mode detection for terminals.
///
/// Several emulators export `COLORFGBG` as `"<fg>;<bg>"` with ANSI palette
/// indices; a low background index means a dark background. When the
/// variable is absent or unparsable, fall back to Day.
fn detect_terminal_theme() -> Theme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
        .unwrap_or(Theme::Day)
}

fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // 0–6 and 8 are the dark half of the 16-color palette; 7 and 9–15 light.
    if background <= 6 || background == 8 {
        Some(Theme::Night)
    } else {
        Some(Theme::Day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_palette_matches_day_inverted() {
        let night = Theme::Night.palette();
        let day = Theme::Day.palette();
        assert_eq!(night.dark, Color::Rgb(255, 255, 255));
        assert_eq!(night.light, Color::Rgb(10, 10, 20));
        assert_eq!(day.dark, night.light);
        assert_eq!(day.light, night.dark);
    }

    #[test]
    fn palette_is_stateless_and_idempotent() {
        assert_eq!(Theme::Night.palette(), Theme::Night.palette());
        assert_eq!(Theme::Day.palette(), Theme::Day.palette());
    }

    #[test]
    fn explicit_preferences_resolve_directly() {
        assert_eq!(ThemePreference::Day.resolve(), Theme::Day);
        assert_eq!(ThemePreference::Night.resolve(), Theme::Night);
    }

    #[test]
    fn colorfgbg_dark_background_means_night() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Night));
        assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Day));
        assert_eq!(theme_from_colorfgbg("12;8"), Some(Theme::Night));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
        assert_eq!(theme_from_colorfgbg(""), None);
    }

    #[test]
    fn theme_serializes_lowercase_for_config() {
        assert_eq!(serde_json::to_string(&Theme::Night).unwrap(), "\"night\"");
        assert_eq!(
            serde_json::from_str::<ThemePreference>("\"auto\"").unwrap(),
            ThemePreference::Auto
        );
    }
}
