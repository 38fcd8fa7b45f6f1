//! Color palettes. A theme only decides how things look; every screen
//! reads the same controller state regardless of the palette in use.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

/// Names of the built-in themes, as accepted on the command line and in
/// the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light blues.
    #[default]
    Ocean,
    /// Violet on charcoal.
    Dusk,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Ocean => Theme::ocean(),
            ThemeName::Dusk => Theme::dusk(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub title: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub option: Color,
    pub option_selected_fg: Color,
    pub option_selected_bg: Color,
    pub gauge_filled: Color,
    pub gauge_empty: Color,
    pub control: Color,
    pub control_disabled: Color,
    pub score: Color,
    pub correct: Color,
    pub incorrect: Color,
}

impl Theme {
    pub fn ocean() -> Self {
        Self {
            background: Color::Reset,
            title: Color::LightBlue,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Blue,
            option: Color::Gray,
            option_selected_fg: Color::Black,
            option_selected_bg: Color::LightBlue,
            gauge_filled: Color::LightBlue,
            gauge_empty: Color::DarkGray,
            control: Color::LightCyan,
            control_disabled: Color::DarkGray,
            score: Color::Blue,
            correct: Color::Green,
            incorrect: Color::Red,
        }
    }

    pub fn dusk() -> Self {
        Self {
            background: Color::Rgb(30, 27, 38),
            title: Color::LightMagenta,
            text: Color::Rgb(230, 225, 240),
            muted: Color::Rgb(120, 110, 140),
            border: Color::Magenta,
            option: Color::Rgb(200, 190, 215),
            option_selected_fg: Color::Rgb(30, 27, 38),
            option_selected_bg: Color::LightMagenta,
            gauge_filled: Color::Magenta,
            gauge_empty: Color::Rgb(60, 55, 75),
            control: Color::LightMagenta,
            control_disabled: Color::Rgb(80, 72, 95),
            score: Color::LightMagenta,
            correct: Color::LightGreen,
            incorrect: Color::LightRed,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeName::default().theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_resolve_to_distinct_palettes() {
        assert_eq!(ThemeName::Ocean.theme(), Theme::ocean());
        assert_eq!(ThemeName::Dusk.theme(), Theme::dusk());
        assert_ne!(Theme::ocean(), Theme::dusk());
        assert_eq!(Theme::default(), Theme::ocean());
    }

    #[test]
    fn test_theme_name_parses_from_cli_and_config() {
        assert_eq!(ThemeName::from_str("dusk", true), Ok(ThemeName::Dusk));
        let name: ThemeName = serde_json::from_str("\"ocean\"").unwrap();
        assert_eq!(name, ThemeName::Ocean);
    }
}
