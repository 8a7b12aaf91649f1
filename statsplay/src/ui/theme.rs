//! Module for managing the application's color theme.
//!
//! A theme maps each logical part of the output to a foreground (and, for the
//! background entry, a background) color. Colors are 16-color ANSI names or
//! `#rrggbb` hex strings. Themes load from YAML files; a light and a dark
//! built-in theme back the dark-mode toggle.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use statsplay_core::{ChartColor, NoticeLevel};

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// The application title bar.
    Header,
    /// Demo headings.
    Heading,
    /// Plain explanatory text.
    Text,
    /// Computed statistics.
    Stat,
    Success,
    Info,
    Warn,
    Error,
    /// Widget labels.
    Prompt,
    /// The focused widget.
    Focus,
    /// Panel borders.
    Border,
    /// Screen background (only `bg` is used).
    Background,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 12] = [
        ThemeEntry::Header, ThemeEntry::Heading, ThemeEntry::Text, ThemeEntry::Stat,
        ThemeEntry::Success, ThemeEntry::Info, ThemeEntry::Warn, ThemeEntry::Error,
        ThemeEntry::Prompt, ThemeEntry::Focus, ThemeEntry::Border, ThemeEntry::Background,
    ];

    /// The entry used to display a notice of the given level.
    pub fn for_notice(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Text => ThemeEntry::Text,
            NoticeLevel::Info => ThemeEntry::Info,
            NoticeLevel::Success => ThemeEntry::Success,
            NoticeLevel::Warning => ThemeEntry::Warn,
            NoticeLevel::Error => ThemeEntry::Error,
        }
    }
}

/// The sixteen ANSI names with their headless and TUI equivalents.
const NAMED_COLORS: [(&str, AnsiColors, Color); 16] = [
    ("black", AnsiColors::Black, Color::Black),
    ("red", AnsiColors::Red, Color::Red),
    ("green", AnsiColors::Green, Color::Green),
    ("yellow", AnsiColors::Yellow, Color::Yellow),
    ("blue", AnsiColors::Blue, Color::Blue),
    ("magenta", AnsiColors::Magenta, Color::Magenta),
    ("cyan", AnsiColors::Cyan, Color::Cyan),
    ("white", AnsiColors::White, Color::Gray),
    ("brightblack", AnsiColors::BrightBlack, Color::DarkGray),
    ("brightred", AnsiColors::BrightRed, Color::LightRed),
    ("brightgreen", AnsiColors::BrightGreen, Color::LightGreen),
    ("brightyellow", AnsiColors::BrightYellow, Color::LightYellow),
    ("brightblue", AnsiColors::BrightBlue, Color::LightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta, Color::LightMagenta),
    ("brightcyan", AnsiColors::BrightCyan, Color::LightCyan),
    ("brightwhite", AnsiColors::BrightWhite, Color::White),
];

fn lookup(name: &str) -> Option<(AnsiColors, Color)> {
    NAMED_COLORS.iter().find(|(n, _, _)| *n == name).map(|(_, ansi, tui)| (*ansi, *tui))
}

/// A color usable in the theme.
///
/// Theme files are checked on load: an unknown name is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen") or a `#rrggbb` hex string.
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected #rrggbb or one of: {}.",
            NAMED_COLORS.iter().map(|(n, _, _)| *n).collect::<Vec<_>>().join(", ")
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lookup(&lower).is_some() || parse_hex(&lower).is_some() {
            Ok(ThemeColor::Named(lower))
        } else {
            Err(ParseThemeColorError)
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        let ThemeColor::Named(name) = color;
        name
    }
}

fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts to an `owo_colors` color for headless output. Hex colors fall
    /// back to white since plain ANSI output has no true-color guarantee.
    pub fn to_ansi_color(&self) -> AnsiColors {
        let ThemeColor::Named(name) = self;
        lookup(name).map_or(AnsiColors::White, |(ansi, _)| ansi)
    }

    /// Converts to a ratatui color for the TUI; hex strings become true color.
    pub fn to_ratatui_color(&self) -> Color {
        let ThemeColor::Named(name) = self;
        match (lookup(name), parse_hex(name)) {
            (Some((_, tui)), _) => tui,
            (None, Some((r, g, b))) => Color::Rgb(r, g, b),
            (None, None) => Color::Reset,
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
    #[serde(default)]
    pub bg: Option<ThemeColor>,
}

impl ThemeStyle {
    fn fg(name: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::named(name)), bg: None }
    }

    /// Loads a theme from a YAML file and fills missing entries from `base`.
    pub fn load_from_file<P: AsRef<Path>>(path: P, base: ThemeMap) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in base {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// The light theme used by default.
    pub fn default_theme_map() -> ThemeMap {
        let mut theme = HashMap::new();
        theme.insert(ThemeEntry::Header, ThemeStyle::fg("cyan"));
        theme.insert(ThemeEntry::Heading, ThemeStyle::fg("brightblue"));
        theme.insert(ThemeEntry::Stat, ThemeStyle::fg("brightyellow"));
        theme.insert(ThemeEntry::Success, ThemeStyle::fg("green"));
        theme.insert(ThemeEntry::Info, ThemeStyle::fg("cyan"));
        theme.insert(ThemeEntry::Warn, ThemeStyle::fg("yellow"));
        theme.insert(ThemeEntry::Error, ThemeStyle::fg("red"));
        theme.insert(ThemeEntry::Focus, ThemeStyle::fg("brightmagenta"));
        theme.insert(ThemeEntry::Border, ThemeStyle::fg("brightblack"));
        theme.insert(ThemeEntry::Background, ThemeStyle::default());

        for entry in ThemeEntry::ALL {
            theme.entry(entry).or_insert_with(|| ThemeStyle::fg("white"));
        }
        theme
    }

    /// The dark theme: charcoal background, brighter foregrounds.
    pub fn dark_theme_map() -> ThemeMap {
        let mut theme = Self::default_theme_map();
        theme.insert(ThemeEntry::Text, ThemeStyle::fg("brightwhite"));
        theme.insert(ThemeEntry::Prompt, ThemeStyle::fg("brightwhite"));
        theme.insert(ThemeEntry::Success, ThemeStyle::fg("brightgreen"));
        theme.insert(ThemeEntry::Info, ThemeStyle::fg("brightcyan"));
        theme.insert(ThemeEntry::Error, ThemeStyle::fg("brightred"));
        theme.insert(ThemeEntry::Border, ThemeStyle::fg("white"));
        theme.insert(
            ThemeEntry::Background,
            ThemeStyle { fg: Some(ThemeColor::named("brightwhite")), bg: Some(ThemeColor::named("#1e1e1e")) },
        );
        theme
    }
}

/// Light and dark theme maps; the dark-mode toggle switches between them.
#[derive(Debug, Clone)]
pub struct Themes {
    pub light: ThemeMap,
    pub dark: ThemeMap,
}

impl Themes {
    pub fn select(&self, dark_mode: bool) -> &ThemeMap {
        if dark_mode { &self.dark } else { &self.light }
    }
}

/// Builds both theme maps. A custom theme file is overlaid on each.
pub fn build_themes(theme_path: Option<&PathBuf>) -> Result<Themes> {
    let light = ThemeStyle::default_theme_map();
    let dark = ThemeStyle::dark_theme_map();
    match theme_path {
        Some(path) => Ok(Themes {
            light: ThemeStyle::load_from_file(path, light)?,
            dark: ThemeStyle::load_from_file(path, dark)?,
        }),
        None => Ok(Themes { light, dark }),
    }
}

/// Ratatui style for a theme entry, including the background if one is set.
pub fn style_for(entry: ThemeEntry, theme_map: &ThemeMap) -> Style {
    let mut style = Style::default();
    if let Some(theme_style) = theme_map.get(&entry) {
        if let Some(color) = &theme_style.fg {
            style = style.fg(color.to_ratatui_color());
        }
        if let Some(color) = &theme_style.bg {
            style = style.bg(color.to_ratatui_color());
        }
    }
    style
}

/// Ratatui color for a chart color.
pub fn chart_color(color: ChartColor) -> Color {
    match color {
        ChartColor::Red => Color::Red,
        ChartColor::Blue => Color::Blue,
        ChartColor::Green => Color::Green,
        ChartColor::Orange => Color::Rgb(255, 165, 0),
        ChartColor::Purple => Color::Magenta,
        ChartColor::SkyBlue => Color::Rgb(135, 206, 235),
        ChartColor::Gray => Color::Gray,
    }
}
