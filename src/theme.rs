use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    #[default]
    Dark,
    Light,
    Neon,
    Warm,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 4] = [Self::Dark, Self::Light, Self::Neon, Self::Warm];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Neon => "neon",
            Self::Warm => "warm",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .ok_or_else(|| ThemeError::UnknownTheme(value.to_string()))
    }

    /// Value for the `color-scheme` meta tag.
    pub fn color_scheme(self) -> &'static str {
        match self {
            Self::Light => "light",
            _ => "dark",
        }
    }

    /// Next theme in declaration order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL
            .iter()
            .position(|k| *k == self)
            .unwrap_or_default();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn theme(self) -> &'static GlobalTheme {
        match self {
            Self::Dark => &THEMES[0],
            Self::Light => &THEMES[1],
            Self::Neon => &THEMES[2],
            Self::Warm => &THEMES[3],
        }
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalTheme {
    pub key: ThemeKey,
    pub name: &'static str,
    pub palette: Palette,
    pub accent_rgb: &'static str,
}

static THEMES: [GlobalTheme; 4] = [
    GlobalTheme {
        key: ThemeKey::Dark,
        name: "Midnight",
        palette: Palette {
            bg: "#030303",
            surface: "#0a0a0a",
            elevated: "#141414",
            text: "#fafafa",
            muted: "#737373",
            accent: "#0ea5e9",
            accent_alt: "#6366f1",
            border: "#262626",
        },
        accent_rgb: "14, 165, 233",
    },
    GlobalTheme {
        key: ThemeKey::Light,
        name: "Daylight",
        palette: Palette {
            bg: "#fafafa",
            surface: "#ffffff",
            elevated: "#f5f5f5",
            text: "#0f172a",
            muted: "#64748b",
            accent: "#0f172a",
            accent_alt: "#334155",
            border: "#e2e8f0",
        },
        accent_rgb: "15, 23, 42",
    },
    GlobalTheme {
        key: ThemeKey::Neon,
        name: "Cyber",
        palette: Palette {
            bg: "#0a0a0f",
            surface: "#0f0f1a",
            elevated: "#1a1a2e",
            text: "#ffffff",
            muted: "#6b7280",
            accent: "#00ff88",
            accent_alt: "#ff00ff",
            border: "#2d2d44",
        },
        accent_rgb: "0, 255, 136",
    },
    GlobalTheme {
        key: ThemeKey::Warm,
        name: "Ember",
        palette: Palette {
            bg: "#0c0a09",
            surface: "#1c1917",
            elevated: "#292524",
            text: "#fafaf9",
            muted: "#a8a29e",
            accent: "#f59e0b",
            accent_alt: "#ef4444",
            border: "#44403c",
        },
        accent_rgb: "245, 158, 11",
    },
];

pub fn all() -> &'static [GlobalTheme] {
    &THEMES
}

pub fn find(key: &str) -> Option<&'static GlobalTheme> {
    ThemeKey::parse(key).ok().map(ThemeKey::theme)
}

pub fn default_theme() -> &'static GlobalTheme {
    ThemeKey::default().theme()
}

/// Inline style declaring the CSS custom properties the stylesheet reads.
pub fn css_variables(theme: &GlobalTheme) -> String {
    let p = &theme.palette;
    format!(
        "--bg: {}; --surface: {}; --elevated: {}; --accent: {}; --accent-alt: {}; --accent-rgb: {}; --text: {}; --muted: {}; --border: {};",
        p.bg, p.surface, p.elevated, p.accent, p.accent_alt, theme.accent_rgb, p.text, p.muted, p.border
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_match_keys() {
        for key in ThemeKey::ALL {
            assert_eq!(key.theme().key, key);
            assert!(key.theme().palette.is_complete());
        }
        assert_eq!(all().len(), ThemeKey::ALL.len());
    }

    #[test]
    fn test_cycle_wraps() {
        let mut key = ThemeKey::Dark;
        let mut seen = vec![key];
        for _ in 0..3 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(seen, ThemeKey::ALL.to_vec());
        assert_eq!(key.next(), ThemeKey::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!(ThemeKey::parse("neon"), Ok(ThemeKey::Neon));
        assert_eq!(
            ThemeKey::parse("sepia"),
            Err(ThemeError::UnknownTheme("sepia".to_string()))
        );
        assert!(find("sepia").is_none());
        assert_eq!(find("warm").map(|t| t.name), Some("Ember"));
        assert_eq!(default_theme().name, "Midnight");
    }

    #[test]
    fn test_css_variables() {
        let css = css_variables(default_theme());
        assert!(css.starts_with("--bg: #030303;"));
        assert!(css.contains("--accent-rgb: 14, 165, 233;"));
        assert!(css.contains("--border: #262626;"));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(ThemeKey::Light.to_string(), "light");
    }

    #[test]
    fn test_color_scheme() {
        assert_eq!(ThemeKey::Light.color_scheme(), "light");
        assert_eq!(ThemeKey::Neon.color_scheme(), "dark");
    }
}
