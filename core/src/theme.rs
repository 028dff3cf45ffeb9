use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

pub const DARK_META_COLOR: &str = "#1b1d21";
pub const LIGHT_META_COLOR: &str = "#ffffff";

const NIGHT_STARTS_AT: u32 = 20;
const NIGHT_ENDS_AT: u32 = 8;

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// `content` of the browser-chrome color meta tag.
    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_META_COLOR,
            Theme::Dark => DARK_META_COLOR,
        }
    }

    pub fn from_hour(hour: u32) -> Self {
        if hour >= NIGHT_STARTS_AT || hour < NIGHT_ENDS_AT {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment facts used when nothing valid is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeHints {
    /// `None` when the media-query API is unavailable.
    pub system_prefers_dark: Option<bool>,
    pub local_hour: u32,
}

pub fn default_theme(hints: ThemeHints) -> Theme {
    match hints.system_prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => Theme::from_hour(hints.local_hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_hours_are_dark() {
        assert_eq!(Theme::from_hour(20), Theme::Dark);
        assert_eq!(Theme::from_hour(23), Theme::Dark);
        assert_eq!(Theme::from_hour(0), Theme::Dark);
        assert_eq!(Theme::from_hour(7), Theme::Dark);
        assert_eq!(Theme::from_hour(8), Theme::Light);
        assert_eq!(Theme::from_hour(19), Theme::Light);
    }

    #[test]
    fn system_preference_wins_over_clock() {
        let hints = ThemeHints {
            system_prefers_dark: Some(false),
            local_hour: 23,
        };
        assert_eq!(default_theme(hints), Theme::Light);
        let hints = ThemeHints {
            system_prefers_dark: None,
            local_hour: 23,
        };
        assert_eq!(default_theme(hints), Theme::Dark);
    }
}
