use serde::{Deserialize, Serialize};

use crate::icon::IconName;

// class placed on the document root while the dark palette is active
pub const DARK_MARKER_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // whether the root marker class should be present for this theme
    pub fn has_marker(self) -> bool {
        self == Theme::Dark
    }

    // the toggle control shows where a click would take you
    pub fn toggle_icon(self) -> IconName {
        match self {
            Theme::Light => IconName::Moon,
            Theme::Dark => IconName::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_between_both_values() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn marker_only_in_dark() {
        assert!(!Theme::Light.has_marker());
        assert!(Theme::Dark.has_marker());
    }

    #[test]
    fn toggle_icon_follows_theme() {
        assert_eq!(Theme::default().toggle_icon(), IconName::Moon);
        assert_eq!(Theme::Dark.toggle_icon(), IconName::Sun);
    }
}
