//! Persisted display preferences.
//!
//! The `theme` key stores a bare label rather than a JSON document; unknown
//! or missing values fall back to the light theme.

use crate::repo::kv::{KeyValueStore, RepoResult};
use log::warn;
use std::fmt::{Display, Formatter};

/// Key holding the theme label.
pub const KEY_THEME: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses the persisted label; anything unrecognized is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Loads the stored theme, degrading to the default on unknown values.
pub fn load_theme<K: KeyValueStore>(kv: &K) -> RepoResult<Theme> {
    let Some(raw) = kv.get(KEY_THEME)? else {
        return Ok(Theme::default());
    };

    match Theme::from_label(&raw) {
        Some(theme) => Ok(theme),
        None => {
            warn!("event=theme_load module=service status=fallback value={raw}");
            Ok(Theme::default())
        }
    }
}

/// Stores the theme label.
pub fn save_theme<K: KeyValueStore>(kv: &K, theme: Theme) -> RepoResult<()> {
    kv.set(KEY_THEME, theme.label())
}
