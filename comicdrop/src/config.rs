//! Build-time constants and user settings.

use serde::Deserialize;

use crate::prelude::*;

pub const NAME: &str = concat!("ComicDrop v", env!("CARGO_PKG_VERSION"));

pub const WIN_WIDTH: f32 = 900.0;
pub const WIN_HEIGHT: f32 = 1080.0;

/// Decoded pages kept in the LRU cache.
pub const CACHE_SIZE: usize = 20;
/// Gap between the two pages of a spread, in points.
pub const PAGE_MARGIN_SIZE: f32 = 0.0;
/// Seconds a transient status message stays on screen.
pub const STATUS_TIMEOUT: u64 = 4;

/// Name of the optional settings file, looked up in the working directory.
pub const SETTINGS_FILE: &str = "comicdrop.toml";

/// User-tunable defaults. Missing file or missing keys fall back to the
/// built-in values; a file that does not parse is ignored with a warning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub spread_mode: bool,
    pub right_to_left: bool,
    pub cache_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spread_mode: false,
            right_to_left: false,
            cache_size: CACHE_SIZE,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_FILE) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }

    fn parse(text: &str) -> Self {
        match toml::from_str(text) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring malformed {SETTINGS_FILE}: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_full_settings_file_parses() {
        let settings = Settings::parse(
            "spread_mode = true\nright_to_left = true\ncache_size = 64\n",
        );
        assert!(settings.spread_mode);
        assert!(settings.right_to_left);
        assert_eq!(settings.cache_size, 64);
    }

    #[test]
    fn missing_keys_use_the_defaults() {
        let settings = Settings::parse("spread_mode = true\n");
        assert!(settings.spread_mode);
        assert!(!settings.right_to_left);
        assert_eq!(settings.cache_size, CACHE_SIZE);
    }

    #[test]
    fn a_malformed_file_falls_back_to_defaults() {
        let settings = Settings::parse("spread_mode = \"maybe\"");
        assert!(!settings.spread_mode);
        assert_eq!(settings.cache_size, CACHE_SIZE);
    }
}
