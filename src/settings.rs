//! Launch-time settings
//!
//! Defaults suit normal play; environment variables can override them:
//! - `SQUARE_DASH_SEED`: fixed obstacle seed (u64)
//! - `SQUARE_DASH_WINDOWED`: run in a window instead of full-screen
//! - `SQUARE_DASH_HUD`: show the level/time readout
//! - `SQUARE_DASH_VSYNC`: sync presentation to the display

use serde::{Deserialize, Serialize};

const ENV_SEED: &str = "SQUARE_DASH_SEED";
const ENV_WINDOWED: &str = "SQUARE_DASH_WINDOWED";
const ENV_HUD: &str = "SQUARE_DASH_HUD";
const ENV_VSYNC: &str = "SQUARE_DASH_VSYNC";

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Obstacle RNG seed; derived from the clock when unset
    pub seed: Option<u64>,
    /// Borderless full-screen on the primary monitor
    pub fullscreen: bool,
    /// Show level and time while playing
    pub show_hud: bool,
    /// Vertical sync
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            fullscreen: true,
            show_hud: true,
            vsync: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings using `lookup` to read variables
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => settings.seed = Some(seed),
                Err(e) => log::warn!("Ignoring {ENV_SEED}={raw:?}: {e}"),
            }
        }

        let flag = |key: &str, target: &mut bool| {
            if let Some(raw) = lookup(key) {
                match parse_bool(&raw) {
                    Some(value) => *target = value,
                    None => log::warn!("Ignoring {key}={raw:?}: expected a boolean"),
                }
            }
        };

        let mut windowed = !settings.fullscreen;
        flag(ENV_WINDOWED, &mut windowed);
        settings.fullscreen = !windowed;
        flag(ENV_HUD, &mut settings.show_hud);
        flag(ENV_VSYNC, &mut settings.vsync);

        settings
    }

    /// Seed for this run: the configured one, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert!(settings.fullscreen);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("SQUARE_DASH_SEED", "42"),
            ("SQUARE_DASH_WINDOWED", "yes"),
            ("SQUARE_DASH_HUD", "off"),
            ("SQUARE_DASH_VSYNC", "0"),
        ]));
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.fullscreen);
        assert!(!settings.show_hud);
        assert!(!settings.vsync);
        assert_eq!(settings.resolve_seed(), 42);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let settings = Settings::from_lookup(lookup(&[
            ("SQUARE_DASH_SEED", "not-a-number"),
            ("SQUARE_DASH_HUD", "maybe"),
        ]));
        assert_eq!(settings.seed, None);
        assert!(settings.show_hud);
    }
}
