//! Configuration for memorize.

use crate::error::ConfigResult;
use memory_game::GameOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Load from the user config dir, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "using default config");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "memorize")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_pairs")]
    pub number_of_pairs: usize,
    #[serde(default = "default_bonus_secs")]
    pub bonus_time_limit_secs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_pairs() -> usize { 10 }
fn default_bonus_secs() -> f64 { 6.0 }

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            number_of_pairs: 10,
            bonus_time_limit_secs: 6.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Bonus window; non-positive or non-finite values disable it and
    /// values past what a `Duration` holds saturate.
    pub fn bonus_time_limit(&self) -> Duration {
        let secs = self.bonus_time_limit_secs;
        if secs.is_finite() && secs > 0.0 {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }

    pub fn to_options(&self) -> GameOptions {
        GameOptions {
            number_of_pairs: self.number_of_pairs,
            bonus_time_limit: self.bonus_time_limit(),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
    /// Replaces the built-in emoji list when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<String>>,
}

fn default_theme_name() -> String { "Vehicles".to_string() }

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            emojis: None,
        }
    }
}
