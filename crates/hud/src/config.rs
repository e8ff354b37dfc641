//! HUD configuration (tracked team, marker metrics, icons). Loaded from hud.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::control_points::CartPointIcon;
use crate::team::Team;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Image assets for control-point icons, per owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartPointIcons {
    #[serde(default = "default_red_icon")]
    pub red: String,
    #[serde(default = "default_blue_icon")]
    pub blue: String,
    #[serde(default = "default_neutral_icon")]
    pub neutral: String,
}

fn default_red_icon() -> String {
    "../hud/cart_point_red".to_string()
}
fn default_blue_icon() -> String {
    "../hud/cart_point_blue".to_string()
}
fn default_neutral_icon() -> String {
    "../hud/cart_point_neutral".to_string()
}

impl Default for CartPointIcons {
    fn default() -> Self {
        Self {
            red: default_red_icon(),
            blue: default_blue_icon(),
            neutral: default_neutral_icon(),
        }
    }
}

impl CartPointIcons {
    pub fn asset(&self, icon: CartPointIcon) -> &str {
        match icon {
            CartPointIcon::Red => &self.red,
            CartPointIcon::Blue => &self.blue,
            CartPointIcon::Neutral => &self.neutral,
        }
    }
}

/// Escort HUD settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudConfig {
    /// Team whose escort events the overlay follows.
    #[serde(default = "default_team")]
    pub tracked_team: Team,
    /// Width of the cart item panel in pixels.
    #[serde(default = "default_escort_item_wide")]
    pub escort_item_wide: f32,
    /// Width of the control-point icon template in pixels.
    #[serde(default = "default_cp_icon_wide")]
    pub cp_icon_wide: f32,
    /// Countdown label shows while the recede deadline is closer than this.
    #[serde(default = "default_recede_warning")]
    pub recede_warning_seconds: f32,
    /// Display ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    #[serde(default)]
    pub icons: CartPointIcons,
}

fn default_team() -> Team {
    Team::Blue
}
fn default_escort_item_wide() -> f32 {
    40.0
}
fn default_cp_icon_wide() -> f32 {
    16.0
}
fn default_recede_warning() -> f32 {
    30.0
}
fn default_tick_rate() -> f64 {
    60.0
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            tracked_team: default_team(),
            escort_item_wide: default_escort_item_wide(),
            cp_icon_wide: default_cp_icon_wide(),
            recede_warning_seconds: default_recede_warning(),
            tick_rate: default_tick_rate(),
            icons: CartPointIcons::default(),
        }
    }
}

impl HudConfig {
    /// Load config from `hud.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_or_default(&config_path())
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_ron(&data)
    }

    pub fn from_ron(data: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(data)?)
    }

    /// Save current config to `hud.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(s) => {
                if let Err(e) = std::fs::write(&path, s) {
                    log::warn!("Could not write config to {:?}: {}", path, e);
                }
            }
            Err(e) => log::warn!("Could not serialize config: {}", e),
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("hud.ron")
}
