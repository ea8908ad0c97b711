//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the application works without a config file.

use crate::packing::sort::SortOrder;
use crate::split::friend::DEFAULT_AVATAR_URL;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub packing: PackingConfig,
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which screen is shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Packing,
    Split,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long confirmation messages stay in the status bar.
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
    #[serde(default)]
    pub start_screen: StartScreen,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            status_timeout_secs: default_status_timeout(),
            start_screen: StartScreen::default(),
        }
    }
}

/// Packing list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingConfig {
    /// Largest quantity the add form offers.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
    /// Ask before clearing the whole list.
    #[serde(default = "default_true")]
    pub confirm_clear: bool,
    #[serde(default)]
    pub default_sort: SortOrder,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            max_quantity: default_max_quantity(),
            confirm_clear: true,
            default_sort: SortOrder::default(),
        }
    }
}

/// Bill splitting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_avatar_url")]
    pub default_avatar_url: String,
    /// Friends present at startup.
    #[serde(default = "default_friends")]
    pub friends: Vec<FriendSeed>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_avatar_url: default_avatar_url(),
            friends: default_friends(),
        }
    }
}

/// A friend listed in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendSeed {
    /// Fixed id; generated when omitted.
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub balance: f64,
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_friends() -> Vec<FriendSeed> {
    [("Clark", 118836, -7.0), ("Sarah", 933372, 20.0), ("Anthony", 499476, 0.0)]
        .into_iter()
        .map(|(name, id, balance)| FriendSeed {
            id: Some(id),
            name: name.to_string(),
            avatar_url: Some(format!("{}?u={}", DEFAULT_AVATAR_URL, id)),
            balance,
        })
        .collect()
}

fn default_true() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_status_timeout() -> u64 {
    3
}
fn default_max_quantity() -> u32 {
    20
}
fn default_currency() -> String {
    "€".to_string()
}
fn default_avatar_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/tripkit/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
