//! Game configuration and loader.
//!
//! Settings live in `config.toml` in the data directory. Every section is optional; anything
//! left out falls back to the defaults below, and a missing file means "all defaults".

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_paths::data_path;

/// Problems with otherwise well-formed configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("town toughness must be between 0.0 and 1.0 (got {0})")]
    Toughness(f64),
    #[error("shop sell ratio must be between 0.0 and 1.0 (got {0})")]
    SellRatio(f64),
    #[error("shop has no items for sale")]
    EmptyShop,
}

/// Complete configuration for a game session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for the game's random number generator. Random if absent.
    pub seed: Option<u64>,
    pub hunter: HunterConfig,
    pub town: TownConfig,
    pub shop: ShopConfig,
}
impl GameConfig {
    /// Check value ranges that serde can't express.
    ///
    /// # Errors
    /// Returns the first out-of-range setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.town.toughness) {
            return Err(ConfigError::Toughness(self.town.toughness));
        }
        if !(0.0..=1.0).contains(&self.shop.sell_ratio) {
            return Err(ConfigError::SellRatio(self.shop.sell_ratio));
        }
        if self.shop.prices.is_empty() {
            return Err(ConfigError::EmptyShop);
        }
        Ok(())
    }
}

/// Starting state of the hunter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    pub starting_gold: i32,
    pub starting_kit: Vec<String>,
}
impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            starting_gold: 10,
            starting_kit: Vec::new(),
        }
    }
}

/// Settings applied to every town generated during the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TownConfig {
    /// Probability (0.0 - 1.0) that a new town is a tough one.
    pub toughness: f64,
    /// Win every brawl for 100 gold.
    pub cheat_mode: bool,
}
impl Default for TownConfig {
    fn default() -> Self {
        Self {
            toughness: 0.4,
            cheat_mode: false,
        }
    }
}

/// Price list for the general store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub prices: BTreeMap<String, u32>,
    /// Fraction of the list price paid when buying items back.
    pub sell_ratio: f64,
}
impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            prices: default_prices(),
            sell_ratio: 0.5,
        }
    }
}

/// Returns the hardcoded default price list.
fn default_prices() -> BTreeMap<String, u32> {
    [
        ("water", 2),
        ("rope", 4),
        ("machete", 6),
        ("torch", 8),
        ("horse", 12),
        ("boat", 20),
    ]
    .into_iter()
    .map(|(item, price)| (item.to_string(), price))
    .collect()
}

/// Load the game configuration from the data directory.
///
/// # Errors
/// See [`load_config_from`].
pub fn load_config() -> Result<GameConfig> {
    load_config_from(&data_path("config.toml"))
}

/// Load the game configuration from a specific TOML file.
///
/// A missing file is not an error: defaults are used and a warning is logged.
///
/// # Errors
/// - if the file exists but can't be read or parsed
/// - if parsed values are out of range
pub fn load_config_from(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        warn!("no config found at {}; using defaults", path.display());
        return Ok(GameConfig::default());
    }
    let text = fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
    let config: GameConfig =
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating config file {}", path.display()))?;
    info!(
        "config loaded from {} ({} shop items, toughness {})",
        path.display(),
        config.shop.prices.len(),
        config.town.toughness
    );
    Ok(config)
}
