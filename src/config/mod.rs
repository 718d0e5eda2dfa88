//! # Configuration Management Module
//!
//! Game settings loaded from a TOML file, with defaults for anything left out.
//!
//! ## Configuration Structure
//!
//! - [`PlayerConfig`] - Starting name and stats for the player character
//! - [`MazeConfig`] - Grid size, wall density and optional fixed seed
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mazecrawl::config::Config;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     // Missing file means defaults
//!     let config = Config::load_or_default("mazecrawl.toml").await?;
//!     println!("Maze size: {}", config.maze.size);
//!
//!     Config::create_default("mazecrawl.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [player]
//! name = "Player"
//! health = 100
//! attack_power = 15
//!
//! [maze]
//! size = 10
//! wall_chance = 25
//! # seed = 42
//!
//! [logging]
//! level = "info"
//! file = "mazecrawl.log"
//! ```
//!
//! Precedence: CLI args > Config file > Defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::game::maze::{DEFAULT_SIZE, DEFAULT_WALL_CHANCE, MAX_SIZE, MIN_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub health: u32,
    pub attack_power: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            health: 100,
            attack_power: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MazeConfig {
    /// Grid edge length, border included. Must be between 3 and 100.
    pub size: usize,
    /// Percent chance (0-100) that an interior cell starts as a wall.
    pub wall_chance: u8,
    /// Fixed generation seed. When unset every run draws a fresh one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            wall_chance: DEFAULT_WALL_CHANCE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log lines go here while the game owns the terminal.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("mazecrawl.log".to_string()),
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Open `file` for appending. `Ok(None)` when no file is configured.
    pub fn open_file(&self) -> Result<Option<std::fs::File>> {
        let Some(path) = self.file.as_deref() else {
            return Ok(None);
        };
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("Failed to open log file {}: {}", path, e))?;
        Ok(Some(f))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields defaults. A file that exists
    /// and fails to parse is still an error.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Config::default());
        }
        Self::load(path).await
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.maze.size) {
            return Err(anyhow!(
                "maze.size must be between {} and {} (got {})",
                MIN_SIZE,
                MAX_SIZE,
                self.maze.size
            ));
        }
        if self.maze.wall_chance > 100 {
            return Err(anyhow!(
                "maze.wall_chance is a percentage (got {})",
                self.maze.wall_chance
            ));
        }
        if self.player.name.trim().is_empty() {
            return Err(anyhow!("player.name must not be empty"));
        }
        Ok(())
    }
}
