//! Per-game tuning loaded from ~/.arcade/config.json.
//!
//! Every field has a default; a missing or invalid file yields the defaults
//! and a partial file overrides only what it names.

use crate::core::constants::CONFIG_FILE;
use crate::core::error::Result;
use crate::games::{FlappyConfig, RunnerConfig, SnakeConfig, TicTacToeConfig};
use crate::utils::persistence::{load_json_or_default, save_json, save_path};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub snake: SnakeConfig,
    pub flappy: FlappyConfig,
    pub runner: RunnerConfig,
    pub tictactoe: TicTacToeConfig,
}

impl ArcadeConfig {
    /// Load from ~/.arcade/config.json, writing the defaults there on first
    /// run so there is a file to edit.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&save_path(CONFIG_FILE)?)
    }

    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Ok(Self::load_from(path));
        }
        let config = Self::default();
        config.save_to(path)?;
        info!("wrote default config to {}", path.display());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        save_json(path, self)
    }
}
