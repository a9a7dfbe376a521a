//! Engine configuration: board dimensions and fleet quotas.
//!
//! The engine takes configuration as an explicit value at construction;
//! there is no process-wide mutable config. Defaults match the reference
//! deployment (10x10 board, fleet of 1/2/3/4).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::FleetConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub fleet: FleetConfig,
}

impl GameConfig {
    /// Load configuration from a JSON file. Missing fields fall back to
    /// defaults via serde.
    pub fn from_path(path: &Path) -> anyhow::Result<GameConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_width: 10,
            board_height: 10,
            fleet: FleetConfig::default(),
        }
    }
}
