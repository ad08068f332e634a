//! Grid configuration persistence
//!
//! Stores preferences in `~/.config/tabula/config.yaml`. The column set is
//! compiled in and deliberately absent from this file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::grid::{EditPolicy, CARD_HEIGHT, DEFAULT_OVERSCAN, ROW_HEIGHT, VIEWPORT_HEIGHT};
use crate::sample::DEFAULT_SAMPLE_ROWS;

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Estimated height of a table row (pixels)
    pub row_height: f64,
    /// Estimated height of a card in the compact layout (pixels)
    pub card_height: f64,
    /// Height of the scroll container (pixels)
    pub viewport_height: f64,
    /// Items rendered beyond each visible edge
    pub overscan: usize,
    /// Rows produced by "generate sample data"
    pub sample_rows: usize,
    /// Where exports are written; the downloads directory when unset
    pub export_dir: Option<PathBuf>,
    /// Whether restoring an original value keeps a cell marked as edited
    pub edit_policy: EditPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            card_height: CARD_HEIGHT,
            viewport_height: VIEWPORT_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            sample_rows: DEFAULT_SAMPLE_ROWS,
            export_dir: None,
            edit_policy: EditPolicy::default(),
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML text; missing keys take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Directory exports are written to
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
