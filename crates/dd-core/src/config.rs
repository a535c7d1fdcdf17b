//! Canvas configuration: asset locations, window size, snapshot target.

use crate::model::{Rgba, Sprite};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for a DormDraw canvas.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Directory holding the background and sprite images.
    pub asset_dir: PathBuf,
    /// Background image file name inside `asset_dir`.
    pub background_file: String,
    /// Snapshot written on the save key. Overwritten on every save.
    pub snapshot_file: PathBuf,
    /// Canvas (and window) width in pixels.
    pub width: u32,
    /// Canvas (and window) height in pixels.
    pub height: u32,
    /// Solid fill drawn under the background image.
    pub background_color: Rgba,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("images"),
            background_file: "background.png".to_string(),
            snapshot_file: PathBuf::from("dormDraw.png"),
            width: 800,
            height: 600,
            background_color: Rgba::rgb(150, 0, 200),
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON config. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(text)?;
        log::debug!("loaded canvas config: {config:?}");
        Ok(config)
    }

    pub fn background_path(&self) -> PathBuf {
        self.asset_dir.join(&self.background_file)
    }

    pub fn sprite_path(&self, sprite: Sprite) -> PathBuf {
        self.asset_dir.join(sprite.file_name())
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_file
    }
}
