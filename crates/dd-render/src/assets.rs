//! Image assets: the background plus one image per sprite kind.

use dd_core::{CanvasConfig, Sprite};
use image::RgbaImage;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to load image `{}`", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded images for one canvas. Loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Assets {
    background: RgbaImage,
    /// Indexed by `Sprite::index`.
    sprites: Vec<RgbaImage>,
}

impl Assets {
    /// Load the background and every sprite image named by `config`.
    ///
    /// # Errors
    /// Fails on the first image that is missing or cannot be decoded.
    pub fn load(config: &CanvasConfig) -> Result<Self, AssetError> {
        let background = load_image(&config.background_path())?;
        let sprites = Sprite::ALL
            .iter()
            .map(|&s| load_image(&config.sprite_path(s)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            background,
            sprites,
        })
    }

    /// Build from already-decoded images, in `Sprite::ALL` order.
    pub fn from_images(background: RgbaImage, sprites: [RgbaImage; 7]) -> Self {
        Self {
            background,
            sprites: Vec::from(sprites),
        }
    }

    pub fn background(&self) -> &RgbaImage {
        &self.background
    }

    pub fn sprite(&self, sprite: Sprite) -> &RgbaImage {
        &self.sprites[sprite.index()]
    }

    /// Width and height of a sprite image, in canvas units.
    pub fn sprite_size(&self, sprite: Sprite) -> (f32, f32) {
        let img = self.sprite(sprite);
        (img.width() as f32, img.height() as f32)
    }
}

fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}
