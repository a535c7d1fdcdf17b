//! PNG snapshot of a rendered frame.

use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Encode `frame` as PNG at `path`, replacing any existing file.
pub fn save_png(frame: &RgbaImage, path: &Path) -> Result<(), SnapshotError> {
    frame
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "saved {}x{} snapshot to {}",
        frame.width(),
        frame.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dormDraw.png");

        let first = RgbaImage::from_pixel(3, 3, image::Rgba([1, 2, 3, 255]));
        save_png(&first, &path).unwrap();

        let second = RgbaImage::from_pixel(5, 2, image::Rgba([9, 8, 7, 255]));
        save_png(&second, &path).unwrap();

        let read = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read.dimensions(), (5, 2));
        assert_eq!(*read.get_pixel(4, 1), image::Rgba([9, 8, 7, 255]));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = save_png(&RgbaImage::new(1, 1), &path).unwrap_err();
        assert!(err.to_string().contains("out.png"));
    }
}
