//! PNG output for static keyframes and sprite sheets.
//!
//! Keyframes are written as 8-bit RGB: lossless, no alpha.

use std::path::Path;

use crate::error::{AvatarError, Result};

use super::compositor::Raster;

/// Write a raster to a PNG file.
///
/// # Arguments
///
/// * `raster` - The rendered (already upscaled) raster
/// * `path` - Output file path
pub fn write_png(raster: &Raster, path: &Path) -> Result<()> {
    let img = raster.to_rgb_image();

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let mut raster = Raster::filled(2, 2, Colour::BLACK);
        raster.set(1, 0, Colour::WHITE);
        raster.set(0, 1, Colour::WHITE);

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&raster, &path).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        let img = img.to_rgb8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]); // Black
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]); // White
    }

    #[test]
    fn test_write_png_scaled() {
        let mut raster = Raster::filled(2, 2, Colour::rgb(0, 255, 0));
        raster.set(0, 0, Colour::rgb(255, 0, 0));
        let scaled = raster.upscale(4).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&scaled, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0]); // Red (scaled)
        assert_eq!(img.get_pixel(2, 0).0, [0, 255, 0]); // Green
    }

    #[test]
    fn test_write_png_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        let err = write_png(&Raster::filled(1, 1, Colour::BLACK), &path).unwrap_err();
        assert!(matches!(err, AvatarError::Io { .. }));
    }
}
