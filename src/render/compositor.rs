//! Sprite compositor - paints sprites onto a fixed canvas.
//!
//! Parts are painted in ascending z-order and every primitive overwrites the
//! cells it covers. There is no blending: the last paint wins.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{AvatarError, Result};
use crate::types::{Colour, Sprite};

/// Edge length of the design grid all geometry is authored against.
pub const GRID: u32 = 32;

/// Terminal-dark default background.
pub const BACKGROUND: Colour = Colour::rgb(12, 13, 17);

/// Canvas parameters: grid size and background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub size: u32,
    pub background: Colour,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            size: GRID,
            background: BACKGROUND,
        }
    }
}

impl Canvas {
    pub fn with_background(background: Colour) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    /// Check that `size` is a positive exact multiple of this grid.
    pub fn validate_size(&self, size: u32) -> Result<u32> {
        if size == 0 || size % self.size != 0 {
            return Err(AvatarError::InvalidSize {
                size,
                grid: self.size,
            });
        }
        Ok(size / self.size)
    }
}

/// A square-or-rectangular grid of opaque colours, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Raster {
    /// A raster filled with one colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![colour; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Set a pixel; out-of-bounds writes are clipped.
    pub fn set(&mut self, x: i32, y: i32, colour: Colour) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = colour;
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Copy `other` into this raster with its top-left corner at (x, y).
    pub fn blit(&mut self, other: &Raster, x: u32, y: u32) {
        for sy in 0..other.height {
            for sx in 0..other.width {
                if let Some(colour) = other.get(sx, sy) {
                    self.set((x + sx) as i32, (y + sy) as i32, colour);
                }
            }
        }
    }

    /// Nearest-neighbour upscale to `size × size`.
    ///
    /// `size` must be a positive exact multiple of the raster's edge; every
    /// source cell becomes one solid `k × k` block.
    pub fn upscale(&self, size: u32) -> Result<Raster> {
        if self.width != self.height || self.width == 0 || size == 0 || size % self.width != 0 {
            return Err(AvatarError::InvalidSize {
                size,
                grid: self.width,
            });
        }

        Ok(self.scale(size / self.width))
    }

    /// Nearest-neighbour scale by an integer factor (a factor of 0 is treated as 1).
    pub fn scale(&self, factor: u32) -> Raster {
        if factor <= 1 {
            return self.clone();
        }

        let width = self.width * factor;
        let height = self.height * factor;
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            let row = (y / factor) * self.width;
            for x in 0..width {
                pixels.push(self.pixels[(row + x / factor) as usize]);
            }
        }

        Raster {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an 8-bit RGB image (for PNG output).
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut img: RgbImage = ImageBuffer::new(self.width, self.height);
        for (i, colour) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            img.put_pixel(x, y, Rgb(colour.to_rgb()));
        }
        img
    }
}

/// Paint a sprite onto a fresh canvas at design-grid resolution.
pub fn render(sprite: &Sprite, canvas: &Canvas) -> Raster {
    let mut raster = Raster::filled(canvas.size, canvas.size, canvas.background);

    for part in sprite.paint_order() {
        for prim in &part.primitives {
            let colour = prim.colour();
            for (x, y) in prim.cells() {
                raster.set(x, y, colour);
            }
        }
    }

    raster
}

/// Render and upscale in one step.
pub fn render_at(sprite: &Sprite, canvas: &Canvas, size: u32) -> Result<Raster> {
    let factor = canvas.validate_size(size)?;
    Ok(render(sprite, canvas).scale(factor))
}
