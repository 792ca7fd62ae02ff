//! Sprite sheet packer.
//!
//! Packs equally sized keyframes into one horizontal strip with a fixed gap
//! between cells. The gap and any unused area take the background colour.

use serde::Serialize;

use crate::types::Colour;

use super::compositor::Raster;

/// A cell in the sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Row packer with a fixed gap between cells.
pub struct SheetPacker {
    pub gap: u32,
    pub background: Colour,
}

impl SheetPacker {
    pub fn new(gap: u32, background: Colour) -> Self {
        Self { gap, background }
    }

    /// Pack rasters left to right, in the order given.
    ///
    /// Returns the composited sheet and the cell placements. An empty input
    /// gives a 0x0 sheet.
    pub fn pack(&self, sprites: &[(String, Raster)]) -> (Raster, Vec<Cell>) {
        let height = sprites.iter().map(|(_, r)| r.height()).max().unwrap_or(0);
        let gaps = self.gap * (sprites.len().saturating_sub(1) as u32);
        let width = sprites.iter().map(|(_, r)| r.width()).sum::<u32>() + gaps;

        let mut sheet = Raster::filled(width, height, self.background);
        let mut cells = Vec::with_capacity(sprites.len());
        let mut x = 0;
        for (name, raster) in sprites {
            sheet.blit(raster, x, 0);
            cells.push(Cell {
                name: name.clone(),
                x,
                y: 0,
                w: raster.width(),
                h: raster.height(),
            });
            x += raster.width() + self.gap;
        }

        (sheet, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BG: Colour = Colour::rgb(12, 13, 17);

    fn make_sprite(name: &str, size: u32, colour: Colour) -> (String, Raster) {
        (name.to_string(), Raster::filled(size, size, colour))
    }

    #[test]
    fn test_pack_empty() {
        let (sheet, cells) = SheetPacker::new(4, BG).pack(&[]);
        assert_eq!(sheet.size(), (0, 0));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_pack_six_with_gaps() {
        let sprites: Vec<_> = (0..6)
            .map(|i| make_sprite(&format!("tier-{}", i + 1), 128, Colour::WHITE))
            .collect();
        let (sheet, cells) = SheetPacker::new(4, BG).pack(&sprites);

        assert_eq!(sheet.size(), (6 * 128 + 5 * 4, 128));
        assert_eq!(cells[1].x, 132);
        assert_eq!(cells[5].x, 5 * 132);
        assert_eq!(sheet.get(128, 0), Some(BG));
        assert_eq!(sheet.get(131, 64), Some(BG));
        assert_eq!(sheet.get(132, 64), Some(Colour::WHITE));
    }

    #[test]
    fn test_pack_preserves_pixel_data() {
        let mut marked = Raster::filled(4, 4, Colour::WHITE);
        marked.set(3, 3, Colour::BLACK);
        let sprites = vec![
            make_sprite("a", 4, Colour::WHITE),
            ("b".to_string(), marked),
        ];
        let (sheet, cells) = SheetPacker::new(2, BG).pack(&sprites);
        assert_eq!(cells[1].x, 6);
        assert_eq!(sheet.get(9, 3), Some(Colour::BLACK));
    }

    #[test]
    fn test_pack_mixed_heights_fill_background() {
        let sprites = vec![make_sprite("big", 8, Colour::WHITE), make_sprite("small", 4, Colour::WHITE)];
        let (sheet, _) = SheetPacker::new(0, BG).pack(&sprites);
        assert_eq!(sheet.size(), (12, 8));
        assert_eq!(sheet.get(10, 6), Some(BG));
    }
}
