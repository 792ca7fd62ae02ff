//! Per-frame colour quantization for GIF output.
//!
//! GIF frames carry at most 256 colours. Frames already within that budget
//! keep an exact palette. Larger frames keep a set of reserved colours
//! exactly (the anti-merge stamp) and reduce everything else with median
//! cut, mapping each pixel to its nearest entry in CIE L*a*b*.

use std::collections::HashMap;

use image::{ImageBuffer, Rgba, RgbaImage};
use palette::{IntoColor, Lab, Srgb};

use super::compositor::Raster;
use crate::types::Colour;

/// Largest palette a GIF frame can carry.
pub const MAX_COLOURS: usize = 256;

/// A frame reduced to a palette plus one index per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
    width: u32,
    height: u32,
    palette: Vec<Colour>,
    indices: Vec<u8>,
}

impl IndexedFrame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &[Colour] {
        &self.palette
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Quantized colour at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = *self.indices.get((y * self.width + x) as usize)?;
        self.palette.get(idx as usize).copied()
    }

    /// Expand back to opaque RGBA for the encoder.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img: RgbaImage = ImageBuffer::new(self.width, self.height);
        for (i, &idx) in self.indices.iter().enumerate() {
            let colour = self.palette[idx as usize];
            img.put_pixel(
                i as u32 % self.width,
                i as u32 / self.width,
                Rgba(colour.to_rgba()),
            );
        }
        img
    }
}

/// Reduce `raster` to at most 256 colours, keeping `reserved` exact.
pub fn quantize(raster: &Raster, reserved: &[Colour]) -> IndexedFrame {
    let mut counts: HashMap<Colour, u32> = HashMap::new();
    let mut order: Vec<Colour> = Vec::new();
    for &colour in raster.pixels() {
        *counts.entry(colour).or_insert_with(|| {
            order.push(colour);
            0
        }) += 1;
    }

    let palette = if order.len() <= MAX_COLOURS {
        order.clone()
    } else {
        reduced_palette(&order, &counts, reserved)
    };

    let lookup = if order.len() <= MAX_COLOURS {
        palette
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect::<HashMap<_, _>>()
    } else {
        let labs: Vec<Lab> = palette.iter().map(|&c| to_lab(c)).collect();
        order
            .iter()
            .map(|&c| (c, nearest(&palette, &labs, c)))
            .collect()
    };

    let indices = raster
        .pixels()
        .iter()
        .map(|c| lookup.get(c).copied().unwrap_or(0))
        .collect();

    IndexedFrame {
        width: raster.width(),
        height: raster.height(),
        palette,
        indices,
    }
}

/// Reserved colours first, then median-cut representatives of the rest.
fn reduced_palette(
    colours: &[Colour],
    counts: &HashMap<Colour, u32>,
    reserved: &[Colour],
) -> Vec<Colour> {
    let mut palette: Vec<Colour> = Vec::with_capacity(MAX_COLOURS);
    for &c in reserved {
        if !palette.contains(&c) && palette.len() < MAX_COLOURS {
            palette.push(c);
        }
    }

    let rest: Vec<(Colour, u32)> = colours
        .iter()
        .filter(|c| !palette.contains(c))
        .map(|&c| (c, counts.get(&c).copied().unwrap_or(1)))
        .collect();

    let budget = MAX_COLOURS - palette.len();
    for representative in median_cut(rest, budget) {
        if !palette.contains(&representative) {
            palette.push(representative);
        }
    }
    palette
}

/// Split colour boxes along their widest channel until `budget` boxes
/// exist, then average each box (weighted by pixel count).
fn median_cut(colours: Vec<(Colour, u32)>, budget: usize) -> Vec<Colour> {
    if colours.is_empty() || budget == 0 {
        return Vec::new();
    }

    let mut boxes: Vec<Vec<(Colour, u32)>> = vec![colours];
    while boxes.len() < budget {
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.len() > 1)
            .max_by_key(|(i, b)| (widest_channel(b).1, std::cmp::Reverse(*i)))
            .map(|(i, _)| i);
        let Some(i) = candidate else { break };

        let mut cube = boxes.swap_remove(i);
        let (channel, _) = widest_channel(&cube);
        cube.sort_by_key(|(c, _)| (channel_value(*c, channel), *c));

        let total: u32 = cube.iter().map(|(_, n)| n).sum();
        let mut running = 0;
        let mut split = 1;
        for (k, (_, n)) in cube.iter().enumerate() {
            running += n;
            if running * 2 >= total {
                split = (k + 1).clamp(1, cube.len() - 1);
                break;
            }
        }
        let upper = cube.split_off(split);
        boxes.push(cube);
        boxes.push(upper);
    }

    boxes.iter().map(|b| average(b)).collect()
}

/// Channel index (0 = r, 1 = g, 2 = b) with the largest range, and that range.
fn widest_channel(cube: &[(Colour, u32)]) -> (usize, u8) {
    (0..3)
        .map(|ch| {
            let values = cube.iter().map(|(c, _)| channel_value(*c, ch));
            let lo = values.clone().min().unwrap_or(0);
            let hi = values.max().unwrap_or(0);
            (ch, hi - lo)
        })
        .max_by_key(|&(ch, range)| (range, std::cmp::Reverse(ch)))
        .unwrap_or((0, 0))
}

fn channel_value(c: Colour, channel: usize) -> u8 {
    match channel {
        0 => c.r,
        1 => c.g,
        _ => c.b,
    }
}

fn average(cube: &[(Colour, u32)]) -> Colour {
    let total: u64 = cube.iter().map(|(_, n)| *n as u64).sum::<u64>().max(1);
    let sum = |ch: usize| -> u8 {
        let s: u64 = cube
            .iter()
            .map(|(c, n)| channel_value(*c, ch) as u64 * *n as u64)
            .sum();
        ((s + total / 2) / total) as u8
    };
    Colour::rgb(sum(0), sum(1), sum(2))
}

fn to_lab(colour: Colour) -> Lab {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );
    rgb.into_color()
}

/// Index of the perceptually nearest palette entry. Exact hits win outright.
fn nearest(palette: &[Colour], labs: &[Lab], colour: Colour) -> u8 {
    if let Some(i) = palette.iter().position(|&c| c == colour) {
        return i as u8;
    }
    let target = to_lab(colour);
    let distance = |lab: &Lab| {
        let dl = lab.l - target.l;
        let da = lab.a - target.a;
        let db = lab.b - target.b;
        dl * dl + da * da + db * db
    };
    labs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| distance(a).total_cmp(&distance(b)))
        .map_or(0, |(i, _)| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A 32x32 raster with 1024 distinct colours.
    fn noisy() -> Raster {
        let mut raster = Raster::filled(32, 32, Colour::BLACK);
        for y in 0..32 {
            for x in 0..32 {
                raster.set(x, y, Colour::rgb((x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8));
            }
        }
        raster
    }

    #[test]
    fn test_small_palette_is_exact() {
        let mut raster = Raster::filled(4, 4, Colour::BLACK);
        raster.set(1, 2, Colour::rgb(10, 20, 30));
        let frame = quantize(&raster, &[]);
        assert_eq!(frame.palette().len(), 2);
        assert_eq!(frame.get(1, 2), Some(Colour::rgb(10, 20, 30)));
        assert_eq!(frame.get(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_large_palette_is_reduced() {
        let frame = quantize(&noisy(), &[]);
        assert!(frame.palette().len() <= MAX_COLOURS);
        assert_eq!(frame.indices().len(), 1024);
    }

    #[test]
    fn test_reserved_colours_survive_reduction() {
        let mut raster = noisy();
        let stamp = Colour::rgb(13, 14, 17);
        raster.set(31, 31, stamp);
        let frame = quantize(&raster, &[stamp]);
        assert_eq!(frame.palette()[0], stamp);
        assert_eq!(frame.get(31, 31), Some(stamp));
    }

    #[test]
    fn test_nearest_prefers_perceptual_match() {
        let palette = [Colour::rgb(250, 0, 0), Colour::rgb(0, 0, 250)];
        let labs: Vec<Lab> = palette.iter().map(|&c| to_lab(c)).collect();
        assert_eq!(nearest(&palette, &labs, Colour::rgb(200, 30, 20)), 0);
        assert_eq!(nearest(&palette, &labs, Colour::rgb(20, 30, 200)), 1);
    }

    #[test]
    fn test_median_cut_respects_budget() {
        let colours: Vec<(Colour, u32)> =
            (0..100).map(|i| (Colour::rgb(i as u8 * 2, 0, 0), 1)).collect();
        assert_eq!(median_cut(colours, 10).len(), 10);
    }

    #[test]
    fn test_rgba_expansion() {
        let raster = Raster::filled(2, 1, Colour::rgb(1, 2, 3));
        let img = quantize(&raster, &[]).to_rgba_image();
        assert_eq!(img.get_pixel(1, 0).0, [1, 2, 3, 255]);
    }
}
