//! Small numeric helpers shared by the per-archetype animation transforms.
//!
//! Trigonometric positions are truncated toward zero (`as i32`), which keeps
//! particle paths symmetric about their centre.

use std::f64::consts::{PI, TAU};

use crate::render::compositor::GRID;
use crate::types::Colour;

/// Breathing bob offsets for 8-frame loops.
pub const BOB_8: [i32; 8] = [0, 0, -1, -1, 0, 0, 1, 1];
/// Breathing bob offsets for 10-frame loops.
pub const BOB_10: [i32; 10] = [0, 0, -1, -1, -1, 0, 0, 1, 1, 1];
/// Breathing bob offsets for 12-frame loops.
pub const BOB_12: [i32; 12] = [0, 0, -1, -1, -1, 0, 0, 0, 1, 1, 1, 0];

/// Slow horizontal sway used by capes on 10-frame loops.
pub const SWAY_10: [i32; 10] = [0, 0, 1, 1, 0, 0, -1, -1, 0, 0];

/// Look up a cyclic offset table.
pub fn cycle(table: &[i32], frame: u32) -> i32 {
    if table.is_empty() {
        return 0;
    }
    table[frame as usize % table.len()]
}

/// Fraction of the loop completed at `frame`.
pub fn phase(frame: u32, total: u32) -> f64 {
    frame as f64 / total.max(1) as f64
}

/// One full sine period over the loop, scaled to `amplitude` and truncated.
pub fn pulse(amplitude: f64, frame: u32, total: u32) -> i32 {
    (amplitude * (TAU * phase(frame, total)).sin()) as i32
}

/// `true` on alternating pairs of frames: 0,1 on; 2,3 off; ...
pub fn every_other_pair(frame: u32) -> bool {
    (frame / 2) % 2 == 0
}

/// Point at `(rx, ry)` radius and `angle` from a centre.
pub fn polar(cx: i32, cy: i32, rx: f64, ry: f64, angle: f64) -> (i32, i32) {
    (cx + (rx * angle.cos()) as i32, cy + (ry * angle.sin()) as i32)
}

/// `count` points evenly spaced on an ellipse, rotated by the loop phase.
pub fn orbit(
    (cx, cy): (i32, i32),
    (rx, ry): (f64, f64),
    count: u32,
    frame: u32,
    total: u32,
) -> Vec<(i32, i32)> {
    let spacing = TAU / count.max(1) as f64;
    (0..count)
        .map(|i| polar(cx, cy, rx, ry, TAU * phase(frame, total) + i as f64 * spacing))
        .collect()
}

/// `steps` points evenly spaced on a circle of radius `r`.
pub fn ring((cx, cy): (i32, i32), r: f64, steps: u32) -> Vec<(i32, i32)> {
    (0..steps)
        .map(|step| polar(cx, cy, r, r, TAU * step as f64 / steps.max(1) as f64))
        .collect()
}

/// The four compass points of a circle (right, down, left, up).
pub fn compass((cx, cy): (i32, i32), r: f64) -> Vec<(i32, i32)> {
    [0.0, PI / 2.0, PI, 3.0 * PI / 2.0]
        .into_iter()
        .map(|a| polar(cx, cy, r, r, a))
        .collect()
}

/// Whether a point lies on the design grid.
pub fn in_grid(x: i32, y: i32) -> bool {
    let grid = GRID as i32;
    (0..grid).contains(&x) && (0..grid).contains(&y)
}

/// Colour every on-grid point, dropping the rest.
pub fn paint(
    points: impl IntoIterator<Item = (i32, i32)>,
    colour: Colour,
) -> Vec<(i32, i32, Colour)> {
    points
        .into_iter()
        .filter(|&(x, y)| in_grid(x, y))
        .map(|(x, y)| (x, y, colour))
        .collect()
}

/// Keep only on-grid coloured points.
pub fn clip(points: impl IntoIterator<Item = (i32, i32, Colour)>) -> Vec<(i32, i32, Colour)> {
    points.into_iter().filter(|&(x, y, _)| in_grid(x, y)).collect()
}

/// The one-pixel border of the grid, clockwise from the top row.
pub fn border() -> Vec<(i32, i32)> {
    let last = GRID as i32 - 1;
    let mut points: Vec<(i32, i32)> = Vec::with_capacity(4 * GRID as usize);
    for x in 0..=last {
        points.push((x, 0));
        points.push((x, last));
    }
    for y in 1..last {
        points.push((0, y));
        points.push((last, y));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(&BOB_8, 2), -1);
        assert_eq!(cycle(&BOB_8, 10), -1);
        assert_eq!(cycle(&BOB_12, 11), 0);
        assert_eq!(cycle(&[], 3), 0);
    }

    #[test]
    fn test_pulse_truncates_toward_zero() {
        assert_eq!(pulse(40.0, 0, 10), 0);
        // sin(2π·1/10) ≈ 0.5878 → 23.5 → 23
        assert_eq!(pulse(40.0, 1, 10), 23);
        // sin(2π·6/10) ≈ -0.5878 → -23.5 → -23
        assert_eq!(pulse(40.0, 6, 10), -23);
    }

    #[test]
    fn test_orbit_points() {
        let points = orbit((16, 14), (10.0, 8.0), 2, 0, 8);
        assert_eq!(points[0], (26, 14));
        // cos(π) = -1, sin(π) is a tiny positive number that truncates to 0
        assert_eq!(points[1], (6, 14));
    }

    #[test]
    fn test_compass() {
        assert_eq!(
            compass((16, 13), 2.0),
            vec![(18, 13), (16, 15), (14, 13), (16, 11)]
        );
    }

    #[test]
    fn test_paint_drops_off_grid() {
        let painted = paint([(0, 0), (-1, 4), (31, 31), (32, 0)], Colour::WHITE);
        assert_eq!(painted.len(), 2);
    }

    #[test]
    fn test_border_size() {
        assert_eq!(border().len(), 4 * 32 - 4);
    }
}
