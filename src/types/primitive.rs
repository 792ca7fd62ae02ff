//! Drawing primitives: filled rectangles and single pixels.

use super::Colour;

/// A paintable shape on the design grid.
///
/// Coordinates are signed so transforms can push geometry off the canvas;
/// the compositor clips anything outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Filled rectangle from (x1, y1) to (x2, y2), inclusive.
    Rect {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        colour: Colour,
    },
    /// A single pixel at (x, y).
    Pixel { x: i32, y: i32, colour: Colour },
}

impl Primitive {
    /// Inclusive rectangle constructor.
    pub const fn rect(x1: i32, y1: i32, x2: i32, y2: i32, colour: Colour) -> Self {
        Primitive::Rect {
            x1,
            y1,
            x2,
            y2,
            colour,
        }
    }

    pub const fn pixel(x: i32, y: i32, colour: Colour) -> Self {
        Primitive::Pixel { x, y, colour }
    }

    pub fn colour(&self) -> Colour {
        match *self {
            Primitive::Rect { colour, .. } | Primitive::Pixel { colour, .. } => colour,
        }
    }

    /// Same geometry, different colour.
    pub fn with_colour(self, colour: Colour) -> Self {
        match self {
            Primitive::Rect { x1, y1, x2, y2, .. } => Primitive::rect(x1, y1, x2, y2, colour),
            Primitive::Pixel { x, y, .. } => Primitive::pixel(x, y, colour),
        }
    }

    /// Same colour, shifted by (dx, dy).
    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        match self {
            Primitive::Rect {
                x1,
                y1,
                x2,
                y2,
                colour,
            } => Primitive::rect(x1 + dx, y1 + dy, x2 + dx, y2 + dy, colour),
            Primitive::Pixel { x, y, colour } => Primitive::pixel(x + dx, y + dy, colour),
        }
    }

    /// Every cell this primitive covers, unclipped.
    ///
    /// An inverted rectangle covers nothing.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x1, y1, x2, y2) = match *self {
            Primitive::Rect { x1, y1, x2, y2, .. } => (x1, y1, x2, y2),
            Primitive::Pixel { x, y, .. } => (x, y, x, y),
        };
        (y1..=y2).flat_map(move |y| (x1..=x2).map(move |x| (x, y)))
    }
}
