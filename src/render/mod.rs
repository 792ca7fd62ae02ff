//! Rendering module for pxavatar.
//!
//! This module turns sprites into pixels and pixels into files: the
//! compositor and upscaler, per-frame quantization with anti-merge
//! stamping, and the GIF, PNG and sprite sheet writers.

pub mod compositor;
mod gif;
mod png;
pub mod quantize;
mod sheet;

pub use compositor::{render, render_at, Canvas, Raster, BACKGROUND, GRID};
pub use gif::{encode_animation, stamp_capacity, stamp_colours, stamp_frame, write_gif, STAMP_STEP};
pub use png::write_png;
pub use quantize::{quantize, IndexedFrame};
pub use sheet::{Cell, SheetPacker};
