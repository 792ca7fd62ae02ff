//! Core domain types for pxavatar.
//!
//! This module contains the sprite data model:
//! - `Colour` - opaque RGB colour values
//! - `Primitive` - filled rectangles and pixels
//! - `BodyPart` / `Sprite` - named, z-ordered primitive groups
//! - `Palette` - named colour roles for one archetype

mod colour;
mod palette;
mod primitive;
mod sprite;

pub use colour::Colour;
pub use palette::{Palette, CORE_ROLES};
pub use primitive::Primitive;
pub use sprite::{BodyPart, Sprite};
