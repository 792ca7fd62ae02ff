//! pxavatar - pixel-art progression avatar generator
//!
//! A library for rendering small pixel-art character sprites as static
//! keyframes and looping animations. Sprites are assembled from z-ordered
//! primitives, transformed per frame, composited on a fixed 32x32 grid,
//! upscaled by integer factors and written as PNG and GIF files.

pub mod animation;
pub mod archetype;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod transform;
pub mod types;

pub use animation::{AnimationSet, AnimationSpec, ArtifactKind, FrameSequence, Variant};
pub use archetype::{Archetype, Class, Family, Guardian, Tier, Tool};
pub use config::{Config, VariantChoice};
pub use error::{AvatarError, Result};
pub use generate::{generate, Artifact, Failure, GenerateOptions, GenerationReport};
pub use render::{encode_animation, render, render_at, write_gif, write_png, Canvas, Raster};
pub use types::{BodyPart, Colour, Palette, Primitive, Sprite};
