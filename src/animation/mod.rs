//! Animation descriptions and the lazy frame sequencer.
//!
//! An [`AnimationSpec`] is a plain description (transform, frame count,
//! per-frame duration). [`FrameSequence`] turns one into rendered rasters on
//! demand, in index order.

use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::compositor::{render, Canvas, Raster};
use crate::types::Sprite;

/// Per-frame transform: `(base sprite, frame index, frame count) -> sprite`.
pub type TransformFn = fn(&Sprite, u32, u32) -> Sprite;

/// Visual intensity of an animation set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Early,
    Advanced,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Early => "early",
            Variant::Advanced => "advanced",
        }
    }

    /// File-name infix; empty for the early variant.
    pub fn suffix(&self) -> &'static str {
        match self {
            Variant::Early => "",
            Variant::Advanced => "-advanced",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of artifact an orchestration unit produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Idle,
    Action,
    Static,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Idle => "idle",
            ArtifactKind::Action => "action",
            ArtifactKind::Static => "static",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Static => "png",
            ArtifactKind::Idle | ArtifactKind::Action => "gif",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One animation loop.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSpec {
    pub transform: TransformFn,
    pub frames: u32,
    /// Per-frame duration in milliseconds.
    pub duration_ms: u32,
}

impl AnimationSpec {
    pub const fn new(transform: TransformFn, frames: u32, duration_ms: u32) -> Self {
        Self {
            transform,
            frames,
            duration_ms,
        }
    }

    /// Length of one loop in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.frames as u64 * self.duration_ms as u64
    }

    /// The sprite for one frame of this loop.
    pub fn frame(&self, base: &Sprite, index: u32) -> Sprite {
        (self.transform)(base, index, self.frames)
    }

    /// Rendered frames at `size`, lazily.
    pub fn sequence<'a>(
        &self,
        base: &'a Sprite,
        canvas: Canvas,
        size: u32,
    ) -> Result<FrameSequence<'a>> {
        FrameSequence::new(base, *self, canvas, size)
    }
}

/// Idle loop plus an optional action loop.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSet {
    pub idle: AnimationSpec,
    pub action: Option<AnimationSpec>,
}

impl AnimationSet {
    pub const fn idle_only(idle: AnimationSpec) -> Self {
        Self { idle, action: None }
    }

    pub const fn with_action(idle: AnimationSpec, action: AnimationSpec) -> Self {
        Self {
            idle,
            action: Some(action),
        }
    }

    /// The loop behind an animated artifact kind; `None` for static or a missing action.
    pub fn get(&self, kind: ArtifactKind) -> Option<&AnimationSpec> {
        match kind {
            ArtifactKind::Idle => Some(&self.idle),
            ArtifactKind::Action => self.action.as_ref(),
            ArtifactKind::Static => None,
        }
    }
}

/// Finite, lazy iterator over `(index, raster)` for one animation.
///
/// Frames are rendered in index order; frame `i` is
/// `render(transform(base, i, n))` scaled to the target size.
pub struct FrameSequence<'a> {
    base: &'a Sprite,
    spec: AnimationSpec,
    canvas: Canvas,
    factor: u32,
    next: u32,
}

impl<'a> FrameSequence<'a> {
    /// Validate `size` against the canvas and prepare the sequence.
    pub fn new(base: &'a Sprite, spec: AnimationSpec, canvas: Canvas, size: u32) -> Result<Self> {
        let factor = canvas.validate_size(size)?;
        Ok(Self {
            base,
            spec,
            canvas,
            factor,
            next: 0,
        })
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = (u32, Raster);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.spec.frames {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let sprite = self.spec.frame(self.base, index);
        Some((index, render(&sprite, &self.canvas).scale(self.factor)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.spec.frames.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSequence<'_> {}

impl FusedIterator for FrameSequence<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AvatarError;
    use crate::types::{BodyPart, Colour, Primitive};

    fn walk(base: &Sprite, frame: u32, _total: u32) -> Sprite {
        base.translate_all(frame as i32, 0)
    }

    fn dot() -> Sprite {
        Sprite::from_parts([BodyPart::new(
            "dot",
            0,
            vec![Primitive::pixel(0, 0, Colour::WHITE)],
        )])
    }

    #[test]
    fn test_frame_count_invariant() {
        let base = dot();
        for n in 1..=64 {
            let spec = AnimationSpec::new(walk, n, 100);
            let seq = spec.sequence(&base, Canvas::default(), 32).unwrap();
            assert_eq!(seq.len(), n as usize);
            let indices: Vec<u32> = seq.map(|(i, _)| i).collect();
            assert_eq!(indices, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_frames_apply_transform() {
        let base = dot();
        let spec = AnimationSpec::new(walk, 3, 100);
        let frames: Vec<Raster> = spec
            .sequence(&base, Canvas::default(), 64)
            .unwrap()
            .map(|(_, r)| r)
            .collect();
        assert_eq!(frames[0].size(), (64, 64));
        assert_eq!(frames[2].get(4, 0), Some(Colour::WHITE));
        assert_eq!(frames[2].get(0, 0), Some(Canvas::default().background));
    }

    #[test]
    fn test_sequence_is_deterministic() {
        let base = dot();
        let spec = AnimationSpec::new(walk, 4, 100);
        let a: Vec<_> = spec.sequence(&base, Canvas::default(), 32).unwrap().collect();
        let b: Vec<_> = spec.sequence(&base, Canvas::default(), 32).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequence_rejects_bad_size() {
        let base = dot();
        let spec = AnimationSpec::new(walk, 4, 100);
        assert!(matches!(
            spec.sequence(&base, Canvas::default(), 48),
            Err(AvatarError::InvalidSize { size: 48, .. })
        ));
    }

    #[test]
    fn test_total_duration() {
        let spec = AnimationSpec::new(walk, 10, 150);
        assert_eq!(spec.total_duration_ms(), 1500);
    }

    #[test]
    fn test_variant_suffix() {
        assert_eq!(Variant::Early.suffix(), "");
        assert_eq!(Variant::Advanced.suffix(), "-advanced");
        assert_eq!(ArtifactKind::Static.extension(), "png");
    }
}
