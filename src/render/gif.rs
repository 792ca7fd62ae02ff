//! Looping GIF output.
//!
//! Before quantization every frame gets a two-pixel stamp in its
//! bottom-right corner, derived from the frame index. Encoders drop or merge
//! consecutive identical frames; the stamp keeps every frame distinct so the
//! frame count and timing survive encoding. The stamp colours sit a few
//! steps off the background, moving each channel toward whichever end of
//! `[0, 255]` has more room, and are invisible at display sizes.

use std::io::Cursor;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use super::compositor::Raster;
use super::quantize::quantize;
use crate::error::{AvatarError, Result};
use crate::types::Colour;

/// Frame indices per red step before the green channel advances.
pub const STAMP_STEP: u32 = 16;

/// Room left in a channel on its roomier side, and which way that is.
fn headroom(channel: u8) -> (u32, i32) {
    if channel < 128 {
        (255 - channel as u32, 1)
    } else {
        (channel as u32, -1)
    }
}

/// Number of frames that get a distinct stamp on `background`.
pub fn stamp_capacity(background: Colour) -> u32 {
    let [_, g, _] = background.to_rgb();
    STAMP_STEP * headroom(g).0
}

/// The two stamp colours for frame `index`: `[corner, left of corner]`.
///
/// Unique per index below [`stamp_capacity`].
pub fn stamp_colours(background: Colour, index: u32) -> [Colour; 2] {
    let [r, g, _] = background.to_rgb();
    let red = headroom(r).1 * (1 + (index % STAMP_STEP) as i32);
    let green = headroom(g).1 * (1 + (index / STAMP_STEP) as i32);
    [background.offset(red, 0, 0), background.offset(0, green, 0)]
}

/// Write the index stamp into the bottom row of `raster`.
pub fn stamp_frame(raster: &mut Raster, background: Colour, index: u32) {
    let (w, h) = (raster.width() as i32, raster.height() as i32);
    let [corner, beside] = stamp_colours(background, index);
    raster.set(w - 1, h - 1, corner);
    raster.set(w - 2, h - 1, beside);
}

/// Encode frames as an infinitely looping GIF, `delay_ms` per frame.
///
/// Fails with an encoding error on zero frames, when a frame's size
/// differs from the first, or when there are more frames than distinct
/// stamps for `background`.
pub fn encode_animation(
    frames: impl IntoIterator<Item = Raster>,
    delay_ms: u32,
    background: Colour,
) -> Result<(Vec<u8>, u32)> {
    let mut buffer = Vec::new();
    let mut count = 0u32;
    let mut first_size = None;
    let capacity = stamp_capacity(background);

    {
        let mut encoder = GifEncoder::new(Cursor::new(&mut buffer));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| AvatarError::encoding(e.to_string()))?;

        for mut raster in frames {
            if count >= capacity {
                return Err(AvatarError::encoding(format!(
                    "more than {capacity} frames cannot be stamped apart on background {background}"
                )));
            }
            let size = raster.size();
            match first_size {
                None => first_size = Some(size),
                Some(expected) if expected != size => {
                    return Err(AvatarError::encoding(format!(
                        "frame {} is {}x{}, expected {}x{}",
                        count, size.0, size.1, expected.0, expected.1
                    )));
                }
                Some(_) => {}
            }

            stamp_frame(&mut raster, background, count);
            let indexed = quantize(&raster, &stamp_colours(background, count));
            let frame = Frame::from_parts(
                indexed.to_rgba_image(),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            );
            encoder
                .encode_frame(frame)
                .map_err(|e| AvatarError::encoding(e.to_string()))?;
            count += 1;
        }
    }

    if count == 0 {
        return Err(AvatarError::encoding("animation has no frames"));
    }
    Ok((buffer, count))
}

/// Encode and write a GIF; returns the number of frames written.
pub fn write_gif(
    path: &Path,
    frames: impl IntoIterator<Item = Raster>,
    delay_ms: u32,
    background: Colour,
) -> Result<u32> {
    let (bytes, count) = encode_animation(frames, delay_ms, background)?;
    std::fs::write(path, bytes).map_err(|e| AvatarError::io(path, e))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::compositor::BACKGROUND;
    use image::codecs::gif::GifDecoder;
    use image::AnimationDecoder;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn decode(bytes: &[u8]) -> Vec<image::Frame> {
        GifDecoder::new(Cursor::new(bytes))
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap()
    }

    #[test]
    fn test_stamp_is_unique_per_index() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..(STAMP_STEP * 40) {
            assert!(seen.insert(stamp_colours(BACKGROUND, i)), "index {i}");
        }
    }

    #[test]
    fn test_stamp_position() {
        let mut raster = Raster::filled(64, 64, BACKGROUND);
        stamp_frame(&mut raster, BACKGROUND, 17);
        assert_eq!(raster.get(63, 63), Some(BACKGROUND.offset(2, 0, 0)));
        assert_eq!(raster.get(62, 63), Some(BACKGROUND.offset(0, 2, 0)));
        assert_eq!(raster.get(61, 63), Some(BACKGROUND));
    }

    #[test]
    fn test_identical_frames_stay_distinct() {
        let frames = vec![Raster::filled(32, 32, BACKGROUND); 6];
        let (bytes, count) = encode_animation(frames, 150, BACKGROUND).unwrap();
        assert_eq!(count, 6);

        let decoded = decode(&bytes);
        assert_eq!(decoded.len(), 6);
        for (i, a) in decoded.iter().enumerate() {
            assert_eq!(a.delay().numer_denom_ms(), (150, 1));
            for b in &decoded[i + 1..] {
                assert_ne!(a.buffer(), b.buffer());
            }
        }
    }

    #[test]
    fn test_stamp_moves_down_on_bright_background() {
        let bright = Colour::rgb(250, 250, 250);
        assert_eq!(
            stamp_colours(bright, 0),
            [Colour::rgb(249, 250, 250), Colour::rgb(250, 249, 250)]
        );

        let mut seen = std::collections::HashSet::new();
        for i in 0..stamp_capacity(bright) {
            assert!(seen.insert(stamp_colours(bright, i)), "index {i}");
        }
    }

    #[test]
    fn test_stamp_capacity() {
        assert_eq!(stamp_capacity(BACKGROUND), STAMP_STEP * (255 - 13));
        assert_eq!(stamp_capacity(Colour::rgb(250, 250, 250)), STAMP_STEP * 250);
        assert_eq!(stamp_capacity(Colour::rgb(0, 128, 0)), STAMP_STEP * 128);
    }

    #[test]
    fn test_identical_frames_stay_distinct_on_near_white() {
        let bright = Colour::rgb(250, 250, 250);
        let frames = vec![Raster::filled(32, 32, bright); 64];
        let (bytes, count) = encode_animation(frames, 150, bright).unwrap();
        assert_eq!(count, 64);

        let decoded = decode(&bytes);
        assert_eq!(decoded.len(), 64);
        for (i, a) in decoded.iter().enumerate() {
            for b in &decoded[i + 1..] {
                assert_ne!(a.buffer(), b.buffer(), "frame {i}");
            }
        }
    }

    #[test]
    fn test_too_many_frames_for_stamps_fails() {
        let grey = Colour::rgb(128, 128, 128);
        let capacity = stamp_capacity(grey) as usize;
        let frames = std::iter::repeat(Raster::filled(32, 32, grey)).take(capacity + 1);
        let err = encode_animation(frames, 80, grey).unwrap_err();
        assert!(matches!(err, AvatarError::Encoding { .. }));
    }

    #[test]
    fn test_loops_forever() {
        let frames = vec![Raster::filled(32, 32, BACKGROUND); 2];
        let (bytes, _) = encode_animation(frames, 80, BACKGROUND).unwrap();
        assert!(bytes.windows(11).any(|w| w == b"NETSCAPE2.0"));
    }

    #[test]
    fn test_zero_frames_fails() {
        let err = encode_animation(Vec::new(), 150, BACKGROUND).unwrap_err();
        assert!(matches!(err, AvatarError::Encoding { .. }));
    }

    #[test]
    fn test_mismatched_frame_size_fails() {
        let frames = vec![
            Raster::filled(32, 32, BACKGROUND),
            Raster::filled(64, 64, BACKGROUND),
        ];
        let err = encode_animation(frames, 150, BACKGROUND).unwrap_err();
        assert!(matches!(err, AvatarError::Encoding { .. }));
    }

    #[test]
    fn test_write_gif() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loop.gif");
        let frames = vec![Raster::filled(32, 32, Colour::WHITE); 3];
        assert_eq!(write_gif(&path, frames, 100, BACKGROUND).unwrap(), 3);
        assert_eq!(decode(&std::fs::read(&path).unwrap()).len(), 3);
    }
}
