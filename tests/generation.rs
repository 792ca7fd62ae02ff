//! End-to-end generation tests: files on disk, decoded back.

use std::collections::BTreeSet;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Frame};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use pxavatar::{generate, Archetype, AvatarError, Colour, GenerateOptions, Tier, Variant};

fn options(dir: &Path, selectors: &[&str], sizes: &[u32]) -> GenerateOptions {
    GenerateOptions {
        output: dir.to_path_buf(),
        selectors: selectors.iter().map(|s| s.to_string()).collect(),
        sizes: sizes.to_vec(),
        ..GenerateOptions::default()
    }
}

fn decode_gif(path: &Path) -> Vec<Frame> {
    let bytes = fs::read(path).unwrap();
    GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

fn listing(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_tier_three_idle_at_128() {
    let dir = tempdir().unwrap();
    let report = generate(&options(dir.path(), &["3"], &[128])).unwrap();
    assert!(report.is_success());

    let gif = dir.path().join("tier-3-idle-128.gif");
    let frames = decode_gif(&gif);
    assert_eq!(frames.len(), 10);

    let mut total_ms = 0;
    for frame in &frames {
        assert_eq!(frame.buffer().dimensions(), (128, 128));
        let (num, den) = frame.delay().numer_denom_ms();
        total_ms += num / den;
    }
    assert_eq!(total_ms, 1500);

    let bytes = fs::read(&gif).unwrap();
    assert!(bytes.windows(11).any(|w| w == b"NETSCAPE2.0"));

    // static keyframe matches idle frame 0 everywhere except the stamp
    let png = image::open(dir.path().join("tier-3-static-128.png"))
        .unwrap()
        .to_rgb8();
    let first = frames[0].buffer();
    for (x, y, pixel) in png.enumerate_pixels() {
        if y == 127 && x >= 126 {
            continue;
        }
        let [r, g, b, a] = first.get_pixel(x, y).0;
        assert_eq!([r, g, b], pixel.0, "pixel ({x}, {y})");
        assert_eq!(a, 255);
    }
}

#[test]
fn test_frames_stay_distinct_after_encoding() {
    let dir = tempdir().unwrap();
    generate(&options(dir.path(), &["tier-1", "guardian-1"], &[64])).unwrap();

    for name in ["tier-1-idle-64.gif", "tier-1-action-64.gif", "guardian-1-idle-64.gif"] {
        let frames = decode_gif(&dir.path().join(name));
        for (i, a) in frames.iter().enumerate() {
            for b in &frames[i + 1..] {
                assert_ne!(a.buffer(), b.buffer(), "{name}");
            }
        }
    }
}

#[test]
fn test_frames_stay_distinct_on_a_bright_background() {
    let dir = tempdir().unwrap();
    let mut opts = options(
        dir.path(),
        &["tier-1", "tier-3", "tier-5", "class-builder", "guardian-3"],
        &[32],
    );
    opts.background = "#FAFAFA".parse::<Colour>().unwrap();
    let report = generate(&opts).unwrap();
    assert!(report.is_success());

    for artifact in report.written.iter().filter(|a| a.duration_ms.is_some()) {
        let frames = decode_gif(&dir.path().join(&artifact.file));
        assert_eq!(frames.len() as u32, artifact.frames, "{}", artifact.file);
        for pair in frames.windows(2) {
            assert_ne!(pair[0].buffer(), pair[1].buffer(), "{}", artifact.file);
        }
        assert_ne!(
            frames[0].buffer(),
            frames[frames.len() - 1].buffer(),
            "{}",
            artifact.file
        );
    }
}

#[test]
fn test_invalid_selector_does_not_stop_the_run() {
    let dir = tempdir().unwrap();
    let report = generate(&options(
        dir.path(),
        &["tier-1", "wizard", "class-builder"],
        &[32],
    ))
    .unwrap();

    assert_eq!(report.written_count(), 3 + 2);
    assert_eq!(report.failed_count(), 1);
    assert!(matches!(
        &report.failed[0].error,
        AvatarError::InvalidArchetype { selector, .. } if selector == "wizard"
    ));
    assert!(dir.path().join("class-builder-idle-32.gif").is_file());
}

#[test]
fn test_invalid_size_fails_per_archetype() {
    let dir = tempdir().unwrap();
    let report = generate(&options(dir.path(), &["tier-2", "tool-clay"], &[32, 50])).unwrap();

    assert_eq!(report.failed_count(), 2);
    assert_eq!(report.written_count(), 3 + 2);
}

#[test]
fn test_two_runs_produce_identical_files() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    let mut opts = options(a.path(), &["tier-4", "scribe", "ouroboros"], &[32, 128]);
    opts.variants = vec![Variant::Early, Variant::Advanced];
    opts.manifest = true;

    let first = generate(&opts).unwrap();
    opts.output = b.path().to_path_buf();
    let second = generate(&opts).unwrap();

    assert_eq!(first.files(), second.files());
    assert_eq!(listing(a.path()), listing(b.path()));
    for name in listing(a.path()) {
        assert_eq!(
            fs::read(a.path().join(&name)).unwrap(),
            fs::read(b.path().join(&name)).unwrap(),
            "{name}"
        );
    }
    assert!(listing(a.path()).contains("tier-4-action-advanced.gif"));
    assert!(!listing(a.path()).contains("class-scribe-idle-advanced.gif"));
}

#[test]
fn test_file_names_at_default_size() {
    let dir = tempdir().unwrap();
    let report = generate(&options(dir.path(), &["tier-2", "tool-clay"], &[128])).unwrap();

    insta::assert_debug_snapshot!(report.files(), @r###"
    [
        "tier-2-action-128.gif",
        "tier-2-action.gif",
        "tier-2-idle-128.gif",
        "tier-2-idle.gif",
        "tier-2-static-128.png",
        "tier-2-static.png",
        "tool-clay-idle-128.gif",
        "tool-clay-idle.gif",
        "tool-clay-static-128.png",
        "tool-clay-static.png",
    ]
    "###);
}

#[test]
fn test_tier_two_and_four_keyframes_differ() {
    let dir = tempdir().unwrap();
    generate(&options(dir.path(), &["2", "4"], &[128])).unwrap();

    let two = fs::read(dir.path().join("tier-2-static.png")).unwrap();
    let four = fs::read(dir.path().join("tier-4-static.png")).unwrap();
    assert_ne!(two, four);

    let early = Archetype::Tier(Tier::RepoArchitect).animations(Variant::Early);
    assert_eq!(early.idle.frames, 8);
    assert_eq!(early.action.map(|a| a.frames), Some(14));
}
