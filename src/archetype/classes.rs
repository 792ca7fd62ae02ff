//! Character classes: builder, scribe, strategist, alchemist and polymath.
//!
//! Classes only have an idle loop.

use std::f64::consts::TAU;

use super::anatomy::{
    arms, base_body, face, features, Outfit, HAIR_DARK, METAL_DARK, METAL_LIGHT, METAL_MID,
    PARCHMENT, PARCH_DARK, SKIN,
};
use crate::animation::{AnimationSet, AnimationSpec};
use crate::transform::effects::{cycle, every_other_pair, in_grid, paint, phase, polar, pulse, BOB_8};
use crate::types::{BodyPart, Colour, Palette, Primitive, Sprite};

/// One of the five character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Builder,
    Scribe,
    Strategist,
    Alchemist,
    Polymath,
}

impl Class {
    pub const ALL: [Class; 5] = [
        Class::Builder,
        Class::Scribe,
        Class::Strategist,
        Class::Alchemist,
        Class::Polymath,
    ];

    /// Lowercase class name as used in ids and selectors.
    pub fn name(self) -> &'static str {
        match self {
            Class::Builder => "builder",
            Class::Scribe => "scribe",
            Class::Strategist => "strategist",
            Class::Alchemist => "alchemist",
            Class::Polymath => "polymath",
        }
    }

    pub fn from_name(name: &str) -> Option<Class> {
        Class::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Class::Builder => &BUILDER,
            Class::Scribe => &SCRIBE,
            Class::Strategist => &STRATEGIST,
            Class::Alchemist => &ALCHEMIST,
            Class::Polymath => &POLYMATH,
        }
    }

    pub fn sprite(self) -> Sprite {
        match self {
            Class::Builder => builder_sprite(),
            Class::Scribe => scribe_sprite(),
            Class::Strategist => strategist_sprite(),
            Class::Alchemist => alchemist_sprite(),
            Class::Polymath => polymath_sprite(),
        }
    }

    pub fn animations(self) -> AnimationSet {
        let idle = match self {
            Class::Builder => AnimationSpec::new(builder_idle, 8, 150),
            Class::Scribe => AnimationSpec::new(scribe_idle, 8, 150),
            Class::Strategist => AnimationSpec::new(strategist_idle, 8, 150),
            Class::Alchemist => AnimationSpec::new(alchemist_idle, 10, 150),
            Class::Polymath => AnimationSpec::new(polymath_idle, 10, 150),
        };
        AnimationSet::idle_only(idle)
    }
}

// Class palettes carry a second accent instead of a distinct glow.

const BUILDER_ACCENT2: Colour = Colour::rgb(255, 180, 60);
const SCRIBE_ACCENT2: Colour = Colour::rgb(190, 180, 150);
const STRATEGIST_ACCENT2: Colour = Colour::rgb(220, 190, 70);
const ALCHEMIST_ACCENT2: Colour = Colour::rgb(60, 170, 100);
const POLYMATH_ACCENT2: Colour = Colour::rgb(100, 170, 160);

const BUILDER: Palette = Palette {
    name: "builder",
    primary: Colour::rgb(100, 140, 180),
    secondary: Colour::rgb(70, 105, 145),
    dark: Colour::rgb(45, 70, 100),
    highlight: Colour::rgb(140, 175, 210),
    glow: Colour::rgb(100, 140, 180),
    accent: Colour::rgb(220, 150, 50),
    extras: &[("accent2", BUILDER_ACCENT2)],
};

const SCRIBE: Palette = Palette {
    name: "scribe",
    primary: Colour::rgb(65, 95, 165),
    secondary: Colour::rgb(45, 70, 130),
    dark: Colour::rgb(30, 50, 95),
    highlight: Colour::rgb(100, 130, 200),
    glow: Colour::rgb(65, 95, 165),
    accent: Colour::rgb(220, 210, 180),
    extras: &[("accent2", SCRIBE_ACCENT2)],
};

const STRATEGIST: Palette = Palette {
    name: "strategist",
    primary: Colour::rgb(75, 110, 60),
    secondary: Colour::rgb(55, 85, 45),
    dark: Colour::rgb(35, 60, 30),
    highlight: Colour::rgb(110, 150, 90),
    glow: Colour::rgb(75, 110, 60),
    accent: Colour::rgb(200, 170, 50),
    extras: &[("accent2", STRATEGIST_ACCENT2)],
};

const ALCHEMIST: Palette = Palette {
    name: "alchemist",
    primary: Colour::rgb(110, 60, 150),
    secondary: Colour::rgb(80, 45, 115),
    dark: Colour::rgb(55, 30, 80),
    highlight: Colour::rgb(150, 95, 190),
    glow: Colour::rgb(110, 60, 150),
    accent: Colour::rgb(80, 200, 120),
    extras: &[("accent2", ALCHEMIST_ACCENT2)],
};

const POLYMATH: Palette = Palette {
    name: "polymath",
    primary: Colour::rgb(140, 120, 170),
    secondary: Colour::rgb(105, 90, 135),
    dark: Colour::rgb(70, 60, 95),
    highlight: Colour::rgb(175, 155, 205),
    glow: Colour::rgb(140, 120, 170),
    accent: Colour::rgb(200, 170, 100),
    extras: &[("accent2", POLYMATH_ACCENT2)],
};

/// Sleeves wider than the base arms, used by robed classes.
fn wide_sleeves(cloth: Colour) -> BodyPart {
    BodyPart::new(
        "sleeves",
        15,
        vec![
            Primitive::rect(10, 11, 12, 15, cloth),
            Primitive::rect(19, 11, 21, 15, cloth),
            Primitive::pixel(10, 16, SKIN),
            Primitive::pixel(21, 16, SKIN),
        ],
    )
}

fn outfit(p: &Palette, boot_dark: Colour) -> Outfit {
    Outfit {
        cloth: p.secondary,
        cloth_dark: p.dark,
        boot: p.dark,
        boot_dark,
    }
}

fn builder_sprite() -> Sprite {
    let p = &BUILDER;
    let mut head = vec![
        // hard hat
        Primitive::rect(13, 2, 18, 3, p.accent),
        Primitive::rect(12, 4, 19, 4, p.accent),
        Primitive::pixel(15, 2, BUILDER_ACCENT2),
        Primitive::pixel(16, 2, BUILDER_ACCENT2),
        Primitive::rect(13, 5, 18, 9, SKIN),
    ];
    head.extend(features());

    base_body(outfit(p, Colour::rgb(35, 40, 50)))
        .with(BodyPart::new("head", 20, head))
        .with(arms(p.secondary))
        .with(BodyPart::new(
            "wrench",
            22,
            vec![
                Primitive::rect(21, 10, 21, 15, METAL_MID),
                Primitive::rect(21, 8, 22, 9, METAL_LIGHT),
                Primitive::pixel(21, 7, METAL_LIGHT),
                Primitive::pixel(22, 10, METAL_LIGHT),
                Primitive::pixel(20, 14, SKIN),
                Primitive::pixel(20, 15, SKIN),
            ],
        ))
        .with(BodyPart::new(
            "terminal",
            18,
            vec![
                Primitive::rect(7, 11, 10, 16, p.dark),
                Primitive::rect(8, 12, 9, 15, Colour::rgb(20, 25, 35)),
                Primitive::pixel(8, 13, p.highlight),
                Primitive::pixel(9, 13, p.highlight),
                Primitive::pixel(8, 14, p.primary),
                Primitive::pixel(8, 15, p.primary),
                Primitive::rect(8, 17, 9, 17, METAL_DARK),
            ],
        ))
}

fn scribe_sprite() -> Sprite {
    let p = &SCRIBE;
    let shaft = Colour::rgb(120, 100, 70);
    Sprite::from_parts([
        face(5),
        BodyPart::new(
            "hood",
            25,
            vec![
                Primitive::rect(13, 3, 18, 4, p.secondary),
                Primitive::pixel(12, 5, p.dark),
                Primitive::pixel(12, 6, p.dark),
                Primitive::pixel(19, 5, p.dark),
                Primitive::pixel(19, 6, p.dark),
            ],
        ),
        BodyPart::new(
            "robe",
            10,
            vec![
                Primitive::rect(13, 10, 18, 10, p.dark),
                Primitive::rect(12, 11, 19, 21, p.secondary),
                Primitive::rect(11, 22, 20, 23, p.dark),
                Primitive::pixel(15, 13, p.dark),
                Primitive::pixel(16, 13, p.dark),
                Primitive::pixel(15, 17, p.dark),
                Primitive::pixel(16, 17, p.dark),
            ],
        ),
        wide_sleeves(p.primary),
        BodyPart::new(
            "quill",
            22,
            vec![
                Primitive::pixel(22, 8, p.accent),
                Primitive::pixel(22, 9, p.accent),
                Primitive::pixel(23, 9, SCRIBE_ACCENT2),
                Primitive::pixel(22, 10, shaft),
                Primitive::pixel(22, 11, shaft),
                Primitive::pixel(22, 12, Colour::rgb(100, 80, 50)),
            ],
        ),
        BodyPart::new(
            "scroll",
            18,
            vec![
                Primitive::rect(6, 12, 9, 12, PARCH_DARK),
                Primitive::rect(6, 13, 9, 18, PARCHMENT),
                Primitive::rect(6, 19, 9, 19, PARCH_DARK),
                Primitive::pixel(7, 14, p.primary),
                Primitive::pixel(8, 14, p.primary),
                Primitive::pixel(7, 15, p.secondary),
                Primitive::pixel(8, 15, p.secondary),
                Primitive::pixel(7, 16, p.primary),
                Primitive::pixel(7, 17, p.secondary),
            ],
        ),
    ])
}

fn strategist_sprite() -> Sprite {
    let p = &STRATEGIST;
    let mut head = vec![
        // beret with badge
        Primitive::rect(13, 3, 19, 4, p.primary),
        Primitive::pixel(13, 3, p.highlight),
        Primitive::rect(13, 5, 18, 9, SKIN),
    ];
    head.extend(features());

    base_body(outfit(p, Colour::rgb(25, 35, 20)))
        .with(BodyPart::new("head", 20, head))
        .with(BodyPart::new(
            "body",
            10,
            vec![
                Primitive::rect(15, 10, 16, 10, SKIN),
                Primitive::rect(13, 11, 18, 16, p.secondary),
                Primitive::rect(13, 11, 18, 11, p.primary),
                Primitive::rect(13, 15, 18, 15, p.dark),
                Primitive::pixel(15, 15, p.accent),
                Primitive::pixel(16, 15, p.accent),
            ],
        ))
        .with(BodyPart::new(
            "epaulettes",
            18,
            vec![
                Primitive::rect(10, 10, 12, 11, p.accent),
                Primitive::rect(19, 10, 21, 11, p.accent),
                Primitive::pixel(10, 10, STRATEGIST_ACCENT2),
                Primitive::pixel(21, 10, STRATEGIST_ACCENT2),
            ],
        ))
        .with(arms(p.secondary))
        .with(BodyPart::new(
            "pointer",
            22,
            vec![
                Primitive::rect(21, 8, 21, 15, p.dark),
                Primitive::pixel(21, 7, p.accent),
                Primitive::pixel(20, 14, SKIN),
            ],
        ))
        .with(BodyPart::new(
            "map",
            18,
            vec![
                Primitive::rect(7, 18, 12, 22, PARCHMENT),
                Primitive::rect(7, 18, 12, 18, PARCH_DARK),
                Primitive::rect(7, 22, 12, 22, PARCH_DARK),
                Primitive::pixel(8, 19, p.primary),
                Primitive::pixel(9, 20, p.primary),
                Primitive::pixel(10, 19, p.primary),
                Primitive::pixel(9, 21, p.accent),
                Primitive::pixel(11, 20, p.accent),
            ],
        ))
        .with(BodyPart::new(
            "flag",
            19,
            vec![
                Primitive::pixel(8, 16, p.dark),
                Primitive::pixel(8, 17, p.dark),
                Primitive::pixel(9, 16, p.accent),
                Primitive::pixel(10, 16, STRATEGIST_ACCENT2),
            ],
        ))
}

fn alchemist_sprite() -> Sprite {
    let p = &ALCHEMIST;
    Sprite::from_parts([
        face(5),
        BodyPart::new(
            "goggles",
            25,
            vec![
                Primitive::rect(13, 4, 18, 4, p.dark),
                Primitive::pixel(14, 5, p.accent),
                Primitive::pixel(17, 5, p.accent),
                Primitive::pixel(13, 5, p.secondary),
                Primitive::pixel(15, 5, METAL_MID),
                Primitive::pixel(16, 5, METAL_MID),
                Primitive::pixel(18, 5, p.secondary),
            ],
        ),
        BodyPart::new(
            "robe",
            8,
            vec![
                Primitive::rect(15, 10, 16, 10, SKIN),
                Primitive::rect(12, 11, 19, 21, p.secondary),
                Primitive::rect(11, 22, 20, 23, p.dark),
                // stains
                Primitive::pixel(14, 14, p.accent),
                Primitive::pixel(17, 18, p.accent),
                Primitive::pixel(13, 20, ALCHEMIST_ACCENT2),
            ],
        ),
        wide_sleeves(p.primary),
        BodyPart::new(
            "flask",
            22,
            vec![
                Primitive::pixel(23, 8, METAL_LIGHT),
                Primitive::rect(23, 9, 23, 10, Colour::rgb(180, 190, 200)),
                Primitive::rect(22, 11, 24, 14, Colour::rgb(160, 175, 190)),
                Primitive::rect(22, 12, 24, 13, p.accent),
                Primitive::pixel(23, 11, p.highlight),
            ],
        ),
        BodyPart::new(
            "mortar",
            18,
            vec![
                Primitive::rect(7, 14, 10, 16, METAL_MID),
                Primitive::rect(8, 13, 9, 13, METAL_DARK),
                Primitive::rect(7, 16, 10, 16, METAL_DARK),
                Primitive::pixel(8, 12, p.secondary),
                Primitive::pixel(7, 11, p.secondary),
                Primitive::pixel(8, 15, ALCHEMIST_ACCENT2),
                Primitive::pixel(9, 15, p.accent),
            ],
        ),
    ])
}

fn polymath_sprite() -> Sprite {
    let p = &POLYMATH;
    let mut head = vec![
        Primitive::rect(13, 4, 18, 4, HAIR_DARK),
        Primitive::rect(13, 5, 18, 9, SKIN),
        Primitive::rect(13, 4, 18, 4, p.primary),
        Primitive::pixel(15, 4, p.accent),
        Primitive::pixel(16, 4, p.accent),
    ];
    head.extend(features());

    base_body(outfit(p, Colour::rgb(45, 40, 55)))
        .with(BodyPart::new("head", 20, head))
        .with(BodyPart::new(
            "body",
            10,
            vec![
                Primitive::rect(15, 10, 16, 10, SKIN),
                Primitive::rect(13, 11, 18, 16, p.secondary),
                Primitive::rect(13, 15, 18, 15, p.dark),
                // one trim pixel per sibling class
                Primitive::pixel(13, 11, BUILDER.primary),
                Primitive::pixel(18, 11, SCRIBE.primary),
                Primitive::pixel(13, 13, STRATEGIST.primary),
                Primitive::pixel(18, 13, ALCHEMIST.primary),
            ],
        ))
        .with(arms(p.secondary))
        .with(BodyPart::new(
            "symbol_gear",
            28,
            vec![
                Primitive::pixel(22, 5, BUILDER.accent),
                Primitive::pixel(21, 4, BUILDER.primary),
                Primitive::pixel(23, 4, BUILDER.primary),
                Primitive::pixel(21, 6, BUILDER.primary),
                Primitive::pixel(23, 6, BUILDER.primary),
            ],
        ))
        .with(BodyPart::new(
            "symbol_quill",
            28,
            vec![
                Primitive::pixel(8, 8, SCRIBE.accent),
                Primitive::pixel(8, 9, SCRIBE.primary),
                Primitive::pixel(8, 10, SCRIBE.secondary),
            ],
        ))
        .with(BodyPart::new(
            "symbol_compass",
            28,
            vec![
                Primitive::pixel(23, 18, STRATEGIST.accent),
                Primitive::pixel(22, 17, STRATEGIST.primary),
                Primitive::pixel(24, 19, STRATEGIST.primary),
                Primitive::pixel(22, 19, STRATEGIST.highlight),
                Primitive::pixel(24, 17, STRATEGIST.highlight),
            ],
        ))
}

// Idle transforms

fn builder_idle(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    let tapping = every_other_pair(frame);
    let s = base
        .translate_all(0, cycle(&BOB_8, frame))
        .translate_part("wrench", 0, i32::from(tapping));
    if tapping {
        s
    } else {
        s.recolor_part("terminal", -30)
    }
}

const QUILL_DX: [i32; 8] = [0, 0, -1, 0, 0, 0, 1, 0];
const QUILL_DY: [i32; 8] = [0, -1, 0, 0, 1, 0, 0, -1];

fn scribe_idle(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    let p = &SCRIBE;
    let drops = paint(
        (0..2).map(|i| (22 + (i * 2 - 1), 12 - ((frame as i32 + i * 3) % 6))),
        p.primary,
    );
    base.translate_part("quill", cycle(&QUILL_DX, frame), cycle(&QUILL_DY, frame))
        .add_pixels("ink_drops", drops, 26)
}

const FLAG_DX: [i32; 8] = [0, 1, 1, 0, 0, -1, -1, 0];

fn strategist_idle(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    base.translate_part("pointer", 0, i32::from(every_other_pair(frame)))
        .translate_part("flag", cycle(&FLAG_DX, frame), 0)
        .translate_part("head", 0, cycle(&BOB_8, frame))
}

fn alchemist_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ALCHEMIST;
    let bubbles = paint(
        (0..3).map(|i| (23 + i % 2, 8 - ((frame as i32 + i * 3) % 7))),
        p.accent,
    );
    let angle = TAU * phase(frame, total);
    let swirl = paint([polar(8, 14, 1.5, 1.0, angle)], p.highlight);
    base.add_pixels("bubbles", bubbles, 24)
        .add_pixels("swirl", swirl, 19)
}

fn polymath_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let symbols = [
        ("orbit_gear", BUILDER.accent),
        ("orbit_quill", SCRIBE.primary),
        ("orbit_compass", STRATEGIST.accent),
    ];

    let mut s = base
        .remove_part("symbol_gear")
        .remove_part("symbol_quill")
        .remove_part("symbol_compass");
    for (i, (name, colour)) in symbols.into_iter().enumerate() {
        let angle = TAU * phase(frame, total) + i as f64 * (TAU / 3.0);
        let (x, y) = polar(16, 12, 9.0, 9.0, angle);
        if in_grid(x, y) {
            s = s.add_pixels(name, [(x, y, colour)], 28);
        }
    }
    s.recolor_part("body", pulse(15.0, frame, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counts() {
        let frames: Vec<u32> = Class::ALL
            .iter()
            .map(|c| c.animations().idle.frames)
            .collect();
        assert_eq!(frames, vec![8, 8, 8, 10, 10]);
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(Class::from_name("Scribe"), Some(Class::Scribe));
        assert_eq!(Class::from_name("POLYMATH"), Some(Class::Polymath));
        assert_eq!(Class::from_name("bard"), None);
    }

    #[test]
    fn test_polymath_symbols_orbit() {
        let base = Class::Polymath.sprite();
        let frame = polymath_idle(&base, 0, 10);
        assert!(!frame.contains("symbol_gear"));
        // angle 0: (16 + 9, 12)
        assert_eq!(
            frame.get("orbit_gear").unwrap().primitives,
            vec![Primitive::pixel(25, 12, BUILDER.accent)]
        );
        assert!(frame.contains("orbit_quill"));
        assert!(frame.contains("orbit_compass"));
    }

    #[test]
    fn test_builder_terminal_dims_on_off_frames() {
        let base = Class::Builder.sprite();
        let on = builder_idle(&base, 0, 8);
        let off = builder_idle(&base, 2, 8);
        let bright = on.get("terminal").unwrap().primitives[2].colour();
        let dim = off.get("terminal").unwrap().primitives[2].colour();
        assert_eq!(dim, bright.brighten(-30));
    }

    #[test]
    fn test_accent2_role() {
        assert_eq!(Class::Scribe.palette().get("accent2"), Some(SCRIBE_ACCENT2));
    }
}
