//! Partner tool avatars: clay, instantly, heyreach and ouroboros.

use std::f64::consts::TAU;

use crate::animation::{AnimationSet, AnimationSpec};
use crate::transform::effects::{compass, cycle, in_grid, paint, phase, pulse, BOB_10, BOB_8};
use crate::types::{BodyPart, Colour, Palette, Primitive, Sprite};

/// One of the partner tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    Clay,
    Instantly,
    Heyreach,
    Ouroboros,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Clay, Tool::Instantly, Tool::Heyreach, Tool::Ouroboros];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Clay => "clay",
            Tool::Instantly => "instantly",
            Tool::Heyreach => "heyreach",
            Tool::Ouroboros => "ouroboros",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Tool::Clay => &CLAY,
            Tool::Instantly => &INSTANTLY,
            Tool::Heyreach => &HEYREACH,
            Tool::Ouroboros => &OUROBOROS,
        }
    }

    pub fn sprite(self) -> Sprite {
        match self {
            Tool::Clay => clay_sprite(),
            Tool::Instantly => instantly_sprite(),
            Tool::Heyreach => heyreach_sprite(),
            Tool::Ouroboros => ouroboros_sprite(),
        }
    }

    pub fn animations(self) -> AnimationSet {
        let idle = match self {
            Tool::Clay => AnimationSpec::new(clay_idle, 10, 150),
            Tool::Instantly => AnimationSpec::new(instantly_idle, 8, 100),
            Tool::Heyreach => AnimationSpec::new(heyreach_idle, 10, 150),
            Tool::Ouroboros => AnimationSpec::new(ouroboros_idle, 8, 150),
        };
        AnimationSet::idle_only(idle)
    }
}

const RAINBOW: [Colour; 5] = [
    Colour::rgb(255, 120, 80),
    Colour::rgb(255, 200, 60),
    Colour::rgb(80, 220, 130),
    Colour::rgb(80, 160, 255),
    Colour::rgb(200, 100, 255),
];

const CLAY: Palette = Palette {
    name: "clay",
    primary: Colour::rgb(255, 120, 80),
    secondary: Colour::rgb(255, 200, 60),
    dark: Colour::rgb(120, 50, 30),
    highlight: Colour::rgb(120, 220, 255),
    glow: Colour::rgb(200, 100, 255),
    accent: Colour::rgb(80, 220, 130),
    extras: &[
        ("rainbow_1", RAINBOW[0]),
        ("rainbow_2", RAINBOW[1]),
        ("rainbow_3", RAINBOW[2]),
        ("rainbow_4", RAINBOW[3]),
        ("rainbow_5", RAINBOW[4]),
    ],
};

const BOLT: Colour = Colour::WHITE;

const INSTANTLY: Palette = Palette {
    name: "instantly",
    primary: Colour::rgb(85, 222, 252),
    secondary: Colour::rgb(40, 140, 200),
    dark: Colour::rgb(20, 60, 100),
    highlight: Colour::rgb(227, 244, 1),
    glow: Colour::rgb(120, 240, 255),
    accent: Colour::rgb(255, 255, 100),
    extras: &[("bolt", BOLT)],
};

const RING: Colour = Colour::rgb(200, 170, 255);

const HEYREACH: Palette = Palette {
    name: "heyreach",
    primary: Colour::rgb(124, 58, 237),
    secondary: Colour::rgb(90, 40, 180),
    dark: Colour::rgb(45, 20, 90),
    highlight: Colour::rgb(180, 140, 255),
    glow: Colour::rgb(160, 100, 255),
    accent: Colour::rgb(0, 119, 181),
    extras: &[("ring", RING)],
};

const GOLD: Colour = Colour::rgb(220, 190, 60);
const GOLD_DARK: Colour = Colour::rgb(170, 140, 30);

const OUROBOROS: Palette = Palette {
    name: "ouroboros",
    primary: Colour::rgb(78, 195, 115),
    secondary: Colour::rgb(45, 140, 75),
    dark: Colour::rgb(25, 80, 45),
    highlight: Colour::rgb(127, 255, 170),
    glow: Colour::rgb(90, 220, 130),
    accent: Colour::rgb(220, 60, 50),
    extras: &[("gold", GOLD), ("gold_dark", GOLD_DARK)],
};

/// Arms, legs and feet shared by the humanoid tool figures.
fn limbs(arm: Colour, hand: Colour, leg: Colour, foot: Colour) -> [BodyPart; 2] {
    [
        BodyPart::new(
            "arms",
            15,
            vec![
                Primitive::rect(11, 11, 12, 15, arm),
                Primitive::rect(19, 11, 20, 15, arm),
                Primitive::pixel(11, 16, hand),
                Primitive::pixel(20, 16, hand),
            ],
        ),
        BodyPart::new(
            "legs",
            5,
            vec![
                Primitive::rect(13, 17, 14, 22, leg),
                Primitive::rect(17, 17, 18, 22, leg),
                Primitive::rect(12, 23, 14, 23, foot),
                Primitive::rect(17, 23, 19, 23, foot),
            ],
        ),
    ]
}

fn clay_sprite() -> Sprite {
    let p = &CLAY;
    Sprite::from_parts(limbs(RAINBOW[3], RAINBOW[1], RAINBOW[4], p.dark))
        .with(BodyPart::new(
            "head",
            20,
            vec![
                Primitive::rect(13, 5, 18, 9, RAINBOW[0]),
                Primitive::rect(13, 4, 18, 4, RAINBOW[4]),
                Primitive::pixel(14, 7, p.highlight),
                Primitive::pixel(17, 7, p.highlight),
            ],
        ))
        .with(BodyPart::new(
            "body",
            10,
            vec![
                Primitive::rect(15, 10, 16, 10, RAINBOW[1]),
                Primitive::rect(13, 11, 18, 16, RAINBOW[2]),
            ],
        ))
        .with(BodyPart::new(
            "orb",
            25,
            vec![
                Primitive::rect(9, 13, 11, 15, p.glow),
                Primitive::pixel(10, 14, p.highlight),
            ],
        ))
}

fn instantly_sprite() -> Sprite {
    let p = &INSTANTLY;
    Sprite::from_parts(limbs(p.primary, p.secondary, p.secondary, p.dark))
        .with(BodyPart::new(
            "head",
            20,
            vec![
                Primitive::rect(13, 5, 18, 9, p.primary),
                // bolt crest
                Primitive::pixel(15, 3, p.highlight),
                Primitive::pixel(16, 4, p.highlight),
                Primitive::pixel(14, 7, BOLT),
                Primitive::pixel(17, 7, BOLT),
            ],
        ))
        .with(BodyPart::new(
            "body",
            10,
            vec![
                Primitive::rect(15, 10, 16, 10, p.primary),
                Primitive::rect(13, 11, 18, 16, p.secondary),
                Primitive::pixel(16, 12, p.highlight),
                Primitive::pixel(15, 13, p.highlight),
                Primitive::pixel(16, 14, p.highlight),
            ],
        ))
        .with(BodyPart::new(
            "staff",
            25,
            vec![
                Primitive::rect(20, 6, 21, 22, p.dark),
                Primitive::pixel(20, 5, p.highlight),
                Primitive::pixel(21, 7, BOLT),
                Primitive::pixel(19, 8, p.highlight),
            ],
        ))
}

fn heyreach_sprite() -> Sprite {
    let p = &HEYREACH;
    Sprite::from_parts(limbs(p.primary, p.highlight, p.secondary, p.dark))
        .with(BodyPart::new(
            "head",
            20,
            vec![
                Primitive::rect(13, 5, 18, 9, p.primary),
                // headset visor
                Primitive::rect(13, 6, 18, 7, p.secondary),
                Primitive::pixel(13, 6, p.accent),
                Primitive::pixel(18, 6, p.accent),
                // antenna
                Primitive::pixel(18, 4, p.highlight),
                Primitive::pixel(18, 3, p.accent),
            ],
        ))
        .with(BodyPart::new(
            "body",
            10,
            vec![
                Primitive::rect(15, 10, 16, 10, p.primary),
                Primitive::rect(13, 11, 18, 16, p.secondary),
                Primitive::pixel(15, 13, RING),
                Primitive::pixel(16, 13, RING),
            ],
        ))
}

/// Number of body segments along the figure-eight.
const SEGMENTS: u32 = 8;

fn ouroboros_sprite() -> Sprite {
    let p = &OUROBOROS;
    let (a, b) = (p.primary, p.secondary);
    let segments = [
        (10, vec![Primitive::rect(18, 12, 19, 13, a), Primitive::rect(20, 10, 21, 11, a)]),
        (10, vec![Primitive::rect(22, 8, 23, 9, a), Primitive::rect(24, 7, 26, 8, b)]),
        (10, vec![Primitive::rect(27, 9, 28, 11, a), Primitive::rect(27, 12, 28, 14, b)]),
        (
            8,
            vec![
                Primitive::rect(25, 15, 26, 16, a),
                Primitive::rect(22, 16, 24, 17, b),
                Primitive::rect(18, 16, 21, 17, a),
            ],
        ),
        (10, vec![Primitive::rect(12, 18, 13, 19, a), Primitive::rect(10, 20, 11, 21, a)]),
        (10, vec![Primitive::rect(8, 22, 9, 23, a), Primitive::rect(5, 23, 7, 24, b)]),
        (10, vec![Primitive::rect(3, 20, 4, 22, a), Primitive::rect(3, 17, 4, 19, b)]),
        (
            8,
            vec![
                Primitive::rect(5, 15, 6, 16, a),
                Primitive::rect(7, 14, 9, 15, b),
                Primitive::rect(10, 14, 13, 15, a),
            ],
        ),
    ];

    let belly = [(21, 11), (25, 8), (28, 13), (23, 17), (11, 21), (6, 24), (4, 19), (8, 15)]
        .into_iter()
        .map(|(x, y)| Primitive::pixel(x, y, GOLD_DARK))
        .collect();

    let mut sprite = Sprite::from_parts([
        // head biting the tail at the crossover
        BodyPart::new(
            "head",
            20,
            vec![
                Primitive::rect(14, 14, 17, 16, a),
                Primitive::pixel(17, 14, p.accent),
                Primitive::pixel(14, 14, p.accent),
                Primitive::pixel(15, 17, GOLD),
                Primitive::pixel(16, 17, GOLD),
                Primitive::pixel(15, 13, GOLD),
                Primitive::pixel(16, 13, GOLD),
            ],
        ),
        BodyPart::new("belly", 12, belly),
    ]);
    for (i, (z, prims)) in segments.into_iter().enumerate() {
        sprite.insert(BodyPart::new(format!("seg_{i}"), z, prims));
    }
    sprite
}

// Idle transforms

fn clay_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let idx = (phase(frame, total) * RAINBOW.len() as f64) as usize % RAINBOW.len();
    base.set_primitive_colour("body", 1, RAINBOW[idx])
        .translate_part("orb", 0, cycle(&BOB_10, frame))
        .recolor_part("orb", pulse(30.0, frame, total))
}

const STAFF_FLICKER: [i32; 8] = [0, 20, -10, 30, 0, -20, 10, 40];

fn instantly_idle(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    let s = base
        .translate_all(0, cycle(&BOB_8, frame))
        .recolor_part("staff", cycle(&STAFF_FLICKER, frame));
    if frame % 4 != 0 {
        return s;
    }
    // the spark angle is the raw frame index in radians
    let f = f64::from(frame);
    let spark = (21 + (2.0 * f.cos()) as i32, 5 + (2.0 * f.sin()) as i32);
    s.add_pixels("sparks", paint([spark], BOLT), 30)
}

fn heyreach_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let ring_phase = f64::from(frame % 5) / 5.0;
    let radius = 2 + (ring_phase * 6.0) as i32;
    let colour = RING.brighten(-((ring_phase * 100.0) as i32));
    base.recolor_part("head", pulse(40.0, frame, total).div_euclid(2))
        .add_pixels(
            "connection_rings",
            paint(compass((16, 13), f64::from(radius)), colour),
            25,
        )
}

fn ouroboros_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &OUROBOROS;
    let active = frame % SEGMENTS;
    let trailing = (active + SEGMENTS - 1) % SEGMENTS;

    let s = base
        .recolor_part(&format!("seg_{active}"), 60)
        .recolor_part(&format!("seg_{trailing}"), 25)
        .recolor_part("head", pulse(20.0, frame, total));

    // three motes travelling the lemniscate
    let n = f64::from(total.max(1));
    let glow = (0..3).filter_map(|i| {
        let i = f64::from(i);
        let angle = TAU * (f64::from(frame) + i * n / 3.0) / n;
        let denom = 1.0 + angle.sin().powi(2);
        let x = 16 + (12.0 * angle.cos() / denom) as i32;
        let y = 16 + (8.0 * angle.sin() * angle.cos() / denom) as i32;
        let fade = (40.0 * (TAU * (f64::from(frame) + i * 2.0) / n).sin()) as i32;
        in_grid(x, y).then(|| (x, y, p.glow.brighten(fade)))
    });
    s.add_pixels("glow_particles", glow.collect::<Vec<_>>(), 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timings() {
        let timings: Vec<(u32, u32)> = Tool::ALL
            .iter()
            .map(|t| {
                let idle = t.animations().idle;
                (idle.frames, idle.duration_ms)
            })
            .collect();
        assert_eq!(timings, vec![(10, 150), (8, 100), (10, 150), (8, 150)]);
    }

    #[test]
    fn test_ouroboros_has_eight_segments() {
        let sprite = Tool::Ouroboros.sprite();
        for i in 0..SEGMENTS {
            assert!(sprite.contains(&format!("seg_{i}")));
        }
        assert_eq!(sprite.len(), 10);
    }

    #[test]
    fn test_ouroboros_highlights_active_segment() {
        let base = Tool::Ouroboros.sprite();
        let frame = ouroboros_idle(&base, 3, 8);
        let lit = frame.get("seg_3").unwrap().primitives[0].colour();
        let trail = frame.get("seg_2").unwrap().primitives[0].colour();
        assert_eq!(lit, OUROBOROS.primary.brighten(60));
        assert_eq!(trail, OUROBOROS.primary.brighten(25));
        assert_eq!(frame.get("glow_particles").unwrap().z_order, 5);
    }

    #[test]
    fn test_clay_cycles_torso_colour() {
        let base = Tool::Clay.sprite();
        let colours: Vec<Colour> = (0..10)
            .step_by(2)
            .map(|f| clay_idle(&base, f, 10).get("body").unwrap().primitives[1].colour())
            .collect();
        assert_eq!(colours, RAINBOW.to_vec());
    }

    #[test]
    fn test_instantly_sparks_every_fourth_frame() {
        let base = Tool::Instantly.sprite();
        assert!(instantly_idle(&base, 0, 8).contains("sparks"));
        assert!(!instantly_idle(&base, 1, 8).contains("sparks"));
        assert!(instantly_idle(&base, 4, 8).contains("sparks"));
    }

    #[test]
    fn test_heyreach_rings_expand() {
        let base = Tool::Heyreach.sprite();
        let first = heyreach_idle(&base, 0, 10);
        // radius 2 at phase 0, east point first
        assert_eq!(
            first.get("connection_rings").unwrap().primitives[0],
            Primitive::pixel(18, 13, RING)
        );
    }
}
