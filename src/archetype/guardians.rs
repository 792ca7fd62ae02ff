//! Guardian robots 1 to 5: the green astro bot, from compact baby bot to
//! ascended guardian with energy wings and halo.

use crate::animation::{AnimationSet, AnimationSpec};
use crate::transform::effects::{
    cycle, every_other_pair, orbit, paint, pulse, BOB_12, BOB_8, SWAY_10,
};
use crate::types::{BodyPart, Colour, Palette, Primitive, Sprite};

/// One of the five guardian stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Guardian {
    BabyBot,
    GuardianBot,
    WingedGuardian,
    ArmoredGuardian,
    AscendedGuardian,
}

impl Guardian {
    pub const ALL: [Guardian; 5] = [
        Guardian::BabyBot,
        Guardian::GuardianBot,
        Guardian::WingedGuardian,
        Guardian::ArmoredGuardian,
        Guardian::AscendedGuardian,
    ];

    /// 1-based stage number.
    pub fn number(self) -> u8 {
        match self {
            Guardian::BabyBot => 1,
            Guardian::GuardianBot => 2,
            Guardian::WingedGuardian => 3,
            Guardian::ArmoredGuardian => 4,
            Guardian::AscendedGuardian => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Guardian> {
        Guardian::ALL.into_iter().find(|g| g.number() == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            Guardian::BabyBot => "Baby Astro Bot",
            Guardian::GuardianBot => "Guardian Bot",
            Guardian::WingedGuardian => "Winged Guardian",
            Guardian::ArmoredGuardian => "Armored Guardian",
            Guardian::AscendedGuardian => "Ascended Guardian",
        }
    }

    /// All stages share one palette.
    pub fn palette(self) -> &'static Palette {
        &ASTRO
    }

    pub fn sprite(self) -> Sprite {
        match self {
            Guardian::BabyBot => baby_bot_sprite(),
            Guardian::GuardianBot => guardian_bot_sprite(),
            Guardian::WingedGuardian => winged_sprite(),
            Guardian::ArmoredGuardian => armored_sprite(),
            Guardian::AscendedGuardian => ascended_sprite(),
        }
    }

    pub fn animations(self) -> AnimationSet {
        let idle = match self {
            Guardian::BabyBot => AnimationSpec::new(baby_bot_idle, 8, 150),
            Guardian::GuardianBot => AnimationSpec::new(guardian_bot_idle, 8, 150),
            Guardian::WingedGuardian => AnimationSpec::new(winged_idle, 10, 150),
            Guardian::ArmoredGuardian => AnimationSpec::new(armored_idle, 10, 150),
            Guardian::AscendedGuardian => AnimationSpec::new(ascended_idle, 12, 150),
        };
        AnimationSet::idle_only(idle)
    }
}

const VISOR_BG: Colour = Colour::rgb(15, 20, 30);
const VISOR_GLOW: Colour = Colour::rgb(100, 255, 150);
const METAL: Colour = Colour::rgb(55, 65, 75);
const METAL_BRIGHT: Colour = Colour::rgb(90, 105, 120);
const ENERGY: Colour = Colour::rgb(150, 255, 200);
const CORE: Colour = Colour::rgb(200, 255, 220);

const ASTRO: Palette = Palette {
    name: "astro-bot",
    primary: Colour::rgb(78, 195, 115),
    secondary: Colour::rgb(42, 139, 78),
    dark: Colour::rgb(25, 80, 45),
    highlight: Colour::rgb(127, 255, 170),
    glow: Colour::rgb(78, 195, 115),
    accent: ENERGY,
    extras: &[
        ("visor_bg", VISOR_BG),
        ("visor_glow", VISOR_GLOW),
        ("metal", METAL),
        ("metal_light", METAL_BRIGHT),
        ("energy", ENERGY),
        ("core", CORE),
    ],
};

// Shared chassis pieces

fn short_antenna() -> BodyPart {
    let p = &ASTRO;
    BodyPart::new(
        "antenna",
        26,
        vec![
            Primitive::pixel(15, 2, p.highlight),
            Primitive::pixel(16, 2, p.highlight),
            Primitive::pixel(15, 3, p.primary),
            Primitive::pixel(16, 3, p.primary),
        ],
    )
}

/// Head block with a cap, side frames and chin panel in `frame`.
fn head(frame: Colour, fins: &[Primitive]) -> BodyPart {
    let mut prims = vec![
        Primitive::rect(13, 4, 18, 4, frame),
        Primitive::rect(12, 5, 19, 9, ASTRO.primary),
        Primitive::rect(12, 5, 12, 9, frame),
        Primitive::rect(19, 5, 19, 9, frame),
        Primitive::rect(13, 9, 18, 9, frame),
    ];
    prims.extend_from_slice(fins);
    BodyPart::new("head", 10, prims)
}

fn visor(glow: &[Primitive]) -> BodyPart {
    let mut prims = vec![Primitive::rect(13, 6, 18, 7, VISOR_BG)];
    prims.extend_from_slice(glow);
    BodyPart::new("visor", 20, prims)
}

const TWIN_EYES: [Primitive; 4] = [
    Primitive::pixel(14, 6, VISOR_GLOW),
    Primitive::pixel(14, 7, VISOR_GLOW),
    Primitive::pixel(17, 6, VISOR_GLOW),
    Primitive::pixel(17, 7, VISOR_GLOW),
];

fn chest(trim: Option<Colour>) -> BodyPart {
    let p = &ASTRO;
    let mut prims = vec![
        Primitive::rect(15, 10, 16, 10, METAL),
        Primitive::rect(13, 11, 18, 16, p.primary),
        Primitive::rect(14, 12, 17, 14, p.secondary),
        Primitive::pixel(15, 15, CORE),
        Primitive::pixel(16, 15, CORE),
    ];
    if let Some(trim) = trim {
        prims.push(Primitive::rect(13, 16, 18, 16, trim));
    }
    BodyPart::new("body", 8, prims)
}

fn limbs(arm: Colour, hand: Colour) -> BodyPart {
    BodyPart::new(
        "arms",
        12,
        vec![
            Primitive::rect(11, 11, 12, 15, arm),
            Primitive::rect(19, 11, 20, 15, arm),
            Primitive::pixel(11, 16, hand),
            Primitive::pixel(20, 16, hand),
        ],
    )
}

fn legs(leg: Colour, foot: Colour) -> BodyPart {
    BodyPart::new(
        "legs",
        5,
        vec![
            Primitive::rect(13, 17, 14, 22, leg),
            Primitive::rect(17, 17, 18, 22, leg),
            Primitive::rect(12, 23, 14, 23, foot),
            Primitive::rect(17, 23, 19, 23, foot),
        ],
    )
}

/// Shoulder plates; wide plates reach one pixel further out on each side.
fn pauldrons(wide: bool) -> BodyPart {
    let p = &ASTRO;
    let (left, right) = if wide { (9, 22) } else { (10, 21) };
    BodyPart::new(
        "shoulders",
        14,
        vec![
            Primitive::rect(left, 10, 12, 12, p.primary),
            Primitive::rect(19, 10, right, 12, p.primary),
            Primitive::rect(left, 10, 10, 10, p.highlight),
            Primitive::rect(21, 10, right, 10, p.highlight),
        ],
    )
}

/// Mirror a left-side pixel list around the body's centre line.
fn mirrored(left: &[(i32, i32, Colour)]) -> Vec<Primitive> {
    left.iter()
        .map(|&(x, y, c)| Primitive::pixel(x, y, c))
        .chain(left.iter().map(|&(x, y, c)| Primitive::pixel(31 - x, y, c)))
        .collect()
}

fn long_cape(z_order: i32) -> BodyPart {
    let p = &ASTRO;
    BodyPart::new(
        "cape",
        z_order,
        vec![
            Primitive::rect(9, 14, 10, 21, p.secondary),
            Primitive::rect(21, 14, 22, 21, p.secondary),
            Primitive::rect(8, 22, 10, 24, p.dark),
            Primitive::rect(21, 22, 23, 24, p.dark),
        ],
    )
}

// Sprites

fn baby_bot_sprite() -> Sprite {
    let p = &ASTRO;
    Sprite::from_parts([
        short_antenna(),
        head(METAL, &[]),
        visor(&TWIN_EYES),
        chest(None),
        limbs(p.secondary, METAL),
        legs(p.secondary, p.dark),
    ])
}

fn guardian_bot_sprite() -> Sprite {
    let p = &ASTRO;
    Sprite::from_parts([
        short_antenna(),
        head(METAL, &[]),
        visor(&TWIN_EYES),
        chest(Some(METAL)),
        pauldrons(false),
        limbs(p.secondary, METAL),
        BodyPart::new(
            "sword",
            22,
            vec![
                Primitive::rect(22, 4, 22, 14, ENERGY),
                Primitive::pixel(22, 3, p.highlight),
                Primitive::rect(21, 15, 23, 15, METAL_BRIGHT),
                Primitive::rect(22, 16, 22, 17, METAL),
            ],
        ),
        legs(p.secondary, p.dark),
    ])
}

fn winged_sprite() -> Sprite {
    let p = &ASTRO;
    let mut eyes = TWIN_EYES.to_vec();
    eyes.push(Primitive::pixel(15, 6, VISOR_GLOW));
    eyes.push(Primitive::pixel(16, 6, VISOR_GLOW));

    Sprite::from_parts([
        BodyPart::new(
            "antenna",
            26,
            vec![
                Primitive::pixel(15, 1, p.highlight),
                Primitive::pixel(16, 1, p.highlight),
                Primitive::pixel(15, 2, p.primary),
                Primitive::pixel(16, 2, p.primary),
                Primitive::pixel(15, 3, p.secondary),
                Primitive::pixel(16, 3, p.secondary),
            ],
        ),
        head(
            METAL,
            &[
                Primitive::pixel(11, 5, p.highlight),
                Primitive::pixel(11, 6, p.primary),
                Primitive::pixel(20, 5, p.highlight),
                Primitive::pixel(20, 6, p.primary),
            ],
        ),
        visor(&eyes),
        chest(Some(METAL)),
        pauldrons(false),
        limbs(p.secondary, METAL),
        BodyPart::new(
            "wings",
            2,
            mirrored(&[
                (9, 11, p.primary),
                (8, 10, p.highlight),
                (7, 9, p.glow),
                (9, 13, p.secondary),
                (8, 12, p.primary),
            ]),
        ),
        BodyPart::new(
            "cape",
            1,
            vec![
                Primitive::rect(9, 14, 10, 21, p.secondary),
                Primitive::rect(9, 22, 11, 23, p.dark),
            ],
        ),
        BodyPart::new(
            "sword",
            22,
            vec![
                Primitive::rect(23, 3, 23, 14, ENERGY),
                Primitive::pixel(23, 2, p.highlight),
                Primitive::pixel(23, 1, Colour::rgb(200, 255, 230)),
                Primitive::rect(22, 15, 24, 15, METAL_BRIGHT),
                Primitive::rect(23, 16, 23, 17, METAL),
            ],
        ),
        legs(p.secondary, p.dark),
    ])
}

fn armored_sprite() -> Sprite {
    let p = &ASTRO;
    Sprite::from_parts([
        BodyPart::new(
            "antenna",
            26,
            vec![
                Primitive::pixel(15, 1, p.highlight),
                Primitive::pixel(16, 1, p.highlight),
                Primitive::pixel(14, 2, ENERGY),
                Primitive::pixel(15, 2, p.primary),
                Primitive::pixel(16, 2, p.primary),
                Primitive::pixel(17, 2, ENERGY),
                Primitive::pixel(15, 3, p.secondary),
                Primitive::pixel(16, 3, p.secondary),
            ],
        ),
        head(
            METAL_BRIGHT,
            &[
                Primitive::pixel(11, 4, ENERGY),
                Primitive::pixel(11, 5, p.highlight),
                Primitive::pixel(11, 6, p.primary),
                Primitive::pixel(20, 4, ENERGY),
                Primitive::pixel(20, 5, p.highlight),
                Primitive::pixel(20, 6, p.primary),
            ],
        ),
        visor(&[Primitive::rect(14, 6, 17, 7, VISOR_GLOW)]),
        BodyPart::new(
            "armor",
            8,
            vec![
                Primitive::rect(15, 10, 16, 10, METAL_BRIGHT),
                Primitive::rect(13, 11, 18, 16, p.primary),
                Primitive::rect(14, 12, 17, 13, p.highlight),
                Primitive::pixel(15, 14, CORE),
                Primitive::pixel(16, 14, CORE),
                Primitive::pixel(15, 15, ENERGY),
                Primitive::pixel(16, 15, ENERGY),
                Primitive::rect(13, 16, 18, 16, METAL_BRIGHT),
            ],
        ),
        pauldrons(true),
        limbs(p.secondary, METAL_BRIGHT),
        BodyPart::new(
            "wings",
            2,
            mirrored(&[
                (8, 12, p.highlight),
                (7, 11, p.primary),
                (6, 10, p.primary),
                (5, 9, p.highlight),
                (8, 14, p.primary),
                (7, 13, p.highlight),
                (6, 12, p.primary),
                (8, 16, p.secondary),
                (7, 15, p.primary),
            ]),
        ),
        long_cape(1),
        BodyPart::new(
            "sword",
            22,
            vec![
                Primitive::rect(24, 2, 24, 14, ENERGY),
                Primitive::pixel(24, 1, p.highlight),
                Primitive::pixel(24, 0, Colour::rgb(220, 255, 240)),
                Primitive::rect(23, 15, 25, 15, METAL_BRIGHT),
                Primitive::rect(24, 16, 24, 17, METAL),
            ],
        ),
        BodyPart::new(
            "particles",
            28,
            vec![
                Primitive::pixel(5, 6, p.glow),
                Primitive::pixel(26, 6, p.glow),
                Primitive::pixel(3, 15, p.glow),
                Primitive::pixel(28, 15, p.glow),
            ],
        ),
        legs(p.primary, METAL),
    ])
}

fn ascended_sprite() -> Sprite {
    let p = &ASTRO;
    Sprite::from_parts([
        BodyPart::new(
            "halo",
            30,
            vec![
                Primitive::pixel(14, 0, ENERGY),
                Primitive::pixel(15, 0, p.highlight),
                Primitive::pixel(16, 0, p.highlight),
                Primitive::pixel(17, 0, ENERGY),
                Primitive::pixel(13, 1, p.glow),
                Primitive::pixel(18, 1, p.glow),
            ],
        ),
        BodyPart::new(
            "antenna",
            26,
            vec![
                Primitive::pixel(14, 2, ENERGY),
                Primitive::pixel(15, 2, p.highlight),
                Primitive::pixel(16, 2, p.highlight),
                Primitive::pixel(17, 2, ENERGY),
                Primitive::pixel(15, 3, p.primary),
                Primitive::pixel(16, 3, p.primary),
            ],
        ),
        head(
            p.highlight,
            &[
                Primitive::pixel(10, 4, ENERGY),
                Primitive::pixel(11, 4, p.highlight),
                Primitive::pixel(11, 5, p.highlight),
                Primitive::pixel(11, 6, p.primary),
                Primitive::pixel(21, 4, ENERGY),
                Primitive::pixel(20, 4, p.highlight),
                Primitive::pixel(20, 5, p.highlight),
                Primitive::pixel(20, 6, p.primary),
            ],
        ),
        visor(&[Primitive::rect(13, 6, 18, 7, VISOR_GLOW)]),
        BodyPart::new(
            "armor",
            8,
            vec![
                Primitive::rect(15, 10, 16, 10, p.highlight),
                Primitive::rect(13, 11, 18, 16, p.primary),
                Primitive::rect(14, 12, 17, 13, p.highlight),
                Primitive::rect(15, 14, 16, 15, CORE),
                Primitive::rect(13, 16, 18, 16, p.highlight),
            ],
        ),
        pauldrons(true),
        limbs(p.primary, p.highlight),
        BodyPart::new(
            "wings",
            1,
            mirrored(&[
                (8, 12, p.highlight),
                (7, 11, p.primary),
                (6, 10, p.primary),
                (5, 9, p.highlight),
                (4, 8, ENERGY),
                (3, 7, p.glow),
                (8, 14, p.primary),
                (7, 13, p.highlight),
                (6, 12, p.primary),
                (5, 11, ENERGY),
                (8, 16, p.secondary),
                (7, 15, p.primary),
                (6, 14, p.glow),
            ]),
        ),
        long_cape(0),
        BodyPart::new(
            "sword",
            22,
            vec![
                Primitive::rect(25, 1, 25, 14, ENERGY),
                Primitive::pixel(25, 0, Colour::WHITE),
                Primitive::pixel(26, 3, p.highlight),
                Primitive::pixel(26, 7, p.highlight),
                Primitive::pixel(26, 11, p.highlight),
                Primitive::rect(24, 15, 26, 15, p.highlight),
                Primitive::rect(25, 16, 25, 17, METAL_BRIGHT),
            ],
        ),
        BodyPart::new(
            "aura",
            0,
            vec![
                Primitive::pixel(10, 4, p.glow),
                Primitive::pixel(21, 4, p.glow),
                Primitive::pixel(6, 17, p.glow),
                Primitive::pixel(25, 17, p.glow),
                Primitive::pixel(15, 27, p.glow),
                Primitive::pixel(16, 27, p.glow),
                Primitive::pixel(3, 12, p.glow),
                Primitive::pixel(28, 12, p.glow),
            ],
        ),
        legs(p.primary, p.highlight),
    ])
}

// Idle transforms

fn baby_bot_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    base.translate_all(0, cycle(&BOB_8, frame))
        .recolor_part("antenna", pulse(40.0, frame, total))
}

fn guardian_bot_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let dy = cycle(&BOB_8, frame);
    let s = base
        .translate_part("head", 0, dy)
        .translate_part("antenna", 0, dy)
        .recolor_part("sword", pulse(30.0, frame, total));
    if every_other_pair(frame) {
        s.recolor_part("shoulders", 20)
    } else {
        s
    }
}

const WING_FLUTTER: [i32; 10] = [0, -1, -1, 0, 0, 1, 1, 0, 0, 0];

fn winged_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let cape_dx = if (frame / 3) % 2 == 0 { 1 } else { -1 };
    base.translate_part("wings", 0, cycle(&WING_FLUTTER, frame))
        .translate_part("cape", cape_dx, 0)
        .recolor_part("sword", pulse(35.0, frame, total))
}

fn armored_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ASTRO;
    let amount = pulse(30.0, frame, total);
    let particles = paint(orbit((16, 13), (11.0, 9.0), 4, frame, total), p.highlight);
    base.recolor_part("wings", amount)
        .remove_part("particles")
        .add_pixels("orbit_particles", particles, 30)
        .recolor_part("visor", amount.abs() / 2)
        .translate_part("cape", cycle(&SWAY_10, frame), 0)
}

fn ascended_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ASTRO;
    let amount = pulse(35.0, frame, total);
    let aura = paint(orbit((16, 13), (12.0, 10.0), 6, frame, total), p.glow);
    base.translate_all(0, cycle(&BOB_12, frame))
        .recolor_part("wings", amount)
        .recolor_part("halo", amount.abs())
        .remove_part("aura")
        .add_pixels("aura_orbit", aura, 32)
}
