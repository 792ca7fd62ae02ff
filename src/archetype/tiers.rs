//! Progression tiers 1 to 6: hooded initiate through winged grand master.
//!
//! Every tier has an idle and an action loop, in both an early and an
//! advanced variant. Advanced loops run the early transform first and layer
//! accent-coloured particles on top.

use std::f64::consts::{PI, TAU};

use super::anatomy::{
    arms, base_body, face, features, Outfit, HAIR_DARK, METAL_DARK, METAL_LIGHT, METAL_MID,
    PARCHMENT, PARCH_DARK, SKIN, SKIN_SHADOW,
};
use crate::animation::{AnimationSet, AnimationSpec, Variant};
use crate::render::compositor::GRID;
use crate::transform::effects::{
    border, clip, cycle, every_other_pair, orbit, paint, phase, polar, pulse, ring, BOB_8,
    SWAY_10,
};
use crate::types::{BodyPart, Colour, Palette, Primitive, Sprite};

/// One of the six progression tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    TerminalInitiate,
    RepoArchitect,
    ContextWeaver,
    VoiceAlchemist,
    OsArchitect,
    GrandMaster,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::TerminalInitiate,
        Tier::RepoArchitect,
        Tier::ContextWeaver,
        Tier::VoiceAlchemist,
        Tier::OsArchitect,
        Tier::GrandMaster,
    ];

    /// 1-based tier number.
    pub fn number(self) -> u8 {
        match self {
            Tier::TerminalInitiate => 1,
            Tier::RepoArchitect => 2,
            Tier::ContextWeaver => 3,
            Tier::VoiceAlchemist => 4,
            Tier::OsArchitect => 5,
            Tier::GrandMaster => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Tier> {
        Tier::ALL.into_iter().find(|t| t.number() == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            Tier::TerminalInitiate => "Terminal Initiate",
            Tier::RepoArchitect => "Repo Architect",
            Tier::ContextWeaver => "Context Weaver",
            Tier::VoiceAlchemist => "Voice Alchemist",
            Tier::OsArchitect => "OS Architect",
            Tier::GrandMaster => "Grand Master",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Tier::TerminalInitiate => &INITIATE,
            Tier::RepoArchitect => &ARCHITECT,
            Tier::ContextWeaver => &WEAVER,
            Tier::VoiceAlchemist => &ALCHEMIST,
            Tier::OsArchitect => &SOVEREIGN,
            Tier::GrandMaster => &GRAND_MASTER,
        }
    }

    pub fn sprite(self) -> Sprite {
        match self {
            Tier::TerminalInitiate => initiate_sprite(),
            Tier::RepoArchitect => architect_sprite(),
            Tier::ContextWeaver => weaver_sprite(),
            Tier::VoiceAlchemist => alchemist_sprite(),
            Tier::OsArchitect => sovereign_sprite(),
            Tier::GrandMaster => grand_master_sprite(),
        }
    }

    pub fn animations(self, variant: Variant) -> AnimationSet {
        let (idle, action): (AnimationSpec, AnimationSpec) = match (self, variant) {
            (Tier::TerminalInitiate, Variant::Early) => (
                AnimationSpec::new(initiate_idle, 8, IDLE_MS),
                AnimationSpec::new(initiate_action, 12, ACTION_MS),
            ),
            (Tier::TerminalInitiate, Variant::Advanced) => (
                AnimationSpec::new(initiate_idle_advanced, 8, IDLE_MS),
                AnimationSpec::new(initiate_action_advanced, 12, ACTION_MS),
            ),
            (Tier::RepoArchitect, Variant::Early) => (
                AnimationSpec::new(architect_idle, 8, IDLE_MS),
                AnimationSpec::new(architect_action, 14, ACTION_MS),
            ),
            (Tier::RepoArchitect, Variant::Advanced) => (
                AnimationSpec::new(architect_idle_advanced, 8, IDLE_MS),
                AnimationSpec::new(architect_action_advanced, 14, ACTION_MS),
            ),
            (Tier::ContextWeaver, Variant::Early) => (
                AnimationSpec::new(weaver_idle, 10, IDLE_MS),
                AnimationSpec::new(weaver_action, 14, ACTION_MS),
            ),
            (Tier::ContextWeaver, Variant::Advanced) => (
                AnimationSpec::new(weaver_idle_advanced, 10, IDLE_MS),
                AnimationSpec::new(weaver_action_advanced, 14, ACTION_MS),
            ),
            (Tier::VoiceAlchemist, Variant::Early) => (
                AnimationSpec::new(alchemist_idle, 10, IDLE_MS),
                AnimationSpec::new(alchemist_action, 16, ACTION_MS),
            ),
            (Tier::VoiceAlchemist, Variant::Advanced) => (
                AnimationSpec::new(alchemist_idle_advanced, 10, IDLE_MS),
                AnimationSpec::new(alchemist_action_advanced, 16, ACTION_MS),
            ),
            (Tier::OsArchitect, Variant::Early) => (
                AnimationSpec::new(sovereign_idle, 10, IDLE_MS),
                AnimationSpec::new(sovereign_action, 16, ACTION_MS),
            ),
            (Tier::OsArchitect, Variant::Advanced) => (
                AnimationSpec::new(sovereign_idle_advanced, 10, IDLE_MS),
                AnimationSpec::new(sovereign_action_advanced, 16, ACTION_MS),
            ),
            (Tier::GrandMaster, Variant::Early) => (
                AnimationSpec::new(grand_master_idle, 12, IDLE_MS),
                AnimationSpec::new(grand_master_action, 16, ACTION_MS),
            ),
            (Tier::GrandMaster, Variant::Advanced) => (
                AnimationSpec::new(grand_master_idle_advanced, 12, IDLE_MS),
                AnimationSpec::new(grand_master_action_advanced, 16, ACTION_MS),
            ),
        };
        AnimationSet::with_action(idle, action)
    }
}

const IDLE_MS: u32 = 150;
const ACTION_MS: u32 = 80;

// Palettes

const INITIATE: Palette = Palette {
    name: "terminal-initiate",
    primary: Colour::rgb(136, 146, 164),
    secondary: Colour::rgb(100, 108, 122),
    dark: Colour::rgb(70, 76, 90),
    highlight: Colour::rgb(180, 190, 210),
    glow: Colour::rgb(136, 146, 164),
    accent: Colour::rgb(180, 70, 70),
    extras: &[],
};

const ARCHITECT: Palette = Palette {
    name: "repo-architect",
    primary: Colour::rgb(78, 195, 115),
    secondary: Colour::rgb(55, 150, 85),
    dark: Colour::rgb(35, 110, 60),
    highlight: Colour::rgb(120, 220, 155),
    glow: Colour::rgb(78, 195, 115),
    accent: Colour::rgb(220, 60, 60),
    extras: &[],
};

const WEAVER: Palette = Palette {
    name: "context-weaver",
    primary: Colour::rgb(80, 190, 220),
    secondary: Colour::rgb(55, 150, 180),
    dark: Colour::rgb(35, 110, 140),
    highlight: Colour::rgb(140, 220, 245),
    glow: Colour::rgb(80, 190, 220),
    accent: Colour::rgb(170, 65, 65),
    extras: &[],
};

const ALCHEMIST: Palette = Palette {
    name: "voice-alchemist",
    primary: Colour::rgb(220, 170, 60),
    secondary: Colour::rgb(180, 135, 40),
    dark: Colour::rgb(130, 100, 25),
    highlight: Colour::rgb(245, 205, 100),
    glow: Colour::rgb(220, 170, 60),
    accent: Colour::rgb(200, 75, 50),
    extras: &[],
};

const SOVEREIGN: Palette = Palette {
    name: "os-architect",
    primary: Colour::rgb(160, 120, 220),
    secondary: Colour::rgb(125, 90, 180),
    dark: Colour::rgb(85, 60, 135),
    highlight: Colour::rgb(195, 160, 245),
    glow: Colour::rgb(160, 120, 220),
    accent: Colour::rgb(190, 70, 80),
    extras: &[],
};

const GRAND_MASTER: Palette = Palette {
    name: "grand-master",
    primary: Colour::rgb(255, 200, 60),
    secondary: Colour::rgb(210, 160, 30),
    dark: Colour::rgb(165, 120, 10),
    highlight: Colour::rgb(255, 225, 120),
    glow: Colour::rgb(255, 200, 60),
    accent: Colour::rgb(240, 80, 60),
    extras: &[],
};

// Sprites

fn initiate_sprite() -> Sprite {
    let p = &INITIATE;
    let mut robe = vec![
        Primitive::rect(13, 10, 18, 10, p.dark),
        Primitive::rect(12, 11, 19, 21, p.secondary),
        Primitive::rect(11, 22, 20, 23, p.dark),
    ];
    // centre seam
    for y in [13, 16, 19] {
        robe.push(Primitive::pixel(15, y, p.dark));
        robe.push(Primitive::pixel(16, y, p.dark));
    }

    Sprite::from_parts([
        face(6),
        BodyPart::new(
            "hood",
            25,
            vec![
                Primitive::pixel(15, 2, p.dark),
                Primitive::pixel(16, 2, p.dark),
                Primitive::rect(14, 3, 17, 3, p.secondary),
                Primitive::rect(12, 4, 19, 5, p.primary),
                Primitive::rect(13, 5, 18, 5, Colour::rgb(50, 45, 40)),
                Primitive::pixel(12, 6, p.secondary),
                Primitive::pixel(12, 7, p.secondary),
                Primitive::pixel(12, 8, p.dark),
                Primitive::pixel(12, 9, p.dark),
                Primitive::pixel(19, 6, p.secondary),
                Primitive::pixel(19, 7, p.secondary),
                Primitive::pixel(19, 8, p.dark),
                Primitive::pixel(19, 9, p.dark),
            ],
        ),
        BodyPart::new("robe", 10, robe),
        BodyPart::new(
            "staff_shaft",
            22,
            vec![
                Primitive::rect(22, 6, 22, 16, p.secondary),
                Primitive::pixel(21, 14, SKIN),
                Primitive::pixel(21, 15, SKIN),
            ],
        ),
        BodyPart::new(
            "cursor_block",
            23,
            vec![Primitive::rect(21, 3, 23, 5, p.highlight)],
        ),
    ])
}

fn architect_sprite() -> Sprite {
    let p = &ARCHITECT;
    let mut head = vec![
        Primitive::rect(13, 4, 18, 4, HAIR_DARK),
        Primitive::rect(13, 5, 18, 9, SKIN),
        // headband
        Primitive::rect(13, 5, 18, 5, p.primary),
    ];
    head.extend(features());

    base_body(Outfit {
        cloth: p.secondary,
        cloth_dark: p.dark,
        boot: p.dark,
        boot_dark: Colour::rgb(30, 32, 38),
    })
    .with(BodyPart::new("head", 20, head))
    .with(BodyPart::new(
        "body",
        10,
        vec![
            Primitive::rect(15, 10, 16, 10, SKIN),
            Primitive::rect(13, 11, 18, 16, p.secondary),
            Primitive::rect(13, 15, 18, 15, p.dark),
            // belt pouches
            Primitive::pixel(12, 15, p.dark),
            Primitive::pixel(12, 16, p.dark),
            Primitive::pixel(19, 15, p.dark),
            Primitive::pixel(19, 16, p.dark),
        ],
    ))
    .with(arms(p.secondary))
    .with(BodyPart::new(
        "scroll",
        18,
        vec![
            Primitive::rect(8, 12, 10, 12, PARCH_DARK),
            Primitive::rect(8, 13, 10, 18, PARCHMENT),
            Primitive::rect(8, 19, 10, 19, PARCH_DARK),
            Primitive::pixel(9, 14, p.primary),
            Primitive::pixel(9, 15, p.primary),
            Primitive::pixel(9, 16, p.primary),
            Primitive::pixel(9, 17, p.primary),
        ],
    ))
}

fn weaver_sprite() -> Sprite {
    let p = &WEAVER;
    Sprite::from_parts([
        BodyPart::new(
            "hat",
            25,
            vec![
                Primitive::pixel(16, 0, p.secondary),
                Primitive::rect(15, 1, 17, 1, p.primary),
                Primitive::rect(14, 2, 18, 2, p.primary),
                Primitive::rect(13, 3, 19, 3, p.secondary),
                Primitive::rect(12, 4, 20, 4, p.dark),
            ],
        ),
        face(5),
        BodyPart::new(
            "robe",
            8,
            vec![
                Primitive::rect(15, 10, 16, 10, SKIN),
                Primitive::rect(13, 11, 18, 13, p.primary),
                Primitive::rect(13, 14, 18, 14, p.highlight),
                Primitive::rect(12, 15, 19, 21, p.secondary),
                Primitive::rect(11, 22, 20, 23, p.dark),
            ],
        ),
        BodyPart::new(
            "sleeves",
            15,
            vec![
                Primitive::rect(10, 11, 12, 14, p.primary),
                Primitive::rect(10, 15, 12, 16, p.dark),
                Primitive::pixel(10, 17, SKIN),
                Primitive::rect(19, 11, 21, 14, p.primary),
                Primitive::rect(19, 15, 21, 16, p.dark),
                Primitive::pixel(21, 17, SKIN),
            ],
        ),
        BodyPart::new(
            "staff_shaft",
            22,
            vec![
                Primitive::rect(23, 7, 23, 17, p.dark),
                Primitive::pixel(22, 16, SKIN),
            ],
        ),
        BodyPart::new(
            "orb",
            24,
            vec![
                Primitive::rect(22, 4, 24, 6, p.highlight),
                Primitive::pixel(23, 3, p.primary),
                Primitive::pixel(21, 5, p.glow),
                Primitive::pixel(25, 5, p.glow),
                Primitive::pixel(23, 7, p.glow),
            ],
        ),
    ])
}

fn alchemist_sprite() -> Sprite {
    let p = &ALCHEMIST;
    let mut head = vec![
        Primitive::rect(13, 4, 18, 4, HAIR_DARK),
        Primitive::rect(13, 5, 18, 9, SKIN),
        // circlet and gem
        Primitive::rect(13, 4, 18, 4, p.primary),
        Primitive::pixel(15, 4, p.highlight),
        Primitive::pixel(16, 4, p.highlight),
    ];
    head.extend(features());

    base_body(Outfit {
        cloth: p.secondary,
        cloth_dark: p.dark,
        boot: p.dark,
        boot_dark: Colour::rgb(30, 28, 18),
    })
    .with(BodyPart::new("head", 20, head))
    .with(BodyPart::new(
        "armor",
        18,
        vec![
            Primitive::rect(10, 10, 12, 12, p.primary),
            Primitive::rect(19, 10, 21, 12, p.primary),
            Primitive::pixel(10, 10, p.highlight),
            Primitive::pixel(21, 10, p.highlight),
        ],
    ))
    .with(BodyPart::new(
        "cape",
        3,
        vec![
            Primitive::rect(9, 12, 10, 20, p.secondary),
            Primitive::rect(9, 21, 11, 23, p.dark),
        ],
    ))
    .with(BodyPart::new(
        "belt_vials",
        12,
        vec![
            Primitive::rect(13, 15, 18, 15, p.dark),
            Primitive::pixel(14, 16, p.secondary),
            Primitive::pixel(15, 16, p.primary),
            Primitive::pixel(17, 16, p.secondary),
        ],
    ))
    .with(BodyPart::new(
        "flask",
        22,
        vec![
            Primitive::pixel(22, 10, p.highlight),
            Primitive::rect(22, 11, 22, 12, p.secondary),
            Primitive::rect(21, 13, 23, 16, p.primary),
            Primitive::pixel(22, 15, p.highlight),
            Primitive::pixel(22, 16, p.highlight),
        ],
    ))
}

fn sovereign_sprite() -> Sprite {
    let p = &SOVEREIGN;
    base_body(Outfit {
        cloth: METAL_MID,
        cloth_dark: METAL_DARK,
        boot: METAL_DARK,
        boot_dark: Colour::rgb(50, 48, 58),
    })
    .with(BodyPart::new(
        "head",
        20,
        vec![
            Primitive::rect(13, 3, 18, 9, METAL_MID),
            Primitive::rect(12, 5, 19, 5, METAL_MID),
            Primitive::rect(13, 5, 18, 5, METAL_LIGHT),
            // plume
            Primitive::pixel(15, 2, p.primary),
            Primitive::pixel(16, 2, p.highlight),
            Primitive::pixel(16, 3, p.primary),
            // visor slit
            Primitive::rect(14, 7, 17, 7, Colour::rgb(20, 18, 25)),
            Primitive::pixel(14, 7, p.highlight),
            Primitive::pixel(17, 7, p.highlight),
        ],
    ))
    .with(BodyPart::new(
        "armor",
        12,
        vec![
            Primitive::rect(13, 11, 18, 16, METAL_MID),
            Primitive::rect(14, 12, 17, 13, METAL_LIGHT),
            Primitive::pixel(15, 14, p.primary),
            Primitive::pixel(16, 14, p.primary),
            Primitive::rect(10, 10, 12, 12, METAL_MID),
            Primitive::rect(19, 10, 21, 12, METAL_MID),
            Primitive::pixel(10, 10, METAL_LIGHT),
            Primitive::pixel(21, 10, METAL_LIGHT),
        ],
    ))
    .with(BodyPart::new(
        "arms",
        15,
        vec![
            Primitive::rect(11, 11, 12, 15, METAL_DARK),
            Primitive::rect(19, 11, 20, 15, METAL_DARK),
            Primitive::pixel(11, 16, METAL_MID),
            Primitive::pixel(20, 16, METAL_MID),
        ],
    ))
    .with(BodyPart::new(
        "cape",
        2,
        vec![
            Primitive::rect(9, 12, 10, 22, p.secondary),
            Primitive::rect(21, 12, 22, 22, p.secondary),
            Primitive::rect(8, 22, 10, 24, p.dark),
            Primitive::rect(21, 22, 23, 24, p.dark),
        ],
    ))
    .with(BodyPart::new(
        "sword_blade",
        22,
        vec![
            Primitive::rect(23, 1, 23, 12, METAL_LIGHT),
            Primitive::pixel(23, 0, Colour::rgb(230, 240, 255)),
        ],
    ))
    .with(BodyPart::new(
        "sword_hilt",
        22,
        vec![
            Primitive::rect(22, 13, 24, 13, p.primary),
            Primitive::rect(23, 14, 23, 16, p.dark),
            Primitive::pixel(23, 17, p.highlight),
        ],
    ))
    .with(BodyPart::new(
        "shield",
        18,
        vec![
            Primitive::rect(7, 12, 10, 18, p.primary),
            Primitive::rect(8, 13, 9, 17, p.secondary),
            Primitive::pixel(8, 15, p.highlight),
            Primitive::pixel(9, 15, p.highlight),
            Primitive::pixel(7, 12, p.highlight),
            Primitive::pixel(10, 12, p.highlight),
        ],
    ))
}

fn grand_master_sprite() -> Sprite {
    let p = &GRAND_MASTER;

    // Left wing rows ascend outward; the right wing mirrors around x = 15.5.
    let left_wing = [
        (8, 12, p.highlight),
        (7, 11, p.primary),
        (6, 10, p.primary),
        (5, 9, p.highlight),
        (4, 8, p.glow),
        (8, 14, p.primary),
        (7, 13, p.highlight),
        (6, 12, p.primary),
        (5, 11, p.glow),
        (8, 16, p.secondary),
        (7, 15, p.primary),
        (6, 14, p.glow),
    ];
    let wings: Vec<Primitive> = left_wing
        .iter()
        .map(|&(x, y, c)| Primitive::pixel(x, y, c))
        .chain(
            left_wing
                .iter()
                .map(|&(x, y, c)| Primitive::pixel(31 - x, y, c)),
        )
        .collect();

    base_body(Outfit {
        cloth: p.secondary,
        cloth_dark: p.dark,
        boot: p.dark,
        boot_dark: Colour::rgb(100, 80, 10),
    })
    .with(BodyPart::new(
        "crown",
        28,
        vec![
            Primitive::rect(13, 3, 18, 4, p.primary),
            Primitive::pixel(13, 2, p.highlight),
            Primitive::pixel(15, 1, p.highlight),
            Primitive::pixel(16, 1, p.highlight),
            Primitive::pixel(18, 2, p.highlight),
            Primitive::pixel(14, 3, Colour::rgb(220, 50, 50)),
            Primitive::pixel(16, 3, Colour::rgb(50, 180, 220)),
        ],
    ))
    .with(BodyPart::new(
        "head",
        20,
        vec![
            Primitive::rect(13, 4, 18, 9, SKIN),
            Primitive::pixel(14, 7, p.highlight),
            Primitive::pixel(17, 7, p.highlight),
            Primitive::pixel(15, 9, SKIN_SHADOW),
            Primitive::pixel(16, 9, SKIN_SHADOW),
        ],
    ))
    .with(BodyPart::new(
        "armor",
        14,
        vec![
            Primitive::rect(13, 11, 18, 16, p.primary),
            Primitive::rect(14, 12, 17, 13, p.highlight),
            Primitive::pixel(15, 14, Colour::WHITE),
            Primitive::pixel(16, 14, Colour::WHITE),
            Primitive::rect(9, 10, 12, 12, p.primary),
            Primitive::rect(19, 10, 22, 12, p.primary),
            Primitive::rect(9, 10, 10, 10, p.highlight),
            Primitive::rect(21, 10, 22, 10, p.highlight),
        ],
    ))
    .with(BodyPart::new(
        "arms",
        15,
        vec![
            Primitive::rect(11, 11, 12, 15, p.secondary),
            Primitive::rect(19, 11, 20, 15, p.secondary),
            Primitive::pixel(11, 16, p.primary),
            Primitive::pixel(20, 16, p.primary),
        ],
    ))
    .with(BodyPart::new(
        "legs",
        5,
        vec![
            Primitive::rect(13, 17, 14, 22, p.secondary),
            Primitive::rect(17, 17, 18, 22, p.secondary),
            Primitive::rect(12, 23, 14, 23, p.dark),
            Primitive::rect(17, 23, 19, 23, p.dark),
        ],
    ))
    .with(BodyPart::new("wings", 1, wings))
    .with(BodyPart::new(
        "aura",
        0,
        vec![
            Primitive::pixel(10, 5, p.glow),
            Primitive::pixel(21, 5, p.glow),
            Primitive::pixel(6, 17, p.glow),
            Primitive::pixel(25, 17, p.glow),
            Primitive::pixel(15, 26, p.glow),
            Primitive::pixel(16, 26, p.glow),
        ],
    ))
}

// Tier 1: breathing bob, blinking cursor, matrix rain.

fn initiate_idle(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    let s = base.translate_all(0, cycle(&BOB_8, frame));
    if every_other_pair(frame) {
        s
    } else {
        s.remove_part("cursor_block")
    }
}

/// Falling drops in column `x`, fading from `start` brightness.
fn rain_column(
    x: i32,
    age: u32,
    max_drops: u32,
    colour: Colour,
    (floor, start, step): (i32, i32, i32),
) -> Vec<(i32, i32, Colour)> {
    let drops = (age + 1).min(max_drops) as i32;
    clip((0..drops).map(|drop| {
        let fade = (start - drop * step).max(floor);
        (x, 6 + drop * 2, colour.brighten(-(210 - fade)))
    }))
}

fn initiate_action(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    let p = &INITIATE;
    let mut rain = Vec::new();
    for col in [-1i32, 0, 1] {
        let start = 2 + col.unsigned_abs();
        if frame >= start {
            rain.extend(rain_column(22 + col, frame - start, 10, p.highlight, (30, 210, 30)));
        }
    }
    base.add_pixels("rain", rain, 28)
}

fn initiate_idle_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &INITIATE;
    let sparks = clip((0..2).map(|i| {
        let angle = TAU * phase(frame, total) + i as f64 * PI;
        let (x, y) = polar(22, 4, 3.0, 2.0, angle);
        (x, y, p.accent.brighten(-i * 20))
    }));
    initiate_idle(base, frame, total)
        .recolor_part("cursor_block", 35)
        .add_pixels("accent_sparks", sparks, 29)
}

fn initiate_action_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &INITIATE;
    let mut rain = Vec::new();
    if frame >= 2 {
        for col in [-2, 2] {
            rain.extend(rain_column(22 + col, frame - 2, 12, p.accent, (50, 220, 25)));
        }
    }
    initiate_action(base, frame, total).add_pixels("rain_advanced", rain, 28)
}

// Tier 2: head bob with orbiting dots, unfurling scroll.

fn architect_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ARCHITECT;
    let particles = paint(orbit((16, 14), (10.0, 8.0), 2, frame, total), p.highlight);
    base.translate_part("head", 0, cycle(&BOB_8, frame))
        .add_pixels("particles", particles, 30)
}

/// Rows unrolled below the scroll at this frame.
fn scroll_extent(frame: u32, total: u32, max_extend: u32) -> u32 {
    max_extend.min(frame * max_extend / total.max(1) + 1)
}

fn architect_action(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ARCHITECT;
    let extend = scroll_extent(frame, total, 8) as i32;
    let mut paper = Vec::new();
    for dy in 0..extend {
        let y = 20 + dy;
        if y >= GRID as i32 {
            break;
        }
        for x in [8, 9, 10] {
            paper.push((x, y, PARCHMENT));
        }
        // text behind the leading edge
        if dy < extend - 1 {
            paper.push((9, y, p.primary));
        }
    }
    base.add_pixels("scroll_extend", paper, 19)
}

fn architect_idle_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ARCHITECT;
    let extra: Vec<(i32, i32)> = (2..5)
        .map(|i| {
            let angle = TAU * phase(frame, total) + i as f64 * (TAU / 3.0);
            polar(16, 14, 8.0, 6.0, angle)
        })
        .collect();
    architect_idle(base, frame, total)
        .recolor_part("scroll", 25)
        .add_pixels("particles_advanced", paint(extra, p.accent.brighten(30)), 31)
}

fn architect_action_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ARCHITECT;
    let extend = scroll_extent(frame, total, 10) as i32;
    let glow = paint(
        ((extend - 6).max(0)..extend).map(|dy| (9, 20 + dy)),
        p.accent.brighten(25),
    );
    architect_action(base, frame, total).add_pixels("scroll_glow", glow, 20)
}

// Tier 3: pulsing orb with rings, threads from the staff tip.

const ORB: (i32, i32) = (23, 5);

/// Expanding ring around the orb: returns (radius, fade amount).
fn orb_ring(frame: u32, base_radius: i32, spread: f64, fade: f64) -> (f64, i32) {
    let ring_phase = (frame % 5) as f64 / 5.0;
    let radius = base_radius + (ring_phase * spread) as i32;
    (radius as f64, -((ring_phase * fade) as i32))
}

fn weaver_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &WEAVER;
    let (radius, fade) = orb_ring(frame, 1, 3.0, 80.0);
    base.recolor_part("orb", pulse(40.0, frame, total)).add_pixels(
        "rings",
        paint(ring(ORB, radius, 8), p.glow.brighten(fade)),
        26,
    )
}

/// Spiral threads from the orb: `(thread, step) -> point`.
fn threads(
    strands: impl Iterator<Item = f64>,
    length: u32,
    curl: f64,
    colour: Colour,
    fade_step: i32,
) -> Vec<(i32, i32, Colour)> {
    let mut points = Vec::new();
    for base_angle in strands {
        for step in 0..length {
            let angle = base_angle + step as f64 * curl;
            let dist = step as f64 * 1.5;
            let (x, y) = polar(ORB.0, ORB.1, dist, dist, angle);
            points.push((x, y, colour.brighten(-(step as i32) * fade_step)));
        }
    }
    clip(points)
}

fn weaver_action(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    let p = &WEAVER;
    let strands = (0..5).map(|t| TAU * t as f64 / 5.0 + 0.3);
    let points = threads(strands, (frame + 1).min(10), 0.12, p.highlight, 15);
    base.add_pixels("threads", points, 28)
}

fn weaver_idle_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &WEAVER;
    let (radius, fade) = orb_ring(frame, 2, 4.0, 60.0);
    weaver_idle(base, frame, total)
        .recolor_part("orb", pulse(25.0, frame, total))
        .add_pixels(
            "rings_advanced",
            paint(ring(ORB, radius, 12), p.accent.brighten(fade)),
            26,
        )
}

fn weaver_action_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &WEAVER;
    let strands = (7..10).map(|t| TAU * t as f64 / 10.0 + 0.3);
    let points = threads(strands, (frame + 2).min(12), 0.1, p.accent, 12);
    weaver_action(base, frame, total).add_pixels("threads_advanced", points, 27)
}

// Tier 4: cape sway with flask bubbles, golden burst.

const FLASK: (i32, i32) = (22, 14);

fn alchemist_idle(base: &Sprite, frame: u32, _total: u32) -> Sprite {
    let p = &ALCHEMIST;
    let cape_dx = if (frame / 3) % 2 == 0 { 1 } else { -1 };
    let bubbles = paint(
        (0..3).map(|i| (22 + i % 2, 10 - ((frame as i32 + i * 3) % 6))),
        p.highlight,
    );
    base.translate_part("cape", cape_dx, 0)
        .add_pixels("bubbles", bubbles, 24)
}

fn alchemist_action(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ALCHEMIST;
    let radius = frame * 8 / total.max(1) + 1;
    let burst = paint(
        ring(FLASK, radius as f64, 12 + frame),
        p.highlight.brighten(-(frame as i32) * 8),
    );
    base.add_pixels("burst", burst, 28)
}

fn alchemist_idle_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ALCHEMIST;
    let bubbles = paint(
        (0..5).map(|i| (22 + (i % 3) - 1, 10 - ((frame as i32 + i * 2) % 8))),
        p.accent.brighten(20),
    );
    alchemist_idle(base, frame, total)
        .recolor_part("flask", 30)
        .add_pixels("bubbles_advanced", bubbles, 24)
}

fn alchemist_action_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &ALCHEMIST;
    let radius = frame * 10 / total.max(1) + 1;
    let burst = paint(
        ring(FLASK, radius as f64, 20 + frame),
        p.accent.brighten(-(frame as i32) * 5),
    );
    alchemist_action(base, frame, total).add_pixels("burst_advanced", burst, 27)
}

// Tier 5: glowing blade with cape wave, slash arc.

/// Arc of a sword slash around the shoulder, revealed over the first 70% of the loop.
fn slash(
    frame: u32,
    total: u32,
    steps: u32,
    sweep: f64,
    growth: f64,
    colour: Colour,
    fade_step: i32,
) -> Vec<(i32, i32, Colour)> {
    let progress = (frame as f64 / (total as f64 * 0.7)).min(1.0);
    let visible = (progress * steps as f64) as u32;
    clip((0..visible).map(|step| {
        let t = step as f64 / steps as f64;
        let angle = -0.3 + t * sweep;
        let r = 8.0 + step as f64 * growth;
        let (x, y) = polar(18, 12, r, r, angle);
        (x, y, colour.brighten(-(step as i32) * fade_step))
    }))
}

fn sovereign_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    base.recolor_part("sword_blade", pulse(30.0, frame, total))
        .translate_part("cape", cycle(&SWAY_10, frame), 0)
}

fn sovereign_action(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &SOVEREIGN;
    let trail = slash(frame, total.max(1), 12, PI * 0.8, 0.3, p.highlight, 10);
    base.add_pixels("slash", trail, 28)
}

fn sovereign_idle_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &SOVEREIGN;
    let embers = clip((0..3).map(|i| {
        let angle = TAU * phase(frame, total) + i as f64 * (TAU / 3.0);
        let (x, y) = polar(23, 6, 3.0, 4.0, angle);
        (x, y, p.accent.brighten(-i * 15))
    }));
    sovereign_idle(base, frame, total)
        .recolor_part("sword_blade", pulse(45.0, frame, total))
        .recolor_part("cape", 15)
        .add_pixels("accent_embers", embers, 29)
}

fn sovereign_action_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &SOVEREIGN;
    let trail = slash(frame, total.max(1), 16, PI * 0.85, 0.4, p.accent, 8);
    sovereign_action(base, frame, total).add_pixels("slash_advanced", trail, 27)
}

// Tier 6: pulsing wings with orbiting aura, wing flare and radial burst.

const HEART: (i32, i32) = (16, 13);

/// Concentric radial burst: `rays` spokes covering radii `inner..=outer`.
fn radial_burst(
    rays: u32,
    inner: u32,
    outer: u32,
    colour: Colour,
    falloff: i32,
) -> Vec<(i32, i32, Colour)> {
    let mut points = Vec::new();
    for i in 0..rays {
        let angle = TAU * i as f64 / rays as f64;
        for r in inner..=outer {
            let (x, y) = polar(HEART.0, HEART.1, r as f64, r as f64, angle);
            let fade = (255 - r as i32 * falloff).max(0);
            points.push((x, y, colour.brighten(-(255 - fade))));
        }
    }
    clip(points)
}

fn grand_master_idle(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &GRAND_MASTER;
    base.recolor_part("wings", pulse(25.0, frame, total)).add_pixels(
        "orbit_particles",
        paint(orbit(HEART, (12.0, 10.0), 4, frame, total), p.highlight),
        32,
    )
}

fn grand_master_action(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &GRAND_MASTER;
    let total = total.max(1);

    let flare = 3.min(frame * 3 / total + 1) as i32;
    let flared = base.map_part("wings", |prim| match prim {
        Primitive::Pixel { x, .. } => {
            let dx = if x < 16 { -flare } else { flare };
            prim.shifted(dx, -(flare / 2))
        }
        rect => rect,
    });

    let radius = frame * 12 / total + 1;
    let burst = radial_burst(16, radius.saturating_sub(2), radius, p.highlight, 20);
    let mut s = flared.add_pixels("energy_burst", burst, 28);

    // edge flash on the opening frames
    if frame < 2 {
        s = s.add_pixels("flash", paint(border(), p.highlight), 50);
    }
    s
}

fn grand_master_idle_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &GRAND_MASTER;
    let amount = pulse(40.0, frame, total);
    grand_master_idle(base, frame, total)
        .recolor_part("wings", amount)
        .recolor_part("aura", 25)
        .add_pixels(
            "orbit_advanced",
            paint(
                orbit(HEART, (11.0, 9.0), 6, frame, total),
                p.accent.brighten(20),
            ),
            33,
        )
}

fn grand_master_action_advanced(base: &Sprite, frame: u32, total: u32) -> Sprite {
    let p = &GRAND_MASTER;
    let radius = frame * 14 / total.max(1) + 1;
    let burst = radial_burst(24, radius.saturating_sub(3), radius + 1, p.accent, 15);
    grand_master_action(base, frame, total).add_pixels("energy_burst_advanced", burst, 27)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::compositor::{render, Canvas};

    #[test]
    fn test_frame_counts() {
        let idle: Vec<u32> = Tier::ALL
            .iter()
            .map(|t| t.animations(Variant::Early).idle.frames)
            .collect();
        assert_eq!(idle, vec![8, 8, 10, 10, 10, 12]);

        let action: Vec<u32> = Tier::ALL
            .iter()
            .filter_map(|t| t.animations(Variant::Early).action)
            .map(|a| a.frames)
            .collect();
        assert_eq!(action, vec![12, 14, 14, 16, 16, 16]);
    }

    #[test]
    fn test_advanced_matches_early_timing() {
        for tier in Tier::ALL {
            let early = tier.animations(Variant::Early);
            let advanced = tier.animations(Variant::Advanced);
            assert_eq!(early.idle.frames, advanced.idle.frames);
            assert_eq!(early.idle.duration_ms, advanced.idle.duration_ms);
            assert_eq!(
                early.action.map(|a| a.frames),
                advanced.action.map(|a| a.frames)
            );
        }
    }

    #[test]
    fn test_number_roundtrip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_number(tier.number()), Some(tier));
        }
        assert_eq!(Tier::from_number(7), None);
    }

    #[test]
    fn test_initiate_cursor_blinks() {
        let base = Tier::TerminalInitiate.sprite();
        assert!(initiate_idle(&base, 0, 8).contains("cursor_block"));
        assert!(!initiate_idle(&base, 2, 8).contains("cursor_block"));
        assert!(initiate_idle(&base, 4, 8).contains("cursor_block"));
    }

    #[test]
    fn test_initiate_rain_grows() {
        let base = Tier::TerminalInitiate.sprite();
        assert!(initiate_action(&base, 0, 12)
            .get("rain")
            .map_or(true, |p| p.primitives.is_empty()));
        let late = initiate_action(&base, 11, 12);
        assert!(late.get("rain").unwrap().primitives.len() > 10);
    }

    #[test]
    fn test_wings_flare_outward() {
        let base = Tier::GrandMaster.sprite();
        let flared = grand_master_action(&base, 15, 16);
        let before = &base.get("wings").unwrap().primitives;
        let after = &flared.get("wings").unwrap().primitives;
        assert_eq!(before[0], Primitive::pixel(8, 12, GRAND_MASTER.highlight));
        assert_eq!(after[0], Primitive::pixel(5, 11, GRAND_MASTER.highlight));
    }

    #[test]
    fn test_flash_only_on_opening_frames() {
        let base = Tier::GrandMaster.sprite();
        assert!(grand_master_action(&base, 1, 16).contains("flash"));
        assert!(!grand_master_action(&base, 2, 16).contains("flash"));
    }

    #[test]
    fn test_idle_frames_differ_from_each_other() {
        let canvas = Canvas::default();
        for tier in Tier::ALL {
            let base = tier.sprite();
            let spec = tier.animations(Variant::Early).idle;
            let first = render(&spec.frame(&base, 0), &canvas);
            let changed = (1..spec.frames).any(|i| render(&spec.frame(&base, i), &canvas) != first);
            assert!(changed, "{:?} idle never changes", tier);
        }
    }
}
