//! Archetype registry: every character the generator can draw.
//!
//! Four families share an anatomy vocabulary:
//! - [`Tier`] - six progression tiers with idle and action loops
//! - [`Class`] - five character classes
//! - [`Tool`] - four partner tool avatars
//! - [`Guardian`] - five guardian robot stages
//!
//! Selectors are parsed with [`str::parse`]: a bare tier number (`3`), a
//! canonical id (`tier-3`, `class-scribe`, `tool-clay`, `guardian-2`) or a
//! bare class or tool name (`scribe`, `clay`). Matching ignores case.

mod anatomy;
pub mod classes;
pub mod guardians;
pub mod tiers;
pub mod tools;

use std::fmt;
use std::str::FromStr;

pub use classes::Class;
pub use guardians::Guardian;
pub use tiers::Tier;
pub use tools::Tool;

use crate::animation::{AnimationSet, Variant};
use crate::error::AvatarError;
use crate::types::{Palette, Sprite};

/// Archetype family, used for CLI filters and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Tier,
    Class,
    Tool,
    Guardian,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Tier => "tier",
            Family::Class => "class",
            Family::Tool => "tool",
            Family::Guardian => "guardian",
        }
    }
}

/// One drawable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Archetype {
    Tier(Tier),
    Class(Class),
    Tool(Tool),
    Guardian(Guardian),
}

impl Archetype {
    /// Every archetype in canonical order: tiers, classes, tools, guardians.
    pub fn all() -> Vec<Archetype> {
        let mut all = Vec::with_capacity(20);
        all.extend(Tier::ALL.map(Archetype::Tier));
        all.extend(Class::ALL.map(Archetype::Class));
        all.extend(Tool::ALL.map(Archetype::Tool));
        all.extend(Guardian::ALL.map(Archetype::Guardian));
        all
    }

    /// Every archetype of one family.
    pub fn family_members(family: Family) -> Vec<Archetype> {
        Archetype::all()
            .into_iter()
            .filter(|a| a.family() == family)
            .collect()
    }

    pub fn family(&self) -> Family {
        match self {
            Archetype::Tier(_) => Family::Tier,
            Archetype::Class(_) => Family::Class,
            Archetype::Tool(_) => Family::Tool,
            Archetype::Guardian(_) => Family::Guardian,
        }
    }

    /// Canonical id, used as the file-name prefix.
    pub fn id(&self) -> String {
        match self {
            Archetype::Tier(t) => format!("tier-{}", t.number()),
            Archetype::Class(c) => format!("class-{}", c.name()),
            Archetype::Tool(t) => format!("tool-{}", t.name()),
            Archetype::Guardian(g) => format!("guardian-{}", g.number()),
        }
    }

    /// Human-readable name.
    pub fn title(&self) -> &'static str {
        match self {
            Archetype::Tier(t) => t.title(),
            Archetype::Class(c) => match c {
                Class::Builder => "Builder",
                Class::Scribe => "Scribe",
                Class::Strategist => "Strategist",
                Class::Alchemist => "Alchemist",
                Class::Polymath => "Polymath",
            },
            Archetype::Tool(t) => match t {
                Tool::Clay => "Clay",
                Tool::Instantly => "Instantly",
                Tool::Heyreach => "HeyReach",
                Tool::Ouroboros => "Ouroboros",
            },
            Archetype::Guardian(g) => g.title(),
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Archetype::Tier(t) => t.palette(),
            Archetype::Class(c) => c.palette(),
            Archetype::Tool(t) => t.palette(),
            Archetype::Guardian(g) => g.palette(),
        }
    }

    /// Build the base sprite. Pure: a fresh value on every call.
    pub fn sprite(&self) -> Sprite {
        match self {
            Archetype::Tier(t) => t.sprite(),
            Archetype::Class(c) => c.sprite(),
            Archetype::Tool(t) => t.sprite(),
            Archetype::Guardian(g) => g.sprite(),
        }
    }

    /// Animation loops for a variant. Only tiers have an advanced set;
    /// the other families return their early set for either variant.
    pub fn animations(&self, variant: Variant) -> AnimationSet {
        match self {
            Archetype::Tier(t) => t.animations(variant),
            Archetype::Class(c) => c.animations(),
            Archetype::Tool(t) => t.animations(),
            Archetype::Guardian(g) => g.animations(),
        }
    }

    /// Whether `variant` produces artwork distinct from the early set.
    pub fn has_variant(&self, variant: Variant) -> bool {
        variant == Variant::Early || matches!(self, Archetype::Tier(_))
    }

    /// Comma-separated list of every canonical id, for help text.
    pub fn valid_ids() -> String {
        Archetype::all()
            .iter()
            .map(Archetype::id)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn parse_selector(selector: &str) -> Option<Archetype> {
        let s = selector.trim().to_ascii_lowercase();
        if let Ok(n) = s.parse::<u8>() {
            return Tier::from_number(n).map(Archetype::Tier);
        }
        if let Some((family, rest)) = s.split_once('-') {
            let found = match family {
                "tier" => rest.parse().ok().and_then(Tier::from_number).map(Archetype::Tier),
                "class" => Class::from_name(rest).map(Archetype::Class),
                "tool" => Tool::from_name(rest).map(Archetype::Tool),
                "guardian" => rest
                    .parse()
                    .ok()
                    .and_then(Guardian::from_number)
                    .map(Archetype::Guardian),
                _ => None,
            };
            return found;
        }
        Class::from_name(&s)
            .map(Archetype::Class)
            .or_else(|| Tool::from_name(&s).map(Archetype::Tool))
    }
}

impl FromStr for Archetype {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::parse_selector(s).ok_or_else(|| AvatarError::InvalidArchetype {
            selector: s.to_string(),
            help: Some(format!("Valid archetypes: {}", Archetype::valid_ids())),
        })
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
