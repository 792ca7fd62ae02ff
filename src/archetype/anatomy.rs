//! Shared humanoid anatomy and design-system colours.
//!
//! Layout on the 32×32 grid:
//!
//! ```text
//!   y  4      hair
//!   y  5-9    face (6 wide)
//!   y  10     neck
//!   y  11-16  torso
//!   y  17-22  legs (2 wide, 2 px gap)
//!   y  23     feet
//!   x  11-20  full width including arms
//! ```

use crate::types::{BodyPart, Colour, Primitive, Sprite};

pub const SKIN: Colour = Colour::rgb(200, 175, 150);
pub const SKIN_SHADOW: Colour = Colour::rgb(160, 135, 110);
pub const CLOTH_MID: Colour = Colour::rgb(70, 75, 88);
pub const CLOTH_DARK: Colour = Colour::rgb(50, 54, 64);
pub const BOOT_MID: Colour = Colour::rgb(55, 58, 68);
pub const BOOT_DARK: Colour = Colour::rgb(40, 42, 50);
pub const HAIR_DARK: Colour = Colour::rgb(45, 35, 30);
pub const EYE: Colour = Colour::rgb(220, 235, 255);
pub const PARCHMENT: Colour = Colour::rgb(220, 210, 180);
pub const PARCH_DARK: Colour = Colour::rgb(190, 180, 150);
pub const METAL_LIGHT: Colour = Colour::rgb(180, 190, 205);
pub const METAL_MID: Colour = Colour::rgb(130, 140, 155);
pub const METAL_DARK: Colour = Colour::rgb(90, 95, 110);

/// Clothing colours for [`base_body`].
#[derive(Debug, Clone, Copy)]
pub struct Outfit {
    pub cloth: Colour,
    pub cloth_dark: Colour,
    pub boot: Colour,
    pub boot_dark: Colour,
}

impl Default for Outfit {
    fn default() -> Self {
        Self {
            cloth: CLOTH_MID,
            cloth_dark: CLOTH_DARK,
            boot: BOOT_MID,
            boot_dark: BOOT_DARK,
        }
    }
}

/// The humanoid skeleton: head, body, arms and legs.
///
/// Archetypes replace or add parts on top of this.
pub fn base_body(outfit: Outfit) -> Sprite {
    let mut head = vec![
        Primitive::rect(13, 4, 18, 4, HAIR_DARK),
        Primitive::rect(13, 5, 18, 9, SKIN),
    ];
    head.extend(features());

    Sprite::from_parts([
        BodyPart::new("head", 20, head),
        BodyPart::new(
            "body",
            10,
            vec![
                Primitive::rect(15, 10, 16, 10, SKIN),
                Primitive::rect(13, 11, 18, 16, outfit.cloth),
                Primitive::rect(13, 15, 18, 15, outfit.cloth_dark),
            ],
        ),
        arms(outfit.cloth),
        BodyPart::new(
            "legs",
            5,
            vec![
                Primitive::rect(13, 17, 14, 22, outfit.boot),
                Primitive::rect(17, 17, 18, 22, outfit.boot),
                Primitive::rect(12, 23, 14, 23, outfit.boot_dark),
                Primitive::rect(17, 23, 19, 23, outfit.boot_dark),
            ],
        ),
    ])
}

/// Two-pixel-wide sleeves with bare hands.
pub fn arms(cloth: Colour) -> BodyPart {
    BodyPart::new(
        "arms",
        15,
        vec![
            Primitive::rect(11, 11, 12, 15, cloth),
            Primitive::rect(19, 11, 20, 15, cloth),
            Primitive::pixel(11, 16, SKIN),
            Primitive::pixel(20, 16, SKIN),
        ],
    )
}

/// Eyes and mouth on the standard face block.
pub fn features() -> [Primitive; 4] {
    [
        Primitive::pixel(14, 7, EYE),
        Primitive::pixel(17, 7, EYE),
        Primitive::pixel(15, 9, SKIN_SHADOW),
        Primitive::pixel(16, 9, SKIN_SHADOW),
    ]
}

/// A bare `face` part starting at row `top`, for hooded or hatted figures.
pub fn face(top: i32) -> BodyPart {
    let mut prims = vec![Primitive::rect(13, top, 18, 9, SKIN)];
    prims.extend(features());
    BodyPart::new("face", 20, prims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_body_parts() {
        let body = base_body(Outfit::default());
        let names: Vec<&str> = body.part_names().collect();
        assert_eq!(names, vec!["arms", "body", "head", "legs"]);
        assert_eq!(body.get("legs").map(|p| p.z_order), Some(5));
    }

    #[test]
    fn test_outfit_colours_used() {
        let outfit = Outfit {
            cloth: Colour::rgb(1, 2, 3),
            ..Outfit::default()
        };
        let body = base_body(outfit);
        let torso = body.get("body").unwrap().primitives[1];
        assert_eq!(torso.colour(), Colour::rgb(1, 2, 3));
    }
}
