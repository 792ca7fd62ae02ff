//! Pure sprite transforms.
//!
//! Every operation returns a new [`Sprite`] and leaves its input untouched.
//! Operations that name a part which does not exist return an unchanged copy.
//! Per-frame animation transforms in [`crate::archetype`] are built by
//! chaining these.

pub mod effects;

use crate::types::{BodyPart, Colour, Primitive, Sprite};

impl Sprite {
    /// Shift every primitive of one part by (dx, dy).
    pub fn translate_part(&self, name: &str, dx: i32, dy: i32) -> Sprite {
        self.map_part(name, |prim| prim.shifted(dx, dy))
    }

    /// Shift every primitive of every part by (dx, dy).
    pub fn translate_all(&self, dx: i32, dy: i32) -> Sprite {
        self.derive(|parts| {
            for part in parts.values_mut() {
                for prim in &mut part.primitives {
                    *prim = prim.shifted(dx, dy);
                }
            }
        })
    }

    /// Brighten (or darken) every primitive of one part, clamped per channel.
    pub fn recolor_part(&self, name: &str, delta: i32) -> Sprite {
        if delta == 0 {
            return self.clone();
        }
        self.map_part(name, |prim| prim.with_colour(prim.colour().brighten(delta)))
    }

    /// Append single-pixel primitives to a part, creating it at `z_order`
    /// when absent. An existing part keeps its z-order.
    pub fn add_pixels(
        &self,
        name: &str,
        points: impl IntoIterator<Item = (i32, i32, Colour)>,
        z_order: i32,
    ) -> Sprite {
        let pixels = points
            .into_iter()
            .map(|(x, y, colour)| Primitive::pixel(x, y, colour));
        self.derive(|parts| {
            parts
                .entry(name.to_string())
                .or_insert_with(|| BodyPart::new(name, z_order, Vec::new()))
                .primitives
                .extend(pixels);
        })
    }

    /// Drop one part.
    pub fn remove_part(&self, name: &str) -> Sprite {
        self.derive(|parts| {
            parts.remove(name);
        })
    }

    /// Rewrite every primitive of one part with `f`.
    pub fn map_part(&self, name: &str, mut f: impl FnMut(Primitive) -> Primitive) -> Sprite {
        self.derive(|parts| {
            if let Some(part) = parts.get_mut(name) {
                for prim in &mut part.primitives {
                    *prim = f(*prim);
                }
            }
        })
    }

    /// Recolour the primitive at `index` within one part.
    pub fn set_primitive_colour(&self, name: &str, index: usize, colour: Colour) -> Sprite {
        self.derive(|parts| {
            if let Some(prim) = parts
                .get_mut(name)
                .and_then(|part| part.primitives.get_mut(index))
            {
                *prim = prim.with_colour(colour);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Colour = Colour::rgb(200, 10, 10);

    fn sample() -> Sprite {
        Sprite::from_parts([
            BodyPart::new("head", 20, vec![Primitive::rect(13, 5, 18, 9, RED)]),
            BodyPart::new("legs", 5, vec![Primitive::pixel(13, 22, Colour::WHITE)]),
        ])
    }

    #[test]
    fn test_translate_part_only_moves_that_part() {
        let base = sample();
        let moved = base.translate_part("head", 1, -1);

        assert_eq!(
            moved.get("head").unwrap().primitives,
            vec![Primitive::rect(14, 4, 19, 8, RED)]
        );
        assert_eq!(moved.get("legs"), base.get("legs"));
        // input untouched
        assert_eq!(base, sample());
    }

    #[test]
    fn test_translate_all() {
        let moved = sample().translate_all(0, 1);
        assert_eq!(
            moved.get("legs").unwrap().primitives,
            vec![Primitive::pixel(13, 23, Colour::WHITE)]
        );
        assert_eq!(
            moved.get("head").unwrap().primitives,
            vec![Primitive::rect(13, 6, 18, 10, RED)]
        );
    }

    #[test]
    fn test_recolor_clamps() {
        let bright = sample().recolor_part("head", 100);
        assert_eq!(
            bright.get("head").unwrap().primitives[0].colour(),
            Colour::rgb(255, 110, 110)
        );
        let dark = sample().recolor_part("legs", -300);
        assert_eq!(
            dark.get("legs").unwrap().primitives[0].colour(),
            Colour::BLACK
        );
    }

    #[test]
    fn test_add_pixels_creates_part() {
        let s = sample().add_pixels("sparks", [(1, 2, RED), (3, 4, RED)], 30);
        let sparks = s.get("sparks").unwrap();
        assert_eq!(sparks.z_order, 30);
        assert_eq!(sparks.primitives.len(), 2);
    }

    #[test]
    fn test_add_pixels_extends_existing_part() {
        let s = sample().add_pixels("legs", [(14, 22, RED)], 99);
        let legs = s.get("legs").unwrap();
        assert_eq!(legs.z_order, 5);
        assert_eq!(legs.primitives.len(), 2);
    }

    #[test]
    fn test_remove_part() {
        let s = sample().remove_part("head");
        assert!(!s.contains("head"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_missing_part_is_noop() {
        let base = sample();
        assert_eq!(base.translate_part("cape", 3, 3), base);
        assert_eq!(base.recolor_part("cape", 40), base);
        assert_eq!(base.remove_part("cape"), base);
        assert_eq!(base.set_primitive_colour("cape", 0, RED), base);
        assert_eq!(base.set_primitive_colour("head", 7, Colour::WHITE), base);
    }

    #[test]
    fn test_set_primitive_colour() {
        let s = sample().set_primitive_colour("head", 0, Colour::WHITE);
        assert_eq!(
            s.get("head").unwrap().primitives[0],
            Primitive::rect(13, 5, 18, 9, Colour::WHITE)
        );
    }

    #[test]
    fn test_chained_transforms_are_deterministic() {
        let a = sample().translate_all(0, -1).recolor_part("head", 20);
        let b = sample().translate_all(0, -1).recolor_part("head", 20);
        assert_eq!(a, b);
    }
}
