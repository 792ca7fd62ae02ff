//! Body parts and sprites.
//!
//! A sprite is a set of uniquely named body parts. Parts are stored in a
//! `BTreeMap`, so iteration is ordered by name and the order in which parts
//! were added never influences rendering.

use std::collections::BTreeMap;

use super::Primitive;

/// A named, z-ordered group of primitives (one anatomical or equipment element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPart {
    pub name: String,
    pub primitives: Vec<Primitive>,
    /// Lower values are painted first (further back).
    pub z_order: i32,
}

impl BodyPart {
    pub fn new(name: impl Into<String>, z_order: i32, primitives: Vec<Primitive>) -> Self {
        Self {
            name: name.into(),
            primitives,
            z_order,
        }
    }
}

/// A complete character sprite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprite {
    parts: BTreeMap<String, BodyPart>,
}

impl Sprite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sprite from parts; a later part replaces an earlier one with the same name.
    pub fn from_parts(parts: impl IntoIterator<Item = BodyPart>) -> Self {
        let mut sprite = Self::new();
        for part in parts {
            sprite.insert(part);
        }
        sprite
    }

    /// Insert or replace a part (construction-time only).
    pub fn insert(&mut self, part: BodyPart) {
        self.parts.insert(part.name.clone(), part);
    }

    /// Builder-style variant of [`Sprite::insert`].
    pub fn with(mut self, part: BodyPart) -> Self {
        self.insert(part);
        self
    }

    pub fn get(&self, name: &str) -> Option<&BodyPart> {
        self.parts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parts in paint order: ascending z-order, ties by ascending name.
    pub fn paint_order(&self) -> Vec<&BodyPart> {
        let mut parts: Vec<&BodyPart> = self.parts.values().collect();
        // Stable sort over name-ordered input keeps the name tie-break.
        parts.sort_by_key(|p| p.z_order);
        parts
    }

    /// Copy this sprite and apply `edit` to the copy.
    ///
    /// Every transform goes through here, so the input is never touched.
    pub(crate) fn derive(&self, edit: impl FnOnce(&mut BTreeMap<String, BodyPart>)) -> Sprite {
        let mut parts = self.parts.clone();
        edit(&mut parts);
        Sprite { parts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn part(name: &str, z: i32) -> BodyPart {
        BodyPart::new(name, z, vec![Primitive::pixel(0, 0, Colour::WHITE)])
    }

    #[test]
    fn test_paint_order_by_z_then_name() {
        let sprite = Sprite::from_parts([part("zeta", 5), part("alpha", 5), part("back", 1)]);
        let order: Vec<&str> = sprite.paint_order().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["back", "alpha", "zeta"]);
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let a = Sprite::from_parts([part("head", 20), part("body", 10)]);
        let b = Sprite::from_parts([part("body", 10), part("head", 20)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let sprite = Sprite::new().with(part("head", 20)).with(part("head", 3));
        assert_eq!(sprite.len(), 1);
        assert_eq!(sprite.get("head").map(|p| p.z_order), Some(3));
    }
}
