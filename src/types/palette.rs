//! Palette type for named colour roles.

use super::Colour;

/// Colour roles shared by every archetype.
pub const CORE_ROLES: [&str; 6] = ["primary", "secondary", "dark", "highlight", "glow", "accent"];

/// A named set of colour roles, resolved once per archetype.
///
/// The six core roles are fields; archetype-specific extras (`accent2`,
/// `visor_glow`, `rainbow_1`, ...) live in a static slice. Palettes are
/// `const` data and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Palette name
    pub name: &'static str,
    pub primary: Colour,
    pub secondary: Colour,
    pub dark: Colour,
    pub highlight: Colour,
    pub glow: Colour,
    pub accent: Colour,
    /// Archetype-specific extra roles.
    pub extras: &'static [(&'static str, Colour)],
}

impl Palette {
    /// Get a colour by role name.
    pub fn get(&self, role: &str) -> Option<Colour> {
        match role {
            "primary" => Some(self.primary),
            "secondary" => Some(self.secondary),
            "dark" => Some(self.dark),
            "highlight" => Some(self.highlight),
            "glow" => Some(self.glow),
            "accent" => Some(self.accent),
            _ => self
                .extras
                .iter()
                .find(|(name, _)| *name == role)
                .map(|(_, colour)| *colour),
        }
    }

    /// All roles in display order: core roles first, then extras.
    pub fn roles(&self) -> impl Iterator<Item = (&'static str, Colour)> + '_ {
        let core = [
            self.primary,
            self.secondary,
            self.dark,
            self.highlight,
            self.glow,
            self.accent,
        ];
        CORE_ROLES
            .into_iter()
            .zip(core)
            .chain(self.extras.iter().copied())
    }

    /// Get the number of roles.
    pub fn len(&self) -> usize {
        CORE_ROLES.len() + self.extras.len()
    }

    /// A palette always carries the core roles.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST: Palette = Palette {
        name: "test",
        primary: Colour::rgb(1, 1, 1),
        secondary: Colour::rgb(2, 2, 2),
        dark: Colour::rgb(3, 3, 3),
        highlight: Colour::rgb(4, 4, 4),
        glow: Colour::rgb(5, 5, 5),
        accent: Colour::rgb(6, 6, 6),
        extras: &[("gold", Colour::rgb(7, 7, 7))],
    };

    #[test]
    fn test_get_core_and_extra() {
        assert_eq!(TEST.get("primary"), Some(Colour::rgb(1, 1, 1)));
        assert_eq!(TEST.get("accent"), Some(Colour::rgb(6, 6, 6)));
        assert_eq!(TEST.get("$accent"), None);
        assert_eq!(TEST.get("gold"), Some(Colour::rgb(7, 7, 7)));
        assert_eq!(TEST.get("missing"), None);
    }

    #[test]
    fn test_roles_order() {
        let names: Vec<&str> = TEST.roles().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["primary", "secondary", "dark", "highlight", "glow", "accent", "gold"]
        );
        assert_eq!(TEST.len(), 7);
    }
}
