//! Work planning: which units to run and what to call their files.
//!
//! A unit is one archetype × variant × size × artifact kind. File names are
//! pure functions of those four values, so two runs over the same options
//! always target the same files and no two units share a target.

use std::fmt;

use crate::animation::{ArtifactKind, Variant};
use crate::archetype::Archetype;
use crate::error::AvatarError;
use crate::render::Canvas;

use super::{Failure, GenerateOptions};

/// Pointer copies of the current archetype's early canonical files.
pub const CURRENT_IDLE: &str = "current-idle.gif";
pub const CURRENT_ACTION: &str = "current-action.gif";
pub const CURRENT_STATIC: &str = "current.png";

/// Tier idle sprite sheet.
pub const SHEET_FILE: &str = "idle-sprite-sheet.png";

/// Listing of every written artifact.
pub const MANIFEST_FILE: &str = "manifest.json";

/// `{id}-{kind}[-advanced][-{size}].{ext}`; `None` gives the canonical
/// unsuffixed name.
pub fn artifact_name(id: &str, kind: ArtifactKind, variant: Variant, size: Option<u32>) -> String {
    let size = size.map(|s| format!("-{s}")).unwrap_or_default();
    format!(
        "{id}-{kind}{variant}{size}.{ext}",
        kind = kind.as_str(),
        variant = variant.suffix(),
        ext = kind.extension()
    )
}

/// Name of the `current-*` copy for an artifact kind.
pub fn current_name(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Idle => CURRENT_IDLE,
        ArtifactKind::Action => CURRENT_ACTION,
        ArtifactKind::Static => CURRENT_STATIC,
    }
}

/// One independent piece of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    pub archetype: Archetype,
    pub variant: Variant,
    pub size: u32,
    pub kind: ArtifactKind,
}

impl Unit {
    pub fn file_name(&self) -> String {
        artifact_name(&self.archetype.id(), self.kind, self.variant, Some(self.size))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.archetype, self.kind)?;
        if self.variant != Variant::Early {
            write!(f, " {}", self.variant)?;
        }
        write!(f, " {}px", self.size)
    }
}

/// Units to run plus the failures found while planning.
#[derive(Debug, Default)]
pub struct Plan {
    pub units: Vec<Unit>,
    pub failures: Vec<Failure>,
    /// Resolved `current` archetype, if one was requested and valid.
    pub current: Option<Archetype>,
}

impl Plan {
    /// Expand options into units, in a stable order: archetype, variant,
    /// size, then idle/action/static.
    pub fn build(opts: &GenerateOptions) -> Plan {
        let mut plan = Plan::default();

        let mut archetypes: Vec<Archetype> = Vec::new();
        if opts.selectors.is_empty() {
            archetypes = Archetype::all();
        } else {
            for selector in &opts.selectors {
                match selector.parse::<Archetype>() {
                    Ok(a) if !archetypes.contains(&a) => archetypes.push(a),
                    Ok(_) => {}
                    Err(e) => plan.failures.push(Failure::new(selector.clone(), e)),
                }
            }
        }

        let canvas = Canvas::with_background(opts.background);
        let mut sizes: Vec<u32> = Vec::new();
        let mut bad_sizes: Vec<u32> = Vec::new();
        for &size in &opts.sizes {
            let seen = sizes.contains(&size) || bad_sizes.contains(&size);
            if seen {
                continue;
            }
            match canvas.validate_size(size) {
                Ok(_) => sizes.push(size),
                Err(_) => bad_sizes.push(size),
            }
        }

        for &archetype in &archetypes {
            for &size in &bad_sizes {
                plan.failures.push(Failure::new(
                    format!("{archetype} {size}px"),
                    AvatarError::InvalidSize {
                        size,
                        grid: canvas.size,
                    },
                ));
            }
            for variant in variants_for(archetype, &opts.variants) {
                for &size in &sizes {
                    plan.push_units(archetype, variant, size);
                }
            }
        }

        if let Some(selector) = &opts.current {
            match selector.parse::<Archetype>() {
                Ok(archetype) => match canvas.validate_size(opts.default_size) {
                    Ok(_) => {
                        plan.push_units(archetype, Variant::Early, opts.default_size);
                        plan.current = Some(archetype);
                    }
                    Err(e) => plan.failures.push(Failure::new(format!("current {archetype}"), e)),
                },
                Err(e) => plan.failures.push(Failure::new(selector.clone(), e)),
            }
        }

        plan
    }

    /// Add idle, action (when defined) and static units, skipping any
    /// already planned.
    fn push_units(&mut self, archetype: Archetype, variant: Variant, size: u32) {
        let has_action = archetype.animations(variant).action.is_some();
        let kinds = [ArtifactKind::Idle, ArtifactKind::Action, ArtifactKind::Static];
        for kind in kinds {
            if kind == ArtifactKind::Action && !has_action {
                continue;
            }
            let unit = Unit {
                archetype,
                variant,
                size,
                kind,
            };
            if !self.units.contains(&unit) {
                self.units.push(unit);
            }
        }
    }
}

/// Variants that produce distinct artwork for `archetype`. Families without
/// an advanced set fold it into their early set.
fn variants_for(archetype: Archetype, requested: &[Variant]) -> Vec<Variant> {
    let mut out = Vec::new();
    for &variant in requested {
        let v = if archetype.has_variant(variant) {
            variant
        } else {
            Variant::Early
        };
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::{Class, Tier};
    use pretty_assertions::assert_eq;

    fn opts(selectors: &[&str], sizes: &[u32]) -> GenerateOptions {
        GenerateOptions {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            sizes: sizes.to_vec(),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn test_artifact_names() {
        assert_eq!(
            artifact_name("tier-3", ArtifactKind::Idle, Variant::Early, Some(128)),
            "tier-3-idle-128.gif"
        );
        assert_eq!(
            artifact_name("tier-3", ArtifactKind::Action, Variant::Advanced, Some(64)),
            "tier-3-action-advanced-64.gif"
        );
        assert_eq!(
            artifact_name("class-scribe", ArtifactKind::Static, Variant::Early, None),
            "class-scribe-static.png"
        );
    }

    #[test]
    fn test_tier_plan_has_three_kinds() {
        let plan = Plan::build(&opts(&["3"], &[128]));
        let names: Vec<String> = plan.units.iter().map(Unit::file_name).collect();
        assert_eq!(
            names,
            vec!["tier-3-idle-128.gif", "tier-3-action-128.gif", "tier-3-static-128.png"]
        );
        assert!(plan.failures.is_empty());
    }

    #[test]
    fn test_class_plan_has_no_action() {
        let plan = Plan::build(&opts(&["scribe"], &[64, 128]));
        assert_eq!(plan.units.len(), 4);
        assert!(plan.units.iter().all(|u| u.kind != ArtifactKind::Action));
    }

    #[test]
    fn test_invalid_selector_is_one_failure() {
        let plan = Plan::build(&opts(&["tier-1", "wizard", "tier-2"], &[128]));
        assert_eq!(plan.failures.len(), 1);
        assert_eq!(plan.failures[0].target, "wizard");
        assert_eq!(plan.failures[0].error.kind(), "invalid-archetype");
        assert_eq!(plan.units.len(), 6);
    }

    #[test]
    fn test_invalid_size_per_archetype() {
        let plan = Plan::build(&opts(&["tier-1", "class-builder"], &[128, 100]));
        assert_eq!(plan.failures.len(), 2);
        assert!(plan
            .failures
            .iter()
            .all(|f| matches!(f.error, AvatarError::InvalidSize { size: 100, .. })));
        assert_eq!(plan.units.len(), 3 + 2);
    }

    #[test]
    fn test_duplicate_selectors_collapse() {
        let plan = Plan::build(&opts(&["3", "tier-3", "TIER-3"], &[64]));
        assert_eq!(plan.units.len(), 3);
    }

    #[test]
    fn test_advanced_folds_for_classes() {
        let mut o = opts(&["tier-1", "class-scribe"], &[128]);
        o.variants = vec![Variant::Early, Variant::Advanced];
        let plan = Plan::build(&o);
        let tier_units = plan
            .units
            .iter()
            .filter(|u| u.archetype == Archetype::Tier(Tier::TerminalInitiate))
            .count();
        let class_units: Vec<&Unit> = plan
            .units
            .iter()
            .filter(|u| u.archetype == Archetype::Class(Class::Scribe))
            .collect();
        assert_eq!(tier_units, 6);
        assert_eq!(class_units.len(), 2);
        assert!(class_units.iter().all(|u| u.variant == Variant::Early));
    }

    #[test]
    fn test_current_adds_default_size_units() {
        let mut o = opts(&["tier-1"], &[64]);
        o.current = Some("tier-2".to_string());
        let plan = Plan::build(&o);
        assert_eq!(plan.current, Some(Archetype::Tier(Tier::RepoArchitect)));
        assert!(plan
            .units
            .iter()
            .any(|u| u.file_name() == "tier-2-idle-128.gif"));
    }

    #[test]
    fn test_empty_selectors_mean_all() {
        let plan = Plan::build(&opts(&[], &[32]));
        // 6 tiers with action, 14 others without
        assert_eq!(plan.units.len(), 6 * 3 + 14 * 2);
    }

    #[test]
    fn test_unit_display() {
        let unit = Unit {
            archetype: Archetype::Tier(Tier::ContextWeaver),
            variant: Variant::Advanced,
            size: 256,
            kind: ArtifactKind::Idle,
        };
        assert_eq!(unit.to_string(), "tier-3 idle advanced 256px");
    }
}
