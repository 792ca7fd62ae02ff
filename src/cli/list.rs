//! List command implementation.
//!
//! Prints every archetype with its palette roles and animation timings.

use clap::Args;
use serde::Serialize;

use crate::animation::{AnimationSpec, Variant};
use crate::archetype::Archetype;
use crate::error::{AvatarError, Result};
use crate::output::Printer;

/// List archetypes with their palettes and animations
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Print JSON to stdout instead of the status listing
    #[arg(long)]
    pub json: bool,

    /// Show palette colours
    #[arg(long)]
    pub palettes: bool,
}

#[derive(Debug, Serialize)]
struct Timing {
    frames: u32,
    duration_ms: u32,
}

impl From<&AnimationSpec> for Timing {
    fn from(spec: &AnimationSpec) -> Self {
        Self {
            frames: spec.frames,
            duration_ms: spec.duration_ms,
        }
    }
}

#[derive(Debug, Serialize)]
struct Entry {
    id: String,
    family: &'static str,
    title: &'static str,
    idle: Timing,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<Timing>,
    advanced: bool,
    palette: Vec<(&'static str, String)>,
}

impl Entry {
    fn new(archetype: Archetype) -> Self {
        let set = archetype.animations(Variant::Early);
        Self {
            id: archetype.id(),
            family: archetype.family().as_str(),
            title: archetype.title(),
            idle: Timing::from(&set.idle),
            action: set.action.as_ref().map(Timing::from),
            advanced: archetype.has_variant(Variant::Advanced),
            palette: archetype
                .palette()
                .roles()
                .into_iter()
                .map(|(role, colour)| (role, colour.to_string()))
                .collect(),
        }
    }
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let entries: Vec<Entry> = Archetype::all().into_iter().map(Entry::new).collect();

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| AvatarError::encoding(format!("list: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    for entry in &entries {
        let mut line = format!(
            "{} {} idle {}f/{}ms",
            printer.bold(&entry.id),
            printer.dim(entry.title),
            entry.idle.frames,
            entry.idle.duration_ms
        );
        if let Some(action) = &entry.action {
            line.push_str(&format!(
                " · action {}f/{}ms",
                action.frames, action.duration_ms
            ));
        }
        if entry.advanced {
            line.push_str(&printer.dim(" +advanced"));
        }
        printer.info(entry.family, &line);

        if args.palettes {
            let roles: Vec<String> = entry
                .palette
                .iter()
                .map(|(role, hex)| format!("{role} {hex}"))
                .collect();
            printer.info("", &printer.dim(&roles.join(", ")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Tier;

    #[test]
    fn test_entry_for_tier() {
        let entry = Entry::new(Archetype::Tier(Tier::ContextWeaver));
        assert_eq!(entry.id, "tier-3");
        assert_eq!(entry.idle.frames, 10);
        assert_eq!(entry.action.as_ref().map(|a| a.frames), Some(14));
        assert!(entry.advanced);
        assert_eq!(entry.palette[0].0, "primary");
    }

    #[test]
    fn test_entries_serialize() {
        let entries: Vec<Entry> = Archetype::all().into_iter().map(Entry::new).collect();
        let value = serde_json::to_value(&entries).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 20);
        assert!(value[19].get("action").is_none());
    }

    #[test]
    fn test_run_plain() {
        run(ListArgs::default(), &Printer::quiet(true)).unwrap();
    }
}
