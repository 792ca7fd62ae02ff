//! Build command implementation.
//!
//! Merges pxavatar.yaml with command-line flags, runs the generator and
//! prints a Cargo-style summary. Any failed unit makes the command fail.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;

use crate::archetype::{Archetype, Family};
use crate::config::{Config, VariantChoice};
use crate::error::Result;
use crate::generate::{generate, GenerateOptions, GenerationReport};
use crate::output::{display_path, elapsed, plural, Printer};

/// Render avatars to GIF and PNG files
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Archetype selectors: 3, tier-3, class-scribe, scribe, tool-clay, guardian-2
    pub selectors: Vec<String>,

    /// Render every archetype
    #[arg(long)]
    pub all: bool,

    /// Add all six tiers
    #[arg(long)]
    pub tiers: bool,

    /// Add all classes
    #[arg(long)]
    pub classes: bool,

    /// Add all partner tools
    #[arg(long)]
    pub tools: bool,

    /// Add all guardian stages
    #[arg(long)]
    pub guardians: bool,

    /// Comma-separated output sizes (multiples of 32)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<u32>>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Animation variant
    #[arg(long, value_enum)]
    pub variant: Option<VariantChoice>,

    /// Copy this archetype's files to current-idle.gif, current-action.gif and current.png
    #[arg(long)]
    pub current: Option<String>,

    /// Also write the tier idle sprite sheet
    #[arg(long)]
    pub sheet: bool,

    /// Also write manifest.json
    #[arg(long)]
    pub manifest: bool,

    /// Worker threads (default: one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Config file (default: ./pxavatar.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl BuildArgs {
    /// Selectors named by the positional arguments and family flags.
    fn selectors(&self) -> Vec<String> {
        let mut selectors = self.selectors.clone();
        let families = [
            (self.tiers, Family::Tier),
            (self.classes, Family::Class),
            (self.tools, Family::Tool),
            (self.guardians, Family::Guardian),
        ];
        for (wanted, family) in families {
            if wanted {
                selectors.extend(Archetype::family_members(family).iter().map(Archetype::id));
            }
        }
        selectors
    }

    /// Apply flags on top of a loaded config.
    pub fn merge(&self, mut config: Config) -> Config {
        if self.all {
            config.archetypes.clear();
        } else {
            let selectors = self.selectors();
            if !selectors.is_empty() {
                config.archetypes = selectors;
            }
        }
        if let Some(sizes) = &self.sizes {
            config.sizes = sizes.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if self.current.is_some() {
            config.current = self.current.clone();
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        config.sheet |= self.sheet;
        config.manifest |= self.manifest;
        config
    }
}

/// Returns the report; callers decide the exit status from it.
pub fn run(args: BuildArgs, printer: &Printer) -> Result<GenerationReport> {
    let config = Config::discover(args.config.as_deref(), std::path::Path::new("."))?;
    let config = args.merge(config);
    let opts = GenerateOptions::from_config(&config)?;

    printer.status(
        "Rendering",
        &format!(
            "{} at {} into {}",
            describe_selection(&opts.selectors),
            opts.sizes
                .iter()
                .map(|s| format!("{s}px"))
                .collect::<Vec<_>>()
                .join(", "),
            printer.cyan(&display_path(&opts.output))
        ),
    );

    let started = Instant::now();
    let report = generate(&opts)?;

    for artifact in &report.written {
        let timing = match artifact.duration_ms {
            Some(ms) => format!("{}f @ {}ms", artifact.frames, ms),
            None => "keyframe".to_string(),
        };
        printer.status(
            "Wrote",
            &format!("{} {}", artifact.file, printer.dim(&format!("({timing})"))),
        );
    }
    for file in report.copies.iter().chain(&report.extras) {
        printer.info("Copied", file);
    }
    for failure in &report.failed {
        printer.error(
            "Failed",
            &format!("{}: {}", failure.target, failure.error),
        );
    }

    let summary = format!(
        "{} and {} in {}",
        plural(report.files().len(), "file", "files"),
        plural(report.failed_count(), "failure", "failures"),
        elapsed(started.elapsed())
    );
    if report.is_success() {
        printer.success("Finished", &summary);
    } else {
        printer.warning("Finished", &summary);
    }

    Ok(report)
}

fn describe_selection(selectors: &[String]) -> String {
    if selectors.is_empty() {
        "all archetypes".to_string()
    } else {
        selectors.join(", ")
    }
}
