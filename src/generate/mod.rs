//! Asset orchestration: turn archetypes into files on disk.
//!
//! A run expands its options into independent units (archetype × variant ×
//! size × kind), renders them on a rayon pool and collects results in plan
//! order. A failed unit never stops the others; every failure lands in the
//! [`GenerationReport`]. Canonical and `current-*` copies, the tier sprite
//! sheet and manifest.json are written after all units finish.

mod manifest;
mod plan;

pub use manifest::Manifest;
pub use plan::{
    artifact_name, current_name, Plan, Unit, CURRENT_ACTION, CURRENT_IDLE, CURRENT_STATIC,
    MANIFEST_FILE, SHEET_FILE,
};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::animation::{ArtifactKind, Variant};
use crate::archetype::{Archetype, Tier};
use crate::config::{Config, DEFAULT_SIZE};
use crate::error::{AvatarError, Result};
use crate::render::{render_at, write_gif, write_png, Canvas, SheetPacker, BACKGROUND};
use crate::types::Colour;

/// Gap between cells of the tier sprite sheet, in output pixels.
pub const SHEET_GAP: u32 = 4;

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    /// Archetype selectors; empty means every archetype.
    pub selectors: Vec<String>,
    pub sizes: Vec<u32>,
    /// Size that also gets canonical copies, and the size of `current-*`.
    pub default_size: u32,
    pub variants: Vec<Variant>,
    pub background: Colour,
    pub threads: Option<usize>,
    pub current: Option<String>,
    pub sheet: bool,
    pub manifest: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("avatars"),
            selectors: vec![],
            sizes: vec![DEFAULT_SIZE],
            default_size: DEFAULT_SIZE,
            variants: vec![Variant::Early],
            background: BACKGROUND,
            threads: None,
            current: None,
            sheet: false,
            manifest: false,
        }
    }
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            output: config.output.clone(),
            selectors: config.archetypes.clone(),
            sizes: config.sizes.clone(),
            default_size: config.default_size,
            variants: config.variant.variants(),
            background: config.background_colour()?,
            threads: config.threads,
            current: config.current.clone(),
            sheet: config.sheet,
            manifest: config.manifest,
        })
    }
}

/// One written animation or keyframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub archetype: String,
    pub kind: ArtifactKind,
    pub variant: Variant,
    pub size: u32,
    pub file: String,
    /// Unsuffixed copy, for artifacts at the default size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub frames: u32,
    /// Per-frame duration; absent for static keyframes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}

/// A unit, selector or copy that did not produce its file.
#[derive(Debug)]
pub struct Failure {
    /// What failed: a unit label, a selector or a file name.
    pub target: String,
    pub error: AvatarError,
}

impl Failure {
    pub fn new(target: impl Into<String>, error: AvatarError) -> Self {
        Self {
            target: target.into(),
            error,
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Rendered artifacts, in plan order.
    pub written: Vec<Artifact>,
    /// Canonical and `current-*` copies.
    pub copies: Vec<String>,
    /// Sprite sheet and manifest, when requested.
    pub extras: Vec<String>,
    pub failed: Vec<Failure>,
}

impl GenerationReport {
    pub fn written_count(&self) -> usize {
        self.written.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Every file name this run wrote, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut files: Vec<String> = self
            .written
            .iter()
            .map(|a| a.file.clone())
            .chain(self.copies.iter().cloned())
            .chain(self.extras.iter().cloned())
            .collect();
        files.sort();
        files.dedup();
        files
    }
}

/// Run a full generation.
///
/// Returns `Err` only when the run cannot start (no output directory, bad
/// thread count). Everything else is reported per unit.
pub fn generate(opts: &GenerateOptions) -> Result<GenerationReport> {
    let plan = Plan::build(opts);
    let pool = build_thread_pool(opts.threads)?;
    fs::create_dir_all(&opts.output).map_err(|e| AvatarError::io(&opts.output, e))?;

    info!(
        units = plan.units.len(),
        output = %opts.output.display(),
        "starting generation"
    );

    let canvas = Canvas::with_background(opts.background);
    let output = opts.output.as_path();
    let results: Vec<(Unit, Result<Artifact>)> = pool.install(|| {
        plan.units
            .par_iter()
            .map(|unit| {
                let result = retry_once(&unit.to_string(), || run_unit(unit, canvas, output));
                (*unit, result)
            })
            .collect()
    });

    let mut report = GenerationReport {
        failed: plan.failures,
        ..GenerationReport::default()
    };
    for (unit, result) in results {
        match result {
            Ok(artifact) => report.written.push(artifact),
            Err(error) => {
                warn!(unit = %unit, %error, "unit failed");
                report.failed.push(Failure::new(unit.to_string(), error));
            }
        }
    }

    write_canonical_copies(opts, &mut report);
    if let Some(current) = plan.current {
        update_current(current, opts, &mut report);
    }

    if opts.sheet {
        let path = output.join(SHEET_FILE);
        match retry_once(SHEET_FILE, || write_sheet(canvas, opts.default_size, &path)) {
            Ok(()) => report.extras.push(SHEET_FILE.to_string()),
            Err(error) => report.failed.push(Failure::new(SHEET_FILE, error)),
        }
    }

    if opts.manifest {
        let manifest = Manifest {
            generator: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            background: opts.background.to_string(),
            default_size: opts.default_size,
            artifacts: &report.written,
            current: plan.current.map(|a| a.id()),
            sheet: report
                .extras
                .iter()
                .any(|f| f == SHEET_FILE)
                .then_some(SHEET_FILE),
        };
        let path = output.join(MANIFEST_FILE);
        match retry_once(MANIFEST_FILE, || manifest.write(&path)) {
            Ok(()) => report.extras.push(MANIFEST_FILE.to_string()),
            Err(error) => report.failed.push(Failure::new(MANIFEST_FILE, error)),
        }
    }

    info!(
        written = report.written_count(),
        failed = report.failed_count(),
        "generation finished"
    );
    Ok(report)
}

fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(AvatarError::Config {
            message: "threads must be >= 1 when set".to_string(),
            help: Some("Omit threads to use one worker per core".to_string()),
        });
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| AvatarError::Config {
        message: format!("failed to build thread pool: {e}"),
        help: None,
    })
}

/// Run `op`, retrying once when it fails with a retryable (IO) error.
fn retry_once<T>(label: &str, mut op: impl FnMut() -> Result<T>) -> Result<T> {
    match op() {
        Err(error) if error.is_retryable() => {
            warn!(target_file = label, %error, "retrying after io failure");
            op()
        }
        other => other,
    }
}

#[tracing::instrument(skip_all, fields(unit = %unit))]
fn run_unit(unit: &Unit, canvas: Canvas, output: &Path) -> Result<Artifact> {
    let sprite = unit.archetype.sprite();
    let animations = unit.archetype.animations(unit.variant);
    let file = unit.file_name();
    let path = output.join(&file);

    let (frames, duration_ms) = match unit.kind {
        ArtifactKind::Static => {
            let keyframe = animations.idle.frame(&sprite, 0);
            let raster = render_at(&keyframe, &canvas, unit.size)?;
            write_png(&raster, &path)?;
            (1, None)
        }
        kind => {
            let spec = animations.get(kind).ok_or_else(|| {
                AvatarError::encoding(format!("{} has no {} animation", unit.archetype, kind))
            })?;
            let frames = spec
                .sequence(&sprite, canvas, unit.size)?
                .map(|(_, raster)| raster);
            let count = write_gif(&path, frames, spec.duration_ms, canvas.background)?;
            (count, Some(spec.duration_ms))
        }
    };

    debug!(file = %file, frames, "wrote artifact");
    Ok(Artifact {
        archetype: unit.archetype.id(),
        kind: unit.kind,
        variant: unit.variant,
        size: unit.size,
        file,
        canonical: None,
        frames,
        duration_ms,
    })
}

fn copy_file(output: &Path, from: &str, to: &str) -> Result<()> {
    let target = output.join(to);
    retry_once(to, || {
        fs::copy(output.join(from), &target)
            .map(|_| ())
            .map_err(|e| AvatarError::io(&target, e))
    })
}

/// Unsuffixed copies of every artifact at the default size.
fn write_canonical_copies(opts: &GenerateOptions, report: &mut GenerationReport) {
    for artifact in report
        .written
        .iter_mut()
        .filter(|a| a.size == opts.default_size)
    {
        let canonical = artifact_name(&artifact.archetype, artifact.kind, artifact.variant, None);
        match copy_file(&opts.output, &artifact.file, &canonical) {
            Ok(()) => {
                artifact.canonical = Some(canonical.clone());
                report.copies.push(canonical);
            }
            Err(error) => report.failed.push(Failure::new(canonical, error)),
        }
    }
}

/// Point the `current-*` files at one archetype's early canonical files.
fn update_current(current: Archetype, opts: &GenerateOptions, report: &mut GenerationReport) {
    let id = current.id();
    for kind in [ArtifactKind::Idle, ArtifactKind::Action, ArtifactKind::Static] {
        let target = current_name(kind);
        let source = report
            .written
            .iter()
            .find(|a| a.archetype == id && a.kind == kind && a.variant == Variant::Early)
            .and_then(|a| a.canonical.clone());

        match source {
            Some(source) => match copy_file(&opts.output, &source, target) {
                Ok(()) => report.copies.push(target.to_string()),
                Err(error) => report.failed.push(Failure::new(target, error)),
            },
            None if kind == ArtifactKind::Action
                && current.animations(Variant::Early).action.is_none() =>
            {
                // a previous current archetype may have left one behind
                let stale = opts.output.join(target);
                match fs::remove_file(&stale) {
                    Ok(()) => debug!(file = target, "removed stale current action"),
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => report
                        .failed
                        .push(Failure::new(target, AvatarError::io(&stale, e))),
                }
            }
            // the unit failed and is already reported
            None => {}
        }
    }
}

/// Idle keyframes of all six tiers side by side.
fn write_sheet(canvas: Canvas, size: u32, path: &Path) -> Result<()> {
    let mut cells = Vec::with_capacity(Tier::ALL.len());
    for tier in Tier::ALL {
        let archetype = Archetype::Tier(tier);
        let sprite = archetype.sprite();
        let keyframe = archetype.animations(Variant::Early).idle.frame(&sprite, 0);
        cells.push((archetype.id(), render_at(&keyframe, &canvas, size)?));
    }
    let (sheet, _) = SheetPacker::new(SHEET_GAP, canvas.background).pack(&cells);
    write_png(&sheet, path)
}
