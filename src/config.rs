//! Generator configuration (pxavatar.yaml).
//!
//! Every field is optional. CLI flags override whatever the file sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::Variant;
use crate::error::{AvatarError, Result};
use crate::render::BACKGROUND;
use crate::types::Colour;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "pxavatar.yaml";

/// Size whose artifacts also get unsuffixed canonical copies.
pub const DEFAULT_SIZE: u32 = 128;

/// Which animation variants to generate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum VariantChoice {
    #[default]
    Early,
    Advanced,
    Both,
}

impl VariantChoice {
    pub fn variants(self) -> Vec<Variant> {
        match self {
            VariantChoice::Early => vec![Variant::Early],
            VariantChoice::Advanced => vec![Variant::Advanced],
            VariantChoice::Both => vec![Variant::Early, Variant::Advanced],
        }
    }
}

/// Generator configuration loaded from pxavatar.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory for generated assets.
    pub output: PathBuf,

    /// Square output sizes in pixels (multiples of 32).
    pub sizes: Vec<u32>,

    /// Size used for canonical and current copies.
    pub default_size: u32,

    /// Canvas background as a hex colour.
    pub background: Option<String>,

    /// Worker threads; `None` lets rayon decide.
    pub threads: Option<usize>,

    pub variant: VariantChoice,

    /// Archetype selectors; empty means every archetype.
    pub archetypes: Vec<String>,

    /// Archetype to copy to the `current-*` files.
    pub current: Option<String>,

    /// Also write the tier idle sprite sheet.
    pub sheet: bool,

    /// Also write manifest.json.
    pub manifest: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("avatars")
}

fn default_sizes() -> Vec<u32> {
    vec![64, 128, 256, 512]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            sizes: default_sizes(),
            default_size: DEFAULT_SIZE,
            background: None,
            threads: None,
            variant: VariantChoice::default(),
            archetypes: vec![],
            current: None,
            sheet: false,
            manifest: false,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `pxavatar.yaml` in `dir` when present,
    /// else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AvatarError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }

    /// The parsed background colour.
    pub fn background_colour(&self) -> Result<Colour> {
        match &self.background {
            None => Ok(BACKGROUND),
            Some(hex) => hex.parse::<Colour>().map_err(|_| AvatarError::Config {
                message: format!("Invalid background colour: {}", hex),
                help: Some("Use #RGB or #RRGGBB".to_string()),
            }),
        }
    }
}
