//! manifest.json: a deterministic listing of everything a run wrote.

use std::path::Path;

use serde::Serialize;

use crate::error::{AvatarError, Result};

use super::Artifact;

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub generator: &'static str,
    pub version: &'static str,
    pub background: String,
    pub default_size: u32,
    pub artifacts: &'a [Artifact],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<&'static str>,
}

impl Manifest<'_> {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AvatarError::encoding(format!("manifest: {e}")))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json + "\n").map_err(|e| AvatarError::io(path, e))
    }
}
