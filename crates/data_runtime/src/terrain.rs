//! Heightfield snapshot I/O (JSON).
//!
//! A snapshot is a square grid of elevations in row-major order covering
//! `[-extent, extent]²`. Building the queryable terrain from it is the
//! caller's job; this module only reads, validates the shape, and writes.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightFieldSnapshot {
    pub size: usize,
    pub extent: f32,
    pub heights: Vec<f32>,
}

pub fn load_heightfield_snapshot(path: &Path) -> Result<HeightFieldSnapshot> {
    let txt = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let snap: HeightFieldSnapshot =
        serde_json::from_str(&txt).with_context(|| format!("parse {}", path.display()))?;
    if snap.size.checked_mul(snap.size) != Some(snap.heights.len()) {
        log::warn!(
            "terrain snapshot has mismatched heights ({} != {}x{})",
            snap.heights.len(),
            snap.size,
            snap.size
        );
        bail!("terrain snapshot {} has mismatched heights", path.display());
    }
    Ok(snap)
}

pub fn save_heightfield_snapshot(path: &Path, snap: &HeightFieldSnapshot) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let txt = serde_json::to_string(snap).context("serialize terrain snapshot")?;
    fs::write(path, txt).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
