//! Input/camera controller configuration loaded from data/config/input_camera.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputCameraCfg {
    /// Look sensitivity applied to the normalised pointer delta.
    pub sensitivity: Option<f32>,
    pub distance: Option<f32>,
    /// Initial polar angle from +Y (radians).
    pub phi: Option<f32>,
    /// Initial azimuth (radians).
    pub theta: Option<f32>,
    pub above_offset: Option<f32>,
    pub phi_min: Option<f32>,
    pub phi_max: Option<f32>,
    /// Exponential smoothing factor for pointer deltas (higher follows input more closely).
    pub pointer_smoothing: Option<f32>,
    /// Per-frame clamp on raw pointer movement (pixels).
    pub pointer_max_delta: Option<f32>,
}

impl Default for InputCameraCfg {
    fn default() -> Self {
        use std::f32::consts::PI;
        Self {
            sensitivity: Some(1.6),
            distance: Some(15.0),
            phi: Some(PI * 0.45),
            theta: Some(-PI * 0.25),
            above_offset: Some(2.0),
            phi_min: Some(0.1),
            phi_max: Some(PI - 0.1),
            pointer_smoothing: Some(0.2),
            pointer_max_delta: Some(80.0),
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

pub fn load_from(path: &Path) -> Result<InputCameraCfg> {
    if !path.is_file() {
        return Ok(InputCameraCfg::default());
    }
    let txt = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str::<InputCameraCfg>(&txt).context("parse input_camera TOML")
}

pub fn load_default() -> Result<InputCameraCfg> {
    let mut cfg = load_from(&data_root().join("config/input_camera.toml"))?;
    // Env overrides for quick tuning (optional)
    if let Some(v) = std::env::var("CAM_SENSITIVITY").ok().and_then(|v| v.parse().ok()) {
        cfg.sensitivity = Some(v);
    }
    if let Some(v) = std::env::var("CAM_DISTANCE").ok().and_then(|v| v.parse().ok()) {
        cfg.distance = Some(v);
    }
    Ok(cfg)
}
