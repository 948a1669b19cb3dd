//! Player controller tuning loaded from data/config/player_controller.toml.
//!
//! Every field is optional so a partial file only overrides what it names;
//! `client_core` fills the rest from its own defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerControllerCfg {
    pub input_speed: Option<f32>,
    pub input_boost_speed: Option<f32>,
    pub jump_power: Option<f32>,
    pub base_gravity: Option<f32>,
    pub max_gravity: Option<f32>,
    pub gravity_acceleration: Option<f32>,
    pub ground_check_distance: Option<f32>,
    pub capsule_half_height: Option<f32>,
    pub capsule_radius: Option<f32>,
    pub horizontal_substep: Option<f32>,
    pub max_step_up: Option<f32>,
    pub step_down_tolerance: Option<f32>,
    /// Spawn position `[x, y, z]`.
    pub spawn: Option<[f32; 3]>,
}

impl Default for PlayerControllerCfg {
    fn default() -> Self {
        Self {
            input_speed: Some(10.0),
            input_boost_speed: Some(30.0),
            jump_power: Some(15.0),
            base_gravity: Some(-30.0),
            max_gravity: Some(-120.0),
            gravity_acceleration: Some(1.5),
            ground_check_distance: Some(0.1),
            capsule_half_height: Some(0.5),
            capsule_radius: Some(0.35),
            horizontal_substep: Some(0.25),
            max_step_up: Some(0.45),
            step_down_tolerance: Some(0.2),
            spawn: Some([10.0, 0.0, 1.0]),
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Parse a controller config file; a missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<PlayerControllerCfg> {
    if !path.is_file() {
        return Ok(PlayerControllerCfg::default());
    }
    let txt = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str::<PlayerControllerCfg>(&txt).context("parse player_controller TOML")
}

pub fn load_default() -> Result<PlayerControllerCfg> {
    let mut cfg = load_from(&data_root().join("config/player_controller.toml"))?;
    // Env overrides for quick tuning (optional)
    if let Some(v) = std::env::var("PC_SPEED").ok().and_then(|v| v.parse().ok()) {
        cfg.input_speed = Some(v);
    }
    if let Some(v) = std::env::var("PC_BOOST_SPEED").ok().and_then(|v| v.parse().ok()) {
        cfg.input_boost_speed = Some(v);
    }
    if let Some(v) = std::env::var("PC_JUMP_POWER").ok().and_then(|v| v.parse().ok()) {
        cfg.jump_power = Some(v);
    }
    Ok(cfg)
}
