//! Third-person orbit camera.
//!
//! Spherical placement around the player (`phi` from +Y, `theta` azimuth),
//! aimed at a point `above_offset` over the player, and kept at least one
//! meter above the terrain under the eye.

use super::mouselook::{PhiLimits, apply_look_delta};
use crate::facade::controller::CameraPose;
use collision_terrain::TerrainQuery;
use glam::{Mat3, Quat, Vec2, Vec3};

/// Minimum clearance between the eye and the terrain below it.
pub const GROUND_CLEARANCE: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCameraCfg {
    pub distance: f32,
    pub phi: f32,
    pub theta: f32,
    pub above_offset: f32,
    pub phi_limits: PhiLimits,
    pub sensitivity: f32,
}

impl Default for OrbitCameraCfg {
    fn default() -> Self {
        use std::f32::consts::PI;
        Self {
            distance: 15.0,
            phi: PI * 0.45,
            theta: -PI * 0.25,
            above_offset: 2.0,
            phi_limits: PhiLimits::default(),
            sensitivity: 1.6,
        }
    }
}

impl From<&data_runtime::configs::input_camera::InputCameraCfg> for OrbitCameraCfg {
    fn from(c: &data_runtime::configs::input_camera::InputCameraCfg) -> Self {
        let d = Self::default();
        Self {
            distance: c.distance.unwrap_or(d.distance),
            phi: c.phi.unwrap_or(d.phi),
            theta: c.theta.unwrap_or(d.theta),
            above_offset: c.above_offset.unwrap_or(d.above_offset),
            phi_limits: PhiLimits {
                min: c.phi_min.unwrap_or(d.phi_limits.min),
                max: c.phi_max.unwrap_or(d.phi_limits.max),
            },
            sensitivity: c.sensitivity.unwrap_or(d.sensitivity),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    active: bool,
    pub theta: f32,
    pub phi: f32,
    pub distance: f32,
    pub above_offset: f32,
    pub phi_limits: PhiLimits,
    pub sensitivity: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub orientation: Quat,
    pub up: Vec3,
}

impl OrbitCamera {
    /// Starts inactive; the session activates it when third person is selected.
    #[must_use]
    pub fn new(cfg: &OrbitCameraCfg) -> Self {
        Self {
            active: false,
            theta: cfg.theta,
            phi: cfg.phi_limits.clamp(cfg.phi),
            distance: cfg.distance,
            above_offset: cfg.above_offset,
            phi_limits: cfg.phi_limits,
            sensitivity: cfg.sensitivity,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset of the eye from the player for the current angles.
    #[must_use]
    pub fn spherical_offset(&self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.distance;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.distance,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Recompute the pose. `look` is the normalised pointer delta while
    /// continuous look is engaged. Does nothing while inactive.
    pub fn update<T: TerrainQuery + ?Sized>(
        &mut self,
        player: Vec3,
        look: Option<Vec2>,
        terrain: &T,
        dt: f32,
    ) {
        if !self.active {
            return;
        }
        if let Some(look) = look {
            apply_look_delta(
                &mut self.theta,
                &mut self.phi,
                look,
                self.sensitivity,
                self.phi_limits,
                dt,
            );
        }

        self.position = player + self.spherical_offset();
        self.target = player + Vec3::Y * self.above_offset;
        if let Some(q) = target_to(self.position, self.target, self.up) {
            self.orientation = q;
        }

        if let Some(elevation) = terrain.elevation_at(self.position.x, self.position.z) {
            let floor = elevation + GROUND_CLEARANCE;
            if self.position.y < floor {
                self.position.y = floor;
            }
        }
    }

    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.position,
            target: self.target,
            orientation: self.orientation,
            up: self.up,
        }
    }
}

/// Rotation whose −Z axis points from `eye` to `target` with `up` as the
/// reference up. `None` when the basis is degenerate.
#[must_use]
pub fn target_to(eye: Vec3, target: Vec3, up: Vec3) -> Option<Quat> {
    let z = (eye - target).try_normalize()?;
    let x = up.cross(z).try_normalize()?;
    let y = z.cross(x);
    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)))
}
