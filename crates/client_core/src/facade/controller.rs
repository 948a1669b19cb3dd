//! Read-only controller façade consumed by the renderer and audio host.

use glam::{Quat, Vec3};

/// Which camera drives the view. Only one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Orbit camera around the player; player walks relative to it.
    #[default]
    ThirdPerson,
    /// Free-flying camera; the player keeps falling/grounding but never walks.
    Fly,
}

impl CameraMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::ThirdPerson => Self::Fly,
            Self::Fly => Self::ThirdPerson,
        }
    }

    /// Horizontal movement and camera-relative yaw are only allowed in third person.
    #[must_use]
    pub fn allows_walking(self) -> bool {
        matches!(self, Self::ThirdPerson)
    }
}

/// Camera pose for view-matrix construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    /// Rotation taking camera-local −Z onto the eye→target direction.
    pub orientation: Quat,
    pub up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
        }
    }
}

/// Player state exported once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSnapshot {
    pub position: Vec3,
    pub previous: Vec3,
    pub delta: Vec3,
    /// Yaw (radians).
    pub rotation: f32,
    /// Distance moved during the last tick.
    pub speed: f32,
    pub grounded: bool,
}

#[derive(Default, Clone, Debug)]
pub struct ControllerState {
    pub mode: CameraMode,
    pub camera: CameraPose,
    pub player: PlayerSnapshot,
}

impl ControllerState {
    #[inline]
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        self.camera
    }
    #[inline]
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }
    #[inline]
    #[must_use]
    pub fn player(&self) -> PlayerSnapshot {
        self.player
    }
}
