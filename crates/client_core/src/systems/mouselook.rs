//! Mouselook integration helper for the orbit camera angles.

/// Reference frame rate the look sensitivity is tuned against.
pub const LOOK_REFERENCE_HZ: f32 = 60.0;

/// Polar-angle bounds (radians from +Y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhiLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for PhiLimits {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: std::f32::consts::PI - 0.1,
        }
    }
}

impl PhiLimits {
    #[must_use]
    pub fn clamp(&self, phi: f32) -> f32 {
        phi.max(self.min).min(self.max)
    }
}

/// Apply a normalised look delta to `(theta, phi)`.
///
/// The `dt * 60` factor keeps turn rate independent of frame rate.
pub fn apply_look_delta(
    theta: &mut f32,
    phi: &mut f32,
    look: glam::Vec2,
    sensitivity: f32,
    limits: PhiLimits,
    dt: f32,
) {
    let k = sensitivity * dt * LOOK_REFERENCE_HZ;
    *theta -= look.x * k;
    *phi -= look.y * k;
    *phi = limits.clamp(*phi);
}
