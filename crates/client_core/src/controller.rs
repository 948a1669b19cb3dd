//! Kinematic capsule controller over a heightfield.
//!
//! One `update` per frame with wall-clock `dt`:
//! 1. camera-relative heading + substepped horizontal move, each substep
//!    followed by ground snap and a footprint penetration clamp
//! 2. jump (held + grounded)
//! 3. air-time-scaled gravity, vertical integration
//! 4. penetration clamp + ground check on the footprint, landing edge detection
//! 5. position delta/speed export
//!
//! The capsule is approximated by its bottom point (`y - half_height`) and a
//! nine-point footprint of `capsule_radius` for terrain sampling.

use crate::facade::controller::{CameraMode, PlayerSnapshot};
use crate::input::KeysDown;
use crate::systems::move_intent::{displacement_xz, heading_offset};
use collision_terrain::{TerrainQuery, max_footprint_elevation};
use glam::Vec3;
use tracing::debug;

/// Fall speed that maps to full landing impact.
pub const FULL_IMPACT_FALL_SPEED: f32 = 15.0;

/// Impact strength in `[0, 1]` for a landing at `fall_speed` (m/s).
#[must_use]
pub fn impact_strength(fall_speed: f32) -> f32 {
    (fall_speed / FULL_IMPACT_FALL_SPEED).min(1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerParams {
    pub input_speed: f32,
    pub input_boost_speed: f32,
    pub jump_power: f32,
    /// Gravity while grounded / at take-off (negative).
    pub base_gravity: f32,
    /// Floor on gravity after long falls (negative, more negative than base).
    pub max_gravity: f32,
    /// How fast gravity grows per second of air time.
    pub gravity_acceleration: f32,
    pub ground_check_distance: f32,
    pub capsule_half_height: f32,
    pub capsule_radius: f32,
    pub horizontal_substep: f32,
    pub max_step_up: f32,
    pub step_down_tolerance: f32,
}

impl Default for ControllerParams {
    fn default() -> Self {
        Self {
            input_speed: 10.0,
            input_boost_speed: 30.0,
            jump_power: 15.0,
            base_gravity: -30.0,
            max_gravity: -120.0,
            gravity_acceleration: 1.5,
            ground_check_distance: 0.1,
            capsule_half_height: 0.5,
            capsule_radius: 0.35,
            horizontal_substep: 0.25,
            max_step_up: 0.45,
            step_down_tolerance: 0.2,
        }
    }
}

impl From<&data_runtime::configs::player_controller::PlayerControllerCfg> for ControllerParams {
    fn from(c: &data_runtime::configs::player_controller::PlayerControllerCfg) -> Self {
        let d = Self::default();
        Self {
            input_speed: c.input_speed.unwrap_or(d.input_speed),
            input_boost_speed: c.input_boost_speed.unwrap_or(d.input_boost_speed),
            jump_power: c.jump_power.unwrap_or(d.jump_power),
            base_gravity: c.base_gravity.unwrap_or(d.base_gravity),
            max_gravity: c.max_gravity.unwrap_or(d.max_gravity),
            gravity_acceleration: c.gravity_acceleration.unwrap_or(d.gravity_acceleration),
            ground_check_distance: c.ground_check_distance.unwrap_or(d.ground_check_distance),
            capsule_half_height: c.capsule_half_height.unwrap_or(d.capsule_half_height),
            capsule_radius: c.capsule_radius.unwrap_or(d.capsule_radius),
            horizontal_substep: c.horizontal_substep.unwrap_or(d.horizontal_substep),
            max_step_up: c.max_step_up.unwrap_or(d.max_step_up),
            step_down_tolerance: c.step_down_tolerance.unwrap_or(d.step_down_tolerance),
        }
    }
}

/// Current, previous and per-tick delta position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionTrack {
    pub current: Vec3,
    pub previous: Vec3,
    pub delta: Vec3,
}

impl PositionTrack {
    #[must_use]
    pub fn at(p: Vec3) -> Self {
        Self {
            current: p,
            previous: p,
            delta: Vec3::ZERO,
        }
    }
}

/// Discrete signals for cosmetic collaborators. They carry no position; the
/// consumer reads the controller's current position when spawning effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerEvent {
    Jump,
    /// Grounded went false → true this tick. `fall_speed` is |v.y| sampled
    /// right before ground resolution.
    Landing { fall_speed: f32 },
}

/// What the controller reads from the rest of the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerInput {
    pub keys: KeysDown,
    /// Orbit camera azimuth; movement headings are relative to it.
    pub camera_theta: f32,
    pub mode: CameraMode,
}

#[derive(Clone, Debug)]
pub struct PlayerController {
    pub position: PositionTrack,
    /// Yaw (radians).
    pub rotation: f32,
    /// |position delta| of the last tick.
    pub speed: f32,
    params: ControllerParams,
    velocity_y: f32,
    grounded: bool,
    was_grounded: bool,
    air_time: f32,
    gravity: f32,
}

impl PlayerController {
    /// New controller at `spawn`, airborne until the first ground check.
    #[must_use]
    pub fn new(params: ControllerParams, spawn: Vec3) -> Self {
        Self {
            position: PositionTrack::at(spawn),
            rotation: 0.0,
            speed: 0.0,
            params,
            velocity_y: 0.0,
            grounded: false,
            was_grounded: true,
            air_time: 0.0,
            gravity: params.base_gravity,
        }
    }

    #[must_use]
    pub fn params(&self) -> &ControllerParams {
        &self.params
    }
    #[must_use]
    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }
    #[must_use]
    pub fn grounded(&self) -> bool {
        self.grounded
    }
    #[must_use]
    pub fn air_time(&self) -> f32 {
        self.air_time
    }
    #[must_use]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Bottom of the capsule.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.current.y - self.params.capsule_half_height
    }

    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.position.current,
            previous: self.position.previous,
            delta: self.position.delta,
            rotation: self.rotation,
            speed: self.speed,
            grounded: self.grounded,
        }
    }

    /// Advance one frame.
    pub fn update<T: TerrainQuery + ?Sized>(
        &mut self,
        input: &ControllerInput,
        terrain: &T,
        dt: f32,
        out: &mut Vec<ControllerEvent>,
    ) {
        if input.mode.allows_walking()
            && let Some(offset) = heading_offset(&input.keys)
        {
            self.rotation = input.camera_theta + offset;
            let speed = if input.keys.boost {
                self.params.input_boost_speed
            } else {
                self.params.input_speed
            };
            self.move_horizontal(speed * dt, terrain);
        }

        self.handle_jump(&input.keys, out);
        self.integrate_gravity(dt);

        let velocity_before_ground_check = self.velocity_y;
        self.clamp_terrain_penetration(terrain);
        self.check_ground(terrain);

        if self.grounded && !self.was_grounded {
            let fall_speed = velocity_before_ground_check.abs();
            debug!(target: "controller", fall_speed, "landing");
            out.push(ControllerEvent::Landing { fall_speed });
        }
        self.was_grounded = self.grounded;

        self.position.delta = self.position.current - self.position.previous;
        self.position.previous = self.position.current;
        self.speed = self.position.delta.length();
    }

    /// Number of substeps for a horizontal displacement of `(dx, dz)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn substep_count(&self, dx: f32, dz: f32) -> u32 {
        let substep = self.params.horizontal_substep;
        if substep <= 0.0 {
            return 1;
        }
        let n = (dx.abs().max(dz.abs()) / substep).ceil();
        (n as u32).max(1)
    }

    fn move_horizontal<T: TerrainQuery + ?Sized>(&mut self, distance: f32, terrain: &T) {
        let d = displacement_xz(self.rotation, distance);
        let steps = self.substep_count(d.x, d.y);
        #[allow(clippy::cast_precision_loss)]
        let step = d / steps as f32;
        for _ in 0..steps {
            self.position.current.x += step.x;
            self.position.current.z += step.y;
            self.snap_to_ground_during_move(terrain);
            self.clamp_terrain_penetration(terrain);
        }
    }

    /// Start a jump if held while grounded. Repeats on landing while held.
    pub fn handle_jump(&mut self, keys: &KeysDown, out: &mut Vec<ControllerEvent>) {
        if keys.jump && self.grounded {
            self.velocity_y = self.params.jump_power;
            self.grounded = false;
            debug!(target: "controller", velocity_y = self.velocity_y, "jump");
            out.push(ControllerEvent::Jump);
        }
    }

    fn integrate_gravity(&mut self, dt: f32) {
        let p = &self.params;
        if self.grounded {
            self.air_time = 0.0;
            self.gravity = p.base_gravity;
        } else {
            self.air_time += dt;
            self.gravity = p
                .max_gravity
                .max(p.base_gravity - self.air_time * p.gravity_acceleration);
        }
        self.velocity_y += self.gravity * dt;
        self.position.current.y += self.velocity_y * dt;
    }

    /// Stair adhesion while walking: snap up by at most `max_step_up`, or down
    /// by at most `step_down_tolerance`, only when not moving upward.
    pub fn snap_to_ground_during_move<T: TerrainQuery + ?Sized>(&mut self, terrain: &T) {
        let cur = self.position.current;
        let Some(elevation) = terrain.elevation_at(cur.x, cur.z) else {
            return;
        };
        if self.velocity_y > 0.0 {
            return;
        }
        let delta = elevation - self.bottom();
        let step_up = delta > 0.0 && delta <= self.params.max_step_up;
        let step_down = delta < 0.0 && delta >= -self.params.step_down_tolerance;
        if step_up || step_down {
            self.position.current.y += delta;
            self.grounded = true;
            self.velocity_y = 0.0;
        }
    }

    /// Push the capsule up so its bottom is not below the highest footprint sample.
    /// No-op when no footprint point has terrain.
    pub fn clamp_terrain_penetration<T: TerrainQuery + ?Sized>(&mut self, terrain: &T) {
        let cur = self.position.current;
        let Some(max_elevation) =
            max_footprint_elevation(terrain, cur.x, cur.z, self.params.capsule_radius)
        else {
            return;
        };
        let penetration = max_elevation - self.bottom();
        if penetration > 0.0 {
            self.position.current.y += penetration;
            if self.velocity_y < 0.0 {
                self.velocity_y = 0.0;
            }
            self.grounded = true;
        }
    }

    /// Final ground contact against the highest footprint sample, so a capsule
    /// the clamp just rested on a ledge stays grounded while its center is still
    /// over lower ground. A flat plane at y = 0 stands in when no footprint
    /// sample has terrain.
    pub fn check_ground<T: TerrainQuery + ?Sized>(&mut self, terrain: &T) {
        let cur = self.position.current;
        let ground = max_footprint_elevation(terrain, cur.x, cur.z, self.params.capsule_radius)
            .unwrap_or(0.0);
        if self.bottom() <= ground + self.params.ground_check_distance && self.velocity_y <= 0.0 {
            self.position.current.y = ground + self.params.capsule_half_height;
            self.velocity_y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}
