//! Client glue: input state, a kinematic capsule controller, and an orbit camera.
//!
//! The per-frame order lives in `session`: input sampling → controller →
//! camera → cosmetic layers. Terrain is injected as a `TerrainQuery`; nothing
//! here reaches for global state.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::trivially_copy_pass_by_ref
)]

/// Keyboard/pointer state sampled once per frame.
pub mod input;

/// Kinematic capsule controller (movement, jump, gravity, ground contact).
pub mod controller;

/// Frame driver wiring input, controller, camera and cosmetic layers together.
pub mod session;

/// Client-side systems: camera, mouselook, heading, cosmetic effects and cues.
pub mod systems;

pub mod facade {
    pub mod controller;
}

pub mod telemetry;

pub use collision_terrain::TerrainQuery;
