//! Client-side systems for input/controller and camera.
//!
//! Hosts lightweight, testable logic used by the session and the renderer host.

pub mod audio_cues;
pub mod camera;
pub mod cursor;
pub mod effects;
pub mod mouselook;
pub mod move_intent;
