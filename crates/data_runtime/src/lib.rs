//! data_runtime: tuning configs and terrain snapshot I/O.
//!
//! Kept free of simulation types; `client_core` and the tools convert these
//! plain structs into their own tuning/terrain types.

pub mod terrain;
pub mod configs {
    pub mod input_camera;
    pub mod player_controller;
    pub mod telemetry;
}
