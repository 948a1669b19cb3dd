use approx::assert_abs_diff_eq;
use client_core::controller::{ControllerInput, ControllerParams, PlayerController};
use collision_terrain::{FlatGround, NoTerrain};
use glam::Vec3;

#[test]
fn idle_on_flat_ground_stays_put() {
    let ground = FlatGround::new(0.0);
    let mut pc = PlayerController::new(ControllerParams::default(), Vec3::new(0.0, 0.5, 0.0));
    let mut ev = Vec::new();
    for _ in 0..600 {
        pc.update(&ControllerInput::default(), &ground, 0.016, &mut ev);
        assert!(pc.grounded());
        assert_abs_diff_eq!(pc.position.current.y, 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(pc.velocity_y(), 0.0);
        assert!(pc.speed < 1e-5);
    }
    assert!(ev.is_empty());
}

#[test]
fn unloaded_terrain_falls_back_to_zero_plane() {
    let mut pc = PlayerController::new(ControllerParams::default(), Vec3::new(10.0, 0.0, 1.0));
    let mut ev = Vec::new();
    pc.update(&ControllerInput::default(), &NoTerrain, 0.016, &mut ev);
    assert!(pc.grounded());
    assert_abs_diff_eq!(pc.position.current.y, 0.5);
}

#[test]
fn variable_frame_times_keep_rest_height() {
    let ground = FlatGround::new(2.0);
    let mut pc = PlayerController::new(ControllerParams::default(), Vec3::new(0.0, 2.5, 0.0));
    let mut ev = Vec::new();
    for dt in [0.004, 0.016, 0.033, 0.1, 0.008] {
        pc.update(&ControllerInput::default(), &ground, dt, &mut ev);
        assert!(pc.grounded());
        assert_abs_diff_eq!(pc.position.current.y, 2.5, epsilon = 1e-5);
    }
}
