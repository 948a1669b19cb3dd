use approx::assert_abs_diff_eq;
use client_core::controller::{ControllerInput, ControllerParams, PlayerController};
use collision_terrain::FlatGround;
use glam::Vec3;

const DT: f32 = 0.016;

/// Closed loop of the air-time-scaled gravity rule.
fn reference_fall(y0: f32, ticks: usize, growing: bool) -> f32 {
    let (mut y, mut v, mut air) = (y0, 0.0f32, 0.0f32);
    for _ in 0..ticks {
        air += DT;
        let g = if growing {
            (-30.0 - air * 1.5).max(-120.0)
        } else {
            -30.0
        };
        v += g * DT;
        y += v * DT;
    }
    y
}

#[test]
fn fall_matches_growing_gravity_and_not_constant_gravity() {
    let far_below = FlatGround::new(-100.0);
    let mut pc = PlayerController::new(ControllerParams::default(), Vec3::new(0.0, 5.0, 0.0));
    let mut ev = Vec::new();
    for _ in 0..62 {
        pc.update(&ControllerInput::default(), &far_below, DT, &mut ev);
    }
    assert!(ev.is_empty());
    assert!(!pc.grounded());
    let y = pc.position.current.y;
    assert_abs_diff_eq!(y, reference_fall(5.0, 62, true), epsilon = 1e-3);
    let constant = reference_fall(5.0, 62, false);
    assert!((y - constant).abs() > 0.1, "y {y} vs constant {constant}");
}

#[test]
fn gravity_grows_monotonically_to_its_floor() {
    let abyss = FlatGround::new(-1.0e7);
    let mut pc = PlayerController::new(ControllerParams::default(), Vec3::new(0.0, 5.0, 0.0));
    let mut ev = Vec::new();
    let mut prev = pc.gravity();
    for _ in 0..(70.0 / 0.05) as usize {
        pc.update(&ControllerInput::default(), &abyss, 0.05, &mut ev);
        let g = pc.gravity();
        assert!(g <= prev, "gravity weakened: {g} > {prev}");
        assert!(g >= -120.0);
        prev = g;
    }
    assert_abs_diff_eq!(pc.gravity(), -120.0);
}

#[test]
fn grounded_resets_air_time_and_gravity() {
    let ground = FlatGround::new(0.0);
    let mut pc = PlayerController::new(ControllerParams::default(), Vec3::new(0.0, 3.0, 0.0));
    let mut ev = Vec::new();
    for _ in 0..120 {
        pc.update(&ControllerInput::default(), &ground, DT, &mut ev);
    }
    assert!(pc.grounded());
    pc.update(&ControllerInput::default(), &ground, DT, &mut ev);
    assert_abs_diff_eq!(pc.air_time(), 0.0);
    assert_abs_diff_eq!(pc.gravity(), -30.0);
    assert_abs_diff_eq!(pc.velocity_y(), 0.0);
}
