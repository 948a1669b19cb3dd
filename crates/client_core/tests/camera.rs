use approx::assert_abs_diff_eq;
use client_core::input::Viewport;
use client_core::session::{Session, SessionParams};
use collision_terrain::{FlatGround, HeightField, TerrainQuery};
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn session_on<T: TerrainQuery>(terrain: T, spawn: Vec3) -> Session<T> {
    let params = SessionParams {
        spawn,
        ..Default::default()
    };
    Session::new(terrain, &params)
}

#[test]
fn phi_stays_within_limits_under_random_look() {
    let mut s = session_on(FlatGround::new(0.0), Vec3::new(0.0, 0.5, 0.0));
    s.set_pointer_lock(true);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let limits = s.camera().phi_limits;
    for _ in 0..2000 {
        s.pointer_move(rng.random_range(-400.0..400.0), rng.random_range(-400.0..400.0));
        s.tick(rng.random_range(0.004..0.1));
        let phi = s.camera().phi;
        assert!(phi >= limits.min && phi <= limits.max, "phi {phi}");
    }
}

#[test]
fn look_delta_is_smoothed_normalised_and_frame_scaled() {
    let params = SessionParams {
        spawn: Vec3::new(0.0, 0.5, 0.0),
        viewport: Viewport {
            width: 1000.0,
            height: 500.0,
        },
        ..Default::default()
    };
    let mut s = Session::new(FlatGround::new(0.0), &params);
    s.set_pointer_lock(true);
    let theta0 = s.camera().theta;
    s.pointer_move(50.0, 0.0);
    s.tick(0.016);
    // 50 px * 0.2 smoothing / 500 px * 1.6 sensitivity * 0.016 s * 60
    let expected = -(50.0 * 0.2 / 500.0) * 1.6 * 0.016 * 60.0;
    assert_abs_diff_eq!(s.camera().theta - theta0, expected, epsilon = 1e-5);
}

#[test]
fn pointer_is_ignored_without_lock() {
    let mut s = session_on(FlatGround::new(0.0), Vec3::new(0.0, 0.5, 0.0));
    let (theta, phi) = (s.camera().theta, s.camera().phi);
    s.pointer_move(300.0, 300.0);
    s.tick(0.016);
    assert_abs_diff_eq!(s.camera().theta, theta);
    assert_abs_diff_eq!(s.camera().phi, phi);
}

#[test]
fn eye_clears_rolling_terrain() {
    let hf = HeightField::generate(65, 200.0, 9, 8.0).expect("terrain");
    let ground = hf.elevation_at(0.0, 0.0).expect("inside terrain");
    let mut s = session_on(hf, Vec3::new(0.0, ground + 0.5, 0.0));
    s.set_pointer_lock(true);
    for i in 0..240 {
        // Sweep around and down so the eye dips toward the terrain.
        s.pointer_move(60.0, if i % 2 == 0 { -80.0 } else { 40.0 });
        s.tick(0.016);
        let eye = s.state().camera_pose().eye;
        if let Some(e) = s.terrain().elevation_at(eye.x, eye.z) {
            assert!(eye.y >= e + 1.0 - 1e-4, "eye {eye} under terrain {e}");
        }
    }
}

#[test]
fn walking_follows_camera_azimuth() {
    let mut s = session_on(FlatGround::new(0.0), Vec3::new(0.0, 0.5, 0.0));
    s.camera_mut().theta = 0.0;
    s.handle_key("KeyW", true);
    s.tick(0.016);
    let d = s.state().player().delta;
    assert!(d.z < -0.1 && d.x.abs() < 1e-5, "theta 0 walks toward -z: {d}");

    s.camera_mut().theta = std::f32::consts::FRAC_PI_2;
    s.tick(0.016);
    let d = s.state().player().delta;
    assert!(d.x < -0.1 && d.z.abs() < 1e-5, "theta π/2 walks toward -x: {d}");
}

#[test]
fn camera_targets_above_player() {
    let mut s = session_on(FlatGround::new(0.0), Vec3::new(3.0, 0.5, -2.0));
    s.tick(0.016);
    let pose = s.state().camera_pose();
    assert_eq!(pose.target, s.state().player().position + Vec3::Y * 2.0);
    let forward = pose.orientation * Vec3::NEG_Z;
    assert_abs_diff_eq!(forward.dot((pose.target - pose.eye).normalize()), 1.0, epsilon = 1e-4);
}
