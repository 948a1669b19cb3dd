use approx::assert_abs_diff_eq;
use client_core::controller::{ControllerEvent, ControllerInput, ControllerParams, PlayerController};
use client_core::session::{Session, SessionParams};
use collision_terrain::FlatGround;
use glam::Vec3;

fn landings(ev: &[ControllerEvent]) -> Vec<f32> {
    ev.iter()
        .filter_map(|e| match e {
            ControllerEvent::Landing { fall_speed } => Some(*fall_speed),
            ControllerEvent::Jump => None,
        })
        .collect()
}

#[test]
fn drop_lands_exactly_once() {
    let ground = FlatGround::new(0.0);
    let mut pc = PlayerController::new(ControllerParams::default(), Vec3::new(0.0, 5.0, 0.0));
    let mut ev = Vec::new();
    for _ in 0..300 {
        pc.update(&ControllerInput::default(), &ground, 0.016, &mut ev);
    }
    let l = landings(&ev);
    assert_eq!(l.len(), 1, "{ev:?}");
    // ~4.5 m drop under 30..31 m/s² gravity.
    assert!((15.0..19.0).contains(&l[0]), "fall speed {}", l[0]);
    assert!(pc.grounded());
    assert_abs_diff_eq!(pc.position.current.y, 0.5);
}

#[test]
fn hard_landing_spawns_dust_and_soft_one_does_not() {
    let params = SessionParams {
        spawn: Vec3::new(0.0, 5.0, 0.0),
        ..Default::default()
    };
    let mut hard = Session::new(FlatGround::new(0.0), &params);
    let mut events = Vec::new();
    let mut dust_on_landing = false;
    for _ in 0..120 {
        let out = hard.tick(0.016);
        if !landings(&out.events).is_empty() {
            dust_on_landing = hard.effects().landing.len() == 1;
        }
        events.extend(out.events);
    }
    assert_eq!(landings(&events).len(), 1);
    assert!(dust_on_landing);

    // Spawned just above contact range: the second 8 ms tick lands at ~0.48 m/s.
    let params = SessionParams {
        spawn: Vec3::new(0.0, 0.60392, 0.0),
        ..Default::default()
    };
    let mut soft = Session::new(FlatGround::new(0.0), &params);
    let mut events = Vec::new();
    for _ in 0..10 {
        events.extend(soft.tick(0.008).events);
    }
    let l = landings(&events);
    assert_eq!(l.len(), 1);
    assert!(l[0] < 0.75, "{l:?}");
    assert!(soft.effects().landing.is_empty());
}
