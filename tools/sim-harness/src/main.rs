//! sim-harness: run the player controller headless over a terrain and print a summary.
//!
//! Usage:
//!   cargo run -p sim-harness -- --script forward --terrain rolling --seconds 10
//!   cargo run -p sim-harness -- --terrain snapshot --snapshot data/terrain/hills.json
//!   cargo run -p sim-harness -- --terrain rolling --bake data/terrain/hills.json

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use client_core::controller::ControllerEvent;
use client_core::session::{Session, SessionParams};
use client_core::telemetry::init_client_telemetry;
use collision_terrain::{FlatGround, HeightField, TerrainQuery};
use data_runtime::configs::{input_camera, player_controller, telemetry};
use data_runtime::terrain::{HeightFieldSnapshot, load_heightfield_snapshot, save_heightfield_snapshot};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Script {
    /// Hold forward.
    Forward,
    /// Hold forward while the camera swings around.
    Circle,
    /// Hold forward and jump.
    Jump,
    Idle,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TerrainKind {
    Flat,
    Rolling,
    Snapshot,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless controller simulation", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,
    #[arg(long, default_value_t = 0.016)]
    dt: f32,
    #[arg(long, value_enum, default_value_t = Script::Forward)]
    script: Script,
    #[arg(long, value_enum, default_value_t = TerrainKind::Rolling)]
    terrain: TerrainKind,
    /// Heightfield JSON for `--terrain snapshot`.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Write the generated terrain to this path before running.
    #[arg(long)]
    bake: Option<PathBuf>,
    #[arg(long, default_value_t = 7)]
    seed: u32,
    /// Print one line per tick.
    #[arg(long)]
    trace: bool,
}

/// Camera swing rate for the circle script (rad/s).
const CIRCLE_RATE: f32 = 0.8;

fn build_terrain(args: &Args) -> Result<Box<dyn TerrainQuery>> {
    let terrain: Box<dyn TerrainQuery> = match args.terrain {
        TerrainKind::Flat => Box::new(FlatGround::new(0.0)),
        TerrainKind::Rolling => {
            let hf = HeightField::generate(129, 150.0, args.seed, 6.0)?;
            if let Some(path) = &args.bake {
                let snap = HeightFieldSnapshot {
                    size: hf.size(),
                    extent: hf.extent(),
                    heights: hf.heights().to_vec(),
                };
                save_heightfield_snapshot(path, &snap)?;
                tracing::info!(path = %path.display(), "baked terrain snapshot");
            }
            Box::new(hf)
        }
        TerrainKind::Snapshot => {
            let path = args
                .snapshot
                .as_deref()
                .context("--terrain snapshot needs --snapshot <PATH>")?;
            let snap = load_heightfield_snapshot(path)?;
            let hf = HeightField::new(snap.size, snap.extent, snap.heights)
                .with_context(|| format!("build heightfield from {}", path.display()))?;
            Box::new(hf)
        }
    };
    Ok(terrain)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_client_telemetry(&telemetry::load_default()?);

    let pc_cfg = player_controller::load_default()?;
    let cam_cfg = input_camera::load_default()?;
    let params = SessionParams::from_configs(&pc_cfg, &cam_cfg);
    let terrain = build_terrain(&args)?;
    let mut session = Session::new(terrain, &params);

    match args.script {
        Script::Forward | Script::Circle => session.handle_key("KeyW", true),
        Script::Jump => {
            session.handle_key("KeyW", true);
            session.handle_key("Space", true);
        }
        Script::Idle => {}
    }

    let dt = args.dt.max(1e-4);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ticks = (args.seconds / dt).ceil() as u64;
    let (mut jumps, mut landings, mut hardest) = (0u32, 0u32, 0.0f32);
    for tick in 0..ticks {
        if matches!(args.script, Script::Circle) {
            session.camera_mut().theta += CIRCLE_RATE * dt;
        }
        let out = session.tick(dt);
        for ev in &out.events {
            match ev {
                ControllerEvent::Jump => jumps += 1,
                ControllerEvent::Landing { fall_speed } => {
                    landings += 1;
                    hardest = hardest.max(*fall_speed);
                }
            }
        }
        if args.trace {
            let p = session.state().player();
            println!(
                "{tick:>6} pos=({:.3}, {:.3}, {:.3}) grounded={} vy={:.3}",
                p.position.x,
                p.position.y,
                p.position.z,
                p.grounded,
                session.controller().velocity_y()
            );
        }
    }

    let p = session.state().player();
    println!(
        "ticks={ticks} pos=({:.3}, {:.3}, {:.3}) grounded={} jumps={jumps} landings={landings} hardest_landing={hardest:.2}",
        p.position.x, p.position.y, p.position.z, p.grounded
    );
    Ok(())
}
