use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use data_runtime::configs::{input_camera, player_controller, telemetry};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt + clippy -D warnings + tests (workspace)
    Ci,
    /// Validate data/config/*.toml against the serde models
    SchemaCheck,
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {:?}", cmd);
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn ci() -> Result<()> {
    cargo(&["fmt", "--all"])?;
    cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["test"])?;
    schema_check()?;
    Ok(())
}

fn check_one(path: &Path) -> Result<()> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match name {
        "player_controller" => {
            player_controller::load_from(path)?;
        }
        "input_camera" => {
            input_camera::load_from(path)?;
        }
        "telemetry" => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            toml::from_str::<telemetry::TelemetryCfg>(&txt)
                .with_context(|| format!("parse {}", path.display()))?;
        }
        other => bail!("no model for config file '{other}' ({})", path.display()),
    }
    Ok(())
}

fn schema_check() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    let dir = root.join("data/config");
    let mut count = 0usize;
    for entry in std::fs::read_dir(&dir).with_context(|| format!("list {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            continue;
        }
        check_one(&path).with_context(|| format!("validate {}", path.display()))?;
        count += 1;
    }
    println!("xtask: config schema ok ({count} files)");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => ci(),
        Cmd::SchemaCheck => schema_check(),
    }
}
