//! Missile Command entry point
//!
//! Runs the simulation with the autopilot at the controls and prints a JSON
//! summary of the run. A windowed build plugs its own `InputSource`,
//! `Presenter` and `AudioSink` into the same `FrameLoop`.
//!
//! Usage:
//!   missile-command --frames 3600 --unthrottled
//!   RUST_LOG=debug missile-command --seed 42 --settings settings.json

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use missile_command::audio::AudioManager;
use missile_command::platform::Autopilot;
use missile_command::renderer::DrawListPresenter;
use missile_command::sim::GameState;
use missile_command::{FrameLoop, Pacing, Settings};

#[derive(Parser)]
#[command(name = "missile-command")]
#[command(about = "Defend six structures from falling missiles")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Run as fast as possible instead of at the fixed tick rate
    #[arg(long)]
    unthrottled: bool,
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = Settings::load(args.settings.as_deref())?;
    let seed = args.seed.unwrap_or_else(time_seed);
    log::info!("Missile Command starting with seed {seed}");

    let pacing = if args.unthrottled || !settings.throttle {
        Pacing::Unthrottled
    } else {
        Pacing::Fixed
    };
    let max_frames = args.frames.or(settings.max_frames);

    let mut game = FrameLoop::new(
        GameState::new(seed),
        Autopilot::new(max_frames, settings.linger_frames),
        DrawListPresenter::new(settings.trails),
        AudioManager::from_settings(&settings),
        pacing,
    )
    .with_report_interval(settings.report_interval);

    let summary = game.run();
    let json = serde_json::to_string_pretty(&summary).context("failed to encode run summary")?;
    println!("{json}");
    Ok(())
}
