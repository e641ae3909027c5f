use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ascent_core::assets::HeadlessAssets;
use ascent_core::events::SimEvent;
use ascent_core::level::VISIBLE_AREA_HEIGHT;
use ascent_core::random::RandomSource;
use ascent_levelgen::SectionCatalog;
use ascent_sim::{GameSession, SimConfig};

/// Keeps the character in the lower third of the window.
const CAMERA_LEAD: f32 = VISIBLE_AREA_HEIGHT / 3.0;

#[derive(Debug, Parser)]
#[command(name = "ascent-run")]
#[command(about = "Play generated Ascent sections headlessly and print the events as JSON lines")]
struct Args {
    /// Seed for generation and for the random player
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Catalog file (defaults to $ASCENT_SECTIONS or config/sections.toml)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Simulated time limit in seconds
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// Ticks per simulated second
    #[arg(long, default_value_t = 60)]
    rate: u32,

    /// Seconds between changes of the random player's steering
    #[arg(long, default_value_t = 0.5)]
    steer_interval: f32,
}

#[derive(Serialize)]
struct TimedEvent<'a> {
    time: f32,
    #[serde(flatten)]
    event: &'a SimEvent,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let catalog = match &args.catalog {
        Some(path) => SectionCatalog::load_from(path)?,
        None => SectionCatalog::load()?,
    };
    let layout = catalog.generate_all(&mut rng)?;
    let config = SimConfig::load();
    let mut session = GameSession::new(config, layout, HeadlessAssets);

    let delta = 1.0 / args.rate.max(1) as f32;
    let mut time = 0.0f32;
    let mut visible = 0.0f32;
    let mut steer = 0.0f32;
    let mut next_steer = 0.0f32;

    while time < args.seconds && !session.is_over() {
        if time >= next_steer {
            steer = rng.float_in(-300.0, 300.0);
            next_steer = time + args.steer_interval;
        }
        // spend fart charges to climb back after a fall
        let character = session.character();
        if character.speed.y < 0.0 && character.position.y < visible + CAMERA_LEAD / 2.0 {
            session.request_fart();
        }

        let events = session.update(steer, visible, delta);
        time += delta;
        for event in &events {
            println!("{}", serde_json::to_string(&TimedEvent { time, event })?);
        }
        visible = visible.max(session.character().position.y - CAMERA_LEAD);
    }

    tracing::info!(
        time,
        state = ?session.character().state,
        height = session.character().position.y,
        rise_height = session.rise_height(),
        score = session.effects().score(),
        lives = session.effects().lives(),
        "run finished"
    );
    Ok(())
}
