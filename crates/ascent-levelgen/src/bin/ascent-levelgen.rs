use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use ascent_levelgen::{SectionCatalog, build_game_area, generate_pad_collection, generate_section};

#[derive(Debug, Parser)]
#[command(name = "ascent-levelgen")]
#[command(about = "Generate Ascent rise sections and pad layouts as JSON")]
struct Args {
    /// Seed for the random source
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Catalog file (defaults to $ASCENT_SECTIONS or config/sections.toml)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the sections in the catalog
    List,
    /// Generate one named section from the catalog
    Section { name: String },
    /// Generate every catalog section, bottom to top
    All,
    /// Generate stacked pad collections
    Pads {
        /// Step range of each collection (repeatable)
        #[arg(long = "range", default_values_t = [50, 100])]
        ranges: Vec<i32>,
        /// Pads scattered per collection
        #[arg(long, default_value_t = 100)]
        count: usize,
    },
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
    tracing::debug!(seed = args.seed, "levelgen starting");

    let load_catalog = || match &args.catalog {
        Some(path) => SectionCatalog::load_from(path),
        None => SectionCatalog::load(),
    };

    let output = match &args.command {
        Command::List => {
            let catalog = load_catalog()?;
            for section in &catalog.sections {
                println!(
                    "{}\t{}\tdifficulty {}",
                    section.name, section.section_type, section.difficulty
                );
            }
            return Ok(());
        },
        Command::Section { name } => {
            let catalog = load_catalog()?;
            let section = generate_section(catalog.get(name)?, &mut rng)?;
            to_json(&section, args.pretty)?
        },
        Command::All => {
            let catalog = load_catalog()?;
            to_json(&catalog.generate_all(&mut rng)?, args.pretty)?
        },
        Command::Pads { ranges, count } => {
            let collections: Vec<_> = ranges
                .iter()
                .map(|&range| generate_pad_collection(&mut rng, range, *count))
                .collect();
            to_json(&build_game_area(&collections), args.pretty)?
        },
    };

    println!("{output}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
