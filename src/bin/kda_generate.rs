//! # kda-generate
//!
//! Generates a monster instance from a catalog dump and prints it as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use kda_deck::{
    Catalog, CatalogDump, CatalogError, DeckRng, GenerationConfig, GenerationError,
    GenerationRequest, InstanceGenerator, MonsterLevel, MonsterQuery,
};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "kda-generate")]
#[command(about = "Generate a monster encounter deck from a catalog dump")]
#[command(version, disable_version_flag = true)]
struct Args {
    /// JSON catalog dump
    #[arg(short, long)]
    catalog: PathBuf,

    /// Monster name
    #[arg(short, long, required_unless_present = "list")]
    monster: Option<String>,

    /// Monster level (Prologue, L1..L4, Legendary)
    #[arg(short, long, default_value = "L1")]
    level: String,

    /// Expansion version (defaults to the highest available)
    #[arg(short, long)]
    version: Option<String>,

    /// Random seed (defaults to OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of instances to generate (at least 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// JSON generation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// List monster definitions instead of generating
    #[arg(long)]
    list: bool,

    /// Level filter for --list (comma-separated)
    #[arg(long, default_value = "")]
    filter_level: String,

    /// Expansion filter for --list (comma-separated)
    #[arg(long, default_value = "")]
    filter_expansion: String,

    /// Version filter for --list (comma-separated)
    #[arg(long, default_value = "")]
    filter_version: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Generation(GenerationError::DefinitionNotFound { .. })) => {
            eprintln!("no matching definition");
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let dump = CatalogDump::from_json_file(&args.catalog)?;
    let catalog = Catalog::from_dump(&dump);

    if args.list {
        let query = MonsterQuery::new()
            .with_levels(&args.filter_level)
            .with_expansions(&args.filter_expansion)
            .with_versions(&args.filter_version);
        for monster in catalog.find_monsters(&query) {
            println!("{}", serde_json::to_string(monster)?);
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(CatalogError::from)?;
            serde_json::from_str(&text)?
        }
        None => GenerationConfig::default(),
    };

    let level: MonsterLevel = args.level.parse()?;
    let mut request = GenerationRequest::new(args.monster.clone().unwrap_or_default(), level);
    if let Some(version) = &args.version {
        request = request.with_version(version.as_str());
    }

    let mut rng = match args.seed {
        Some(seed) => DeckRng::new(seed),
        None => DeckRng::from_entropy(),
    };
    info!("generating {} ({}) with seed {}", request.monster, request.level, rng.seed());

    let generator = InstanceGenerator::new(config);
    if args.count == 1 {
        let instance = generator.generate(&catalog, &request, &mut rng)?;
        println!("{}", serde_json::to_string_pretty(&instance)?);
        return Ok(());
    }

    let instances = (0..args.count)
        .map(|_| generator.generate(&catalog, &request, &mut rng.fork()))
        .collect::<Result<Vec<_>, _>>()?;
    println!("{}", serde_json::to_string_pretty(&instances)?);
    Ok(())
}
