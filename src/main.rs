use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use drom::editor::Editor;
use drom::hex::Point;
use drom::{Config, DromState, session};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DROM_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "drom")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Interactive editor for hexagon Droms with TikZ export"
)]
struct Cli {
    /// Configuration file (default: ~/.config/drom/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// First vertex of the seed hexagon, e.g. `--seed=-1.5,2`
    #[arg(long, value_name = "X,Y", value_parser = parse_seed, allow_hyphen_values = true)]
    seed: Option<Point>,

    /// Start from a saved Drom instead of a single hexagon
    #[arg(long, value_name = "FILE", conflicts_with = "seed")]
    load: Option<PathBuf>,

    /// Directory for the working document and renders
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Only write .tex files, never run the renderer
    #[arg(long, action = ArgAction::SetTrue)]
    no_render: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_seed(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate '{}'", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate '{}'", y.trim()))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("seed must be finite, got '{}'", value));
    }
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => {
                Config::create_default_file_at(path)?;
                path.clone()
            }
            None => Config::create_default_file()?,
        };
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = &cli.output_dir {
        config.export.output_dir = dir.to_string_lossy().into_owned();
    }
    if cli.no_render {
        config.render.enabled = false;
    }

    let drom = match &cli.load {
        Some(path) => session::load_drom(path)
            .with_context(|| format!("Failed to load starting Drom {}", path.display()))?,
        None => DromState::new(cli.seed.unwrap_or_else(|| config.seed())),
    };
    log::info!(
        "Starting editor with {} hexagons (output in {})",
        drom.len(),
        config.export.output_dir
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut editor = Editor::new(&config, drom, stdin.lock(), stdout.lock());
    editor.run()?;

    log::info!("Editor closed with {} hexagons", editor.drom().len());
    Ok(())
}
