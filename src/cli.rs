use crate::config::{Config, OutputFormat};
use crate::error::TileError;
use crate::models::ResolvedTile;
use crate::service::TileService;
use crate::traits::TileSink;
use crate::utils::status::{JsonSink, TableSink};
use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quadtile", version, about = "Resolve quadkey tile addresses to pixel and geographic bounds")]
pub struct Cli {
    /// JSON config file; flags below override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Sphere radius in meters
    #[arg(long, global = true)]
    pub earth_radius: Option<f64>,

    /// Zoom level the pixel grid is expressed in
    #[arg(long, global = true)]
    pub max_level: Option<u8>,

    /// error, warn, info, debug or trace (falls back to RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve tile request paths such as http://host/tiles/r0123.png
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Resolve bare quadkeys
    Key {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Resolve the four children of a quadkey
    Children { key: String },
    /// Find the tile containing a point
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long)]
        zoom: u8,
    },
    /// Resolve request paths listed one per line in a file
    Batch { file: PathBuf },
}

impl Cli {
    /// File config (or defaults) with command-line overrides applied.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(radius) = self.earth_radius {
            config.params.earth_radius = radius;
        }
        if let Some(level) = self.max_level {
            config.params.max_level = level;
        }
        if self.log_level.is_some() {
            config.log_level = self.log_level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Runs `command`, writing results to `out`. Returns the number of inputs
/// that failed to resolve.
pub fn run<'a, W: Write + 'a>(
    command: &Command,
    config: &Config,
    out: W,
) -> anyhow::Result<usize> {
    let service = TileService::new(config.params)?;
    let mut sink: Box<dyn TileSink + 'a> = match config.format {
        OutputFormat::Table => Box::new(TableSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    };

    let mut failed = 0;
    let mut emit = |input: &str, outcome: Result<ResolvedTile, TileError>| -> anyhow::Result<()> {
        match outcome {
            Ok(tile) => sink.accept(input, &tile),
            Err(e) => {
                failed += 1;
                sink.reject(input, &e)
            }
        }
    };

    match command {
        Command::Resolve { paths } => {
            for path in paths {
                emit(path.as_str(), service.resolve_path(path))?;
            }
        }
        Command::Key { keys } => {
            for key in keys {
                emit(key.as_str(), service.resolve_key(key))?;
            }
        }
        Command::Children { key } => match service.children(key) {
            Ok(children) => {
                for child in children {
                    let label = child.quadkey.to_string();
                    emit(label.as_str(), Ok(child))?;
                }
            }
            Err(e) => emit(key.as_str(), Err(e))?,
        },
        Command::Locate { lon, lat, zoom } => {
            let label = format!("{} , {} @ {}", lon, lat, zoom);
            emit(label.as_str(), service.locate(*lon, *lat, *zoom))?;
        }
        Command::Batch { file } => {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read batch file {:?}", file))?;
            let paths: Vec<&str> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .collect();
            info!("Resolving {} paths from {:?}", paths.len(), file);

            let pb = ProgressBar::new(paths.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg}\n[{bar:40.cyan/blue}] {pos}/{len} {percent}%")?
                    .progress_chars("█▇▆▅▄▃▂▁  "),
            );
            for path in paths {
                pb.set_message(format!("Resolving {:<40}", path));
                emit(path, service.resolve_path(path))?;
                pb.inc(1);
            }
            pb.finish_and_clear();
        }
    }

    sink.finish()?;
    Ok(failed)
}
