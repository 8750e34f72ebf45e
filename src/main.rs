//! clusterview - terminal browser for gene clusters across genomes
//!
//! Shows several genomes side by side as tracks of genes and aligns the
//! occurrences of a selected gene cluster.
//!
//! ## Usage
//!
//! ```bash
//! clusterview <dataset.json>
//! clusterview --cluster 12 --zoom 2 --name-type locus-tag <dataset.json>
//! ```
//!
//! ## Navigation (Vim-style)
//!
//! - `j/k`: Focus the next/previous track
//! - `h/l`: Scroll the focused track
//! - `]/[`: Next/previous cluster
//! - `:q`: Quit
//! - `?`: Help

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use clusterview::config::Config;
use clusterview::controller::run_app_with_loading;
use clusterview::model::NameType;

/// Gene label selection for the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum NameTypeArg {
    /// Gene family id
    Id,
    /// Gene name
    Name,
    /// Locus tag
    LocusTag,
}

impl From<NameTypeArg> for NameType {
    fn from(arg: NameTypeArg) -> Self {
        match arg {
            NameTypeArg::Id => NameType::Id,
            NameTypeArg::Name => NameType::Name,
            NameTypeArg::LocusTag => NameType::LocusTag,
        }
    }
}

/// clusterview - A Vim-style terminal browser for gene clusters
///
/// Opens a JSON dataset of genomes and detected clusters. Settings come from
/// --config, else clusterview.toml in the working directory, else defaults;
/// the flags below override them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset file (JSON with genomes and clusters)
    dataset: PathBuf,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Select this cluster id at startup
    #[arg(long = "cluster")]
    cluster: Option<usize>,

    /// Initial zoom level (0-6)
    #[arg(short = 'z', long = "zoom")]
    zoom: Option<u16>,

    /// Label written into gene boxes
    #[arg(short = 'n', long = "name-type", value_enum)]
    name_type: Option<NameTypeArg>,

    /// Use Unicode arrows and chromosome symbols
    #[arg(long = "fancy")]
    fancy: bool,

    /// Log file (default: a new file in the temp directory)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Sends log output to a file, the terminal belongs to the UI.
fn setup_logging(verbose: u8, log_file: Option<PathBuf>) -> Result<PathBuf> {
    let path = log_file.unwrap_or_else(|| {
        std::env::temp_dir().join(format!("clusterview-{:08x}.log", rand::random::<u32>()))
    });
    let file = File::create(&path).with_context(|| format!("Cannot create log file {}", path.display()))?;

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(path)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = setup_logging(args.verbose, args.log_file)?;
    log::info!("clusterview {} starting, logging to {}", env!("CARGO_PKG_VERSION"), log_path.display());

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(zoom) = args.zoom {
        config.browser.zoom = zoom;
    }
    if let Some(name_type) = args.name_type {
        config.browser.name_type = name_type.into();
    }
    if args.fancy {
        config.ui.fancy_glyphs = true;
    }
    config.validate()?;

    run_app_with_loading(args.dataset, config, args.cluster)
}
