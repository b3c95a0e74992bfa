//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{fav, listing};
use crate::storage::{Config, DefaultFormat, RecordStore};

#[derive(Parser)]
#[command(name = "estate")]
#[command(author, version, about = "Flat-file property-listing manager")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config setting)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Listing file to operate on (defaults to estate.toml's data_file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Favorites file to operate on
    #[arg(long, global = true)]
    pub favorites: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the properties on the market
    List,

    /// Show one property in detail
    Show {
        /// 1-based catalog position
        position: usize,
    },

    /// Add a property to the catalog
    Add(listing::AddArgs),

    /// Purchase a property, removing it from the catalog
    Buy {
        /// 1-based catalog position
        position: usize,
    },

    /// Manage favorite properties
    #[command(subcommand)]
    Fav(fav::FavCommands),
}

/// Resolved file paths and capacity for one command invocation.
pub struct Session {
    pub data_file: PathBuf,
    pub favorites_file: PathBuf,
    pub capacity: usize,
}

impl Session {
    /// Opens the record store these commands operate on.
    pub fn open_store(&self) -> Result<RecordStore> {
        RecordStore::open(&self.data_file, &self.favorites_file, self.capacity)
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli.format.unwrap_or(match config.global.default_format {
        DefaultFormat::Text => OutputFormat::Text,
        DefaultFormat::Json => OutputFormat::Json,
    });
    let output = Output::new(format, cli.verbose);

    let session = Session {
        data_file: cli.file.unwrap_or_else(|| config.local.data_file.clone()),
        favorites_file: cli
            .favorites
            .unwrap_or_else(|| config.local.favorites_file.clone()),
        capacity: config.local.capacity,
    };
    output.verbose(&format!(
        "Using listing file {} (capacity {})",
        session.data_file.display(),
        session.capacity
    ));

    match cli.command {
        Commands::List => listing::list(&session, &output),
        Commands::Show { position } => listing::show(&session, &output, position),
        Commands::Add(args) => listing::add(&session, &output, args),
        Commands::Buy { position } => listing::buy(&session, &output, position),
        Commands::Fav(cmd) => fav::run(cmd, &session, &output),
    }
}
