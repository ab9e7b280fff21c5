//! CLI definition using clap

use std::path::PathBuf;

use carkit_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carkit")]
#[command(version)]
#[command(about = "Inspect car variants built from a TOML catalog")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Catalog TOML file. Uses config value, then the built-in showcase.
    #[arg(long, short = 'c', global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every vehicle in the catalog
    List,

    /// Show a single vehicle
    Show {
        /// Position in the catalog, as printed by `list`
        index: usize,
    },

    /// Call every operation of one vehicle, or of all of them
    Walk {
        /// Position in the catalog. All vehicles when omitted.
        index: Option<usize>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set default catalog path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Forget the default catalog path
        #[arg(long, conflicts_with = "set_catalog")]
        clear_catalog: bool,
    },
}
