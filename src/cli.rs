// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloudimage")]
#[command(about = "Normalize cloud image records and provider statuses")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: discover cloudimage.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new cloudimage.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Map provider-native statuses to canonical statuses
    Normalize {
        /// Provider whose status table to use
        #[arg(short, long)]
        provider: String,

        /// Native status values (integers are treated as status codes)
        #[arg(required = true, allow_negative_numbers = true)]
        raw: Vec<String>,
    },

    /// Show status tables
    Tables {
        /// Only show this provider's table
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Convert an image record (YAML or JSON) into a canonical image
    Inspect {
        /// Path to the record; .json files are read as JSON, others as YAML
        file: PathBuf,
    },
}
