// CLI module for operations alongside the HTTP server
pub mod seed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Armory backend CLI
#[derive(Parser)]
#[command(name = "armory-backend")]
#[command(about = "Read-only game item catalog service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (the default when no subcommand is given)
    Serve,

    /// Run database migrations and exit
    Migrate,

    /// Load an item dataset from a JSON file into the backing store
    Seed {
        /// Path to a JSON array of item records
        file: PathBuf,
    },
}
