use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(
    author,
    version,
    about = "A minimal GraphQL API server for a small book catalog"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8001)]
        port: u16,

        /// Seed the catalog from a JSON file instead of the built-in fixtures
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Execute a GraphQL document against a fresh in-memory catalog.
    /// Mutations are accepted, but their effects end with the process.
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query or mutation document
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Seed the catalog from a JSON file instead of the built-in fixtures
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Print the schema in SDL form
    Schema,
}
