use anyhow::Result;
use clap::Parser;

use shelf::cli::{Cli, Commands, handlers};
use shelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Serve { port, seed } => handlers::handle_serve(port, seed),
        Commands::Query {
            query,
            variables,
            seed,
        } => handlers::handle_query(query, variables, seed),
        Commands::Schema => handlers::handle_schema(),
    }
}
