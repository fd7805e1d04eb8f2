use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::load_library;

pub fn handle_serve(port: u16, seed: Option<PathBuf>) -> Result<()> {
    let library = Arc::new(load_library(seed)?);
    let schema = build_schema(library);

    println!(
        "{} GraphQL server on http://localhost:{}/graphql",
        "Starting".green(),
        port
    );
    println!("GraphiQL UI: http://localhost:{}/graphql", port);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, port).await })?;
    Ok(())
}
