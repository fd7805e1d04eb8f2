mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::store::Library;

/// Build the catalog a command runs against: a seed file when given,
/// otherwise the built-in fixtures.
fn load_library(seed: Option<PathBuf>) -> Result<Library> {
    match seed {
        Some(path) => Library::from_seed_file(&path)
            .with_context(|| format!("Failed to load seed file {}", path.display())),
        None => Ok(Library::with_fixtures()),
    }
}
