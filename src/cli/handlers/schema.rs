use std::sync::Arc;

use anyhow::Result;

use crate::graphql::build_schema;
use crate::store::Library;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(Library::new(Vec::new(), Vec::new())));
    println!("{}", schema.sdl());
    Ok(())
}
