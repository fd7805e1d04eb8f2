use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::graphql::build_schema;

use super::load_library;

pub fn handle_query(query: String, variables: Option<String>, seed: Option<PathBuf>) -> Result<()> {
    let library = Arc::new(load_library(seed)?);
    let schema = build_schema(library);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(&query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
