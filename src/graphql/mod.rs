//! GraphQL schema and resolvers for the catalog.
//!
//! Exposes the book/author catalog over GraphQL, served via axum with a
//! GraphiQL UI on the same route.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! shelf serve --port 8001
//!
//! # Execute a query from the CLI
//! shelf query '{ allBooks { id name } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `allBooks`, `author`, `allAuthors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{ShelfSchema, build_schema};
pub use server::run_server;
pub use types::*;
