//! # Shelf - A minimal GraphQL API server for a small book catalog
//!
//! Shelf exposes two related entities, authors and books, over GraphQL. The
//! catalog lives in memory for the lifetime of the process: it is seeded at
//! startup (built-in fixtures or a JSON seed file) and mutated only through
//! the `addBook`/`addAuthor` mutations.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (GraphiQL UI on the same route)
//! shelf serve --port 8001
//!
//! # One-shot query from the CLI
//! shelf query '{ allAuthors { name authorBooks { name } } }'
//!
//! # Export the schema
//! shelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (Author, Book)
//! - [`store`]: The in-memory catalog store

/// Command-line interface definitions using clap.
pub mod cli;

/// Error types and result aliases.
///
/// Defines `ShelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server.
///
/// Provides the async-graphql schema and the axum route serving it.
pub mod graphql;

/// Data models for the catalog.
pub mod model;

/// The in-memory catalog store, injected into resolvers.
pub mod store;

pub mod logging;
