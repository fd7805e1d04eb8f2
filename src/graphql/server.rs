use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;

use super::schema::ShelfSchema;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Serve the schema on `/graphql`: POST executes documents, GET serves the
/// GraphiQL UI. Blocks until the server shuts down; failing to bind the
/// port is fatal and propagates to the caller.
pub async fn run_server(schema: ShelfSchema, port: u16) -> std::io::Result<()> {
    let app = Router::new().route(
        "/graphql",
        get(graphiql).post_service(GraphQL::new(schema)),
    );

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "GraphQL server listening");

    axum::serve(listener, app).await
}
