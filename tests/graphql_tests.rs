use std::sync::Arc;

use serde_json::json;

use shelf::graphql::{ShelfSchema, build_schema};
use shelf::model::{Author, Book};
use shelf::store::Library;

fn schema_with(authors: Vec<Author>, books: Vec<Book>) -> ShelfSchema {
    build_schema(Arc::new(Library::new(authors, books)))
}

fn sample_schema() -> ShelfSchema {
    schema_with(
        vec![Author::new(1, "Bauer"), Author::new(2, "Knuth")],
        vec![
            Book::new(1, "Go").with_author("1"),
            Book::new(2, "TAOCP").with_author("2"),
            Book::new(3, "Orphan"),
        ],
    )
}

/// Execute a document that must succeed and return its data as JSON.
async fn data(schema: &ShelfSchema, query: &str) -> serde_json::Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_book_by_id() {
    let schema = sample_schema();

    let result = data(&schema, "{ book(id: 2) { id name authorId } }").await;
    assert_eq!(
        result,
        json!({ "book": { "id": 2, "name": "TAOCP", "authorId": "2" } })
    );
}

#[tokio::test]
async fn test_book_by_id_absent_is_null() {
    let schema = sample_schema();

    let result = data(&schema, "{ book(id: 99) { id } }").await;
    assert_eq!(result, json!({ "book": null }));
}

#[tokio::test]
async fn test_all_books_insertion_order() {
    let schema = sample_schema();

    let result = data(&schema, "{ allBooks { name } }").await;
    assert_eq!(
        result,
        json!({ "allBooks": [
            { "name": "Go" },
            { "name": "TAOCP" },
            { "name": "Orphan" },
        ]})
    );
}

#[tokio::test]
async fn test_author_by_name_first_match() {
    let schema = schema_with(
        vec![Author::new(1, "Bauer"), Author::new(2, "Bauer")],
        Vec::new(),
    );

    let result = data(&schema, r#"{ author(name: "Bauer") { id } }"#).await;
    assert_eq!(result, json!({ "author": { "id": 1 } }));
}

#[tokio::test]
async fn test_author_by_name_absent_is_null() {
    let schema = sample_schema();

    let result = data(&schema, r#"{ author(name: "Nobody") { id } }"#).await;
    assert_eq!(result, json!({ "author": null }));
}

#[tokio::test]
async fn test_all_authors_insertion_order() {
    let schema = sample_schema();

    let result = data(&schema, "{ allAuthors { id name } }").await;
    assert_eq!(
        result,
        json!({ "allAuthors": [
            { "id": 1, "name": "Bauer" },
            { "id": 2, "name": "Knuth" },
        ]})
    );
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let schema = sample_schema();
    let query = "{ allBooks { id name authorId } allAuthors { id name } }";

    let first = data(&schema, query).await;
    let second = data(&schema, query).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_query_variables() {
    let schema = sample_schema();

    let request = async_graphql::Request::new("query($id: Int!) { book(id: $id) { name } }")
        .variables(async_graphql::Variables::from_json(json!({ "id": 1 })));
    let response = schema.execute(request).await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "book": { "name": "Go" } })
    );
}

// =============================================================================
// Cross-references
// =============================================================================

#[tokio::test]
async fn test_book_author_nesting() {
    let schema = sample_schema();

    let result = data(&schema, "{ book(id: 1) { name bookAuthor { name } } }").await;
    assert_eq!(
        result,
        json!({ "book": { "name": "Go", "bookAuthor": { "name": "Bauer" } } })
    );
}

#[tokio::test]
async fn test_author_books_nesting() {
    let schema = sample_schema();

    let result = data(&schema, "{ allAuthors { name authorBooks { name } } }").await;
    assert_eq!(
        result,
        json!({ "allAuthors": [
            { "name": "Bauer", "authorBooks": [{ "name": "Go" }] },
            { "name": "Knuth", "authorBooks": [{ "name": "TAOCP" }] },
        ]})
    );
}

#[tokio::test]
async fn test_unlinked_book_has_null_author() {
    let schema = sample_schema();

    let result = data(&schema, "{ book(id: 3) { authorId bookAuthor { name } } }").await;
    assert_eq!(
        result,
        json!({ "book": { "authorId": null, "bookAuthor": null } })
    );
}

#[tokio::test]
async fn test_reference_matching_is_numeric() {
    // A zero-padded reference still resolves: references are matched by
    // numeric value, not by string equality.
    let schema = schema_with(
        vec![Author::new(1, "Bauer")],
        vec![Book::new(1, "Go").with_author("01")],
    );

    let result = data(&schema, "{ book(id: 1) { bookAuthor { id } } }").await;
    assert_eq!(result, json!({ "book": { "bookAuthor": { "id": 1 } } }));

    let result = data(&schema, "{ allAuthors { authorBooks { name } } }").await;
    assert_eq!(
        result,
        json!({ "allAuthors": [{ "authorBooks": [{ "name": "Go" }] }] })
    );
}

#[tokio::test]
async fn test_dangling_reference_resolves_to_null() {
    let schema = schema_with(
        vec![Author::new(1, "Bauer")],
        vec![Book::new(1, "Go").with_author("42")],
    );

    let result = data(&schema, "{ book(id: 1) { bookAuthor { id } } }").await;
    assert_eq!(result, json!({ "book": { "bookAuthor": null } }));
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_add_book_appends_with_next_id() {
    let schema = sample_schema();

    let result = data(
        &schema,
        r#"mutation { addBook(name: "Dune") { id name authorId } }"#,
    )
    .await;
    assert_eq!(
        result,
        json!({ "addBook": { "id": 4, "name": "Dune", "authorId": null } })
    );

    let result = data(&schema, "{ allBooks { id name } }").await;
    let books = result["allBooks"].as_array().unwrap();
    assert_eq!(books.len(), 4);
    assert_eq!(books.last().unwrap(), &json!({ "id": 4, "name": "Dune" }));
}

#[tokio::test]
async fn test_add_author_appends_with_next_id() {
    let schema = sample_schema();

    let result = data(
        &schema,
        r#"mutation { addAuthor(name: "Herbert") { id name } }"#,
    )
    .await;
    assert_eq!(result, json!({ "addAuthor": { "id": 3, "name": "Herbert" } }));

    let result = data(&schema, "{ allAuthors { name } }").await;
    let authors = result["allAuthors"].as_array().unwrap();
    assert_eq!(authors.len(), 3);
    assert_eq!(authors.last().unwrap(), &json!({ "name": "Herbert" }));
}

#[tokio::test]
async fn test_stores_are_isolated_per_schema() {
    let first = sample_schema();
    let second = sample_schema();

    data(&first, r#"mutation { addBook(name: "Dune") { id } }"#).await;

    let result = data(&second, "{ allBooks { id } }").await;
    assert_eq!(result["allBooks"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Errors and schema surface
// =============================================================================

#[tokio::test]
async fn test_unknown_field_is_an_error() {
    let schema = sample_schema();

    let response = schema.execute("{ nope }").await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_missing_argument_is_an_error() {
    let schema = sample_schema();

    let response = schema.execute("mutation { addBook { id } }").await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_sdl_exposes_expected_surface() {
    let schema = sample_schema();
    let sdl = schema.sdl();

    assert!(sdl.contains("book(id: Int!): Book"));
    assert!(sdl.contains("allBooks: [Book!]!"));
    assert!(sdl.contains("author(name: String!): Author"));
    assert!(sdl.contains("allAuthors: [Author!]!"));
    assert!(sdl.contains("addBook(name: String!): Book!"));
    assert!(sdl.contains("addAuthor(name: String!): Author!"));
    assert!(sdl.contains("authorId: String"));
    assert!(sdl.contains("bookAuthor: Author"));
    assert!(sdl.contains("authorBooks: [Book!]!"));
}
