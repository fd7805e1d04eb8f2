use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::store::Library;

use super::types::*;

pub type ShelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: Arc<Library>) -> ShelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(super) fn library<'ctx>(ctx: &Context<'ctx>) -> &'ctx Library {
    ctx.data::<Arc<Library>>().unwrap()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by id
    async fn book(&self, ctx: &Context<'_>, id: i32) -> Option<Book> {
        library(ctx).book(id).map(Into::into)
    }

    /// List all books in insertion order
    async fn all_books(&self, ctx: &Context<'_>) -> Vec<Book> {
        library(ctx).books().into_iter().map(Into::into).collect()
    }

    /// Get the first author with the given name
    async fn author(&self, ctx: &Context<'_>, name: String) -> Option<Author> {
        library(ctx).author_named(&name).map(Into::into)
    }

    /// List all authors in insertion order
    async fn all_authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        library(ctx).authors().into_iter().map(Into::into).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book to the catalog. The new book carries no author reference.
    async fn add_book(&self, ctx: &Context<'_>, name: String) -> Book {
        library(ctx).add_book(name).into()
    }

    /// Add an author to the catalog
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Author {
        library(ctx).add_author(name).into()
    }
}
