use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model;

use super::schema::library;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: Option<String>,
}

#[ComplexObject]
impl Book {
    /// The author this book's reference resolves to
    async fn book_author(&self, ctx: &Context<'_>) -> Option<Author> {
        library(ctx)
            .author_for(self.author_id.as_deref())
            .map(Into::into)
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// All books referencing this author
    async fn author_books(&self, ctx: &Context<'_>) -> Vec<Book> {
        library(ctx)
            .books_by(self.id)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
