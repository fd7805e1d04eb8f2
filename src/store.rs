//! In-memory catalog store.
//!
//! [`Library`] owns the two ordered record sequences for the lifetime of the
//! process. It is constructed once (from built-in fixtures or a seed file)
//! and shared into the GraphQL schema as context data, so tests can build
//! isolated stores per case instead of touching global state.

use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Author, Book};

/// Seed document for pre-populating a [`Library`].
///
/// ```json
/// {
///   "authors": [{ "id": 1, "name": "Harper Lee" }],
///   "books": [{ "id": 1, "name": "To Kill a Mockingbird", "authorId": "1" }]
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

/// The in-memory store shared by all resolvers.
///
/// Reads return cloned snapshots in insertion order. Appends assign
/// `current count + 1` as the id; no uniqueness or referential checks are
/// performed.
pub struct Library {
    authors: RwLock<Vec<Author>>,
    books: RwLock<Vec<Book>>,
}

impl Library {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            authors: RwLock::new(authors),
            books: RwLock::new(books),
        }
    }

    /// The default catalog used when no seed file is given.
    pub fn with_fixtures() -> Self {
        let authors = vec![
            Author::new(1, "J. K. Rowling"),
            Author::new(2, "J. R. R. Tolkien"),
            Author::new(3, "Brent Weeks"),
        ];
        let books = vec![
            Book::new(1, "Harry Potter and the Chamber of Secrets").with_author("1"),
            Book::new(2, "Harry Potter and the Prisoner of Azkaban").with_author("1"),
            Book::new(3, "Harry Potter and the Goblet of Fire").with_author("1"),
            Book::new(4, "The Fellowship of the Ring").with_author("2"),
            Book::new(5, "The Two Towers").with_author("2"),
            Book::new(6, "The Return of the King").with_author("2"),
            Book::new(7, "The Way of Shadows").with_author("3"),
            Book::new(8, "Beyond the Shadows").with_author("3"),
        ];
        Self::new(authors, books)
    }

    /// Load a catalog from a JSON seed file.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&content)?;
        Ok(Self::new(seed.authors, seed.books))
    }

    /// All authors, insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.authors.read().unwrap().clone()
    }

    /// All books, insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.books.read().unwrap().clone()
    }

    /// First book with the given id.
    pub fn book(&self, id: i32) -> Option<Book> {
        self.books.read().unwrap().iter().find(|b| b.id == id).cloned()
    }

    /// First author with the given name, by insertion order.
    pub fn author_named(&self, name: &str) -> Option<Author> {
        self.authors
            .read()
            .unwrap()
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    /// The author a book's reference resolves to, if any.
    pub fn author_for(&self, reference: Option<&str>) -> Option<Author> {
        let reference = reference?;
        self.authors
            .read()
            .unwrap()
            .iter()
            .find(|a| Self::reference_matches(reference, a.id))
            .cloned()
    }

    /// All books whose reference resolves to the given author id.
    pub fn books_by(&self, author_id: i32) -> Vec<Book> {
        self.books
            .read()
            .unwrap()
            .iter()
            .filter(|b| {
                b.author_id
                    .as_deref()
                    .is_some_and(|r| Self::reference_matches(r, author_id))
            })
            .cloned()
            .collect()
    }

    /// Append a book. No author reference is accepted; books created this
    /// way stay unlinked.
    pub fn add_book(&self, name: String) -> Book {
        let mut books = self.books.write().unwrap();
        let book = Book::new(books.len() as i32 + 1, name);
        books.push(book.clone());
        book
    }

    /// Append an author.
    pub fn add_author(&self, name: String) -> Author {
        let mut authors = self.authors.write().unwrap();
        let author = Author::new(authors.len() as i32 + 1, name);
        authors.push(author.clone());
        author
    }

    /// Author references are strings while author ids are integers. A
    /// reference matches when it parses as the same number, so "1", "01",
    /// and " 1 " all resolve to id 1; unparsable references match nothing.
    fn reference_matches(reference: &str, id: i32) -> bool {
        reference
            .trim()
            .parse::<i64>()
            .is_ok_and(|n| n == i64::from(id))
    }
}
