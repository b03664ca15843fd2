pub mod service;

use async_trait::async_trait;
use crate::authors::domain::model::AuthorEntity;
use crate::books::domain::model::BookEntity;
use crate::core::library::CatalogResult;

// SearchOutcome is the non-failing result of a remote title search. A failed search yields
// no books and keeps the reason for diagnostics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchOutcome {
    pub books: Vec<BookEntity>,
    pub failure: Option<String>,
}

impl SearchOutcome {
    pub fn found(books: Vec<BookEntity>) -> Self {
        Self { books, failure: None }
    }

    pub fn failed(reason: &str) -> Self {
        Self { books: vec![], failure: Some(reason.to_string()) }
    }
}

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn get_all_books(&self) -> CatalogResult<Vec<BookEntity>>;
    async fn get_all_authors(&self) -> CatalogResult<Vec<AuthorEntity>>;
    async fn search_books_by_title(&self, title: &str) -> SearchOutcome;
}
