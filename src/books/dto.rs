use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

// BookDto is a book card for the presentation layer, with the author already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: Option<i64>,
    pub title: String,
    pub author_id: i64,
    pub author_name: String,
    pub isbn: String,
    pub published_year: i32,
    pub description: String,
    pub cover_url: String,
}

impl BookDto {
    // author_name is None when the book's authorId does not resolve
    pub fn new(book: &BookEntity, author_name: Option<&str>) -> BookDto {
        BookDto {
            id: book.id,
            title: book.title.to_string(),
            author_id: book.author_id,
            author_name: author_name.unwrap_or(UNKNOWN_AUTHOR).to_string(),
            isbn: book.isbn.to_string(),
            published_year: book.published_year,
            description: book.description.to_string(),
            cover_url: book.cover_url.to_string(),
        }
    }
}
