use serde::{Deserialize, Serialize};
use crate::authors::domain::model::AuthorEntity;

// AuthorDto is an author card for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Option<i64>,
    pub name: String,
    pub book_count: usize,
}

impl AuthorDto {
    pub fn new(author: &AuthorEntity, book_count: usize) -> AuthorDto {
        AuthorDto {
            id: author.id,
            name: author.name.to_string(),
            book_count,
        }
    }
}
