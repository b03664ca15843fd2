use std::collections::HashSet;
use std::fs;
use serde::{Deserialize, Serialize};
use crate::authors::domain::model::AuthorEntity;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{CatalogError, CatalogResult};
use crate::core::repository::RepositoryStore;

const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

// SeedData is the fixed initial collection of books and authors. It is loaded once at startup
// and shared read-only by the seed repositories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub books: Vec<BookEntity>,
    #[serde(default)]
    pub authors: Vec<AuthorEntity>,
}

impl SeedData {
    pub fn new(books: Vec<BookEntity>, authors: Vec<AuthorEntity>) -> Self {
        Self { books, authors }
    }

    pub fn load(store: &RepositoryStore) -> CatalogResult<SeedData> {
        let seed = match store {
            RepositoryStore::Embedded => SeedData::parse(EMBEDDED_SEED)?,
            RepositoryStore::File(path) => SeedData::parse(fs::read_to_string(path)?.as_str())?,
        };
        tracing::info!(books = seed.books.len(), authors = seed.authors.len(), store = ?store, "loaded seed data");
        Ok(seed)
    }

    pub fn parse(json: &str) -> CatalogResult<SeedData> {
        let seed: SeedData = serde_json::from_str(json)?;
        validate_ids("books", &seed.books)?;
        validate_ids("authors", &seed.authors)?;
        Ok(seed)
    }
}

// seed records must carry strictly positive ids that are unique within their collection
fn validate_ids<T: Identifiable>(collection: &str, items: &[T]) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        match item.id() {
            Some(id) if id > 0 => {
                if !seen.insert(id) {
                    return Err(CatalogError::validation(
                        format!("duplicate id {} in seed {}", id, collection).as_str(), Some("duplicate_id".to_string())));
                }
            }
            other => {
                return Err(CatalogError::validation(
                    format!("invalid id {:?} in seed {}", other, collection).as_str(), Some("invalid_id".to_string())));
            }
        }
    }
    Ok(())
}
