use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::CatalogResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all records in seed order
    async fn find_all(&self) -> CatalogResult<Vec<Entity>>;
}

// RepositoryStore names where the seed collection is read from
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum RepositoryStore {
    Embedded,
    File(String),
}

impl RepositoryStore {
    pub fn from_path(path: Option<&str>) -> RepositoryStore {
        match path {
            Some(path) => RepositoryStore::File(path.to_string()),
            None => RepositoryStore::Embedded,
        }
    }
}
