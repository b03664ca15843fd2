use std::sync::Arc;
use async_trait::async_trait;
use crate::authors::domain::model::AuthorEntity;
use crate::authors::repository::AuthorRepository;
use crate::core::library::CatalogResult;
use crate::core::repository::Repository;
use crate::core::seed::SeedData;

#[derive(Debug)]
pub struct SeedAuthorRepository {
    seed: Arc<SeedData>,
}

impl SeedAuthorRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self {
            seed,
        }
    }
}

#[async_trait]
impl Repository<AuthorEntity> for SeedAuthorRepository {
    async fn find_all(&self) -> CatalogResult<Vec<AuthorEntity>> {
        Ok(self.seed.authors.clone())
    }
}

impl AuthorRepository for SeedAuthorRepository {}
