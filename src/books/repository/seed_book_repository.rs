use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::CatalogResult;
use crate::core::repository::Repository;
use crate::core::seed::SeedData;

#[derive(Debug)]
pub struct SeedBookRepository {
    seed: Arc<SeedData>,
}

impl SeedBookRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self {
            seed,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for SeedBookRepository {
    async fn find_all(&self) -> CatalogResult<Vec<BookEntity>> {
        Ok(self.seed.books.clone())
    }
}

impl BookRepository for SeedBookRepository {}
