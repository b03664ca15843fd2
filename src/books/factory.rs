use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::seed_book_repository::SeedBookRepository;
use crate::core::seed::SeedData;

pub fn create_book_repository(seed: Arc<SeedData>) -> Box<dyn BookRepository> {
    Box::new(SeedBookRepository::new(seed))
}
