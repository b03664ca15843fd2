use std::sync::Arc;
use crate::authors::repository::AuthorRepository;
use crate::authors::repository::seed_author_repository::SeedAuthorRepository;
use crate::core::seed::SeedData;

pub fn create_author_repository(seed: Arc<SeedData>) -> Box<dyn AuthorRepository> {
    Box::new(SeedAuthorRepository::new(seed))
}
