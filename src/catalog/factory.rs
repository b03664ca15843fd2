use std::sync::Arc;
use std::time::Duration;
use crate::authors;
use crate::books;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::CatalogResult;
use crate::core::seed::SeedData;
use crate::gateway::factory::create_search_gateway;

pub fn create_catalog_service(config: &Configuration, seed: Arc<SeedData>) -> CatalogResult<Arc<dyn CatalogService>> {
    let book_repo = books::factory::create_book_repository(seed.clone());
    let author_repo = authors::factory::create_author_repository(seed);
    let search_gateway = create_search_gateway(config)?;
    Ok(Arc::new(CatalogServiceImpl::new(
        Duration::from_millis(config.catalog_latency_ms), book_repo, author_repo, search_gateway)))
}
