use std::time::Duration;
use async_trait::async_trait;
use crate::authors::domain::model::AuthorEntity;
use crate::authors::repository::AuthorRepository;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, SearchOutcome};
use crate::core::library::CatalogResult;
use crate::gateway::search::BookSearchGateway;

pub struct CatalogServiceImpl {
    latency: Duration,
    book_repository: Box<dyn BookRepository>,
    author_repository: Box<dyn AuthorRepository>,
    search_gateway: Box<dyn BookSearchGateway>,
}

impl CatalogServiceImpl {
    pub fn new(latency: Duration,
               book_repository: Box<dyn BookRepository>,
               author_repository: Box<dyn AuthorRepository>,
               search_gateway: Box<dyn BookSearchGateway>) -> Self {
        Self {
            latency,
            book_repository,
            author_repository,
            search_gateway,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn get_all_books(&self) -> CatalogResult<Vec<BookEntity>> {
        self.simulate_latency().await;
        self.book_repository.find_all().await
    }

    async fn get_all_authors(&self) -> CatalogResult<Vec<AuthorEntity>> {
        self.simulate_latency().await;
        self.author_repository.find_all().await
    }

    async fn search_books_by_title(&self, title: &str) -> SearchOutcome {
        match self.search_gateway.search_by_title(title).await {
            Ok(books) => {
                tracing::debug!(title, found = books.len(), "remote title search");
                SearchOutcome::found(books)
            }
            Err(err) => {
                tracing::warn!(title, error = %err, retryable = err.retryable(), "remote title search failed");
                SearchOutcome::failed(err.to_string().as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use tokio::time::Instant;
    use crate::authors;
    use crate::books;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::repository::RepositoryStore;
    use crate::core::seed::SeedData;
    use crate::utils::testing::{remote_book, ScriptedSearchGateway};

    fn build_service(latency: Duration) -> CatalogServiceImpl {
        let seed = Arc::new(SeedData::load(&RepositoryStore::Embedded).expect("should load seed"));
        let gateway = ScriptedSearchGateway::new()
            .with("dune", Duration::ZERO, vec![remote_book("Dune"), remote_book("Dune Messiah")]);
        CatalogServiceImpl::new(latency,
                                books::factory::create_book_repository(seed.clone()),
                                authors::factory::create_author_repository(seed),
                                Box::new(gateway))
    }

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<CatalogServiceImpl> = AsyncOnce::new(async {
                build_service(Duration::ZERO)
            });
    }

    #[tokio::test]
    async fn test_should_get_all_books() {
        let catalog_svc = SUT_SVC.get().await;
        let books = catalog_svc.get_all_books().await.expect("should return books");
        let seed = SeedData::load(&RepositoryStore::Embedded).expect("should load seed");
        assert_eq!(seed.books, books);
    }

    #[tokio::test]
    async fn test_should_get_all_authors() {
        let catalog_svc = SUT_SVC.get().await;
        let authors = catalog_svc.get_all_authors().await.expect("should return authors");
        assert!(!authors.is_empty());
        assert!(authors.iter().all(|a| a.id.is_some()));
    }

    #[tokio::test]
    async fn test_should_delay_static_fetches() {
        let catalog_svc = build_service(Duration::from_millis(30));
        let started = Instant::now();
        let _ = catalog_svc.get_all_authors().await.expect("should return authors");
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_should_search_books_by_title() {
        let catalog_svc = SUT_SVC.get().await;
        let outcome = catalog_svc.search_books_by_title("dune").await;
        assert_eq!(2, outcome.books.len());
        assert_eq!(None, outcome.failure);
    }

    #[tokio::test]
    async fn test_should_degrade_failed_search_to_no_results() {
        let catalog_svc = SUT_SVC.get().await;
        let outcome = catalog_svc.search_books_by_title("xyz-no-match").await;
        assert!(outcome.books.is_empty());
        assert!(outcome.failure.is_some());
    }
}
