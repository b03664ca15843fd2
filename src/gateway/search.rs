use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::CatalogResult;

// BookSearchGateway looks up books by title in a third-party metadata service. Results are
// already mapped into the local book shape and carry no local id.
#[async_trait]
pub trait BookSearchGateway: Sync + Send {
    async fn search_by_title(&self, title: &str) -> CatalogResult<Vec<BookEntity>>;
}
