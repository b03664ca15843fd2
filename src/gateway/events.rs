use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::CatalogError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), CatalogError>;
}
