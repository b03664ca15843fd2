use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::library::CatalogResult;
use crate::gateway::events::EventPublisher;
use crate::gateway::google::client::GoogleBooksClient;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::search::BookSearchGateway;

pub fn create_publisher() -> Arc<dyn EventPublisher> {
    Arc::new(LogPublisher::default())
}

pub fn create_search_gateway(config: &Configuration) -> CatalogResult<Box<dyn BookSearchGateway>> {
    Ok(Box::new(GoogleBooksClient::new(config)?))
}
