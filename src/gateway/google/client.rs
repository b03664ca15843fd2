use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Configuration;
use crate::core::library::{CatalogError, CatalogResult};
use crate::gateway::google::model::{transform_google_book, VolumesResponse};
use crate::gateway::search::BookSearchGateway;

#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    country: String,
    max_results: u32,
}

impl GoogleBooksClient {
    pub fn new(config: &Configuration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.search_timeout_secs))
            .user_agent(concat!("bookshelf/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.search_url.to_string(),
            country: config.search_country.to_string(),
            max_results: config.search_max_results,
        })
    }
}

#[async_trait]
impl BookSearchGateway for GoogleBooksClient {
    async fn search_by_title(&self, title: &str) -> CatalogResult<Vec<BookEntity>> {
        let query = format!("intitle:{}", title);
        let max_results = self.max_results.to_string();
        let response = self.client
            .get(self.base_url.as_str())
            .query(&[
                ("q", query.as_str()),
                ("country", self.country.as_str()),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::from_status(
                format!("volumes search for {:?} failed", title).as_str(), status.as_u16()));
        }

        let body = response.text().await?;
        let volumes: VolumesResponse = serde_json::from_str(body.as_str())?;
        Ok(volumes.items.iter().map(transform_google_book).collect())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        let reason = err.status().map(|s| s.as_u16().to_string());
        if err.is_timeout() || err.is_connect() {
            CatalogError::unavailable(format!("volumes api unreachable {:?}", err).as_str(), reason, true)
        } else if err.is_decode() {
            CatalogError::serialization(format!("volumes api body {:?}", err).as_str())
        } else if err.is_builder() {
            CatalogError::runtime(format!("volumes api client {:?}", err).as_str(), reason)
        } else {
            CatalogError::remote(format!("volumes api error {:?}", err).as_str(), reason, false)
        }
    }
}
