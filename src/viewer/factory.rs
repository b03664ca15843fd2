use std::sync::Arc;
use crate::catalog;
use crate::catalog::domain::CatalogService;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::CatalogResult;
use crate::core::repository::RepositoryStore;
use crate::core::seed::SeedData;
use crate::gateway::factory::create_publisher;
use crate::viewer::domain::service::ViewerServiceImpl;
use crate::viewer::domain::ViewerService;

pub fn create_viewer_service(config: &Configuration, catalog_service: Arc<dyn CatalogService>) -> Arc<dyn ViewerService> {
    Arc::new(ViewerServiceImpl::new(config, catalog_service, create_publisher()))
}

// wires seed, catalog and viewer; the catalog is not fetched until the viewer is loaded
pub fn create_app_state(config: &Configuration) -> CatalogResult<AppState> {
    let seed = Arc::new(SeedData::load(&RepositoryStore::from_path(config.seed_path.as_deref()))?);
    let catalog_service = catalog::factory::create_catalog_service(config, seed)?;
    let viewer = create_viewer_service(config, catalog_service);
    Ok(AppState::new(viewer))
}

#[cfg(test)]
mod tests {
    use crate::utils::testing::test_config;
    use crate::viewer::factory::create_app_state;

    #[tokio::test]
    async fn test_should_create_app_state() {
        let state = create_app_state(&test_config()).expect("should create app state");
        assert!(state.viewer.snapshot().await.loading);
        state.viewer.load().await;
        let view = state.viewer.snapshot().await;
        assert!(!view.loading);
        assert_eq!(8, view.books_count);
    }

    #[tokio::test]
    async fn test_should_fail_on_missing_seed_file() {
        let mut config = test_config();
        config.seed_path = Some("/nonexistent/bookshelf-seed.json".to_string());
        assert!(create_app_state(&config).is_err());
    }
}
