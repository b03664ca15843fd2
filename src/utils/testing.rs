use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::sync::Mutex;
use crate::authors;
use crate::books;
use crate::books::domain::model::BookEntity;
use crate::books::domain::UNLINKED_AUTHOR_ID;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::{CatalogError, CatalogResult};
use crate::core::repository::RepositoryStore;
use crate::core::seed::SeedData;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::search::BookSearchGateway;
use crate::viewer::domain::service::ViewerServiceImpl;
use crate::viewer::domain::ViewerService;

#[derive(Debug, Clone)]
pub enum VolumesReply {
    Ok(String),
    Status(u16),
}

#[derive(Clone)]
struct VolumesState {
    reply: VolumesReply,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

// FakeVolumesServer stands in for the remote volumes api on an ephemeral local port
pub struct FakeVolumesServer {
    pub url: String,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeVolumesServer {
    pub async fn last_query(&self) -> Option<HashMap<String, String>> {
        self.queries.lock().await.last().cloned()
    }
}

async fn volumes(State(state): State<VolumesState>,
                 Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    state.queries.lock().await.push(query);
    match state.reply {
        VolumesReply::Ok(body) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body)
        }
        VolumesReply::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "application/json")], "{}".to_string())
        }
    }
}

pub async fn serve_volumes(reply: VolumesReply) -> FakeVolumesServer {
    let queries = Arc::new(Mutex::new(vec![]));
    let app = Router::new()
        .route("/volumes", get(volumes))
        .with_state(VolumesState { reply, queries: queries.clone() });
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake volumes api");
    let addr = listener.local_addr().expect("fake volumes api address");
    let server = axum::Server::from_tcp(listener).expect("fake volumes api server")
        .serve(app.into_make_service());
    tokio::spawn(server);
    FakeVolumesServer {
        url: format!("http://{}/volumes", addr),
        queries,
    }
}

pub fn remote_book(title: &str) -> BookEntity {
    BookEntity::new(title, UNLINKED_AUTHOR_ID)
}

// ScriptedSearchGateway answers each title with canned books after an optional delay; titles
// without a script fail like an unreachable remote.
#[derive(Default)]
pub struct ScriptedSearchGateway {
    scripts: HashMap<String, (Duration, Vec<BookEntity>)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSearchGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, title: &str, delay: Duration, books: Vec<BookEntity>) -> Self {
        self.scripts.insert(title.to_string(), (delay, books));
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl BookSearchGateway for ScriptedSearchGateway {
    async fn search_by_title(&self, title: &str) -> CatalogResult<Vec<BookEntity>> {
        self.calls.lock().await.push(title.to_string());
        match self.scripts.get(title) {
            Some((delay, books)) => {
                tokio::time::sleep(*delay).await;
                Ok(books.clone())
            }
            None => Err(CatalogError::unavailable(
                format!("no scripted reply for {:?}", title).as_str(), None, true)),
        }
    }
}

#[async_trait]
impl BookSearchGateway for Arc<ScriptedSearchGateway> {
    async fn search_by_title(&self, title: &str) -> CatalogResult<Vec<BookEntity>> {
        self.as_ref().search_by_title(title).await
    }
}

pub fn test_config() -> Configuration {
    let mut config = Configuration::new();
    config.catalog_latency_ms = 0;
    config
}

// loaded_viewer is a viewer over the embedded seed whose remote search only knows "dune"
pub async fn loaded_viewer() -> Arc<dyn ViewerService> {
    let seed = Arc::new(SeedData::load(&RepositoryStore::Embedded).expect("should load seed"));
    let gateway = ScriptedSearchGateway::new()
        .with("dune", Duration::ZERO, vec![remote_book("Dune"), remote_book("Dune Messiah")]);
    let catalog = CatalogServiceImpl::new(Duration::ZERO,
                                          books::factory::create_book_repository(seed.clone()),
                                          authors::factory::create_author_repository(seed),
                                          Box::new(gateway));
    let viewer: Arc<dyn ViewerService> = Arc::new(
        ViewerServiceImpl::new(&test_config(), Arc::new(catalog), Arc::new(LogPublisher::default())));
    viewer.load().await;
    viewer
}
