use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;
use crate::authors::domain::model::AuthorEntity;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::ActiveTab;
use crate::gateway::events::EventPublisher;
use crate::viewer::domain::selectors;
use crate::viewer::domain::state::{SearchTicket, ViewState};
use crate::viewer::domain::ViewerService;
use crate::viewer::dto::ViewSnapshot;

pub struct ViewerServiceImpl {
    config: Configuration,
    catalog_service: Arc<dyn CatalogService>,
    events_publisher: Arc<dyn EventPublisher>,
    state: RwLock<ViewState>,
}

impl ViewerServiceImpl {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            catalog_service,
            events_publisher,
            state: RwLock::new(ViewState::new()),
        }
    }

    fn sync_search(&self, state: &mut ViewState) -> Option<SearchTicket> {
        state.begin_search(self.config.search_threshold, self.config.search_mode).ticket()
    }

    // publishing is best effort, a failed publish never fails the action
    async fn publish<T: Serialize + Sync>(&self, name: &str, key: i64, data: &T) {
        let metadata = HashMap::from([("source".to_string(), "session".to_string())]);
        let event = match DomainEvent::added(name, "viewer", key.to_string().as_str(), &metadata, data) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(name, key, error = %err, "could not build domain event");
                return;
            }
        };
        if let Err(err) = self.events_publisher.publish(&event).await {
            tracing::warn!(name, key, error = %err, "could not publish domain event");
        }
    }
}

#[async_trait]
impl ViewerService for ViewerServiceImpl {
    async fn load(&self) {
        self.state.write().await.begin_load();
        let fetched = tokio::try_join!(
            self.catalog_service.get_all_books(),
            self.catalog_service.get_all_authors());

        let ticket = {
            let mut state = self.state.write().await;
            let ticket = match fetched {
                Ok((books, authors)) => {
                    tracing::info!(books = books.len(), authors = authors.len(), "loaded catalog");
                    state.populate(books, authors);
                    self.sync_search(&mut state)
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to fetch initial data");
                    None
                }
            };
            state.end_load();
            ticket
        };

        if let Some(ticket) = ticket {
            self.run_search(ticket).await;
        }
    }

    async fn select_tab(&self, tab: ActiveTab) -> Option<SearchTicket> {
        let mut state = self.state.write().await;
        if state.active_tab == tab {
            return None;
        }
        state.select_tab(tab);
        if tab == ActiveTab::Books {
            self.sync_search(&mut state)
        } else {
            None
        }
    }

    async fn change_search_term(&self, term: &str) -> Option<SearchTicket> {
        let mut state = self.state.write().await;
        state.set_search_term(term);
        self.sync_search(&mut state)
    }

    async fn run_search(&self, ticket: SearchTicket) {
        let outcome = self.catalog_service.search_books_by_title(ticket.term.as_str()).await;
        let mut state = self.state.write().await;
        if state.apply_search(&ticket, outcome) {
            tracing::debug!(term = ticket.term.as_str(), found = state.searched_books.len(), "applied search results");
        } else {
            tracing::debug!(term = ticket.term.as_str(), seq = ticket.seq, current = state.search_seq(), "discarding stale search results");
        }
    }

    async fn cancel(&self) -> ActiveTab {
        self.state.write().await.cancel()
    }

    async fn add_author(&self, author: AuthorEntity) -> AuthorEntity {
        let added = self.state.write().await.append_author(author);
        let id = added.id.unwrap_or_default();
        tracing::info!(id, name = added.name.as_str(), "new author added");
        self.publish("authors", id, &added).await;
        added
    }

    async fn add_book(&self, book: BookEntity) -> BookEntity {
        let added = self.state.write().await.append_book(book);
        let id = added.id.unwrap_or_default();
        tracing::info!(id, title = added.title.as_str(), "new book added");
        self.publish("books", id, &added).await;
        added
    }

    async fn find_author_by_id(&self, author_id: i64) -> Option<AuthorEntity> {
        let state = self.state.read().await;
        selectors::find_author_by_id(&state.authors, author_id).cloned()
    }

    async fn book_count_by_author(&self, author_id: i64) -> usize {
        let state = self.state.read().await;
        selectors::book_count_by_author(&state.books, author_id)
    }

    async fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::new(&*self.state.read().await)
    }
}
