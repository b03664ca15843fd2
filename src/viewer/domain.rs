pub mod selectors;
pub mod service;
pub mod state;

use async_trait::async_trait;
use crate::authors::domain::model::AuthorEntity;
use crate::books::domain::model::BookEntity;
use crate::core::library::ActiveTab;
use crate::viewer::domain::state::SearchTicket;
use crate::viewer::dto::ViewSnapshot;

/// Owns the session's working copies and wires presentation actions to state transitions.
///
/// Book searches run in two halves: `change_search_term` (and `select_tab` for the books tab)
/// decides synchronously and hands out a ticket when a remote lookup is needed; `run_search`
/// performs the lookup and applies the result unless a newer search superseded the ticket.
#[async_trait]
pub trait ViewerService: Sync + Send {
    async fn load(&self);
    async fn select_tab(&self, tab: ActiveTab) -> Option<SearchTicket>;
    async fn change_search_term(&self, term: &str) -> Option<SearchTicket>;
    async fn run_search(&self, ticket: SearchTicket);
    async fn cancel(&self) -> ActiveTab;
    async fn add_author(&self, author: AuthorEntity) -> AuthorEntity;
    async fn add_book(&self, book: BookEntity) -> BookEntity;
    async fn find_author_by_id(&self, author_id: i64) -> Option<AuthorEntity>;
    async fn book_count_by_author(&self, author_id: i64) -> usize;
    async fn snapshot(&self) -> ViewSnapshot;

    async fn search(&self, term: &str) {
        if let Some(ticket) = self.change_search_term(term).await {
            self.run_search(ticket).await;
        }
    }
}
