use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::books::dto::BookDto;
use crate::core::library::ActiveTab;
use crate::viewer::domain::selectors::{author_cards, book_cards, filter_authors};
use crate::viewer::domain::state::ViewState;

// ViewSnapshot is everything the presentation layer renders for the current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub active_tab: ActiveTab,
    pub search_term: String,
    pub loading: bool,
    pub books: Vec<BookDto>,
    pub authors: Vec<AuthorDto>,
    pub books_count: usize,
    pub authors_count: usize,
    pub last_search_failure: Option<String>,
}

impl ViewSnapshot {
    pub fn new(state: &ViewState) -> ViewSnapshot {
        let books = book_cards(&state.searched_books, &state.authors);
        let authors = author_cards(&filter_authors(&state.authors, state.search_term.as_str()), &state.books);
        ViewSnapshot {
            active_tab: state.active_tab,
            search_term: state.search_term.to_string(),
            loading: state.loading(),
            books_count: books.len(),
            authors_count: authors.len(),
            books,
            authors,
            last_search_failure: state.last_search_failure.clone(),
        }
    }
}
