use crate::authors::domain::model::AuthorEntity;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::SearchOutcome;
use crate::core::domain::{Identifiable, next_id};
use crate::core::library::{ActiveTab, SearchMode};
use crate::viewer::domain::selectors::filter_books;

// SearchTicket identifies one remote search; its result is applied only while `seq` is the
// newest search sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    // books tab is not active
    Skipped,
    // term at or under the threshold, displayed books are the working copy
    Reverted,
    // answered from the working copy in local mode
    Filtered,
    Remote(SearchTicket),
}

impl SearchStep {
    pub fn ticket(self) -> Option<SearchTicket> {
        match self {
            SearchStep::Remote(ticket) => Some(ticket),
            _ => None,
        }
    }
}

/// Session state of the viewer.
///
/// `books` and `authors` are the working copies. `searched_books` is the displayed book
/// list, which may hold remote results instead of local books. Records are only ever appended
/// or whole collections replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_tab: ActiveTab,
    pub search_term: String,
    pub books: Vec<BookEntity>,
    pub authors: Vec<AuthorEntity>,
    pub searched_books: Vec<BookEntity>,
    pub loading_catalog: bool,
    pub searching: bool,
    pub last_search_failure: Option<String>,
    search_seq: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active_tab: ActiveTab::Books,
            search_term: String::new(),
            books: vec![],
            authors: vec![],
            searched_books: vec![],
            loading_catalog: true,
            searching: false,
            last_search_failure: None,
            search_seq: 0,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading_catalog || self.searching
    }

    pub fn search_seq(&self) -> u64 {
        self.search_seq
    }

    pub fn begin_load(&mut self) {
        self.loading_catalog = true;
    }

    pub fn populate(&mut self, books: Vec<BookEntity>, authors: Vec<AuthorEntity>) {
        self.searched_books = books.clone();
        self.books = books;
        self.authors = authors;
    }

    pub fn end_load(&mut self) {
        self.loading_catalog = false;
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    // leaves a form tab for the list it belongs to
    pub fn cancel(&mut self) -> ActiveTab {
        self.active_tab = match self.active_tab {
            ActiveTab::AddAuthor => ActiveTab::Authors,
            ActiveTab::AddBook => ActiveTab::Books,
            other => other,
        };
        self.active_tab
    }

    /// Synchronizes `searched_books` with the current term.
    ///
    /// Any step taken on the books tab supersedes every earlier remote search. Terms whose
    /// trimmed length is at or below `threshold` characters revert to the working copy.
    pub fn begin_search(&mut self, threshold: usize, mode: SearchMode) -> SearchStep {
        if self.active_tab != ActiveTab::Books {
            return SearchStep::Skipped;
        }
        self.search_seq += 1;
        let term = self.search_term.trim().to_string();
        if term.chars().count() <= threshold {
            self.searched_books = self.books.clone();
            self.searching = false;
            self.last_search_failure = None;
            return SearchStep::Reverted;
        }
        match mode {
            SearchMode::Local => {
                self.searched_books = filter_books(&self.books, &self.authors, term.as_str());
                self.searching = false;
                self.last_search_failure = None;
                SearchStep::Filtered
            }
            SearchMode::Remote => {
                self.searching = true;
                SearchStep::Remote(SearchTicket { seq: self.search_seq, term })
            }
        }
    }

    // returns false when the ticket was superseded and the outcome was dropped
    pub fn apply_search(&mut self, ticket: &SearchTicket, outcome: SearchOutcome) -> bool {
        if ticket.seq != self.search_seq {
            return false;
        }
        self.searched_books = outcome.books;
        self.last_search_failure = outcome.failure;
        self.searching = false;
        true
    }

    pub fn append_author(&mut self, author: AuthorEntity) -> AuthorEntity {
        let added = author.with_id(next_id(&self.authors));
        self.authors.push(added.clone());
        self.active_tab = ActiveTab::Authors;
        added
    }

    // a remote search still in flight is superseded so its result cannot drop the new book
    pub fn append_book(&mut self, book: BookEntity) -> BookEntity {
        if self.searching {
            self.search_seq += 1;
            self.searching = false;
        }
        let added = book.with_id(next_id(&self.books));
        self.books.push(added.clone());
        self.searched_books.push(added.clone());
        self.active_tab = ActiveTab::Books;
        added
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
