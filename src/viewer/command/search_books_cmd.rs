use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::viewer::command::dispatch_search;
use crate::viewer::domain::ViewerService;
use crate::viewer::dto::ViewSnapshot;

pub(crate) struct SearchBooksCommand {
    viewer_service: Arc<dyn ViewerService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(viewer_service: Arc<dyn ViewerService>) -> Self {
        Self {
            viewer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) term: String,
    // apply the remote result before responding
    #[serde(default)]
    pub(crate) wait: bool,
}

impl SearchBooksCommandRequest {
    pub fn new(term: &str, wait: bool) -> Self {
        Self {
            term: term.to_string(),
            wait,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub view: ViewSnapshot,
}

impl SearchBooksCommandResponse {
    pub fn new(view: ViewSnapshot) -> Self {
        Self {
            view,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let ticket = self.viewer_service.change_search_term(req.term.as_str()).await;
        dispatch_search(&self.viewer_service, ticket, req.wait).await;
        Ok(SearchBooksCommandResponse::new(self.viewer_service.snapshot().await))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::UNKNOWN_AUTHOR;
    use crate::core::command::Command;
    use crate::utils::testing::loaded_viewer;
    use crate::viewer::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};

    #[tokio::test]
    async fn test_should_run_search_and_wait() {
        let cmd = SearchBooksCommand::new(loaded_viewer().await);
        let res = cmd.execute(SearchBooksCommandRequest::new("dune", true)).await.expect("should search");
        assert!(!res.view.loading);
        assert_eq!(2, res.view.books_count);
        assert!(res.view.books.iter().all(|b| b.author_name == UNKNOWN_AUTHOR));
    }

    #[tokio::test]
    async fn test_should_revert_short_term_without_waiting() {
        let viewer = loaded_viewer().await;
        let total = viewer.snapshot().await.books_count;
        let cmd = SearchBooksCommand::new(viewer);
        let res = cmd.execute(SearchBooksCommandRequest::new("du", false)).await.expect("should search");
        assert!(!res.view.loading);
        assert_eq!(total, res.view.books_count);
        assert_eq!("du", res.view.search_term.as_str());
    }

    #[tokio::test]
    async fn test_should_report_loading_while_search_runs_in_background() {
        let viewer = loaded_viewer().await;
        let cmd = SearchBooksCommand::new(viewer.clone());
        let res = cmd.execute(SearchBooksCommandRequest::new("xyz-no-match", false)).await.expect("should search");
        assert_eq!("xyz-no-match", res.view.search_term.as_str());
        let mut view = viewer.snapshot().await;
        for _ in 0..50 {
            if !view.loading {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            view = viewer.snapshot().await;
        }
        assert!(!view.loading);
        assert_eq!(0, view.books_count);
        assert!(view.last_search_failure.is_some());
    }
}
