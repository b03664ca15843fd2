pub mod add_author_cmd;
pub mod add_book_cmd;
pub mod cancel_cmd;
pub mod get_author_cmd;
pub mod get_view_cmd;
pub mod search_books_cmd;
pub mod select_tab_cmd;

use std::sync::Arc;
use crate::viewer::domain::state::SearchTicket;
use crate::viewer::domain::ViewerService;

// runs the remote half of a search inline when `wait` is set, otherwise in the background
pub(crate) async fn dispatch_search(viewer: &Arc<dyn ViewerService>, ticket: Option<SearchTicket>, wait: bool) {
    if let Some(ticket) = ticket {
        if wait {
            viewer.run_search(ticket).await;
        } else {
            let viewer = viewer.clone();
            tokio::spawn(async move { viewer.run_search(ticket).await });
        }
    }
}
