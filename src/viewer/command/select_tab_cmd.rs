use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::ActiveTab;
use crate::viewer::command::dispatch_search;
use crate::viewer::domain::ViewerService;
use crate::viewer::dto::ViewSnapshot;

pub(crate) struct SelectTabCommand {
    viewer_service: Arc<dyn ViewerService>,
}

impl SelectTabCommand {
    pub(crate) fn new(viewer_service: Arc<dyn ViewerService>) -> Self {
        Self {
            viewer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectTabCommandRequest {
    pub(crate) tab: ActiveTab,
    #[serde(default)]
    pub(crate) wait: bool,
}

impl SelectTabCommandRequest {
    pub fn new(tab: ActiveTab, wait: bool) -> Self {
        Self {
            tab,
            wait,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectTabCommandResponse {
    pub view: ViewSnapshot,
}

impl SelectTabCommandResponse {
    pub fn new(view: ViewSnapshot) -> Self {
        Self {
            view,
        }
    }
}

#[async_trait]
impl Command<SelectTabCommandRequest, SelectTabCommandResponse> for SelectTabCommand {
    async fn execute(&self, req: SelectTabCommandRequest) -> Result<SelectTabCommandResponse, CommandError> {
        let ticket = self.viewer_service.select_tab(req.tab).await;
        dispatch_search(&self.viewer_service, ticket, req.wait).await;
        Ok(SelectTabCommandResponse::new(self.viewer_service.snapshot().await))
    }
}
