use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::ActiveTab;
use crate::viewer::domain::ViewerService;

pub(crate) struct CancelCommand {
    viewer_service: Arc<dyn ViewerService>,
}

impl CancelCommand {
    pub(crate) fn new(viewer_service: Arc<dyn ViewerService>) -> Self {
        Self {
            viewer_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CancelCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CancelCommandResponse {
    pub active_tab: ActiveTab,
}

impl CancelCommandResponse {
    pub fn new(active_tab: ActiveTab) -> Self {
        Self {
            active_tab,
        }
    }
}

#[async_trait]
impl Command<CancelCommandRequest, CancelCommandResponse> for CancelCommand {
    async fn execute(&self, _req: CancelCommandRequest) -> Result<CancelCommandResponse, CommandError> {
        Ok(CancelCommandResponse::new(self.viewer_service.cancel().await))
    }
}
