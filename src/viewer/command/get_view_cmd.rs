use std::sync::Arc;
use async_trait::async_trait;
use crate::core::command::{Command, CommandError};
use crate::viewer::domain::ViewerService;
use crate::viewer::dto::ViewSnapshot;

pub(crate) struct GetViewCommand {
    viewer_service: Arc<dyn ViewerService>,
}

impl GetViewCommand {
    pub(crate) fn new(viewer_service: Arc<dyn ViewerService>) -> Self {
        Self {
            viewer_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetViewCommandRequest {}

#[async_trait]
impl Command<GetViewCommandRequest, ViewSnapshot> for GetViewCommand {
    async fn execute(&self, _req: GetViewCommandRequest) -> Result<ViewSnapshot, CommandError> {
        Ok(self.viewer_service.snapshot().await)
    }
}
