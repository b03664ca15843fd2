use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::authors::domain::model::AuthorEntity;
use crate::core::command::{Command, CommandError};
use crate::core::library::ActiveTab;
use crate::viewer::domain::ViewerService;

pub(crate) struct AddAuthorCommand {
    viewer_service: Arc<dyn ViewerService>,
}

impl AddAuthorCommand {
    pub(crate) fn new(viewer_service: Arc<dyn ViewerService>) -> Self {
        Self {
            viewer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddAuthorCommandRequest {
    pub(crate) name: String,
}

impl AddAuthorCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn build_author(&self) -> Result<AuthorEntity, CommandError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CommandError::validation("author name must not be blank"));
        }
        Ok(AuthorEntity::new(name))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddAuthorCommandResponse {
    pub author: AuthorEntity,
    pub active_tab: ActiveTab,
}

impl AddAuthorCommandResponse {
    pub fn new(author: AuthorEntity, active_tab: ActiveTab) -> Self {
        Self {
            author,
            active_tab,
        }
    }
}

#[async_trait]
impl Command<AddAuthorCommandRequest, AddAuthorCommandResponse> for AddAuthorCommand {
    async fn execute(&self, req: AddAuthorCommandRequest) -> Result<AddAuthorCommandResponse, CommandError> {
        let author = self.viewer_service.add_author(req.build_author()?).await;
        let active_tab = self.viewer_service.snapshot().await.active_tab;
        Ok(AddAuthorCommandResponse::new(author, active_tab))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::library::ActiveTab;
    use crate::utils::testing::loaded_viewer;
    use crate::viewer::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest};

    #[tokio::test]
    async fn test_should_run_add_author() {
        let viewer = loaded_viewer().await;
        let cmd = AddAuthorCommand::new(viewer.clone());
        let res = cmd.execute(AddAuthorCommandRequest::new("  N. K. Jemisin ")).await.expect("should add author");
        assert_eq!("N. K. Jemisin", res.author.name.as_str());
        assert!(res.author.id.is_some());
        assert_eq!(ActiveTab::Authors, res.active_tab);
    }

    #[tokio::test]
    async fn test_should_reject_blank_name() {
        let cmd = AddAuthorCommand::new(loaded_viewer().await);
        let res = cmd.execute(AddAuthorCommandRequest::new("   ")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
