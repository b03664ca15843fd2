use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};
use crate::viewer::domain::ViewerService;

pub(crate) struct GetAuthorCommand {
    viewer_service: Arc<dyn ViewerService>,
}

impl GetAuthorCommand {
    pub(crate) fn new(viewer_service: Arc<dyn ViewerService>) -> Self {
        Self {
            viewer_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetAuthorCommandRequest {
    pub(crate) author_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetAuthorCommandResponse {
    pub author: AuthorDto,
}

impl GetAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<GetAuthorCommandRequest, GetAuthorCommandResponse> for GetAuthorCommand {
    async fn execute(&self, req: GetAuthorCommandRequest) -> Result<GetAuthorCommandResponse, CommandError> {
        let author = self.viewer_service.find_author_by_id(req.author_id).await
            .ok_or_else(|| CommandError::not_found(format!("author {} not found", req.author_id).as_str()))?;
        let count = self.viewer_service.book_count_by_author(req.author_id).await;
        Ok(GetAuthorCommandResponse::new(AuthorDto::new(&author, count)))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::UNLINKED_AUTHOR_ID;
    use crate::core::command::{Command, CommandError};
    use crate::utils::testing::loaded_viewer;
    use crate::viewer::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest};

    #[tokio::test]
    async fn test_should_run_get_author() {
        let cmd = GetAuthorCommand::new(loaded_viewer().await);
        let res = cmd.execute(GetAuthorCommandRequest { author_id: 1 }).await.expect("should find author");
        assert_eq!("Ursula K. Le Guin", res.author.name.as_str());
        assert_eq!(2, res.author.book_count);
    }

    #[tokio::test]
    async fn test_should_not_find_unlinked_author() {
        let cmd = GetAuthorCommand::new(loaded_viewer().await);
        let res = cmd.execute(GetAuthorCommandRequest { author_id: UNLINKED_AUTHOR_ID }).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
