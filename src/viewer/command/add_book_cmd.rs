use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::domain::NO_DESCRIPTION;
use crate::core::command::{Command, CommandError};
use crate::viewer::domain::ViewerService;

pub(crate) struct AddBookCommand {
    viewer_service: Arc<dyn ViewerService>,
}

impl AddBookCommand {
    pub(crate) fn new(viewer_service: Arc<dyn ViewerService>) -> Self {
        Self {
            viewer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author_id: i64,
    #[serde(default)]
    pub(crate) isbn: Option<String>,
    #[serde(default)]
    pub(crate) published_year: Option<i32>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) cover_url: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author_id: i64) -> Self {
        Self {
            title: title.to_string(),
            author_id,
            isbn: None,
            published_year: None,
            description: None,
            cover_url: None,
        }
    }

    pub fn build_book(&self) -> Result<BookEntity, CommandError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CommandError::validation("book title must not be blank"));
        }
        let description = self.description.as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION);
        Ok(BookEntity {
            isbn: self.isbn.clone().unwrap_or_default(),
            published_year: self.published_year.unwrap_or_default(),
            description: description.to_string(),
            cover_url: self.cover_url.clone().unwrap_or_default(),
            ..BookEntity::new(title, self.author_id)
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = self.viewer_service.add_book(req.build_book()?).await;
        Ok(AddBookCommandResponse::new(book))
    }
}
