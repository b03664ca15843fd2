use serde::{Deserialize, Serialize};
use crate::books::domain::{Book, NO_DESCRIPTION};
use crate::core::domain::Identifiable;

// BookEntity is a book record of the catalog, either seeded, added during the session, or mapped
// from a remote search result. The id stays empty until the record is appended to a working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author_id: i64,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub published_year: i32,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub cover_url: String,
}

fn default_description() -> String {
    NO_DESCRIPTION.to_string()
}

impl BookEntity {
    pub fn new(title: &str, author_id: i64) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            author_id,
            isbn: String::new(),
            published_year: 0,
            description: default_description(),
            cover_url: String::new(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(&self, id: i64) -> Self {
        Self { id: Some(id), ..self.clone() }
    }
}

impl Book for BookEntity {
    fn author_id(&self) -> i64 {
        self.author_id
    }
}
