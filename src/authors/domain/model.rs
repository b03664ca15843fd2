use serde::{Deserialize, Serialize};
use crate::authors::domain::Author;
use crate::core::domain::Identifiable;

// AuthorEntity is an author of the catalog; the id stays empty until the author is appended
// to a working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl AuthorEntity {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

impl Identifiable for AuthorEntity {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(&self, id: i64) -> Self {
        Self { id: Some(id), name: self.name.to_string() }
    }
}

impl Author for AuthorEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}
