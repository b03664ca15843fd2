use serde::Deserialize;
use crate::books::domain::{NO_DESCRIPTION, UNLINKED_AUTHOR_ID};
use crate::books::domain::model::BookEntity;
use crate::utils::date::published_year;

// VolumesResponse is the body of a volumes query; `items` is absent when nothing matched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Maps a remote volume into the local book shape.
///
/// Remote books are never linked to a local author, so `author_id` is always
/// [`UNLINKED_AUTHOR_ID`]. The ISBN is the first identifier whose type mentions `ISBN`.
pub fn transform_google_book(volume: &Volume) -> BookEntity {
    let info = &volume.volume_info;
    let isbn = info.industry_identifiers.iter()
        .flatten()
        .find(|id| id.kind.contains("ISBN"))
        .map(|id| id.identifier.to_string())
        .unwrap_or_default();
    BookEntity {
        id: None,
        title: info.title.to_string(),
        author_id: UNLINKED_AUTHOR_ID,
        isbn,
        published_year: published_year(info.published_date.as_deref()),
        description: info.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        cover_url: info.image_links.as_ref()
            .and_then(|links| links.thumbnail.clone())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::{NO_DESCRIPTION, UNLINKED_AUTHOR_ID};
    use crate::gateway::google::model::{transform_google_book, Volume, VolumesResponse};

    #[tokio::test]
    async fn test_should_transform_full_volume() {
        let volume: Volume = serde_json::from_str(r#"{
            "id": "abc",
            "volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "publishedDate": "2001-05-01",
                "description": "Spice.",
                "industryIdentifiers": [{"type": "ISBN_13", "identifier": "123"}],
                "imageLinks": {"thumbnail": "http://img/dune.jpg"}
            }
        }"#).expect("parse volume");
        let book = transform_google_book(&volume);
        assert_eq!(None, book.id);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("123", book.isbn.as_str());
        assert_eq!(2001, book.published_year);
        assert_eq!(UNLINKED_AUTHOR_ID, book.author_id);
        assert_eq!("Spice.", book.description.as_str());
        assert_eq!("http://img/dune.jpg", book.cover_url.as_str());
    }

    #[tokio::test]
    async fn test_should_transform_sparse_volume() {
        let volume: Volume = serde_json::from_str(r#"{"volumeInfo": {"title": "Untitled"}}"#).expect("parse volume");
        let book = transform_google_book(&volume);
        assert_eq!("", book.isbn.as_str());
        assert_eq!(0, book.published_year);
        assert_eq!(NO_DESCRIPTION, book.description.as_str());
        assert_eq!("", book.cover_url.as_str());
        assert_eq!(UNLINKED_AUTHOR_ID, book.author_id);
    }

    #[tokio::test]
    async fn test_should_pick_first_isbn_identifier() {
        let volume: Volume = serde_json::from_str(r#"{"volumeInfo": {
            "title": "t",
            "industryIdentifiers": [
                {"type": "OTHER", "identifier": "OCLC:1"},
                {"type": "ISBN_10", "identifier": "0441172717"},
                {"type": "ISBN_13", "identifier": "9780441172719"}
            ]
        }}"#).expect("parse volume");
        assert_eq!("0441172717", transform_google_book(&volume).isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_parse_response_without_items() {
        let res: VolumesResponse = serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#).expect("parse response");
        assert!(res.items.is_empty());
    }
}
