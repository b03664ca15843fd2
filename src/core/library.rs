use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{message} {reason_code:?} {retryable}")]
    Remote {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    // The remote lookup is reachable in principle but cannot answer right now (timeouts,
    // connection resets, throttling). Callers may retry with a newer request.
    #[error("{message} {reason_code:?} {retryable}")]
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message} {reason_code:?}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn remote(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Remote { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    // maps an http status of the remote lookup into the error taxonomy
    pub fn from_status(message: &str, status: u16) -> CatalogError {
        let reason = Some(status.to_string());
        match status {
            404 => CatalogError::not_found(
                format!("not found error {:?} {:?}", message, reason).as_str()),
            429 | 502 | 503 | 504 => CatalogError::unavailable(
                format!("remote unavailable error {:?} {:?}", message, reason).as_str(), reason, true),
            _ => CatalogError::remote(
                format!("remote error {:?} {:?}", message, reason).as_str(), reason, false),
        }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Remote { retryable, .. } => { *retryable }
            CatalogError::NotFound { .. } => { false }
            CatalogError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            CatalogError::Validation { .. } => { false }
            CatalogError::Serialization { .. } => { false }
            CatalogError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::runtime(
            format!("serde io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

/// A specialized Result type for the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

// ActiveTab is the view currently selected in the viewer
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveTab {
    Books,
    Authors,
    AddAuthor,
    AddBook,
}

impl Display for ActiveTab {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ActiveTab::Books => write!(f, "books"),
            ActiveTab::Authors => write!(f, "authors"),
            ActiveTab::AddAuthor => write!(f, "add-author"),
            ActiveTab::AddBook => write!(f, "add-book"),
        }
    }
}

// SearchMode decides where book searches over the threshold are answered
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Remote,
    Local,
}

impl From<String> for SearchMode {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "local" => SearchMode::Local,
            _ => SearchMode::Remote,
        }
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchMode::Remote => write!(f, "remote"),
            SearchMode::Local => write!(f, "local"),
        }
    }
}
