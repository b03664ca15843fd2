use crate::core::domain::Identifiable;

pub mod model;

// authorId carried by books that came from an external source and have no local author
pub const UNLINKED_AUTHOR_ID: i64 = 9999;

pub const NO_DESCRIPTION: &str = "No description available.";

pub trait Book: Identifiable {
    fn author_id(&self) -> i64;
}
