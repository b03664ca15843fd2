use crate::core::domain::Identifiable;

pub mod model;

pub trait Author: Identifiable {
    fn name(&self) -> &str;

    // case-insensitive substring match; an empty term matches every author
    fn name_contains(&self, term: &str) -> bool {
        self.name().to_lowercase().contains(term.to_lowercase().as_str())
    }
}
