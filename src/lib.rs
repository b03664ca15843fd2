pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
    pub mod seed;
}

pub mod utils {
    pub mod date;
    pub mod logging;
    #[cfg(test)]
    pub mod testing;
}

pub mod authors;
pub mod books;
pub mod catalog;
pub mod gateway;
pub mod viewer;
