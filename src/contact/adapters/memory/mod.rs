//! In-memory contact adapters.

mod repository;

pub use repository::InMemoryContactRepository;
