//! Port contracts for the contact directory.

pub mod repository;

pub use repository::{ContactRepository, ContactRepositoryError, ContactRepositoryResult};
