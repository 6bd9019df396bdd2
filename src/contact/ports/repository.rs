//! Repository port for the contact record store.

use crate::contact::domain::{ContactId, ContactRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for contact repository operations.
pub type ContactRepositoryResult<T> = Result<T, ContactRepositoryError>;

/// Key-value record store holding contacts.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores a new contact.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError::DuplicateContact`] when the
    /// identifier already exists.
    async fn store(&self, contact: &ContactRecord) -> ContactRepositoryResult<()>;

    /// Replaces an existing contact.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError::NotFound`] when the contact does not
    /// exist.
    async fn update(&self, contact: &ContactRecord) -> ContactRepositoryResult<()>;

    /// Removes a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError::NotFound`] when the contact does not
    /// exist.
    async fn delete(&self, id: ContactId) -> ContactRepositoryResult<()>;

    /// Finds a contact by identifier.
    ///
    /// Returns `None` when the contact does not exist.
    async fn find_by_id(&self, id: ContactId) -> ContactRepositoryResult<Option<ContactRecord>>;

    /// Returns contacts whose first or last name contains `query`, ignoring
    /// case, or every contact when `query` is `None` or blank.
    ///
    /// No ordering is guaranteed.
    async fn search(&self, query: Option<&str>) -> ContactRepositoryResult<Vec<ContactRecord>>;
}

/// Errors returned by contact repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ContactRepositoryError {
    /// A contact with the same identifier already exists.
    #[error("duplicate contact identifier: {0}")]
    DuplicateContact(ContactId),

    /// The contact was not found.
    #[error("contact not found: {0}")]
    NotFound(ContactId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContactRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
