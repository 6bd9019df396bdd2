//! In-memory contact repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::contact::{
    domain::{ContactId, ContactRecord},
    ports::{ContactRepository, ContactRepositoryError, ContactRepositoryResult},
};

/// Thread-safe in-memory contact repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    state: Arc<RwLock<HashMap<ContactId, ContactRecord>>>,
}

impl InMemoryContactRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> ContactRepositoryError {
    ContactRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn store(&self, contact: &ContactRecord) -> ContactRepositoryResult<()> {
        let mut contacts = self.state.write().map_err(poisoned)?;
        if contacts.contains_key(&contact.id()) {
            return Err(ContactRepositoryError::DuplicateContact(contact.id()));
        }
        contacts.insert(contact.id(), contact.clone());
        Ok(())
    }

    async fn update(&self, contact: &ContactRecord) -> ContactRepositoryResult<()> {
        let mut contacts = self.state.write().map_err(poisoned)?;
        let slot = contacts
            .get_mut(&contact.id())
            .ok_or(ContactRepositoryError::NotFound(contact.id()))?;
        *slot = contact.clone();
        Ok(())
    }

    async fn delete(&self, id: ContactId) -> ContactRepositoryResult<()> {
        let mut contacts = self.state.write().map_err(poisoned)?;
        contacts
            .remove(&id)
            .map(|_| ())
            .ok_or(ContactRepositoryError::NotFound(id))
    }

    async fn find_by_id(&self, id: ContactId) -> ContactRepositoryResult<Option<ContactRecord>> {
        let contacts = self.state.read().map_err(poisoned)?;
        Ok(contacts.get(&id).cloned())
    }

    async fn search(&self, query: Option<&str>) -> ContactRepositoryResult<Vec<ContactRecord>> {
        let contacts = self.state.read().map_err(poisoned)?;
        let needle = query.unwrap_or_default();
        Ok(contacts
            .values()
            .filter(|contact| contact.matches_query(needle))
            .cloned()
            .collect())
    }
}
