//! Service layer for creating, editing and listing contacts.

use crate::contact::{
    domain::{ContactId, ContactRecord, ContactUpdate, UNNAMED_CONTACT_LABEL},
    ports::{ContactRepository, ContactRepositoryError},
};
use mockable::Clock;
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for contact directory operations.
#[derive(Debug, Error)]
pub enum ContactDirectoryError {
    /// The contact does not exist.
    #[error("contact not found: {0}")]
    NotFound(ContactId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ContactRepositoryError),
}

/// Result type for contact directory operations.
pub type ContactDirectoryResult<T> = Result<T, ContactDirectoryError>;

/// One row of the contact sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Contact the row links to.
    pub id: ContactId,
    /// Display name, or the unnamed placeholder.
    pub label: String,
    /// Whether the row shows a star.
    pub favorite: bool,
}

impl SidebarEntry {
    fn from_contact(contact: &ContactRecord) -> Self {
        Self {
            id: contact.id(),
            label: contact
                .display_name()
                .unwrap_or_else(|| UNNAMED_CONTACT_LABEL.to_owned()),
            favorite: contact.favorite(),
        }
    }
}

/// Contact directory orchestration service.
#[derive(Clone)]
pub struct ContactDirectoryService<R, C>
where
    R: ContactRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ContactDirectoryService<R, C>
where
    R: ContactRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new contact directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists contacts matching `query`, sorted by last name then creation
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDirectoryError::Repository`] when the search fails.
    pub async fn list(&self, query: Option<&str>) -> ContactDirectoryResult<Vec<ContactRecord>> {
        let mut contacts = self.repository.search(query).await?;
        contacts.sort_by(compare_for_listing);
        debug!(query = query.unwrap_or_default(), count = contacts.len(), "listed contacts");
        Ok(contacts)
    }

    /// Lists sidebar rows for contacts matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDirectoryError::Repository`] when the search fails.
    pub async fn sidebar(&self, query: Option<&str>) -> ContactDirectoryResult<Vec<SidebarEntry>> {
        let contacts = self.list(query).await?;
        Ok(contacts.iter().map(SidebarEntry::from_contact).collect())
    }

    /// Creates and stores an empty contact.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDirectoryError::Repository`] when persistence fails.
    pub async fn create_empty(&self) -> ContactDirectoryResult<ContactRecord> {
        let contact = ContactRecord::new_empty(&*self.clock);
        self.repository.store(&contact).await?;
        debug!(contact = %contact.id(), "created contact");
        Ok(contact)
    }

    /// Finds a contact by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDirectoryError::NotFound`] when the contact does not
    /// exist.
    pub async fn find(&self, id: ContactId) -> ContactDirectoryResult<ContactRecord> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ContactDirectoryError::NotFound(id))
    }

    /// Applies a partial update to a contact and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDirectoryError::NotFound`] when the contact does not
    /// exist, or [`ContactDirectoryError::Repository`] when persistence
    /// fails.
    pub async fn update(
        &self,
        id: ContactId,
        update: ContactUpdate,
    ) -> ContactDirectoryResult<ContactRecord> {
        let mut contact = self.find(id).await?;
        contact.apply(update);
        self.repository.update(&contact).await?;
        debug!(contact = %id, "updated contact");
        Ok(contact)
    }

    /// Sets or clears the favorite star.
    ///
    /// # Errors
    ///
    /// See [`Self::update`].
    pub async fn set_favorite(
        &self,
        id: ContactId,
        favorite: bool,
    ) -> ContactDirectoryResult<ContactRecord> {
        self.update(id, ContactUpdate::new().with_favorite(favorite))
            .await
    }

    /// Deletes a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDirectoryError::NotFound`] when the contact does not
    /// exist.
    pub async fn delete(&self, id: ContactId) -> ContactDirectoryResult<()> {
        self.repository.delete(id).await.map_err(|err| match err {
            ContactRepositoryError::NotFound(missing) => ContactDirectoryError::NotFound(missing),
            other => ContactDirectoryError::Repository(other),
        })?;
        debug!(contact = %id, "deleted contact");
        Ok(())
    }
}

/// Orders by last name ignoring case, unnamed last, then by creation time.
fn compare_for_listing(left: &ContactRecord, right: &ContactRecord) -> Ordering {
    let key = |contact: &ContactRecord| contact.last().map(str::to_lowercase);
    match (key(left), key(right)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| left.created_at().cmp(&right.created_at()))
}
