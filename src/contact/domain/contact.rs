//! Contact record and partial updates.

use super::ContactId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Label shown in the sidebar for contacts without a name.
pub const UNNAMED_CONTACT_LABEL: &str = "No Name";

/// A contact as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    id: ContactId,
    first: Option<String>,
    last: Option<String>,
    avatar: Option<String>,
    twitter: Option<String>,
    notes: Option<String>,
    favorite: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedContactData {
    /// Persisted identifier.
    pub id: ContactId,
    /// First name.
    pub first: Option<String>,
    /// Last name.
    pub last: Option<String>,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// Twitter handle.
    pub twitter: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Whether the contact is starred.
    pub favorite: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Creates an empty contact stamped with the current time.
    #[must_use]
    pub fn new_empty(clock: &impl Clock) -> Self {
        Self {
            id: ContactId::new(),
            first: None,
            last: None,
            avatar: None,
            twitter: None,
            notes: None,
            favorite: false,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a contact from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedContactData) -> Self {
        Self {
            id: data.id,
            first: data.first,
            last: data.last,
            avatar: data.avatar,
            twitter: data.twitter,
            notes: data.notes,
            favorite: data.favorite,
            created_at: data.created_at,
        }
    }

    /// Returns the contact identifier.
    #[must_use]
    pub const fn id(&self) -> ContactId {
        self.id
    }

    /// Returns the first name, if set.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    /// Returns the last name, if set.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Returns the avatar URL, if set.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Returns the Twitter handle, if set.
    #[must_use]
    pub fn twitter(&self) -> Option<&str> {
        self.twitter.as_deref()
    }

    /// Returns the notes, if set.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns whether the contact is starred.
    #[must_use]
    pub const fn favorite(&self) -> bool {
        self.favorite
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns "first last", or `None` when both names are unset.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let name = [self.first(), self.last()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }

    /// Returns `true` if `query` occurs in the first or last name, ignoring
    /// case. A blank query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [self.first(), self.last()]
            .into_iter()
            .flatten()
            .any(|name| name.to_lowercase().contains(&needle))
    }

    /// Applies a partial update; fields absent from `update` are kept.
    pub fn apply(&mut self, update: ContactUpdate) {
        let ContactUpdate {
            first,
            last,
            avatar,
            twitter,
            notes,
            favorite,
        } = update;
        replace_field(&mut self.first, first);
        replace_field(&mut self.last, last);
        replace_field(&mut self.avatar, avatar);
        replace_field(&mut self.twitter, twitter);
        replace_field(&mut self.notes, notes);
        if let Some(value) = favorite {
            self.favorite = value;
        }
    }
}

/// Partial update for a contact.
///
/// Each `Some` field replaces the stored value; a blank string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    first: Option<String>,
    last: Option<String>,
    avatar: Option<String>,
    twitter: Option<String>,
    notes: Option<String>,
    favorite: Option<bool>,
}

impl ContactUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name.
    #[must_use]
    pub fn with_first(mut self, first: impl Into<String>) -> Self {
        self.first = Some(first.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn with_last(mut self, last: impl Into<String>) -> Self {
        self.last = Some(last.into());
        self
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Sets the Twitter handle.
    #[must_use]
    pub fn with_twitter(mut self, twitter: impl Into<String>) -> Self {
        self.twitter = Some(twitter.into());
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the favorite flag.
    #[must_use]
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }
}

fn replace_field(field: &mut Option<String>, value: Option<String>) {
    if let Some(raw) = value {
        let trimmed = raw.trim();
        *field = (!trimmed.is_empty()).then(|| trimmed.to_owned());
    }
}
