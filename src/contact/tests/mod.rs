//! Unit tests for the contact directory.


use crate::contact::domain::{ContactId, ContactRecord, PersistedContactData};
use chrono::{DateTime, TimeZone, Utc};

/// Builds a stored contact created `minute` minutes past a fixed instant.
pub(super) fn contact(first: Option<&str>, last: Option<&str>, minute: u32) -> ContactRecord {
    ContactRecord::from_persisted(PersistedContactData {
        id: ContactId::new(),
        first: first.map(str::to_owned),
        last: last.map(str::to_owned),
        avatar: None,
        twitter: None,
        notes: None,
        favorite: false,
        created_at: at_minute(minute),
    })
}

fn at_minute(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, minute, 0)
        .single()
        .expect("valid timestamp")
}
