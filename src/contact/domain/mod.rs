//! Domain model for the contact directory.

mod contact;
mod error;
mod ids;

pub use contact::{ContactRecord, ContactUpdate, PersistedContactData, UNNAMED_CONTACT_LABEL};
pub use error::ParseContactIdError;
pub use ids::ContactId;
