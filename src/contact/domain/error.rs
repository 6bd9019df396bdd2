//! Error types for contact domain parsing.

use thiserror::Error;

/// Error returned while parsing a contact identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid contact identifier: {0}")]
pub struct ParseContactIdError(pub String);
