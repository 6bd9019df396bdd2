//! Application services for the contact directory.

mod directory;

pub use directory::{
    ContactDirectoryError, ContactDirectoryResult, ContactDirectoryService, SidebarEntry,
};
