//! Port contracts for the board engine.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod snapshot_store;

pub use snapshot_store::{
    BoardSnapshotStore, BoardStoreError, BoardStoreResult, SnapshotRevision, StoredSnapshot,
};
