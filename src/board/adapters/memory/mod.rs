//! In-memory adapters for tests and single-page embedding.

mod snapshot_store;

pub use snapshot_store::InMemoryBoardSnapshotStore;
