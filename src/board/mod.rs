//! Board reordering engine.
//!
//! Maintains an ordered collection of lists, each holding an ordered
//! collection of cards, and applies drag-and-drop moves and inline edits as
//! pure snapshot transitions. The module follows hexagonal architecture:
//!
//! - Domain types and transitions in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Gesture translation and the session holding the current snapshot in
//!   [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
