//! Trellis: kanban board engine with a contact directory.
//!
//! This crate provides the state model behind a drag-and-drop task board:
//! ordered lists of cards, pure snapshot transitions for edits and moves,
//! translation of raw drag gestures into moves, and a session that commits
//! snapshots one at a time. A small contact directory sits alongside it.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`board`]: Board snapshots, moves, drag gestures and sessions
//! - [`contact`]: Contact records, search and sidebar listing

pub mod board;
pub mod contact;
