//! Adapter implementations for contact ports.

pub mod memory;
