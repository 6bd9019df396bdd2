//! Application services for the board engine.

pub mod drag;
mod session;

pub use drag::{DragAdapter, DragCommand, DragError, DragGesture, DragKind, DropLocation};
pub use session::{BoardSession, BoardSessionError, BoardSessionResult};
