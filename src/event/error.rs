//! Motion event construction and mutation errors

use thiserror::Error;

/// Errors raised when a motion event is built or mutated inconsistently.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("motion event requires at least one pointer")]
    NoPointers,

    #[error("sample carries {got} coordinate records but the event has {expected} pointers")]
    PointerCountMismatch { expected: usize, got: usize },
}
