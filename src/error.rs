//! Error type for byte-granular deque operations.

use thiserror::Error;

/// Why a push, pop or peek was rejected.
///
/// A rejected call leaves both the deque and the caller's output untouched, so
/// the same call may simply be retried once the condition clears.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A push was attempted while every slot was occupied.
    #[error("deque is full")]
    Overflow,

    /// A pop or peek was attempted on an empty deque.
    #[error("deque is empty")]
    Underflow,
}
