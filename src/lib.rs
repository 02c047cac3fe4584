//! # duplexq
//!
//! Thread-safe deque, stack, and queue built on a node-recycling doubly-linked list.
//!
//! ## Features
//!
//! - **Deque**: double-ended queue guarded by a reader-writer lock
//! - **Stack**: LIFO adapter over the deque
//! - **Queue**: FIFO adapter over the deque
//! - **Node pool**: popped nodes are recycled through a free list instead of
//!   being freed, so sustained push/pop churn settles into zero allocation
//!
//! ## Philosophy
//!
//! duplexq favors a simple, auditable locking design over lock-freedom:
//! - Reads (`is_empty`, `len`, peeks) share the live-list lock
//! - Mutations take it exclusively, so no caller ever observes a
//!   partially-linked list
//! - The node pool has its own lock, never held together with the live-list
//!   lock, so retiring a node cannot deadlock against concurrent pushes
//!
//! ## Quick Start
//!
//! ```rust
//! use duplexq::queue::Queue;
//!
//! let queue = Queue::new();
//! queue.push(42);
//! assert_eq!(queue.pop(), Some(42));
//! ```
//!
//! ## Thread Safety
//!
//! All containers in duplexq can be shared across threads behind an `Arc`
//! without additional synchronization, under the usual `RwLock` bound: the
//! element type must be `Send + Sync`, because peeks clone values through a
//! shared reference from whichever threads are reading. Values are always
//! moved or cloned out; no internal node handle is ever exposed.
//!
//! ## Error Handling
//!
//! There is exactly one error condition: asking a value-returning peek
//! (`peek_front`, `peek_back`, stack `top`, queue `front`/`back`) for an
//! element of an empty container yields [`Error::Empty`]. Pops never fail;
//! popping an empty container is a no-op that returns `None`.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod deque;
pub mod metrics;
pub mod queue;
pub mod stack;

pub use crate::deque::Deque;
pub use crate::queue::Queue;
pub use crate::stack::Stack;

/// Error type for duplexq operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A value-returning operation was attempted on an empty container
    Empty,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Empty => write!(f, "Container is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for duplexq operations
pub type Result<T> = core::result::Result<T, Error>;
