//! Deque (double-ended queue) implementation
//!
//! This module provides a locked, node-recycling deque that serves as the
//! foundation for the [`Stack`](crate::Stack) and [`Queue`](crate::Queue)
//! adapters.
//!
//! ## Design Points
//!
//! - **Two-lock discipline**: one reader-writer lock for the live list, one
//!   mutex for the pool of retired nodes, never held together
//! - **Node recycling**: popped nodes go back into a free list and are
//!   reused by later pushes instead of being freed
//! - **Loud peeks, quiet pops**: peeking an empty deque is an error, popping
//!   one is a no-op

pub mod linked;
mod pool;

pub use self::linked::Deque;


#[cfg(test)]
mod proptests;
