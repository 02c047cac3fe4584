//! Queue Module
//!
//! A FIFO queue projected onto a [`Deque`](crate::Deque): values enter at
//! the back and leave at the front.

pub mod deque_backed;

pub use self::deque_backed::Queue;

// Include test modules
#[cfg(test)]
mod tests;
