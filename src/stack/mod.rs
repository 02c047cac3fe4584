//! Stack Module
//!
//! A LIFO stack projected onto the front of a [`Deque`](crate::Deque).

pub mod deque_backed;

pub use self::deque_backed::Stack;
