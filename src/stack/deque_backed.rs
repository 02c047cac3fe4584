//! Deque-Backed Stack Implementation
//!
//! A thread-safe LIFO stack expressed entirely through the public contract
//! of [`Deque`]: `push` and `pop` both work the front end, so the most
//! recently pushed value is always the next one out. The adapter holds the
//! deque by value and never reaches into its internals, which keeps the
//! deque independently testable and the stack trivially correct.

use crate::deque::Deque;
use crate::metrics::{MetricsCollector, PerformanceMetrics};
use crate::Result;

/// A thread-safe LIFO stack
///
/// All operations are callable through `&self` from any thread; the
/// underlying deque's locking provides the synchronization.
///
/// Peeking an empty stack with [`top`](Stack::top) is an error; popping an
/// empty stack is a no-op that returns `None`.
///
/// # Examples
///
/// ```rust
/// use duplexq::stack::Stack;
///
/// let stack = Stack::new();
///
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.top(), Ok(3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug)]
pub struct Stack<T> {
    inner: Deque<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create a new empty stack
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::stack::Stack;
    ///
    /// let stack: Stack<i32> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Push a value onto the top of the stack
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::stack::Stack;
    ///
    /// let stack = Stack::new();
    /// stack.push(42);
    /// assert_eq!(stack.top(), Ok(42));
    /// ```
    pub fn push(&self, value: T) {
        self.inner.push_front(value);
    }

    /// Pop the top value off the stack
    ///
    /// Popping an empty stack is a no-op.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - the removed top element
    /// * `None` - the stack was empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::stack::Stack;
    ///
    /// let stack = Stack::new();
    /// stack.push(42);
    /// assert_eq!(stack.pop(), Some(42));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Get the top value without removing it
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - a clone of the top element
    /// * `Err(Error::Empty)` - the stack has no elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::stack::Stack;
    /// use duplexq::Error;
    ///
    /// let stack: Stack<i32> = Stack::new();
    /// assert_eq!(stack.top(), Err(Error::Empty));
    /// ```
    pub fn top(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.peek_front()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the number of elements on the stack
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> MetricsCollector for Stack<T> {
    fn metrics(&self) -> PerformanceMetrics {
        self.inner.metrics()
    }

    fn reset_metrics(&self) {
        self.inner.reset_metrics();
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.inner.set_metrics_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.inner.is_metrics_enabled()
    }
}
