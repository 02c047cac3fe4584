//! Deque-Backed Queue Implementation
//!
//! A thread-safe FIFO queue expressed entirely through the public contract
//! of [`Deque`]. Enqueue and dequeue use opposite ends (`push_back` /
//! `pop_front`), which is what makes the ordering first-in-first-out. The
//! adapter holds the deque by value and never reaches into its internals.

use crate::deque::Deque;
use crate::metrics::{MetricsCollector, PerformanceMetrics};
use crate::Result;

/// A thread-safe FIFO queue
///
/// All operations are callable through `&self` from any thread; the
/// underlying deque's locking provides the synchronization.
///
/// Peeking an empty queue with [`front`](Queue::front) or
/// [`back`](Queue::back) is an error; popping an empty queue is a no-op
/// that returns `None`.
///
/// # Examples
///
/// ```rust
/// use duplexq::queue::Queue;
///
/// let queue = Queue::new();
///
/// queue.push(1);
/// queue.push(2);
/// queue.push(3);
///
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    inner: Deque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create a new empty queue
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::queue::Queue;
    ///
    /// let queue: Queue<i32> = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Enqueue a value at the back of the queue
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::queue::Queue;
    ///
    /// let queue = Queue::new();
    /// queue.push(42);
    /// assert_eq!(queue.front(), Ok(42));
    /// ```
    pub fn push(&self, value: T) {
        self.inner.push_back(value);
    }

    /// Dequeue the value at the front of the queue
    ///
    /// Popping an empty queue is a no-op.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - the removed front element
    /// * `None` - the queue was empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::queue::Queue;
    ///
    /// let queue = Queue::new();
    /// queue.push(42);
    /// assert_eq!(queue.pop(), Some(42));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Get the front element (next to be dequeued) without removing it
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - a clone of the front element
    /// * `Err(Error::Empty)` - the queue has no elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::queue::Queue;
    /// use duplexq::Error;
    ///
    /// let queue: Queue<i32> = Queue::new();
    /// assert_eq!(queue.front(), Err(Error::Empty));
    /// ```
    pub fn front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.peek_front()
    }

    /// Get the back element (most recently enqueued) without removing it
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - a clone of the back element
    /// * `Err(Error::Empty)` - the queue has no elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::queue::Queue;
    ///
    /// let queue = Queue::new();
    /// queue.push(1);
    /// queue.push(2);
    /// assert_eq!(queue.back(), Ok(2));
    /// ```
    pub fn back(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.peek_back()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the number of elements in the queue
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> MetricsCollector for Queue<T> {
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
