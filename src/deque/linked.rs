//! Locked Linked Deque Implementation
//!
//! A thread-safe double-ended queue backed by a doubly-linked list, with a
//! node-recycling pool that keeps sustained push/pop traffic off the
//! allocator.
//!
//! ## Design
//!
//! The deque is guarded by two independent locks:
//! - A reader-writer lock over the live list (front/back pointers, linkage,
//!   length). Reads (`is_empty`, `len`, peeks) take it shared; mutations
//!   (pushes, pops) take it exclusively.
//! - A mutex over the free list of retired nodes, held only for the pointer
//!   swap in `acquire`/`release`.
//!
//! ## Lock Ordering
//!
//! The two locks are never held at the same time. A push acquires its node
//! from the pool *before* taking the live-list lock; a pop releases the node
//! to the pool *after* dropping it. This rule is what makes concurrent pops
//! from both ends deadlock-free, and every mutation in this file is written
//! so that the pool guard's lifetime cannot overlap a live-list guard.
//!
//! ## Representation
//!
//! `front` and `back` are `None` only when the deque is empty; at length 1
//! they point at the same node. Length is tracked explicitly rather than
//! inferred from null links.
//!
//! ## Example
//!
//! ```rust
//! use duplexq::deque::Deque;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let deque = Arc::new(Deque::new());
//!
//! let producer = thread::spawn({
//!     let deque = Arc::clone(&deque);
//!     move || {
//!         for i in 0..100 {
//!             deque.push_back(i);
//!         }
//!     }
//! });
//!
//! let consumer = thread::spawn({
//!     let deque = Arc::clone(&deque);
//!     move || {
//!         let mut received = 0;
//!         while received < 100 {
//!             if deque.pop_front().is_some() {
//!                 received += 1;
//!             }
//!         }
//!     }
//! });
//!
//! producer.join().unwrap();
//! consumer.join().unwrap();
//! assert!(deque.is_empty());
//! ```

use crate::deque::pool::{FreeList, Link, Node};
use crate::metrics::{AtomicMetrics, MetricsCollector, PerformanceMetrics, PoolStats};
use crate::{Error, Result};
use core::ptr::NonNull;
use parking_lot::{Mutex, RwLock};
use std::time::Instant;

/// The live doubly-linked chain: front/back pointers and an explicit length
///
/// Invariants maintained by every completed mutation:
/// - `front.is_none()` iff `back.is_none()` iff `len == 0`
/// - `len == 1` implies `front == back`
/// - for any node N, `N.prev` and `N.next` are mutually consistent
struct LiveList<T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
}

impl<T> LiveList<T> {
    fn new() -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
        }
    }

    /// Link an acquired node in front of the current front
    fn link_front(&mut self, mut node: NonNull<Node<T>>) {
        match self.front {
            None => {
                self.front = Some(node);
                self.back = Some(node);
            }
            Some(mut old_front) => unsafe {
                node.as_mut().next = Some(old_front);
                old_front.as_mut().prev = Some(node);
                self.front = Some(node);
            },
        }
        self.len += 1;
    }

    /// Link an acquired node after the current back
    fn link_back(&mut self, mut node: NonNull<Node<T>>) {
        match self.back {
            None => {
                self.front = Some(node);
                self.back = Some(node);
            }
            Some(mut old_back) => unsafe {
                node.as_mut().prev = Some(old_back);
                old_back.as_mut().next = Some(node);
                self.back = Some(node);
            },
        }
        self.len += 1;
    }

    /// Unlink and return the front node, if any
    fn unlink_front(&mut self) -> Link<T> {
        let mut node = self.front?;
        unsafe {
            self.front = node.as_mut().next.take();
            match self.front {
                Some(mut new_front) => new_front.as_mut().prev = None,
                None => self.back = None,
            }
        }
        self.len -= 1;
        debug_assert!(self.len != 1 || self.front == self.back);
        Some(node)
    }

    /// Unlink and return the back node, if any
    fn unlink_back(&mut self) -> Link<T> {
        let mut node = self.back?;
        unsafe {
            self.back = node.as_mut().prev.take();
            match self.back {
                Some(mut new_back) => new_back.as_mut().next = None,
                None => self.front = None,
            }
        }
        self.len -= 1;
        debug_assert!(self.len != 1 || self.front == self.back);
        Some(node)
    }

    /// Count nodes by walking the chain from the front
    fn count(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.front;
        while let Some(node) = cursor {
            count += 1;
            cursor = unsafe { node.as_ref().next };
        }
        count
    }
}

/// A thread-safe double-ended queue with node recycling
///
/// Every operation is callable through `&self` from any thread. Mutations
/// are atomic as observed from outside: readers either see the list before a
/// push/pop or after it, never mid-relink.
///
/// Nodes removed by `pop_front`/`pop_back` are parked on an internal free
/// list and reused by later pushes, so a deque that has reached its
/// high-water mark stops allocating (observable via [`pool_stats`]).
///
/// [`pool_stats`]: Deque::pool_stats
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the deque. Peeks additionally
///   require `T: Clone` because they hand out a copy, never a reference to
///   an internal node.
///
/// # Thread Safety
///
/// `Deque<T>` is `Sync` only for `T: Send + Sync` (the same bound as
/// `std::sync::RwLock`): peeks clone the stored value through a shared
/// reference, and the shared-mode live-list lock lets any number of reader
/// threads do so on the same node at once. Interior-mutable types that are
/// `Send` but not `Sync` can live in a deque owned by one thread, but the
/// deque cannot be shared:
///
/// ```compile_fail
/// use duplexq::deque::Deque;
/// use std::cell::Cell;
/// use std::sync::Arc;
/// use std::thread;
///
/// let deque: Arc<Deque<Cell<i32>>> = Arc::new(Deque::new());
/// let reader = thread::spawn({
///     let deque = Arc::clone(&deque);
///     move || deque.is_empty()
/// });
/// reader.join().unwrap();
/// ```
///
/// # Examples
///
/// ```rust
/// use duplexq::deque::Deque;
///
/// let deque = Deque::new();
///
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
///
/// assert_eq!(deque.peek_front(), Ok(0));
/// assert_eq!(deque.peek_back(), Ok(2));
/// assert_eq!(deque.pop_front(), Some(0));
/// assert_eq!(deque.pop_back(), Some(2));
/// assert_eq!(deque.pop_back(), Some(1));
/// assert_eq!(deque.pop_back(), None);
/// ```
#[derive(Debug)]
pub struct Deque<T> {
    /// The live list, shared for reads and exclusive for mutations
    live: RwLock<LiveList<T>>,
    /// Retired nodes awaiting reuse, behind their own lock
    pool: Mutex<FreeList<T>>,
    /// Performance metrics
    metrics: AtomicMetrics,
}

// Nodes are reachable only through the two locks, so moving the deque moves
// sole ownership of every value: `Send` needs only `T: Send`. Sharing it is
// stricter: peeks run `T::clone` against a shared reference into a node
// while the live-list lock is held in shared mode, so several threads can
// hold `&T` to the same value at once. That is the `RwLock` situation, and
// it takes the `RwLock` bound: `Sync` requires `T: Send + Sync`.
unsafe impl<T: Send> Send for Deque<T> {}
unsafe impl<T: Send + Sync> Sync for Deque<T> {}

impl<T> Deque<T> {
    /// Create a new empty deque
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque: Deque<i32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            live: RwLock::new(LiveList::new()),
            pool: Mutex::new(FreeList::new()),
            metrics: AtomicMetrics::default(),
        }
    }

    /// Check if the deque is empty
    ///
    /// Takes the live-list lock in shared mode, so concurrent readers never
    /// block each other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_back(42);
    /// assert!(!deque.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        let live = self.live.read();
        debug_assert_eq!(live.front.is_none(), live.len == 0);
        live.front.is_none()
    }

    /// Get the number of elements in the deque
    ///
    /// Walks the full chain under the shared lock, so this is O(n); prefer
    /// [`is_empty`](Deque::is_empty) for emptiness checks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        let live = self.live.read();
        let count = live.count();
        debug_assert_eq!(count, live.len);
        count
    }

    /// Get the front element without removing it
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - a clone of the front element
    /// * `Err(Error::Empty)` - the deque has no elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    /// use duplexq::Error;
    ///
    /// let deque = Deque::new();
    /// assert_eq!(deque.peek_front(), Err(Error::Empty));
    ///
    /// deque.push_front(7);
    /// assert_eq!(deque.peek_front(), Ok(7));
    /// assert_eq!(deque.len(), 1); // still there
    /// ```
    pub fn peek_front(&self) -> Result<T>
    where
        T: Clone,
    {
        let start = Instant::now();

        let live = self.live.read();
        let value = live.front.and_then(|node| unsafe { node.as_ref().value.clone() });
        drop(live);

        match value {
            Some(v) => {
                self.metrics.record_success(start.elapsed());
                Ok(v)
            }
            None => {
                self.metrics.record_failure();
                Err(Error::Empty)
            }
        }
    }

    /// Get the back element without removing it
    ///
    /// At length 1 the back pointer aliases the front node, so this returns
    /// the sole element.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - a clone of the back element
    /// * `Err(Error::Empty)` - the deque has no elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// deque.push_back(1);
    /// assert_eq!(deque.peek_back(), Ok(1));
    ///
    /// deque.push_back(2);
    /// assert_eq!(deque.peek_back(), Ok(2));
    /// ```
    pub fn peek_back(&self) -> Result<T>
    where
        T: Clone,
    {
        let start = Instant::now();

        let live = self.live.read();
        let value = live.back.and_then(|node| unsafe { node.as_ref().value.clone() });
        drop(live);

        match value {
            Some(v) => {
                self.metrics.record_success(start.elapsed());
                Ok(v)
            }
            None => {
                self.metrics.record_failure();
                Err(Error::Empty)
            }
        }
    }

    /// Push a value onto the front of the deque
    ///
    /// Never fails. The node is acquired from the recycling pool (or freshly
    /// allocated) before the live-list lock is taken.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// deque.push_front(2);
    /// deque.push_front(1);
    /// assert_eq!(deque.peek_front(), Ok(1));
    /// ```
    pub fn push_front(&self, value: T) {
        let start = Instant::now();

        let mut node = self.pool.lock().acquire();
        unsafe { node.as_mut().value = Some(value) };

        {
            let mut live = self.live.write();
            live.link_front(node);
        }

        self.metrics.record_success(start.elapsed());
    }

    /// Push a value onto the back of the deque
    ///
    /// Never fails. The node is acquired from the recycling pool (or freshly
    /// allocated) before the live-list lock is taken.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.peek_back(), Ok(2));
    /// ```
    pub fn push_back(&self, value: T) {
        let start = Instant::now();

        let mut node = self.pool.lock().acquire();
        unsafe { node.as_mut().value = Some(value) };

        {
            let mut live = self.live.write();
            live.link_back(node);
        }

        self.metrics.record_success(start.elapsed());
    }

    /// Pop the front element
    ///
    /// Popping an empty deque is a deliberate no-op, not an error; callers
    /// that need to distinguish should check the returned `Option`. The
    /// unlinked node is returned to the pool after the live-list lock has
    /// been dropped.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - the removed front element
    /// * `None` - the deque was empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// deque.push_back(1);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&self) -> Option<T> {
        let start = Instant::now();

        let mut live = self.live.write();
        let mut node = match live.unlink_front() {
            Some(node) => node,
            None => {
                drop(live);
                self.metrics.record_failure();
                return None;
            }
        };
        drop(live);

        let value = unsafe { node.as_mut().value.take() };
        self.pool.lock().release(node);

        self.metrics.record_success(start.elapsed());
        value
    }

    /// Pop the back element
    ///
    /// Popping an empty deque is a deliberate no-op, not an error. A pop
    /// that takes the deque from two elements to one leaves the front and
    /// back pointers aliased on the survivor.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - the removed back element
    /// * `None` - the deque was empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.pop_back(), Some(2));
    /// assert_eq!(deque.peek_front(), deque.peek_back());
    /// ```
    pub fn pop_back(&self) -> Option<T> {
        let start = Instant::now();

        let mut live = self.live.write();
        let mut node = match live.unlink_back() {
            Some(node) => node,
            None => {
                drop(live);
                self.metrics.record_failure();
                return None;
            }
        };
        drop(live);

        let value = unsafe { node.as_mut().value.take() };
        self.pool.lock().release(node);

        self.metrics.record_success(start.elapsed());
        value
    }

    /// Get a snapshot of the node pool's statistics
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplexq::deque::Deque;
    ///
    /// let deque = Deque::new();
    /// deque.push_back(1);
    /// deque.pop_front();
    /// deque.push_back(2);
    ///
    /// let stats = deque.pool_stats();
    /// assert_eq!(stats.nodes_allocated, 1);
    /// assert_eq!(stats.nodes_recycled, 1);
    /// ```
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.lock().stats()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        // Exclusive access through &mut self; free both chains.
        let live = self.live.get_mut();
        let mut cursor = live.front.take();
        live.back = None;
        live.len = 0;
        while let Some(node) = cursor {
            let boxed = unsafe { Box::from_raw(node.as_ptr()) };
            cursor = boxed.next;
        }

        let mut cursor = self.pool.get_mut().take_head();
        while let Some(node) = cursor {
            let boxed = unsafe { Box::from_raw(node.as_ptr()) };
            cursor = boxed.next;
        }
    }
}

impl<T> MetricsCollector for Deque<T> {
    fn metrics(&self) -> PerformanceMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset();
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.is_enabled()
    }
}

impl<T> core::fmt::Debug for LiveList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LiveList").field("len", &self.len).finish()
    }
}
