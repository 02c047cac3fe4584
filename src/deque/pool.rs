//! Node-Recycling Free List
//!
//! Nodes popped from the live list are not freed. They are parked on a
//! singly-linked free list and handed back out on the next push, so a deque
//! under sustained push/pop churn stops touching the allocator entirely.
//!
//! The free list does no locking of its own; the owning [`Deque`] wraps it in
//! a `parking_lot::Mutex` that is held only for the pointer swap and never
//! together with the live-list lock.
//!
//! [`Deque`]: crate::Deque

use crate::metrics::PoolStats;
use core::ptr::NonNull;

/// Shorthand for an optional node pointer
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// One cell of the doubly-linked live list
///
/// A node is owned by exactly one of two structures at any time: the live
/// list (value present, `retired` false) or the free list (value cleared,
/// `retired` true, linked through `next` only). It is only deallocated when
/// the container itself is dropped.
pub(crate) struct Node<T> {
    /// Stored value; `None` while the node is parked on the free list
    pub(crate) value: Option<T>,
    /// Pointer to the neighboring node toward the front
    pub(crate) prev: Link<T>,
    /// Pointer to the neighboring node toward the back
    pub(crate) next: Link<T>,
    /// Set while the node is parked on the free list
    pub(crate) retired: bool,
}

impl<T> Node<T> {
    fn empty() -> Self {
        Self {
            value: None,
            prev: None,
            next: None,
            retired: false,
        }
    }
}

/// A singly-linked stack of retired nodes
///
/// `acquire` never fails: when the stack is empty it falls back to a fresh
/// heap allocation. `allocated` and `recycled` feed [`PoolStats`].
pub(crate) struct FreeList<T> {
    head: Link<T>,
    free_len: usize,
    allocated: usize,
    recycled: usize,
}

impl<T> core::fmt::Debug for FreeList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FreeList")
            .field("free_len", &self.free_len)
            .field("allocated", &self.allocated)
            .field("recycled", &self.recycled)
            .finish()
    }
}

impl<T> FreeList<T> {
    pub(crate) fn new() -> Self {
        Self {
            head: None,
            free_len: 0,
            allocated: 0,
            recycled: 0,
        }
    }

    /// Pop a retired node, or allocate a fresh one if none is parked
    ///
    /// The returned node has both links cleared, no value, and is no longer
    /// marked retired. The caller must link it into the live list or hand it
    /// back through [`release`](Self::release); until then it owns the node.
    pub(crate) fn acquire(&mut self) -> NonNull<Node<T>> {
        match self.head {
            Some(mut head) => {
                let node = unsafe { head.as_mut() };
                debug_assert!(node.retired, "free list held a live node");
                self.head = node.next.take();
                node.prev = None;
                node.retired = false;
                self.free_len -= 1;
                self.recycled += 1;
                head
            }
            None => {
                self.allocated += 1;
                unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(Node::empty()))) }
            }
        }
    }

    /// Park an unlinked node on the free list
    ///
    /// The node must already be unlinked from the live list and have had its
    /// value taken out; both are cleared again here so a stale link can never
    /// bridge the two structures.
    pub(crate) fn release(&mut self, mut node: NonNull<Node<T>>) {
        let n = unsafe { node.as_mut() };
        debug_assert!(!n.retired, "node released twice");
        n.value = None;
        n.prev = None;
        n.retired = true;
        n.next = self.head.take();
        self.head = Some(node);
        self.free_len += 1;
    }

    pub(crate) fn stats(&self) -> PoolStats {
        PoolStats {
            nodes_allocated: self.allocated,
            nodes_recycled: self.recycled,
            free_len: self.free_len,
        }
    }

    /// Take the head of the free chain, leaving the list empty
    ///
    /// Used by the container's `Drop` to walk and deallocate the chain.
    pub(crate) fn take_head(&mut self) -> Link<T> {
        self.free_len = 0;
        self.head.take()
    }
}
