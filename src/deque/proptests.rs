//! Property-based tests for the deque core using proptest
//!
//! Randomized operation sequences are replayed against `VecDeque` as a
//! reference model; the two must agree on every returned value and on the
//! final contents.

use crate::deque::Deque;
use crate::Error;
use proptest::prelude::*;
use std::collections::VecDeque;

/// One deque operation, as generated by proptest
#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    PeekFront,
    PeekBack,
    Len,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
        Just(Op::PeekFront),
        Just(Op::PeekBack),
        Just(Op::Len),
    ]
}

proptest! {
    #[test]
    fn test_matches_vecdeque_model(ops in prop::collection::vec(op_strategy(), 1..200)) {
        let deque: Deque<i32> = Deque::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    deque.push_front(v);
                    model.push_front(v);
                }
                Op::PushBack(v) => {
                    deque.push_back(v);
                    model.push_back(v);
                }
                Op::PopFront => {
                    prop_assert_eq!(deque.pop_front(), model.pop_front());
                }
                Op::PopBack => {
                    prop_assert_eq!(deque.pop_back(), model.pop_back());
                }
                Op::PeekFront => {
                    prop_assert_eq!(
                        deque.peek_front(),
                        model.front().copied().ok_or(Error::Empty)
                    );
                }
                Op::PeekBack => {
                    prop_assert_eq!(
                        deque.peek_back(),
                        model.back().copied().ok_or(Error::Empty)
                    );
                }
                Op::Len => {
                    prop_assert_eq!(deque.len(), model.len());
                }
            }
        }

        // Drain and compare the survivors in order
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(deque.pop_front(), Some(expected));
        }
        prop_assert!(deque.is_empty());
    }

    #[test]
    fn test_fifo_ordering(values in prop::collection::vec(any::<i32>(), 1..100)) {
        let deque: Deque<i32> = Deque::new();

        for &v in &values {
            deque.push_back(v);
        }
        for &v in &values {
            prop_assert_eq!(deque.pop_front(), Some(v));
        }
        prop_assert!(deque.is_empty());
    }

    #[test]
    fn test_lifo_ordering(values in prop::collection::vec(any::<i32>(), 1..100)) {
        let deque: Deque<i32> = Deque::new();

        for &v in &values {
            deque.push_front(v);
        }
        for &v in values.iter().rev() {
            prop_assert_eq!(deque.pop_front(), Some(v));
        }
        prop_assert!(deque.is_empty());
    }

    #[test]
    fn test_allocation_bounded_by_high_water_mark(
        rounds in 2usize..10,
        width in 1usize..50
    ) {
        let deque: Deque<usize> = Deque::new();

        for _ in 0..rounds {
            for i in 0..width {
                deque.push_back(i);
            }
            for _ in 0..width {
                deque.pop_front();
            }
        }

        // The pool caps allocations at the high-water mark regardless of
        // how many rounds of churn run over it.
        prop_assert_eq!(deque.pool_stats().nodes_allocated, width);
    }
}
