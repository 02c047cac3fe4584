//! Scenario tests for the queue adapter
//!
//! Covers ordering under interleaved traffic and the queue's behavior when
//! multiple threads share one instance.

use crate::queue::Queue;
use crate::Error;
use std::sync::Arc;
use std::thread;

#[test]
fn test_interleaved_push_pop_keeps_fifo() {
    let queue = Queue::new();
    let mut next_expected = 0;

    for i in 0..50 {
        queue.push(i);
        if i % 3 == 2 {
            assert_eq!(queue.pop(), Some(next_expected));
            next_expected += 1;
        }
    }
    while let Some(v) = queue.pop() {
        assert_eq!(v, next_expected);
        next_expected += 1;
    }
    assert_eq!(next_expected, 50);
}

#[test]
fn test_peeks_do_not_consume() {
    let queue = Queue::new();
    queue.push("a");
    queue.push("b");

    for _ in 0..3 {
        assert_eq!(queue.front(), Ok("a"));
        assert_eq!(queue.back(), Ok("b"));
    }
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_drain_then_reuse() {
    let queue = Queue::new();
    for i in 0..10 {
        queue.push(i);
    }
    while queue.pop().is_some() {}

    assert!(queue.is_empty());
    assert_eq!(queue.front(), Err(Error::Empty));

    // The queue is fully usable after being drained
    queue.push(99);
    assert_eq!(queue.front(), Ok(99));
    assert_eq!(queue.pop(), Some(99));
}

#[test]
fn test_single_producer_single_consumer() {
    let queue = Arc::new(Queue::new());
    let total = 5_000;

    let producer = thread::spawn({
        let queue = Arc::clone(&queue);
        move || {
            for i in 0..total {
                queue.push(i);
            }
        }
    });

    let consumer = thread::spawn({
        let queue = Arc::clone(&queue);
        move || {
            let mut next_expected = 0;
            while next_expected < total {
                if let Some(value) = queue.pop() {
                    // A single consumer observes strict FIFO order
                    assert_eq!(value, next_expected);
                    next_expected += 1;
                } else {
                    thread::yield_now();
                }
            }
        }
    });

    producer.join().unwrap();
    consumer.join().unwrap();
    assert!(queue.is_empty());
}

#[test]
fn test_multiple_consumers_receive_everything_once() {
    let queue = Arc::new(Queue::new());
    let total = 8_000;
    for i in 0..total {
        queue.push(i);
    }

    let mut handles = vec![];
    for _ in 0..4 {
        let queue = Arc::clone(&queue);
        handles.push(thread::spawn(move || {
            let mut taken = Vec::new();
            while let Some(v) = queue.pop() {
                taken.push(v);
            }
            taken
        }));
    }

    let mut all: Vec<usize> = Vec::new();
    for handle in handles {
        all.extend(handle.join().unwrap());
    }

    assert_eq!(all.len(), total);
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
}
