use std::collections::BinaryHeap;

use super::FrontierElement;

/// Min-priority frontier with FIFO tie-breaking.
#[derive(Clone, Debug)]
pub struct HeapQueue<T> {
    queue: BinaryHeap<FrontierElement<T>>,
    next_sequence: u64,
}

impl<T> Default for HeapQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HeapQueue<T> {
    pub fn new() -> HeapQueue<T> {
        HeapQueue {
            queue: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, priority: f64, item: T) {
        self.queue.push(FrontierElement {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<FrontierElement<T>> {
        self.queue.pop()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
