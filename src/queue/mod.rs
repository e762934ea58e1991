use std::cmp::Ordering;

pub mod heap_queue;

/// Frontier entry ordered by `priority`, then by insertion `sequence`.
#[derive(Clone, Debug)]
pub struct FrontierElement<T> {
    pub priority: f64,
    pub sequence: u64,
    pub item: T,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl<T> Ord for FrontierElement<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on priorities.
        // In case of a tie the earlier insertion wins, which keeps equal
        // priorities in FIFO order.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

// `PartialOrd` needs to be implemented as well.
impl<T> PartialOrd for FrontierElement<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for FrontierElement<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierElement<T> {}
