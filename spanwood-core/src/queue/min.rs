//! Array-backed binary min-heap without external indices.

use crate::error::QueueError;

use super::{left_child, parent};

/// Binary min-heap over [`Ord`] items.
///
/// Storage doubles when full and halves once occupancy drops to a quarter
/// of the allocation, so both insert and delete stay amortised `O(log n)`
/// without pinning memory after a large drain. [`MinPriorityQueue::from_vec`]
/// heapifies bottom-up in linear time.
///
/// # Examples
/// ```
/// use spanwood_core::MinPriorityQueue;
///
/// let mut queue = MinPriorityQueue::from_vec(vec![5, 1, 4]);
/// queue.insert(0);
/// assert_eq!(*queue.min()?, 0);
/// assert_eq!(queue.delete_min()?, 0);
/// assert_eq!(queue.delete_min()?, 1);
/// assert_eq!(queue.len(), 2);
/// # Ok::<(), spanwood_core::QueueError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinPriorityQueue<T> {
    heap: Vec<T>,
}

impl<T: Ord> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinPriorityQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Builds a queue from `items` by bottom-up heapification in `O(n)`.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut queue = Self { heap: items };
        for slot in (0..queue.heap.len() / 2).rev() {
            queue.sink(slot);
        }
        queue
    }

    /// Returns the number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the current allocation size.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Adds an item.
    pub fn insert(&mut self, item: T) {
        let capacity = self.heap.capacity();
        if self.heap.len() == capacity {
            self.heap.reserve_exact(capacity.max(1));
        }
        self.heap.push(item);
        self.swim(self.heap.len() - 1);
    }

    /// Returns the smallest item without removing it.
    ///
    /// # Errors
    /// Returns [`QueueError::Underflow`] when the queue is empty.
    pub fn min(&self) -> Result<&T, QueueError> {
        self.heap.first().ok_or(QueueError::Underflow)
    }

    /// Removes and returns the smallest item.
    ///
    /// # Errors
    /// Returns [`QueueError::Underflow`] when the queue is empty.
    pub fn delete_min(&mut self) -> Result<T, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Underflow);
        }
        let min = self.heap.swap_remove(0);
        self.sink(0);

        let capacity = self.heap.capacity();
        if !self.heap.is_empty() && self.heap.len() <= capacity / 4 {
            self.heap.shrink_to(capacity / 2);
        }
        Ok(min)
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 0 && self.heap[slot] < self.heap[parent(slot)] {
            self.heap.swap(slot, parent(slot));
            slot = parent(slot);
        }
    }

    fn sink(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let mut child = left_child(slot);
            if child >= len {
                break;
            }
            if child + 1 < len && self.heap[child + 1] < self.heap[child] {
                child += 1;
            }
            if self.heap[child] >= self.heap[slot] {
                break;
            }
            self.heap.swap(slot, child);
            slot = child;
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_heap_order(&self) {
        for slot in 1..self.heap.len() {
            assert!(
                self.heap[parent(slot)] <= self.heap[slot],
                "heap order violated at slot {slot}"
            );
        }
    }
}

impl<T: Ord> FromIterator<T> for MinPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
