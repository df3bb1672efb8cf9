//! Indexed binary min-heap with decrease-key.
//!
//! The heap array holds `(index, key)` entries; `positions[index]` records
//! the heap slot currently holding `index`, or `None` when absent. Every
//! swap goes through [`IndexMinPriorityQueue::swap_slots`], which rewrites
//! both positions, so `positions[heap[s].index] == Some(s)` holds for every
//! occupied slot `s` between operations.

use crate::error::QueueError;

use super::{left_child, parent};

#[derive(Clone, Copy, Debug)]
struct Entry<K> {
    index: usize,
    key: K,
}

/// Min-priority queue over external indices `0..capacity`, each carrying a
/// key.
///
/// Keys only need [`PartialOrd`]; keys that do not compare equal to
/// themselves (NaN) are rejected so the heap always sees a total order.
///
/// # Examples
/// ```
/// use spanwood_core::IndexMinPriorityQueue;
///
/// let mut queue = IndexMinPriorityQueue::with_capacity(4);
/// queue.insert(2, 0.5)?;
/// queue.insert(0, 0.9)?;
/// queue.decrease_key(0, 0.1)?;
/// assert_eq!(queue.delete_min()?, 0);
/// assert_eq!(queue.delete_min()?, 2);
/// assert!(queue.is_empty());
/// # Ok::<(), spanwood_core::QueueError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexMinPriorityQueue<K> {
    heap: Vec<Entry<K>>,
    positions: Vec<Option<usize>>,
}

impl<K: PartialOrd + Copy> IndexMinPriorityQueue<K> {
    /// Creates an empty queue accepting indices in `[0, capacity)`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Returns the maximum index plus one.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of indices currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no index is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` when `index` is queued.
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfRange`] for an index outside the
    /// capacity.
    pub fn contains(&self, index: usize) -> Result<bool, QueueError> {
        self.validate(index)?;
        Ok(self.positions[index].is_some())
    }

    /// Queues `index` with `key`.
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfRange`], [`QueueError::DuplicateIndex`]
    /// when `index` is already queued, or [`QueueError::NanKey`].
    pub fn insert(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        self.validate(index)?;
        if self.positions[index].is_some() {
            return Err(QueueError::DuplicateIndex { index });
        }
        validate_key(index, &key)?;

        let slot = self.heap.len();
        self.heap.push(Entry { index, key });
        self.positions[index] = Some(slot);
        self.swim(slot);
        Ok(())
    }

    /// Returns the index with the smallest key without removing it.
    ///
    /// # Errors
    /// Returns [`QueueError::Underflow`] when the queue is empty.
    pub fn min_index(&self) -> Result<usize, QueueError> {
        self.heap
            .first()
            .map(|entry| entry.index)
            .ok_or(QueueError::Underflow)
    }

    /// Returns the smallest key without removing it.
    ///
    /// # Errors
    /// Returns [`QueueError::Underflow`] when the queue is empty.
    pub fn min_key(&self) -> Result<K, QueueError> {
        self.heap
            .first()
            .map(|entry| entry.key)
            .ok_or(QueueError::Underflow)
    }

    /// Removes and returns the index with the smallest key.
    ///
    /// # Errors
    /// Returns [`QueueError::Underflow`] when the queue is empty.
    pub fn delete_min(&mut self) -> Result<usize, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Underflow);
        }
        let entry = self.remove_slot(0);
        Ok(entry.index)
    }

    /// Returns the key associated with `index`.
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfRange`] or
    /// [`QueueError::IndexNotPresent`].
    pub fn key_of(&self, index: usize) -> Result<K, QueueError> {
        let slot = self.slot_of(index)?;
        Ok(self.heap[slot].key)
    }

    /// Lowers the key of a queued `index`.
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfRange`], [`QueueError::IndexNotPresent`],
    /// [`QueueError::NanKey`], or [`QueueError::KeyNotDecreased`] when `key`
    /// is not strictly less than the current key.
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        let slot = self.slot_of(index)?;
        validate_key(index, &key)?;
        if key >= self.heap[slot].key {
            return Err(QueueError::KeyNotDecreased { index });
        }
        self.heap[slot].key = key;
        self.swim(slot);
        Ok(())
    }

    /// Raises the key of a queued `index`.
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfRange`], [`QueueError::IndexNotPresent`],
    /// [`QueueError::NanKey`], or [`QueueError::KeyNotIncreased`] when `key`
    /// is not strictly greater than the current key.
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        let slot = self.slot_of(index)?;
        validate_key(index, &key)?;
        if key <= self.heap[slot].key {
            return Err(QueueError::KeyNotIncreased { index });
        }
        self.heap[slot].key = key;
        self.sink(slot);
        Ok(())
    }

    /// Replaces the key of a queued `index` in either direction.
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfRange`], [`QueueError::IndexNotPresent`]
    /// or [`QueueError::NanKey`].
    pub fn change_key(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        let slot = self.slot_of(index)?;
        validate_key(index, &key)?;
        self.heap[slot].key = key;
        let slot = self.swim(slot);
        self.sink(slot);
        Ok(())
    }

    /// Removes a queued `index` and returns its key.
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfRange`] or
    /// [`QueueError::IndexNotPresent`].
    pub fn delete(&mut self, index: usize) -> Result<K, QueueError> {
        let slot = self.slot_of(index)?;
        Ok(self.remove_slot(slot).key)
    }

    fn validate(&self, index: usize) -> Result<(), QueueError> {
        if index < self.positions.len() {
            Ok(())
        } else {
            Err(QueueError::IndexOutOfRange {
                index,
                capacity: self.positions.len(),
            })
        }
    }

    fn slot_of(&self, index: usize) -> Result<usize, QueueError> {
        self.validate(index)?;
        self.positions[index].ok_or(QueueError::IndexNotPresent { index })
    }

    /// Moves the tail entry into `slot`, drops the old occupant, and restores
    /// heap order around the moved entry.
    fn remove_slot(&mut self, slot: usize) -> Entry<K> {
        let removed = self.heap.swap_remove(slot);
        self.positions[removed.index] = None;
        if let Some(moved) = self.heap.get(slot) {
            self.positions[moved.index] = Some(slot);
            // The moved tail entry may belong above or below `slot` when an
            // arbitrary slot is removed.
            let settled = self.swim(slot);
            self.sink(settled);
        }
        removed
    }

    fn less(&self, left: usize, right: usize) -> bool {
        self.heap[left].key < self.heap[right].key
    }

    fn swap_slots(&mut self, left: usize, right: usize) {
        self.heap.swap(left, right);
        self.positions[self.heap[left].index] = Some(left);
        self.positions[self.heap[right].index] = Some(right);
    }

    fn swim(&mut self, mut slot: usize) -> usize {
        while slot > 0 && self.less(slot, parent(slot)) {
            self.swap_slots(slot, parent(slot));
            slot = parent(slot);
        }
        slot
    }

    fn sink(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let mut child = left_child(slot);
            if child >= len {
                break;
            }
            if child + 1 < len && self.less(child + 1, child) {
                child += 1;
            }
            if !self.less(child, slot) {
                break;
            }
            self.swap_slots(slot, child);
            slot = child;
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        for (slot, entry) in self.heap.iter().enumerate() {
            assert_eq!(self.positions[entry.index], Some(slot), "position map");
            if slot > 0 {
                assert!(
                    !self.less(slot, parent(slot)),
                    "heap order violated at slot {slot}"
                );
            }
        }
        let present = self.positions.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(present, self.heap.len(), "stale positions");
    }
}

fn validate_key<K: PartialOrd>(index: usize, key: &K) -> Result<(), QueueError> {
    if key.partial_cmp(key).is_some() {
        Ok(())
    } else {
        Err(QueueError::NanKey { index })
    }
}
