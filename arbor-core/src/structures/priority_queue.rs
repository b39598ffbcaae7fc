//! Array-backed binary min-heap keyed by vertex id.
//!
//! A parallel slot table maps each vertex to its heap position, giving O(1)
//! membership tests and O(log n) `insert`, `extract_min`, and `decrease_key`.
//! A vertex occupies at most one heap slot at a time.

use crate::error::PriorityQueueError;

#[derive(Clone, Copy, Debug)]
struct HeapEntry<P> {
    vertex: usize,
    priority: P,
}

/// Binary min-heap over vertex ids `[0, capacity)` with decrease-key.
///
/// Ties between equal priorities are resolved by heap structure alone.
///
/// # Examples
/// ```
/// use arbor_core::structures::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new(3);
/// heap.insert(0, 10)?;
/// heap.insert(1, 7)?;
/// heap.insert(2, 12)?;
/// heap.decrease_key(2, 1)?;
///
/// assert_eq!(heap.extract_min()?, (2, 1));
/// assert_eq!(heap.extract_min()?, (1, 7));
/// assert!(!heap.contains(1));
/// # Ok::<(), arbor_core::PriorityQueueError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<P> {
    entries: Vec<HeapEntry<P>>,
    slots: Vec<Option<usize>>,
}

impl<P: Ord + Copy> IndexedMinHeap<P> {
    /// Creates an empty heap able to hold every vertex id below `capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: vec![None; capacity],
        }
    }

    /// Returns the number of vertex ids the heap can track.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of vertices currently in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no vertex is in the heap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `vertex` currently occupies a heap slot.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.slot(vertex).is_some()
    }

    /// Returns the current priority of `vertex`, if present.
    #[must_use]
    pub fn priority(&self, vertex: usize) -> Option<P> {
        self.slot(vertex)
            .and_then(|slot| self.entries.get(slot))
            .map(|entry| entry.priority)
    }

    /// Inserts `vertex` with `priority`.
    ///
    /// # Errors
    /// Returns [`PriorityQueueError::Full`] when every slot is taken, then
    /// [`PriorityQueueError::VertexOutOfRange`] for ids at or above the
    /// capacity and [`PriorityQueueError::AlreadyPresent`] when `vertex` is
    /// queued.
    pub fn insert(&mut self, vertex: usize, priority: P) -> Result<(), PriorityQueueError> {
        let capacity = self.capacity();
        if self.entries.len() == capacity {
            return Err(PriorityQueueError::Full { capacity });
        }
        if vertex >= capacity {
            return Err(PriorityQueueError::VertexOutOfRange { vertex, capacity });
        }
        if self.contains(vertex) {
            return Err(PriorityQueueError::AlreadyPresent { vertex });
        }

        let slot = self.entries.len();
        self.entries.push(HeapEntry { vertex, priority });
        self.slots[vertex] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest priority.
    ///
    /// # Errors
    /// Returns [`PriorityQueueError::Empty`] when the heap is empty.
    pub fn extract_min(&mut self) -> Result<(usize, P), PriorityQueueError> {
        let last = self
            .entries
            .len()
            .checked_sub(1)
            .ok_or(PriorityQueueError::Empty)?;
        self.swap_entries(0, last);

        let root = self.entries.pop().ok_or(PriorityQueueError::Empty)?;
        self.slots[root.vertex] = None;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((root.vertex, root.priority))
    }

    /// Lowers the priority of a queued vertex.
    ///
    /// Setting the same priority again is accepted and leaves the heap as is.
    ///
    /// # Errors
    /// Returns [`PriorityQueueError::NotPresent`] when `vertex` is not queued
    /// and [`PriorityQueueError::PriorityIncrease`] when `priority` exceeds
    /// the current one.
    pub fn decrease_key(&mut self, vertex: usize, priority: P) -> Result<(), PriorityQueueError> {
        let slot = self
            .slot(vertex)
            .ok_or(PriorityQueueError::NotPresent { vertex })?;
        let entry = &mut self.entries[slot];
        if priority > entry.priority {
            return Err(PriorityQueueError::PriorityIncrease { vertex });
        }
        entry.priority = priority;
        self.sift_up(slot);
        Ok(())
    }

    fn slot(&self, vertex: usize) -> Option<usize> {
        self.slots.get(vertex).copied().flatten()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].priority <= self.entries[index].priority {
                break;
            }
            self.swap_entries(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
    }

    fn swap_entries(&mut self, first: usize, second: usize) {
        self.entries.swap(first, second);
        let first_vertex = self.entries[first].vertex;
        let second_vertex = self.entries[second].vertex;
        self.slots[first_vertex] = Some(first);
        self.slots[second_vertex] = Some(second);
    }
}
