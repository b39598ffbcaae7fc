//! First-in first-out vertex queue.

use std::collections::VecDeque;

use crate::error::QueueError;

/// Strict FIFO queue of vertex ids.
#[derive(Clone, Debug, Default)]
pub struct FifoQueue {
    items: VecDeque<usize>,
}

impl FifoQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `vertex` to the back of the queue.
    pub fn enqueue(&mut self, vertex: usize) {
        self.items.push_back(vertex);
    }

    /// Removes and returns the oldest vertex.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when the queue holds no vertices.
    pub fn dequeue(&mut self) -> Result<usize, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// Returns `true` when the queue holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
