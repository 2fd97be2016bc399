use std::sync::Mutex;

use crate::graph::VertexId;
use crate::sets::frontier::FifoQueue;

/// Mutex-guarded [`FifoQueue`] shared between the workers of one parallel
/// breadth-first traversal.
///
/// Push and pop each take the lock for a single O(1) queue operation, so
/// enqueueing workers never serialize behind anything longer than one
/// dequeue.
pub struct SharedFrontier {
    inner: Mutex<FifoQueue>,
}

impl SharedFrontier {
    pub fn new() -> Self {
        SharedFrontier {
            inner: Mutex::new(FifoQueue::new()),
        }
    }

    /// Appends `vertex` at the back of the frontier.
    pub fn push(&self, vertex: VertexId) {
        self.inner.lock().unwrap().push(vertex);
    }

    /// Removes and returns the oldest entry, or `None` if the frontier is
    /// currently drained.
    pub fn pop(&self) -> Option<VertexId> {
        self.inner.lock().unwrap().pop()
    }
}

impl Default for SharedFrontier {
    fn default() -> Self {
        Self::new()
    }
}
