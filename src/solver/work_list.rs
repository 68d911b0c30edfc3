use std::collections::{HashSet, VecDeque};

use crate::solver::value::VariableKey;

/// FIFO queue of directed arcs awaiting revision.
///
/// An arc already in the queue is not enqueued a second time; revising it
/// once covers every pending reason it was scheduled.
pub struct WorkList<K: VariableKey> {
    queue: VecDeque<(K, K)>,
    queue_members: HashSet<(K, K)>,
}

impl<K: VariableKey> WorkList<K> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, arc: (K, K)) {
        if !self.queue_members.contains(&arc) {
            self.queue_members.insert(arc.clone());
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<(K, K)> {
        if let Some(arc) = self.queue.pop_front() {
            self.queue_members.remove(&arc);
            Some(arc)
        } else {
            None
        }
    }
}

impl<K: VariableKey> Default for WorkList<K> {
    fn default() -> Self {
        Self::new()
    }
}
