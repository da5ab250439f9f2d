use std::collections::HashSet;

use crate::puzzle::StateKey;

/// Duplicate-state bookkeeping: one set for states whose node has been
/// popped, one for states that have ever been queued. A successor is
/// discarded when its key appears in either set, so no state is queued or
/// expanded twice.
pub struct VisitedSet {
    expanded: HashSet<StateKey>,
    queued: HashSet<StateKey>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
            queued: HashSet::new(),
        }
    }

    pub fn mark_expanded(&mut self, key: StateKey) {
        self.expanded.insert(key);
    }

    pub fn mark_queued(&mut self, key: StateKey) {
        self.queued.insert(key);
    }

    pub fn seen(&self, key: &StateKey) -> bool {
        self.expanded.contains(key) || self.queued.contains(key)
    }
}
