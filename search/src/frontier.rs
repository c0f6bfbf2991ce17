//! Best-first frontier with a visited registry.
//!
//! The heap holds [`FrontierKey`]s only; nodes live in the search arena and
//! are looked up by `node_id` after a pop. The visited registry records the
//! identity of every *expanded* state. A state may sit on the heap more than
//! once until one copy is expanded.
//!
//! Uses a `BTreeSet` visited registry (not `HashSet`) for deterministic
//! iteration order.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use glucopath_kernel::state::VisitedKey;

use crate::node::{FrontierKey, SearchNodeV1};

/// Best-first frontier manager.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
/// lowest key first.
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    expanded: BTreeSet<VisitedKey>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            expanded: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Push a node's ordering key.
    pub fn push(&mut self, node: &SearchNodeV1) {
        self.heap.push(Reverse(FrontierKey::from(node)));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best entry, returning its key.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierKey> {
        self.heap.pop().map(|Reverse(key)| key)
    }

    /// Record that a state identity has been expanded.
    ///
    /// Returns `false` if it was already recorded.
    pub fn mark_expanded(&mut self, key: VisitedKey) -> bool {
        self.expanded.insert(key)
    }

    /// Whether a state identity has been expanded.
    #[must_use]
    pub fn is_expanded(&self, key: &VisitedKey) -> bool {
        self.expanded.contains(key)
    }

    /// High-water mark of heap size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
