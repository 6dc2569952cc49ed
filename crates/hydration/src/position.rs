use dom::NodeId;
use std::collections::HashMap;

/// Append-mode resume points: for each parent, the node the next backward
/// lookup under that parent should start from.
///
/// Keys are plain node ids, so entries never keep a subtree alive. The cache
/// is bookkeeping for a single hydration pass and is cleared when the
/// outermost scope exits.
#[derive(Clone, Debug, Default)]
pub struct PositionCache {
    // `None` marks a parent whose children have all been consumed.
    entries: HashMap<NodeId, Option<NodeId>>,
}

/// Resume point recorded for a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resume {
    At(NodeId),
    Exhausted,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, parent: NodeId) -> Option<Resume> {
        self.entries.get(&parent).map(|entry| match entry {
            Some(node) => Resume::At(*node),
            None => Resume::Exhausted,
        })
    }

    pub fn record(&mut self, parent: NodeId, next: Option<NodeId>) {
        self.entries.insert(parent, next);
    }

    /// Drop the entry for a parent whose subtree is being torn down.
    pub fn forget(&mut self, parent: NodeId) {
        self.entries.remove(&parent);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
