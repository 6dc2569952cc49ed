//! Fragment boundary matching over sibling chains.

use crate::counters::HydrationCounters;
use crate::markers::{FRAGMENT_CLOSE, FRAGMENT_OPEN};
use dom::{Dom, NodeId};
use std::collections::HashMap;

/// Memoized close-marker -> open-marker matches, keyed by node identity.
///
/// Entries stay valid as long as markers are not reordered; callers that edit
/// the tree structurally must [`clear`](Self::clear) it.
#[derive(Clone, Debug, Default)]
pub struct FragmentMatchCache {
    matches: HashMap<NodeId, NodeId>,
    enabled: bool,
}

impl FragmentMatchCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            matches: HashMap::new(),
            enabled,
        }
    }

    pub fn get(&self, close: NodeId) -> Option<NodeId> {
        if !self.enabled {
            return None;
        }
        self.matches.get(&close).copied()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn clear(&mut self) {
        self.matches.clear();
    }

    fn record(&mut self, close: NodeId, open: NodeId) {
        if self.enabled {
            self.matches.insert(close, open);
        }
    }

    /// Find the open marker balancing `close` among its preceding siblings.
    ///
    /// Every nested close marker passed on the way is matched too, and an
    /// already-matched nested fragment is skipped in one step. Returns `None`
    /// when the markers are unbalanced or `close` is not a close marker.
    pub fn match_backward(
        &mut self,
        dom: &Dom,
        close: NodeId,
        counters: &mut HydrationCounters,
    ) -> Option<NodeId> {
        if !dom.is_comment(close, FRAGMENT_CLOSE) {
            return None;
        }
        if let Some(open) = self.get(close) {
            counters.match_cache_hits += 1;
            return Some(open);
        }

        // Close markers still waiting for their open marker, innermost last.
        let mut pending = vec![close];
        let mut cur = close;
        while let Some(prev) = dom.previous_sibling(cur) {
            counters.backward_steps += 1;
            cur = prev;
            if dom.is_comment(cur, FRAGMENT_CLOSE) {
                if let Some(open) = self.get(cur) {
                    counters.match_cache_hits += 1;
                    cur = open;
                } else {
                    pending.push(cur);
                }
            } else if dom.is_comment(cur, FRAGMENT_OPEN) {
                let Some(end) = pending.pop() else {
                    break;
                };
                self.record(end, cur);
                if pending.is_empty() {
                    log::trace!(target: "hydration.fragment", "matched {close} -> {cur}");
                    return Some(cur);
                }
            }
        }

        log::debug!(target: "hydration.fragment", "no open marker for {close}");
        None
    }
}

/// Find the close marker balancing the fragment `node` sits in (or opens),
/// scanning forward through following siblings.
///
/// Nested `open` markers raise the depth; a `close` at depth zero is the
/// answer. Returns `None` for an unbalanced tail.
pub fn locate_end_anchor(dom: &Dom, node: NodeId, open: &str, close: &str) -> Option<NodeId> {
    let mut depth = 0usize;
    let mut cur = dom.next_sibling(node);
    while let Some(id) = cur {
        if let Some(text) = dom.comment_text(id) {
            if text == open {
                depth += 1;
            } else if text == close {
                if depth == 0 {
                    return Some(id);
                }
                depth -= 1;
            }
        }
        cur = dom.next_sibling(id);
    }
    None
}
