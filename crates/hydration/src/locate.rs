//! Resolving the node the next hydration step consumes.

use crate::context::HydrationContext;
use crate::error::HydrationError;
use crate::insertion::{InsertionAnchor, InsertionState};
use crate::markers::FRAGMENT_CLOSE;
use crate::position::Resume;
use dom::NodeId;

impl HydrationContext<'_> {
    /// Resolve the current hydration node from the pending insertion state.
    ///
    /// The insertion state is consumed whatever the outcome. On success the
    /// cursor is set to the resolved node, or `None` (reported as a mismatch)
    /// when nothing matches.
    ///
    /// Errors when `has_fragment_anchor` is set and the resolved node is a
    /// fragment anchor with no previous sibling, or when the insertion state
    /// names a node outside this context's tree.
    pub fn locate(&mut self, has_fragment_anchor: bool) -> Result<Option<NodeId>, HydrationError> {
        self.counters.locates += 1;
        let state = self.insertion.take();
        let parent = state.map(|s| s.parent);
        if let Err(err) = state.map_or(Ok(()), |s| self.ensure_state(s)) {
            self.current = None;
            return Err(err);
        }

        let node = match state {
            Some(InsertionState {
                parent,
                anchor: InsertionAnchor::Prepend,
            }) => self.dom.first_child(parent),
            Some(InsertionState {
                anchor: InsertionAnchor::Node(node),
                ..
            }) => Some(node),
            _ => match self.locate_backward(parent, has_fragment_anchor) {
                Ok(node) => node,
                Err(err) => {
                    self.current = None;
                    return Err(err);
                }
            },
        };

        log::trace!(target: "hydration.locate", "state={state:?} resolved={node:?}");
        if let Some(parent) = parent.or_else(|| node.and_then(|n| self.dom.parent(n))) {
            self.ambient_parent = Some(parent);
        }
        if node.is_none() {
            self.report_missing(self.ambient_parent);
        }
        self.current = node;
        Ok(node)
    }

    fn ensure_state(&self, state: InsertionState) -> Result<(), HydrationError> {
        self.ensure_node(state.parent)?;
        if let InsertionAnchor::Node(node) = state.anchor {
            self.ensure_node(node)?;
        }
        Ok(())
    }

    /// Append-mode (or cursor-relative) resolution.
    fn locate_backward(
        &mut self,
        parent: Option<NodeId>,
        has_fragment_anchor: bool,
    ) -> Result<Option<NodeId>, HydrationError> {
        let dom = self.dom;
        let mut node = match parent {
            Some(parent) => match self.positions.get(parent) {
                Some(Resume::At(node)) => Some(node),
                Some(Resume::Exhausted) => None,
                None => dom.last_child(parent),
            },
            None => self.current,
        };

        if has_fragment_anchor {
            if let Some(anchor) = node.filter(|&id| self.is_fragment_anchor(id)) {
                let prev = dom
                    .previous_sibling(anchor)
                    .ok_or(HydrationError::FragmentAnchorWithoutPrevious { anchor })?;
                node = Some(prev);
            }
        }

        if let Some(close) = node.filter(|&id| dom.is_comment(id, FRAGMENT_CLOSE)) {
            // The fragment ending here is hydrated as a unit; start at its open marker.
            node = self
                .fragments
                .match_backward(dom, close, &mut self.counters);
        }

        if let (Some(parent), Some(node)) = (parent, node) {
            self.positions.record(parent, dom.previous_sibling(node));
        }
        Ok(node)
    }

    fn is_fragment_anchor(&self, id: NodeId) -> bool {
        self.dom
            .comment_text(id)
            .is_some_and(|text| self.anchors.is_fragment_anchor(text))
    }
}
