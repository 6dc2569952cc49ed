//! Sibling/child lookup that understands the marker protocol while a
//! hydration scope is active.

use crate::anchors::is_non_hydration_node;
use crate::context::HydrationContext;
use crate::fragment::locate_end_anchor;
use crate::markers::{DYNAMIC_CLOSE, DYNAMIC_OPEN, FRAGMENT_CLOSE, FRAGMENT_OPEN};
use dom::NodeId;

impl HydrationContext<'_> {
    /// The node hydration should visit after `node`.
    ///
    /// During hydration a `[`/`[[` marker stands for its whole range, so the
    /// walk continues after the matching close marker, and non-hydration nodes
    /// are skipped. Outside hydration this is the plain next sibling.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        let dom = self.dom;
        if !self.lookup_enabled() {
            return dom.next_sibling(node);
        }
        let mut end = node;
        if dom.is_comment(node, DYNAMIC_OPEN) {
            end = locate_end_anchor(dom, node, DYNAMIC_OPEN, DYNAMIC_CLOSE).unwrap_or(node);
        } else if dom.is_comment(node, FRAGMENT_OPEN) {
            end = locate_end_anchor(dom, node, FRAGMENT_OPEN, FRAGMENT_CLOSE).unwrap_or(node);
        }
        self.skip_non_hydration(dom.next_sibling(end))
    }

    /// First child of `node` that hydration should visit.
    pub fn child(&self, node: NodeId) -> Option<NodeId> {
        let first = self.dom.first_child(node);
        if !self.lookup_enabled() {
            return first;
        }
        self.skip_non_hydration(first)
    }

    /// The `index`-th hydration child of `node`, counting fragments as one.
    pub fn nth_child(&self, node: NodeId, index: usize) -> Option<NodeId> {
        if !self.lookup_enabled() {
            return self.dom.children(node).nth(index);
        }
        let mut cur = self.child(node);
        for _ in 0..index {
            cur = self.next(cur?);
        }
        cur
    }

    fn skip_non_hydration(&self, mut cur: Option<NodeId>) -> Option<NodeId> {
        while let Some(id) = cur {
            if !is_non_hydration_node(self.dom, self.anchors(), id) {
                break;
            }
            cur = self.dom.next_sibling(id);
        }
        cur
    }
}
