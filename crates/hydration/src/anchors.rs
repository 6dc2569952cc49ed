use crate::markers::{
    DYNAMIC_COMPONENT_ANCHOR_LABEL, FOR_ANCHOR_LABEL, FRAGMENT_CLOSE, IF_ANCHOR_LABEL,
    SLOT_ANCHOR_LABEL,
};
use dom::{Dom, NodeId, NodeKind};

/// Framework-supplied predicate deciding which comment payloads are anchors.
pub trait AnchorPolicy {
    /// Placeholder comments for dynamic content. Skipped while walking siblings.
    fn is_anchor(&self, payload: &str) -> bool;

    /// Anchors that reference a whole fragment as one child unit. `locate` steps
    /// over these to the node before them.
    fn is_fragment_anchor(&self, payload: &str) -> bool {
        self.is_anchor(payload)
    }
}

/// Anchor labels emitted by the vapor server renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct VaporAnchors;

impl AnchorPolicy for VaporAnchors {
    fn is_anchor(&self, payload: &str) -> bool {
        matches!(
            payload,
            IF_ANCHOR_LABEL | FOR_ANCHOR_LABEL | SLOT_ANCHOR_LABEL | DYNAMIC_COMPONENT_ANCHOR_LABEL
        )
    }
}

pub fn is_empty_text_node(dom: &Dom, id: NodeId) -> bool {
    dom.text(id).is_some_and(|text| text.trim().is_empty())
}

/// Nodes the sibling walk never hands out: whitespace-only text, fragment close
/// markers and framework anchors.
pub fn is_non_hydration_node(dom: &Dom, anchors: &dyn AnchorPolicy, id: NodeId) -> bool {
    match dom.kind(id) {
        NodeKind::Text { text } => text.trim().is_empty(),
        NodeKind::Comment { text } => text == FRAGMENT_CLOSE || anchors.is_anchor(text),
        _ => false,
    }
}

/// First following sibling of `node` that is a comment with payload `label`.
pub fn locate_fragment_anchor(dom: &Dom, node: NodeId, label: &str) -> Option<NodeId> {
    let mut cur = dom.next_sibling(node);
    while let Some(id) = cur {
        if dom.is_comment(id, label) {
            return Some(id);
        }
        cur = dom.next_sibling(id);
    }
    None
}
