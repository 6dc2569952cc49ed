use dom::NodeId;

/// Where, relative to the insertion parent, the next hydration step starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionAnchor {
    /// The parent's first child.
    Prepend,
    /// This exact node. Used when the template holds a placeholder anchor at a
    /// position where the server rendered the real node.
    Node(NodeId),
    /// Walk backward from the parent's end, resuming where the previous lookup
    /// under the same parent stopped.
    Append,
}

/// Single-shot description of where to hydrate next. Consumed by exactly one
/// `locate` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertionState {
    pub parent: NodeId,
    pub anchor: InsertionAnchor,
}
