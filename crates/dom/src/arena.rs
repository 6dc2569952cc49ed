use crate::error::DomError;
use crate::types::{NodeId, NodeKind, NodeType};

/// Node tree with intrusive parent/child/sibling links.
///
/// The document root is created with the tree and is always `NodeId(0)`.
///
/// # Panics
///
/// The structural accessors (`kind`, `parent`, `first_child`, `next_sibling`
/// and friends) index the arena directly and panic when given an id that
/// was not minted by this tree. Check foreign ids with [`Dom::contains`] first.
#[derive(Clone, Debug)]
pub struct Dom {
    nodes: Vec<NodeRecord>,
}

#[derive(Clone, Debug)]
struct NodeRecord {
    kind: NodeKind,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl NodeRecord {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

impl Dom {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord::new(NodeKind::Document)],
        }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The document root always exists.
        false
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord::new(kind));
        id
    }

    pub fn create_element(&mut self, name: impl Into<String>) -> NodeId {
        self.create_element_with_attributes(name, Vec::new())
    }

    pub fn create_element_with_attributes(
        &mut self,
        name: impl Into<String>,
        attributes: Vec<(String, Option<String>)>,
    ) -> NodeId {
        self.push(NodeKind::Element {
            name: name.into(),
            attributes,
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text { text: text.into() })
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Comment { text: text.into() })
    }

    fn ensure(&self, id: NodeId) -> Result<(), DomError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomError::UnknownNode(id))
        }
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` under `parent` before `before`, or at the end when `before` is `None`.
    ///
    /// `child` must be detached.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        before: Option<NodeId>,
    ) -> Result<(), DomError> {
        self.ensure(parent)?;
        self.ensure(child)?;
        if let Some(before) = before {
            self.ensure(before)?;
            if self.nodes[before.index()].parent != Some(parent) {
                return Err(DomError::InvalidSibling { parent, before });
            }
        }
        if !self.nodes[parent.index()].kind.allows_children() {
            return Err(DomError::InvalidParent(parent));
        }
        if self.nodes[child.index()].parent.is_some() || child == Self::ROOT {
            return Err(DomError::AlreadyAttached(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::CycleDetected { parent, child });
        }

        let prev = match before {
            Some(before) => self.nodes[before.index()].prev_sibling,
            None => self.nodes[parent.index()].last_child,
        };
        {
            let record = &mut self.nodes[child.index()];
            record.parent = Some(parent);
            record.prev_sibling = prev;
            record.next_sibling = before;
        }
        match prev {
            Some(prev) => self.nodes[prev.index()].next_sibling = Some(child),
            None => self.nodes[parent.index()].first_child = Some(child),
        }
        match before {
            Some(before) => self.nodes[before.index()].prev_sibling = Some(child),
            None => self.nodes[parent.index()].last_child = Some(child),
        }
        Ok(())
    }

    /// Unlink `id` from its parent. The subtree below `id` stays intact.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        self.ensure(id)?;
        let Some(parent) = self.nodes[id.index()].parent else {
            return Ok(());
        };
        let prev = self.nodes[id.index()].prev_sibling;
        let next = self.nodes[id.index()].next_sibling;
        match prev {
            Some(prev) => self.nodes[prev.index()].next_sibling = next,
            None => self.nodes[parent.index()].first_child = next,
        }
        match next {
            Some(next) => self.nodes[next.index()].prev_sibling = prev,
            None => self.nodes[parent.index()].last_child = prev,
        }
        let record = &mut self.nodes[id.index()];
        record.parent = None;
        record.prev_sibling = None;
        record.next_sibling = None;
        log::trace!(target: "dom", "detached {id} from {parent}");
        Ok(())
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.nodes[id.index()].parent;
        }
        false
    }

    /// # Panics
    ///
    /// If `id` does not belong to this tree.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn node_type(&self, id: NodeId) -> NodeType {
        self.kind(id).node_type()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].first_child
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].last_child
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].next_sibling
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].prev_sibling
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            dom: self,
            next: self.first_child(id),
        }
    }

    pub fn is_comment(&self, id: NodeId, data: &str) -> bool {
        self.comment_text(id) == Some(data)
    }

    pub fn comment_text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Comment { text } => Some(text),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node, in sibling order.
pub struct Children<'a> {
    dom: &'a Dom,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.next?;
        self.next = self.dom.next_sibling(cur);
        Some(cur)
    }
}
