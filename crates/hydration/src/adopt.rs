//! Claiming one located node for one template position.

use crate::context::HydrationContext;
use crate::diagnostics::Mismatch;
use dom::{NodeId, NodeKind, NodeType};

/// What a template position expects, read from the leading characters of its
/// server markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateShape<'a> {
    /// `<!...`
    Comment,
    /// `<tag...`; the tag name as written.
    Element(&'a str),
    /// Anything else: text, possibly beginning with the expected content.
    Text(&'a str),
}

impl<'a> TemplateShape<'a> {
    pub fn parse(template: &'a str) -> Self {
        if template.starts_with("<!") {
            return TemplateShape::Comment;
        }
        if let Some(rest) = template.strip_prefix('<') {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
                .unwrap_or(rest.len());
            if end > 0 {
                return TemplateShape::Element(&rest[..end]);
            }
        }
        TemplateShape::Text(template)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TemplateShape::Comment)
    }
}

impl HydrationContext<'_> {
    /// Claim `node` for a template position and advance the cursor past it.
    ///
    /// When the template does not expect a comment, leading comments (anchors
    /// the template does not know about at this position) are skipped. Shape
    /// disagreements are reported but never stop adoption. Returns `None` only
    /// if skipping comments ran off the end of the sibling list.
    /// A `node` that is not part of this context's tree is treated as missing.
    pub fn adopt(&mut self, node: NodeId, template: &str) -> Option<NodeId> {
        let dom = self.dom;
        if !dom.contains(node) {
            log::debug!(target: "hydration.adopt", "{node} is not part of this tree");
            self.report_missing(self.ambient_parent);
            self.current = None;
            return None;
        }
        let shape = TemplateShape::parse(template);
        let mut node = node;
        if !shape.is_comment() {
            while dom.node_type(node) == NodeType::Comment {
                match dom.next_sibling(node) {
                    Some(next) => node = next,
                    None => {
                        let parent = dom.parent(node);
                        self.report_missing(parent);
                        self.current = None;
                        return None;
                    }
                }
            }
        }

        self.counters.adoptions += 1;
        if self.diagnostics_enabled() && !shape_matches(dom.kind(node), shape, template) {
            self.report(Mismatch::Shape {
                node,
                expected: template.to_string(),
                found: dom::describe(dom, node),
            });
        }
        log::trace!(target: "hydration.adopt", "adopted {node} for {shape:?}");

        if let Some(parent) = dom.parent(node) {
            self.ambient_parent = Some(parent);
        }
        self.current = self.next(node);
        Some(node)
    }

    /// [`adopt`](Self::adopt) the node under the cursor.
    pub fn adopt_current(&mut self, template: &str) -> Option<NodeId> {
        match self.current {
            Some(node) => self.adopt(node, template),
            None => {
                self.report_missing(self.ambient_parent);
                None
            }
        }
    }
}

fn shape_matches(kind: &NodeKind, shape: TemplateShape<'_>, template: &str) -> bool {
    match kind {
        NodeKind::Comment { .. } => shape.is_comment(),
        NodeKind::Element { name, .. } => {
            matches!(shape, TemplateShape::Element(tag) if tag.eq_ignore_ascii_case(name))
        }
        NodeKind::Text { text } => template.trim().is_empty() || template.starts_with(text.as_str()),
        NodeKind::Document => false,
    }
}
