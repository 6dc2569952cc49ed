//! Human-readable renderings of nodes for diagnostics and test failure output.

use crate::{Dom, NodeId, NodeKind};

const INDENT_STEP: &str = "  ";
const PREVIEW_CHARS: usize = 40;

fn push_preview_replace_newlines(out: &mut String, s: &str, max_chars: usize) {
    let mut truncated = false;
    for (i, ch) in s.chars().enumerate() {
        if i == max_chars {
            truncated = true;
            break;
        }
        out.push(if ch == '\n' { ' ' } else { ch });
    }
    if truncated {
        out.push('…');
    }
}

fn push_node_line(dom: &Dom, id: NodeId, line: &mut String) {
    match dom.kind(id) {
        NodeKind::Document => line.push_str("#document"),
        NodeKind::Element { name, .. } => {
            line.push('<');
            line.push_str(name);
            for key in ["id", "class"] {
                if let Some(value) = dom.attr(id, key).filter(|v| !v.is_empty()) {
                    line.push(' ');
                    line.push_str(key);
                    line.push_str("=\"");
                    line.push_str(value);
                    line.push('"');
                }
            }
            line.push('>');
        }
        NodeKind::Text { text } => {
            line.push('"');
            push_preview_replace_newlines(line, text, PREVIEW_CHARS);
            line.push('"');
        }
        NodeKind::Comment { text } => {
            line.push_str("<!-- ");
            push_preview_replace_newlines(line, text, PREVIEW_CHARS);
            line.push_str(" -->");
        }
    }
}

/// One-line summary of a single node, e.g. `<span id="x">`, `"Hi"`, `<!-- [ -->`.
pub fn describe(dom: &Dom, id: NodeId) -> String {
    let mut line = String::with_capacity(32);
    push_node_line(dom, id, &mut line);
    line
}

/// Indented outline of the subtree under `root`, capped at `cap` lines.
///
/// Text nodes are shown verbatim (including whitespace-only ones) because the
/// hydration walk treats them as positions.
pub fn outline(dom: &Dom, root: NodeId, cap: usize) -> Vec<String> {
    struct IndentGuard<'a> {
        indent: &'a mut String,
        step: usize,
    }

    impl Drop for IndentGuard<'_> {
        fn drop(&mut self) {
            let new_len = self.indent.len() - self.step;
            self.indent.truncate(new_len);
        }
    }

    fn walk(dom: &Dom, id: NodeId, indent: &mut String, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let mut line = String::with_capacity(indent.len() + 32);
        line.push_str(indent);
        push_node_line(dom, id, &mut line);
        out.push(line);

        if dom.first_child(id).is_none() {
            return;
        }
        indent.push_str(INDENT_STEP);
        let guard = IndentGuard {
            indent,
            step: INDENT_STEP.len(),
        };
        for child in dom.children(id) {
            walk(dom, child, guard.indent, out, left);
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    let mut indent = String::new();
    walk(dom, root, &mut indent, &mut out, &mut left);
    out
}
