use crate::tokenizer::{Token, tokenize};
use dom::{Dom, DomError, NodeId};

/// Parse server-rendered markup into a fresh tree rooted at a document node.
pub fn parse(input: &str) -> Dom {
    let mut dom = Dom::new();
    let root = dom.root();
    // The root is a fresh document node, so appends under it cannot fail.
    if let Err(err) = parse_fragment(&mut dom, root, input) {
        log::warn!(target: "markup.tokenizer", "failed to build tree: {err}");
    }
    dom
}

/// Parse `input` and append the resulting nodes under `parent`.
///
/// Returns the top-level nodes that were appended, in order.
pub fn parse_fragment(dom: &mut Dom, parent: NodeId, input: &str) -> Result<Vec<NodeId>, DomError> {
    let mut top_level = Vec::new();
    let mut open_elements: Vec<NodeId> = Vec::new();

    for token in tokenize(input) {
        let container = open_elements.last().copied().unwrap_or(parent);
        let node = match token {
            Token::Doctype(_) => continue,
            Token::Comment(text) => dom.create_comment(text),
            Token::Text(text) => {
                if text.is_empty() {
                    continue;
                }
                dom.create_text(text)
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let element = dom.create_element_with_attributes(name, attributes);
                dom.append_child(container, element)?;
                if open_elements.is_empty() {
                    top_level.push(element);
                }
                if !self_closing {
                    open_elements.push(element);
                }
                continue;
            }
            Token::EndTag(name) => {
                // Pop up to and including the nearest open element with this name;
                // stray end tags are ignored.
                if let Some(pos) = open_elements
                    .iter()
                    .rposition(|&id| dom.tag_name(id) == Some(name.as_str()))
                {
                    open_elements.truncate(pos);
                }
                continue;
            }
        };
        dom.append_child(container, node)?;
        if open_elements.is_empty() {
            top_level.push(node);
        }
    }

    Ok(top_level)
}
