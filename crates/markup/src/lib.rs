//! Builds a [`dom::Dom`] from server-rendered markup.
//!
//! Understands what a server renderer emits (tags, attributes, void elements,
//! comments, text). Every comment payload and every whitespace-only text run is
//! kept as a node.
//!
//! Known limitations:
//! - No HTML5 insertion modes or implied end tags beyond void elements.
//! - Tag/attribute names are restricted to ASCII `[A-Za-z0-9:_-]`.
//! - `<script>`/`<style>` bodies are not treated as rawtext.

mod builder;
mod entities;
mod tokenizer;

pub use crate::builder::{parse, parse_fragment};
pub use crate::entities::decode_entities;
pub use crate::tokenizer::{Token, tokenize};
