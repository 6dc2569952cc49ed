//! Comment payloads emitted by the server renderer.

/// Opens a fragment: a sibling run with no wrapping element.
pub const FRAGMENT_OPEN: &str = "[";
/// Closes the fragment opened by the matching [`FRAGMENT_OPEN`].
pub const FRAGMENT_CLOSE: &str = "]";
/// Opens a dynamic node range that hydrates as a single unit.
pub const DYNAMIC_OPEN: &str = "[[";
/// Closes the range opened by [`DYNAMIC_OPEN`].
pub const DYNAMIC_CLOSE: &str = "]]";

pub const IF_ANCHOR_LABEL: &str = "if";
pub const FOR_ANCHOR_LABEL: &str = "for";
pub const SLOT_ANCHOR_LABEL: &str = "slot";
pub const DYNAMIC_COMPONENT_ANCHOR_LABEL: &str = "dynamic-component";
