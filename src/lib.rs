//! Server-rendered tree hydration.
//!
//! Re-exports the node tree (`dom`), the markup builder (`markup`) and the
//! hydration engine (`hydration`) under one crate.

pub use dom;
pub use hydration;
pub use markup;

pub use dom::{Dom, DomError, NodeId, NodeKind};
pub use hydration::{
    AnchorPolicy, Block, HydrationConfig, HydrationContext, HydrationError, InsertionAnchor,
    Mismatch, VaporAnchors,
};
pub use markup::{parse, parse_fragment};
