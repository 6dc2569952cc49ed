//! Arena-backed node tree used as the hydration target.
//!
//! Nodes live in a single `Vec` and are addressed by [`NodeId`]. Every node
//! keeps parent, first/last child and previous/next sibling links, so all
//! positional navigation the hydration walk performs is O(1) per step.
//!
//! Invariants:
//! - A node has at most one parent and appears exactly once in that parent's
//!   sibling chain.
//! - Only `Document` and `Element` nodes have children.
//! - `NodeId`s are never reused; a detached node keeps its id and may be
//!   reattached.

mod arena;
pub mod debug;
mod error;
mod types;

pub use crate::arena::{Children, Dom};
pub use crate::debug::{describe, outline};
pub use crate::error::DomError;
pub use crate::types::{NodeId, NodeKind, NodeType};
