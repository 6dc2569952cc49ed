//! Hydration reconciliation engine.
//!
//! Walks a server-rendered tree in lock-step with client template positions and
//! claims, for each position, the existing node that implements it.
//!
//! Protocol overview:
//! - A hydration scope is opened with [`HydrationContext::with_hydration`] (start
//!   from a container) or [`HydrationContext::hydrate_node`] (start from a node).
//! - Callers publish a single-shot [`InsertionState`] and call
//!   [`HydrationContext::locate`] to resolve the node to consume next.
//! - [`HydrationContext::adopt`] claims that node, validates it against the
//!   template shape and advances the cursor.
//!
//! Fragments are sibling runs delimited by `<!--[-->` and `<!--]-->`. Matching a
//! close marker back to its open marker is memoized per close marker, so a walk
//! over many sibling fragments stays linear.
//!
//! All ambient state lives in the context object; nested scopes save and
//! restore the caller's cursor and insertion state.

mod adopt;
mod anchors;
pub mod block;
mod config;
mod context;
mod counters;
mod diagnostics;
mod error;
mod fragment;
mod insertion;
mod locate;
mod lookup;
pub mod markers;
mod position;
mod scope;

pub use crate::adopt::TemplateShape;
pub use crate::anchors::{
    AnchorPolicy, VaporAnchors, is_empty_text_node, is_non_hydration_node,
    locate_fragment_anchor,
};
pub use crate::block::{Block, BlockRange};
pub use crate::config::HydrationConfig;
pub use crate::context::{HydrationContext, HydrationCursor};
pub use crate::counters::HydrationCounters;
pub use crate::diagnostics::Mismatch;
pub use crate::error::HydrationError;
pub use crate::fragment::{FragmentMatchCache, locate_end_anchor};
pub use crate::insertion::{InsertionAnchor, InsertionState};
pub use crate::position::{PositionCache, Resume};
