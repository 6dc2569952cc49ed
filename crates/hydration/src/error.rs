use dom::{DomError, NodeId};
use std::fmt;

/// Unrecoverable hydration failures. Shape mismatches are not errors; see
/// [`Mismatch`](crate::Mismatch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydrationError {
    /// A whole-fragment anchor was resolved but has no preceding sibling, which
    /// the marker protocol never produces.
    FragmentAnchorWithoutPrevious { anchor: NodeId },
    /// A block operation needed the block's position but it is not attached.
    DetachedBlock,
    Dom(DomError),
}

impl fmt::Display for HydrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HydrationError::FragmentAnchorWithoutPrevious { anchor } => {
                write!(f, "fragment anchor {anchor} has no previous sibling")
            }
            HydrationError::DetachedBlock => write!(f, "block is not attached to a parent"),
            HydrationError::Dom(err) => write!(f, "tree operation failed: {err}"),
        }
    }
}

impl std::error::Error for HydrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HydrationError::Dom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomError> for HydrationError {
    fn from(err: DomError) -> Self {
        HydrationError::Dom(err)
    }
}
