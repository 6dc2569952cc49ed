//! Dev-time mismatch reporting.

use dom::NodeId;
use std::fmt;

/// A recoverable disagreement between the server tree and the template.
///
/// Hydration keeps going after a mismatch, using the node it located.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// The adopted node does not have the shape the template expects.
    Shape {
        node: NodeId,
        /// Template markup for the position (as given to `adopt`).
        expected: String,
        /// One-line rendering of the adopted node.
        found: String,
    },
    /// No node was available where the template expects one.
    Missing {
        parent: Option<NodeId>,
        /// One-line rendering of the ambient parent, when there is one.
        context: Option<String>,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Shape {
                node,
                expected,
                found,
            } => write!(
                f,
                "hydration mismatch: adopted {found} ({node}) for template `{expected}`"
            ),
            Mismatch::Missing { parent, context } => {
                write!(f, "hydration mismatch: no node to hydrate")?;
                if let Some(parent) = parent {
                    write!(f, " in {parent}")?;
                }
                if let Some(context) = context {
                    write!(f, " {context}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Diagnostics {
    enabled: bool,
    recorded: Vec<Mismatch>,
}

impl Diagnostics {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            recorded: Vec::new(),
        }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn report(&mut self, mismatch: Mismatch) {
        if !self.enabled {
            return;
        }
        log::warn!(target: "hydration", "{mismatch}");
        self.recorded.push(mismatch);
    }

    pub(crate) fn recorded(&self) -> &[Mismatch] {
        &self.recorded
    }

    pub(crate) fn take(&mut self) -> Vec<Mismatch> {
        std::mem::take(&mut self.recorded)
    }
}
