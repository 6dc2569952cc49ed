use crate::NodeId;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    UnknownNode(NodeId),
    InvalidParent(NodeId),
    AlreadyAttached(NodeId),
    CycleDetected { parent: NodeId, child: NodeId },
    InvalidSibling { parent: NodeId, before: NodeId },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::UnknownNode(id) => write!(f, "unknown node {id}"),
            DomError::InvalidParent(id) => write!(f, "node {id} cannot have children"),
            DomError::AlreadyAttached(id) => write!(f, "node {id} already has a parent"),
            DomError::CycleDetected { parent, child } => {
                write!(f, "inserting {child} under {parent} would create a cycle")
            }
            DomError::InvalidSibling { parent, before } => {
                write!(f, "node {before} is not a child of {parent}")
            }
        }
    }
}

impl std::error::Error for DomError {}
