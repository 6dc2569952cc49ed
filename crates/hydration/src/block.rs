//! Blocks: the unit a component renders, as a tree of node groups.
//!
//! A block is moved, removed and re-rendered as a whole. These helpers work on
//! a mutable tree and are independent of an active hydration pass.

use crate::error::HydrationError;
use dom::{Dom, NodeId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Node(NodeId),
    List(Vec<Block>),
    /// A run of blocks followed by an optional anchor comment that marks the
    /// fragment's end in the tree.
    Fragment {
        nodes: Vec<Block>,
        anchor: Option<NodeId>,
    },
}

/// Where a block sits: its parent and the sibling just past its last node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRange {
    pub parent: NodeId,
    pub anchor: Option<NodeId>,
}

impl From<NodeId> for Block {
    fn from(id: NodeId) -> Self {
        Block::Node(id)
    }
}

/// Flatten `block` to its nodes in tree order.
pub fn normalize_block(block: &Block) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect(block, &mut out);
    out
}

fn collect(block: &Block, out: &mut Vec<NodeId>) {
    match block {
        Block::Node(id) => out.push(*id),
        Block::List(blocks) => blocks.iter().for_each(|b| collect(b, out)),
        Block::Fragment { nodes, anchor } => {
            nodes.iter().for_each(|b| collect(b, out));
            out.extend(*anchor);
        }
    }
}

/// `None` when the block is empty or its first node is detached.
pub fn block_range(dom: &Dom, block: &Block) -> Option<BlockRange> {
    let nodes = normalize_block(block);
    let first = *nodes.first()?;
    let last = *nodes.last()?;
    Some(BlockRange {
        parent: dom.parent(first)?,
        anchor: dom.next_sibling(last),
    })
}

pub fn remove_block(dom: &mut Dom, block: &Block) -> Result<(), HydrationError> {
    for id in normalize_block(block) {
        dom.detach(id)?;
    }
    Ok(())
}

/// Insert every node of `block` under `parent` before `anchor` (or at the end),
/// moving nodes that are currently attached elsewhere.
pub fn insert_block(
    dom: &mut Dom,
    block: &Block,
    parent: NodeId,
    anchor: Option<NodeId>,
) -> Result<(), HydrationError> {
    for id in normalize_block(block) {
        dom.detach(id)?;
        dom.insert_before(parent, id, anchor)?;
    }
    Ok(())
}

/// Remove `block`, build its replacement with `rebuild`, and insert the
/// replacement where the old block was.
///
/// Nothing is touched if the block is not attached. If `rebuild` fails the old
/// block stays removed and the error is returned.
pub fn replace_block(
    dom: &mut Dom,
    block: &Block,
    rebuild: impl FnOnce(&mut Dom) -> Result<Block, HydrationError>,
) -> Result<Block, HydrationError> {
    let range = block_range(dom, block).ok_or(HydrationError::DetachedBlock)?;
    remove_block(dom, block)?;
    let fresh = rebuild(dom)?;
    insert_block(dom, &fresh, range.parent, range.anchor)?;
    log::debug!(
        target: "hydration.block",
        "replaced block under {} ({} nodes)",
        range.parent,
        normalize_block(&fresh).len()
    );
    Ok(fresh)
}
