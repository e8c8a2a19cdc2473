//! Arena-based document tree storage.
//!
//! The arena owns every node; all structure links are indices into a single
//! `Vec<DomNode>`. This eliminates:
//! - Rc/Arc overhead (16 bytes per pointer)
//! - Cache misses (nodes stored sequentially)
//! - Lifetime entanglement between nodes (queries borrow the arena, nothing
//!   else)
//!
//! The tree is wired once, at construction time, through [`DomArena::append_child`].
//! Queries never mutate it, so a `&DomArena` can be shared freely across
//! threads.

use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId};

/// Arena allocator for document nodes.
#[derive(Debug, Default)]
pub struct DomArena {
    /// All nodes stored sequentially (cache-friendly).
    nodes: Vec<DomNode>,

    /// Root node ID (if set).
    root_id: Option<NodeId>,
}

impl DomArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root_id: None,
        }
    }

    /// Create an arena with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root_id: None,
        }
    }

    /// Add a node to the arena, returns its ID. The node starts detached;
    /// wire it with [`DomArena::append_child`].
    pub fn add_node(&mut self, mut node: DomNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        node.node_id = node_id;
        self.nodes.push(node);
        node_id
    }

    /// Get a node by ID, failing on ids this arena never minted.
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get a node by ID.
    ///
    /// Panics on foreign ids; callers hold ids minted by this arena, so
    /// traversal and matching go through here without a failure path.
    pub fn node(&self, node_id: NodeId) -> &DomNode {
        &self.nodes[node_id as usize]
    }

    /// Append `child` as the last child of `parent`, wiring parent,
    /// first/last-child and sibling links.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        self.get(child)?;

        let prev = {
            let p = &mut self.nodes[parent as usize];
            let prev = p.last_child;
            if p.first_child.is_none() {
                p.first_child = Some(child);
            }
            p.last_child = Some(child);
            prev
        };

        if let Some(prev_id) = prev {
            self.nodes[prev_id as usize].next_sibling = Some(child);
        }

        let c = &mut self.nodes[child as usize];
        c.parent = Some(parent);
        c.prev_sibling = prev;
        c.next_sibling = None;

        Ok(())
    }

    /// Set the root node.
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    /// Get the root node ID.
    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    /// Get the root node, if one was set.
    pub fn root(&self) -> Option<&DomNode> {
        self.root_id.map(|id| self.node(id))
    }

    /// Parent of a node.
    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(node_id as usize)?.parent
    }

    /// Children of a node, in sibling order.
    pub fn children(&self, node_id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut next = self
            .nodes
            .get(node_id as usize)
            .and_then(|n| n.first_child);
        std::iter::from_fn(move || {
            let id = next?;
            next = self.node(id).next_sibling;
            Some(id)
        })
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &DomNode> {
        self.nodes.iter()
    }

    /// Iterator over all node IDs.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| i as NodeId)
    }

    /// Clear the arena (reuses the allocation).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root_id = None;
    }
}
