//! The document tree: element insertion, subtree removal, traversal.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// An element tree stored in a slotmap arena.
///
/// Links live beside the elements in secondary maps keyed by [`NodeId`].
/// The first node inserted without a parent is the document root; later
/// parentless nodes are detached and invisible to document queries.
pub struct Dom {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless node. The first one becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.root.get_or_insert(id);
        id
    }

    /// Append a node under `parent`. A stale `parent` leaves it detached.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        if self.nodes.contains_key(parent) {
            if let Some(entry) = self.children.entry(parent) {
                entry.or_default().push(id);
            }
            self.parent.insert(id, parent);
        }
        id
    }

    /// Remove `id` with its whole subtree, returning the element's own data.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        let subtree = self.descendants(id);
        let data = self.nodes.remove(id)?;

        if let Some(parent) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent) {
                siblings.retain(|&child| child != id);
            }
        }
        self.children.remove(id);
        if self.root == Some(id) {
            self.root = None;
        }

        for node in subtree {
            self.nodes.remove(node);
            self.children.remove(node);
            self.parent.remove(node);
        }
        Some(data)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Child elements in order; empty for leaves and stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parent first, root last.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        std::iter::successors(self.parent(id), |&node| self.parent(node)).collect()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Everything below `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.push_subtree(id, &mut out);
        out
    }

    /// The root and everything below it, in document order.
    pub fn document_order(&self) -> Vec<NodeId> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        let mut out = vec![root];
        self.push_subtree(root, &mut out);
        out
    }

    fn push_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.children(id) {
            out.push(child);
            self.push_subtree(child, out);
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
