//! Node records and proxies.

use core::fmt;

use crate::id::NodeId;
use crate::tree::traverse::{Ancestors, BreadthFirst, Children, Descendants, Subtree};
use crate::tree::Tree;

/// One stored node: the payload, its depth tag, and its stable key.
///
/// The entry's index in the owning sequence is the node's position; the
/// cached copy of that index lives in the tree's position table, not here.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    /// Stable per-tree key, index into the position table.
    pub(crate) key: u32,
    /// Distance from the root. The root has depth 0.
    pub(crate) depth: usize,
    /// Payload, opaque to the container.
    pub(crate) value: T,
}

/// Immutable reference to a node.
///
/// This type guarantees that the node was present in the tree when the proxy
/// was created; the borrow of the tree keeps that true for the proxy's whole
/// lifetime.
pub struct NodeRef<'a, T> {
    /// Owning tree.
    tree: &'a Tree<T>,
    /// Position of the node in the stored sequence.
    pos: usize,
}

impl<'a, T> NodeRef<'a, T> {
    /// Creates a new `NodeRef` for the node at the given position.
    #[inline]
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, pos: usize) -> Self {
        Self { tree, pos }
    }

    /// Returns the node ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.tree.id_at(self.pos)
    }

    /// Returns a reference to the value of the node.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a T {
        &self.tree.entries[self.pos].value
    }

    /// Returns the depth of the node. The root has depth 0.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tree.entries[self.pos].depth
    }

    /// Returns the parent node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.pos == 0 {
            return None;
        }
        let parent_pos = self
            .tree
            .parent_pos(self.pos, self.depth())
            .expect("[consistency] a non-root node must have a parent");
        Some(Self::new(self.tree, parent_pos))
    }

    /// Returns an iterator over the direct children of the node.
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'a, T> {
        Children::new(self.tree, self.pos)
    }

    /// Returns an iterator over all descendants of the node, in pre-order.
    #[inline]
    #[must_use]
    pub fn descendants(&self) -> Descendants<'a, T> {
        Descendants::new(self.tree, self.pos)
    }

    /// Returns an iterator over the node and all its descendants, in
    /// pre-order.
    #[inline]
    #[must_use]
    pub fn subtree(&self) -> Subtree<'a, T> {
        Subtree::new(self.tree, self.pos)
    }

    /// Returns an iterator over the descendants of the node, layer by layer.
    ///
    /// See [`Tree::breadth_first`] for the ordering.
    #[inline]
    #[must_use]
    pub fn breadth_first(&self) -> BreadthFirst<'a, T> {
        BreadthFirst::new(self.tree, self.pos)
    }

    /// Returns an iterator over the ancestors of the node, nearest first.
    #[inline]
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'a, T> {
        Ancestors::new(self.tree, self.pos)
    }
}

impl<T: PartialEq> NodeRef<'_, T> {
    /// Returns true if both nodes have the same depth and equal values.
    ///
    /// The nodes may belong to different trees.
    #[must_use]
    pub fn structural_eq(&self, other: &NodeRef<'_, T>) -> bool {
        self.depth() == other.depth() && self.value() == other.value()
    }

    /// Returns true if both nodes have equal values, regardless of depth.
    #[must_use]
    pub fn value_eq(&self, other: &NodeRef<'_, T>) -> bool {
        self.value() == other.value()
    }
}

impl<T> Clone for NodeRef<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id())
            .field("depth", &self.depth())
            .field("value", self.value())
            .finish()
    }
}
