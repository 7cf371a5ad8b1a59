//! Tree traversal.
//!
//! All iterators here are scans over the stored pre-order sequence; none of
//! them follow pointers. They borrow the tree immutably, so the tree cannot
//! be mutated while an iterator is alive.

use core::iter;
use core::ops::Range;

use crate::tree::{NodeRef, Tree};

/// Iterator over every node of the tree, in the stored (pre-order) sequence.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    /// Tree being traversed.
    tree: &'a Tree<T>,
    /// Remaining positions.
    range: Range<usize>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates a new iterator over the whole sequence.
    #[inline]
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            range: 0..tree.entries.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.range.next()?;
        Some(NodeRef::new(self.tree, pos))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let pos = self.range.next_back()?;
        Some(NodeRef::new(self.tree, pos))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> iter::FusedIterator for Iter<'_, T> {}

/// Iterator over the direct children of a node, in sequence order.
///
/// The scan covers the parent's subtree range and skips entries deeper than
/// one level below the parent.
#[derive(Debug, Clone)]
pub struct Children<'a, T> {
    /// Tree being traversed.
    tree: &'a Tree<T>,
    /// Depth of children, one below the parent.
    child_depth: usize,
    /// Next position to inspect.
    cursor: usize,
    /// End of the parent's subtree range (exclusive).
    end: usize,
}

impl<'a, T> Children<'a, T> {
    /// Creates a new iterator over the children of the node at `parent_pos`.
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, parent_pos: usize) -> Self {
        Self {
            tree,
            child_depth: tree.entries[parent_pos].depth + 1,
            cursor: parent_pos + 1,
            end: parent_pos + tree.subtree_size(parent_pos),
        }
    }
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.end {
            let pos = self.cursor;
            self.cursor += 1;
            if self.tree.entries[pos].depth == self.child_depth {
                return Some(NodeRef::new(self.tree, pos));
            }
        }
        None
    }
}

impl<T> iter::FusedIterator for Children<'_, T> {}

/// Iterator over all descendants of a node, in pre-order.
///
/// The descendants of a node are exactly the contiguous run after it, so this
/// is a plain range walk.
#[derive(Debug, Clone)]
pub struct Descendants<'a, T> {
    /// Tree being traversed.
    tree: &'a Tree<T>,
    /// Remaining positions.
    range: Range<usize>,
}

impl<'a, T> Descendants<'a, T> {
    /// Creates a new iterator over the descendants of the node at `pos`.
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, pos: usize) -> Self {
        Self {
            tree,
            range: (pos + 1)..(pos + tree.subtree_size(pos)),
        }
    }
}

impl<'a, T> Iterator for Descendants<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.range.next()?;
        Some(NodeRef::new(self.tree, pos))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Descendants<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let pos = self.range.next_back()?;
        Some(NodeRef::new(self.tree, pos))
    }
}

impl<T> ExactSizeIterator for Descendants<'_, T> {}
impl<T> iter::FusedIterator for Descendants<'_, T> {}

/// Iterator over a node and all its descendants, in pre-order.
#[derive(Debug, Clone)]
pub struct Subtree<'a, T> {
    /// Tree being traversed.
    tree: &'a Tree<T>,
    /// Remaining positions.
    range: Range<usize>,
}

impl<'a, T> Subtree<'a, T> {
    /// Creates a new iterator over the subtree of the node at `pos`.
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, pos: usize) -> Self {
        Self {
            tree,
            range: pos..(pos + tree.subtree_size(pos)),
        }
    }
}

impl<'a, T> Iterator for Subtree<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.range.next()?;
        Some(NodeRef::new(self.tree, pos))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Subtree<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let pos = self.range.next_back()?;
        Some(NodeRef::new(self.tree, pos))
    }
}

impl<T> ExactSizeIterator for Subtree<'_, T> {}
impl<T> iter::FusedIterator for Subtree<'_, T> {}

/// Iterator over the descendants of a node, layer by layer.
///
/// Each layer is produced by rescanning the node's subtree range for entries
/// at exactly that depth, so within a layer the order is sequence order.
/// Iterating all nodes is `O(n * height)`, not `O(n)`.
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a, T> {
    /// Tree being traversed.
    tree: &'a Tree<T>,
    /// Start of the subtree range (exclusive of the toplevel node).
    from: usize,
    /// End of the subtree range (exclusive).
    to: usize,
    /// Depth of the layer currently being scanned.
    level: usize,
    /// Next position to inspect within the current layer scan.
    cursor: usize,
    /// Whether the current layer has produced at least one node.
    matched: bool,
}

impl<'a, T> BreadthFirst<'a, T> {
    /// Creates a new iterator over the layers below the node at `pos`.
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, pos: usize) -> Self {
        let from = pos + 1;
        Self {
            tree,
            from,
            to: pos + tree.subtree_size(pos),
            level: tree.entries[pos].depth + 1,
            cursor: from,
            matched: false,
        }
    }
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.cursor < self.to {
                let pos = self.cursor;
                self.cursor += 1;
                if self.tree.entries[pos].depth == self.level {
                    self.matched = true;
                    return Some(NodeRef::new(self.tree, pos));
                }
            }
            // The first fully empty layer ends the iteration.
            if !self.matched {
                return None;
            }
            self.matched = false;
            self.level += 1;
            self.cursor = self.from;
        }
    }
}

impl<T> iter::FusedIterator for BreadthFirst<'_, T> {}

/// Iterator over the ancestors of a node, from the nearest parent up to the
/// root.
///
/// Each step is a backward scan for the nearest entry one level higher, so
/// the walk is strictly decreasing in depth and always terminates.
#[derive(Debug, Clone)]
pub struct Ancestors<'a, T> {
    /// Tree being traversed.
    tree: &'a Tree<T>,
    /// Position of the node whose parent is produced next.
    pos: usize,
}

impl<'a, T> Ancestors<'a, T> {
    /// Creates a new iterator over the ancestors of the node at `pos`.
    #[inline]
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, pos: usize) -> Self {
        Self { tree, pos }
    }
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let depth = self.tree.entries[self.pos].depth;
        if depth == 0 {
            return None;
        }
        let parent_pos = self
            .tree
            .parent_pos(self.pos, depth)
            .expect("[consistency] a non-root node must have a parent");
        self.pos = parent_pos;
        Some(NodeRef::new(self.tree, parent_pos))
    }
}

impl<T> iter::FusedIterator for Ancestors<'_, T> {}
