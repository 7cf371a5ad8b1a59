//! Tree and node identifiers.

use core::fmt;
use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

/// Identity of a [`Tree`][`crate::Tree`] instance.
///
/// Every tree is assigned a process-unique identity on construction. The
/// identity is embedded in every [`NodeId`] the tree hands out, and the only
/// thing it is ever used for is the ownership check: an ID minted by one tree
/// is rejected by every other tree. It is never traversed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(NonZeroU64);

impl TreeId {
    /// Returns a fresh, process-unique tree identity.
    #[must_use]
    pub(crate) fn new() -> Self {
        /// Source of tree identities. Starts at 1 so the value is never zero.
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let raw = NEXT.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::new(raw).expect("[consistency] tree ID counter starts at 1 and only grows"))
    }
}

impl fmt::Debug for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeId({})", self.0)
    }
}

/// Node ID.
///
/// A `NodeId` is a stable handle to a node: it stays valid while the node is
/// in the tree, across any number of structural changes, and becomes stale
/// once the node is removed. It also remembers which tree created it, so
/// passing it to a different tree fails with
/// [`TreeError::ForeignNode`][`crate::TreeError::ForeignNode`] instead of
/// silently addressing an unrelated node.
///
/// The internal value is not meaningful to users; use `Debug` formatting only
/// for dumping the value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// Identity of the owning tree.
    tree: TreeId,
    /// Per-tree node key. Keys are allocated monotonically and never reused.
    key: u32,
}

impl NodeId {
    /// Creates a node ID owned by the given tree.
    #[inline]
    #[must_use]
    pub(crate) fn new(tree: TreeId, key: u32) -> Self {
        Self { tree, key }
    }

    /// Returns the identity of the owning tree.
    #[inline]
    #[must_use]
    pub(crate) fn tree(self) -> TreeId {
        self.tree
    }

    /// Returns the node key as an index into the position table.
    #[inline]
    #[must_use]
    pub(crate) fn key(self) -> usize {
        self.key as usize
    }
}

// Prevent `{:#?}` from printing the value in redundant multiple lines.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::mem;

    #[test]
    fn niche_optimized() {
        assert_eq!(
            mem::size_of::<NodeId>(),
            mem::size_of::<Option<NodeId>>(),
            "`Option<NodeId>` type must have the same size as \
             `NodeId` type due to niche optimization"
        );
    }

    #[test]
    fn tree_ids_are_unique() {
        let a = TreeId::new();
        let b = TreeId::new();
        assert_ne!(a, b, "every tree must get its own identity");
    }
}
