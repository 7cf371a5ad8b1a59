//! Fluent tree builder.

use crate::error::TreeError;
use crate::id::NodeId;
use crate::tree::Tree;

/// Fluent tree builder.
///
/// `TreeBuilder` remembers "the current node".
///
/// * [`child`][`TreeBuilder::child`] adds a new last child to the current
///   node and makes it current.
/// * [`sibling`][`TreeBuilder::sibling`] adds a new last child to the current
///   node's parent and makes it current.
/// * [`parent`][`TreeBuilder::parent`] makes the parent the new current node.
///
/// # Examples
///
/// ```
/// use treevec::{Tree, TreeBuilder};
///
/// let mut tree = Tree::new();
/// TreeBuilder::new(&mut tree, "root")?
///     .child("0")
///     .child("0-0")
///     .sibling("0-1")
///     .parent()
///     .sibling("1")
///     .child("1-0");
///
/// // Tree:
/// //  root
/// //  |-- 0
/// //  |   |-- 0-0
/// //  |   `-- 0-1
/// //  `-- 1
/// //      `-- 1-0 (<-- current)
///
/// assert_eq!(
///     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
///     ["root", "0", "0-0", "0-1", "1", "1-0"],
/// );
/// # Ok::<_, treevec::TreeError>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder<'a, T> {
    /// Target tree.
    tree: &'a mut Tree<T>,
    /// Node ID of the root node.
    root: NodeId,
    /// Current node.
    current: NodeId,
}

impl<'a, T> TreeBuilder<'a, T> {
    /// Creates a root node and the tree builder for it.
    ///
    /// # Errors
    ///
    /// Fails with [`TreeError::RootAlreadyExists`] if the tree is not empty.
    pub fn new(tree: &'a mut Tree<T>, root_value: T) -> Result<Self, TreeError> {
        let root = tree.add(root_value, None)?;
        Ok(Self {
            tree,
            root,
            current: root,
        })
    }

    /// Returns a reference to the tree.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &Tree<T> {
        self.tree
    }

    /// Returns the node ID of the root node.
    #[inline]
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Returns the node ID of the current node.
    #[inline]
    #[must_use]
    pub fn current_id(&self) -> NodeId {
        self.current
    }

    /// Appends a child node to the current node, and changes the current node
    /// to it.
    pub fn child(&mut self, value: T) -> &mut Self {
        let new = self
            .tree
            .add(value, Some(self.current))
            .expect("[consistency] the current node is alive in the tree");
        self.current = new;
        self
    }

    /// Appends a sibling after the current node's parent's existing children,
    /// and changes the current node to it.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root, which cannot have siblings.
    pub fn sibling(&mut self, value: T) -> &mut Self {
        let parent = self
            .tree
            .parent(self.current)
            .expect("[consistency] the current node is alive in the tree")
            .expect("[precondition] the current node should not be the root");
        let new = self
            .tree
            .add(value, Some(parent))
            .expect("[consistency] the parent is alive in the tree");
        self.current = new;
        self
    }

    /// Tries to change the current node to the parent of the current node.
    ///
    /// Returns `None` if the current node is the root.
    pub fn try_parent(&mut self) -> Option<&mut Self> {
        let parent = self
            .tree
            .parent(self.current)
            .expect("[consistency] the current node is alive in the tree")?;
        self.current = parent;
        Some(self)
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root.
    pub fn parent(&mut self) -> &mut Self {
        self.try_parent()
            .expect("[precondition] the current node should not be the root")
    }
}
