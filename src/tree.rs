//! Flattened tree container.

mod builder;
mod hierarchy_print;
mod node;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod traverse;

use crate::error::TreeError;
use crate::id::{NodeId, TreeId};
use crate::slot::ChildSlot;

pub use self::builder::TreeBuilder;
pub use self::hierarchy_print::HierarchyPrint;
pub use self::node::NodeRef;

use self::node::Entry;
use self::traverse::{Ancestors, BreadthFirst, Children, Descendants, Iter, Subtree};

/// Tree stored as one contiguous pre-order sequence of `(value, depth)` pairs.
///
/// The sequence order is the single source of truth: a node always precedes
/// its descendants, a subtree is always a contiguous range, and "parent of"
/// means "nearest preceding entry with depth one less". Cached positions are
/// repaired explicitly after every structural change.
///
/// Nodes are addressed by [`NodeId`] handles, which stay valid across
/// structural changes until the node itself is removed. Every operation that
/// takes a node first validates that the handle belongs to this tree and is
/// still alive, and only then mutates; a failed call leaves the tree
/// untouched.
///
/// # Examples
///
/// ```
/// use treevec::Tree;
///
/// let mut tree = Tree::new();
/// let root = tree.add("root", None)?;
/// let a = tree.add("a", Some(root))?;
/// let b = tree.add("b", Some(root))?;
/// tree.add("a-0", Some(a))?;
///
/// // Pre-order: a node comes right before its descendants.
/// assert_eq!(
///     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
///     ["root", "a", "a-0", "b"],
/// );
/// assert_eq!(tree.parent(b)?, Some(root));
/// # Ok::<_, treevec::TreeError>(())
/// ```
#[derive(Debug)]
pub struct Tree<T> {
    /// Identity of this tree, for ownership checks.
    id: TreeId,
    /// Pre-order sequence of nodes. The order is the source of truth.
    entries: Vec<Entry<T>>,
    /// Position cache, indexed by node key. `None` is used for removed nodes.
    ///
    /// The length of this vec is also the next key to allocate; keys are
    /// never reused, so stale handles keep failing instead of aliasing newer
    /// nodes.
    positions: Vec<Option<usize>>,
}

impl<T> Tree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::Tree;
    ///
    /// let tree = Tree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: TreeId::new(),
            entries: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Creates a new empty tree with at least the given capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: TreeId::new(),
            entries: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new tree with a root node.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::Tree;
    ///
    /// let tree = Tree::with_root(42);
    /// assert_eq!(tree.len(), 1);
    /// let root = tree.root().expect("the tree was created with a root");
    /// assert_eq!(tree.value(root).copied(), Ok(42));
    /// ```
    #[must_use]
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.add(value, None)
            .expect("[consistency] an empty tree accepts a root");
        tree
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the ID of the root node, or `None` if the tree is empty.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.entries.first().map(|entry| NodeId::new(self.id, entry.key))
    }

    /// Returns a [proxy object][`NodeRef`] to the node, or `None` for foreign
    /// or removed handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add("root", None)?;
    ///
    /// let node = tree.get(root).expect("the root is alive");
    /// assert_eq!(*node.value(), "root");
    /// assert_eq!(node.depth(), 0);
    /// # Ok::<_, treevec::TreeError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<NodeRef<'_, T>> {
        self.lookup(node).ok().map(|pos| NodeRef::new(self, pos))
    }

    /// Returns a reference to the value of the node.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    #[inline]
    pub fn value(&self, node: NodeId) -> Result<&T, TreeError> {
        let pos = self.lookup(node)?;
        Ok(&self.entries[pos].value)
    }

    /// Returns a mutable reference to the value of the node.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    #[inline]
    pub fn value_mut(&mut self, node: NodeId) -> Result<&mut T, TreeError> {
        let pos = self.lookup(node)?;
        Ok(&mut self.entries[pos].value)
    }

    /// Returns the depth of the node. The root has depth 0.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    #[inline]
    pub fn depth(&self, node: NodeId) -> Result<usize, TreeError> {
        let pos = self.lookup(node)?;
        Ok(self.entries[pos].depth)
    }

    /// Adds a node to the tree.
    ///
    /// With `parent` absent, the node becomes the root of an empty tree.
    /// With a parent, the node is inserted as the **last** child of the
    /// parent, i.e. right after the parent's entire existing subtree, at
    /// depth one below the parent.
    ///
    /// # Errors
    ///
    /// * [`TreeError::RootAlreadyExists`] if `parent` is `None` and the tree
    ///   is not empty.
    /// * [`TreeError::ForeignNode`] / [`TreeError::StaleNode`] if the parent
    ///   handle is invalid.
    ///
    /// # Panics
    ///
    /// Panics if the node key space (`u32`) is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add("root", None)?;
    /// assert_eq!(tree.add("second root", None), Err(TreeError::RootAlreadyExists));
    ///
    /// let a = tree.add("a", Some(root))?;
    /// tree.add("a-0", Some(a))?;
    /// // "b" goes after the whole subtree of "a".
    /// tree.add("b", Some(root))?;
    /// assert_eq!(
    ///     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
    ///     ["root", "a", "a-0", "b"],
    /// );
    /// # Ok::<_, treevec::TreeError>(())
    /// ```
    pub fn add(&mut self, value: T, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        match parent {
            None => {
                if !self.entries.is_empty() {
                    return Err(TreeError::RootAlreadyExists);
                }
                let key = self.alloc_key();
                self.entries.push(Entry { key, depth: 0, value });
                self.positions.push(Some(0));
                Ok(NodeId::new(self.id, key))
            }
            Some(parent) => {
                let parent_pos = self.lookup(parent)?;
                let insert_at = parent_pos + self.subtree_size(parent_pos);
                let depth = self.entries[parent_pos].depth + 1;
                let key = self.alloc_key();
                self.entries.insert(insert_at, Entry { key, depth, value });
                self.positions.push(None);
                self.fix_positions(insert_at);
                Ok(NodeId::new(self.id, key))
            }
        }
    }

    /// Removes the node and its entire subtree from the tree.
    ///
    /// Returns the number of removed nodes. All handles to removed nodes
    /// become stale.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add("root", None)?;
    /// let a = tree.add("a", Some(root))?;
    /// tree.add("a-0", Some(a))?;
    /// tree.add("b", Some(root))?;
    ///
    /// assert_eq!(tree.remove(a)?, 2, "a node is removed along with its subtree");
    /// assert_eq!(
    ///     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
    ///     ["root", "b"],
    /// );
    /// # Ok::<_, treevec::TreeError>(())
    /// ```
    pub fn remove(&mut self, node: NodeId) -> Result<usize, TreeError> {
        let pos = self.lookup(node)?;
        let count = self.subtree_size(pos);
        for entry in self.entries.drain(pos..pos + count) {
            self.positions[entry.key as usize] = None;
        }
        self.fix_positions(pos);
        Ok(count)
    }

    /// Removes every node from the tree.
    ///
    /// All outstanding handles become stale.
    pub fn clear(&mut self) {
        self.entries.clear();
        for slot in &mut self.positions {
            *slot = None;
        }
    }

    /// Moves the node, together with its entire subtree, under a new parent.
    ///
    /// The target slot among the new parent's direct children is chosen by
    /// `slot`; see [`ChildSlot`]. Every relocated node keeps its value and
    /// its handle; only depths and positions change.
    ///
    /// Returns `Ok(false)` without mutating when the move is impossible:
    /// the node and the new parent are the same node, or the new parent lies
    /// inside the node's own subtree. Moving a node to the slot it already
    /// occupies returns `Ok(true)` and leaves the sequence unchanged.
    ///
    /// # Errors
    ///
    /// Fails if either handle belongs to another tree or has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::{ChildSlot, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add("root", None)?;
    /// let a = tree.add("a", Some(root))?;
    /// tree.add("a-0", Some(a))?;
    /// let b = tree.add("b", Some(root))?;
    ///
    /// assert!(tree.move_to(a, b, ChildSlot::Append)?);
    /// assert_eq!(
    ///     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
    ///     ["root", "b", "a", "a-0"],
    /// );
    /// assert_eq!(tree.depth(a)?, 2);
    ///
    /// // Moving a node into its own subtree is a no-op, not an error.
    /// assert!(!tree.move_to(b, a, ChildSlot::Append)?);
    /// # Ok::<_, treevec::TreeError>(())
    /// ```
    pub fn move_to(
        &mut self,
        node: NodeId,
        new_parent: NodeId,
        slot: ChildSlot,
    ) -> Result<bool, TreeError> {
        let pos = self.lookup(node)?;
        let parent_pos = self.lookup(new_parent)?;
        if node == new_parent || self.has_ancestor(parent_pos, pos) {
            return Ok(false);
        }

        let size = self.subtree_size(pos);
        let depth_delta =
            self.entries[parent_pos].depth as isize + 1 - self.entries[pos].depth as isize;
        // Resolved against the pre-move sequence; compensated below.
        let target = self.child_slot_index(parent_pos, slot);

        let mut block: Vec<Entry<T>> = self.entries.drain(pos..pos + size).collect();
        for entry in &mut block {
            entry.depth = (entry.depth as isize + depth_delta) as usize;
        }
        // When moving forward, the excised run sat in front of the target,
        // so the target has shifted back by the run length. The target can
        // never fall strictly inside the run: that would put the new parent
        // in the moved subtree, which the guard above rejects.
        let insert_at = if target > pos { target - size } else { target };
        self.entries.splice(insert_at..insert_at, block);
        self.fix_positions(pos.min(insert_at));
        Ok(true)
    }

    /// Returns the ID of the parent of the node.
    ///
    /// Returns `Ok(None)` only for the root.
    ///
    /// # Errors
    ///
    /// * [`TreeError::ForeignNode`] / [`TreeError::StaleNode`] if the handle
    ///   is invalid.
    /// * [`TreeError::Corrupted`] if a non-root node has no parent in the
    ///   stored sequence. This means the depth tags no longer form a valid
    ///   tree and is not recoverable.
    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        let pos = self.lookup(node)?;
        if pos == 0 {
            return Ok(None);
        }
        let depth = self.entries[pos].depth;
        match self.parent_pos(pos, depth) {
            Some(parent_pos) => Ok(Some(self.id_at(parent_pos))),
            None => Err(TreeError::Corrupted),
        }
    }

    /// Returns an iterator over the ancestors of the node, from the nearest
    /// parent up to the root.
    ///
    /// The iteration walks strictly upward in depth, so it always terminates.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add("root", None)?;
    /// let a = tree.add("a", Some(root))?;
    /// let a0 = tree.add("a-0", Some(a))?;
    ///
    /// assert_eq!(
    ///     tree.ancestors(a0)?.map(|node| *node.value()).collect::<Vec<_>>(),
    ///     ["a", "root"],
    /// );
    /// # Ok::<_, treevec::TreeError>(())
    /// ```
    pub fn ancestors(&self, node: NodeId) -> Result<Ancestors<'_, T>, TreeError> {
        let pos = self.lookup(node)?;
        Ok(Ancestors::new(self, pos))
    }

    /// Returns an iterator over the direct children of the node, in sequence
    /// order.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    pub fn children(&self, node: NodeId) -> Result<Children<'_, T>, TreeError> {
        let pos = self.lookup(node)?;
        Ok(Children::new(self, pos))
    }

    /// Returns an iterator over all descendants of the node, in pre-order.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    pub fn descendants(&self, node: NodeId) -> Result<Descendants<'_, T>, TreeError> {
        let pos = self.lookup(node)?;
        Ok(Descendants::new(self, pos))
    }

    /// Returns an iterator over the node itself followed by all its
    /// descendants, in pre-order.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    pub fn subtree(&self, node: NodeId) -> Result<Subtree<'_, T>, TreeError> {
        let pos = self.lookup(node)?;
        Ok(Subtree::new(self, pos))
    }

    /// Returns an iterator over the descendants of the node, layer by layer.
    ///
    /// For each depth below the node the subtree range is scanned in sequence
    /// order, collecting the nodes at exactly that depth; iteration stops at
    /// the first layer with no nodes. Within a layer the order is therefore
    /// sequence (pre-order) order, which groups cousins by position rather
    /// than by parent.
    ///
    /// # Errors
    ///
    /// Fails if the node belongs to another tree or has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add("root", None)?;
    /// let a = tree.add("a", Some(root))?;
    /// tree.add("a-0", Some(a))?;
    /// tree.add("b", Some(root))?;
    ///
    /// assert_eq!(
    ///     tree.breadth_first(root)?.map(|node| *node.value()).collect::<Vec<_>>(),
    ///     ["a", "b", "a-0"],
    /// );
    /// # Ok::<_, treevec::TreeError>(())
    /// ```
    pub fn breadth_first(&self, node: NodeId) -> Result<BreadthFirst<'_, T>, TreeError> {
        let pos = self.lookup(node)?;
        Ok(BreadthFirst::new(self, pos))
    }

    /// Returns the ordinal of the node among its parent's direct children.
    ///
    /// Returns `Ok(None)` for the root, which has no siblings.
    ///
    /// # Errors
    ///
    /// Same as [`parent`][`Self::parent`].
    pub fn child_index(&self, node: NodeId) -> Result<Option<usize>, TreeError> {
        let pos = self.lookup(node)?;
        if pos == 0 {
            return Ok(None);
        }
        let depth = self.entries[pos].depth;
        let parent_pos = self.parent_pos(pos, depth).ok_or(TreeError::Corrupted)?;
        let ordinal = self.entries[parent_pos + 1..pos]
            .iter()
            .filter(|entry| entry.depth == depth)
            .count();
        Ok(Some(ordinal))
    }

    /// Returns an iterator over all nodes in the stored (pre-order) sequence.
    ///
    /// The iterator is restartable: each call starts from the current first
    /// node. Mutating the tree requires `&mut self`, so the borrow checker
    /// rules out mutation mid-iteration; snapshot IDs first if you need to
    /// mutate while walking.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns the index of the first entry that violates the layout
    /// invariants, if any.
    ///
    /// Checked invariants: the depth step rule (only entry 0 has depth 0, and
    /// every later entry is at most one level deeper than its predecessor)
    /// and position cache correctness. This is a diagnostic for tests and
    /// assertions, not part of normal operation.
    #[must_use]
    pub fn find_inconsistency(&self) -> Option<usize> {
        for (i, entry) in self.entries.iter().enumerate() {
            let depth_ok = if i == 0 {
                entry.depth == 0
            } else {
                entry.depth >= 1 && entry.depth <= self.entries[i - 1].depth + 1
            };
            if !depth_ok {
                return Some(i);
            }
            if self.positions.get(entry.key as usize).copied().flatten() != Some(i) {
                return Some(i);
            }
        }
        None
    }

    /// Returns true if the layout invariants hold for the whole sequence.
    #[inline]
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.find_inconsistency().is_none()
    }

    /// Returns an object that renders the tree hierarchy with
    /// [`Display`][`core::fmt::Display`].
    ///
    /// Each node is printed on its own line, indented by depth, naming its
    /// parent's value; the root has no parent name.
    #[inline]
    #[must_use]
    pub fn hierarchy(&self) -> HierarchyPrint<'_, T> {
        HierarchyPrint::new(self)
    }

    // --- internals ---

    /// Resolves a node handle to its position in the sequence.
    ///
    /// This is the ownership check every public operation starts with, and it
    /// never mutates.
    fn lookup(&self, node: NodeId) -> Result<usize, TreeError> {
        if node.tree() != self.id {
            return Err(TreeError::ForeignNode);
        }
        match self.positions.get(node.key()) {
            Some(Some(pos)) => Ok(*pos),
            _ => Err(TreeError::StaleNode),
        }
    }

    /// Returns the ID of the node at the given position.
    #[inline]
    #[must_use]
    pub(crate) fn id_at(&self, pos: usize) -> NodeId {
        NodeId::new(self.id, self.entries[pos].key)
    }

    /// Allocates a fresh node key.
    ///
    /// Keys index into `self.positions` and are never reused.
    fn alloc_key(&self) -> u32 {
        u32::try_from(self.positions.len())
            .expect("[precondition] node key overflowed presumably due to too many node creations")
    }

    /// Returns the size of the subtree rooted at the given position.
    ///
    /// The root's subtree is the whole sequence; every other node's subtree
    /// is the node plus the following run of strictly deeper entries.
    fn subtree_size(&self, pos: usize) -> usize {
        if pos == 0 {
            return self.entries.len();
        }
        let depth = self.entries[pos].depth;
        1 + self.entries[pos + 1..]
            .iter()
            .take_while(|entry| entry.depth > depth)
            .count()
    }

    /// Rewrites the cached positions for the suffix starting at `from`.
    ///
    /// Called after every structural shift as an explicit repair step.
    fn fix_positions(&mut self, from: usize) {
        for i in from..self.entries.len() {
            self.positions[self.entries[i].key as usize] = Some(i);
        }
    }

    /// Maps a child slot of the parent at `parent_pos` to a sequence index.
    ///
    /// Only entries at exactly one level below the parent count as children;
    /// deeper entries are skipped. An out-of-range ordinal (and `Append`)
    /// resolves to the index just past the parent's subtree.
    fn child_slot_index(&self, parent_pos: usize, slot: ChildSlot) -> usize {
        let want = match slot {
            ChildSlot::Append => return parent_pos + self.subtree_size(parent_pos),
            ChildSlot::At(n) => n,
        };
        let parent_depth = self.entries[parent_pos].depth;
        let mut seen = 0;
        let mut i = parent_pos + 1;
        while i < self.entries.len() {
            let depth = self.entries[i].depth;
            if depth <= parent_depth {
                break;
            }
            if depth == parent_depth + 1 {
                if seen == want {
                    return i;
                }
                seen += 1;
            }
            i += 1;
        }
        i
    }

    /// Returns the position of the parent of the node at `pos` with the
    /// given depth: the nearest preceding entry one level higher.
    #[must_use]
    pub(crate) fn parent_pos(&self, pos: usize, depth: usize) -> Option<usize> {
        self.entries[..pos]
            .iter()
            .rposition(|entry| entry.depth + 1 == depth)
    }

    /// Returns true if the node at `ancestor_pos` is an ancestor of the node
    /// at `start_pos`, walking the parent chain upward.
    #[must_use]
    fn has_ancestor(&self, start_pos: usize, ancestor_pos: usize) -> bool {
        let mut pos = start_pos;
        let mut depth = self.entries[pos].depth;
        while depth > 0 {
            match self.parent_pos(pos, depth) {
                Some(parent_pos) => {
                    if parent_pos == ancestor_pos {
                        return true;
                    }
                    pos = parent_pos;
                    depth = self.entries[parent_pos].depth;
                }
                None => return false,
            }
        }
        false
    }
}

impl<T: Clone> Tree<T> {
    /// Copies the node, together with its entire subtree, under a new parent.
    ///
    /// Values are cloned into freshly allocated nodes; the originals are
    /// untouched. Targeting works exactly as for [`move_to`][`Self::move_to`].
    ///
    /// Returns the ID of the copy of `node`, or `Ok(None)` without mutating
    /// when the target is the node itself or lies inside the node's subtree.
    ///
    /// # Errors
    ///
    /// Fails if either handle belongs to another tree or has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treevec::{ChildSlot, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add("root", None)?;
    /// let a = tree.add("a", Some(root))?;
    /// tree.add("a-0", Some(a))?;
    /// let b = tree.add("b", Some(root))?;
    ///
    /// let copy = tree.copy_to(a, b, ChildSlot::Append)?.expect("not a cycle");
    /// assert_ne!(copy, a);
    /// assert_eq!(
    ///     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
    ///     ["root", "a", "a-0", "b", "a", "a-0"],
    /// );
    /// # Ok::<_, treevec::TreeError>(())
    /// ```
    pub fn copy_to(
        &mut self,
        node: NodeId,
        new_parent: NodeId,
        slot: ChildSlot,
    ) -> Result<Option<NodeId>, TreeError> {
        let pos = self.lookup(node)?;
        let parent_pos = self.lookup(new_parent)?;
        if node == new_parent || self.has_ancestor(parent_pos, pos) {
            return Ok(None);
        }

        let size = self.subtree_size(pos);
        let depth_delta =
            self.entries[parent_pos].depth as isize + 1 - self.entries[pos].depth as isize;
        let target = self.child_slot_index(parent_pos, slot);

        let first_key = self.alloc_key();
        let clones: Vec<Entry<T>> = self.entries[pos..pos + size]
            .iter()
            .enumerate()
            .map(|(offset, entry)| Entry {
                key: first_key + offset as u32,
                depth: (entry.depth as isize + depth_delta) as usize,
                value: entry.value.clone(),
            })
            .collect();
        self.positions.resize(self.positions.len() + size, None);
        self.entries.splice(target..target, clones);
        self.fix_positions(target);
        Ok(Some(NodeId::new(self.id, first_key)))
    }
}

impl<T: core::fmt::Display> Tree<T> {
    /// Renders the tree hierarchy into a string.
    ///
    /// See [`hierarchy`][`Self::hierarchy`] for the format.
    #[must_use]
    pub fn to_hierarchy_string(&self) -> String {
        self.hierarchy().to_string()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    /// Clones the stored sequence into a tree with a fresh identity.
    ///
    /// Nodes are never shared between two tree instances, so handles from the
    /// source tree are foreign to the clone.
    fn clone(&self) -> Self {
        Self {
            id: TreeId::new(),
            entries: self.entries.clone(),
            positions: self.positions.clone(),
        }
    }
}

/// Structural equality: same length and, at every position, the same depth
/// and an equal value. Both trees share the canonical pre-order layout, so
/// this is equivalent to tree isomorphism without costing a graph walk.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.depth == b.depth && a.value == b.value)
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_handle_does_not_alias_newer_nodes() {
        let mut tree = Tree::new();
        let root = tree.add("root", None).expect("empty tree accepts a root");
        let a = tree.add("a", Some(root)).expect("root is alive");
        tree.remove(a).expect("a is alive");

        let b = tree.add("b", Some(root)).expect("root is alive");
        assert_eq!(tree.value(a), Err(TreeError::StaleNode));
        assert_eq!(tree.value(b).copied(), Ok("b"));
    }

    #[test]
    fn clone_has_its_own_identity() {
        let mut tree = Tree::new();
        let root = tree.add("root", None).expect("empty tree accepts a root");
        let clone = tree.clone();

        assert_eq!(tree, clone, "clone is structurally equal");
        assert_eq!(
            clone.value(root),
            Err(TreeError::ForeignNode),
            "handles of the source tree do not address the clone",
        );
    }

    #[test]
    fn add_after_clear_starts_a_new_root() {
        let mut tree = Tree::new();
        let root = tree.add(1, None).expect("empty tree accepts a root");
        tree.add(2, Some(root)).expect("root is alive");
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.value(root), Err(TreeError::StaleNode));
        let new_root = tree.add(3, None).expect("cleared tree accepts a root");
        assert_eq!(tree.root(), Some(new_root));
        assert!(tree.is_consistent());
    }
}
