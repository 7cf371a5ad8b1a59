//! Errors.

use thiserror::Error;

/// Error for tree operations.
///
/// The first three variants are caller errors: they are reported before any
/// mutation happens, and retrying the same call will fail the same way.
/// [`Corrupted`][`Self::Corrupted`] is different in kind: it means an
/// internal invariant of the stored sequence no longer holds, which a correct
/// program should never observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The node ID was created by a different tree instance.
    #[error("node does not belong to this tree")]
    ForeignNode,
    /// The node has been removed from its tree.
    ///
    /// Node IDs are never reused, so a handle kept across a
    /// [`remove`][`crate::Tree::remove`] of the node (or of one of its
    /// ancestors) keeps failing with this error instead of addressing some
    /// newer node.
    #[error("node has been removed from its tree")]
    StaleNode,
    /// Attempt to add a second root to a non-empty tree.
    #[error("root node already exists")]
    RootAlreadyExists,
    /// A non-root node has no parent in the stored sequence.
    ///
    /// This indicates a broken depth sequence and is not recoverable.
    #[error("parent not found for a non-root node: the stored sequence is corrupted")]
    Corrupted,
}
