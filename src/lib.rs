//! Depth-first flattened tree stored in a contiguous vec.
//!
//! A [`Tree`] keeps its entire hierarchy in one insertion-ordered sequence of
//! `(value, depth)` pairs laid out in pre-order: every node appears
//! immediately before its descendants, and a node's subtree is always a
//! contiguous range of the sequence. There are no per-node heap links;
//! parents and children are derived from the depth tags by linear scans.
//!
//! This representation is useful when a tree has to be persisted as a flat
//! array: the durable shape is exactly the ordered `(value, depth)` records,
//! and everything else (parent links, cached positions) is derived.
//!
//! # Examples
//!
//! ```
//! use treevec::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.add("root", None)?;
//! let child = tree.add("child", Some(root))?;
//! tree.add("grandchild", Some(child))?;
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.parent(child)?, Some(root));
//! assert_eq!(
//!     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
//!     ["root", "child", "grandchild"],
//! );
//! # Ok::<_, treevec::TreeError>(())
//! ```
//!
//! Trees can also be written fluently with [`TreeBuilder`]:
//!
//! ```
//! use treevec::{Tree, TreeBuilder};
//!
//! let mut tree = Tree::new();
//! TreeBuilder::new(&mut tree, "root")?
//!     .child("0")
//!     .child("0-0")
//!     .sibling("0-1")
//!     .parent()
//!     .sibling("1");
//!
//! assert_eq!(
//!     tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
//!     ["root", "0", "0-0", "0-1", "1"],
//! );
//! # Ok::<_, treevec::TreeError>(())
//! ```
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod id;
mod slot;
pub mod tree;

pub use self::error::TreeError;
pub use self::id::NodeId;
pub use self::slot::ChildSlot;
pub use self::tree::{HierarchyPrint, NodeRef, Tree, TreeBuilder};
