//! Indented hierarchy printing for a tree.

use core::fmt::{self, Display};

use crate::tree::Tree;

/// A wrapper to print a tree as an indented hierarchy, line per node.
///
/// Each node is printed on its own line, indented by two spaces per depth
/// level. The root line shows the value and depth; every other line also
/// shows the value of the parent node.
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
/// let expected = "\
/// 'root' (depth 0)
///   'a' (depth 1, parent 'root')
///     'a-0' (depth 2, parent 'a')
///   'b' (depth 1, parent 'root')
/// ";
/// assert_eq!(tree.hierarchy().to_string(), expected);
/// # Ok::<_, treevec::TreeError>(())
/// ```
pub struct HierarchyPrint<'a, T> {
    /// Tree to be printed.
    tree: &'a Tree<T>,
}

impl<'a, T> HierarchyPrint<'a, T> {
    /// Creates a new `HierarchyPrint` object for the tree.
    #[inline]
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self { tree }
    }
}

impl<T: Display> Display for HierarchyPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Last value seen at each depth. The parent of a node at depth `d`
        // is the last value seen at depth `d - 1`.
        let mut last_at_depth: Vec<&T> = Vec::new();
        for node in self.tree.iter() {
            let depth = node.depth();
            let value = node.value();
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            if depth == 0 {
                writeln!(f, "'{value}' (depth 0)")?;
            } else {
                let parent = last_at_depth[depth - 1];
                writeln!(f, "'{value}' (depth {depth}, parent '{parent}')")?;
            }
            last_at_depth.truncate(depth);
            last_at_depth.push(value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    #[test]
    fn empty_tree_prints_nothing() {
        let tree = Tree::<i32>::new();
        assert_eq!(tree.hierarchy().to_string(), "");
    }

    #[test]
    fn parent_is_the_nearest_shallower_predecessor() {
        let mut tree = Tree::new();
        let root = tree.add(1, None).expect("should succeed");
        let a = tree.add(10, Some(root)).expect("should succeed");
        tree.add(100, Some(a)).expect("should succeed");
        let b = tree.add(20, Some(root)).expect("should succeed");
        tree.add(200, Some(b)).expect("should succeed");

        let expected = "\
'1' (depth 0)
  '10' (depth 1, parent '1')
    '100' (depth 2, parent '10')
  '20' (depth 1, parent '1')
    '200' (depth 2, parent '20')
";
        assert_eq!(tree.hierarchy().to_string(), expected);
    }
}
