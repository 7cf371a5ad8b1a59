//! Child slots.

/// Target slot among a parent's direct children.
///
/// Used by [`Tree::move_to`][`crate::Tree::move_to`] and
/// [`Tree::copy_to`][`crate::Tree::copy_to`] to say where under the new
/// parent the subtree should land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChildSlot {
    /// In place of the `n`-th existing direct child (`0` is the first child),
    /// pushing that child and its later siblings one slot further.
    ///
    /// An out-of-range ordinal falls back to [`Append`][`Self::Append`].
    At(usize),
    /// After the last existing direct child.
    #[default]
    Append,
}
