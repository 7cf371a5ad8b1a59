//! Serde support for [`Tree`].
//!
//! A tree is (de)serialized as a sequence of `{ value, depth }` records in
//! the stored pre-order. Node IDs and cached positions are an in-memory
//! addressing layer, not part of the persistent state; a deserialized tree
//! has a fresh identity, and handles must be re-obtained by traversal.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error as DeError, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::tree::node::Entry;
use crate::tree::Tree;

/// One serialized node.
#[derive(serde::Serialize, serde::Deserialize)]
struct Record<T> {
    value: T,
    depth: usize,
}

impl<T: Serialize> Serialize for Tree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&Record {
                value: &entry.value,
                depth: entry.depth,
            })?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tree<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor(PhantomData))
    }
}

struct TreeVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for TreeVisitor<T> {
    type Value = Tree<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a pre-order sequence of (value, depth) records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = Tree::with_capacity(seq.size_hint().unwrap_or(0));
        let mut prev_depth = 0;
        while let Some(Record { value, depth }) = seq.next_element::<Record<T>>()? {
            let i = tree.entries.len();
            // The depth step rule is what makes the sequence a tree; a
            // sequence that violates it is rejected, never repaired.
            let depth_ok = if i == 0 {
                depth == 0
            } else {
                depth >= 1 && depth <= prev_depth + 1
            };
            if !depth_ok {
                return Err(A::Error::custom(format!(
                    "invalid depth {depth} at index {i}: \
                     the sequence is not a pre-order tree"
                )));
            }
            let key = u32::try_from(i)
                .map_err(|_| A::Error::custom("too many nodes for the key space"))?;
            tree.entries.push(Entry { key, depth, value });
            tree.positions.push(Some(i));
            prev_depth = depth;
        }
        Ok(tree)
    }
}
