use bitmask_enum::bitmask;

use super::{bst_traits::BstParams, node::Node};

#[bitmask(u8)]
pub enum DeletionResultFlags {
    Ok = 0,
    NotFound = 1,
    Leaf = 2,
    Spliced = 4,
    Grafted = 8,
}

/// Outcome of [`Node::remove`]: the new subtree root, the detached pair if
/// the key was present, and which removal case ran.
pub struct DeletionResult<T: BstParams> {
    pub root: Option<Box<Node<T>>>,
    pub removed: Option<(T::KeyType, T::ValueType)>,
    pub flags: DeletionResultFlags,
}

impl<T: BstParams> DeletionResult<T> {
    pub fn not_found(root: Option<Box<Node<T>>>) -> Self {
        Self {
            root,
            removed: None,
            flags: DeletionResultFlags::NotFound,
        }
    }

    pub fn new(
        root: Option<Box<Node<T>>>,
        removed: (T::KeyType, T::ValueType),
        flags: DeletionResultFlags,
    ) -> Self {
        Self {
            root,
            removed: Some(removed),
            flags,
        }
    }

    pub fn has(&self, flag: DeletionResultFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn found(&self) -> bool {
        self.removed.is_some()
    }

    pub fn into_root(self) -> Option<Box<Node<T>>> {
        self.root
    }
}
