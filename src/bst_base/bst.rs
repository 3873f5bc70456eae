use super::{
    bst_traits::{BstParams, KeyComparator},
    deletion::{DeletionResult, DeletionResultFlags},
    iter::{Iter, RevIter},
    node::Node,
    tree_stats::TreeStats,
};

pub struct Bst<T: BstParams> {
    root_: Option<Box<Node<T>>>,
    stats_: TreeStats<T>,
    key_less: T::KeyCompareType,
}

impl<T: BstParams> Bst<T> {
    pub fn new() -> Self {
        Self {
            root_: None,
            stats_: TreeStats::new(),
            key_less: T::KeyCompareType::new(),
        }
    }

    pub fn key_comp(&self) -> &T::KeyCompareType {
        &self.key_less
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root_.as_deref()
    }

    pub fn len(&self) -> usize {
        self.stats_.size
    }

    pub fn is_empty(&self) -> bool {
        self.root_.is_none()
    }

    pub fn get_stats(&self) -> &TreeStats<T> {
        &self.stats_
    }

    pub fn depth_left(&self) -> usize {
        self.root_.as_deref().map_or(0, Node::depth_left)
    }

    pub fn depth_right(&self) -> usize {
        self.root_.as_deref().map_or(0, Node::depth_right)
    }
}

impl<T: BstParams> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adopts an already ordered subtree.
impl<T: BstParams> From<Box<Node<T>>> for Bst<T> {
    fn from(root: Box<Node<T>>) -> Self {
        let mut stats = TreeStats::new();
        stats.size = Iter::new(Some(&*root)).count();
        Self {
            root_: Some(root),
            stats_: stats,
            key_less: T::KeyCompareType::new(),
        }
    }
}

// Unlinks nodes one at a time; the default drop glue recurses once per level.
impl<T: BstParams> Drop for Bst<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root_.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.stats_.size = 0;
    }
}

/// Point operations
impl<T: BstParams> Bst<T> {
    /// Inserts `key`, or overwrites its value if it is already present.
    pub fn set(&mut self, key: T::KeyType, value: T::ValueType) {
        self.insert(key, value);
    }

    /// Like [`Bst::set`], handing back the value that was overwritten.
    pub fn insert(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        let Some(root) = self.root_.as_deref_mut() else {
            self.root_ = Some(Node::new(key, value));
            self.stats_.size = 1;
            return None;
        };
        let replaced = root.replace_or_add(key, value, &self.key_less);
        if replaced.is_none() {
            self.stats_.size += 1;
        }
        replaced
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.get_node(key).map(Node::value)
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        let node = self.root_.as_deref_mut()?.find_mut(key, &self.key_less)?;
        Some(&mut node.value)
    }

    pub fn contains_key(&self, key: &T::KeyType) -> bool {
        self.get_node(key).is_some()
    }

    /// The node holding `key`. Only valid until the next mutation.
    pub fn get_node(&self, key: &T::KeyType) -> Option<&Node<T>> {
        self.root_.as_deref()?.find(key, &self.key_less)
    }

    /// Removes `key` and hands back its value. Absent keys leave the tree
    /// untouched.
    pub fn clear(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        let root = self.root_.take()?;
        let DeletionResult {
            root,
            removed,
            flags,
        } = root.remove(key, &self.key_less);
        self.root_ = root;

        let Some((_, value)) = removed else {
            debug_assert!(flags.contains(DeletionResultFlags::NotFound));
            return None;
        };
        debug_assert!(self.stats_.size > 0);
        self.stats_.size -= 1;
        log::debug!("Bst::clear({:?}): {:?}, size now {}", key, flags, self.len());
        Some(value)
    }

    /// Deep copy sharing no nodes with `self`.
    pub fn copy(&self) -> Self {
        Self {
            root_: self.root_.as_ref().map(|root| root.copy()),
            stats_: self.stats_.clone(),
            key_less: self.key_less.clone(),
        }
    }

    /// Rebalances the whole tree. Never called implicitly.
    pub fn balance(&mut self) {
        if let Some(root) = self.root_.take() {
            self.root_ = Some(root.balance(&self.key_less));
            self.stats_.rebalances += 1;
        }
    }
}

impl<T: BstParams> Clone for Bst<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Ordered access
impl<T: BstParams> Bst<T> {
    pub fn first(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        let node = self.root_.as_deref()?.minimum();
        Some((node.key(), node.value()))
    }

    pub fn last(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        let node = self.root_.as_deref()?.maximum();
        Some((node.key(), node.value()))
    }

    /// Value of the largest key strictly smaller than `key`.
    pub fn previous(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.previous_entry(key).map(|(_, value)| value)
    }

    /// Value of the smallest key strictly greater than `key`.
    pub fn next(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.next_entry(key).map(|(_, value)| value)
    }

    pub fn previous_entry(&self, key: &T::KeyType) -> Option<(&T::KeyType, &T::ValueType)> {
        let node = self.root_.as_deref()?.previous(key, &self.key_less)?;
        Some((node.key(), node.value()))
    }

    pub fn next_entry(&self, key: &T::KeyType) -> Option<(&T::KeyType, &T::ValueType)> {
        let node = self.root_.as_deref()?.next(key, &self.key_less)?;
        Some((node.key(), node.value()))
    }

    pub fn walk<F>(&self, mut visit: F, forward: bool)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        let Some(root) = self.root_.as_deref() else {
            return;
        };
        let mut visit_node = |node: &Node<T>| visit(&node.key, &node.value);
        if forward {
            root.walk_forward(&mut visit_node);
        } else {
            root.walk_backward(&mut visit_node);
        }
    }

    /// Visits every entry with `from <= key <= to`.
    pub fn walk_range<F>(&self, mut visit: F, from: &T::KeyType, to: &T::KeyType, forward: bool)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        let Some(root) = self.root_.as_deref() else {
            return;
        };
        let mut visit_node = |node: &Node<T>| visit(&node.key, &node.value);
        if forward {
            root.walk_range_forward(&mut visit_node, from, to, &self.key_less);
        } else {
            root.walk_range_backward(&mut visit_node, from, to, &self.key_less);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root_.as_deref())
    }

    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(self.root_.as_deref())
    }
}

/// Debug
impl<T: BstParams> Bst<T> {
    fn print_node(f: &mut std::fmt::Formatter<'_>, root: &Node<T>) -> std::fmt::Result {
        let mut pending = vec![(root, "*", 0)];
        while let Some((node, side, depth)) = pending.pop() {
            for _ in 0..depth {
                write!(f, "  ")?;
            }
            writeln!(f, "{} {:?} => {:?}", side, node.key, node.value)?;

            if let Some(right) = node.right() {
                pending.push((right, "R", depth + 1));
            }
            if let Some(left) = node.left() {
                pending.push((left, "L", depth + 1));
            }
        }
        Ok(())
    }
}

/// Display
impl<T: BstParams> std::fmt::Debug for Bst<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.root_.as_deref() {
            Some(root) => Self::print_node(f, root),
            None => write!(f, "(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bst_base::DefaultBst;

    #[test]
    fn test_debug_dump() {
        let mut tree = DefaultBst::<i32, char>::new();
        assert_eq!(format!("{:?}", tree), "(empty)");

        tree.set(2, 'b');
        tree.set(1, 'a');
        tree.set(3, 'c');
        assert_eq!(format!("{:?}", tree), "* 2 => 'b'\n  L 1 => 'a'\n  R 3 => 'c'\n");
    }

    #[test]
    fn test_stats_track_size_and_rebalances() {
        let mut tree = DefaultBst::<i32, i32>::new();
        tree.balance();
        assert_eq!(tree.get_stats().rebalances, 0);

        for i in 0..10 {
            tree.set(i, i);
        }
        tree.set(3, 30);
        assert_eq!(tree.get_stats().size, 10);

        tree.balance();
        assert_eq!(tree.get_stats().rebalances, 1);

        assert_eq!(tree.clear(&3), Some(30));
        assert_eq!(tree.get_stats().size, 9);
        assert_eq!(tree.clear(&3), None);
        assert_eq!(tree.len(), 9);
    }

    #[test]
    fn test_insert_reports_overwrites() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut tree = DefaultBst::<i32, &str>::new();
        assert_eq!(tree.insert(5, "a"), None);
        assert_eq!(tree.insert(2, "b"), None);
        assert_eq!(tree.insert(8, "c"), None);
        assert_eq!(tree.insert(2, "B"), Some("b"));
        assert_eq!(tree.insert(5, "A"), Some("a"));
        assert_eq!(tree.len(), 3);
        assert_eq!(format!("{:?}", tree), "* 5 => \"A\"\n  L 2 => \"B\"\n  R 8 => \"c\"\n");
    }

    #[test]
    fn test_debug_dump_nested() {
        let mut tree = DefaultBst::<i32, ()>::new();
        for k in [4, 2, 6, 1, 3, 5] {
            tree.set(k, ());
        }
        assert_eq!(
            format!("{:?}", tree),
            "* 4 => ()\n  L 2 => ()\n    L 1 => ()\n    R 3 => ()\n  R 6 => ()\n    L 5 => ()\n"
        );
    }
}
