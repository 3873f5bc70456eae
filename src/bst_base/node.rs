use std::fmt::Debug;

use super::{
    bst_traits::{BstParams, KeyComparator},
    deletion::{DeletionResult, DeletionResultFlags},
};

/// A binary search tree vertex. Every key in `left` is strictly less than
/// `key`; every key in `right` is greater or equal.
pub struct Node<T: BstParams> {
    pub key: T::KeyType,
    pub value: T::ValueType,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T: BstParams> Node<T> {
    pub fn new(key: T::KeyType, value: T::ValueType) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub fn key(&self) -> &T::KeyType {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &T::ValueType {
        &self.value
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Deep copy of this subtree.
    pub fn copy(&self) -> Box<Self> {
        Box::new(Self {
            key: self.key.clone(),
            value: self.value.clone(),
            left: Self::copy_subtree(self.left()),
            right: Self::copy_subtree(self.right()),
        })
    }

    // Post-order rebuild on an explicit stack; finished subtrees wait in
    // `built` until their parent is assembled.
    fn copy_subtree(root: Option<&Node<T>>) -> Option<Box<Node<T>>> {
        enum Step<'a, T: BstParams> {
            Visit(Option<&'a Node<T>>),
            Build(&'a Node<T>),
        }

        let mut steps = vec![Step::Visit(root)];
        let mut built: Vec<Option<Box<Node<T>>>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(None) => built.push(None),
                Step::Visit(Some(node)) => {
                    steps.push(Step::Build(node));
                    steps.push(Step::Visit(node.right()));
                    steps.push(Step::Visit(node.left()));
                }
                Step::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Self {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }
        debug_assert!(built.len() <= 1);
        built.pop().flatten()
    }
}

impl<T: BstParams> Debug for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left.as_ref().map(|left| &left.key))
            .field("right", &self.right.as_ref().map(|right| &right.key))
            .finish()
    }
}

/// Lookup
impl<T: BstParams> Node<T> {
    pub fn find(&self, key: &T::KeyType, cmp: &T::KeyCompareType) -> Option<&Node<T>> {
        let mut current = Some(self);
        while let Some(node) = current {
            if cmp.equal(key, &node.key) {
                return Some(node);
            }
            current = if cmp.less(key, &node.key) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    pub fn find_mut(&mut self, key: &T::KeyType, cmp: &T::KeyCompareType) -> Option<&mut Node<T>> {
        let mut current = Some(self);
        while let Some(node) = current {
            if cmp.equal(key, &node.key) {
                return Some(node);
            }
            current = if cmp.less(key, &node.key) {
                node.left.as_deref_mut()
            } else {
                node.right.as_deref_mut()
            };
        }
        None
    }

    /// Descends towards `key` and returns the node where the search stops,
    /// either the exact match or the last node before a missing link,
    /// together with the ancestors visited on the way (root first, the
    /// returned node excluded).
    pub fn find_nearest(
        &self,
        key: &T::KeyType,
        cmp: &T::KeyCompareType,
    ) -> (&Node<T>, Vec<&Node<T>>) {
        let mut stack = Vec::new();
        let mut current = self;
        loop {
            if cmp.equal(&current.key, key) {
                return (current, stack);
            }
            let child = if cmp.less(key, &current.key) {
                current.left.as_deref()
            } else {
                current.right.as_deref()
            };
            match child {
                Some(child) => {
                    stack.push(current);
                    current = child;
                }
                None => return (current, stack),
            }
        }
    }

    /// The node holding the largest key strictly less than `key`.
    pub fn previous(&self, key: &T::KeyType, cmp: &T::KeyCompareType) -> Option<&Node<T>> {
        let (node, stack) = self.find_nearest(key, cmp);
        if cmp.equal(&node.key, key) {
            if let Some(left) = node.left.as_deref() {
                return Some(left.maximum());
            }
        } else if cmp.less(&node.key, key) {
            return Some(node);
        }
        stack
            .into_iter()
            .rev()
            .find(|ancestor| cmp.less(&ancestor.key, key))
    }

    /// The node holding the smallest key strictly greater than `key`.
    pub fn next(&self, key: &T::KeyType, cmp: &T::KeyCompareType) -> Option<&Node<T>> {
        let (node, stack) = self.find_nearest(key, cmp);
        if cmp.equal(&node.key, key) {
            if let Some(right) = node.right.as_deref() {
                return Some(right.minimum());
            }
        } else if cmp.greater(&node.key, key) {
            return Some(node);
        }
        stack
            .into_iter()
            .rev()
            .find(|ancestor| cmp.greater(&ancestor.key, key))
    }

    pub fn minimum(&self) -> &Node<T> {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    pub fn maximum(&self) -> &Node<T> {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }

    /// Number of links on the chain that always follows `left`.
    pub fn depth_left(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            depth += 1;
            current = left;
        }
        depth
    }

    /// Number of links on the chain that always follows `right`.
    pub fn depth_right(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            depth += 1;
            current = right;
        }
        depth
    }
}

/// Structural changes
impl<T: BstParams> Node<T> {
    /// Attaches `node` as a leaf below `self`. Smaller keys go left, ties
    /// and larger keys go right. Duplicates are not rejected.
    pub fn add(&mut self, node: Box<Node<T>>, cmp: &T::KeyCompareType) -> &mut Node<T> {
        let mut slot = if cmp.less(&node.key, &self.key) {
            &mut self.left
        } else {
            &mut self.right
        };
        while let Some(current) = slot {
            slot = if cmp.less(&node.key, &current.key) {
                &mut current.left
            } else {
                &mut current.right
            };
        }
        slot.insert(node)
    }

    /// Overwrites the value stored under `key`, or attaches a new leaf if
    /// the key is absent. Returns the replaced value.
    pub fn replace_or_add(
        &mut self,
        key: T::KeyType,
        value: T::ValueType,
        cmp: &T::KeyCompareType,
    ) -> Option<T::ValueType> {
        let mut current = self;
        loop {
            if cmp.equal(&key, &current.key) {
                log::debug!("Node::replace_or_add({:?}): overwrite", key);
                return Some(std::mem::replace(&mut current.value, value));
            }
            let slot = if cmp.less(&key, &current.key) {
                &mut current.left
            } else {
                &mut current.right
            };
            match slot {
                Some(child) => current = &mut **child,
                None => {
                    *slot = Some(Node::new(key, value));
                    return None;
                }
            }
        }
    }

    /// Removes `key` from this subtree and returns the new subtree root.
    ///
    /// A node with two children is replaced by its left child and the old
    /// right subtree is grafted back in whole with [`Node::add`].
    pub fn remove(self: Box<Self>, key: &T::KeyType, cmp: &T::KeyCompareType) -> DeletionResult<T> {
        let mut root = Some(self);
        let mut slot = &mut root;
        loop {
            let go_left = match slot.as_deref() {
                Some(node) if !cmp.equal(&node.key, key) => cmp.less(key, &node.key),
                _ => break,
            };
            let Some(node) = slot else {
                break;
            };
            slot = if go_left {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(target) = slot.take() else {
            log::debug!("Could not find key {:?} to remove.", key);
            return DeletionResult::not_found(root);
        };
        let Node {
            key: removed_key,
            value,
            left,
            right,
        } = *target;
        let (replacement, flags) = match (left, right) {
            (None, None) => {
                log::debug!("Node::remove({:?}): leaf", removed_key);
                (None, DeletionResultFlags::Leaf)
            }
            (Some(child), None) | (None, Some(child)) => {
                log::debug!("Node::remove({:?}): splice {:?} up", removed_key, child.key);
                (Some(child), DeletionResultFlags::Spliced)
            }
            (Some(mut left), Some(right)) => {
                log::debug!(
                    "Node::remove({:?}): promote {:?}, graft {:?}",
                    removed_key,
                    left.key,
                    right.key
                );
                left.add(right, cmp);
                (Some(left), DeletionResultFlags::Grafted)
            }
        };
        *slot = replacement;
        DeletionResult::new(root, (removed_key, value), flags)
    }

    /// Evens out the left and right chain lengths of this subtree by
    /// repeatedly promoting a child over the current root, then does the
    /// same for every subtree below, top-down. Returns the new subtree root.
    pub fn balance(self: Box<Self>, cmp: &T::KeyCompareType) -> Box<Self> {
        let mut root = self.even_out(cmp);
        {
            let Node { left, right, .. } = &mut *root;
            let mut pending = vec![right, left];
            while let Some(slot) = pending.pop() {
                let Some(node) = slot.take() else {
                    continue;
                };
                let node = slot.insert(node.even_out(cmp));
                let Node { left, right, .. } = &mut **node;
                pending.push(right);
                pending.push(left);
            }
        }
        root
    }

    fn even_out(self: Box<Self>, cmp: &T::KeyCompareType) -> Box<Self> {
        let mut root = self;
        let mut steps = (root.depth_right() as isize - root.depth_left() as isize) / 2;
        if steps != 0 {
            log::debug!("Node::balance on {:?}: {} steps", root.key, steps);
        }

        while steps > 0 {
            let Some(mut pivot) = root.right.take() else {
                break;
            };
            pivot.add(root, cmp);
            root = pivot;
            steps -= 1;
        }
        while steps < 0 {
            let Some(mut pivot) = root.left.take() else {
                break;
            };
            pivot.add(root, cmp);
            root = pivot;
            steps += 1;
        }
        root
    }
}

/// Traversal
impl<T: BstParams> Node<T> {
    pub fn walk_forward<'a, F: FnMut(&'a Node<T>)>(&'a self, visit: &mut F) {
        let mut stack = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visit(node);
            current = node.right();
        }
    }

    pub fn walk_backward<'a, F: FnMut(&'a Node<T>)>(&'a self, visit: &mut F) {
        let mut stack = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.right();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visit(node);
            current = node.left();
        }
    }

    // Both range walks visit the whole subtree and filter per node.
    pub fn walk_range_forward<'a, F: FnMut(&'a Node<T>)>(
        &'a self,
        visit: &mut F,
        from: &T::KeyType,
        to: &T::KeyType,
        cmp: &T::KeyCompareType,
    ) {
        self.walk_forward(&mut |node: &'a Node<T>| {
            if node.in_range(from, to, cmp) {
                visit(node);
            }
        });
    }

    pub fn walk_range_backward<'a, F: FnMut(&'a Node<T>)>(
        &'a self,
        visit: &mut F,
        from: &T::KeyType,
        to: &T::KeyType,
        cmp: &T::KeyCompareType,
    ) {
        self.walk_backward(&mut |node: &'a Node<T>| {
            if node.in_range(from, to, cmp) {
                visit(node);
            }
        });
    }

    #[inline]
    fn in_range(&self, from: &T::KeyType, to: &T::KeyType, cmp: &T::KeyCompareType) -> bool {
        !cmp.less(&self.key, from) && !cmp.greater(&self.key, to)
    }
}
