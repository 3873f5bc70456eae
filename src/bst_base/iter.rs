use super::{bst_traits::BstParams, node::Node};

/// In-order iterator, smallest key first. Holds the pending left spine on an
/// explicit stack instead of parent links.
#[derive(Clone, Debug)]
pub struct Iter<'a, T: BstParams> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T: BstParams> Iter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T: BstParams> Iterator for Iter<'a, T> {
    type Item = (&'a T::KeyType, &'a T::ValueType);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((node.key(), node.value()))
    }
}

/// Reverse in-order iterator, largest key first.
#[derive(Clone, Debug)]
pub struct RevIter<'a, T: BstParams> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T: BstParams> RevIter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_right_spine(root);
        it
    }

    fn push_right_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.right();
        }
    }
}

impl<'a, T: BstParams> Iterator for RevIter<'a, T> {
    type Item = (&'a T::KeyType, &'a T::ValueType);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_right_spine(node.left());
        Some((node.key(), node.value()))
    }
}
