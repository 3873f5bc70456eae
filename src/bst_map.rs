use crate::bst_base::{bst::Bst, bst_traits::BstParams, iter::Iter, DefaultBstConfig};

pub struct BstMap<T: BstParams> {
    _tree: Bst<T>,
}

impl<T: BstParams> BstMap<T> {
    pub fn new() -> Self {
        Self { _tree: Bst::new() }
    }

    pub fn is_empty(&self) -> bool {
        self._tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self._tree.len()
    }

    pub fn contains_key(&self, key: &T::KeyType) -> bool {
        self._tree.contains_key(key)
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        self._tree.insert(key, value)
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self._tree.get(key)
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        self._tree.get_mut(key)
    }

    pub fn remove(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        self._tree.clear(key)
    }

    pub fn first_key_value(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.first()
    }

    pub fn last_key_value(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.last()
    }

    /// Entries with `from <= key <= to`, in ascending key order.
    pub fn range(&self, from: &T::KeyType, to: &T::KeyType) -> Vec<(&T::KeyType, &T::ValueType)> {
        let mut out = Vec::new();
        if let Some(root) = self._tree.root() {
            root.walk_range_forward(
                &mut |node| out.push((node.key(), node.value())),
                from,
                to,
                self._tree.key_comp(),
            );
        }
        out
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self._tree.iter()
    }

    pub fn balance(&mut self) {
        self._tree.balance();
    }

    pub fn tree(&self) -> &Bst<T> {
        &self._tree
    }
}

impl<T: BstParams> Default for BstMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BstParams> Clone for BstMap<T> {
    fn clone(&self) -> Self {
        Self {
            _tree: self._tree.copy(),
        }
    }
}

impl<T: BstParams> std::fmt::Debug for BstMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: BstParams> Extend<(T::KeyType, T::ValueType)> for BstMap<T> {
    fn extend<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self._tree.set(key, value);
        }
    }
}

impl<T: BstParams> FromIterator<(T::KeyType, T::ValueType)> for BstMap<T> {
    fn from_iter<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, T: BstParams> IntoIterator for &'a BstMap<T> {
    type Item = (&'a T::KeyType, &'a T::ValueType);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub type DefaultBstMap<K, V> = BstMap<DefaultBstConfig<K, V>>;
