pub mod bst;
pub mod bst_traits;
pub mod deletion;
pub mod iter;
pub mod node;
mod tree_stats;

use self::{
    bst::Bst,
    bst_traits::{KeyComparator, _Bst},
};
use std::{fmt::Debug, marker::PhantomData};

pub use self::tree_stats::TreeStats;

#[derive(Clone, Debug)]
pub struct DefaultKeyComparator<T> {
    _t: PhantomData<T>,
}
impl<T> KeyComparator<T> for DefaultKeyComparator<T>
where
    T: Ord + Clone + Debug,
{
    fn new() -> Self {
        Self { _t: PhantomData }
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

pub type DefaultBstConfig<K, V> = _Bst<K, V, DefaultKeyComparator<K>>;
pub type DefaultBst<K, V> = Bst<DefaultBstConfig<K, V>>;
