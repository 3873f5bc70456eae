use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait KeyComparator<T>: Clone + Debug {
    fn new() -> Self;
    fn less(&self, lhs: &T, rhs: &T) -> bool;

    #[inline]
    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        !self.less(lhs, rhs) && !self.less(rhs, lhs)
    }

    #[inline]
    fn greater(&self, lhs: &T, rhs: &T) -> bool {
        self.less(rhs, lhs)
    }
}

pub trait BstParams: Clone + Debug {
    type KeyType: Clone + Debug;
    type ValueType: Clone + Debug;
    type KeyCompareType: KeyComparator<Self::KeyType>;
}

#[derive(Clone, Debug)]
pub struct _Bst<TKey: Clone + Debug, TValue: Clone + Debug, TCompare> {
    _phantom_key: PhantomData<TKey>,
    _phantom_value: PhantomData<TValue>,
    _phantom_compare: PhantomData<TCompare>,
}

impl<TKey: Clone + Debug, TValue: Clone + Debug, TCompare: KeyComparator<TKey>> BstParams
    for _Bst<TKey, TValue, TCompare>
{
    type KeyType = TKey;
    type ValueType = TValue;
    type KeyCompareType = TCompare;
}
