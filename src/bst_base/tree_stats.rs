use std::marker::PhantomData;

use super::bst_traits::BstParams;

#[derive(Clone, Debug)]
pub struct TreeStats<T: BstParams> {
    _phantom: PhantomData<T>,
    pub size: usize,
    pub rebalances: usize,
}

impl<T: BstParams> TreeStats<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
            size: 0,
            rebalances: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T: BstParams> Default for TreeStats<T> {
    fn default() -> Self {
        Self::new()
    }
}
