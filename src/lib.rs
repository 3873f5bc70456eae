//! An ordered key-value map on a plain binary search tree.
//!
//! Inserts and removals never restructure the tree beyond the affected
//! path; call [`Bst::balance`](bst_base::bst::Bst::balance) to even it out.

pub mod bst_base;
pub mod bst_map;

pub use bst_base::{bst::Bst, DefaultBst};
pub use bst_map::{BstMap, DefaultBstMap};
