//! Two-way merge of file trees
//!
//! - `tree_merge`: path-by-path comparison of two trees by object ID
//! - `outcome`: what a branch merge did, reported to the caller
//!
//! There is no common-ancestor lookup and no textual merging: a path whose
//! object IDs differ on the two sides is a conflict, whatever the contents.

pub mod outcome;
pub mod tree_merge;
