//! Command implementations
//!
//! - `plumbing`: direct access to the object store (hash-object, cat-file)
//! - `porcelain`: everyday version control workflows (add, commit, merge, etc.)

pub mod plumbing;
pub mod porcelain;
