//! Plumbing commands (low-level object operations)
//!
//! Plumbing commands give direct access to the object store. They are mostly
//! useful for scripting and for inspecting what porcelain commands wrote.
//!
//! ## Commands
//!
//! - `hash-object`: Compute object ID and optionally store in database
//! - `cat-file`: Print the decompressed content of an object

pub mod cat_file;
pub mod hash_object;
