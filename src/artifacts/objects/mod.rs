//! Object types
//!
//! Everything persisted in the object store is an opaque byte sequence. The
//! only structured object is the commit record; staged files are stored as
//! their raw bytes.
//!
//! - **Commit**: message, optional parent and the tree of files it records
//! - **Tree**: path to object ID mapping carried inside a commit

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form used in human-readable output
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;

/// Snapshot of files: `/`-separated relative path to object ID
pub type Tree = BTreeMap<String, ObjectId>;
