//! Commit history traversal
//!
//! - `history`: lazy newest-first walk along `parent` pointers
//!
//! Every commit has at most one parent, so history is a simple chain. The
//! walk remembers the commits it has visited and stops with an error if a
//! damaged store ever leads it back to one of them.

pub mod history;
