//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block. Commands return what they did
//! so callers can act on it, and write a human-readable report to the
//! repository writer.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show commit history
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches
//! - `merge`: Merge another branch into the current one
//! - `reset`: Point the current branch at another commit

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
