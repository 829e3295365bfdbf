//! Data structures and algorithms of the version-control engine
//!
//! - `branch`: Branch names and the outcomes of branch operations
//! - `log`: Commit history traversal
//! - `merge`: Two-way tree merge and merge outcomes
//! - `objects`: Object IDs, trees and commit records
//! - `staging`: Staging targets accepted by `add`

pub mod branch;
pub mod log;
pub mod merge;
pub mod objects;
pub mod staging;
