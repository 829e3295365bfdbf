//! Core repository components
//!
//! This module contains the building blocks of a repository:
//!
//! - `database`: Content-addressed object store
//! - `refs`: Branch references and the `HEAD` pointer
//! - `repository`: Repository context coordinating every area
//! - `staging`: Staging area for the next commit
//! - `workspace`: Working tree file access

pub mod database;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod workspace;

/// Branch created by `init` and checked out in a fresh repository
pub const DEFAULT_BRANCH: &str = "main";

pub const HEAD_FILE: &str = "HEAD";
pub const OBJECTS_DIR: &str = "objects";
pub const BRANCHES_DIR: &str = "branches";
pub const STAGING_DIR: &str = "staging";

/// Repository bookkeeping that is never treated as working-tree content
pub(crate) const IGNORED_PATHS: [&str; 4] = [HEAD_FILE, OBJECTS_DIR, BRANCHES_DIR, STAGING_DIR];
