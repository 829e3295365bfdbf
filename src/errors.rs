//! Error taxonomy for the storage and history engine
//!
//! Storage-level failures (`ObjectNotFound`, `CorruptObject`, `Io`) are always
//! propagated unchanged. Domain conditions such as an existing branch or a
//! merge conflict are normally reported through outcome enums; the matching
//! variants here exist so callers can turn an outcome into an error with `?`.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("object {oid} is corrupt: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    #[error("branch '{0}' does not exist")]
    BranchNotFound(BranchName),

    #[error("branch '{0}' already exists")]
    BranchAlreadyExists(BranchName),

    #[error("invalid branch name: '{0}'")]
    InvalidBranchName(String),

    #[error("invalid object id: '{0}'")]
    InvalidObjectId(String),

    #[error("branch '{name}' holds an invalid ref: '{content}'")]
    CorruptRef { name: BranchName, content: String },

    #[error("history is corrupt: commit {0} was reached twice")]
    HistoryCorrupt(ObjectId),

    #[error("merge conflicts detected in {} path(s): {}", paths.len(), paths.join(", "))]
    MergeConflict { paths: Vec<String> },

    #[error("unknown commit: '{0}'")]
    UnknownCommit(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn corrupt(oid: &ObjectId, reason: impl std::fmt::Display) -> Self {
        Error::CorruptObject {
            oid: oid.clone(),
            reason: reason.to_string(),
        }
    }
}
