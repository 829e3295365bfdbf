use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;

/// A merge that stopped because both sides changed the same paths
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MergeConflict {
    pub source: BranchName,
    pub target: BranchName,
    /// Every conflicting path, sorted
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A merge commit was created and the target branch now points at it
    Merged(ObjectId),
    /// Nothing to merge: the source branch has no commits
    UpToDate,
    /// The source branch does not exist; nothing was written
    SourceMissing(BranchName),
    /// The merge was aborted; no commit was created and no ref moved
    Conflicted(MergeConflict),
}

impl MergeOutcome {
    /// Turn the domain outcomes that did not merge into errors
    pub fn into_result(self) -> Result<Option<ObjectId>> {
        match self {
            MergeOutcome::Merged(oid) => Ok(Some(oid)),
            MergeOutcome::UpToDate => Ok(None),
            MergeOutcome::SourceMissing(name) => Err(Error::BranchNotFound(name)),
            MergeOutcome::Conflicted(conflict) => Err(Error::MergeConflict {
                paths: conflict.paths,
            }),
        }
    }
}

/// Default message of a merge commit
pub fn merge_message(source: &BranchName, target: &BranchName) -> String {
    format!("Merge branch '{source}' into '{target}'")
}
