use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Error, Result};

/// Result of asking for a new branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchCreation {
    Created(BranchName),
    /// Informational: the existing ref was left untouched
    AlreadyExists(BranchName),
}

impl BranchCreation {
    pub fn into_result(self) -> Result<BranchName> {
        match self {
            BranchCreation::Created(name) => Ok(name),
            BranchCreation::AlreadyExists(name) => Err(Error::BranchAlreadyExists(name)),
        }
    }
}

/// Result of switching branches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    Switched(BranchName),
    /// The branch does not exist; `HEAD` was left untouched
    Missing(BranchName),
}

impl Checkout {
    pub fn into_result(self) -> Result<BranchName> {
        match self {
            Checkout::Switched(name) => Ok(name),
            Checkout::Missing(name) => Err(Error::BranchNotFound(name)),
        }
    }
}

/// How `reset` treats the commit ID it is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// The ID must name a commit stored in the repository
    #[default]
    Checked,
    /// Any well-formed ID is written to the branch as is
    Unchecked,
}
