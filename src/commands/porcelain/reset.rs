use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::outcome::ResetMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use log::info;
use std::io::Write;

impl Repository {
    /// Point `branch` at `commit_hash`
    ///
    /// Neither the working tree nor the staging area is touched.
    pub fn reset_branch(
        &self,
        branch: &BranchName,
        commit_hash: &str,
        mode: ResetMode,
    ) -> Result<ObjectId> {
        let commit_id = ObjectId::try_parse(commit_hash)
            .map_err(|_| Error::UnknownCommit(commit_hash.trim().to_string()))?;

        if mode == ResetMode::Checked {
            match self.load_commit(&commit_id) {
                Ok(_) => {}
                Err(Error::ObjectNotFound(_) | Error::CorruptObject { .. }) => {
                    return Err(Error::UnknownCommit(commit_id.to_string()));
                }
                Err(err) => return Err(err),
            }
        }

        self.refs().save_branch(branch, Some(&commit_id))?;
        info!("reset {} to {} ({:?})", branch, commit_id, mode);

        Ok(commit_id)
    }

    pub fn reset(&mut self, commit_hash: &str, mode: ResetMode) -> anyhow::Result<ObjectId> {
        let branch = self.current_branch().clone();
        let commit_id = self.reset_branch(&branch, commit_hash, mode)?;

        writeln!(
            self.writer(),
            "Branch '{}' reset to commit '{}'",
            branch,
            commit_id
        )?;

        Ok(commit_id)
    }
}
