use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use log::{info, warn};
use std::io::Write;

impl Repository {
    /// Record the staged files as a new commit on the current branch
    ///
    /// The branch only moves once the commit object is stored, and the
    /// staging area is only cleared once the branch has moved.
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        let staging = self.staging();
        let mut staging = staging.lock().await;

        let files = staging.list_staged()?;
        if files.is_empty() {
            warn!("committing with an empty staging area");
        }

        let branch = self.current_branch().clone();
        let parent = self.current_head_or_none()?;
        let is_root = parent.is_none();

        let commit = Commit::new(message.to_string(), parent, files);
        let commit_id = self.database().store_commit(&commit)?;
        self.refs().save_branch(&branch, Some(&commit_id))?;
        staging.clear()?;

        info!(
            "committed {} on {}{}: {}",
            commit_id,
            branch,
            if is_root { " (root commit)" } else { "" },
            commit.short_message()
        );
        writeln!(self.writer(), "Committed with hash {}", commit_id)?;

        Ok(commit_id)
    }
}
