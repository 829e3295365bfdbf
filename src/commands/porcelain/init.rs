use crate::areas::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use log::info;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the repository layout, leaving anything that already exists alone
    pub async fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create objects directory")?;

        fs::create_dir_all(self.refs().branches_path())
            .context("Failed to create branches directory")?;

        {
            let staging = self.staging();
            let staging = staging.lock().await;
            fs::create_dir_all(staging.path()).context("Failed to create staging directory")?;
        }

        if !self.refs().head_exists() {
            let default_branch = BranchName::try_parse(DEFAULT_BRANCH)?;
            self.refs()
                .set_head(&default_branch)
                .context("Failed to create HEAD")?;
        }
        let current_branch = self.refs().read_head().context("Failed to read HEAD")?;
        self.set_current_branch(current_branch);

        // make sure the default branch exists
        let default_branch = BranchName::try_parse(DEFAULT_BRANCH)?;
        if !self.refs().branch_exists(&default_branch) {
            let head = self.current_head_or_none()?;
            self.refs()
                .save_branch(&default_branch, head.as_ref())
                .context("Failed to create default branch")?;
        }

        info!("initialized repository at {}", self.path().display());
        writeln!(
            self.writer(),
            "Initialized repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
