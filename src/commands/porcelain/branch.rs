use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::outcome::BranchCreation;
use colored::Colorize;
use log::info;
use std::io::Write;

impl Repository {
    /// Create `branch_name` at the current head, unless it already exists
    pub fn create_branch(&mut self, branch_name: &str) -> anyhow::Result<BranchCreation> {
        let branch_name = BranchName::try_parse(branch_name)?;

        if self.refs().branch_exists(&branch_name) {
            writeln!(self.writer(), "Branch '{}' already exists.", branch_name)?;
            return Ok(BranchCreation::AlreadyExists(branch_name));
        }

        let head = self.current_head_or_none()?;
        self.refs().save_branch(&branch_name, head.as_ref())?;

        info!("created branch {} at {:?}", branch_name, head);
        writeln!(self.writer(), "Branch '{}' created.", branch_name)?;

        Ok(BranchCreation::Created(branch_name))
    }

    /// List every branch, marking the checked-out one
    pub fn list_branches(&mut self) -> anyhow::Result<Vec<BranchName>> {
        let branches = self.refs().list_branches()?;
        let current_branch = self.current_branch().clone();

        for branch in &branches {
            if branch == &current_branch {
                writeln!(self.writer(), "* {}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(branches)
    }
}
