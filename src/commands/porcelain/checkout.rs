use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::outcome::Checkout;
use std::io::Write;

impl Repository {
    /// Make `target` the current branch
    ///
    /// Only `HEAD` changes: the working tree and staging area are left as
    /// they are.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<Checkout> {
        let target = BranchName::try_parse(target)?;

        if !self.refs().branch_exists(&target) {
            writeln!(self.writer(), "Branch '{}' does not exist.", target)?;
            return Ok(Checkout::Missing(target));
        }

        self.refs().set_head(&target)?;
        self.set_current_branch(target.clone());

        writeln!(self.writer(), "Switched to branch '{}'", target)?;

        Ok(Checkout::Switched(target))
    }
}
