use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::outcome::{MergeConflict, MergeOutcome, merge_message};
use crate::artifacts::merge::tree_merge::merge_trees;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;
use log::{debug, info};
use std::io::Write;

impl Repository {
    /// Merge the tree of `source` into the current branch
    ///
    /// On conflicts nothing is written: no commit is created and no branch
    /// moves. A clean merge always creates a commit whose only parent is the
    /// current branch's previous head, even when both branches share a head;
    /// the source lineage is not recorded.
    pub fn merge(&mut self, source: &str) -> anyhow::Result<MergeOutcome> {
        let source = BranchName::try_parse(source)?;
        let target = self.current_branch().clone();

        if !self.refs().branch_exists(&source) {
            writeln!(self.writer(), "Source branch '{}' does not exist.", source)?;
            return Ok(MergeOutcome::SourceMissing(source));
        }

        let source_head = self.refs().load_branch(&source)?;
        let target_head = self.current_head_or_none()?;

        let Some(source_head) = source_head else {
            writeln!(self.writer(), "Branch '{}' has no commits to merge.", source)?;
            return Ok(MergeOutcome::UpToDate);
        };

        info!(
            "merging {} into {}",
            source_head.to_short_oid(),
            target_head
                .as_ref()
                .map_or_else(|| "(no commits)".to_string(), |oid| oid.to_short_oid())
        );

        let source_tree = self.load_tree(Some(&source_head))?;
        let target_tree = self.load_tree(target_head.as_ref())?;
        let tree_merge = merge_trees(&source_tree, &target_tree);
        debug!(
            "tree merge: {} merged, {} conflicting",
            tree_merge.merged.len(),
            tree_merge.conflicts.len()
        );

        if !tree_merge.is_clean() {
            writeln!(self.writer(), "{}", "Merge conflicts detected!".red())?;
            for path in &tree_merge.conflicts {
                writeln!(self.writer(), "Conflict at {}", path)?;
            }

            return Ok(MergeOutcome::Conflicted(MergeConflict::new(
                source,
                target,
                tree_merge.conflicts,
            )));
        }

        let commit = Commit::new(merge_message(&source, &target), target_head, tree_merge.merged);
        let commit_id = self.database().store_commit(&commit)?;
        self.refs().save_branch(&target, Some(&commit_id))?;

        info!("merged {} into {} as {}", source, target, commit_id);
        writeln!(
            self.writer(),
            "Branch '{}' merged into '{}' successfully.",
            source,
            target
        )?;

        Ok(MergeOutcome::Merged(commit_id))
    }
}
