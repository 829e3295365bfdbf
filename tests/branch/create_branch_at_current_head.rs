use crate::common::command::{init_repository_dir, run_svcs_command};
use crate::common::file::{read_branch, read_head};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_at_current_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_svcs_command(repository_dir.path(), &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branch 'feature' created."));

    assert_eq!(
        read_branch(repository_dir.path(), "feature"),
        read_branch(repository_dir.path(), "main")
    );
    // creating a branch does not switch to it
    assert_eq!(read_head(repository_dir.path()), "main");

    Ok(())
}
