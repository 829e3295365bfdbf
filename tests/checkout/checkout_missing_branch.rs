use crate::common::command::{init_repository_dir, run_svcs_command};
use crate::common::file::read_head;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_missing_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_svcs_command(repository_dir.path(), &["checkout", "nowhere"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Branch 'nowhere' does not exist."));

    assert_eq!(read_head(repository_dir.path()), "main");

    Ok(())
}
