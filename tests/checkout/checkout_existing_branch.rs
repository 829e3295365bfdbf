use crate::common::command::{init_repository_dir, run_svcs_command};
use crate::common::file::{FileSpec, read_head, staged_entries, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_existing_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_svcs_command(repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();

    // leave something staged and a modified file behind
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    run_svcs_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'feature'"));

    assert_eq!(read_head(repository_dir.path()), "feature");
    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join("1.txt"))?,
        "changed"
    );
    assert_eq!(staged_entries(repository_dir.path()), vec!["1.txt".to_string()]);

    Ok(())
}
