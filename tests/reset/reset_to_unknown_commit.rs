use crate::common::command::{init_repository_dir, run_svcs_command};
use crate::common::file::read_branch;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_to_unknown_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let dir = repository_dir.path();
    let head = read_branch(dir, "main");
    let unknown = "c".repeat(40);

    run_svcs_command(dir, &["reset", &unknown])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("unknown commit: '{unknown}'")));
    assert_eq!(read_branch(dir, "main"), head);

    run_svcs_command(dir, &["reset", "--unchecked", &unknown])
        .assert()
        .success();
    assert_eq!(read_branch(dir, "main"), unknown);

    Ok(())
}

#[rstest]
#[case::checked(&["reset", "zzz"])]
#[case::unchecked(&["reset", "--unchecked", "zzz"])]
fn reset_to_malformed_id(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = read_branch(repository_dir.path(), "main");

    run_svcs_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown commit: 'zzz'"));
    assert_eq!(read_branch(repository_dir.path(), "main"), head);

    Ok(())
}
