use crate::common::command::{add_and_commit, init_repository_dir, run_svcs_command};
use crate::common::file::{FileSpec, read_branch, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_conflicting_changes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let dir = repository_dir.path();

    run_svcs_command(dir, &["branch", "feature"]).assert().success();

    write_file(FileSpec::new(dir.join("1.txt"), "main version".to_string()));
    write_file(FileSpec::new(dir.join("only-main.txt"), "main".to_string()));
    let main_head = add_and_commit(dir, &["1.txt", "only-main.txt"], "edit on main");

    run_svcs_command(dir, &["checkout", "feature"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "feature version".to_string()));
    let feature_head = add_and_commit(dir, &["1.txt"], "edit on feature");

    run_svcs_command(dir, &["checkout", "main"]).assert().success();
    let objects_before = std::fs::read_dir(dir.join("objects"))?.count();

    run_svcs_command(dir, &["merge", "feature"])
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Merge conflicts detected!"))
        .stdout(predicate::str::contains("Conflict at 1.txt"))
        .stdout(predicate::str::contains("only-main.txt").not());

    assert_eq!(read_branch(dir, "main"), main_head);
    assert_eq!(read_branch(dir, "feature"), feature_head);
    assert_eq!(std::fs::read_dir(dir.join("objects"))?.count(), objects_before);

    Ok(())
}
