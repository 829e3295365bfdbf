use crate::common::command::{add_and_commit, repository_dir, run_svcs_command};
use crate::common::file::{FileSpec, read_branch, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_without_commits(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["branch", "early"])
        .assert()
        .success();
    assert_eq!(read_branch(repository_dir.path(), "early"), "");

    // the first commit on an empty branch has no parent
    run_svcs_command(repository_dir.path(), &["checkout", "early"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "a".to_string(),
    ));
    let commit_id = add_and_commit(repository_dir.path(), &["a.txt"], "root on early");

    let commit = run_svcs_command(repository_dir.path(), &["cat-file", &commit_id])
        .assert()
        .success();
    let commit: serde_json::Value = serde_json::from_slice(&commit.get_output().stdout)?;
    assert!(commit["parent"].is_null());
    assert_eq!(read_branch(repository_dir.path(), "main"), "");

    Ok(())
}
