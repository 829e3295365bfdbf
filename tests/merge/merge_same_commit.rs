use crate::common::command::{
    add_and_commit, init_repository_dir, repository_dir, run_svcs_command,
};
use crate::common::file::{FileSpec, read_branch, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn load_commit(dir: &std::path::Path, oid: &str) -> serde_json::Value {
    let output = run_svcs_command(dir, &["cat-file", oid]).assert().success();

    serde_json::from_slice(&output.get_output().stdout).expect("commit records are JSON")
}

#[rstest]
fn merge_same_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let dir = repository_dir.path();
    let head = read_branch(dir, "main");

    run_svcs_command(dir, &["branch", "same"]).assert().success();

    run_svcs_command(dir, &["merge", "same"])
        .env_remove("SVCS_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Branch 'same' merged into 'main' successfully.",
        ))
        .stderr(predicate::str::is_empty());

    // a merge commit is recorded even though both branches share a head
    let merge_head = read_branch(dir, "main");
    assert_ne!(merge_head, head);
    assert_eq!(read_branch(dir, "same"), head);

    let merge_commit = load_commit(dir, &merge_head);
    let base_commit = load_commit(dir, &head);
    assert_eq!(merge_commit["message"], "Merge branch 'same' into 'main'");
    assert_eq!(merge_commit["parent"], head.as_str());
    assert_eq!(merge_commit["files"], base_commit["files"]);

    Ok(())
}

#[rstest]
fn merge_branch_without_commits(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = read_branch(repository_dir.path(), "main");

    // an empty ref file, as left by a branch created before the first commit
    std::fs::write(repository_dir.path().join("branches").join("empty"), "")?;

    run_svcs_command(repository_dir.path(), &["merge", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branch 'empty' has no commits to merge."));

    assert_eq!(read_branch(repository_dir.path(), "main"), head);

    Ok(())
}

#[rstest]
fn merge_into_branch_without_commits(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_svcs_command(dir, &["init"]).assert().success();
    run_svcs_command(dir, &["branch", "empty"]).assert().success();

    write_file(FileSpec::new(dir.join("f.txt"), "content".to_string()));
    let main_head = add_and_commit(dir, &["f.txt"], "first on main");

    run_svcs_command(dir, &["checkout", "empty"]).assert().success();
    run_svcs_command(dir, &["merge", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Branch 'main' merged into 'empty' successfully.",
        ));

    let merge_head = read_branch(dir, "empty");
    assert_eq!(merge_head.len(), 40);
    assert_eq!(read_branch(dir, "main"), main_head);

    let merge_commit = load_commit(dir, &merge_head);
    let main_commit = load_commit(dir, &main_head);
    assert!(merge_commit["parent"].is_null());
    assert_eq!(merge_commit["files"], main_commit["files"]);

    Ok(())
}
