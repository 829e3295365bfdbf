use crate::common::command::{repository_dir, run_svcs_command};
use crate::common::file::{read_branch, read_head};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Initialized repository in .+")?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(repository_dir.path().join("objects").is_dir());
    assert!(repository_dir.path().join("branches").is_dir());
    assert!(repository_dir.path().join("staging").is_dir());
    assert_eq!(read_head(repository_dir.path()), "main");
    assert_eq!(read_branch(repository_dir.path(), "main"), "");

    Ok(())
}

#[rstest]
fn init_repository_at_repo_option(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let nested = repository_dir.path().join("nested").join("repo");
    let nested_arg = nested.display().to_string();

    run_svcs_command(repository_dir.path(), &["--repo", &nested_arg, "init"])
        .assert()
        .success();

    assert_eq!(read_head(&nested), "main");
    assert!(!repository_dir.path().join("HEAD").exists());

    Ok(())
}
