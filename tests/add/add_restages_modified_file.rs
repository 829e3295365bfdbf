use crate::common::command::{repository_dir, run_svcs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_restages_modified_file(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file_path = repository_dir.path().join("notes.txt");
    write_file(FileSpec::new(file_path.clone(), "first draft".to_string()));
    run_svcs_command(repository_dir.path(), &["add", "notes.txt"])
        .assert()
        .success();
    let first = std::fs::read_to_string(repository_dir.path().join("staging").join("notes.txt"))?;

    write_file(FileSpec::new(file_path, "second draft".to_string()));
    run_svcs_command(repository_dir.path(), &["add", "notes.txt"])
        .assert()
        .success();
    let second = std::fs::read_to_string(repository_dir.path().join("staging").join("notes.txt"))?;

    assert_ne!(first, second);

    // the staged ID is the ID hash-object reports for the current content
    let hashed = run_svcs_command(repository_dir.path(), &["hash-object", "notes.txt"])
        .assert()
        .success();
    let hashed = String::from_utf8(hashed.get_output().stdout.clone())?;
    assert_eq!(hashed.trim(), second.trim());

    Ok(())
}
