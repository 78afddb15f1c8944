mod common;

use stencil::error::Error;
use stencil::fetch::{fetch_template, TemplateSource};
use tempfile::TempDir;

#[test]
fn test_local_fetch_copies_full_tree() {
    let temp_dir = TempDir::new().unwrap();
    let template = common::fixture_template(temp_dir.path());
    let target = temp_dir.path().join("my-service");

    fetch_template(&TemplateSource::FileSystem(template.clone()), &target).unwrap();

    // The fetched tree must be the complete, unmodified template tree
    assert!(!dir_diff::is_different(&template, &target).unwrap());
}

#[test]
fn test_local_fetch_includes_hidden_files() {
    let temp_dir = TempDir::new().unwrap();
    let template = common::fixture_template(temp_dir.path());
    let target = temp_dir.path().join("my-service");

    fetch_template(&TemplateSource::FileSystem(template), &target).unwrap();

    assert!(target.join(".gitignore").exists());
    assert!(target.join("src/index.js").exists());
}

#[test]
fn test_missing_local_template_is_a_fetch_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");
    let target = temp_dir.path().join("my-service");

    match fetch_template(&TemplateSource::FileSystem(missing), &target) {
        Err(Error::FetchError { source_desc, cause }) => {
            assert!(source_desc.contains("nope"));
            assert!(cause.to_string().contains("does not exist"));
        }
        other => panic!("Expected FetchError, got {:?}", other),
    }
}
