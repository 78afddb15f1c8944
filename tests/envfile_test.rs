use std::fs;
use stencil::constants::REQUIRED_ENV_VARS;
use stencil::envfile::{env_entries, prune_handlers, write_env_file};
use stencil::project::{ProjectRequest, Runtime};
use tempfile::TempDir;

fn request(runtime: Runtime) -> ProjectRequest {
    ProjectRequest {
        name: "my-service".to_string(),
        description: String::new(),
        domain: "example.com".to_string(),
        base_path: "api".to_string(),
        runtime,
    }
}

#[test]
fn test_env_entries_match_required_vars_in_order() {
    let entries = env_entries(&request(Runtime::NodeJs));
    let keys: Vec<&str> = entries.keys().copied().collect();
    assert_eq!(keys, REQUIRED_ENV_VARS);
}

#[test]
fn test_write_env_file_content() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = write_env_file(temp_dir.path(), &request(Runtime::NodeJs)).unwrap();

    let content = fs::read_to_string(env_path).unwrap();
    assert_eq!(
        content,
        "DB_CONNECTION_STRING=''\n\
         AWS_ACCESS_KEY_ID=''\n\
         AWS_SECRET_ACCESS_KEY=''\n\
         DOMAIN='example.com'\n\
         BASE_PATH='api'\n\
         RUNTIME='nodejs10.x'\n"
    );
}

#[test]
fn test_write_env_file_resolves_python_runtime() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = write_env_file(temp_dir.path(), &request(Runtime::Python)).unwrap();

    let content = fs::read_to_string(env_path).unwrap();
    assert!(content.contains("RUNTIME='python3.7'"));
}

#[test]
fn test_prune_handlers_keeps_selected_runtime() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("handler.js"), "module.exports = {};").unwrap();
    fs::write(temp_dir.path().join("handler.py"), "def handler(): pass").unwrap();

    prune_handlers(temp_dir.path(), Runtime::Python).unwrap();

    assert!(!temp_dir.path().join("handler.js").exists());
    assert!(temp_dir.path().join("handler.py").exists());
}

#[test]
fn test_prune_handlers_nodejs() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("handler.js"), "module.exports = {};").unwrap();
    fs::write(temp_dir.path().join("handler.py"), "def handler(): pass").unwrap();

    prune_handlers(temp_dir.path(), Runtime::NodeJs).unwrap();

    assert!(temp_dir.path().join("handler.js").exists());
    assert!(!temp_dir.path().join("handler.py").exists());
}

#[test]
fn test_prune_handlers_tolerates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(prune_handlers(temp_dir.path(), Runtime::NodeJs).is_ok());
}
