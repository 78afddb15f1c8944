use std::fs;
use std::path::{Path, PathBuf};

/// Lays out a minimal template tree matching what the remote template ships:
/// placeholder-bearing manifests, one handler per runtime and a nested source
/// directory.
pub fn fixture_template(root: &Path) -> PathBuf {
    let template = root.join("template");
    fs::create_dir_all(template.join("src")).expect("failed to create template dir");

    fs::write(
        template.join("package.json"),
        "{\n  \"name\": \"{{name}}\",\n  \"description\": \"{{description}}\",\n  \"version\": \"1.0.0\"\n}\n",
    )
    .unwrap();

    fs::write(template.join("README.md"), "# {{name}}\n\nGenerated backend service.\n")
        .unwrap();

    fs::write(
        template.join("serverless.yml"),
        "service: {{name}}\n\nprovider:\n  name: aws\n  runtime: {{runtime}}\n\ncustom:\n  customDomain:\n    domainName: {{domain}}\n    basePath: {{basePath}}\n",
    )
    .unwrap();

    fs::write(template.join("handler.js"), "module.exports.run = () => {};\n").unwrap();
    fs::write(template.join("handler.py"), "def run(event, context):\n    pass\n")
        .unwrap();
    fs::write(template.join("src").join("index.js"), "// entry point\n").unwrap();
    fs::write(template.join(".gitignore"), "node_modules/\n.env\n").unwrap();

    template
}
