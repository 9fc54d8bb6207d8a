#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the layout-guard binary.
#[macro_export]
macro_rules! layout_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("layout-guard"))
    };
}

/// Creates a temporary project tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic layout-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".layout-guard.toml", content);
    }

    /// Creates a project subdirectory with the given name that satisfies
    /// every default check, and returns its root-relative name.
    pub fn create_clean_project(&self, name: &str) -> String {
        for file in [
            "pom.xml",
            "README.md",
            "global.xml",
            "munit-global.xml",
            "health-check.xml",
            "src/main/mule/main-flow.xml",
            "src/main/resources/config.yaml",
            "src/main/resources/config-secure.yaml",
        ] {
            self.create_file(&format!("{name}/{file}"), "");
        }
        self.create_dir(&format!("{name}/src/test"));
        name.to_string()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config limiting the run to naming checks only.
pub const NAMING_ONLY_CONFIG: &str = r#"
[checks]
enabled = ["dataweave-naming", "xml-naming", "yaml-naming", "json-example-naming"]
"#;

/// Config limiting the run to the required-files check only.
pub const REQUIRED_FILES_ONLY_CONFIG: &str = r#"
[checks]
enabled = ["required-files"]

[structure]
required_files = ["pom.xml"]
"#;
