use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Config;
use super::validation::validate_config_semantics;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

const LOCAL_CONFIG_NAME: &str = ".layout-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for layout-guard.
    ///
    /// - Windows: `%APPDATA%\layout-guard`
    /// - macOS: `~/Library/Application Support/layout-guard`
    /// - Linux: `~/.config/layout-guard` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "layout-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.layout-guard.toml` in the current directory
/// 2. Platform-specific user config directory (`config.toml`)
/// 3. `Config::default()` if no config file is found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    /// Create a loader over a custom filesystem (used by tests).
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse(&self, path: &Path) -> Result<Config> {
        let content = self.fs.read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }

    fn discover(&self) -> Option<PathBuf> {
        if let Ok(cwd) = self.fs.current_dir() {
            let local = cwd.join(LOCAL_CONFIG_NAME);
            if self.fs.exists(&local) {
                return Some(local);
            }
        }

        let user = self.fs.config_dir()?.join(USER_CONFIG_NAME);
        self.fs.exists(&user).then_some(user)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        self.discover()
            .map_or_else(|| Ok(Config::default()), |path| self.parse(&path))
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        self.parse(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
