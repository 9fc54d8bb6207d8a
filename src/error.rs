use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid naming pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
