//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after
//! parsing: naming patterns must compile, structure entries must be
//! non-empty. Unknown check names are rejected during deserialization.

use regex::Regex;

use crate::config::Config;
use crate::{LayoutGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a naming pattern does not compile or a structure
/// entry is empty.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_naming_section(config)?;
    validate_structure_section(config)?;
    Ok(())
}

fn validate_naming_section(config: &Config) -> Result<()> {
    let patterns = [
        &config.naming.project,
        &config.naming.dataweave,
        &config.naming.dataweave_module,
        &config.naming.xml,
        &config.naming.yaml,
        &config.naming.json_example,
    ];

    for pattern in patterns {
        Regex::new(pattern).map_err(|e| LayoutGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    Ok(())
}

fn validate_structure_section(config: &Config) -> Result<()> {
    for (i, name) in config.structure.required_files.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(LayoutGuardError::Config(format!(
                "structure.required_files[{i}] cannot be empty"
            )));
        }
    }

    for (i, path) in config.structure.required_folders.iter().enumerate() {
        if path.trim().is_empty() {
            return Err(LayoutGuardError::Config(format!(
                "structure.required_folders[{i}] cannot be empty"
            )));
        }
    }

    if config.structure.modules_prefix.trim().is_empty() {
        return Err(LayoutGuardError::Config(
            "structure.modules_prefix cannot be empty".to_string(),
        ));
    }

    if config.structure.anchor_file.trim().is_empty() {
        return Err(LayoutGuardError::Config(
            "structure.anchor_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
