use crate::cli::Cli;
use crate::error::{CliError, Result};
use refmol::core::io::coords;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings as they appear in the optional TOML file. Every field is
/// optional; absent fields fall through to the defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSettings {
    pub precision: Option<usize>,
    pub output: Option<PathBuf>,
}

impl FileSettings {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if the file cannot be read or is not
    /// valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&text).map_err(|e| {
            CliError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })
    }
}

/// Effective output settings after layering: command-line flag over file
/// value over built-in default.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub precision: usize,
    pub output: Option<PathBuf>,
}

/// Resolves the effective settings for this invocation.
pub fn resolve(cli: &Cli) -> Result<Settings> {
    let file = match &cli.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };

    Ok(Settings {
        precision: cli
            .precision
            .or(file.precision)
            .unwrap_or(coords::DEFAULT_PRECISION),
        output: cli.output.clone().or(file.output),
    })
}
