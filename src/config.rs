//! Tuning override files
//!
//! Every game compiles with built-in tuning defaults and optionally reads a
//! RON file next to the executable to override some or all of them. A
//! missing file is the normal case and means "use the defaults"; a file
//! that exists but fails to parse is reported on stderr and ignored.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Load a tuning struct from a RON file. The file must exist.
pub fn load<T: DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(ron::from_str(&text)?)
}

/// Startup-path loader: defaults when the file is absent, defaults plus a
/// stderr note when it is present but unreadable.
pub fn load_or_warn<T: DeserializeOwned + Default>(path: &str) -> T {
    if !Path::new(path).exists() {
        return T::default();
    }
    match load(path) {
        Ok(tuning) => {
            println!("{}: loaded tuning overrides", path);
            tuning
        }
        Err(e) => {
            eprintln!("{}: ignoring tuning overrides: {}", path, e);
            T::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
