//! Build environment flags.
//!
//! The only input is whether the bundle is built as a browser extension.
//! Truthiness follows the front-end toolchain: any non-empty value counts as
//! set, including "false" and "0".

use std::collections::HashMap;
use std::env;
use std::path::Path;

use tracing::debug;

use super::ConfigError;

/// Environment variable that switches the build to browser extension mode.
pub const CHROME_EXTENSION_VAR: &str = "VUE_APP_IS_CHROME_EXTENSION";

/// Flags read from the build environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildEnv {
    pub is_chrome_extension: bool,
}

impl BuildEnv {
    /// Reads the process environment after loading `.env` (if present).
    pub fn from_process_env() -> Self {
        // .env is optional
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads flags from a dotenv file without touching the process environment.
    ///
    /// Variables already set in the process environment take precedence.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_env_file_with(path, |key| env::var(key).ok())
    }

    pub(crate) fn from_env_file_with<F>(
        path: impl AsRef<Path>,
        process_lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut file_vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            file_vars.insert(key, value);
        }
        debug!(path = %path.display(), vars = file_vars.len(), "Loaded env file");

        Ok(Self::from_lookup(|key| {
            process_lookup(key).or_else(|| file_vars.get(key).cloned())
        }))
    }

    /// Builds flags from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            is_chrome_extension: is_truthy(lookup(CHROME_EXTENSION_VAR).as_deref()),
        }
    }
}

/// Set and non-empty.
pub(crate) fn is_truthy(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}
