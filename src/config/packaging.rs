//! Packaging settings: PWA manifest, browser extension and build output.

use serde::{Deserialize, Serialize};

/// Output directory of a regular production build.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Output directory when building the browser extension bundle.
pub const CHROME_EXTENSION_OUTPUT_DIR: &str = "chrome-extension/app";

/// Progressive web application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwaConfig {
    /// Name used in the PWA manifest.
    pub name: String,
}

/// Browser extension settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeExtensionConfig {
    /// Extension version. Bump it before publishing to the web store.
    pub version: String,
    pub name: String,
    pub description: String,
}

/// Production build options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Output directory for the production build.
    pub output_dir: String,
}

impl BuildConfig {
    /// Build options for the browser extension bundle.
    ///
    /// Callers assign this over the whole `build` section; nothing from the
    /// regular build options carries over.
    pub fn chrome_extension() -> Self {
        Self {
            output_dir: CHROME_EXTENSION_OUTPUT_DIR.to_string(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

/// Returns true for 1 to 4 dot-separated integers in 0..=65535 without
/// leading zeros, e.g. "0.0.1".
pub(crate) fn is_extension_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            part.chars().all(|c| c.is_ascii_digit())
                && part.parse::<u16>().is_ok()
                && (*part == "0" || !part.starts_with('0'))
        })
}
