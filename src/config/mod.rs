//! Build and runtime configuration of the wallet front-end.
//!
//! [`build_config`] produces the whole record from a single build flag;
//! [`AppConfig::load`] adds validation so a broken record fails the build
//! instead of the running app.

mod apollo;
mod app;
mod bnbridge;
mod environment;
mod error;
mod export;
mod packaging;
mod provider_index;
mod scss;
mod settings;

pub use apollo::{ApolloConfig, Provider};
pub use app::AppConfig;
pub use bnbridge::BnbridgeApiConfig;
pub use environment::{BuildEnv, CHROME_EXTENSION_VAR};
pub use error::ConfigError;
pub use export::{OutputFormat, render};
pub use packaging::{
    BuildConfig, CHROME_EXTENSION_OUTPUT_DIR, ChromeExtensionConfig, DEFAULT_OUTPUT_DIR, PwaConfig,
};
pub use provider_index::ProviderIndex;
pub use scss::scss_data;
pub use settings::SettingsConfig;

use std::collections::HashSet;
use tracing::debug;

/// Builds the configuration for one build invocation.
///
/// Extension builds disable the PWA and replace the `build` section as a
/// whole. `scss_data` is derived last from the final flag.
pub fn build_config(is_chrome_extension: bool) -> AppConfig {
    let mut config = AppConfig::defaults();
    config.is_chrome_extension = is_chrome_extension;

    if config.is_chrome_extension {
        config.use_pwa = false;
        config.build = BuildConfig::chrome_extension();
    }

    config.scss_data = scss_data(config.is_chrome_extension);

    debug!(
        is_chrome_extension = config.is_chrome_extension,
        use_pwa = config.use_pwa,
        output_dir = %config.build.output_dir,
        "Config built"
    );

    config
}

impl AppConfig {
    /// Build the configuration for the given environment and validate it.
    pub fn load(env: &BuildEnv) -> Result<Self, ConfigError> {
        let config = build_config(env.is_chrome_extension);
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("keywords", &self.keywords)?;

        self.validate_apollo()?;

        require_non_empty("explorerUrl", &self.explorer_url)?;
        require_non_empty("ethereumExplorerUrl", &self.ethereum_explorer_url)?;
        require_non_empty("binanceExplorerUrl", &self.binance_explorer_url)?;
        require_non_empty("bnbridgeApi.url", &self.bnbridge_api.url)?;
        require_non_empty("pwa.name", &self.pwa.name)?;

        if self.is_chrome_extension && self.use_pwa {
            return Err(ConfigError::Validation(
                "usePWA must be false for chrome extension builds".into(),
            ));
        }

        if !packaging::is_extension_version(&self.chrome_extension.version) {
            return Err(ConfigError::Validation(format!(
                "chromeExtension.version: expected 1 to 4 dot-separated integers in 0..=65535, got {:?}",
                self.chrome_extension.version
            )));
        }
        require_non_empty("chromeExtension.name", &self.chrome_extension.name)?;
        require_non_empty("build.outputDir", &self.build.output_dir)?;

        if self.is_chrome_extension && self.build.output_dir != CHROME_EXTENSION_OUTPUT_DIR {
            return Err(ConfigError::Validation(format!(
                "build.outputDir must be {:?} for chrome extension builds, got {:?}",
                CHROME_EXTENSION_OUTPUT_DIR, self.build.output_dir
            )));
        }

        if self.scss_data != scss_data(self.is_chrome_extension) {
            return Err(ConfigError::Validation(format!(
                "scssData does not match isChromeExtension = {}",
                self.is_chrome_extension
            )));
        }

        self.validate_currencies()
    }

    fn validate_apollo(&self) -> Result<(), ConfigError> {
        let providers = &self.apollo.providers;
        if providers.is_empty() {
            return Err(ConfigError::Validation(
                "apollo.providers: at least one provider is required".into(),
            ));
        }

        for (i, provider) in providers.iter().enumerate() {
            require_non_empty(&format!("apollo.providers[{}].http", i), &provider.http)?;
        }

        if let ProviderIndex::Fixed(index) = self.apollo.default_provider_index {
            if index >= providers.len() {
                return Err(ConfigError::Validation(format!(
                    "apollo.defaultProviderIndex: {} is out of range for {} providers",
                    index,
                    providers.len()
                )));
            }
        }

        Ok(())
    }

    fn validate_currencies(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for code in &self.settings.currencies {
            if !settings::is_currency_code(code) {
                return Err(ConfigError::Validation(format!(
                    "settings.currencies: {:?} is not an ISO 4217 code",
                    code
                )));
            }
            if !seen.insert(code.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "settings.currencies: duplicate currency {}",
                    code
                )));
            }
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
