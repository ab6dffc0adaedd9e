//! Root application configuration record.

use serde::{Deserialize, Serialize};

use super::{
    ApolloConfig, BnbridgeApiConfig, BuildConfig, ChromeExtensionConfig, Provider, ProviderIndex,
    PwaConfig, SettingsConfig,
};

const APP_NAME: &str = "Fantom PWA Wallet";
const APP_DESCRIPTION: &str = "Fantom PWA Wallet";
const APP_KEYWORDS: &str = "fantom, metamask";
const EXTENSION_VERSION: &str = "0.0.1";

/// Build and runtime configuration of the wallet front-end.
///
/// Produced by [`build_config`](super::build_config) and handed to whoever
/// needs it; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// App title.
    pub name: String,
    pub description: String,
    /// Comma-separated keywords for the page metadata.
    pub keywords: String,
    /// GraphQL client endpoints.
    pub apollo: ApolloConfig,
    /// Used in links pointing to the Fantom explorer.
    pub explorer_url: String,
    /// Used in links pointing to the Ethereum explorer.
    pub ethereum_explorer_url: String,
    /// Used in links pointing to the Binance explorer.
    pub binance_explorer_url: String,
    pub bnbridge_api: BnbridgeApiConfig,
    /// Whether the app is packaged as a progressive web application.
    #[serde(rename = "usePWA")]
    pub use_pwa: bool,
    pub pwa: PwaConfig,
    /// Whether the app is packaged as a browser extension.
    pub is_chrome_extension: bool,
    pub chrome_extension: ChromeExtensionConfig,
    pub build: BuildConfig,
    pub settings: SettingsConfig,
    /// SCSS prelude prepended to every stylesheet.
    pub scss_data: String,
}

impl AppConfig {
    /// The fixed literal values, before any packaging adjustments.
    pub(super) fn defaults() -> Self {
        Self {
            name: APP_NAME.to_string(),
            description: APP_DESCRIPTION.to_string(),
            keywords: APP_KEYWORDS.to_string(),
            apollo: ApolloConfig {
                providers: vec![
                    Provider::new("https://xapi2.fantom.network/api"),
                    Provider::new("https://xapi3.fantom.network/api"),
                ],
                default_provider_index: ProviderIndex::Random,
            },
            explorer_url: "https://explorer.fantom.network/".to_string(),
            ethereum_explorer_url: "https://etherscan.io/".to_string(),
            binance_explorer_url: "https://explorer.binance.org/".to_string(),
            bnbridge_api: BnbridgeApiConfig {
                url: "https://api.bnbridge.exchange/api/v1".to_string(),
                token: String::new(),
            },
            use_pwa: true,
            pwa: PwaConfig {
                name: APP_NAME.to_string(),
            },
            is_chrome_extension: false,
            chrome_extension: ChromeExtensionConfig {
                version: EXTENSION_VERSION.to_string(),
                name: APP_NAME.to_string(),
                description: APP_DESCRIPTION.to_string(),
            },
            build: BuildConfig::default(),
            settings: SettingsConfig::default(),
            scss_data: String::new(),
        }
    }
}
