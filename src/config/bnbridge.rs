//! BNBridge API configuration.

use serde::{Deserialize, Serialize};

/// BNBridge API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BnbridgeApiConfig {
    /// Base URL of the API.
    pub url: String,
    /// Auth token. Left empty; the runtime supplies it if needed.
    #[serde(default)]
    pub token: String,
}
