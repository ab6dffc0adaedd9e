//! GraphQL client provider settings.

use serde::{Deserialize, Serialize};

use super::ProviderIndex;

/// Settings for the application's GraphQL client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApolloConfig {
    /// API endpoints. If one of them is unavailable another one is picked at random.
    pub providers: Vec<Provider>,
    /// Provider used on startup.
    #[serde(default)]
    pub default_provider_index: ProviderIndex,
}

/// A single API endpoint pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// HTTP endpoint for queries and mutations.
    pub http: String,
    /// WebSocket endpoint for subscriptions, empty when not offered.
    #[serde(default)]
    pub ws: String,
}

impl Provider {
    pub fn new(http: impl Into<String>) -> Self {
        Self {
            http: http.into(),
            ws: String::new(),
        }
    }

    /// Subscriptions endpoint, if the provider has one.
    pub fn subscriptions_url(&self) -> Option<&str> {
        if self.ws.is_empty() {
            None
        } else {
            Some(&self.ws)
        }
    }
}
