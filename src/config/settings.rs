//! User-facing application settings.

use serde::{Deserialize, Serialize};

/// Settings shown in the settings view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Available ISO 4217 currency codes, in display order.
    pub currencies: Vec<String>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            currencies: vec!["USD".to_string(), "EUR".to_string()],
        }
    }
}

/// Checks the shape of an ISO 4217 alphabetic code: three uppercase ASCII letters.
pub(crate) fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
