//! Resolution of the GraphQL provider the data client talks to.
//!
//! The configuration only states a policy ([`ProviderIndex`]); this module
//! turns it into a concrete endpoint and picks a replacement when the
//! current one goes down.

use rand::Rng;
use tracing::{debug, warn};

use crate::config::{ApolloConfig, Provider, ProviderIndex};

/// Provider resolution error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("no providers configured")]
    NoProviders,
    #[error("provider index {index} is out of range for {len} providers")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A provider together with its position in the configured list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedProvider<'a> {
    pub index: usize,
    pub provider: &'a Provider,
}

/// Picks providers according to the configured default index.
#[derive(Debug, Clone)]
pub struct ProviderSelector<'a> {
    providers: &'a [Provider],
    default_index: ProviderIndex,
}

impl<'a> ProviderSelector<'a> {
    pub fn new(apollo: &'a ApolloConfig) -> Result<Self, ProviderError> {
        if apollo.providers.is_empty() {
            return Err(ProviderError::NoProviders);
        }

        Ok(Self {
            providers: &apollo.providers,
            default_index: apollo.default_provider_index,
        })
    }

    /// Resolves the default provider.
    ///
    /// `Random` draws a fresh uniform index on every call; `Fixed` must be
    /// within bounds.
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<SelectedProvider<'a>, ProviderError> {
        let index = match self.default_index {
            ProviderIndex::Random => rng.gen_range(0..self.providers.len()),
            ProviderIndex::Fixed(index) => index,
        };

        let provider = self
            .providers
            .get(index)
            .ok_or(ProviderError::IndexOutOfRange {
                index,
                len: self.providers.len(),
            })?;

        debug!(index, http = %provider.http, policy = %self.default_index, "Provider selected");

        Ok(SelectedProvider { index, provider })
    }

    /// Picks a random provider other than `unavailable`.
    ///
    /// Returns `None` when there is nothing left to switch to.
    pub fn fallback<R: Rng + ?Sized>(
        &self,
        unavailable: usize,
        rng: &mut R,
    ) -> Option<SelectedProvider<'a>> {
        let candidates: Vec<usize> = (0..self.providers.len())
            .filter(|&i| i != unavailable)
            .collect();

        if candidates.is_empty() {
            warn!(unavailable, "No fallback provider available");
            return None;
        }

        let index = candidates[rng.gen_range(0..candidates.len())];
        let provider = &self.providers[index];

        warn!(unavailable, index, http = %provider.http, "Switching to fallback provider");

        Some(SelectedProvider { index, provider })
    }
}
