//! Build and runtime configuration for the Fantom PWA wallet front-end.
//!
//! [`config::build_config`] produces the record consumed by the build tooling
//! and the app shell; [`provider::ProviderSelector`] resolves which GraphQL
//! endpoint the app talks to.

pub mod config;
pub mod provider;
