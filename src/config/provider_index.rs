//! Default provider selection: a fixed index or the `"random"` marker.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

const RANDOM_MARKER: &str = "random";

/// Which provider the data client starts with.
///
/// Serialized as a plain integer for `Fixed` and as the string `"random"`
/// for `Random`, matching what the front-end tooling reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderIndex {
    /// Always use the provider at this position.
    Fixed(usize),
    /// Draw a uniformly random provider on every resolution.
    #[default]
    Random,
}

impl fmt::Display for ProviderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderIndex::Fixed(index) => write!(f, "{}", index),
            ProviderIndex::Random => f.write_str(RANDOM_MARKER),
        }
    }
}

impl Serialize for ProviderIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ProviderIndex::Fixed(index) => serializer.serialize_u64(*index as u64),
            ProviderIndex::Random => serializer.serialize_str(RANDOM_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for ProviderIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ProviderIndexVisitor)
    }
}

struct ProviderIndexVisitor;

impl<'de> Visitor<'de> for ProviderIndexVisitor {
    type Value = ProviderIndex;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a non-negative provider index or \"{}\"", RANDOM_MARKER)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        usize::try_from(value)
            .map(ProviderIndex::Fixed)
            .map_err(|_| E::custom(format!("provider index {} is too large", value)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value < 0 {
            return Err(E::custom(format!(
                "provider index must not be negative, got {}",
                value
            )));
        }
        self.visit_u64(value as u64)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value == RANDOM_MARKER {
            Ok(ProviderIndex::Random)
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}
