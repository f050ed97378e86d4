//! Eviction and admission policy selectors
//!
//! Policies arrive as free-form strings in JSON configuration. They are
//! resolved into closed enums once, when the configuration is parsed, so no
//! operation on the hot path compares strings.

use crate::errors::{CacheError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which eviction policy a shard runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EvictionPolicyKind {
    /// Plain least-recently-used ordering
    #[default]
    #[serde(rename = "lru")]
    Lru,
    /// Windowed TinyLFU: window, probation and protected segments
    #[serde(rename = "wtinylfu")]
    WindowedTinyLfu,
}

/// Which admission filter gates new keys into a full shard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum AdmissionPolicyKind {
    /// Every candidate is admitted
    #[default]
    #[serde(rename = "always")]
    Always,
    /// Candidates are admitted with the configured probability
    #[serde(rename = "probabilistic")]
    Probabilistic,
}

impl EvictionPolicyKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lru => "lru",
            Self::WindowedTinyLfu => "wtinylfu",
        }
    }
}

impl AdmissionPolicyKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Probabilistic => "probabilistic",
        }
    }
}

impl FromStr for EvictionPolicyKind {
    type Err = CacheError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "lru" => Ok(Self::Lru),
            "wtinylfu" | "w-tinylfu" | "tinylfu" => Ok(Self::WindowedTinyLfu),
            other => Err(CacheError::configuration(
                format!("Unknown eviction policy: {other}"),
                Self::default().as_str(),
            )),
        }
    }
}

impl FromStr for AdmissionPolicyKind {
    type Err = CacheError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "always" => Ok(Self::Always),
            "probabilistic" => Ok(Self::Probabilistic),
            other => Err(CacheError::configuration(
                format!("Unknown admission policy: {other}"),
                Self::default().as_str(),
            )),
        }
    }
}

impl From<String> for EvictionPolicyKind {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|e: CacheError| {
            tracing::warn!("{}, falling back to {}", e, Self::default());
            Self::default()
        })
    }
}

impl From<String> for AdmissionPolicyKind {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|e: CacheError| {
            tracing::warn!("{}, falling back to {}", e, Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for EvictionPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AdmissionPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
