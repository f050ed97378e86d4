//! Admission control for new keys entering a full shard
//!
//! The filter is a gate evaluated before any frequency comparison the
//! eviction policy performs. `Always` never refuses a candidate; the
//! probabilistic variant refuses a share of candidates regardless of how
//! popular they are, which damps churn under bursty write-heavy load.

use crate::policy_kind::AdmissionPolicyKind;

/// Per-shard admission gate
#[derive(Debug, Clone)]
pub enum AdmissionFilter {
    /// Admit every candidate
    Always,
    /// Admit a candidate when a uniform draw falls below `probability`
    Probabilistic { probability: f64, rng: fastrand::Rng },
}

impl AdmissionFilter {
    /// Build the filter selected by configuration
    pub fn new(kind: AdmissionPolicyKind, probability: f64) -> Self {
        match kind {
            AdmissionPolicyKind::Always => Self::Always,
            AdmissionPolicyKind::Probabilistic => {
                Self::probabilistic(probability, fastrand::Rng::new())
            }
        }
    }

    /// Probabilistic filter drawing from a caller-supplied generator
    pub fn probabilistic(probability: f64, rng: fastrand::Rng) -> Self {
        Self::Probabilistic {
            probability: probability.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Decide whether the next candidate may displace a resident
    pub fn admit(&mut self) -> bool {
        match self {
            Self::Always => true,
            Self::Probabilistic { probability, rng } => rng.f64() < *probability,
        }
    }

    pub fn kind(&self) -> AdmissionPolicyKind {
        match self {
            Self::Always => AdmissionPolicyKind::Always,
            Self::Probabilistic { .. } => AdmissionPolicyKind::Probabilistic,
        }
    }
}
