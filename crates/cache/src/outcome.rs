//! Result of a write

/// Why a write was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("key is {size} bytes, limit is {limit}")]
    KeyTooLarge { size: usize, limit: usize },

    #[error("value is {size} bytes, limit is {limit}")]
    ValueTooLarge { size: usize, limit: usize },

    #[error("admission filter rejected the candidate")]
    AdmissionDenied,

    #[error("caching is disabled")]
    Disabled,

    #[error("cache is closed")]
    Closed,
}

/// What a write did to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The key was new and is now resident
    Inserted,
    /// The key was already resident and its value was replaced
    Updated,
    /// Nothing changed
    Rejected(RejectReason),
}

impl SetOutcome {
    /// True when the value is now stored
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Inserted | Self::Updated)
    }

    #[must_use]
    pub const fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::Inserted | Self::Updated => None,
        }
    }
}

impl From<RejectReason> for SetOutcome {
    fn from(reason: RejectReason) -> Self {
        Self::Rejected(reason)
    }
}
