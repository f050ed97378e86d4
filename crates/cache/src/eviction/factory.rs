//! Factory for creating eviction policies

use crate::policy_kind::EvictionPolicyKind;

use super::policies::{LruPolicy, WindowedTinyLfuPolicy};
use super::traits::EvictionPolicy;

/// Build the policy for a shard holding at most `capacity` entries
pub(crate) fn create_eviction_policy<T>(
    kind: EvictionPolicyKind,
    capacity: usize,
) -> Box<dyn EvictionPolicy<T>> {
    match kind {
        EvictionPolicyKind::Lru => Box::new(LruPolicy::new(capacity)),
        EvictionPolicyKind::WindowedTinyLfu => Box::new(WindowedTinyLfuPolicy::new(capacity)),
    }
}
