//! Memoization for computed fluid values.

use std::collections::HashMap;

use crate::clamp::clamp_expression;
use crate::config::FluidConfig;
use crate::error::FluidError;
use crate::reconcile::reconcile;

/// Memoizes end-to-end fluid computations for the life of a build process.
///
/// Keys pair the raw value string with a fingerprint of the configuration
/// fields that affect the output, so two configurations sharing one cache
/// never cross-contaminate. Failures are cached alongside successes so a
/// repeated bad value is not re-validated. Entries are immutable once
/// written and never evicted.
///
/// The host owns the cache and passes it by `&mut`; builds with parallel
/// workers should shard one cache per worker or add their own lock.
#[derive(Debug, Default)]
pub struct FluidCache {
    entries: HashMap<(u64, String), Result<String, FluidError>>,
}

impl FluidCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized computations (successes and failures).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute the clamp expression for `raw`, reusing the stored result
    /// when one exists for this (config, raw) pair.
    pub fn fluid(&mut self, config: &FluidConfig, raw: &str) -> Result<String, FluidError> {
        let key = (config.fingerprint(), raw.to_string());
        if let Some(cached) = self.entries.get(&key) {
            return cached.clone();
        }

        let result = reconcile(config, raw).and_then(|resolved| clamp_expression(&resolved));
        self.entries.insert(key, result.clone());
        result
    }
}
