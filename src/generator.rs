//! Host-facing entry points: cached generation with diagnostic logging and
//! expansion of one computed value onto a utility's property list.

use std::collections::BTreeMap;

use crate::cache::FluidCache;
use crate::clamp::clamp_expression;
use crate::config::FluidConfig;
use crate::error::FluidError;
use crate::reconcile::reconcile;

/// Fixed prefix identifying this subsystem in host diagnostics.
const LOG_PREFIX: &str = "fluid";

/// The pure, uncached core: `(config, raw value) -> clamp expression`.
pub fn fluid_value(config: &FluidConfig, raw: &str) -> Result<String, FluidError> {
    let resolved = reconcile(config, raw)?;
    clamp_expression(&resolved)
}

/// Compute the fluid value for `raw` and fan it out onto `properties`.
///
/// Every property in a group receives the identical clamp string. On any
/// failure a diagnostic is logged and an empty map is returned, so the
/// host skips the offending utility instead of aborting the build.
pub fn fluid_properties(
    cache: &mut FluidCache,
    config: &FluidConfig,
    raw: &str,
    properties: &[String],
) -> BTreeMap<String, String> {
    match cache.fluid(config, raw) {
        Ok(value) => properties
            .iter()
            .map(|property| (property.clone(), value.clone()))
            .collect(),
        Err(err) => {
            log::error!("{LOG_PREFIX}: {err} (value `{raw}`)");
            BTreeMap::new()
        }
    }
}

/// Resolve a short utility name through the config's table and expand the
/// computed value onto its properties. Unknown names log a diagnostic and
/// yield an empty map.
pub fn fluid_utility(
    cache: &mut FluidCache,
    config: &FluidConfig,
    utility: &str,
    raw: &str,
) -> BTreeMap<String, String> {
    match config.utility_properties(utility) {
        Some(properties) => fluid_properties(cache, config, raw, properties),
        None => {
            log::error!("{LOG_PREFIX}: unknown utility `{utility}`");
            BTreeMap::new()
        }
    }
}
