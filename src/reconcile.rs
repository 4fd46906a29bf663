//! Unit reconciliation: a raw `value[@viewport],value[@viewport]` string
//! plus a config becomes a fully resolved, unit-consistent set of
//! magnitudes ready for interpolation.

use crate::config::FluidConfig;
use crate::convert::LengthConverter;
use crate::error::FluidError;
use crate::magnitude::Magnitude;

/// Reconciler output: the value pair shares one unit and the viewport pair
/// has been converted into that same unit when it started out different.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFluid {
    /// Property value at the small end of the scaling range.
    pub value_min: Magnitude,
    /// Property value at the large end.
    pub value_max: Magnitude,
    /// Viewport width where scaling starts.
    pub viewport_min: Magnitude,
    /// Viewport width where scaling ends.
    pub viewport_max: Magnitude,
    /// The common value unit.
    pub unit: String,
}

/// Resolve `raw` under `config`: split the pair, apply `@` viewport
/// overrides, look up named breakpoints, parse, fill in fallback units,
/// verify consistency, and convert viewport units when needed.
pub fn reconcile(config: &FluidConfig, raw: &str) -> Result<ResolvedFluid, FluidError> {
    let (raw_min, raw_max) = split_pair(raw)?;

    let (value_min, viewport_min) = split_viewport(raw_min, &config.min);
    let (value_max, viewport_max) = split_viewport(raw_max, &config.max);

    let viewport_min = config.resolve_screen(viewport_min);
    let viewport_max = config.resolve_screen(viewport_max);

    let mut value_min = Magnitude::parse(value_min)?;
    let mut value_max = Magnitude::parse(value_max)?;
    let mut viewport_min = Magnitude::parse(viewport_min)?;
    let mut viewport_max = Magnitude::parse(viewport_max)?;

    // Symmetric unit fallback: each magnitude keeps its own unit, else
    // inherits its peer's, else the configured default (for values) or the
    // value unit (for viewports).
    if !value_min.has_unit() {
        value_min.unit = if value_max.has_unit() {
            value_max.unit.clone()
        } else {
            config.default_unit.clone()
        };
    }
    if !value_max.has_unit() {
        value_max.unit = value_min.unit.clone();
    }
    if !viewport_min.has_unit() {
        viewport_min.unit = if viewport_max.has_unit() {
            viewport_max.unit.clone()
        } else {
            value_min.unit.clone()
        };
    }
    if !viewport_max.has_unit() {
        viewport_max.unit = viewport_min.unit.clone();
    }

    if value_min.unit != value_max.unit {
        return Err(FluidError::ValueUnitMismatch);
    }
    if viewport_min.unit != viewport_max.unit {
        return Err(FluidError::ViewportUnitMismatch);
    }

    let unit = value_min.unit.clone();

    if viewport_min.unit != unit {
        if !config.convert_unit {
            return Err(FluidError::ConversionDisabled);
        }
        let root = Magnitude::parse(&config.root_font_size)?;
        let converter = LengthConverter::new(&root)?;
        viewport_min = converter.convert(&viewport_min, &unit)?;
        viewport_max = converter.convert(&viewport_max, &unit)?;
    }

    Ok(ResolvedFluid {
        value_min,
        value_max,
        viewport_min,
        viewport_max,
        unit,
    })
}

/// Split the raw input on its separating comma into exactly two non-empty
/// parts.
fn split_pair(raw: &str) -> Result<(&str, &str), FluidError> {
    let mut parts = raw.split(',');
    let min = parts.next().unwrap_or("").trim();
    let max = parts.next().unwrap_or("").trim();
    if min.is_empty() || max.is_empty() || parts.next().is_some() {
        return Err(FluidError::Input);
    }
    Ok((min, max))
}

/// Split one side into its value token and viewport token, defaulting the
/// viewport when no `@` override is present.
fn split_viewport<'a>(part: &'a str, default: &'a str) -> (&'a str, &'a str) {
    match part.split_once('@') {
        Some((value, viewport)) => (value.trim(), viewport.trim()),
        None => (part, default),
    }
}
