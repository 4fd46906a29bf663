//! Linear interpolation between the two (value, viewport) points and the
//! final `clamp()` expression formatting.

use crate::error::FluidError;
use crate::magnitude::Magnitude;
use crate::reconcile::ResolvedFluid;

/// Round half-up: ties go toward positive infinity, so `-312.5` rounds
/// to `-312`, not `-313`.
fn round_half_up(n: f64) -> f64 {
    (n + 0.5).floor()
}

/// Round to two decimal places.
fn round2(n: f64) -> f64 {
    round_half_up(n * 100.0) / 100.0
}

/// Render the `clamp(lower, calc(slope vw + intercept), upper)` expression
/// for a resolved fluid scale.
///
/// The slope is rescaled from value-units-per-viewport-unit into value
/// units per `1vw` (1% of viewport width). The intercept is derived from
/// the unrounded slope so rounding error does not compound. Bounds are
/// ordered numerically, so decreasing scales still produce a valid clamp.
pub fn clamp_expression(resolved: &ResolvedFluid) -> Result<String, FluidError> {
    let ResolvedFluid {
        value_min,
        value_max,
        viewport_min,
        viewport_max,
        unit,
    } = resolved;

    let run = viewport_max.value - viewport_min.value;
    if run == 0.0 {
        return Err(FluidError::DegenerateViewport);
    }

    // (y2 - y1) / (x2 - x1)
    let slope = (value_max.value - value_min.value) / run;
    // value units per 1vw, rounded to 2 decimal places
    let slope_vw = round_half_up(slope * 10_000.0) / 100.0;
    // y-intercept: c = y - m*x, from the unrounded slope
    let intercept = round2(value_max.value - slope * viewport_max.value);

    let lower = value_min.value.min(value_max.value);
    let upper = value_min.value.max(value_max.value);

    Ok(format!(
        "clamp({}, calc({} + {}), {})",
        Magnitude::new(lower, unit.as_str()),
        Magnitude::new(slope_vw, "vw"),
        Magnitude::new(intercept, unit.as_str()),
        Magnitude::new(upper, unit.as_str()),
    ))
}
