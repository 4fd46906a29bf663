//! Error taxonomy for fluid value generation.

/// Failure modes of the fluid value pipeline.
///
/// Every variant is a deterministic input-validation failure detected
/// synchronously during reconciliation or interpolation. None of them
/// aborts a host build: the entry points in [`crate::generator`] downgrade
/// them to a logged diagnostic and an empty property map.
///
/// The enum is `Clone` so the cache can hand back stored failures by value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FluidError {
    /// The raw value string did not split into exactly two non-empty parts.
    #[error("provide two valid values")]
    Input,

    /// A token carried no parseable numeric magnitude.
    #[error("could not parse a numeric value from `{token}`")]
    Parse { token: String },

    /// The two value magnitudes disagree on unit after fallback.
    #[error("value units do not match")]
    ValueUnitMismatch,

    /// The two viewport magnitudes disagree on unit after fallback.
    #[error("viewport units do not match")]
    ViewportUnitMismatch,

    /// Value and viewport units differ but conversion is disabled.
    #[error("value and viewport units do not match. Change units or enable `convert_unit`")]
    ConversionDisabled,

    /// A unit outside the linear length-conversion table.
    #[error("cannot convert unit `{0}`")]
    UnknownUnit(String),

    /// Equal viewport bounds leave no range to interpolate over.
    #[error("viewport bounds must differ")]
    DegenerateViewport,
}
