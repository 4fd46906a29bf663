//! Linear length-unit conversion anchored at the root font size.
//!
//! Covers the units a fluid scale is allowed to mix: absolute (`px`, `pt`)
//! and root-relative (`em`, `rem`, `%` of the root font size). Ratios are
//! fixed at the CSS reference values (96px per inch, 72pt per inch).

use crate::error::FluidError;
use crate::magnitude::Magnitude;

/// Pixels per point at the CSS reference resolution.
const PX_PER_PT: f64 = 96.0 / 72.0;

/// Browser-default root font size in pixels, used when the configured root
/// is itself font-relative.
const DEFAULT_ROOT_PX: f64 = 16.0;

/// Converts magnitudes between supported length units, anchored by the
/// configured root font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthConverter {
    root_px: f64,
}

impl LengthConverter {
    /// Build a converter from the configured root font size.
    ///
    /// The root may be given in `px`, `pt`, or unitless pixels; `em`/`rem`
    /// and `%` roots resolve against the 16px browser default.
    pub fn new(root_font_size: &Magnitude) -> Result<Self, FluidError> {
        let root_px = match root_font_size.unit.as_str() {
            "" | "px" => root_font_size.value,
            "pt" => root_font_size.value * PX_PER_PT,
            "em" | "rem" => root_font_size.value * DEFAULT_ROOT_PX,
            "%" => root_font_size.value / 100.0 * DEFAULT_ROOT_PX,
            other => return Err(FluidError::UnknownUnit(other.to_string())),
        };
        Ok(Self { root_px })
    }

    /// Pixels represented by one unit of `unit`.
    fn px_factor(&self, unit: &str) -> Result<f64, FluidError> {
        match unit {
            "" | "px" => Ok(1.0),
            "pt" => Ok(PX_PER_PT),
            "em" | "rem" => Ok(self.root_px),
            "%" => Ok(self.root_px / 100.0),
            other => Err(FluidError::UnknownUnit(other.to_string())),
        }
    }

    /// Re-express `magnitude` in `target` units.
    pub fn convert(&self, magnitude: &Magnitude, target: &str) -> Result<Magnitude, FluidError> {
        let px = magnitude.value * self.px_factor(&magnitude.unit)?;
        Ok(Magnitude::new(px / self.px_factor(target)?, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> LengthConverter {
        LengthConverter::new(&Magnitude::new(16.0, "px")).unwrap()
    }

    #[test]
    fn test_px_to_rem() {
        let m = converter()
            .convert(&Magnitude::new(320.0, "px"), "rem")
            .unwrap();
        assert_eq!(m, Magnitude::new(20.0, "rem"));
    }

    #[test]
    fn test_rem_to_px() {
        let m = converter()
            .convert(&Magnitude::new(2.0, "rem"), "px")
            .unwrap();
        assert_eq!(m, Magnitude::new(32.0, "px"));
    }

    #[test]
    fn test_pt_to_px() {
        let m = converter()
            .convert(&Magnitude::new(12.0, "pt"), "px")
            .unwrap();
        assert_eq!(m, Magnitude::new(16.0, "px"));
    }

    #[test]
    fn test_percent_of_root() {
        let m = converter()
            .convert(&Magnitude::new(150.0, "%"), "px")
            .unwrap();
        assert_eq!(m, Magnitude::new(24.0, "px"));
    }

    #[test]
    fn test_custom_root() {
        let converter = LengthConverter::new(&Magnitude::new(10.0, "px")).unwrap();
        let m = converter
            .convert(&Magnitude::new(320.0, "px"), "rem")
            .unwrap();
        assert_eq!(m, Magnitude::new(32.0, "rem"));
    }

    #[test]
    fn test_em_equals_rem() {
        let c = converter();
        let em = c.convert(&Magnitude::new(1.0, "em"), "px").unwrap();
        let rem = c.convert(&Magnitude::new(1.0, "rem"), "px").unwrap();
        assert_eq!(em.value, rem.value);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            converter().convert(&Magnitude::new(1.0, "vh"), "px"),
            Err(FluidError::UnknownUnit("vh".into()))
        );
        assert_eq!(
            converter().convert(&Magnitude::new(1.0, "px"), "ch"),
            Err(FluidError::UnknownUnit("ch".into()))
        );
    }

    #[test]
    fn test_font_relative_root() {
        // 1.5rem root resolves against the 16px browser default.
        let converter = LengthConverter::new(&Magnitude::new(1.5, "rem")).unwrap();
        let m = converter
            .convert(&Magnitude::new(1.0, "rem"), "px")
            .unwrap();
        assert_eq!(m, Magnitude::new(24.0, "px"));
    }
}
