//! # fluidwind
//!
//! Fluid `clamp()` value generation for utility-CSS build pipelines.
//!
//! Given a compact value shorthand like `"10px@320px,100px@1024px"`, the crate
//! computes a CSS expression such as
//! `clamp(10px, calc(12.78vw + -30.91px), 100px)`: the property scales
//! linearly with viewport width between the two breakpoints and is pinned
//! outside them. A build-time host calls in once per distinct utility
//! value and substitutes the result as a CSS property value.
//!
//! ## Core Systems
//!
//! - **[`magnitude`]** — logos-lexed `NUMBER[UNIT]` tokens
//! - **[`config`]** — host configuration: defaults, breakpoints, utility table
//! - **[`convert`]** — root-font-size-anchored length unit conversion
//! - **[`reconcile`]** — viewport overrides, breakpoint lookup, unit fallback
//! - **[`clamp`]** — slope/intercept interpolation and clamp formatting
//! - **[`cache`]** — per-config memoization of computed values
//! - **[`generator`]** — host-facing entry points with diagnostic logging
//!
//! ## Example
//!
//! ```
//! use fluidwind::{FluidCache, FluidConfig};
//!
//! let config = FluidConfig::default();
//! let mut cache = FluidCache::new();
//!
//! let css = cache.fluid(&config, "10px@320px,100px@1024px").unwrap();
//! assert_eq!(css, "clamp(10px, calc(12.78vw + -30.91px), 100px)");
//! ```

pub mod cache;
pub mod clamp;
pub mod config;
pub mod convert;
pub mod error;
pub mod generator;
pub mod magnitude;
pub mod reconcile;

pub use cache::FluidCache;
pub use config::{FluidConfig, Screen};
pub use error::FluidError;
pub use generator::{fluid_properties, fluid_utility, fluid_value};
pub use magnitude::Magnitude;
pub use reconcile::ResolvedFluid;
