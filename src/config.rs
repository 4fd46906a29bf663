//! Host-facing configuration: default viewports, breakpoint table, and the
//! short-utility-name to CSS-property mapping.
//!
//! The host build mechanism resolves one [`FluidConfig`] when it loads the
//! plugin (merging its theme settings over [`FluidConfig::default`]) and
//! treats it as read-only for the rest of the build.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};

/// A breakpoint table entry as supplied by the host theme: either a bare
/// width string (`"768px"`) or an object with optional `min`/`max` bounds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Screen {
    /// A bare width token.
    Width(String),
    /// A `{min, max}` range; resolution prefers `min`.
    Range {
        #[serde(default)]
        min: Option<String>,
        #[serde(default)]
        max: Option<String>,
    },
}

impl Screen {
    /// Resolve to a concrete width token: `min` wins, then `max`, then the
    /// bare width. `None` for an empty range.
    pub fn width(&self) -> Option<&str> {
        match self {
            Screen::Width(w) => Some(w),
            Screen::Range { min: Some(w), .. } => Some(w),
            Screen::Range {
                min: None,
                max: Some(w),
            } => Some(w),
            Screen::Range {
                min: None,
                max: None,
            } => None,
        }
    }
}

/// Immutable per-invocation settings for the fluid value generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FluidConfig {
    /// Prefix the host prepends to each short utility name (`fl-p`, `fl-m`).
    /// Carried for the host's class-name construction; the core never reads it.
    pub prefix: String,
    /// Default viewport lower bound used when a value carries no `@viewport`.
    pub min: String,
    /// Default viewport upper bound.
    pub max: String,
    /// Allow converting viewport units into the value unit when they differ.
    pub convert_unit: bool,
    /// Root font size anchoring font-relative unit conversions.
    pub root_font_size: String,
    /// Base length unit assumed when both values are unitless.
    pub default_unit: String,
    /// Short utility name to the ordered CSS properties receiving the value.
    pub utilities: BTreeMap<String, Vec<String>>,
    /// Named breakpoints supplied by the host theme.
    pub screens: BTreeMap<String, Screen>,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            prefix: "fl-".into(),
            min: "576px".into(),
            max: "1024px".into(),
            convert_unit: true,
            root_font_size: "16px".into(),
            default_unit: "px".into(),
            utilities: stock_utilities(),
            screens: BTreeMap::new(),
        }
    }
}

impl FluidConfig {
    /// Ordered CSS property list for a short utility name.
    pub fn utility_properties(&self, name: &str) -> Option<&[String]> {
        self.utilities.get(name).map(Vec::as_slice)
    }

    /// Resolve a viewport token through the breakpoint table.
    ///
    /// Known names substitute their resolved width; anything else passes
    /// through untouched for literal `NUMBER[UNIT]` parsing.
    pub fn resolve_screen<'a>(&'a self, token: &'a str) -> &'a str {
        self.screens
            .get(token)
            .and_then(Screen::width)
            .unwrap_or(token)
    }

    /// Fingerprint over the fields that affect a computed value, used as
    /// part of the cache key so two configurations sharing one cache never
    /// cross-contaminate.
    pub(crate) fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.min.hash(&mut hasher);
        self.max.hash(&mut hasher);
        self.convert_unit.hash(&mut hasher);
        self.root_font_size.hash(&mut hasher);
        self.default_unit.hash(&mut hasher);
        for (name, screen) in &self.screens {
            name.hash(&mut hasher);
            match screen {
                Screen::Width(w) => {
                    0u8.hash(&mut hasher);
                    w.hash(&mut hasher);
                }
                Screen::Range { min, max } => {
                    1u8.hash(&mut hasher);
                    min.hash(&mut hasher);
                    max.hash(&mut hasher);
                }
            }
        }
        hasher.finish()
    }
}

/// The stock utility table: every short name the generator ships with and
/// the CSS properties it expands to, in declaration order.
fn stock_utilities() -> BTreeMap<String, Vec<String>> {
    let entries: &[(&str, &[&str])] = &[
        // padding
        ("p", &["padding"]),
        ("pl", &["padding-left"]),
        ("pr", &["padding-right"]),
        ("pt", &["padding-top"]),
        ("pb", &["padding-bottom"]),
        ("py", &["padding-top", "padding-bottom"]),
        ("px", &["padding-left", "padding-right"]),
        // margin
        ("m", &["margin"]),
        ("ml", &["margin-left"]),
        ("mr", &["margin-right"]),
        ("mt", &["margin-top"]),
        ("mb", &["margin-bottom"]),
        ("my", &["margin-top", "margin-bottom"]),
        ("mx", &["margin-left", "margin-right"]),
        // sizing
        ("w", &["width"]),
        ("min-w", &["min-width"]),
        ("max-w", &["max-width"]),
        ("h", &["height"]),
        ("min-h", &["min-height"]),
        ("max-h", &["max-height"]),
        // positioning
        ("top", &["top"]),
        ("bottom", &["bottom"]),
        ("left", &["left"]),
        ("right", &["right"]),
        ("inset", &["top", "bottom", "left", "right"]),
        // gap
        ("gap", &["gap"]),
        ("gap-x", &["column-gap"]),
        ("gap-y", &["row-gap"]),
        // misc
        ("text", &["font-size"]),
        ("basis", &["flex-basis"]),
        ("rounded", &["border-radius"]),
    ];

    entries
        .iter()
        .map(|(name, props)| {
            (
                name.to_string(),
                props.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}
