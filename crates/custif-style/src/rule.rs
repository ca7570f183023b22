//! Style rule model

use serde::{Deserialize, Serialize};

/// Responsive breakpoint a value applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Base styles, no media query
    Desktop,
    /// `max-width: 1024px`
    Tablet,
    /// `max-width: 767px`
    Mobile,
}

impl Breakpoint {
    /// All breakpoints in output order
    pub fn all() -> &'static [Breakpoint] {
        &[Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile]
    }

    /// Upper width bound in pixels, `None` for desktop
    pub fn max_width(self) -> Option<u32> {
        match self {
            Breakpoint::Desktop => None,
            Breakpoint::Tablet => Some(1024),
            Breakpoint::Mobile => Some(767),
        }
    }
}

/// Per-breakpoint values of a single property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl BreakpointValues {
    /// Raw value for a breakpoint, whether or not it is present
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&str> {
        match breakpoint {
            Breakpoint::Desktop => self.desktop.as_deref(),
            Breakpoint::Tablet => self.tablet.as_deref(),
            Breakpoint::Mobile => self.mobile.as_deref(),
        }
    }

    /// Value for a breakpoint if it counts as present.
    ///
    /// Missing and empty values are absent; `"0"` is present.
    pub fn present(&self, breakpoint: Breakpoint) -> Option<&str> {
        self.get(breakpoint).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, breakpoint: Breakpoint, value: impl Into<String>) {
        let slot = match breakpoint {
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Mobile => &mut self.mobile,
        };
        *slot = Some(value.into());
    }
}

/// One `selector { property: value }` declaration across breakpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    pub property: String,
    #[serde(default)]
    pub value_by_breakpoint: BreakpointValues,
    /// Suffix appended to numeric values only (e.g. `px`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl StyleRule {
    /// Rule with no values yet
    pub fn new(selector: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            property: property.into(),
            value_by_breakpoint: BreakpointValues::default(),
            unit: None,
        }
    }

    /// Rule with only a desktop value
    pub fn desktop(
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(selector, property).with_desktop(value)
    }

    pub fn with_desktop(mut self, value: impl Into<String>) -> Self {
        self.value_by_breakpoint.set(Breakpoint::Desktop, value);
        self
    }

    pub fn with_tablet(mut self, value: impl Into<String>) -> Self {
        self.value_by_breakpoint.set(Breakpoint::Tablet, value);
        self
    }

    pub fn with_mobile(mut self, value: impl Into<String>) -> Self {
        self.value_by_breakpoint.set(Breakpoint::Mobile, value);
        self
    }

    /// Set an optional value, leaving the breakpoint absent on `None`
    pub fn with_value(mut self, breakpoint: Breakpoint, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.value_by_breakpoint.set(breakpoint, value);
        }
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}
