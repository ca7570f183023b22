//! Viewer option model
//!
//! Every enum knows its wire value (`as_param`) and how to read it back
//! (`from_param`). Dependent values (custom color, custom zoom) live inside
//! the variant that unlocks them.

use crate::error::{invalid, Result};
use serde::{Deserialize, Serialize};

/// Color used when the custom theme is picked without a color
pub const DEFAULT_CUSTOM_COLOR: &str = "#38383d";

/// Viewer color scheme
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Follow the system preference
    #[default]
    Default,
    Dark,
    Light,
    /// Toolbar colors derived from a single color; empty means no override
    Custom { color: String },
}

impl ThemeMode {
    pub fn as_param(&self) -> &'static str {
        match self {
            ThemeMode::Default => "default",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
            ThemeMode::Custom { .. } => "custom",
        }
    }

    /// Parse the theme name; `custom` starts without a color
    pub fn from_param(value: &str) -> Result<Self> {
        match value {
            "default" => Ok(ThemeMode::Default),
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            "custom" => Ok(ThemeMode::Custom {
                color: String::new(),
            }),
            other => Err(invalid("themeMode", other)),
        }
    }

    /// Custom color to send, if any
    pub fn custom_color(&self) -> Option<&str> {
        match self {
            ThemeMode::Custom { color } if !color.is_empty() => Some(color),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarPosition {
    #[default]
    Top,
    Bottom,
}

impl ToolbarPosition {
    pub fn as_param(self) -> &'static str {
        match self {
            ToolbarPosition::Top => "top",
            ToolbarPosition::Bottom => "bottom",
        }
    }

    pub fn from_param(value: &str) -> Result<Self> {
        match value {
            "top" => Ok(ToolbarPosition::Top),
            "bottom" => Ok(ToolbarPosition::Bottom),
            other => Err(invalid("position", other)),
        }
    }
}

/// Cursor tool active when the document opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTool {
    #[default]
    Text,
    Hand,
}

impl SelectionTool {
    pub fn as_param(self) -> &'static str {
        match self {
            SelectionTool::Text => "0",
            SelectionTool::Hand => "1",
        }
    }

    pub fn from_param(value: &str) -> Result<Self> {
        match value {
            "0" => Ok(SelectionTool::Text),
            "1" => Ok(SelectionTool::Hand),
            other => Err(invalid("selection_tool", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMode {
    /// One page at a time
    Page,
    #[default]
    Vertical,
    Horizontal,
    Wrapped,
}

impl ScrollMode {
    pub fn as_param(self) -> &'static str {
        match self {
            ScrollMode::Page => "-1",
            ScrollMode::Vertical => "0",
            ScrollMode::Horizontal => "1",
            ScrollMode::Wrapped => "2",
        }
    }

    pub fn from_param(value: &str) -> Result<Self> {
        match value {
            "-1" => Ok(ScrollMode::Page),
            "0" => Ok(ScrollMode::Vertical),
            "1" => Ok(ScrollMode::Horizontal),
            "2" => Ok(ScrollMode::Wrapped),
            other => Err(invalid("scrolling", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadMode {
    /// Leave the viewer's own preference in place
    #[default]
    Unknown,
    NoSpreads,
    Odd,
    Even,
}

impl SpreadMode {
    pub fn as_param(self) -> &'static str {
        match self {
            SpreadMode::Unknown => "-1",
            SpreadMode::NoSpreads => "0",
            SpreadMode::Odd => "1",
            SpreadMode::Even => "2",
        }
    }

    pub fn from_param(value: &str) -> Result<Self> {
        match value {
            "-1" => Ok(SpreadMode::Unknown),
            "0" => Ok(SpreadMode::NoSpreads),
            "1" => Ok(SpreadMode::Odd),
            "2" => Ok(SpreadMode::Even),
            other => Err(invalid("spreads", other)),
        }
    }
}

/// Zoom percentage; always finite and above zero
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ZoomPercent(f64);

impl ZoomPercent {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ZoomPercent {
    type Error = crate::error::PdfError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value).ok_or_else(|| invalid("pdf_zoom", &value.to_string()))
    }
}

impl From<ZoomPercent> for f64 {
    fn from(percent: ZoomPercent) -> f64 {
        percent.0
    }
}

/// Initial zoom
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zoom {
    #[default]
    Auto,
    PageActual,
    PageFit,
    PageWidth,
    /// Preset or custom percentage
    Percent(ZoomPercent),
    /// Custom zoom picked with no value; the viewer falls back to its own
    Blank,
}

impl Zoom {
    /// Percentage zoom, `None` unless `value` is finite and positive
    pub fn percent(value: f64) -> Option<Self> {
        ZoomPercent::new(value).map(Zoom::Percent)
    }

    pub fn as_param(self) -> String {
        match self {
            Zoom::Auto => "auto".to_string(),
            Zoom::PageActual => "page-actual".to_string(),
            Zoom::PageFit => "page-fit".to_string(),
            Zoom::PageWidth => "page-width".to_string(),
            Zoom::Percent(percent) => percent.value().to_string(),
            Zoom::Blank => String::new(),
        }
    }

    pub fn from_param(value: &str) -> Result<Self> {
        match value {
            "" => Ok(Zoom::Blank),
            "auto" => Ok(Zoom::Auto),
            "page-actual" => Ok(Zoom::PageActual),
            "page-fit" => Ok(Zoom::PageFit),
            "page-width" => Ok(Zoom::PageWidth),
            other => parse_percent(other)
                .map(Zoom::Percent)
                .ok_or_else(|| invalid("pdf_zoom", other)),
        }
    }

    /// Resolve the zoom select plus its dependent custom value.
    ///
    /// `custom` takes the custom number (blank when unset or not a number);
    /// anything unrecognised falls back to `auto`.
    pub fn from_setting(zoom: &str, custom_value: Option<&str>) -> Self {
        if zoom == "custom" {
            return custom_value
                .and_then(|v| parse_percent(v.trim()))
                .map(Zoom::Percent)
                .unwrap_or(Zoom::Blank);
        }
        Zoom::from_param(zoom)
            .ok()
            .filter(|z| *z != Zoom::Blank)
            .unwrap_or_default()
    }
}

fn parse_percent(value: &str) -> Option<ZoomPercent> {
    value.parse::<f64>().ok().and_then(ZoomPercent::new)
}

/// Full viewer configuration.
///
/// Tool flags only hide or show buttons; they are not access control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfViewerOptions {
    pub theme: ThemeMode,
    pub toolbar: bool,
    pub position: ToolbarPosition,
    pub presentation: bool,
    pub lazy_load: bool,
    /// Print and download buttons
    pub download: bool,
    pub copy_text: bool,
    pub add_text: bool,
    pub draw: bool,
    pub rotation: bool,
    pub image: bool,
    /// Document properties dialog
    pub details: bool,
    pub selection_tool: SelectionTool,
    pub scrolling: ScrollMode,
    pub spreads: SpreadMode,
    pub zoom: Zoom,
}

impl Default for PdfViewerOptions {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Default,
            toolbar: true,
            position: ToolbarPosition::Top,
            presentation: true,
            lazy_load: false,
            download: true,
            copy_text: true,
            add_text: true,
            draw: true,
            rotation: true,
            image: true,
            details: true,
            selection_tool: SelectionTool::Text,
            scrolling: ScrollMode::Vertical,
            spreads: SpreadMode::Unknown,
            zoom: Zoom::Auto,
        }
    }
}
