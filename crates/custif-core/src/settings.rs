//! Per-instance embed settings
//!
//! Two editors feed the renderer. The page builder sends a flat snake_case
//! map with `yes`/`no` toggles, `{url}` objects and `{size, unit}` sliders;
//! the block editor sends camelCase attributes with real booleans. Both end
//! up as one [`EmbedSettings`] record. Unknown keys are ignored and values
//! of the wrong shape count as missing.

use crate::error::SettingsError;
use custif_pdf::{
    PdfViewerOptions, ScrollMode, SelectionTool, SpreadMode, ThemeMode, ToolbarPosition, Zoom,
    DEFAULT_CUSTOM_COLOR,
};
use custif_style::BreakpointValues;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Read strings and numbers alike; anything else is missing
mod lenient {
    use super::*;

    pub fn text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(text(&value))
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_string(deserializer)?.unwrap_or_default())
    }
}

// === Enumerated settings ===

/// What the instance embeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Source {
    /// Any web page, run through the embed resolver
    #[default]
    #[serde(rename = "default")]
    Default,
    /// A PDF shown in the bundled viewer
    #[serde(rename = "Pdf")]
    Pdf,
}

impl Source {
    /// `Pdf` selects the viewer; anything else, including empty, is a page
    pub fn from_setting(value: &str) -> Self {
        match value {
            "Pdf" => Source::Pdf,
            _ => Source::Default,
        }
    }
}

/// Where a PDF comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfSourceType {
    /// Media library upload
    #[default]
    File,
    /// External link
    Url,
}

impl PdfSourceType {
    pub fn from_setting(value: &str) -> Self {
        match value {
            "url" => PdfSourceType::Url,
            _ => PdfSourceType::File,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }

    /// `(margin-left, margin-right)`
    pub fn margins(self) -> (&'static str, &'static str) {
        match self {
            Alignment::Left => ("0", "auto"),
            Alignment::Center => ("auto", "auto"),
            Alignment::Right => ("auto", "0"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    #[default]
    Solid,
    Image,
}

impl BackgroundStyle {
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "solid" => Some(BackgroundStyle::Solid),
            "image" => Some(BackgroundStyle::Image),
            _ => None,
        }
    }
}

// === Block editor layout ===

/// Four CSS lengths, one per side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSides {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub top: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub right: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub bottom: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub left: Option<String>,
}

impl BoxSides {
    pub fn side(&self, side: &str) -> Option<&str> {
        match side {
            "top" => self.top.as_deref(),
            "right" => self.right.as_deref(),
            "bottom" => self.bottom.as_deref(),
            "left" => self.left.as_deref(),
            _ => None,
        }
    }
}

/// Color, style and width of one border (or of all four)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSide {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub style: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadiusCorners {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub top_left: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub top_right: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub bottom_left: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub bottom_right: Option<String>,
}

/// Either one radius for every corner or one per corner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Uniform(String),
    Corners(RadiusCorners),
}

/// Border control value: flat (all sides) or split per side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    #[serde(flatten)]
    pub all: BorderSide,
    pub top: Option<BorderSide>,
    pub right: Option<BorderSide>,
    pub bottom: Option<BorderSide>,
    pub left: Option<BorderSide>,
    pub radius: Option<BorderRadius>,
}

impl BorderConfig {
    /// Per-side values in `top, right, bottom, left` order
    pub fn sides(&self) -> Vec<(&'static str, &BorderSide)> {
        [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ]
        .into_iter()
        .filter_map(|(name, side)| side.as_ref().map(|s| (name, s)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == BorderConfig::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowConfig {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub h_offset: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub v_offset: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub blur: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub spread: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub color: Option<String>,
    pub inset: Option<bool>,
}

impl ShadowConfig {
    pub fn is_empty(&self) -> bool {
        *self == ShadowConfig::default()
    }

    /// `box-shadow` value, missing parts default to zero offsets and black
    pub fn to_css(&self) -> String {
        let inset = if self.inset.unwrap_or(false) { "inset" } else { "" };
        let value = format!(
            "{} {} {} {} {} {}",
            inset,
            self.h_offset.as_deref().unwrap_or("0px"),
            self.v_offset.as_deref().unwrap_or("0px"),
            self.blur.as_deref().unwrap_or("0px"),
            self.spread.as_deref().unwrap_or("0px"),
            self.color.as_deref().unwrap_or("#000000"),
        );
        value.trim().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    pub style: Option<BackgroundStyle>,
    pub color: String,
    pub gradient: String,
    pub image_url: String,
}

/// Styling only the block editor emits as an inline stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockLayout {
    pub height: BreakpointValues,
    pub width: BreakpointValues,
    pub padding: BoxSides,
    pub padding_tablet: BoxSides,
    pub padding_mobile: BoxSides,
    pub align: Option<Alignment>,
    pub background: Background,
    pub border: Option<BorderConfig>,
    pub shadow: Option<ShadowConfig>,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            height: responsive("500px", None, None),
            width: responsive("500px", None, None),
            padding: BoxSides::default(),
            padding_tablet: BoxSides::default(),
            padding_mobile: BoxSides::default(),
            align: None,
            background: Background::default(),
            border: None,
            shadow: None,
        }
    }
}

/// Tablet and mobile fall back to the desktop value
fn responsive(desktop: &str, tablet: Option<String>, mobile: Option<String>) -> BreakpointValues {
    BreakpointValues {
        desktop: Some(desktop.to_string()),
        tablet: Some(tablet.unwrap_or_else(|| desktop.to_string())),
        mobile: Some(mobile.unwrap_or_else(|| desktop.to_string())),
    }
}

// === Settings record ===

/// PDF source and viewer options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    pub source_type: PdfSourceType,
    pub file_url: String,
    pub link_url: String,
    pub viewer: PdfViewerOptions,
    /// Iframe height such as `500px`; the renderer falls back to `600px`
    pub height: Option<String>,
}

impl PdfSettings {
    /// PDF location for the selected source type, if one is set
    pub fn location(&self) -> Option<&str> {
        let location = match self.source_type {
            PdfSourceType::File => self.file_url.trim(),
            PdfSourceType::Url => self.link_url.trim(),
        };
        (!location.is_empty()).then_some(location)
    }
}

/// Validated settings for one embed instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    /// Wrapper id override; sanitized to `[A-Za-z0-9_-]`
    pub custom_id: String,
    pub source: Source,
    pub iframe_url: String,
    pub auto_height: bool,
    pub show_scrollbars: bool,
    /// Seconds between reloads, `0` disables; passed through verbatim
    pub refresh_interval: String,
    pub lazy_load: bool,
    pub placeholder_image: String,
    pub pdf: PdfSettings,
    /// Present for block editor instances only
    pub layout: Option<BlockLayout>,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            custom_id: String::new(),
            source: Source::Default,
            iframe_url: String::new(),
            auto_height: false,
            show_scrollbars: false,
            refresh_interval: "0".to_string(),
            lazy_load: false,
            placeholder_image: String::new(),
            pdf: PdfSettings::default(),
            layout: None,
        }
    }
}

/// Keep only characters that are safe in an id attribute and a CSS selector
pub fn sanitize_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Typed view over the flat page builder map
struct FlatMap<'a>(&'a Map<String, Value>);

impl<'a> FlatMap<'a> {
    fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(lenient::text)
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// `yes` is on, any other present value is off
    fn toggle(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::String(s) => Some(s == "yes"),
            Value::Bool(b) => Some(*b),
            Value::Null => None,
            _ => Some(false),
        }
    }

    fn toggle_or(&self, key: &str, default: bool) -> bool {
        self.toggle(key).unwrap_or(default)
    }

    /// Link and media controls send `{url: ...}`; plain strings are accepted
    fn url(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::Object(obj)) => obj.get("url").and_then(lenient::text).unwrap_or_default(),
            Some(other) => lenient::text(other).unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Slider `{size, unit}` as a CSS length; empty size is missing
    fn slider(&self, key: &str) -> Option<String> {
        let obj = self.0.get(key)?.as_object()?;
        let size = obj.get("size").and_then(lenient::text)?;
        if size.is_empty() {
            return None;
        }
        let unit = obj.get("unit").and_then(lenient::text).unwrap_or_default();
        Some(format!("{}{}", size, unit))
    }

    fn parsed<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.0.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!(key, error = %e, "ignoring malformed setting");
                None
            }
        }
    }

    /// Select-style setting parsed with a fallback for unknown values
    fn choice<T>(&self, key: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> T {
        match self.text(key) {
            Some(raw) => parse(&raw).unwrap_or_else(|| {
                tracing::debug!(key, value = %raw, "unknown setting value, using default");
                default
            }),
            None => default,
        }
    }
}

fn theme_from(mode: &str, color: Option<String>) -> Option<ThemeMode> {
    match ThemeMode::from_param(mode).ok()? {
        ThemeMode::Custom { .. } => Some(ThemeMode::Custom {
            color: color.unwrap_or_else(|| DEFAULT_CUSTOM_COLOR.to_string()),
        }),
        other => Some(other),
    }
}

impl EmbedSettings {
    /// Read the flat page builder map.
    ///
    /// Missing toggles take the renderer defaults: scrollbars off, auto
    /// height off, every PDF tool shown, PDF lazy loading off.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let m = FlatMap(map);

        let viewer = Self::viewer_from_map(&m);
        let pdf = PdfSettings {
            source_type: PdfSourceType::from_setting(&m.text_or("pdf_type", "file")),
            file_url: m.url("pdf_Uploader"),
            link_url: m.url("pdf_file_link"),
            viewer,
            height: m.slider("iframe_height"),
        };

        let layout = m
            .toggle_or("is_gutenberg", false)
            .then(|| Self::layout_from_map(&m));

        Self {
            custom_id: sanitize_id(&m.text_or("custif_custom_id", "")),
            source: Source::from_setting(&m.text_or("source", "default")),
            iframe_url: m.url("iframe_url"),
            auto_height: m.toggle_or("auto_height", false),
            show_scrollbars: m.toggle_or("show_scrollbars", false),
            refresh_interval: m.text_or("refresh_interval", "0"),
            lazy_load: m.toggle_or("enable_lazy_load", false),
            placeholder_image: m.url("placeholder_image"),
            pdf,
            layout,
        }
    }

    /// Parse a JSON object in the page builder shape
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self::from_map(&map)),
            _ => Err(SettingsError::NotAnObject),
        }
    }

    /// Viewer options for a PDF instance
    pub fn pdf_options(&self) -> PdfViewerOptions {
        self.pdf.viewer.clone()
    }

    fn viewer_from_map(m: &FlatMap<'_>) -> PdfViewerOptions {
        let defaults = PdfViewerOptions::default();

        let theme = theme_from(
            &m.text_or("pdf_theme_mode", "default"),
            m.text("pdf_custom_color"),
        )
        .unwrap_or_default();
        let zoom = Zoom::from_setting(
            &m.text_or("pdf_zoom", "auto"),
            m.text("pdf_zoom_custom").as_deref(),
        );

        PdfViewerOptions {
            theme,
            toolbar: m.toggle_or("pdf_toolbar", defaults.toolbar),
            position: m.choice("pdf_toolbar_position", defaults.position, |v| {
                ToolbarPosition::from_param(v).ok()
            }),
            presentation: m.toggle_or("pdf_presentation_mode", defaults.presentation),
            lazy_load: m.toggle_or("pdf_lazyload", defaults.lazy_load),
            download: m.toggle_or("pdf_print_download", defaults.download),
            copy_text: m.toggle_or("pdf_text_copy", defaults.copy_text),
            add_text: m.toggle_or("pdf_add_text", defaults.add_text),
            draw: m.toggle_or("pdf_draw", defaults.draw),
            rotation: m.toggle_or("pdf_rotate_access", defaults.rotation),
            image: m.toggle_or("pdf_add_image", defaults.image),
            details: m.toggle_or("pdf_details", defaults.details),
            selection_tool: m.choice("selection_tool", defaults.selection_tool, |v| {
                SelectionTool::from_param(v).ok()
            }),
            scrolling: m.choice("scrolling", defaults.scrolling, |v| {
                ScrollMode::from_param(v).ok()
            }),
            spreads: m.choice("spreads", defaults.spreads, |v| SpreadMode::from_param(v).ok()),
            zoom,
        }
    }

    fn layout_from_map(m: &FlatMap<'_>) -> BlockLayout {
        let height = m.text_or("height", "500px");
        let width = m.text_or("iframe_width", "500px");

        BlockLayout {
            height: responsive(&height, m.text("height_tablet"), m.text("height_mobile")),
            width: responsive(
                &width,
                m.text("iframe_width_tablet"),
                m.text("iframe_width_mobile"),
            ),
            padding: m.parsed("padding").unwrap_or_default(),
            padding_tablet: m.parsed("padding_tablet").unwrap_or_default(),
            padding_mobile: m.parsed("padding_mobile").unwrap_or_default(),
            align: m.text("align").as_deref().and_then(Alignment::from_setting),
            background: Background {
                style: m
                    .text("background_style")
                    .as_deref()
                    .and_then(BackgroundStyle::from_setting),
                color: m.text_or("color_value", ""),
                gradient: m.text_or("gradient_value", ""),
                image_url: m.text_or("background_image_url", ""),
            },
            border: m.parsed::<BorderConfig>("border").filter(|b| !b.is_empty()),
            shadow: m.parsed::<ShadowConfig>("shadow").filter(|s| !s.is_empty()),
        }
    }
}

// === Block editor attributes ===

fn default_source() -> String {
    "default".to_string()
}

fn default_iframe_url() -> String {
    "https://example.com".to_string()
}

/// Block editor attributes as saved in post content.
///
/// A missing PDF tool toggle (`pdfToolbar`, `pdfDraw`, ...) counts as shown,
/// the viewer's own default, rather than hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockAttributes {
    #[serde(deserialize_with = "lenient::string")]
    pub custom_id: String,
    pub source: String,
    pub iframe_url: String,
    pub align: String,
    #[serde(deserialize_with = "lenient::string")]
    pub iframe_height: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub iframe_height_tablet: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub iframe_height_mobile: Option<String>,
    pub padding: BoxSides,
    pub padding_tablet: BoxSides,
    pub padding_mobile: BoxSides,
    #[serde(deserialize_with = "lenient::string")]
    pub iframe_width: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub iframe_width_tablet: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub iframe_width_mobile: Option<String>,
    pub color_value: String,
    pub gradient_value: String,
    pub background_style: String,
    pub background_image_url: String,
    pub border: Option<BorderConfig>,
    pub shadow: Option<ShadowConfig>,
    pub auto_height: bool,
    pub show_scrollbar: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub refresh_interval: String,
    pub lazy_load: bool,
    pub lazy_load_image_url: String,
    pub pdf_source_type: String,
    pub pdf_file_url: String,
    pub pdf_url: String,
    pub pdf_lazy_load: bool,
    pub theme: String,
    pub theme_color: String,
    #[serde(deserialize_with = "lenient::string")]
    pub zoom: String,
    #[serde(deserialize_with = "lenient::string")]
    pub default_selection_tool: String,
    #[serde(deserialize_with = "lenient::string")]
    pub default_spreads: String,
    #[serde(deserialize_with = "lenient::string")]
    pub default_scrolling: String,
    pub pdf_toolbar: bool,
    pub pdf_toolbar_position: String,
    pub pdf_print_download: bool,
    pub pdf_presentation_mode: bool,
    pub pdf_text_copy: bool,
    pub pdf_add_text: bool,
    pub pdf_draw: bool,
    pub pdf_add_image: bool,
    pub pdf_rotate_access: bool,
    pub pdf_details: bool,
}

impl Default for BlockAttributes {
    fn default() -> Self {
        Self {
            custom_id: String::new(),
            source: default_source(),
            iframe_url: default_iframe_url(),
            align: String::new(),
            iframe_height: "500px".to_string(),
            iframe_height_tablet: Some("400px".to_string()),
            iframe_height_mobile: Some("300px".to_string()),
            padding: BoxSides::default(),
            padding_tablet: BoxSides::default(),
            padding_mobile: BoxSides::default(),
            iframe_width: "100%".to_string(),
            iframe_width_tablet: Some("100%".to_string()),
            iframe_width_mobile: Some("100%".to_string()),
            color_value: String::new(),
            gradient_value: String::new(),
            background_style: "solid".to_string(),
            background_image_url: String::new(),
            border: None,
            shadow: None,
            auto_height: false,
            show_scrollbar: false,
            refresh_interval: "0".to_string(),
            lazy_load: false,
            lazy_load_image_url: String::new(),
            pdf_source_type: "file".to_string(),
            pdf_file_url: String::new(),
            pdf_url: String::new(),
            pdf_lazy_load: false,
            theme: "default".to_string(),
            theme_color: String::new(),
            zoom: "auto".to_string(),
            default_selection_tool: "0".to_string(),
            default_spreads: "0".to_string(),
            default_scrolling: "0".to_string(),
            pdf_toolbar: true,
            pdf_toolbar_position: "top".to_string(),
            pdf_print_download: true,
            pdf_presentation_mode: true,
            pdf_text_copy: true,
            pdf_add_text: true,
            pdf_draw: true,
            pdf_add_image: true,
            pdf_rotate_access: true,
            pdf_details: true,
        }
    }
}

impl BlockAttributes {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    fn viewer_options(&self) -> PdfViewerOptions {
        let defaults = PdfViewerOptions::default();
        let color = (!self.theme_color.is_empty()).then(|| self.theme_color.clone());

        PdfViewerOptions {
            theme: theme_from(&self.theme, color).unwrap_or_default(),
            toolbar: self.pdf_toolbar,
            position: ToolbarPosition::from_param(&self.pdf_toolbar_position)
                .unwrap_or(defaults.position),
            presentation: self.pdf_presentation_mode,
            lazy_load: self.pdf_lazy_load,
            download: self.pdf_print_download,
            copy_text: self.pdf_text_copy,
            add_text: self.pdf_add_text,
            draw: self.pdf_draw,
            rotation: self.pdf_rotate_access,
            image: self.pdf_add_image,
            details: self.pdf_details,
            selection_tool: SelectionTool::from_param(&self.default_selection_tool)
                .unwrap_or(defaults.selection_tool),
            scrolling: ScrollMode::from_param(&self.default_scrolling)
                .unwrap_or(defaults.scrolling),
            spreads: SpreadMode::from_param(&self.default_spreads).unwrap_or(defaults.spreads),
            zoom: Zoom::from_setting(&self.zoom, None),
        }
    }
}

impl From<BlockAttributes> for EmbedSettings {
    fn from(attrs: BlockAttributes) -> Self {
        let viewer = attrs.viewer_options();

        let layout = BlockLayout {
            height: responsive(
                &attrs.iframe_height,
                attrs.iframe_height_tablet.clone(),
                attrs.iframe_height_mobile.clone(),
            ),
            width: responsive(
                &attrs.iframe_width,
                attrs.iframe_width_tablet.clone(),
                attrs.iframe_width_mobile.clone(),
            ),
            padding: attrs.padding,
            padding_tablet: attrs.padding_tablet,
            padding_mobile: attrs.padding_mobile,
            align: Alignment::from_setting(&attrs.align),
            background: Background {
                style: BackgroundStyle::from_setting(&attrs.background_style),
                color: attrs.color_value,
                gradient: attrs.gradient_value,
                image_url: attrs.background_image_url,
            },
            border: attrs.border.filter(|b| !b.is_empty()),
            shadow: attrs.shadow.filter(|s| !s.is_empty()),
        };

        let placeholder_image = if attrs.lazy_load {
            attrs.lazy_load_image_url
        } else {
            String::new()
        };

        EmbedSettings {
            custom_id: sanitize_id(&attrs.custom_id),
            source: Source::from_setting(&attrs.source),
            iframe_url: attrs.iframe_url,
            auto_height: attrs.auto_height,
            show_scrollbars: attrs.show_scrollbar,
            refresh_interval: attrs.refresh_interval,
            lazy_load: attrs.lazy_load,
            placeholder_image,
            pdf: PdfSettings {
                source_type: PdfSourceType::from_setting(&attrs.pdf_source_type),
                file_url: attrs.pdf_file_url,
                link_url: attrs.pdf_url,
                viewer,
                height: None,
            },
            layout: Some(layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_empty_map_defaults() {
        let settings = EmbedSettings::from_map(&Map::new());
        assert_eq!(settings, EmbedSettings::default());
        assert_eq!(settings.pdf_options(), PdfViewerOptions::default());
    }

    #[test]
    fn test_page_builder_shapes() {
        let settings = EmbedSettings::from_map(&map(json!({
            "source": "Pdf",
            "iframe_url": {"url": "https://example.com", "is_external": ""},
            "pdf_type": "url",
            "pdf_file_link": {"url": "https://x.com/f.pdf"},
            "iframe_height": {"unit": "vh", "size": 80},
            "show_scrollbars": "yes",
            "pdf_toolbar": "",
            "pdf_zoom": "custom",
            "pdf_zoom_custom": "125",
            "pdf_theme_mode": "custom",
            "spreads": "2",
            "refresh_interval": 30,
            "unrelated_key": [1, 2, 3]
        })));

        assert_eq!(settings.source, Source::Pdf);
        assert_eq!(settings.iframe_url, "https://example.com");
        assert_eq!(settings.pdf.location(), Some("https://x.com/f.pdf"));
        assert_eq!(settings.pdf.height.as_deref(), Some("80vh"));
        assert!(settings.show_scrollbars);
        assert_eq!(settings.refresh_interval, "30");

        let options = settings.pdf_options();
        assert!(!options.toolbar);
        assert!(options.download);
        assert_eq!(options.zoom, Zoom::percent(125.0).unwrap());
        assert_eq!(
            options.theme,
            ThemeMode::Custom {
                color: "#38383d".to_string()
            }
        );
        assert_eq!(options.spreads, SpreadMode::Even);
    }

    #[test]
    fn test_unknown_select_values_fall_back() {
        let settings = EmbedSettings::from_map(&map(json!({
            "scrolling": "sideways",
            "pdf_toolbar_position": "left",
            "pdf_theme_mode": "neon",
            "pdf_zoom": "huge"
        })));
        assert_eq!(settings.pdf_options(), PdfViewerOptions::default());
    }

    #[test]
    fn test_pdf_location_follows_type() {
        let settings = EmbedSettings::from_map(&map(json!({
            "pdf_type": "file",
            "pdf_Uploader": {"id": 7, "url": ""},
            "pdf_file_link": {"url": "https://x.com/f.pdf"}
        })));
        assert_eq!(settings.pdf.location(), None);
    }

    #[test]
    fn test_gutenberg_map_layout() {
        let settings = EmbedSettings::from_map(&map(json!({
            "is_gutenberg": true,
            "height": "600",
            "height_mobile": "300",
            "padding": {"top": "10px", "left": 4},
            "align": "center",
            "border": {"color": "#000", "style": "solid", "width": "1px", "radius": "4px"},
            "shadow": []
        })));

        let layout = settings.layout.unwrap();
        assert_eq!(layout.height.tablet.as_deref(), Some("600"));
        assert_eq!(layout.height.mobile.as_deref(), Some("300"));
        assert_eq!(layout.width.desktop.as_deref(), Some("500px"));
        assert_eq!(layout.padding.left.as_deref(), Some("4"));
        assert_eq!(layout.align, Some(Alignment::Center));
        let border = layout.border.unwrap();
        assert_eq!(border.all.style.as_deref(), Some("solid"));
        assert_eq!(border.radius, Some(BorderRadius::Uniform("4px".to_string())));
        assert_eq!(layout.shadow, None);
    }

    #[test]
    fn test_from_json_str_rejects_non_objects() {
        assert!(matches!(
            EmbedSettings::from_json_str("[1]"),
            Err(SettingsError::NotAnObject)
        ));
        assert!(matches!(
            EmbedSettings::from_json_str("{"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id(" my-frame_1 "), "my-frame_1");
        assert_eq!(sanitize_id("a\"><script>"), "ascript");
    }

    #[test]
    fn test_block_attributes_defaults() {
        let settings: EmbedSettings = BlockAttributes::from_json_str("{}").unwrap().into();
        assert_eq!(settings.iframe_url, "https://example.com");
        assert_eq!(settings.pdf.viewer.spreads, SpreadMode::NoSpreads);
        assert!(settings.pdf.viewer.toolbar);
        assert!(settings.pdf.viewer.draw);
        assert!(settings.pdf.viewer.download);
        assert!(!settings.pdf.viewer.lazy_load);

        let layout = settings.layout.unwrap();
        assert_eq!(layout.height.tablet.as_deref(), Some("400px"));
        assert_eq!(layout.width.mobile.as_deref(), Some("100%"));
        assert_eq!(layout.background.style, Some(BackgroundStyle::Solid));
    }

    #[test]
    fn test_block_attributes_mapping() {
        let attrs = BlockAttributes::from_json_str(
            r##"{
                "customId": "hero",
                "source": "Pdf",
                "pdfSourceType": "url",
                "pdfUrl": "https://x.com/f.pdf",
                "theme": "custom",
                "themeColor": "#112233",
                "zoom": "page-fit",
                "defaultScrolling": 2,
                "pdfDraw": false,
                "lazyLoad": false,
                "lazyLoadImageUrl": "https://x.com/p.png",
                "border": {"top": {"color": "red", "width": "2px"}},
                "shadow": {"hOffset": "2px", "inset": true}
            }"##,
        )
        .unwrap();
        let settings = EmbedSettings::from(attrs);

        assert_eq!(settings.custom_id, "hero");
        assert_eq!(settings.pdf.location(), Some("https://x.com/f.pdf"));
        assert_eq!(settings.placeholder_image, "");
        let options = settings.pdf_options();
        assert_eq!(
            options.theme,
            ThemeMode::Custom {
                color: "#112233".to_string()
            }
        );
        assert_eq!(options.zoom, Zoom::PageFit);
        assert_eq!(options.scrolling, ScrollMode::Wrapped);
        assert!(!options.draw);

        let layout = settings.layout.unwrap();
        assert_eq!(layout.border.unwrap().sides().len(), 1);
        assert_eq!(
            layout.shadow.unwrap().to_css(),
            "inset 2px 0px 0px 0px #000000"
        );
    }
}
