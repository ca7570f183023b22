//! Viewer key token
//!
//! Wire format: `base64(form-urlencoded pairs)` with a fixed key order.
//! Booleans are the literal strings `"true"` / `"false"`; the viewer script
//! compares against `"true"` and nothing else.

use crate::error::Result;
use crate::options::{
    PdfViewerOptions, ScrollMode, SelectionTool, SpreadMode, ThemeMode, ToolbarPosition, Zoom,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use url::form_urlencoded;

fn flag(value: bool) -> String {
    let literal = if value { "true" } else { "false" };
    literal.to_string()
}

/// Ordered key/value pairs carried by the token
pub fn key_pairs(options: &PdfViewerOptions) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("themeMode", options.theme.as_param().to_string()),
        ("toolbar", flag(options.toolbar)),
        ("position", options.position.as_param().to_string()),
        ("presentation", flag(options.presentation)),
        ("lazyLoad", flag(options.lazy_load)),
        ("download", flag(options.download)),
        ("copy_text", flag(options.copy_text)),
        ("add_text", flag(options.add_text)),
        ("draw", flag(options.draw)),
        ("pdf_rotation", flag(options.rotation)),
        ("pdf_image", flag(options.image)),
        ("pdf_details", flag(options.details)),
        ("selection_tool", options.selection_tool.as_param().to_string()),
        ("scrolling", options.scrolling.as_param().to_string()),
        ("spreads", options.spreads.as_param().to_string()),
        ("pdf_zoom", options.zoom.as_param()),
    ];

    if let Some(color) = options.theme.custom_color() {
        pairs.push(("customColor", color.to_string()));
    }

    pairs
}

/// Form-urlencoded query string of the option pairs (before base64)
pub fn key_query(options: &PdfViewerOptions) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(key_pairs(options))
        .finish()
}

/// Encode options into the opaque `key` token
pub fn encode_key(options: &PdfViewerOptions) -> String {
    STANDARD.encode(key_query(options))
}

/// Decode a token into its raw pairs, in wire order
pub fn decode_key_pairs(token: &str) -> Result<Vec<(String, String)>> {
    let bytes = STANDARD.decode(token.trim())?;
    let query = String::from_utf8(bytes)?;
    Ok(form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect())
}

/// Decode a token into options the way the viewer does.
///
/// Absent fields keep their defaults and unknown keys are ignored.
/// `customColor` only applies when the theme is `custom`.
pub fn decode_key(token: &str) -> Result<PdfViewerOptions> {
    let pairs = decode_key_pairs(token)?;
    let mut options = PdfViewerOptions::default();
    let mut custom_color: Option<String> = None;

    for (key, value) in &pairs {
        match key.as_str() {
            "themeMode" => options.theme = ThemeMode::from_param(value)?,
            "customColor" => custom_color = Some(value.clone()),
            "toolbar" => options.toolbar = value == "true",
            "position" => options.position = ToolbarPosition::from_param(value)?,
            "presentation" => options.presentation = value == "true",
            "lazyLoad" => options.lazy_load = value == "true",
            "download" => options.download = value == "true",
            "copy_text" => options.copy_text = value == "true",
            "add_text" => options.add_text = value == "true",
            "draw" => options.draw = value == "true",
            "pdf_rotation" => options.rotation = value == "true",
            "pdf_image" => options.image = value == "true",
            "pdf_details" => options.details = value == "true",
            "selection_tool" => options.selection_tool = SelectionTool::from_param(value)?,
            "scrolling" => options.scrolling = ScrollMode::from_param(value)?,
            "spreads" => options.spreads = SpreadMode::from_param(value)?,
            "pdf_zoom" => options.zoom = Zoom::from_param(value)?,
            _ => {}
        }
    }

    if let (ThemeMode::Custom { color }, Some(custom)) = (&mut options.theme, custom_color) {
        *color = custom;
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_QUERY: &str = "themeMode=default&toolbar=true&position=top&presentation=true\
        &lazyLoad=false&download=true&copy_text=true&add_text=true&draw=true&pdf_rotation=true\
        &pdf_image=true&pdf_details=true&selection_tool=0&scrolling=0&spreads=-1&pdf_zoom=auto";

    #[test]
    fn test_default_query() {
        assert_eq!(key_query(&PdfViewerOptions::default()), DEFAULT_QUERY);
    }

    #[test]
    fn test_custom_color_is_appended_last() {
        let options = PdfViewerOptions {
            theme: ThemeMode::Custom {
                color: "#38383d".to_string(),
            },
            ..Default::default()
        };
        let query = key_query(&options);
        assert!(query.starts_with("themeMode=custom&"));
        assert!(query.ends_with("&pdf_zoom=auto&customColor=%2338383d"));
    }

    #[test]
    fn test_blank_custom_color_is_omitted() {
        let options = PdfViewerOptions {
            theme: ThemeMode::Custom {
                color: String::new(),
            },
            ..Default::default()
        };
        assert!(!key_query(&options).contains("customColor"));
    }

    #[test]
    fn test_decode_default_token() {
        let token = STANDARD.encode(DEFAULT_QUERY);
        assert_eq!(decode_key(&token).unwrap(), PdfViewerOptions::default());
    }

    #[test]
    fn test_decode_missing_fields_use_defaults() {
        let token = STANDARD.encode("toolbar=false&unknown=1");
        let options = decode_key(&token).unwrap();
        assert!(!options.toolbar);
        assert!(options.download);
        assert_eq!(options.zoom, Zoom::Auto);
    }

    #[test]
    fn test_decode_ignores_color_without_custom_theme() {
        let token = STANDARD.encode("themeMode=dark&customColor=%23ff0000");
        assert_eq!(decode_key(&token).unwrap().theme, ThemeMode::Dark);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_key("not base64!").is_err());
        let token = STANDARD.encode("scrolling=7");
        assert!(decode_key(&token).is_err());
    }
}
