//! Viewer URL composition

use crate::error::{PdfError, Result};
use crate::key::encode_key;
use crate::options::PdfViewerOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

/// Viewer document path relative to the plugin root
pub const DEFAULT_VIEWER_PATH: &str = "assets/pdfjs/web/viewer.html";

/// Parts of a viewer URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedViewerUrl {
    /// Viewer document location, used verbatim
    pub base_viewer_path: String,
    /// PDF location, already URL-escaped
    pub file_param: String,
    /// Opaque option token (plain base64, escaped when the URL is built)
    pub key_param: String,
}

impl EncodedViewerUrl {
    /// Full `{base}?file=...&key=...` URL
    pub fn to_url(&self) -> String {
        format!(
            "{}?file={}&key={}",
            self.base_viewer_path,
            self.file_param,
            urlencoding::encode(&self.key_param)
        )
    }

    /// Split a viewer URL back into its parts
    pub fn parse(viewer_url: &str) -> Result<Self> {
        let (base, query) = viewer_url
            .split_once('?')
            .ok_or(PdfError::MissingParam("file"))?;

        let mut file = None;
        let mut key = None;
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                "file" => file = Some(value.into_owned()),
                "key" => key = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(Self {
            base_viewer_path: base.to_string(),
            file_param: urlencoding::encode(&file.ok_or(PdfError::MissingParam("file"))?)
                .into_owned(),
            key_param: key.ok_or(PdfError::MissingParam("key"))?,
        })
    }

    /// Unescaped PDF location
    pub fn file_location(&self) -> String {
        urlencoding::decode(&self.file_param)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| self.file_param.clone())
    }
}

impl fmt::Display for EncodedViewerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Build the viewer URL for a PDF.
///
/// An empty `pdf_location` is the caller's problem: render a "no PDF"
/// notice instead of calling this.
///
/// # Examples
/// ```
/// use custif_pdf::{build_viewer_url, PdfViewerOptions};
/// let url = build_viewer_url("viewer.html", "https://x.com/f.pdf", &PdfViewerOptions::default());
/// assert!(url.to_url().starts_with("viewer.html?file=https%3A%2F%2Fx.com%2Ff.pdf&key="));
/// ```
pub fn build_viewer_url(
    viewer_base: &str,
    pdf_location: &str,
    options: &PdfViewerOptions,
) -> EncodedViewerUrl {
    tracing::debug!(pdf = pdf_location, "building PDF viewer URL");

    EncodedViewerUrl {
        base_viewer_path: viewer_base.to_string(),
        file_param: urlencoding::encode(pdf_location).into_owned(),
        key_param: encode_key(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::decode_key;

    #[test]
    fn test_parse_round_trip() {
        let options = PdfViewerOptions {
            toolbar: false,
            ..Default::default()
        };
        let built = build_viewer_url(DEFAULT_VIEWER_PATH, "https://x.com/a b.pdf", &options);
        let parsed = EncodedViewerUrl::parse(&built.to_url()).unwrap();

        assert_eq!(parsed, built);
        assert_eq!(parsed.file_location(), "https://x.com/a b.pdf");
        assert_eq!(decode_key(&parsed.key_param).unwrap(), options);
    }

    #[test]
    fn test_parse_requires_both_params() {
        assert!(EncodedViewerUrl::parse("viewer.html").is_err());
        assert!(EncodedViewerUrl::parse("viewer.html?file=a.pdf").is_err());
    }
}
