//! Resolver input and output types

use serde::{Deserialize, Serialize};

/// A URL to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedRequest {
    pub raw_url: String,
}

impl EmbedRequest {
    pub fn new(raw_url: impl Into<String>) -> Self {
        Self {
            raw_url: raw_url.into(),
        }
    }
}

/// Outcome of resolving a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EmbedResult {
    /// Provider embed URL, use as the iframe `src`
    RedirectUrl(String),
    /// Ready-made HTML (oEmbed fragment or a notice)
    InlineMarkup(String),
    /// No provider applied; the input, verbatim
    Unchanged(String),
}

impl EmbedResult {
    /// The carried string, whatever the variant
    pub fn as_str(&self) -> &str {
        match self {
            EmbedResult::RedirectUrl(s) | EmbedResult::InlineMarkup(s) | EmbedResult::Unchanged(s) => s,
        }
    }

    pub fn into_inner(self) -> String {
        match self {
            EmbedResult::RedirectUrl(s) | EmbedResult::InlineMarkup(s) | EmbedResult::Unchanged(s) => s,
        }
    }

    /// URL to put in an iframe, if this result is one
    pub fn iframe_src(&self) -> Option<&str> {
        match self {
            EmbedResult::RedirectUrl(s) | EmbedResult::Unchanged(s) => Some(s),
            EmbedResult::InlineMarkup(_) => None,
        }
    }

    /// Variant name as serialized
    pub fn kind(&self) -> &'static str {
        match self {
            EmbedResult::RedirectUrl(_) => "redirect_url",
            EmbedResult::InlineMarkup(_) => "inline_markup",
            EmbedResult::Unchanged(_) => "unchanged",
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, EmbedResult::InlineMarkup(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iframe_src() {
        let redirect = EmbedResult::RedirectUrl("https://a".to_string());
        let markup = EmbedResult::InlineMarkup("<p>x</p>".to_string());
        assert_eq!(redirect.iframe_src(), Some("https://a"));
        assert_eq!(markup.iframe_src(), None);
        assert!(markup.is_markup());
        assert_eq!(markup.into_inner(), "<p>x</p>");
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_string(&EmbedResult::Unchanged("u".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"unchanged","value":"u"}"#);
    }
}
