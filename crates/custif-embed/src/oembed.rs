//! oEmbed lookups
//!
//! Only X / Twitter posts go through oEmbed. The lookup is one synchronous
//! GET with a timeout and no retry; every failure becomes a notice.

use crate::html::{notice_html, Messages};
use crate::http::HttpError;
use crate::result::EmbedResult;
use serde::{Deserialize, Serialize};

#[cfg(feature = "native")]
use crate::http::HttpClient;
#[cfg(feature = "native")]
use std::time::Duration;

/// oEmbed transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OEmbedConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for OEmbedConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://publish.twitter.com/oembed".to_string(),
            timeout_secs: 10,
            user_agent: "custif/1.0".to_string(),
        }
    }
}

/// The parts of an oEmbed document we read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OEmbedResponse {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Fetches the raw oEmbed document for a resource URL
pub trait OEmbedFetcher: Send + Sync {
    fn fetch(&self, resource_url: &str) -> Result<String, HttpError>;
}

impl<F> OEmbedFetcher for F
where
    F: Fn(&str) -> Result<String, HttpError> + Send + Sync,
{
    fn fetch(&self, resource_url: &str) -> Result<String, HttpError> {
        self(resource_url)
    }
}

/// Fetcher for hosts without network access; every lookup fails
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledFetcher;

impl OEmbedFetcher for DisabledFetcher {
    fn fetch(&self, _resource_url: &str) -> Result<String, HttpError> {
        Err(HttpError::RequestFailed {
            message: "network access disabled".to_string(),
        })
    }
}

/// HTTP backed fetcher
#[cfg(feature = "native")]
pub struct OEmbedClient {
    http: HttpClient,
    endpoint: String,
}

#[cfg(feature = "native")]
impl OEmbedClient {
    pub fn new(config: &OEmbedConfig) -> Result<Self, HttpError> {
        let http = HttpClient::new(
            &config.user_agent,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[cfg(feature = "native")]
impl OEmbedFetcher for OEmbedClient {
    fn fetch(&self, resource_url: &str) -> Result<String, HttpError> {
        self.http
            .get_text(&self.endpoint, &[("url", resource_url)])
    }
}

/// Look up `resource_url` and turn the answer into inline markup
pub fn embed_markup(
    fetcher: &dyn OEmbedFetcher,
    resource_url: &str,
    messages: &Messages,
) -> EmbedResult {
    let body = match fetcher.fetch(resource_url) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(url = resource_url, error = %e, "oEmbed fetch failed");
            return EmbedResult::InlineMarkup(notice_html(&messages.fetch_error));
        }
    };

    match serde_json::from_str::<OEmbedResponse>(&body) {
        Ok(OEmbedResponse {
            html: Some(html), ..
        }) if !html.is_empty() => EmbedResult::InlineMarkup(html),
        Ok(_) => {
            tracing::warn!(url = resource_url, "oEmbed response has no html");
            EmbedResult::InlineMarkup(notice_html(&messages.invalid_response))
        }
        Err(e) => {
            tracing::warn!(url = resource_url, error = %e, "oEmbed response is not JSON");
            EmbedResult::InlineMarkup(notice_html(&messages.invalid_response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(body: &'static str) -> impl OEmbedFetcher {
        move |_: &str| -> Result<String, HttpError> { Ok(body.to_string()) }
    }

    #[test]
    fn test_html_is_returned() {
        let fetcher = answer(r#"{"html":"<blockquote>hi</blockquote>","type":"rich"}"#);
        let result = embed_markup(&fetcher, "https://twitter.com/a/status/1", &Messages::default());
        assert_eq!(
            result,
            EmbedResult::InlineMarkup("<blockquote>hi</blockquote>".to_string())
        );
    }

    #[test]
    fn test_missing_html_is_invalid_response() {
        let fetcher = answer(r#"{"type":"rich"}"#);
        let result = embed_markup(&fetcher, "u", &Messages::default());
        assert!(result.as_str().contains("Invalid response."));
    }

    #[test]
    fn test_malformed_json_is_invalid_response() {
        let fetcher = answer("<html>oops</html>");
        let result = embed_markup(&fetcher, "u", &Messages::default());
        assert!(result.as_str().contains("Invalid response."));
    }

    #[test]
    fn test_transport_error_is_fetch_error() {
        let result = embed_markup(&DisabledFetcher, "u", &Messages::default());
        assert_eq!(
            result,
            EmbedResult::InlineMarkup(notice_html("Error fetching tweet. Please try again."))
        );
    }

    #[test]
    fn test_config_defaults() {
        let config: OEmbedConfig = serde_json::from_str(r#"{"timeout_secs":3}"#).unwrap();
        assert_eq!(config.endpoint, "https://publish.twitter.com/oembed");
        assert_eq!(config.timeout_secs, 3);
    }
}
