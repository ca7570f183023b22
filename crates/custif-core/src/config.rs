//! Renderer configuration
//!
//! Everything the renderer needs from its host besides the per-instance
//! settings: where the PDF viewer lives, how to reach oEmbed, and the
//! notice texts.

use crate::error::{ConfigError, Result};
use custif_embed::{Messages, OEmbedConfig};
use custif_pdf::DEFAULT_VIEWER_PATH;
use serde::{Deserialize, Serialize};
use url::Url;

/// Host-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Viewer page, absolute or relative to the page the fragment lands in
    pub viewer_base_url: String,
    /// oEmbed transport used for X / Twitter posts
    pub oembed: OEmbedConfig,
    /// User-visible notice texts
    pub messages: Messages,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            viewer_base_url: DEFAULT_VIEWER_PATH.to_string(),
            oembed: OEmbedConfig::default(),
            messages: Messages::default(),
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.viewer_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidUrl {
                field: "viewer_base_url",
                value: self.viewer_base_url.clone(),
            });
        }

        let endpoint_ok = Url::parse(&self.oembed.endpoint)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
            .unwrap_or(false);
        if !endpoint_ok {
            return Err(ConfigError::InvalidUrl {
                field: "oembed.endpoint",
                value: self.oembed.endpoint.clone(),
            });
        }

        if self.oembed.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "oembed.timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RendererConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.viewer_base_url, "assets/pdfjs/web/viewer.html");
        assert_eq!(config.oembed.timeout_secs, 10);
    }

    #[test]
    fn test_partial_toml() {
        let config = RendererConfig::from_toml(
            r#"
viewer_base_url = "https://example.org/wp-content/plugins/custif/assets/pdfjs/web/viewer.html"

[oembed]
timeout_secs = 4

[messages]
invalid_url = "Bitte eine gültige URL eingeben"
"#,
        )
        .unwrap();

        assert_eq!(config.oembed.timeout_secs, 4);
        assert_eq!(config.oembed.endpoint, "https://publish.twitter.com/oembed");
        assert_eq!(config.messages.invalid_url, "Bitte eine gültige URL eingeben");
        assert_eq!(config.messages.no_pdf, "No PDF file selected.");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RendererConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(RendererConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = RendererConfig::default();
        config.oembed.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));

        let mut config = RendererConfig::default();
        config.oembed.endpoint = "publish.twitter.com/oembed".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "oembed.endpoint", .. })
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            RendererConfig::from_toml("viewer_base_url = ["),
            Err(ConfigError::Toml(_))
        ));
    }
}
