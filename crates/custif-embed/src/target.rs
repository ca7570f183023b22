//! Parsed view of a URL under resolution

use url::Url;

/// A parsed URL with the pieces providers match on.
///
/// `host` is lowercase with a leading `www.` removed. `path` has surrounding
/// slashes trimmed and keeps its percent-encoding, so ids copied out of it
/// are already URL-safe.
#[derive(Debug, Clone)]
pub struct EmbedTarget<'a> {
    pub raw: &'a str,
    pub url: Url,
    pub host: String,
    pub path: String,
}

impl<'a> EmbedTarget<'a> {
    /// Parse a URL; `None` when it has no host
    pub fn parse(raw: &'a str) -> Option<Self> {
        let url = Url::parse(raw).ok()?;
        let host = url.host_str()?.to_ascii_lowercase();
        if host.is_empty() {
            return None;
        }
        let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
        let path = url.path().trim_matches('/').to_string();

        Some(Self {
            raw,
            url,
            host,
            path,
        })
    }

    /// Path segments after trimming, empty path gives no segments
    pub fn segments(&self) -> Vec<&str> {
        if self.path.is_empty() {
            Vec::new()
        } else {
            self.path.split('/').collect()
        }
    }

    /// Path as served, with its leading slash
    pub fn full_path(&self) -> &str {
        self.url.path()
    }

    /// First decoded query value for `name`
    pub fn query_value(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}
