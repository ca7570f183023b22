//! URL embed resolver
//!
//! Classifies a URL by host and rewrites it into something an iframe (or the
//! page) can show directly.

use crate::html::Messages;
use crate::oembed::{DisabledFetcher, OEmbedFetcher};
use crate::providers::{Provider, ProviderContext};
use crate::result::{EmbedRequest, EmbedResult};
use crate::target::EmbedTarget;

#[cfg(feature = "native")]
use crate::http::HttpError;
#[cfg(feature = "native")]
use crate::oembed::{OEmbedClient, OEmbedConfig};

/// Resolves URLs against the provider table.
///
/// Holds only the oEmbed transport and notice texts, so one resolver can
/// serve any number of requests.
pub struct EmbedResolver {
    fetcher: Box<dyn OEmbedFetcher>,
    messages: Messages,
}

impl EmbedResolver {
    pub fn new(fetcher: impl OEmbedFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            messages: Messages::default(),
        }
    }

    /// Resolver whose oEmbed lookups always fail
    pub fn offline() -> Self {
        Self::new(DisabledFetcher)
    }

    /// Resolver backed by a blocking HTTP oEmbed client
    #[cfg(feature = "native")]
    pub fn from_config(config: &OEmbedConfig) -> Result<Self, HttpError> {
        Ok(Self::new(OEmbedClient::new(config)?))
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Resolve a URL into its embeddable form.
    ///
    /// # Example
    ///
    /// ```
    /// use custif_embed::{EmbedResolver, EmbedResult};
    ///
    /// let resolver = EmbedResolver::offline();
    /// assert_eq!(
    ///     resolver.resolve("https://vimeo.com/99999"),
    ///     EmbedResult::RedirectUrl("https://player.vimeo.com/video/99999".to_string())
    /// );
    /// ```
    pub fn resolve(&self, raw_url: &str) -> EmbedResult {
        let Some(target) = EmbedTarget::parse(raw_url) else {
            tracing::debug!(url = raw_url, "no host, leaving URL unchanged");
            return EmbedResult::Unchanged(raw_url.to_string());
        };

        let ctx = ProviderContext {
            fetcher: self.fetcher.as_ref(),
            messages: &self.messages,
        };

        for provider in Provider::all() {
            if !provider.matches_host(&target.host) {
                continue;
            }
            if let Some(result) = provider.transform(&target, &ctx) {
                tracing::debug!(
                    url = raw_url,
                    provider = provider.name(),
                    kind = result.kind(),
                    "resolved embed"
                );
                return result;
            }
        }

        tracing::debug!(url = raw_url, host = %target.host, "no provider matched");
        EmbedResult::Unchanged(raw_url.to_string())
    }

    pub fn resolve_request(&self, request: EmbedRequest) -> EmbedResult {
        self.resolve(&request.raw_url)
    }
}

impl Default for EmbedResolver {
    fn default() -> Self {
        Self::offline()
    }
}

impl std::fmt::Debug for EmbedResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedResolver")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}
