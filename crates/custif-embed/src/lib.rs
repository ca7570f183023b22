//! custif-embed: URL to embed resolution.
//!
//! Classifies a user supplied URL by host and path and rewrites it into
//! something an iframe can show:
//! - provider embed URLs (YouTube, Instagram, Figma, Spotify, SoundCloud,
//!   Vimeo, Google Docs/Sheets/Slides/Forms, Wistia, Google My Maps)
//! - ready-made markup fetched over oEmbed (X / Twitter posts)
//! - the original URL when nothing matches
//!
//! Resolution never fails. Unsupported or broken inputs end up as
//! [`EmbedResult::Unchanged`] or as a notice in [`EmbedResult::InlineMarkup`].

pub mod html;
pub mod http;
pub mod oembed;
pub mod providers;
pub mod resolver;
pub mod result;
pub mod target;

pub use html::{escape_html, notice_html, notice_with_icon_html, Messages};
pub use http::{check_status, HttpError};
#[cfg(feature = "native")]
pub use http::HttpClient;
pub use oembed::{DisabledFetcher, OEmbedConfig, OEmbedFetcher, OEmbedResponse};
#[cfg(feature = "native")]
pub use oembed::OEmbedClient;
pub use providers::Provider;
pub use resolver::EmbedResolver;
pub use result::{EmbedRequest, EmbedResult};
pub use target::EmbedTarget;
