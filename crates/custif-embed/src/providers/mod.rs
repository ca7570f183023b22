//! Embed providers
//!
//! Each provider is a (host predicate, transform) pair. The resolver walks
//! [`Provider::all`] in order and takes the first transform that produces a
//! result; a transform returns `None` to let later providers try.

mod google;
mod social;
mod video;

use crate::html::Messages;
use crate::oembed::OEmbedFetcher;
use crate::result::EmbedResult;
use crate::target::EmbedTarget;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

/// True for a non-empty run of ASCII digits
pub(crate) fn is_digits(value: &str) -> bool {
    DIGITS_REGEX.is_match(value)
}

/// Context handed to transforms
pub(crate) struct ProviderContext<'a> {
    pub fetcher: &'a dyn OEmbedFetcher,
    pub messages: &'a Messages,
}

/// Known embed providers, in match order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// `youtu.be` short links
    YouTubeShortLink,
    /// `youtube.com` shorts and watch pages
    YouTube,
    Instagram,
    Figma,
    Spotify,
    SoundCloud,
    Vimeo,
    /// X / Twitter posts via oEmbed
    Twitter,
    /// Docs, Sheets, Slides and Forms
    GoogleDocs,
    Wistia,
    /// Google My Maps
    GoogleMaps,
}

impl Provider {
    /// All providers in precedence order
    pub fn all() -> &'static [Provider] {
        &[
            Provider::YouTubeShortLink,
            Provider::YouTube,
            Provider::Instagram,
            Provider::Figma,
            Provider::Spotify,
            Provider::SoundCloud,
            Provider::Vimeo,
            Provider::Twitter,
            Provider::GoogleDocs,
            Provider::Wistia,
            Provider::GoogleMaps,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Provider::YouTubeShortLink => "youtu.be",
            Provider::YouTube => "YouTube",
            Provider::Instagram => "Instagram",
            Provider::Figma => "Figma",
            Provider::Spotify => "Spotify",
            Provider::SoundCloud => "SoundCloud",
            Provider::Vimeo => "Vimeo",
            Provider::Twitter => "X",
            Provider::GoogleDocs => "Google Docs",
            Provider::Wistia => "Wistia",
            Provider::GoogleMaps => "Google Maps",
        }
    }

    /// Host predicate; `host` is lowercase without a leading `www.`
    pub fn matches_host(self, host: &str) -> bool {
        match self {
            Provider::YouTubeShortLink => host == "youtu.be",
            Provider::YouTube => host == "youtube.com",
            Provider::Instagram => host == "instagram.com",
            Provider::Figma => host == "figma.com",
            Provider::Spotify => host == "open.spotify.com",
            Provider::SoundCloud => host == "soundcloud.com",
            Provider::Vimeo => host == "vimeo.com",
            Provider::Twitter => host == "twitter.com" || host == "x.com",
            Provider::GoogleDocs => host == "docs.google.com",
            Provider::Wistia => host == "wistia.com" || host.ends_with(".wistia.com"),
            // Exact match keeps docs.google.com out
            Provider::GoogleMaps => host == "google.com",
        }
    }

    /// Transform a matching target; `None` falls through to later providers
    pub(crate) fn transform(
        self,
        target: &EmbedTarget<'_>,
        ctx: &ProviderContext<'_>,
    ) -> Option<EmbedResult> {
        match self {
            Provider::YouTubeShortLink => video::youtube_short_link(target),
            Provider::YouTube => video::youtube(target),
            Provider::Instagram => social::instagram(target),
            Provider::Figma => social::figma(target),
            Provider::Spotify => social::spotify(target),
            Provider::SoundCloud => social::soundcloud(target),
            Provider::Vimeo => video::vimeo(target),
            Provider::Twitter => social::twitter(target, ctx),
            Provider::GoogleDocs => google::docs(target, ctx.messages),
            Provider::Wistia => video::wistia(target),
            Provider::GoogleMaps => google::my_maps(target),
        }
    }

    /// Provider whose host predicate accepts `host`
    pub fn for_host(host: &str) -> Option<Provider> {
        let host = host.strip_prefix("www.").unwrap_or(host);
        Provider::all()
            .iter()
            .copied()
            .find(|p| p.matches_host(host))
    }
}
