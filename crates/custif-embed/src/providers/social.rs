//! Social and design hosts

use super::{is_digits, ProviderContext};
use crate::oembed::embed_markup;
use crate::result::EmbedResult;
use crate::target::EmbedTarget;

const INSTAGRAM_KINDS: [&str; 3] = ["p", "reel", "tv"];

/// `instagram.com/{p|reel|tv}/{id}`
pub(super) fn instagram(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    match target.segments().as_slice() {
        [kind, id, ..] if INSTAGRAM_KINDS.contains(kind) && !id.is_empty() => Some(
            EmbedResult::RedirectUrl(format!("https://www.instagram.com/{}/{}/embed", kind, id)),
        ),
        _ => None,
    }
}

/// Any Figma file or prototype, nested whole
pub(super) fn figma(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    Some(EmbedResult::RedirectUrl(format!(
        "https://www.figma.com/embed?embed_host=figma&url={}",
        urlencoding::encode(target.raw)
    )))
}

/// `open.spotify.com/{type}/{id}`
pub(super) fn spotify(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    if target.path.contains("embed") {
        return Some(EmbedResult::Unchanged(target.raw.to_string()));
    }

    match target.segments().as_slice() {
        [kind, id, ..] if !kind.is_empty() && !id.is_empty() => Some(EmbedResult::RedirectUrl(
            format!("https://open.spotify.com/embed/{}/{}", kind, id),
        )),
        _ => None,
    }
}

/// Any SoundCloud track or set, nested whole
pub(super) fn soundcloud(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    Some(EmbedResult::RedirectUrl(format!(
        "https://w.soundcloud.com/player/?url={}",
        urlencoding::encode(target.raw)
    )))
}

/// Posts on twitter.com / x.com, rendered through oEmbed
pub(super) fn twitter(target: &EmbedTarget<'_>, ctx: &ProviderContext<'_>) -> Option<EmbedResult> {
    let segments = target.segments();
    let (user, id) = match (segments.first(), segments.last()) {
        (Some(user), Some(id)) if is_digits(id) => (*user, *id),
        _ => return None,
    };

    let permalink = format!("https://twitter.com/{}/status/{}", user, id);
    Some(embed_markup(ctx.fetcher, &permalink, ctx.messages))
}
