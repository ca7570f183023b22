//! Video hosts: YouTube, Vimeo, Wistia

use super::is_digits;
use crate::result::EmbedResult;
use crate::target::EmbedTarget;

fn youtube_embed(id: &str) -> EmbedResult {
    EmbedResult::RedirectUrl(format!("https://www.youtube.com/embed/{}", id))
}

/// `youtu.be/{id}`
pub(super) fn youtube_short_link(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    if target.path.is_empty() {
        return None;
    }
    Some(youtube_embed(&target.path))
}

/// `youtube.com/shorts/{id}` or `youtube.com/watch?v={id}`
pub(super) fn youtube(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    if let Some(id) = target.path.strip_prefix("shorts/") {
        if !id.is_empty() {
            return Some(youtube_embed(id));
        }
    }

    match target.query_value("v") {
        Some(id) if !id.is_empty() => Some(youtube_embed(&urlencoding::encode(&id))),
        _ => Some(EmbedResult::Unchanged(target.raw.to_string())),
    }
}

/// `vimeo.com/{numeric id}`; player URLs are already embeddable
pub(super) fn vimeo(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    if target.path.contains("player") {
        return Some(EmbedResult::Unchanged(target.raw.to_string()));
    }

    let first = target.segments().into_iter().next()?;
    if !is_digits(first) {
        return None;
    }
    Some(EmbedResult::RedirectUrl(format!(
        "https://player.vimeo.com/video/{}",
        first
    )))
}

/// `{sub}.wistia.com/medias/{id}`
pub(super) fn wistia(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    match target.segments().as_slice() {
        ["medias", id, ..] if !id.is_empty() => Some(EmbedResult::RedirectUrl(format!(
            "https://fast.wistia.net/embed/iframe/{}?seo=false&videoFoam=true",
            id
        ))),
        _ => None,
    }
}
