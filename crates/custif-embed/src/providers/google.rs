//! Google Docs editors and Google My Maps

use crate::html::{notice_html, Messages};
use crate::result::EmbedResult;
use crate::target::EmbedTarget;
use url::Url;

/// Query parameters a My Maps link keeps in its embed form
const MAPS_FORWARDED: [&str; 3] = ["ll", "z", "ehbc"];

/// Docs, Sheets, Slides and Forms; other apps get a notice
pub(super) fn docs(target: &EmbedTarget<'_>, messages: &Messages) -> Option<EmbedResult> {
    let path = target.full_path();
    let mut url = target.url.clone();

    if path.contains("/document/") {
        ensure_embedded(&mut url);
    } else if path.contains("/spreadsheets/") {
        replace_last_segment(&mut url, "edit", "pubhtml");
    } else if path.contains("/presentation/") {
        replace_last_segment(&mut url, "pub", "embed");
    } else if path.contains("/forms/") {
        swap_query_pair(&mut url, ("usp", "header"), ("embedded", "true"));
    } else {
        return Some(EmbedResult::InlineMarkup(notice_html(
            &messages.unsupported_google_app,
        )));
    }

    Some(EmbedResult::RedirectUrl(url.into()))
}

/// `google.com/maps/d/...`, keyed by the `mid` query value or the
/// segment after `d`
pub(super) fn my_maps(target: &EmbedTarget<'_>) -> Option<EmbedResult> {
    if !target.path.contains("maps/d/") {
        return None;
    }

    let id = match target.query_value("mid") {
        Some(mid) if !mid.is_empty() => urlencoding::encode(&mid).into_owned(),
        _ => segment_after(&target.segments(), "d")?.to_string(),
    };
    if id.is_empty() {
        return None;
    }

    let mut embed = format!("https://www.google.com/maps/d/embed?mid={}", id);
    for name in MAPS_FORWARDED {
        if let Some(value) = target.query_value(name) {
            embed.push('&');
            embed.push_str(name);
            embed.push('=');
            embed.push_str(&urlencoding::encode(&value));
        }
    }

    Some(EmbedResult::RedirectUrl(embed))
}

/// Segment following `marker`, skipping the editor's action verbs
fn segment_after<'s>(segments: &[&'s str], marker: &str) -> Option<&'s str> {
    let pos = segments.iter().position(|s| *s == marker)?;
    segments
        .get(pos + 1)
        .copied()
        .filter(|s| !matches!(*s, "edit" | "viewer" | "view" | "embed" | ""))
}

/// Append `embedded=true` unless the query already says so
fn ensure_embedded(url: &mut Url) {
    let present = url
        .query_pairs()
        .any(|(key, value)| key == "embedded" && value == "true");
    if !present {
        url.query_pairs_mut().append_pair("embedded", "true");
    }
}

/// Replace a trailing path segment, leaving other paths alone
fn replace_last_segment(url: &mut Url, from: &str, to: &str) {
    let path = url.path();
    let trimmed = path.trim_end_matches('/');
    let Some(prefix) = trimmed.strip_suffix(from) else {
        return;
    };
    if !prefix.ends_with('/') {
        return;
    }
    let rewritten = format!("{}{}", prefix, to);
    url.set_path(&rewritten);
}

/// Replace one exact query pair, keeping the rest in order
fn swap_query_pair(url: &mut Url, from: (&str, &str), to: (&str, &str)) {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if !pairs.iter().any(|(k, v)| k == from.0 && v == from.1) {
        return;
    }

    let mut query = url.query_pairs_mut();
    query.clear();
    for (key, value) in &pairs {
        if key == from.0 && value == from.1 {
            query.append_pair(to.0, to.1);
        } else {
            query.append_pair(key, value);
        }
    }
}
