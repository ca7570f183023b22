//! HTML escaping and notice markup

use serde::{Deserialize, Serialize};

const NOTICE_ICON: &str = concat!(
    r#"<div class="notice-icon">"#,
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">"#,
    r#"<path fill="none" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" "#,
    r#"d="M12 8v4m0 4h.01M22 12c0 5.523-4.477 10-10 10S2 17.523 2 12 6.477 2 12 2s10 4.477 10 10z"/>"#,
    r#"</svg></div>"#,
);

/// Escape text for HTML content and double-quoted attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Notice block with a plain message
pub fn notice_html(message: &str) -> String {
    format!(
        r#"<div class="custif-iframe-notice"><p>{}</p></div>"#,
        escape_html(message)
    )
}

/// Notice block with the warning icon, used for missing input
pub fn notice_with_icon_html(message: &str) -> String {
    format!(
        r#"<div class="custif-iframe-notice">{}<p>{}</p></div>"#,
        NOTICE_ICON,
        escape_html(message)
    )
}

/// User-visible notice texts.
///
/// Hosts supply translated strings; the defaults are English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub fetch_error: String,
    pub invalid_response: String,
    pub unsupported_google_app: String,
    pub invalid_url: String,
    pub no_pdf: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            fetch_error: "Error fetching tweet. Please try again.".to_string(),
            invalid_response: "Invalid response.".to_string(),
            unsupported_google_app: "Unsupported Google App URL.".to_string(),
            invalid_url: "Please enter a valid URL".to_string(),
            no_pdf: "No PDF file selected.".to_string(),
        }
    }
}
