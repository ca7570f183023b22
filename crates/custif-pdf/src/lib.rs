//! custif-pdf: PDF viewer parameter encoding.
//!
//! The bundled PDF viewer reads its whole configuration from one URL
//! parameter. This crate builds that parameter:
//! - typed viewer options with per-field defaults
//! - the `key` token: base64 of the form-urlencoded option pairs
//! - the final `{viewer}?file=...&key=...` URL
//!
//! It also decodes a token back into options, the way the viewer does.

pub mod error;
pub mod key;
pub mod options;
pub mod viewer_url;

pub use error::*;
pub use key::*;
pub use options::*;
pub use viewer_url::*;
