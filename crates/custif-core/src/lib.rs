//! custif-core: settings, style config and rendering for iframe embeds.
//!
//! Ties the other crates together:
//! - [`EmbedSettings`] from page builder maps or block editor attributes
//! - the block editor stylesheet via `custif-style`
//! - page URLs through the `custif-embed` resolver, PDFs through the
//!   `custif-pdf` viewer URL
//! - [`Renderer`] assembling the final HTML fragment, with [`RenderHooks`]
//!   for host extensions
//!
//! Nothing here installs a `tracing` subscriber; hosts wire logging up.

pub mod config;
pub mod error;
pub mod render;
pub mod settings;
pub mod styles;

pub use config::RendererConfig;
pub use error::{ConfigError, SettingsError};
pub use render::{DefaultHooks, IframeAttributes, RenderHooks, Renderer, DEFAULT_PDF_HEIGHT};
pub use settings::{
    Alignment, Background, BackgroundStyle, BlockAttributes, BlockLayout, BorderConfig,
    BorderRadius, BorderSide, BoxSides, EmbedSettings, PdfSettings, PdfSourceType, RadiusCorners,
    ShadowConfig, Source,
};
pub use styles::build_style_sheet;

// Re-export the component crates
pub use custif_embed;
pub use custif_pdf;
pub use custif_style;
