//! HTML fragment rendering
//!
//! One call turns a settings record into the final fragment:
//! `<div class="custif-iframe-wrapper" id="...">{content}</div>` followed by
//! an optional `<style>` block. Content is an iframe, inline oEmbed markup,
//! or a notice.

use crate::config::RendererConfig;
use crate::error::Result;
use crate::settings::{sanitize_id, EmbedSettings, Source};
use crate::styles::build_style_sheet;
use custif_embed::{
    escape_html, notice_with_icon_html, EmbedResolver, EmbedResult, Messages,
};
use custif_pdf::build_viewer_url;
use url::Url;

/// Height used for PDF iframes without an explicit one
pub const DEFAULT_PDF_HEIGHT: &str = "600px";

/// Ordered iframe attributes. Empty values are skipped on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IframeAttributes {
    entries: Vec<(String, String)>,
}

impl IframeAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut attrs = Self::new();
        for (name, value) in pairs {
            attrs.set(name, value);
        }
        attrs
    }

    /// Set an attribute; an existing one keeps its position
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// `<iframe name="value" ...></iframe>` with escaped names and values
    pub fn to_html(&self) -> String {
        let mut html = String::from("<iframe");
        for (name, value) in self.iter().filter(|(_, v)| !v.is_empty()) {
            html.push_str(&format!(" {}=\"{}\"", escape_html(name), escape_html(value)));
        }
        html.push_str("></iframe>");
        html
    }
}

/// Extension points around rendering. Every hook defaults to identity.
pub trait RenderHooks: Send + Sync {
    /// Adjust the page iframe's attributes before they are written
    fn filter_iframe_attributes(&self, _attrs: &mut IframeAttributes, _settings: &EmbedSettings) {}

    /// Replace the wrapper's content (iframe, markup or notice)
    fn filter_inner_content(&self, inner: String, _settings: &EmbedSettings, _id: &str) -> String {
        inner
    }

    /// Replace the finished wrapper `<div>`
    fn filter_wrapper_output(
        &self,
        output: String,
        _inner: &str,
        _settings: &EmbedSettings,
        _id: &str,
    ) -> String {
        output
    }
}

/// Hooks that change nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl RenderHooks for DefaultHooks {}

/// Renders embed instances. Holds only immutable configuration.
pub struct Renderer {
    resolver: EmbedResolver,
    viewer_base_url: String,
    messages: Messages,
    hooks: Box<dyn RenderHooks>,
}

impl Renderer {
    /// Renderer with an explicit resolver; the config's messages apply to both
    pub fn new(config: RendererConfig, resolver: EmbedResolver) -> Self {
        Self {
            resolver: resolver.with_messages(config.messages.clone()),
            viewer_base_url: config.viewer_base_url,
            messages: config.messages,
            hooks: Box::new(DefaultHooks),
        }
    }

    /// Renderer whose oEmbed lookups go over HTTP
    pub fn from_config(config: RendererConfig) -> Result<Self> {
        config.validate()?;
        let resolver = EmbedResolver::from_config(&config.oembed)?;
        Ok(Self::new(config, resolver))
    }

    /// Renderer without network access; tweets render the fetch error notice
    pub fn offline(config: RendererConfig) -> Self {
        Self::new(config, EmbedResolver::offline())
    }

    pub fn with_hooks(mut self, hooks: impl RenderHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Wrapper id: the sanitized custom id, else `custif-iframe-{unique_id}`
    pub fn iframe_id(settings: &EmbedSettings, unique_id: &str) -> String {
        let custom = sanitize_id(&settings.custom_id);
        if custom.is_empty() {
            format!("custif-iframe-{}", sanitize_id(unique_id))
        } else {
            custom
        }
    }

    /// Render one instance
    pub fn render(&self, settings: &EmbedSettings, unique_id: &str) -> String {
        let id = Self::iframe_id(settings, unique_id);

        let inner = match settings.source {
            Source::Default => self.render_page(settings),
            Source::Pdf => self.render_pdf(settings),
        };
        let inner = self.hooks.filter_inner_content(inner, settings, &id);

        let wrapper = format!(
            r#"<div class="custif-iframe-wrapper" id="{}">{}</div>"#,
            escape_html(&id),
            inner
        );
        let mut output = self
            .hooks
            .filter_wrapper_output(wrapper, &inner, settings, &id);

        if let Some(layout) = &settings.layout {
            let css = build_style_sheet(&id, layout, settings.auto_height).to_css();
            if !css.is_empty() {
                output.push_str("<style>");
                output.push_str(&escape_style_text(&css));
                output.push_str("</style>");
            }
        }

        output
    }

    fn render_page(&self, settings: &EmbedSettings) -> String {
        let raw = settings.iframe_url.trim();
        if raw.is_empty() {
            tracing::debug!("no URL set");
            return notice_with_icon_html(&self.messages.invalid_url);
        }

        let src = match self.resolver.resolve(raw) {
            EmbedResult::InlineMarkup(markup) => return markup,
            EmbedResult::RedirectUrl(url) | EmbedResult::Unchanged(url) => url,
        };
        if !is_web_url(&src) {
            tracing::debug!(url = %src, "not an embeddable URL");
            return notice_with_icon_html(&self.messages.invalid_url);
        }

        let mut attrs = self.page_attributes(settings);
        attrs.set("src", src);
        self.hooks.filter_iframe_attributes(&mut attrs, settings);
        attrs.to_html()
    }

    fn page_attributes(&self, settings: &EmbedSettings) -> IframeAttributes {
        let mut style = String::from("width: 100%; display: block;");
        if settings.lazy_load {
            if let Some(placeholder) = web_url(&settings.placeholder_image) {
                style.push_str(&format!(
                    "background-image: url({}); background-size: cover; background-position: center;",
                    placeholder
                ));
            }
        }

        let mut attrs = IframeAttributes::new();
        attrs.set("style", style);
        attrs.set("scrolling", yes_no(settings.show_scrollbars));
        attrs.set("data-auto-height", yes_no(settings.auto_height));
        attrs.set("data-refresh-interval", settings.refresh_interval.as_str());
        attrs.set("loading", if settings.lazy_load { "lazy" } else { "" });
        attrs
    }

    fn render_pdf(&self, settings: &EmbedSettings) -> String {
        let Some(location) = settings.pdf.location() else {
            tracing::debug!("no PDF selected");
            return notice_with_icon_html(&self.messages.no_pdf);
        };

        let viewer = build_viewer_url(&self.viewer_base_url, location, &settings.pdf_options());

        let mut attrs = IframeAttributes::new();
        attrs.set("src", viewer.to_url());
        attrs.set("width", "100%");
        attrs.set(
            "height",
            settings.pdf.height.as_deref().unwrap_or(DEFAULT_PDF_HEIGHT),
        );
        if settings.auto_height {
            attrs.set("data-auto-height", "yes");
        }
        attrs.set("loading", if settings.lazy_load { "lazy" } else { "" });
        attrs.to_html()
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("resolver", &self.resolver)
            .field("viewer_base_url", &self.viewer_base_url)
            .finish_non_exhaustive()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Absolute http(s) URL with a host
fn is_web_url(candidate: &str) -> bool {
    web_url(candidate).is_some()
}

fn web_url(candidate: &str) -> Option<Url> {
    let url = Url::parse(candidate.trim()).ok()?;
    let ok = matches!(url.scheme(), "http" | "https") && url.host_str().is_some();
    ok.then_some(url)
}

/// Keep stylesheet text from closing its `<style>` element
fn escape_style_text(css: &str) -> String {
    css.replace("</", "<\\/")
}
