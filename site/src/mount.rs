//! One-shot style injection performed when the page is mounted.
//!
//! The composition root appends [`INJECTED_CSS`](crate::styles::INJECTED_CSS)
//! to the document head exactly once. [`StyleInjection`] carries that guarantee
//! and [`MountedSite`] owns the single injection for one page lifetime, so
//! rendering a mounted page again never re-runs it.
//!
//! ```rust
//! use portfolio_leptos::mount::{HeadStyles, StyleInjection};
//!
//! let mut head = HeadStyles::default();
//! let mut injection = StyleInjection::new("html { scroll-behavior: smooth; }");
//!
//! assert!(injection.run(&mut head));
//! assert!(!injection.run(&mut head));
//! assert_eq!(head.len(), 1);
//! ```

use std::borrow::Cow;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::PortfolioDocument;
use crate::styles::INJECTED_CSS;
use crate::SiteOptions;

/// Something a style definition can be appended to.
pub trait StyleHost {
    /// Append one style definition. Must not fail.
    fn append_style(&mut self, css: &str);
}

/// Server-side stand-in for `document.head`: collects appended style
/// definitions, rendered later as `<style>` elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadStyles {
    styles: Vec<String>,
}

impl HeadStyles {
    /// Number of appended style definitions.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Appended definitions, in append order.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }
}

impl StyleHost for HeadStyles {
    fn append_style(&mut self, css: &str) {
        self.styles.push(css.to_owned());
    }
}

/// A style definition that is appended to its host at most once.
#[derive(Clone, Debug)]
pub struct StyleInjection {
    css: Cow<'static, str>,
    fired: bool,
}

impl StyleInjection {
    /// Create a pending injection for `css`.
    pub fn new(css: impl Into<Cow<'static, str>>) -> Self {
        Self {
            css: css.into(),
            fired: false,
        }
    }

    /// Append the style to `host` if this injection has not fired yet.
    ///
    /// Returns `true` only on the call that actually appended.
    pub fn run<H: StyleHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.fired {
            return false;
        }
        host.append_style(&self.css);
        self.fired = true;
        true
    }

    /// Whether the injection has already run.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// A page after its one and only mount.
///
/// Mounting runs the style injection; [`MountedSite::render`] only reads the
/// resulting head and can be called repeatedly.
#[derive(Clone, Debug)]
pub struct MountedSite {
    options: SiteOptions,
    head: HeadStyles,
    injection: StyleInjection,
}

impl MountedSite {
    /// Mount the page: build its head and run the style injection once.
    pub fn mount(options: SiteOptions) -> Self {
        let mut head = HeadStyles::default();
        let mut injection = StyleInjection::new(INJECTED_CSS);
        injection.run(&mut head);

        Self {
            options,
            head,
            injection,
        }
    }

    /// Options the page was mounted with.
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Style definitions appended during mount.
    pub fn head(&self) -> &HeadStyles {
        &self.head
    }

    /// Whether the mount-time injection ran.
    pub fn styles_injected(&self) -> bool {
        self.injection.has_fired()
    }

    /// Render the full HTML document, including `<!DOCTYPE html>`.
    pub fn render(&self) -> String {
        let doc = view! {
            <PortfolioDocument
                options=self.options.clone()
                head_styles=self.head.styles().to_vec()
            />
        };

        // Leptos doesn't include DOCTYPE, so we add it
        format!("<!DOCTYPE html>\n{}", doc.to_html())
    }
}
