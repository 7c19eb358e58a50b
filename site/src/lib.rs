//! # portfolio-leptos
//!
//! Leptos SSR renderer for the DevPortfolio single-page site.
//!
//! The page is a navigation bar, hero banner, project gallery and contact
//! form, styled by Bootstrap from a public CDN. Everything is static: the
//! project list is a fixed literal and the contact form submits nothing.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Component-Based** - one `#[component]` per page section
//! - **Type-Safe** - fixed content lives in typed constants, not templates
//! - **One-shot styling** - custom CSS is injected exactly once per mount
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_leptos::{render_site, SiteOptions};
//!
//! let html = render_site(&SiteOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Weather Dashboard"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - project records, nav anchors, contact field descriptors
//! - [`components`] - Leptos UI components
//! - [`styles`] - stylesheet URI and injected CSS
//! - [`mount`] - the composition root's one-time style injection
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod mount;
pub mod styles;
pub mod types;

use serde::{Deserialize, Serialize};

pub use mount::MountedSite;

/// Page-level settings that are not part of the fixed content.
///
/// Deserializes with defaults so it can be embedded in config files.
///
/// ```rust
/// use portfolio_leptos::SiteOptions;
///
/// let options = SiteOptions {
///     title: "My Portfolio".into(),
///     ..Default::default()
/// };
/// assert!(options.stylesheet_href.contains("bootstrap"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Document `<title>`
    pub title: String,
    /// Remote stylesheet linked from the head
    pub stylesheet_href: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            stylesheet_href: styles::BOOTSTRAP_CDN.into(),
        }
    }
}

/// Default document title.
pub const DEFAULT_TITLE: &str = "DevPortfolio";

/// Mount the page and render it to a complete HTML document.
///
/// Shorthand for `MountedSite::mount(options.clone()).render()`. The result
/// includes `<!DOCTYPE html>`.
///
/// ```rust
/// use portfolio_leptos::{render_site, SiteOptions};
///
/// let html = render_site(&SiteOptions::default());
/// assert!(html.contains(r#"id="contact""#));
/// ```
pub fn render_site(options: &SiteOptions) -> String {
    MountedSite::mount(options.clone()).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_default() -> String {
        render_site(&SiteOptions::default())
    }

    #[test]
    fn renders_complete_document() {
        let html = render_default();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>DevPortfolio</title>"));
        assert!(html.contains(styles::BOOTSTRAP_CDN));
    }

    #[test]
    fn renders_exactly_three_cards_in_order() {
        let html = render_default();

        assert_eq!(html.matches("data-project-id=").count(), 3);
        let positions: Vec<usize> = [
            "E-Commerce Platform",
            "Task Management Tool",
            "Weather Dashboard",
        ]
        .iter()
        .map(|title| html.find(title).expect("title rendered"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let ids: Vec<usize> = ["1", "2", "3"]
            .iter()
            .map(|id| {
                html.find(&format!(r#"data-project-id="{id}""#))
                    .expect("card id rendered")
            })
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn nav_links_appear_in_order() {
        let html = render_default();
        let nav_start = html.find("<nav").expect("nav rendered");
        let nav_end = html.find("</nav>").expect("nav closed");
        let nav = &html[nav_start..nav_end];

        let links: Vec<usize> = ["Home", "Projects", "Contact"]
            .iter()
            .zip(["#home", "#projects", "#contact"])
            .map(|(label, href)| {
                nav.find(&format!(r#"href="{href}" class="nav-link"#))
                    .unwrap_or_else(|| panic!("{label} link missing"))
            })
            .collect();
        assert!(links.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sections_have_anchor_targets() {
        let html = render_default();
        for id in ["home", "projects", "contact"] {
            assert_eq!(html.matches(&format!(r#"id="{id}""#)).count(), 1, "#{id}");
        }
    }

    #[test]
    fn injected_styles_appear_once_in_head() {
        let html = render_default();
        let head_end = html.find("</head>").expect("head rendered");

        assert_eq!(html.matches("<style>").count(), 1);
        let style_at = html.find("scroll-behavior: smooth").expect("style injected");
        assert!(style_at < head_end);
        assert!(html.contains(".project-card:hover"));
    }

    #[test]
    fn contact_form_is_inert() {
        let html = render_default();
        let form_start = html.find("<form").expect("form rendered");
        let form_end = html.find("</form>").expect("form closed");
        let form = &html[form_start..form_end];

        assert!(!form.contains("action="));
        assert!(!form.contains("method="));
        assert!(!form.contains(r#"type="submit""#));
        assert!(form.contains(r#"type="button""#));
        assert!(form.contains(r#"type="text""#));
        assert!(form.contains(r#"type="email""#));
        assert!(form.contains("<textarea"));
        assert!(form.contains("Send Message"));
    }

    #[test]
    fn page_has_no_scripts() {
        let html = render_default();
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn custom_options_are_applied() {
        let options = SiteOptions {
            title: "Jane Doe".into(),
            stylesheet_href: "https://example.com/site.css".into(),
        };
        let html = render_site(&options);

        assert!(html.contains("<title>Jane Doe</title>"));
        assert!(html.contains(r#"href="https://example.com/site.css""#));
        assert!(!html.contains(styles::BOOTSTRAP_CDN));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: SiteOptions =
            serde_json::from_str(r#"{"title":"Only Title"}"#).expect("deserialize");
        assert_eq!(options.title, "Only Title");
        assert_eq!(options.stylesheet_href, styles::BOOTSTRAP_CDN);
    }
}
