//! Stylesheet references and the custom CSS injected on mount.
//!
//! Layout and typography come from Bootstrap, referenced from a public CDN.
//! The page only links it; loading is left to the browser. If the CDN is
//! unreachable the page renders unstyled.
//!
//! # Customization
//!
//! ```rust
//! use portfolio_leptos::styles::INJECTED_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", INJECTED_CSS, my_css);
//! assert!(combined.contains("scroll-behavior"));
//! ```

/// Bootstrap 5.3.0 stylesheet on jsDelivr.
pub const BOOTSTRAP_CDN: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

/// Global rules appended to the document head once per mount:
/// smooth in-page scrolling, page background, project card hover lift.
pub const INJECTED_CSS: &str = r#"
html { scroll-behavior: smooth; }
body { background-color: #f8f9fa; }
.project-card {
    transition: transform 0.4s cubic-bezier(0.165, 0.84, 0.44, 1), box-shadow 0.4s ease;
}
.project-card:hover {
    transform: translateY(-8px);
    box-shadow: 0 1rem 3rem rgba(0,0,0,.12)!important;
}
"#;

/// Fixed card image height, matching the cover crop of the remote images.
pub const CARD_IMAGE_STYLE: &str = "height: 220px; object-fit: cover;";
