//! Leptos UI components for rendering the portfolio page.
//!
//! Each component is a Leptos `#[component]` function with no reactive
//! state; the page is rendered once to static HTML.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument
//! ├── Navigation
//! ├── main
//! │   ├── Hero            (#home)
//! │   ├── Projects        (#projects)
//! │   │   └── ProjectCard (per record)
//! │   │       └── TechBadge (per tag)
//! │   └── Contact         (#contact)
//! └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_site`], but can be
//! rendered on their own:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use portfolio_leptos::components::Navigation;
//!
//! let html = view! { <Navigation /> }.to_html();
//! assert!(html.contains("#projects"));
//! ```

mod contact;
mod document;
mod footer;
mod hero;
mod navigation;
mod projects;

pub use contact::Contact;
pub use document::PortfolioDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use projects::{ProjectCard, Projects, TechBadge};
