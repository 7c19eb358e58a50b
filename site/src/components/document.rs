//! Root document component - the complete HTML page
//!
//! Page shell: stylesheet link and injected styles in `<head>`, then
//! Navigation, the three content sections inside `<main>`, and the footer.

use super::{Contact, Footer, Hero, Navigation, Projects};
use crate::SiteOptions;
use leptos::prelude::*;

/// The complete HTML document for the portfolio page
#[component]
pub fn PortfolioDocument(
    options: SiteOptions,
    /// Style definitions appended to the head during mount
    #[prop(default = Vec::new())]
    head_styles: Vec<String>,
) -> impl IntoView {
    let SiteOptions {
        title,
        stylesheet_href,
    } = options;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet_href />
                {head_styles.into_iter().map(|css| view! { <style>{css}</style> }).collect::<Vec<_>>()}
            </head>
            <body>
                <div class="min-vh-100 d-flex flex-column">
                    <Navigation />
                    <main class="flex-grow-1">
                        <Hero />
                        <Projects />
                        <Contact />
                    </main>
                    <Footer />
                </div>
            </body>
        </html>
    }
}
