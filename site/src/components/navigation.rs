//! Sticky top bar with the brand label and in-page anchors.

use leptos::prelude::*;

use crate::types::{NavLink, NAV_LINKS};

/// Dark navbar: brand on the left, [`NAV_LINKS`] on the right.
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="navbar navbar-dark bg-dark sticky-top shadow-sm py-3">
            <div class="container d-flex justify-content-between align-items-center">
                <a href="#home" class="navbar-brand fw-bold fs-4 m-0">
                    <span class="text-primary">"DEV"</span>
                    "PORTFOLIO"
                </a>
                <div class="navbar-nav flex-row gap-3 gap-md-4">
                    {NAV_LINKS.into_iter().map(|link| view! { <NavAnchor link=link /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavAnchor(link: NavLink) -> impl IntoView {
    view! {
        <a href=link.href class="nav-link text-white opacity-75 px-1 px-sm-2">
            {link.label}
        </a>
    }
}
