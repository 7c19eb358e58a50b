//! Render the portfolio page to a file.
//!
//! Run with: `cargo run -p portfolio-leptos --example basic_site`

use portfolio_leptos::{render_site, SiteOptions};

fn main() {
    let html = render_site(&SiteOptions::default());

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
