//! # portfolio
//!
//! Command-line front end for [`portfolio_leptos`]: renders the DevPortfolio
//! single-page site to static HTML.
//!
//! ## CLI Usage
//!
//! ```bash
//! portfolio build                 # writes dist/index.html
//! portfolio build --out public    # writes public/index.html
//! portfolio render > index.html   # page on stdout
//! portfolio projects --json       # fixed project data as JSON
//! ```
//!
//! Optional `portfolio.toml` in the working directory sets `title`,
//! `stylesheet` and `out_dir`; flags override it.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use portfolio::config::{PortfolioConfig, SiteOverrides};
//! use portfolio::render::write_site;
//! use std::path::Path;
//!
//! let config = PortfolioConfig::load(Path::new("."));
//! let options = config.site_options(&SiteOverrides::default());
//! write_site(&options, Path::new("dist")).unwrap();
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod render;

pub use error::{PortfolioError, Result};
