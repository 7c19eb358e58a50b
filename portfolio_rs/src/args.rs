//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::SiteOverrides;

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Render the DevPortfolio single-page site to static HTML")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./portfolio.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Document title
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Remote stylesheet URI linked from the page head
    #[arg(long, global = true, value_name = "URL")]
    pub stylesheet: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Render the page and write <DIR>/index.html
    Build {
        /// Output directory (default: config `out_dir`, else `dist`)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Render the page to stdout
    Render,
    /// List the portfolio projects
    Projects {
        /// Emit JSON instead of one line per project
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Page settings given as flags.
    pub fn overrides(&self) -> SiteOverrides {
        SiteOverrides {
            title: self.title.clone(),
            stylesheet: self.stylesheet.clone(),
        }
    }
}
