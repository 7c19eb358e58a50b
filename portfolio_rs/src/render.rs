//! Page output: writing `index.html` and listing project data.

use std::fs;
use std::path::{Path, PathBuf};

use portfolio_leptos::types::{project_data, ProjectRecord};
use portfolio_leptos::{render_site, SiteOptions};
use tracing::{debug, info};

use crate::error::{PortfolioError, Result};

/// Output file name inside the build directory.
pub const INDEX_FILE: &str = "index.html";

/// Build directory used when neither flag nor config names one.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Render the page and write it to `out_dir/index.html`.
///
/// Creates `out_dir` if needed and returns the written path.
pub fn write_site(options: &SiteOptions, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|source| PortfolioError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_site(options);
    let path = out_dir.join(INDEX_FILE);
    fs::write(&path, &html).map_err(|source| PortfolioError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "site written");
    Ok(path)
}

/// Project list as text (one `<id>. <title> [<tags>]` line each) or pretty JSON.
pub fn project_listing(json: bool) -> Result<String> {
    let projects = project_data();
    debug!(count = projects.len(), "listing projects");

    if json {
        return Ok(serde_json::to_string_pretty(&projects)?);
    }
    Ok(projects.iter().map(listing_line).collect::<Vec<_>>().join("\n"))
}

fn listing_line(project: &ProjectRecord) -> String {
    format!(
        "{}. {} [{}]",
        project.id,
        project.title,
        project.tech.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_index_into_nested_dir() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("a").join("b");

        let path = write_site(&SiteOptions::default(), &out).expect("write site");
        assert_eq!(path, out.join(INDEX_FILE));

        let html = fs::read_to_string(&path).expect("read back");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Task Management Tool"));
    }

    #[test]
    fn write_fails_when_out_dir_is_a_file() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("taken");
        fs::write(&blocker, "x").expect("create file");

        let err = write_site(&SiteOptions::default(), &blocker).unwrap_err();
        assert!(matches!(err, PortfolioError::Write { .. }));
    }

    #[test]
    fn text_listing_keeps_order_and_tags() {
        let listing = project_listing(false).expect("listing");
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1. E-Commerce Platform [React, Bootstrap]",
                "2. Task Management Tool [Vite, Firebase]",
                "3. Weather Dashboard [JavaScript, API]",
            ]
        );
    }

    #[test]
    fn json_listing_round_trips() {
        let listing = project_listing(true).expect("listing");
        let parsed: Vec<ProjectRecord> = serde_json::from_str(&listing).expect("valid json");
        assert_eq!(parsed, project_data());
    }
}
