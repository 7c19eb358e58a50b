use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use portfolio::args::{Cli, Command};
use portfolio::config::PortfolioConfig;
use portfolio::render::{project_listing, write_site, DEFAULT_OUT_DIR};
use portfolio_leptos::render_site;

fn init_logging(log_level: &str) {
    // stderr only: stdout carries `render` and `projects` output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<PortfolioConfig> {
    match &cli.config {
        Some(path) => PortfolioConfig::load_from_path(path)
            .with_context(|| format!("loading --config {}", path.display())),
        None => Ok(PortfolioConfig::load(Path::new("."))),
    }
}

fn print_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match writeln!(out, "{text}") {
        // Downstream closed the pipe (e.g. `portfolio render | head`)
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.context("writing to stdout"),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    debug!(?cli, "parsed arguments");

    let config = load_config(&cli)?;
    let options = config.site_options(&cli.overrides());

    match &cli.command {
        Command::Build { out } => {
            let out_dir = config.out_dir(out.as_deref(), Path::new(DEFAULT_OUT_DIR));
            info!(out_dir = %out_dir.display(), title = %options.title, "building site");
            write_site(&options, &out_dir).context("building site")?;
        }
        Command::Render => print_stdout(&render_site(&options))?,
        Command::Projects { json } => print_stdout(&project_listing(*json)?)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
