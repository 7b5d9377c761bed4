use anyhow::Context;
use clap::Parser;
use nomad_site::config::Config;
use nomad_site::logging::init_tracing;
use nomad_site::ui::runtime;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nomad-site")]
#[command(about = "Nomad product site, rendered in your terminal")]
#[command(version)]
struct Cli {
    /// Page to open on (home, features, pricing, changelog, docs, download, login, account)
    #[arg(short, long)]
    page: Option<String>,

    /// Config file to use instead of ~/.config/nomad-site/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (overrides logging.file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let log_file = cli.log_file.as_ref().or(config.logging.file.as_ref());
    init_tracing(&config.logging.level, log_file.map(PathBuf::as_path))
        .context("Failed to open log file")?;

    if !std::io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, nothing to render");
        return Ok(());
    }

    let start_page = cli.page.as_deref().unwrap_or(&config.site.start_page);
    runtime::run(&config, start_page).context("Terminal UI failed")?;
    Ok(())
}
