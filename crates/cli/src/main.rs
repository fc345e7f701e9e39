use album_cli::menu;
use album_cli::modes::Session;
use album_cli::terminal::TerminalPrompter;
use album_core::config;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "album-setup")]
#[command(about = "Sync album metadata with media filenames", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Album directory holding album.json and Tracks/ or Reels/
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    if !cli.dir.is_dir() {
        anyhow::bail!("{} is not a directory", cli.dir.display());
    }

    let mut prompter = TerminalPrompter::stdin();
    let mut session = Session::new(cli.dir, cfg, &mut prompter);
    menu::run(&mut session)?;
    Ok(())
}
