use anyhow::Context;
use clap::Parser;
use tally_service::TaskService;
use tally_store::FileStore;

mod cli;
mod commands;
mod config;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("tally error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    let config = config::Config::load().context("failed to load configuration")?;
    let path = config.storage_path(flags.file.as_deref())?;
    tracing::debug!(path = %path.display(), "resolved task file");

    let store = FileStore::new(path);
    let mut service = TaskService::new(store).context("failed to load task list")?;

    commands::dispatch(cli.command, &mut service, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TALLY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Logs go to stderr so stdout stays clean for command output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
