use anyhow::{Context, Result};
use audremote::app::cli::Args;
use audremote::app::config::AppConfig;
use audremote::app::execute;
use audremote::remote::SshExecutor;
use clap::Parser;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::template()?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(args.verbose, config.log_file.as_deref())?;

    let command = args
        .command
        .clone()
        .context("No command given, see --help")?;
    let remote = config.resolve_remote(&args.overrides())?;
    let backend = args.backend.unwrap_or(config.backend);
    tracing::info!(
        backend = %backend,
        destination = %remote.destination(),
        ?command,
        "connecting"
    );

    let player = backend.connect(SshExecutor::new(remote), config.volume_step);
    let outcome = execute(player.as_ref(), &command)
        .with_context(|| format!("{command:?} failed"))?;

    if let Some(text) = outcome.render(args.json)? {
        println!("{text}");
    }
    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log_file {} has no file name", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
