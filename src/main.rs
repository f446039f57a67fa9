use clap::Parser;
use mo_shell::bootstrap::{load_config_or_default, run_app, tracing::init_tracing_subscriber, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config first: it decides where the log file goes.
    let (config, source) = load_config_or_default(cli.config_path())?;

    init_tracing_subscriber(&config.logging.log_dir)?;
    source.log();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "merchant onboarding starting");

    run_app(config).await
}
