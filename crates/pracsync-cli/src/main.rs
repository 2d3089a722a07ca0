//! CLI entry point - the composition root.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use pracsync_cli::{Cli, CliError, handlers};

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads MONDAY_API_TOKEN
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Ctrl-C received, cancelling run");
            on_interrupt.cancel();
        }
    });

    if let Err(err) = handlers::sync::execute(&cli, &cancel).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        if matches!(err.downcast_ref::<CliError>(), Some(CliError::Interrupted)) {
            eprintln!("\n{err}.");
        } else {
            eprintln!("\n✗ Error: {err:#}");
        }
        std::process::exit(code);
    }
}
