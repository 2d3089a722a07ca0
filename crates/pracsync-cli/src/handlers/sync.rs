//! The sync command.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use pracsync_core::BoardSource;
use pracsync_monday::{DefaultMondayClient, MondayClientConfig};
use pracsync_sync::{ContentFetcher, ReqwestFetcher, SyncConfig, SyncPipeline};
use tokio_util::sync::CancellationToken;

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::{ConsoleObserver, SEPARATOR_WIDTH, format_summary, print_separator};

/// Connect timeout for file downloads. Reads are bounded separately by the
/// pipeline's read timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Execute a sync run for the selected series.
///
/// Per-file failures are reported in the summary and do not fail the
/// command. Listing failures and interrupts do.
pub async fn execute(cli: &Cli, cancel: &CancellationToken) -> Result<()> {
    let config = sync_config(cli)?;
    let series = cli.series.0;

    let client = DefaultMondayClient::new(&MondayClientConfig::new(cli.token.trim()))
        .map_err(CliError::from)?;
    let board: Arc<dyn BoardSource> = Arc::new(client);
    let fetcher: Arc<dyn ContentFetcher> = Arc::new(
        ReqwestFetcher::new(CONNECT_TIMEOUT)
            .map_err(|e| CliError::Config(format!("Cannot create HTTP client: {e}")))?,
    );
    let pipeline = SyncPipeline::new(board, fetcher, config);

    println!(
        "Downloading {} files to: {}",
        series.label(),
        cli.output.display()
    );
    print_separator(SEPARATOR_WIDTH);
    println!("Fetching practices from Monday.com...");

    let mut observer = ConsoleObserver::stdout();
    let run = pipeline
        .run(series.label(), &mut observer, cancel)
        .await
        .map_err(CliError::from)?;

    if !run.processed_items() {
        println!("No practices found for series: {}", series.label());
        return Ok(());
    }

    print!("{}", format_summary(&run));
    if let Some(err) = &run.report_error {
        eprintln!("✗ {err}");
    }

    if run.interrupted {
        return Err(CliError::Interrupted.into());
    }
    Ok(())
}

/// Build and validate the pipeline configuration from arguments.
pub fn sync_config(cli: &Cli) -> Result<SyncConfig, CliError> {
    if cli.token.trim().is_empty() {
        return Err(CliError::Arguments("API token must not be empty".to_string()));
    }
    if cli.board_id.is_empty() || !cli.board_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CliError::Arguments(format!(
            "board id must be numeric, got '{}'",
            cli.board_id
        )));
    }

    let mut config = SyncConfig::new()
        .with_output_root(&cli.output)
        .with_board_id(&cli.board_id);
    if cli.no_report {
        config = config.without_report();
    }
    Ok(config)
}
