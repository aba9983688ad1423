//! Once command implementation

use crate::cli::watch::init_tracing;
use crate::cli::OnceArgs;
use crate::display::TerminalDisplay;
use crate::poller::{Poller, RefreshOutcome};
use std::sync::Arc;

/// Handle `feedwatch once`: a single refresh printed to stdout.
///
/// A failed fetch prints the fallback message and still exits successfully.
pub async fn run_once(args: OnceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.source.load_config()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let display = Arc::new(TerminalDisplay::stdout(config.display.id, false, false));
    let poller = Poller::new(&config.poller, display)?;

    match poller.refresh().await {
        RefreshOutcome::Updated { bytes } => tracing::info!(bytes, "Fetched resource"),
        RefreshOutcome::Fallback { error } => tracing::info!(error = %error, "Showed fallback"),
    }

    Ok(())
}
