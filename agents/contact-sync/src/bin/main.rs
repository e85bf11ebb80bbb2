//! Contact Sync Agent entry point

use clap::Parser;
use contact_sync::cli::{self, SyncCli};
use contact_sync::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = SyncCli::parse();

    telemetry::init_tracing(cli.verbose, cli.log_format)?;

    let code = match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(stage = e.stage(), error = %e, "Contact sync failed");
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(code.into());
}
