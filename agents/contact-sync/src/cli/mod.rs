//! CLI module for the Contact Sync Agent
//!
//! Command parsing, output rendering and exit codes for the `contact-sync`
//! binary.

pub mod commands;
pub mod output;

pub use commands::{ConfigArgs, SyncCli, SyncCommands};
pub use output::OutputFormat;

use crate::error::SyncError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run completed
    Success = 0,
    /// People fetch failed
    FetchFailed = 2,
    /// A record could not be transformed
    TransformFailed = 3,
    /// A contact could not be created
    CreateFailed = 4,
    /// Invalid input, config or file
    InvalidInput = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Run the CLI with the given arguments and return the exit code
pub async fn run(cli: SyncCli) -> Result<ExitCode, SyncError> {
    match cli.command {
        SyncCommands::Run { dry_run, format } => {
            let config = cli.config.resolve()?;
            tracing::debug!(
                people_url = %config.people_url,
                contacts_url = %config.contacts_url,
                timeout_ms = config.timeout_ms,
                "Resolved configuration"
            );
            commands::execute_run(&config, dry_run, format).await
        }
        SyncCommands::Transform { file, format } => commands::execute_transform(&file, format),
    }
}
