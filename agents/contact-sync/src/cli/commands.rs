//! CLI command definitions for the Contact Sync Agent

use clap::{Args, Parser, Subcommand};
use contact_sync_core::contracts::SourceRecord;
use std::path::{Path, PathBuf};

use super::output::{self, OutputFormat};
use super::ExitCode;
use crate::client::{HttpContactSink, HttpPeopleSource};
use crate::config::{ConfigOverrides, SyncConfig};
use crate::error::{Result, SyncError};
use crate::pipeline::{self, SyncPipeline};
use crate::telemetry::LogFormat;

/// Contact Sync Agent CLI
///
/// Fetch people from the upstream people endpoint, normalize them into
/// contacts and create each contact upstream.
#[derive(Parser, Debug)]
#[command(name = "contact-sync")]
#[command(about = "Contact Sync Agent - normalize people into contacts", long_about = None)]
#[command(version)]
pub struct SyncCli {
    /// Output verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format
    #[arg(long, value_enum, default_value = "json", global = true)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: SyncCommands,
}

/// Endpoint configuration flags
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Config file (TOML, YAML or JSON)
    #[arg(long = "config", global = true)]
    pub config_file: Option<PathBuf>,

    /// Base URL serving /people/ and /contacts/
    #[arg(long, env = "CONTACT_SYNC_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// People endpoint URL
    #[arg(long, env = "CONTACT_SYNC_PEOPLE_URL", global = true)]
    pub people_url: Option<String>,

    /// Contacts endpoint URL
    #[arg(long, env = "CONTACT_SYNC_CONTACTS_URL", global = true)]
    pub contacts_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "CONTACT_SYNC_TIMEOUT_MS", global = true)]
    pub timeout_ms: Option<u64>,
}

impl ConfigArgs {
    /// CLI layer of the configuration
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            people_url: self.people_url.clone(),
            contacts_url: self.contacts_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }

    /// Resolve the full configuration
    pub fn resolve(&self) -> Result<SyncConfig> {
        SyncConfig::load(self.config_file.as_deref(), &self.overrides())
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum SyncCommands {
    /// Fetch people, transform them and create contacts
    Run {
        /// Fetch and transform only; create nothing
        #[arg(long)]
        dry_run: bool,

        /// Output format for the run report
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Transform a local people file without touching the network
    ///
    /// The file holds a JSON or YAML array shaped like the people endpoint
    /// response.
    Transform {
        /// Path to the people file
        #[arg(short, long)]
        file: PathBuf,

        /// Output format for the contacts
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

/// Execute the run command
pub async fn execute_run(
    config: &SyncConfig,
    dry_run: bool,
    format: OutputFormat,
) -> Result<ExitCode> {
    let client = reqwest::Client::new();
    let source = HttpPeopleSource::new(&config.people_url)
        .with_client(client.clone())
        .with_timeout(config.timeout());
    let sink = HttpContactSink::new(&config.contacts_url)
        .with_client(client)
        .with_timeout(config.timeout());

    let report = SyncPipeline::new(source, sink)
        .with_dry_run(dry_run)
        .run()
        .await?;

    output::emit(&output::format_report(&report, format)?)?;
    Ok(ExitCode::Success)
}

/// Execute the transform command
pub fn execute_transform(file: &Path, format: OutputFormat) -> Result<ExitCode> {
    let records = load_people_file(file)?;
    let contacts = pipeline::transform_only(&records)?;

    output::emit(&output::format_contacts(&contacts, format)?)?;
    Ok(ExitCode::Success)
}

/// Read a people list from a JSON or YAML file
pub fn load_people_file(path: &Path) -> Result<Vec<SourceRecord>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SyncError::file(format!("{}: {}", path.display(), e)))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        SyncCli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = SyncCli::try_parse_from([
            "contact-sync",
            "run",
            "--dry-run",
            "--format",
            "json",
            "--base-url",
            "http://localhost:9000",
            "--timeout-ms",
            "500",
        ])
        .unwrap();

        match cli.command {
            SyncCommands::Run { dry_run, format } => {
                assert!(dry_run);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let overrides = cli.config.overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(overrides.timeout_ms, Some(500));
    }

    #[test]
    fn test_parse_transform() {
        let cli = SyncCli::try_parse_from(["contact-sync", "transform", "-f", "people.yaml"])
            .unwrap();

        match cli.command {
            SyncCommands::Transform { file, format } => {
                assert_eq!(file, PathBuf::from("people.yaml"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_load_people_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(
            file,
            r#"- id: rec1
  fields:
    firstName: " John "
    lastName: " Doe "
    dateOfBirth: "01-01-2000"
    email: johndoe@example.com
    lifetimeValue: "$100.00""#
        )
        .unwrap();

        let records = load_people_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "rec1");
        assert_eq!(records[0].fields.len(), 5);
    }

    #[test]
    fn test_load_people_invalid_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{\"id\": \"rec1\"}}").unwrap();

        // A single object is not a people list
        assert!(matches!(
            load_people_file(file.path()),
            Err(SyncError::Parse(_))
        ));
    }
}
