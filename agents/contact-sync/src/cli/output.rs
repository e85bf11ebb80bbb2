//! Output formatting for the Contact Sync CLI
//!
//! JSON and YAML for machines, a colored table for people.

use clap::ValueEnum;
use colored::Colorize;
use contact_sync_core::contracts::NormalizedContact;
use std::io::{self, Write};

use crate::error::Result;
use crate::pipeline::RunReport;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Render a run report
pub fn format_report(report: &RunReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Table => Ok(report_table(report)),
    }
}

/// Render a list of contacts
pub fn format_contacts(contacts: &[NormalizedContact], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(contacts)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(contacts)?),
        OutputFormat::Table => Ok(contacts_table(contacts)),
    }
}

/// Write rendered output to stdout
pub fn emit(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn report_table(report: &RunReport) -> String {
    let title = if report.dry_run {
        "Contact sync dry run"
    } else {
        "Contact sync run"
    };

    let created = report.contacts_created.to_string();
    let created = if report.dry_run {
        created.dimmed()
    } else if report.contacts_created == report.contacts_transformed {
        created.green()
    } else {
        created.yellow()
    };

    let mut lines = vec![
        format!("{} {}", title.bold(), report.run_id),
        format!("  people fetched:       {}", report.people_fetched),
        format!("  contacts transformed: {}", report.contacts_transformed),
        format!("  contacts created:     {}", created),
        format!("  inputs hash:          {}", report.inputs_hash),
        format!("  duration:             {} ms", report.duration_ms),
    ];

    if let Some(preview) = &report.preview {
        lines.push(String::new());
        lines.push(contacts_table(preview));
    }

    lines.join("\n")
}

fn contacts_table(contacts: &[NormalizedContact]) -> String {
    const HEADERS: [&str; 6] = [
        "AIRTABLE ID",
        "FIRST NAME",
        "LAST NAME",
        "BIRTHDATE",
        "EMAIL",
        "LIFETIME VALUE",
    ];

    if contacts.is_empty() {
        return "No contacts".dimmed().to_string();
    }

    let rows: Vec<[String; 6]> = contacts
        .iter()
        .map(|c| {
            [
                c.custom_properties.airtable_id.clone(),
                c.first_name.clone(),
                c.last_name.clone(),
                c.birthdate.clone(),
                c.email.clone(),
                c.custom_properties.lifetime_value.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:<w$}", h, w = w).bold().to_string())
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![header];
    for row in &rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contact_sync_core::contracts::CustomProperties;
    use uuid::Uuid;

    fn contact() -> NormalizedContact {
        NormalizedContact {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            birthdate: "2000-01-01".to_string(),
            email: "johndoe@example.com".to_string(),
            custom_properties: CustomProperties {
                airtable_id: "rec1".to_string(),
                lifetime_value: 100.0,
            },
        }
    }

    fn report(dry_run: bool) -> RunReport {
        RunReport {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            completed_at: Utc::now(),
            duration_ms: 12,
            people_fetched: 1,
            contacts_transformed: 1,
            contacts_created: if dry_run { 0 } else { 1 },
            dry_run,
            inputs_hash: "abc123".to_string(),
            preview: dry_run.then(|| vec![contact()]),
        }
    }

    #[test]
    fn test_report_json_roundtrips() {
        let original = report(false);
        let json = format_report(&original, OutputFormat::Json).unwrap();

        assert!(json.contains("\"contacts_created\": 1"));
        assert!(!json.contains("preview"));
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_report_table() {
        let table = format_report(&report(true), OutputFormat::Table).unwrap();

        assert!(table.contains("people fetched:       1"));
        assert!(table.contains("inputs hash:          abc123"));
        assert!(table.contains("johndoe@example.com"));
    }

    #[test]
    fn test_contacts_yaml() {
        let yaml = format_contacts(&[contact()], OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("airtable_id: rec1"));
        assert!(yaml.contains("lifetime_value: 100.0"));
    }

    #[test]
    fn test_contacts_table_rows() {
        let table = format_contacts(&[contact()], OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("rec1"));
        assert!(lines[1].ends_with("100"));
    }

    #[test]
    fn test_empty_contacts_table() {
        let table = format_contacts(&[], OutputFormat::Table).unwrap();
        assert!(table.contains("No contacts"));
    }
}
