//! Availability records, grid rendering, and the per-postcode log file.

use crate::config::ScanConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// One practice's availability, as worded by the site.
///
/// The status text is opaque; no classification is attempted. Field order is
/// the table's column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Practice name heading. Empty if the page layout deviates.
    pub practice_name: String,
    /// Acceptance text, e.g. "This practice is accepting new NHS patients".
    pub acceptance_status: String,
    /// The detail page this record came from.
    pub detail_url: String,
}

const HEADERS: [&str; 3] = ["practice_name", "acceptance_status", "detail_url"];

/// Render records as a bordered grid table.
///
/// Shape matches the classic `grid` layout: `+---+` rules between every row
/// and a `+===+` rule under the header.
pub fn render_grid(records: &[AvailabilityRecord]) -> String {
    let mut widths: [usize; 3] = [
        HEADERS[0].chars().count(),
        HEADERS[1].chars().count(),
        HEADERS[2].chars().count(),
    ];
    for r in records {
        widths[0] = widths[0].max(r.practice_name.chars().count());
        widths[1] = widths[1].max(r.acceptance_status.chars().count());
        widths[2] = widths[2].max(r.detail_url.chars().count());
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };
    let row = |cells: [&str; 3]| {
        let mut line = String::from("|");
        for (cell, w) in cells.iter().zip(widths) {
            let pad = w - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad + 1));
            line.push('|');
        }
        line
    };

    let mut out = Vec::new();
    out.push(rule('-'));
    out.push(row(HEADERS));
    out.push(rule('='));
    for r in records {
        out.push(row([&r.practice_name, &r.acceptance_status, &r.detail_url]));
        out.push(rule('-'));
    }
    out.join("\n")
}

/// Log file path for a postcode.
pub fn log_path(config: &ScanConfig, postcode: &str) -> PathBuf {
    config
        .results_dir
        .join(format!("dentist-availability-{postcode}.log"))
}

/// Append one rendered table to the postcode's log file.
///
/// Creates the results directory and the file on first use; appends on later
/// runs. The file is plain text, unbounded, not meant to be re-parsed.
pub fn append_report(config: &ScanConfig, postcode: &str, table: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.results_dir).with_context(|| {
        format!(
            "failed to create results directory {}",
            config.results_dir.display()
        )
    })?;

    let path = log_path(config, postcode);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    writeln!(file, "{table}").context("failed to write log file")?;

    Ok(path)
}

/// What to do with the finished table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Suppress console rendering of the table.
    pub silent: bool,
    /// Append the table to the per-postcode log file.
    pub logging: bool,
}

/// Render the records and route them to console and/or log file.
///
/// Console output comes first, then the file append. When logging is enabled
/// the saved path is reported even if the table itself was silenced. Returns
/// the path written, if any.
pub fn publish(
    records: &[AvailabilityRecord],
    postcode: &str,
    config: &ScanConfig,
    opts: ReportOptions,
) -> Result<Option<PathBuf>> {
    let table = render_grid(records);

    if !opts.silent {
        println!("{table}");
    }

    if !opts.logging {
        return Ok(None);
    }
    let path = append_report(config, postcode, &table)?;
    println!("\nSaved result to {}", path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<AvailabilityRecord> {
        vec![
            AvailabilityRecord {
                practice_name: "Smile Dental Care".to_string(),
                acceptance_status: "Accepting new NHS patients".to_string(),
                detail_url: "https://www.nhs.uk/services/dentist/a/1".to_string(),
            },
            AvailabilityRecord {
                practice_name: "Bridge House Dental".to_string(),
                acceptance_status: "Not accepting new NHS patients".to_string(),
                detail_url: "https://www.nhs.uk/services/dentist/b/2".to_string(),
            },
        ]
    }

    fn temp_config(dir: &TempDir) -> ScanConfig {
        ScanConfig {
            results_dir: dir.path().join("results"),
            ..ScanConfig::default()
        }
    }

    #[test]
    fn test_grid_header_and_rows() {
        let table = render_grid(&sample_records());
        let lines: Vec<&str> = table.lines().collect();

        // rule, header, header rule, then row + rule per record
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("practice_name"));
        assert!(lines[1].contains("acceptance_status"));
        assert!(lines[1].contains("detail_url"));
        assert!(lines[2].starts_with("+=") && lines[2].ends_with("=+"));
        assert!(lines[3].contains("Smile Dental Care"));
        assert!(lines[3].contains("Accepting new NHS patients"));
        assert!(lines[5].contains("Bridge House Dental"));
        assert!(lines[5].contains("Not accepting new NHS patients"));
    }

    #[test]
    fn test_grid_columns_align() {
        let table = render_grid(&sample_records());
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_grid_empty_fields_render() {
        let records = vec![AvailabilityRecord {
            practice_name: String::new(),
            acceptance_status: String::new(),
            detail_url: "https://www.nhs.uk/services/dentist/c/3".to_string(),
        }];
        let table = render_grid(&records);
        // Still one data row between header rule and bottom rule
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn test_append_creates_then_appends() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let table = render_grid(&sample_records());

        let path = append_report(&config, "SW1A 1AA", &table).unwrap();
        assert_eq!(path, log_path(&config, "SW1A 1AA"));
        let first = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, format!("{table}\n"));

        // Second run appends rather than overwriting
        append_report(&config, "SW1A 1AA", &table).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(second, format!("{table}\n{table}\n"));
    }

    #[test]
    fn test_publish_silent_still_logs() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let records = sample_records();

        let written = publish(
            &records,
            "LS1 4AP",
            &config,
            ReportOptions {
                silent: true,
                logging: true,
            },
        )
        .unwrap();

        let path = written.expect("logging enabled must write a file");
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, format!("{}\n", render_grid(&records)));
    }

    #[test]
    fn test_publish_without_logging_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);

        let written = publish(
            &sample_records(),
            "LS1 4AP",
            &config,
            ReportOptions::default(),
        )
        .unwrap();

        assert!(written.is_none());
        assert!(!log_path(&config, "LS1 4AP").exists());
    }
}
