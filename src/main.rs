// Copyright 2026 dentist-scan contributors
// SPDX-License-Identifier: Apache-2.0

use chrono::Local;
use clap::Parser;
use dentist_scan::browser::chromium::ChromiumSession;
use dentist_scan::config::ScanConfig;
use dentist_scan::error::ScanError;
use dentist_scan::report::{self, ReportOptions};
use dentist_scan::scan;
use std::io::Write;

#[derive(Parser)]
#[command(
    name = "dentist-scan",
    about = "Find NHS dental practices accepting new patients near a postcode",
    version
)]
struct Cli {
    /// Append the results table to ./results/dentist-availability-<postcode>.log
    #[arg(long, short = 'l')]
    logging: bool,

    /// Hide the results table on the console
    #[arg(long, short = 's')]
    silent: bool,

    /// Postcode for the search area (prompted for when omitted)
    #[arg(long, short = 'p')]
    postcode: Option<String>,

    /// Seconds to wait for the search page to become ready
    #[arg(long, default_value = "200")]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dentist_scan=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let postcode = match cli.postcode {
        Some(p) => p,
        None => match prompt_postcode() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        },
    };

    let config = ScanConfig {
        wait_timeout_secs: cli.timeout,
        ..ScanConfig::default()
    };

    println!(
        "Scanning for NHS dentists near {postcode}: {}",
        Local::now().format("%d/%m/%Y %H:%M:%S")
    );

    let mut session = match ChromiumSession::launch(config.headless).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let records = match scan::run_scan(&mut session, &config, &postcode, true).await {
        Ok(records) => records,
        Err(ScanError::InvalidPostcode { postcode }) => {
            eprintln!(
                "Postcode '{postcode}' appears invalid. \
                 If the place you searched for is in England, you could:\n \
                 * check your spelling and try again\n \
                 * try a different postcode"
            );
            std::process::exit(2);
        }
        Err(e @ ScanError::SiteUnavailable { .. }) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let opts = ReportOptions {
        silent: cli.silent,
        logging: cli.logging,
    };
    if let Err(e) = report::publish(&records, &postcode, &config, opts) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Ask for a postcode on stdin when `-p` was not given.
fn prompt_postcode() -> anyhow::Result<String> {
    print!("Enter postcode: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
