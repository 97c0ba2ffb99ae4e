//! # netrecon-cli
//!
//! Command-line front end for the netrecon reconnaissance aggregator.
//!
//! Parses targets and flags, drives a [`Scan`], and pretty-prints the
//! resulting host graph.

pub mod args;
pub mod output;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use colored::Colorize;
use netrecon::{Scan, ScanConfig};
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let raw_targets = args::dedup_targets(cli.targets);

    let config = ScanConfig {
        dns_server: cli.dns_server,
        intel_key: cli.shodan_key,
        ..ScanConfig::default()
    };
    let has_intel_key = config.intel_key.is_some();

    let mut scan = Scan::new(config)?;
    scan.populate(&raw_targets).await;

    println!(
        "Scanning {} out of {} given targets",
        scan.targets.len().to_string().bold(),
        raw_targets.len()
    );
    if !has_intel_key {
        println!(
            "{}",
            "No Shodan API key set; skipping service intelligence".dimmed()
        );
    }

    scan.run().await;

    if cli.secondary {
        scan.scan_cidrs().await;
    }

    output::print_scan(&scan);
    Ok(())
}

/// Route library tracing to stderr. `-v` turns on debug-level events
/// for the netrecon crates; RUST_LOG still overrides everything.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "netrecon=debug,netrecon_core=debug,netrecon_client=debug,netrecon_engine=debug"
    } else {
        "netrecon=info,netrecon_core=info,netrecon_client=info,netrecon_engine=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
