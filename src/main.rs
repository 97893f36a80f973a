//! flowtag - Flow log tagging utility
//!
//! Entry point: reads a flow log and a lookup table, writes the two
//! frequency reports to the output directory.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flowtag::{report, tag_flows, FlowLogReader, LookupTable, Result};

/// Tags AWS VPC flow log traffic by port/protocol lookup
#[derive(Parser, Debug)]
#[command(name = "flowtag")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the flow log file (AWS VPC flow log v2 format)
    flow_log: PathBuf,

    /// Path to the CSV lookup table (dstport,protocol,tag)
    lookup_table: PathBuf,

    /// Directory for the report files, created if absent
    #[arg(short = 'o', long, default_value = "output")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

/// Initializes tracing/logging subsystem
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn run(args: &Args) -> Result<()> {
    fs::create_dir_all(&args.output_dir)?;

    let lookup = LookupTable::load(&args.lookup_table)?;
    info!(
        "Loaded {} lookup entries from {}",
        lookup.len(),
        args.lookup_table.display()
    );

    let records = FlowLogReader::open(&args.flow_log)?;
    let counts = tag_flows(records, &lookup);
    info!(
        "Aggregated {} flow records into {} tags and {} port/protocol pairs",
        counts.total(),
        counts.tag_counts.len(),
        counts.port_proto_counts.len()
    );

    report::write_tag_counts(&counts.tag_counts, &args.output_dir.join("tag_counts.csv"))?;
    report::write_port_proto_counts(
        &counts.port_proto_counts,
        &args.output_dir.join("port_protocol_counts.csv"),
    )?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => {
            println!(
                "Processing complete. Output written to '{}'",
                args.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("flowtag failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
