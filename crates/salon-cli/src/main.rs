//! `salon` CLI — run the back-office engine's computations from the command
//! line. Each subcommand reads a JSON request from a file or stdin and writes
//! the JSON response to a file or stdout.
//!
//! ## Usage
//!
//! ```sh
//! # Suggest appointment slots (stdin → stdout)
//! echo '{"technicianId":"tech-1","serviceDuration":60,"preferredDate":"2025-11-22"}' \
//!     | salon find-slots
//!
//! # Suggest slots from a file to a file
//! salon find-slots -i request.json -o slots.json
//!
//! # Rank open tasks, pinning the evaluation instant for reproducible runs
//! salon prioritize -i tasks.json --now 2025-11-22T08:00:00Z
//!
//! # Segment customers from their transaction history
//! salon segment -i customers.json --as-of 2026-01-15T12:00:00Z
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use salon_engine::wire::{FindSlotsRequest, PrioritizeRequest, SegmentRequest};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "salon", version, about = "Salon back-office scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest appointment start times for a technician
    FindSlots {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Rank open tasks by urgency, deadline, and technician availability
    Prioritize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Evaluation instant, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
    },
    /// Assign marketing segments to customers from transaction history
    Segment {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Evaluation instant, RFC 3339 (defaults to the current time)
        #[arg(long)]
        as_of: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FindSlots { input, output } => {
            let raw = read_input(input.as_deref())?;
            let request: FindSlotsRequest =
                serde_json::from_str(&raw).context("Failed to parse find-slots request JSON")?;

            let response = salon_engine::wire::find_slots_response(request)
                .context("Failed to compute suggested slots")?;

            write_output(output.as_deref(), &serde_json::to_string_pretty(&response)?)?;
        }
        Commands::Prioritize { input, output, now } => {
            let raw = read_input(input.as_deref())?;
            let request: PrioritizeRequest =
                serde_json::from_str(&raw).context("Failed to parse prioritize request JSON")?;
            let now = parse_instant_arg(now.as_deref(), "--now")?.unwrap_or_else(Utc::now);

            let ranked = salon_engine::prioritize_tasks(
                &request.tasks,
                &request.technician_availability,
                now,
            );

            write_output(output.as_deref(), &serde_json::to_string_pretty(&ranked)?)?;
        }
        Commands::Segment {
            input,
            output,
            as_of,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: SegmentRequest =
                serde_json::from_str(&raw).context("Failed to parse segment request JSON")?;
            let as_of = parse_instant_arg(as_of.as_deref(), "--as-of")?.unwrap_or_else(Utc::now);

            let segments = salon_engine::categorize_customers(&request.customers, as_of);

            write_output(output.as_deref(), &serde_json::to_string_pretty(&segments)?)?;
        }
    }

    Ok(())
}

/// Parse an optional RFC 3339 flag value, normalizing to UTC.
fn parse_instant_arg(raw: Option<&str>, flag: &str) -> Result<Option<DateTime<Utc>>> {
    match raw {
        None => Ok(None),
        Some(text) => {
            let instant = DateTime::parse_from_rfc3339(text)
                .with_context(|| format!("Invalid {flag} value: {text}"))?;
            Ok(Some(instant.with_timezone(&Utc)))
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
