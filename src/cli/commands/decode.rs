//! Decode command implementation
//!
//! Decodes reports supplied as arguments, or streams them one per line from
//! stdin so archive files can be piped through directly.

use std::io::{self, BufRead};

use colored::Colorize;
use tracing::{debug, info, warn};

use crate::app::models::Report;
use crate::app::services::decoder::{DecodeContext, Decoder};
use crate::app::services::renderer;
use crate::cli::args::{DecodeArgs, OutputFormat};
use crate::cli::commands::shared;
use crate::{Error, Result};

/// Run the decode command
pub fn run_decode(args: DecodeArgs) -> Result<()> {
    shared::setup_logging(&args)?;

    let ctx = args.context()?;
    info!(month = ctx.month, year = ctx.year, "decode context resolved");

    let decoder = Decoder::new()?;

    if args.reports.is_empty() {
        decode_stdin(&decoder, &ctx, args.format)
    } else {
        for raw in &args.reports {
            let report = decoder.decode(raw, &ctx)?;
            emit(&report, args.format)?;
        }
        Ok(())
    }
}

/// Decode reports line by line from stdin
///
/// A failed line is reported on stderr and skipped; the stream keeps going
/// so one malformed archive entry does not abort a batch.
fn decode_stdin(decoder: &Decoder, ctx: &DecodeContext, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let mut decoded = 0usize;
    let mut failed = 0usize;

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| Error::io("failed to read report line from stdin", e))?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        // Archive files interleave annotations with reports; real reports
        // start with an uppercase letter
        if !raw.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            debug!(line = raw, "skipping non-report line");
            continue;
        }

        match decoder.decode(raw, ctx) {
            Ok(report) => {
                emit(&report, format)?;
                decoded += 1;
            }
            Err(error) => {
                warn!(report = raw, %error, "report failed to decode");
                eprintln!("{} {}", "decode failed:".red().bold(), error);
                failed += 1;
            }
        }
    }

    info!(decoded, failed, "stdin decoding finished");
    Ok(())
}

/// Write one decoded report to stdout in the requested format
fn emit(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", report.raw.bold());
            println!("{}", renderer::render(report)?);
            println!();
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
