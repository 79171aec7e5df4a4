//! Command-line argument definitions for the METAR decoder
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::app::services::decoder::DecodeContext;
use crate::Result;

/// CLI arguments for the METAR decoder
///
/// Decodes METAR and SPECI aviation weather observation reports into
/// structured data and renders them as human-readable text or JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-decoder",
    version,
    about = "Decode METAR/SPECI aviation weather reports into human-readable text",
    long_about = "Decodes METAR and SPECI aviation weather observation reports into structured \
                  data. Reports can be passed as arguments or piped one per line on stdin. The \
                  observation month and year are implicit in the coded time group, so they default \
                  to the current month and can be overridden for archived reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the METAR decoder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode raw reports from arguments or stdin (default command)
    Decode(DecodeArgs),
}

/// Output format for decoded reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Multi-line human-readable text
    Text,
    /// Pretty-printed JSON of the structured report
    Json,
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Raw METAR/SPECI reports to decode
    ///
    /// When no reports are given, reads reports one per line from stdin.
    /// Stdin lines that do not start with an uppercase letter are skipped,
    /// so annotated archive files can be piped straight through.
    #[arg(value_name = "REPORT")]
    pub reports: Vec<String>,

    /// Observation month (1-12)
    ///
    /// METAR time groups carry only the day of the month; archived reports
    /// need the month they were observed in. Defaults to the current month.
    #[arg(short = 'm', long = "month", value_name = "MONTH")]
    pub month: Option<u32>,

    /// Observation year
    ///
    /// Defaults to the current year.
    #[arg(short = 'y', long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// Output format for decoded reports
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        value_name = "FORMAT"
    )]
    pub format: OutputFormat,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl DecodeArgs {
    /// Get the effective log level based on verbose/quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the decode context from the month/year overrides
    pub fn context(&self) -> Result<DecodeContext> {
        let default = DecodeContext::now();
        DecodeContext::new(
            self.month.unwrap_or(default.month),
            self.year.unwrap_or(default.year),
            default.utc_offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_flags() {
        let mut args = DecodeArgs {
            reports: vec![],
            month: None,
            year: None,
            format: OutputFormat::Text,
            verbose: 0,
            quiet: false,
        };
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_context_rejects_invalid_month() {
        let args = DecodeArgs {
            reports: vec![],
            month: Some(13),
            year: None,
            format: OutputFormat::Text,
            verbose: 0,
            quiet: false,
        };
        assert!(args.context().is_err());
    }

    #[test]
    fn test_context_applies_overrides() {
        let args = DecodeArgs {
            reports: vec![],
            month: Some(7),
            year: Some(1998),
            format: OutputFormat::Json,
            verbose: 0,
            quiet: false,
        };
        let ctx = args.context().unwrap();
        assert_eq!(ctx.month, 7);
        assert_eq!(ctx.year, 1998);
    }
}
