//! Decoding engine for METAR and SPECI reports
//!
//! The decoder runs two consumption disciplines over the raw text:
//! - [`body`] - strict ordered pipeline over the report body; each body-group
//!   extractor is retried against the shrinking remainder until it misses,
//!   then the next extractor takes over
//! - [`remarks`] - priority-scan loop over the remarks trailer; after every
//!   match the scan restarts from the top of the priority list, with a
//!   catch-all single-token pattern guaranteeing forward progress
//! - [`time`] - temporal resolution of the coded day/hour/minute against the
//!   externally supplied month/year/UTC-offset context
//!
//! Each decode call is a pure function of (raw text, context) to a completed
//! [`Report`] or a decode failure; the compiled grammar is shared read-only.

pub mod body;
pub mod remarks;
pub mod time;

#[cfg(test)]
mod tests;

use chrono::{Datelike, FixedOffset, Local, Utc};
use tracing::debug;

use crate::app::models::Report;
use crate::app::services::grammar::GrammarCatalog;
use crate::{Error, Result};

/// Externally supplied decode context
///
/// The year and month are implicit in a METAR report, so the caller provides
/// them; the UTC offset feeds the month/year defaults for callers decoding
/// reports relative to local time.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext {
    /// Month the report belongs to (1-12)
    pub month: u32,
    /// Year the report belongs to
    pub year: i32,
    /// Offset between the caller's clock and UTC
    pub utc_offset: FixedOffset,
}

impl DecodeContext {
    /// Create a context with validated month
    pub fn new(month: u32, year: i32, utc_offset: FixedOffset) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::configuration(format!(
                "invalid month {}: must be between 1 and 12",
                month
            )));
        }
        Ok(Self {
            month,
            year,
            utc_offset,
        })
    }

    /// Context for the current month and year in the given offset
    pub fn with_offset(utc_offset: FixedOffset) -> Self {
        let now = Utc::now().with_timezone(&utc_offset);
        Self {
            month: now.month(),
            year: now.year(),
            utc_offset,
        }
    }

    /// Context for the current month and year, using the local UTC offset
    pub fn now() -> Self {
        Self::with_offset(*Local::now().offset())
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::now()
    }
}

/// METAR/SPECI report decoder
///
/// Owns the compiled grammar catalog; decoding holds no other state, so one
/// decoder can be shared across calls (and threads) freely.
#[derive(Debug)]
pub struct Decoder {
    catalog: GrammarCatalog,
}

impl Decoder {
    /// Create a decoder with a freshly compiled grammar catalog
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: GrammarCatalog::new()?,
        })
    }

    /// Decode one raw report line into a populated [`Report`]
    ///
    /// The body pipeline runs first and returns the unconsumed remainder; a
    /// remainder that is neither empty, the remarks trailer, nor excused by a
    /// just-decoded pressure group fails with
    /// [`Error::UnparsedBodyGroup`]. The remarks loop then consumes the
    /// trailer to exhaustion.
    pub fn decode(&self, raw: &str, ctx: &DecodeContext) -> Result<Report> {
        let raw = raw.trim();
        let mut report = Report::new(raw);

        // Every group pattern consumes its own trailing whitespace, so the
        // working buffer carries a sentinel space after the final group.
        let code = format!("{} ", raw);

        let remainder = body::decode_body(&self.catalog, &mut report, &code, ctx)?;
        debug!(remainder, "body pipeline finished");

        // The marker must be the whole token: a fused token like "RMKFOO"
        // is leftover body text, not a remarks trailer. The sentinel space
        // guarantees a trailing-"RMK" report still carries the delimiter.
        if !remainder.is_empty() && !remainder.starts_with("RMK ") && report.pressure.is_none() {
            return Err(Error::unparsed_body_group(raw, remainder.trim_end()));
        }

        remarks::decode_remarks(&self.catalog, &mut report, remainder)?;
        Ok(report)
    }
}
