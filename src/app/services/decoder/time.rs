//! Temporal resolution of the coded observation time
//!
//! A METAR time group carries only day-of-month, hour and minute; the month
//! and year come from the decode context. No leap or overflow adjustment is
//! performed: a day that does not exist in the supplied month fails with
//! `InvalidTimestamp`.

use chrono::{NaiveDate, NaiveDateTime};

use super::DecodeContext;
use crate::{Error, Result};

/// Minute threshold at which an observation rounds up to the next cycle
const CYCLE_ROUNDUP_MINUTE: u32 = 45;

/// Resolve the coded day/hour/minute into an absolute timestamp and cycle
///
/// The cycle is the reporting hour the observation is associated with: the
/// coded hour, rounded up when the minute reaches 45. The result is NOT
/// clamped, so a 23:45 observation yields cycle 24; such reports are rare
/// but observed in the wild, and downstream consumers see the raw value.
pub fn resolve(
    day: u32,
    hour: u32,
    minute: u32,
    ctx: &DecodeContext,
) -> Result<(NaiveDateTime, u32)> {
    let date = NaiveDate::from_ymd_opt(ctx.year, ctx.month, day).ok_or_else(|| {
        Error::invalid_timestamp(format!(
            "day {} does not exist in {}-{:02}",
            day, ctx.year, ctx.month
        ))
    })?;

    let timestamp = date.and_hms_opt(hour, minute, 0).ok_or_else(|| {
        Error::invalid_timestamp(format!("invalid time of day {:02}:{:02}", hour, minute))
    })?;

    let cycle = if minute < CYCLE_ROUNDUP_MINUTE {
        hour
    } else {
        hour + 1
    };

    Ok((timestamp, cycle))
}
