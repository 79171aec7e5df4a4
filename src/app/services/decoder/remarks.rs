//! Priority-scan decoder for the remarks trailer
//!
//! Remark groups may appear in arbitrary order, so the loop differs from the
//! body pipeline: every iteration scans the fixed priority list from the top
//! and takes the first pattern matching the current cursor. The catch-all
//! single-token pattern records anything unrecognized and guarantees the
//! loop always makes progress.
//!
//! Handlers either override a body field (hourly temperature/dew point) or
//! append a human-readable phrase built from the translation tables.

use chrono::Timelike;
use regex::{Captures, Regex};
use tracing::debug;

use crate::app::models::Report;
use crate::app::models::values::Temperature;
use crate::app::services::grammar::GrammarCatalog;
use crate::constants;
use crate::{Error, Result};

/// One remark-group handler: applies the field override or appends a phrase
type RemarkHandler = fn(&mut Report, &Captures) -> Result<()>;

/// Decode the remarks trailer (everything after the literal `RMK ` marker)
///
/// The marker must stand alone as a token, so a fused token like `RMKFOO`
/// is not a trailer. A remainder without the marker is a no-op: the body
/// pipeline has already decided whether leftover text is an error.
pub fn decode_remarks(catalog: &GrammarCatalog, report: &mut Report, code: &str) -> Result<()> {
    let Some(rest) = code.strip_prefix("RMK ") else {
        return Ok(());
    };
    let mut rest = rest.trim_start();

    // Priority order; the scan restarts here after every match
    let groups: [(&str, &Regex, RemarkHandler); 13] = [
        ("auto_station", &catalog.auto_station, handle_auto_station),
        (
            "sea_level_pressure",
            &catalog.sea_level_pressure,
            handle_sea_level_pressure,
        ),
        ("peak_wind", &catalog.peak_wind, handle_peak_wind),
        ("wind_shift", &catalog.wind_shift, handle_wind_shift),
        ("lightning", &catalog.lightning, handle_lightning),
        (
            "thunderstorm_location",
            &catalog.thunderstorm_location,
            handle_thunderstorm_location,
        ),
        ("temp_1hr", &catalog.temp_1hr, handle_temp_1hr),
        ("precip_1hr", &catalog.precip_1hr, handle_precip_1hr),
        (
            "precip_cumulative",
            &catalog.precip_cumulative,
            handle_precip_cumulative,
        ),
        ("press_3hr", &catalog.press_3hr, handle_press_3hr),
        ("temp_6hr", &catalog.temp_6hr, handle_temp_6hr),
        ("temp_24hr", &catalog.temp_24hr, handle_temp_24hr),
        ("unparsed", &catalog.unparsed, handle_unparsed),
    ];

    'outer: while !rest.is_empty() {
        for (name, pattern, handler) in groups {
            if let Some(caps) = pattern.captures(rest) {
                debug!(group = name, matched = caps[0].trim_end(), "remark group");
                handler(report, &caps)?;
                rest = &rest[caps[0].len()..];
                continue 'outer;
            }
        }
        // Only a remainder without whitespace-delimited structure reaches
        // this point; nothing more can be consumed
        break;
    }
    Ok(())
}

/// Parse a digit group the grammar guarantees to be numeric
fn parse_num<T: std::str::FromStr>(digits: &str) -> Result<T> {
    digits
        .parse()
        .map_err(|_| Error::configuration(format!("invalid numeric group '{}'", digits)))
}

/// Tenths value with a leading sign digit (1 = negative), as coded by the
/// hourly and max/min temperature remark groups
fn signed_tenths(sign: &str, digits: &str) -> Result<f64> {
    let value: f64 = parse_num::<f64>(digits)? / 10.0;
    Ok(if sign == "1" { -value } else { value })
}

fn handle_auto_station(report: &mut Report, caps: &Captures) -> Result<()> {
    match &caps["type"] {
        "1" => report.remarks.push("Automated station".to_string()),
        "2" => report.remarks.push("Automated station (type 2)".to_string()),
        _ => {}
    }
    Ok(())
}

fn handle_sea_level_pressure(report: &mut Report, caps: &Captures) -> Result<()> {
    // The group codes tenths of hectopascals with the leading digits
    // dropped; values below 50.0 fold into the 1000s, the rest into the 900s
    let mut value: f64 = parse_num::<f64>(&caps["press"])? / 10.0;
    if value < 50.0 {
        value += 1000.0;
    } else {
        value += 900.0;
    }
    report
        .remarks
        .push(format!("sea-level pressure {:.1}hPa", value));
    Ok(())
}

fn handle_peak_wind(report: &mut Report, caps: &Captures) -> Result<()> {
    let dir: u32 = parse_num(&caps["dir"])?;
    let speed: u32 = parse_num(caps["speed"].trim_start_matches('P'))?;
    let minute: u32 = parse_num(&caps["min"])?;
    let hour = match caps.name("hour") {
        Some(hour) => parse_num(hour.as_str())?,
        None => observation_hour(report),
    };
    report.remarks.push(format!(
        "peak wind {}kt from {} degrees at {}:{:02}",
        speed, dir, hour, minute
    ));
    Ok(())
}

fn handle_wind_shift(report: &mut Report, caps: &Captures) -> Result<()> {
    let minute: u32 = parse_num(&caps["min"])?;
    let hour = match caps.name("hour") {
        Some(hour) => parse_num(hour.as_str())?,
        None => observation_hour(report),
    };
    let mut text = format!("wind shift at {}:{:02}", hour, minute);
    if caps.name("front").is_some() {
        text.push_str(" (front)");
    }
    report.remarks.push(text);
    Ok(())
}

/// The body observation hour, used when a remark omits its own hour
fn observation_hour(report: &Report) -> u32 {
    report.observation_time.map(|t| t.hour()).unwrap_or(0)
}

fn handle_lightning(report: &mut Report, caps: &Captures) -> Result<()> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(freq) = caps.name("freq") {
        let phrase = constants::lightning_frequency(freq.as_str())
            .ok_or_else(|| Error::unknown_table_code("lightning frequency", freq.as_str()))?;
        parts.push(phrase.to_string());
    }
    parts.push("lightning".to_string());

    let type_codes = &caps["type"];
    if !type_codes.is_empty() {
        let mut types = Vec::new();
        let mut rest = type_codes;
        while !rest.is_empty() {
            let (pair, tail) = rest.split_at(2);
            types.push(
                constants::lightning_type(pair)
                    .ok_or_else(|| Error::unknown_table_code("lightning type", pair))?,
            );
            rest = tail;
        }
        parts.push(format!("({})", types.join(",")));
    }

    if let Some(loc) = caps.name("loc") {
        parts.push(constants::translate_location(loc.as_str().trim_end()));
    }

    report.remarks.push(parts.join(" "));
    Ok(())
}

fn handle_thunderstorm_location(report: &mut Report, caps: &Captures) -> Result<()> {
    let mut text = "thunderstorm".to_string();
    if let Some(loc) = caps.name("loc") {
        text.push(' ');
        text.push_str(&constants::translate_location(loc.as_str().trim_end()));
    }
    if let Some(dir) = caps.name("dir") {
        text.push_str(&format!(" moving {}", dir.as_str()));
    }
    report.remarks.push(text);
    Ok(())
}

fn handle_temp_1hr(report: &mut Report, caps: &Captures) -> Result<()> {
    // Hourly values carry tenths precision and override the body fields
    let temp = signed_tenths(&caps["tsign"], &caps["temp"])?;
    report.temperature = Some(Temperature::new(temp));
    if let Some(dewpt) = caps.name("dewpt") {
        let dewpt = signed_tenths(&caps["dsign"], dewpt.as_str())?;
        report.dew_point = Some(Temperature::new(dewpt));
    }
    Ok(())
}

fn handle_precip_1hr(report: &mut Report, caps: &Captures) -> Result<()> {
    let value: f64 = parse_num::<f64>(&caps["precip"])? / 100.0;
    report.remarks.push(format!("1-hr precip {:.2}in", value));
    Ok(())
}

fn handle_precip_cumulative(report: &mut Report, caps: &Captures) -> Result<()> {
    let value: f64 = parse_num::<f64>(&caps["precip"])? / 100.0;
    let phrase = if &caps["type"] == "6" {
        // A "6" group at a 3-hourly cycle reports only three hours
        if matches!(report.cycle, Some(3 | 9 | 15 | 21)) {
            format!("3-hour precipitation {:.2}in", value)
        } else {
            format!("6-hr precip {:.2}in", value)
        }
    } else {
        format!("24-hr precip {:.2}in", value)
    };
    report.remarks.push(phrase);
    Ok(())
}

fn handle_press_3hr(report: &mut Report, caps: &Captures) -> Result<()> {
    let value: f64 = parse_num::<f64>(&caps["press"])? / 10.0;
    let tendency = constants::pressure_tendency(&caps["tend"])
        .ok_or_else(|| Error::unknown_table_code("pressure tendency", &caps["tend"]))?;
    report.remarks.push(format!(
        "3-hr pressure change {:.1}hPa, {}",
        value, tendency
    ));
    Ok(())
}

fn handle_temp_6hr(report: &mut Report, caps: &Captures) -> Result<()> {
    let value = signed_tenths(&caps["sign"], &caps["temp"])?;
    let phrase = if &caps["type"] == "1" {
        format!("6-hr max temp {:.1}C", value)
    } else {
        format!("6-hr min temp {:.1}C", value)
    };
    report.remarks.push(phrase);
    Ok(())
}

fn handle_temp_24hr(report: &mut Report, caps: &Captures) -> Result<()> {
    let max = signed_tenths(&caps["smaxt"], &caps["maxt"])?;
    let min = signed_tenths(&caps["smint"], &caps["mint"])?;
    report.remarks.push(format!("24-hr max temp {:.1}C", max));
    report.remarks.push(format!("24-hr min temp {:.1}C", min));
    Ok(())
}

fn handle_unparsed(report: &mut Report, caps: &Captures) -> Result<()> {
    report.unparsed_remarks.push(caps["group"].to_string());
    Ok(())
}
