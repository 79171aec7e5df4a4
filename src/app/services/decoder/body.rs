//! Ordered group pipeline for the report body
//!
//! Body groups appear in a canonical grammar order, so the pipeline is a
//! single ordered list of extractors. Each extractor is retried against the
//! shrinking remainder until it yields no match, then the next extractor is
//! tried; group order encodes grammar position, not just shape. A second
//! visibility-shaped match is the "maximum visibility" group purely because
//! it is the visibility extractor's second hit.

use regex::Captures;
use tracing::debug;

use super::{DecodeContext, time};
use crate::app::models::values::{
    Direction, Distance, DistanceUnit, Pressure, PressureUnit, Qualifier, Speed, SpeedUnit,
    Temperature,
};
use crate::app::models::{Modifier, Report, ReportKind, RunwayRange, SkyLayer, WeatherCondition};
use crate::app::services::grammar::GrammarCatalog;
use crate::{Error, Result};

/// One body-group extractor: yields the consumed byte count, or `None`
/// when the group is absent at the cursor (absence is not an error)
type Extractor = fn(&GrammarCatalog, &mut Report, &str, &DecodeContext) -> Result<Option<usize>>;

/// The body extractors in grammar order
const EXTRACTORS: &[(&str, Extractor)] = &[
    ("report_kind", extract_kind),
    ("station", extract_station),
    ("time", extract_time),
    ("modifier", extract_modifier),
    ("wind", extract_wind),
    ("visibility", extract_visibility),
    ("runway", extract_runway),
    ("weather", extract_weather),
    ("sky", extract_sky),
    ("temperature", extract_temperature),
    ("pressure", extract_pressure),
    ("recent_weather", extract_recent_weather),
    ("windshear", extract_windshear),
    ("color", extract_color),
    ("trend", extract_trend),
];

/// Run the ordered pipeline over the report body
///
/// Returns the unconsumed remainder (the remarks trailer, or leftover text
/// the caller must treat as a decode failure).
pub fn decode_body<'a>(
    catalog: &GrammarCatalog,
    report: &mut Report,
    mut code: &'a str,
    ctx: &DecodeContext,
) -> Result<&'a str> {
    for (name, extract) in EXTRACTORS.iter().copied() {
        loop {
            match extract(catalog, report, code, ctx)? {
                Some(consumed) => {
                    debug!(group = name, matched = code[..consumed].trim_end(), "body group");
                    code = &code[consumed..];
                }
                None => break,
            }
        }
    }
    Ok(code)
}

/// Consumed length of an anchored match (group 0 starts at the cursor)
fn span(caps: &Captures) -> usize {
    caps[0].len()
}

/// Parse a digit group the grammar guarantees to be numeric
fn parse_num<T: std::str::FromStr>(digits: &str) -> Result<T> {
    digits
        .parse()
        .map_err(|_| Error::configuration(format!("invalid numeric group '{}'", digits)))
}

fn extract_kind(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.report_kind.captures(code) else {
        return Ok(None);
    };
    report.kind = ReportKind::from_code(&caps["kind"]);
    Ok(Some(span(&caps)))
}

fn extract_station(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.station.captures(code) else {
        return Ok(None);
    };
    report.station_id = Some(caps["station"].to_string());
    Ok(Some(span(&caps)))
}

fn extract_time(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.time.captures(code) else {
        return Ok(None);
    };
    let day: u32 = parse_num(&caps["day"])?;
    let hour: u32 = parse_num(&caps["hour"])?;
    let minute: u32 = parse_num(&caps["min"])?;
    let (timestamp, cycle) = time::resolve(day, hour, minute, ctx)?;
    report.observation_time = Some(timestamp);
    report.cycle = Some(cycle);
    Ok(Some(span(&caps)))
}

fn extract_modifier(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.modifier.captures(code) else {
        return Ok(None);
    };
    if let Some(modifier) = Modifier::from_code(&caps["mod"]) {
        report.modifier = modifier;
    }
    Ok(Some(span(&caps)))
}

/// Decode a speed group, handling the `P` ("at least") prefix and the
/// missing-value sentinel `//`
fn decode_speed(code: &str, unit: SpeedUnit) -> Result<Option<Speed>> {
    if code == "//" {
        return Ok(None);
    }
    let (digits, qualifier) = match code.strip_prefix('P') {
        Some(rest) => (rest, Qualifier::AtLeast),
        None => (code, Qualifier::Exact),
    };
    Ok(Some(Speed::from_code(digits, unit, qualifier)?))
}

fn extract_wind(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.wind.captures(code) else {
        return Ok(None);
    };

    let dir = &caps["dir"];
    if dir != "VRB" && dir != "///" {
        report.wind_dir = Some(Direction::from_code(dir)?);
    }

    let unit = SpeedUnit::from_code(&caps["unit"])
        .ok_or_else(|| Error::unknown_table_code("wind speed unit", &caps["unit"]))?;
    report.wind_speed = decode_speed(&caps["speed"], unit)?;
    if let Some(gust) = caps.name("gust") {
        report.wind_gust = decode_speed(gust.as_str(), unit)?;
    }

    if let Some(varfrom) = caps.name("varfrom") {
        report.wind_dir_from = Some(Direction::from_code(varfrom.as_str())?);
        report.wind_dir_to = Some(Direction::from_code(&caps["varto"])?);
    }

    Ok(Some(span(&caps)))
}

fn extract_visibility(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.visibility.captures(code) else {
        return Ok(None);
    };

    let mut vis = caps["vis"].to_string();
    let mut unit = DistanceUnit::Meters;
    let mut qualifier = None;

    // A trailing compass letter only occurs on the 4-digit meters form
    let dir = caps.name("visdir").map(|m| m.as_str());
    if dir.is_some() {
        vis.truncate(4);
    }

    if let Some(stripped) = vis.strip_suffix("SM") {
        unit = DistanceUnit::StatuteMiles;
        vis = stripped.to_string();
    } else if let Some(stripped) = vis.strip_suffix("KM") {
        unit = DistanceUnit::Kilometers;
        vis = stripped.to_string();
    } else if vis == "CAVOK" || vis == "9999" {
        // Both code an unbounded visibility, normalized to 10 km
        vis = "10000".to_string();
        qualifier = Some(Qualifier::AtLeast);
    }

    let distance = Distance::from_code(&vis, unit, qualifier)?;
    let direction = dir.map(Direction::from_code).transpose()?;

    // First hit is the primary visibility, second the maximum
    if report.visibility.is_some() {
        report.max_visibility = Some(distance);
        report.max_visibility_dir = direction;
    } else {
        report.visibility = Some(distance);
        report.visibility_dir = direction;
    }

    Ok(Some(span(&caps)))
}

fn extract_runway(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.runway.captures(code) else {
        return Ok(None);
    };

    let unit = if caps.name("unit").is_some() {
        DistanceUnit::Feet
    } else {
        DistanceUnit::Meters
    };
    let low = Distance::from_code(&caps["low"], unit, None)?;
    let high = match caps.name("high") {
        Some(high) => Distance::from_code(high.as_str(), unit, None)?,
        None => low,
    };

    report.runway_ranges.push(RunwayRange {
        name: caps["name"].to_string(),
        low,
        high,
    });
    Ok(Some(span(&caps)))
}

/// Build a weather condition from the shared weather capture groups
fn weather_condition(caps: &Captures, intensity: String) -> WeatherCondition {
    WeatherCondition {
        intensity,
        descriptor: caps.name("desc").map(|m| m.as_str().to_string()),
        precipitation: caps
            .name("prec")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        obscuration: caps.name("obsc").map(|m| m.as_str().to_string()),
        other: caps.name("other").map(|m| m.as_str().to_string()),
    }
}

fn extract_weather(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.weather.captures(code) else {
        return Ok(None);
    };
    let intensity = caps["int"].to_string();
    report
        .present_weather
        .push(weather_condition(&caps, intensity));
    Ok(Some(span(&caps)))
}

fn extract_sky(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.sky.captures(code) else {
        return Ok(None);
    };

    let height = match caps.name("height") {
        Some(height) if height.as_str() != "///" => {
            let hundreds: f64 = parse_num(height.as_str())?;
            Some(Distance::new(
                hundreds * 100.0,
                DistanceUnit::Feet,
                Qualifier::Exact,
            ))
        }
        _ => None,
    };

    report.sky_layers.push(SkyLayer {
        cover: caps["cover"].to_string(),
        height,
        cloud: caps.name("cloud").map(|m| m.as_str().to_string()),
    });
    Ok(Some(span(&caps)))
}

fn extract_temperature(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.temperature.captures(code) else {
        return Ok(None);
    };
    if &caps["temp"] != "//" {
        report.temperature = Some(Temperature::from_code(&caps["temp"])?);
    }
    if let Some(dewpt) = caps.name("dewpt") {
        if dewpt.as_str() != "//" {
            report.dew_point = Some(Temperature::from_code(dewpt.as_str())?);
        }
    }
    Ok(Some(span(&caps)))
}

fn extract_pressure(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.pressure.captures(code) else {
        return Ok(None);
    };
    if &caps["press"] != "////" {
        let value: f64 = parse_num(&caps["press"])?;
        report.pressure = Some(match &caps["unit"] {
            // Altimeter settings code hundredths of inches of mercury
            "A" => Pressure::new(value / 100.0, PressureUnit::InchesHg),
            _ => Pressure::new(value, PressureUnit::Hectopascals),
        });
    }
    Ok(Some(span(&caps)))
}

fn extract_recent_weather(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.recent_weather.captures(code) else {
        return Ok(None);
    };
    report
        .recent_weather
        .push(weather_condition(&caps, String::new()));
    Ok(Some(span(&caps)))
}

fn extract_windshear(
    catalog: &GrammarCatalog,
    report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.windshear.captures(code) else {
        return Ok(None);
    };
    let runway = match caps.name("name") {
        Some(name) => name.as_str().to_string(),
        None => "ALL".to_string(),
    };
    report.windshear_runways.push(runway);
    Ok(Some(span(&caps)))
}

fn extract_color(
    catalog: &GrammarCatalog,
    _report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    // Colour state groups are consumed and discarded so later extractors
    // are not blocked; they populate no field
    let Some(caps) = catalog.color.captures(code) else {
        return Ok(None);
    };
    Ok(Some(span(&caps)))
}

fn extract_trend(
    catalog: &GrammarCatalog,
    _report: &mut Report,
    code: &str,
    _ctx: &DecodeContext,
) -> Result<Option<usize>> {
    let Some(caps) = catalog.trend.captures(code) else {
        return Ok(None);
    };
    let mut end = span(&caps);

    // Trend forecast bodies are out of scope: everything up to the remarks
    // marker is consumed and discarded, except after NOSIG which stands alone
    if &caps["trend"] != "NOSIG" {
        loop {
            let rest = &code[end..];
            if rest.is_empty() || rest.starts_with("RMK") {
                break;
            }
            match rest.find(char::is_whitespace) {
                Some(token_end) => {
                    let after_token = &rest[token_end..];
                    let whitespace = after_token.len() - after_token.trim_start().len();
                    end += token_end + whitespace;
                }
                None => {
                    end = code.len();
                    break;
                }
            }
        }
    }

    Ok(Some(end))
}
