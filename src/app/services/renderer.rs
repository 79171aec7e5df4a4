//! Text renderer for decoded reports
//!
//! One formatting function per field group, consuming the value formatters
//! and the translation tables. Rendering never re-parses raw text; a code
//! that is missing from its table indicates the grammar and tables have
//! drifted apart and surfaces as [`Error::UnknownTableCode`].

use crate::app::models::values::{DistanceUnit, PressureUnit, SpeedUnit, TemperatureUnit};
use crate::app::models::{Report, SkyLayer, WeatherCondition};
use crate::constants;
use crate::{Error, Result};

/// Describe the report type, cycle and modifier
pub fn report_type(report: &Report) -> String {
    let mut text = match report.kind {
        Some(kind) => constants::report_type(kind.code())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} report", kind.code())),
        None => "unknown report type".to_string(),
    };
    if let Some(cycle) = report.cycle {
        text.push_str(&format!(", cycle {}", cycle));
    }
    let modifier = constants::report_type(report.modifier.code())
        .map(str::to_string)
        .unwrap_or_else(|| report.modifier.code().to_string());
    text.push_str(&format!(" ({})", modifier));
    text
}

/// Describe the wind conditions, in the requested unit or the coded one
pub fn wind(report: &Report, unit: Option<SpeedUnit>) -> String {
    let Some(speed) = report.wind_speed else {
        return "missing".to_string();
    };
    if speed.value() == 0.0 {
        return "calm".to_string();
    }

    let speed_text = speed.string(unit);
    // An unset direction renders "variable" even when a variability range
    // was also coded
    let mut text = match (report.wind_dir, report.wind_dir_from, report.wind_dir_to) {
        (None, _, _) => format!("variable at {}", speed_text),
        (Some(_), Some(from), Some(to)) => {
            format!("{} to {} at {}", from.compass(), to.compass(), speed_text)
        }
        (Some(dir), _, _) => format!("{} at {}", dir.compass(), speed_text),
    };
    if let Some(gust) = report.wind_gust {
        text.push_str(&format!(", gusting to {}", gust.string(unit)));
    }
    text
}

/// Describe the visibility, with the maximum visibility as a suffix
pub fn visibility(report: &Report, unit: Option<DistanceUnit>) -> String {
    let Some(vis) = report.visibility else {
        return "missing".to_string();
    };

    let mut text = match report.visibility_dir {
        Some(dir) => format!("{} to {}", vis.string(unit), dir.compass()),
        None => vis.string(unit),
    };
    if let Some(max_vis) = report.max_visibility {
        match report.max_visibility_dir {
            Some(dir) => text.push_str(&format!("; {} to {}", max_vis.string(unit), dir.compass())),
            None => text.push_str(&format!("; {}", max_vis.string(unit))),
        }
    }
    text
}

/// Describe the runway visual ranges, joined with "; "
pub fn runway_visual_range(report: &Report, unit: Option<DistanceUnit>) -> String {
    let lines: Vec<String> = report
        .runway_ranges
        .iter()
        .map(|range| {
            if range.low == range.high {
                format!("runway {}: {}", range.name, range.low.string(unit))
            } else {
                format!(
                    "runway {}: {} to {}",
                    range.name,
                    range.low.string(unit),
                    range.high.string(unit)
                )
            }
        })
        .collect();
    lines.join("; ")
}

/// Phrase for the concatenated precipitation codes of one weather group
fn precipitation_phrase(codes: &str) -> Result<String> {
    let part = |code: &str| -> Result<&'static str> {
        constants::weather_precipitation(code)
            .ok_or_else(|| Error::unknown_table_code("weather precipitation", code))
    };
    Ok(match codes.len() {
        4 => format!("{} and {}", part(&codes[..2])?, part(&codes[2..])?),
        6 => format!(
            "{}, {} and {}",
            part(&codes[..2])?,
            part(&codes[2..4])?,
            part(&codes[4..])?
        ),
        _ => part(codes)?.to_string(),
    })
}

/// Phrase for one present- or recent-weather group
fn weather_phrase(wx: &WeatherCondition) -> Result<String> {
    // Whole-code specials replace the part-by-part phrasing entirely
    let mut code = wx.intensity.clone();
    if let Some(desc) = &wx.descriptor {
        code.push_str(desc);
    }
    code.push_str(&wx.precipitation);
    if let Some(obsc) = &wx.obscuration {
        code.push_str(obsc);
    }
    if let Some(other) = &wx.other {
        code.push_str(other);
    }
    if let Some(special) = constants::weather_special(&code) {
        return Ok(special.to_string());
    }

    let mut parts: Vec<String> = Vec::new();

    if !wx.intensity.is_empty() {
        let phrase = constants::weather_intensity(&wx.intensity)
            .ok_or_else(|| Error::unknown_table_code("weather intensity", &wx.intensity))?;
        parts.push(phrase.to_string());
    }

    let descriptor = wx.descriptor.as_deref();
    if let Some(desc) = descriptor {
        // "showers" reads after its precipitation ("rain showers")
        if desc != "SH" || wx.precipitation.is_empty() {
            let phrase = constants::weather_descriptor(desc)
                .ok_or_else(|| Error::unknown_table_code("weather descriptor", desc))?;
            parts.push(phrase.to_string());
        }
    }

    if !wx.precipitation.is_empty() {
        if descriptor == Some("TS") {
            parts.push("with".to_string());
        }
        let phrase = precipitation_phrase(&wx.precipitation)?;
        if !phrase.is_empty() {
            parts.push(phrase);
        }
        if descriptor == Some("SH") {
            let phrase = constants::weather_descriptor("SH")
                .ok_or_else(|| Error::unknown_table_code("weather descriptor", "SH"))?;
            parts.push(phrase.to_string());
        }
    }

    if let Some(obsc) = &wx.obscuration {
        let phrase = constants::weather_obscuration(obsc)
            .ok_or_else(|| Error::unknown_table_code("weather obscuration", obsc))?;
        parts.push(phrase.to_string());
    }

    if let Some(other) = &wx.other {
        let phrase = constants::weather_other(other)
            .ok_or_else(|| Error::unknown_table_code("weather other", other))?;
        parts.push(phrase.to_string());
    }

    Ok(parts.join(" "))
}

/// Describe the present weather groups, joined with "; "
pub fn present_weather(report: &Report) -> Result<String> {
    weather_list(&report.present_weather)
}

/// Describe the recent weather groups, joined with "; "
pub fn recent_weather(report: &Report) -> Result<String> {
    weather_list(&report.recent_weather)
}

fn weather_list(groups: &[WeatherCondition]) -> Result<String> {
    let phrases: Vec<String> = groups
        .iter()
        .map(weather_phrase)
        .collect::<Result<Vec<_>>>()?;
    Ok(phrases.join("; "))
}

/// Phrase for one sky layer
fn sky_layer_phrase(layer: &SkyLayer) -> Result<String> {
    let cover = constants::sky_cover(&layer.cover)
        .ok_or_else(|| Error::unknown_table_code("sky cover", &layer.cover))?;

    if matches!(layer.cover.as_str(), "SKC" | "CLR" | "NSC") {
        return Ok(cover.to_string());
    }

    let what = match &layer.cloud {
        Some(cloud) => constants::cloud_type(cloud)
            .ok_or_else(|| Error::unknown_table_code("cloud type", cloud))?,
        None if layer.cover != "OVC" && layer.cover != "VV" => "clouds",
        None => "",
    };

    let height = layer.height.map(|h| h.string(None));
    Ok(if layer.cover == "VV" {
        match height {
            Some(height) => format!("{}{}, visibility to {}", cover, what, height),
            None => format!("{}{}", cover, what),
        }
    } else {
        match height {
            Some(height) => format!("{}{} at {}", cover, what, height),
            None => format!("{}{}", cover, what),
        }
    })
}

/// Describe the sky condition layers, joined with the given separator
pub fn sky_conditions(report: &Report, sep: &str) -> Result<String> {
    let phrases: Vec<String> = report
        .sky_layers
        .iter()
        .map(sky_layer_phrase)
        .collect::<Result<Vec<_>>>()?;
    Ok(phrases.join(sep))
}

/// The decoded remark phrases, joined with the given separator
pub fn remarks(report: &Report, sep: &str) -> String {
    report.remarks.join(sep)
}

/// Render the complete multi-line decoded report
pub fn render(report: &Report) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "station: {}",
        report.station_id.as_deref().unwrap_or("unknown")
    ));
    if report.kind.is_some() {
        lines.push(format!("type: {}", report_type(report)));
    }
    if let Some(time) = report.observation_time {
        lines.push(format!("time: {}", time.format("%a %b %e %H:%M:%S %Y")));
    }
    if let Some(temp) = report.temperature {
        lines.push(format!(
            "temperature: {}",
            temp.string(TemperatureUnit::Celsius)
        ));
    }
    if let Some(dewpt) = report.dew_point {
        lines.push(format!(
            "dew point: {}",
            dewpt.string(TemperatureUnit::Celsius)
        ));
    }
    if report.wind_speed.is_some() {
        lines.push(format!("wind: {}", wind(report, None)));
    }
    if report.visibility.is_some() {
        lines.push(format!("visibility: {}", visibility(report, None)));
    }
    if !report.runway_ranges.is_empty() {
        lines.push(format!("visual range: {}", runway_visual_range(report, None)));
    }
    if let Some(pressure) = report.pressure {
        lines.push(format!(
            "pressure: {}",
            pressure.string(Some(PressureUnit::Hectopascals))
        ));
    }
    if !report.present_weather.is_empty() {
        lines.push(format!("weather: {}", present_weather(report)?));
    }
    if !report.sky_layers.is_empty() {
        lines.push(format!("sky: {}", sky_conditions(report, "\n     ")?));
    }
    if !report.recent_weather.is_empty() {
        lines.push(format!("recent weather: {}", recent_weather(report)?));
    }
    if !report.windshear_runways.is_empty() {
        lines.push(format!(
            "wind shear: runway {}",
            report.windshear_runways.join("; runway ")
        ));
    }
    if !report.remarks.is_empty() {
        lines.push("remarks:".to_string());
        lines.push(format!("- {}", remarks(report, "\n- ")));
    }
    if !report.unparsed_remarks.is_empty() {
        lines.push(format!(
            "unparsed remarks: {}",
            report.unparsed_remarks.join(" ")
        ));
    }

    Ok(lines.join("\n"))
}
