//! Unit-bearing value types for decoded METAR fields
//!
//! Directional bearings, speeds, distances, temperatures and pressures, each
//! carrying a unit and an optional "at least"/"at most" qualifier. Values are
//! constructed from the raw digit groups captured by the grammar and expose
//! unit conversion plus a `string(unit)` formatter for the text renderer.

use crate::{Error, Result};
use serde::Serialize;

/// Qualifier attached to a numeric value
///
/// Coded by a prefix letter in the grammar: `P` marks a value reported as
/// "at least" (sensor maximum exceeded), `M` in runway visual ranges marks
/// "at most". Modeled as a tagged variant rather than a boolean convention so
/// comparison and formatting stay total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Qualifier {
    #[default]
    Exact,
    AtLeast,
    AtMost,
}

impl Qualifier {
    /// Phrase prefix used when formatting a qualified value
    pub fn prefix(self) -> &'static str {
        match self {
            Qualifier::Exact => "",
            Qualifier::AtLeast => "at least ",
            Qualifier::AtMost => "at most ",
        }
    }
}

/// Format a numeric value without a spurious fractional part
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// =============================================================================
// Direction
// =============================================================================

/// The 16-point compass rose, clockwise from north
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// A directional bearing in degrees true
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Direction {
    degrees: f64,
}

impl Direction {
    /// Create a direction from a decoded degree value
    pub fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Create a direction from a 3-digit code group
    pub fn from_code(code: &str) -> Result<Self> {
        let degrees: f64 = code.parse().map_err(|_| {
            Error::configuration(format!("invalid direction code '{}'", code))
        })?;
        Ok(Self { degrees })
    }

    /// The bearing in degrees
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The nearest 16-point compass name for this bearing
    pub fn compass(&self) -> &'static str {
        let sector = ((self.degrees / 22.5) + 0.5).floor() as usize % 16;
        COMPASS_POINTS[sector]
    }
}

// =============================================================================
// Speed
// =============================================================================

/// Units a speed value can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedUnit {
    Knots,
    KilometersPerHour,
    MetersPerSecond,
    MilesPerHour,
}

impl SpeedUnit {
    /// Map a wind-group unit suffix onto a speed unit
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KT" => Some(SpeedUnit::Knots),
            "KMH" => Some(SpeedUnit::KilometersPerHour),
            "MPS" => Some(SpeedUnit::MetersPerSecond),
            "MPH" => Some(SpeedUnit::MilesPerHour),
            _ => None,
        }
    }

    /// Suffix used when formatting a speed in this unit
    pub fn suffix(self) -> &'static str {
        match self {
            SpeedUnit::Knots => "kt",
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MetersPerSecond => "mps",
            SpeedUnit::MilesPerHour => "mph",
        }
    }

    /// Conversion factor from this unit to knots
    fn to_knots(self) -> f64 {
        match self {
            SpeedUnit::Knots => 1.0,
            SpeedUnit::KilometersPerHour => 1.0 / 1.852,
            SpeedUnit::MetersPerSecond => 3600.0 / 1852.0,
            SpeedUnit::MilesPerHour => 1.0 / 1.150779,
        }
    }
}

/// A speed with its unit and qualifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speed {
    value: f64,
    unit: SpeedUnit,
    qualifier: Qualifier,
}

impl Speed {
    /// Create a speed from a decoded value
    pub fn new(value: f64, unit: SpeedUnit, qualifier: Qualifier) -> Self {
        Self {
            value,
            unit,
            qualifier,
        }
    }

    /// Create a speed from a raw digit group (qualifier prefix already stripped)
    pub fn from_code(code: &str, unit: SpeedUnit, qualifier: Qualifier) -> Result<Self> {
        let value: f64 = code
            .parse()
            .map_err(|_| Error::configuration(format!("invalid speed code '{}'", code)))?;
        Ok(Self {
            value,
            unit,
            qualifier,
        })
    }

    /// The value in its native unit
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The native unit
    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    /// The qualifier attached to this value
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    /// The value converted into the requested unit
    pub fn value_in(&self, unit: SpeedUnit) -> f64 {
        self.value * self.unit.to_knots() / unit.to_knots()
    }

    /// Format the speed in the requested unit, or its native unit
    pub fn string(&self, unit: Option<SpeedUnit>) -> String {
        let unit = unit.unwrap_or(self.unit);
        format!(
            "{}{}{}",
            self.qualifier.prefix(),
            format_value(self.value_in(unit)),
            unit.suffix()
        )
    }
}

// =============================================================================
// Distance
// =============================================================================

/// Units a distance value can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    StatuteMiles,
    Feet,
}

impl DistanceUnit {
    /// Unit name used when formatting a distance, pluralized for the value
    fn name(self, value: f64) -> &'static str {
        let singular = value == 1.0;
        match self {
            DistanceUnit::Meters => {
                if singular {
                    "meter"
                } else {
                    "meters"
                }
            }
            DistanceUnit::Kilometers => "km",
            DistanceUnit::StatuteMiles => {
                if singular {
                    "mile"
                } else {
                    "miles"
                }
            }
            DistanceUnit::Feet => {
                if singular {
                    "foot"
                } else {
                    "feet"
                }
            }
        }
    }

    /// Conversion factor from this unit to meters
    fn to_meters(self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::StatuteMiles => 1609.344,
            DistanceUnit::Feet => 0.3048,
        }
    }
}

/// A distance with its unit and qualifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
    qualifier: Qualifier,
}

impl Distance {
    /// Create a distance from a decoded value
    pub fn new(value: f64, unit: DistanceUnit, qualifier: Qualifier) -> Self {
        Self {
            value,
            unit,
            qualifier,
        }
    }

    /// Create a distance from a raw code group
    ///
    /// Handles the `M` ("at most") and `P` ("at least") prefix letters and
    /// the fractional statute-mile forms `1/4` and `1 1/2`. An explicit
    /// qualifier overrides any prefix letter.
    pub fn from_code(
        code: &str,
        unit: DistanceUnit,
        qualifier: Option<Qualifier>,
    ) -> Result<Self> {
        let (prefix_qualifier, digits) = match code.as_bytes().first() {
            Some(b'M') => (Qualifier::AtMost, &code[1..]),
            Some(b'P') => (Qualifier::AtLeast, &code[1..]),
            _ => (Qualifier::Exact, code),
        };
        let value = parse_fractional(digits)
            .ok_or_else(|| Error::configuration(format!("invalid distance code '{}'", code)))?;
        Ok(Self {
            value,
            unit,
            qualifier: qualifier.unwrap_or(prefix_qualifier),
        })
    }

    /// The value in its native unit
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The native unit
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// The qualifier attached to this value
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    /// The value converted into the requested unit
    pub fn value_in(&self, unit: DistanceUnit) -> f64 {
        self.value * self.unit.to_meters() / unit.to_meters()
    }

    /// Format the distance in the requested unit, or its native unit
    pub fn string(&self, unit: Option<DistanceUnit>) -> String {
        let unit = unit.unwrap_or(self.unit);
        let value = self.value_in(unit);
        format!(
            "{}{} {}",
            self.qualifier.prefix(),
            format_value(value),
            unit.name(value)
        )
    }
}

/// Parse a plain, fractional, or mixed number ("1200", "1/4", "1 1/2")
fn parse_fractional(digits: &str) -> Option<f64> {
    let mut total = 0.0;
    for part in digits.split_whitespace() {
        if let Some((numer, denom)) = part.split_once('/') {
            let numer: f64 = numer.parse().ok()?;
            let denom: f64 = denom.parse().ok()?;
            if denom == 0.0 {
                return None;
            }
            total += numer / denom;
        } else {
            total += part.parse::<f64>().ok()?;
        }
    }
    if digits.trim().is_empty() {
        None
    } else {
        Some(total)
    }
}

// =============================================================================
// Temperature
// =============================================================================

/// Units a temperature value can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// A temperature, stored in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    celsius: f64,
}

impl Temperature {
    /// Create a temperature from a decoded Celsius value
    pub fn new(celsius: f64) -> Self {
        Self { celsius }
    }

    /// Create a temperature from a body group code (`M` prefix = negative)
    pub fn from_code(code: &str) -> Result<Self> {
        let (sign, digits) = match code.strip_prefix('M') {
            Some(rest) => (-1.0, rest),
            None => (1.0, code),
        };
        let value: f64 = digits
            .parse()
            .map_err(|_| Error::configuration(format!("invalid temperature code '{}'", code)))?;
        Ok(Self {
            celsius: sign * value,
        })
    }

    /// The value in degrees Celsius
    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    /// The value converted into the requested unit
    pub fn value_in(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Format the temperature in the requested unit
    pub fn string(&self, unit: TemperatureUnit) -> String {
        match unit {
            TemperatureUnit::Celsius => format!("{:.1}C", self.celsius),
            TemperatureUnit::Fahrenheit => {
                format!("{:.1}F", self.value_in(TemperatureUnit::Fahrenheit))
            }
        }
    }
}

// =============================================================================
// Pressure
// =============================================================================

/// Units a pressure value can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureUnit {
    InchesHg,
    Hectopascals,
}

const HPA_PER_INHG: f64 = 33.8639;

/// A barometric pressure with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pressure {
    value: f64,
    unit: PressureUnit,
}

impl Pressure {
    /// Create a pressure from a decoded value
    pub fn new(value: f64, unit: PressureUnit) -> Self {
        Self { value, unit }
    }

    /// The value in its native unit
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The native unit
    pub fn unit(&self) -> PressureUnit {
        self.unit
    }

    /// The value converted into the requested unit
    pub fn value_in(&self, unit: PressureUnit) -> f64 {
        match (self.unit, unit) {
            (a, b) if a == b => self.value,
            (PressureUnit::InchesHg, PressureUnit::Hectopascals) => self.value * HPA_PER_INHG,
            (PressureUnit::Hectopascals, PressureUnit::InchesHg) => self.value / HPA_PER_INHG,
            _ => self.value,
        }
    }

    /// Format the pressure in the requested unit, or its native unit
    pub fn string(&self, unit: Option<PressureUnit>) -> String {
        let unit = unit.unwrap_or(self.unit);
        match unit {
            PressureUnit::InchesHg => format!("{:.2}inHg", self.value_in(unit)),
            PressureUnit::Hectopascals => format!("{:.1}hPa", self.value_in(unit)),
        }
    }
}
