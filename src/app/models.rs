//! Data models for decoded METAR reports
//!
//! This module contains the `Report` aggregate produced by one decode call,
//! together with the enumerations and repeated-group records it owns. A
//! report is constructed fresh per decode, populated by the body pipeline and
//! the remarks loop, and immutable thereafter.

pub mod values;

use chrono::NaiveDateTime;
use serde::Serialize;

use values::{Direction, Distance, Pressure, Speed, Temperature};

/// The kind of observation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    /// METAR: routine scheduled observation
    Routine,
    /// SPECI: special unscheduled observation
    Special,
}

impl ReportKind {
    /// Map a report kind token onto its variant
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "METAR" => Some(ReportKind::Routine),
            "SPECI" => Some(ReportKind::Special),
            _ => None,
        }
    }

    /// The coded token for this kind
    pub fn code(self) -> &'static str {
        match self {
            ReportKind::Routine => "METAR",
            ReportKind::Special => "SPECI",
        }
    }
}

/// The report modifier group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Modifier {
    /// AUTO: fully automated report (the default when no modifier is coded)
    #[default]
    Automatic,
    /// COR: corrected report
    Corrected,
    /// RTD: routine delayed report
    Delayed,
    /// CCA: manually corrected report
    ManualCorrection,
}

impl Modifier {
    /// Map a modifier token onto its variant
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AUTO" => Some(Modifier::Automatic),
            "COR" => Some(Modifier::Corrected),
            "RTD" => Some(Modifier::Delayed),
            "CCA" => Some(Modifier::ManualCorrection),
            _ => None,
        }
    }

    /// The coded token for this modifier
    pub fn code(self) -> &'static str {
        match self {
            Modifier::Automatic => "AUTO",
            Modifier::Corrected => "COR",
            Modifier::Delayed => "RTD",
            Modifier::ManualCorrection => "CCA",
        }
    }
}

/// One decoded present- or recent-weather group
///
/// The precipitation code string concatenates up to three two-letter
/// precipitation types, so it holds 0, 2, 4 or 6 characters. Recent-weather
/// groups carry no intensity prefix and store an empty intensity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherCondition {
    /// Intensity/proximity prefix codes, concatenated ("", "-", "+", "VC", ...)
    pub intensity: String,
    /// Descriptor code (MI, PR, BC, DR, BL, SH, TS, FZ)
    pub descriptor: Option<String>,
    /// Concatenated two-letter precipitation codes (may be empty)
    pub precipitation: String,
    /// Obscuration code (BR, FG, FU, VA, DU, SA, HZ, PY)
    pub obscuration: Option<String>,
    /// Other-phenomena code (PO, SQ, FC, SS, DS, NSW)
    pub other: Option<String>,
}

/// One decoded sky-condition layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyLayer {
    /// Cover code (VV, CLR, SKC, NSC, BKN, SCT, FEW, OVC)
    pub cover: String,
    /// Layer height; unset when the coded height is missing or `///`
    pub height: Option<Distance>,
    /// Cloud type code (CB, TCU, ...)
    pub cloud: Option<String>,
}

/// One decoded runway visual range group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunwayRange {
    /// Runway designator (e.g. "04R")
    pub name: String,
    /// Low end of the visual range
    pub low: Distance,
    /// High end of the visual range; equals `low` when no variability is coded
    pub high: Distance,
}

/// The aggregate result of decoding one observation report
///
/// Fields are set at most once by the body pipeline, except the naturally
/// repeated groups (visibility/maximum visibility, sky layers, weather,
/// runway ranges, remarks). A remark-group hourly temperature overrides the
/// body temperature and dew point, since remarks carry higher precision.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// The original raw report text
    pub raw: String,

    /// Report kind (METAR/SPECI); unset when no kind token is coded
    pub kind: Option<ReportKind>,

    /// Report modifier; defaults to automatic
    pub modifier: Modifier,

    /// 4-character station identifier
    pub station_id: Option<String>,

    /// Absolute observation timestamp resolved from the coded day/hour/minute
    pub observation_time: Option<NaiveDateTime>,

    /// Reporting cycle (0-24): the coded hour, rounded up when minute >= 45
    pub cycle: Option<u32>,

    /// Wind direction; unset for variable (`VRB`) or missing (`///`) directions
    pub wind_dir: Option<Direction>,

    /// Wind speed; may carry an "at least" qualifier
    pub wind_speed: Option<Speed>,

    /// Wind gust speed; may carry an "at least" qualifier
    pub wind_gust: Option<Speed>,

    /// Start of the variable wind direction range
    pub wind_dir_from: Option<Direction>,

    /// End of the variable wind direction range
    pub wind_dir_to: Option<Direction>,

    /// Primary (first-coded) visibility
    pub visibility: Option<Distance>,

    /// Direction qualifier on the primary visibility
    pub visibility_dir: Option<Direction>,

    /// Maximum (second-coded) visibility
    pub max_visibility: Option<Distance>,

    /// Direction qualifier on the maximum visibility
    pub max_visibility_dir: Option<Direction>,

    /// Temperature in Celsius
    pub temperature: Option<Temperature>,

    /// Dew point in Celsius
    pub dew_point: Option<Temperature>,

    /// Barometric pressure (inches of mercury or hectopascals)
    pub pressure: Option<Pressure>,

    /// Runway visual ranges in order of appearance
    pub runway_ranges: Vec<RunwayRange>,

    /// Present weather groups in order of appearance
    pub present_weather: Vec<WeatherCondition>,

    /// Recent weather groups in order of appearance
    pub recent_weather: Vec<WeatherCondition>,

    /// Sky condition layers in order of appearance
    pub sky_layers: Vec<SkyLayer>,

    /// Runways with reported wind shear; the sentinel "ALL" covers every runway
    pub windshear_runways: Vec<String>,

    /// Decoded remark phrases in order of appearance
    pub remarks: Vec<String>,

    /// Remark tokens no remark pattern matched
    pub unparsed_remarks: Vec<String>,
}

impl Report {
    /// Create an empty report for the given raw text
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }
}
