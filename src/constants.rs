//! Static translation tables for METAR codes
//!
//! This module contains the immutable code-to-phrase mappings used by the
//! remarks decoder and the text renderer. The tables are exhaustive over the
//! grammar's legal codes: a missing key indicates the grammar and tables have
//! drifted apart, which callers surface as an internal-consistency fault.

// =============================================================================
// Report Type and Modifier Phrases
// =============================================================================

/// Translate a report type or modifier code into its English phrase
pub fn report_type(code: &str) -> Option<&'static str> {
    match code {
        "METAR" => Some("routine report"),
        "SPECI" => Some("special report"),
        "AUTO" => Some("automatic"),
        "COR" => Some("manually corrected"),
        "RTD" => Some("RTD"),
        "CCA" => Some("CCA"),
        _ => None,
    }
}

// =============================================================================
// Sky Condition Tables
// =============================================================================

/// Translate a sky cover code into its English phrase
///
/// Partial-cover phrases carry a trailing space so the renderer can append
/// the cloud description directly ("a few clouds", "broken clouds").
pub fn sky_cover(code: &str) -> Option<&'static str> {
    match code {
        "SKC" | "CLR" | "NSC" => Some("clear"),
        "FEW" => Some("a few "),
        "SCT" => Some("scattered "),
        "BKN" => Some("broken "),
        "OVC" => Some("overcast"),
        "VV" => Some("indefinite ceiling"),
        _ => None,
    }
}

/// Translate a cloud type code into its English name
pub fn cloud_type(code: &str) -> Option<&'static str> {
    match code {
        "TCU" => Some("towering cumulus"),
        "CU" => Some("cumulus"),
        "CB" => Some("cumulonimbus"),
        "SC" => Some("stratocumulus"),
        "CBMAM" => Some("cumulonimbus mammatus"),
        "ACC" => Some("altocumulus castellanus"),
        "SCSL" => Some("standing lenticular stratocumulus"),
        "CCSL" => Some("standing lenticular cirrocumulus"),
        "ACSL" => Some("standing lenticular altocumulus"),
        _ => None,
    }
}

// =============================================================================
// Present-Weather Tables
// =============================================================================

/// Translate a weather intensity/proximity prefix into its English phrase
pub fn weather_intensity(code: &str) -> Option<&'static str> {
    match code {
        "-" => Some("light"),
        "+" => Some("heavy"),
        "-VC" => Some("nearby light"),
        "+VC" => Some("nearby heavy"),
        "VC" => Some("nearby"),
        _ => None,
    }
}

/// Translate a weather descriptor code into its English phrase
pub fn weather_descriptor(code: &str) -> Option<&'static str> {
    match code {
        "MI" => Some("shallow"),
        "PR" => Some("partial"),
        "BC" => Some("patches of"),
        "DR" => Some("low drifting"),
        "BL" => Some("blowing"),
        "SH" => Some("showers"),
        "TS" => Some("thunderstorm"),
        "FZ" => Some("freezing"),
        _ => None,
    }
}

/// Translate a two-letter precipitation code into its English name
pub fn weather_precipitation(code: &str) -> Option<&'static str> {
    match code {
        "DZ" => Some("drizzle"),
        "RA" => Some("rain"),
        "SN" => Some("snow"),
        "SG" => Some("snow grains"),
        "IC" => Some("ice crystals"),
        "PL" => Some("ice pellets"),
        "GR" => Some("hail"),
        "GS" => Some("snow pellets"),
        "UP" => Some("unknown precipitation"),
        "//" => Some(""),
        _ => None,
    }
}

/// Translate an obscuration code into its English name
pub fn weather_obscuration(code: &str) -> Option<&'static str> {
    match code {
        "BR" => Some("mist"),
        "FG" => Some("fog"),
        "FU" => Some("smoke"),
        "VA" => Some("volcanic ash"),
        "DU" => Some("dust"),
        "SA" => Some("sand"),
        "HZ" => Some("haze"),
        "PY" => Some("spray"),
        _ => None,
    }
}

/// Translate an "other phenomena" code into its English name
pub fn weather_other(code: &str) -> Option<&'static str> {
    match code {
        "PO" => Some("sand whirls"),
        "SQ" => Some("squalls"),
        "FC" => Some("funnel cloud"),
        "SS" => Some("sandstorm"),
        "DS" => Some("dust storm"),
        _ => None,
    }
}

/// Whole-code special weather phrases that replace the part-by-part phrasing
pub fn weather_special(code: &str) -> Option<&'static str> {
    match code {
        "+FC" => Some("tornado"),
        _ => None,
    }
}

// =============================================================================
// Colour Codes
// =============================================================================

/// Translate a military colour state code into its English name
pub fn color_name(code: &str) -> Option<&'static str> {
    match code {
        "BLU" => Some("blue"),
        "GRN" => Some("green"),
        "WHT" => Some("white"),
        _ => None,
    }
}

// =============================================================================
// Remark Tables
// =============================================================================

/// The nine canonical 3-hour pressure tendency phrases, indexed by code digit
pub fn pressure_tendency(code: &str) -> Option<&'static str> {
    match code {
        "0" => Some("increasing, then decreasing"),
        "1" => Some("increasing more slowly"),
        "2" => Some("increasing"),
        "3" => Some("increasing more quickly"),
        "4" => Some("steady"),
        "5" => Some("decreasing, then increasing"),
        "6" => Some("decreasing more slowly"),
        "7" => Some("decreasing"),
        "8" => Some("decreasing more quickly"),
        _ => None,
    }
}

/// Translate a lightning frequency code into its English phrase
pub fn lightning_frequency(code: &str) -> Option<&'static str> {
    match code {
        "OCNL" => Some("occasional"),
        "FRQ" => Some("frequent"),
        "CONS" => Some("constant"),
        _ => None,
    }
}

/// Translate a two-letter lightning type code into its English phrase
pub fn lightning_type(code: &str) -> Option<&'static str> {
    match code {
        "IC" => Some("intracloud"),
        "CC" => Some("cloud-to-cloud"),
        "CG" => Some("cloud-to-ground"),
        "CA" => Some("cloud-to-air"),
        _ => None,
    }
}

/// Weather location term substitutions, applied in order
///
/// Order matters: every term must be substituted before shorter overlapping
/// fragments could shadow it.
pub const LOCATION_TERMS: &[(&str, &str)] = &[
    ("OHD", "overhead"),
    ("DSNT", "distant"),
    ("AND", "and"),
    ("VC", "nearby"),
];

/// Substitute English terms for the location codes in a remark location run
pub fn translate_location(loc: &str) -> String {
    let mut text = loc.to_string();
    for (code, english) in LOCATION_TERMS {
        text = text.replace(code, english);
    }
    text
}
