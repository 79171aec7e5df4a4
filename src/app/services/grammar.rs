//! Grammar catalog for METAR body and remark groups
//!
//! One compiled regular expression per grammar group, each anchored at the
//! cursor (`^`) and consuming its own trailing whitespace. The catalog is
//! compiled once and shared read-only across decode calls; the decoder
//! modules own the order in which the patterns are tried.

use regex::Regex;

use crate::{Error, Result};

/// The compiled pattern set for every body and remark group
#[derive(Debug)]
pub struct GrammarCatalog {
    // Body groups, in pipeline order
    pub report_kind: Regex,
    pub station: Regex,
    pub time: Regex,
    pub modifier: Regex,
    pub wind: Regex,
    pub visibility: Regex,
    pub runway: Regex,
    pub weather: Regex,
    pub sky: Regex,
    pub temperature: Regex,
    pub pressure: Regex,
    pub recent_weather: Regex,
    pub windshear: Regex,
    pub color: Regex,
    pub trend: Regex,

    // Remark groups, in priority order
    pub auto_station: Regex,
    pub sea_level_pressure: Regex,
    pub peak_wind: Regex,
    pub wind_shift: Regex,
    pub lightning: Regex,
    pub thunderstorm_location: Regex,
    pub temp_1hr: Regex,
    pub precip_1hr: Regex,
    pub precip_cumulative: Regex,
    pub press_3hr: Regex,
    pub temp_6hr: Regex,
    pub temp_24hr: Regex,
    pub unparsed: Regex,
}

impl GrammarCatalog {
    /// Compile the full pattern set
    pub fn new() -> Result<Self> {
        Ok(Self {
            report_kind: compile(r"^(?P<kind>METAR|SPECI)\s+")?,
            station: compile(r"^(?P<station>[A-Z][A-Z0-9]{3})\s+")?,
            time: compile(r"^(?P<day>\d\d)(?P<hour>\d\d)(?P<min>\d\d)Z\s+")?,
            modifier: compile(r"^(?P<mod>AUTO|COR|RTD|CCA)\s+")?,
            wind: compile(
                r"^(?P<dir>\d{3}|///|VRB)(?P<speed>P?\d{2,3}|//)(G(?P<gust>P?\d{2,3}))?(?P<unit>KT|KMH|MPS)(\s+(?P<varfrom>\d{3})V(?P<varto>\d{3}))?\s+",
            )?,
            visibility: compile(
                r"^(?P<vis>M?\d+(SM|KM)|M?(\d\s+)?\d/\d\d?SM|\d{4}(?P<visdir>[NSEW][EW]?)?|CAVOK)\s+",
            )?,
            runway: compile(
                r"^R(?P<name>\d\d(RR?|LL?|C)?)/(?P<low>[MP]?\d{4})(V(?P<high>[MP]?\d{4}))?(?P<unit>FT)?[/NDU]*\s+",
            )?,
            weather: compile(
                r"^(?P<int>(-|\+|VC)*)(?P<desc>MI|PR|BC|DR|BL|SH|TS|FZ)?(?P<prec>(DZ|RA|SN|SG|IC|PL|GR|GS|UP|//)*)(?P<obsc>BR|FG|FU|VA|DU|SA|HZ|PY)?(?P<other>PO|SQ|FC|SS|DS|NSW)?\s+",
            )?,
            sky: compile(
                r"^(?P<cover>VV|CLR|SKC|NSC|BKN|SCT|FEW|OVC)(?P<height>\d{3}|///)?(?P<cloud>[A-Z][A-Z]+)?\s+",
            )?,
            temperature: compile(r"^(?P<temp>M?\d+|//)/(?P<dewpt>M?\d+|//)?\s+")?,
            pressure: compile(r"^(?P<unit>A|Q)(?P<press>\d{4}|////)\s+")?,
            recent_weather: compile(
                r"^RE(?P<desc>MI|PR|BC|DR|BL|SH|TS|FZ)?(?P<prec>(DZ|RA|SN|SG|IC|PL|GR|GS|UP)*)?(?P<obsc>BR|FG|FU|VA|DU|SA|HZ|PY)?(?P<other>PO|SQ|FC|SS|DS)?\s+",
            )?,
            windshear: compile(r"^(WS\s+)?(ALL\s+RWY|RWY(?P<name>\d\d(RR?|L?|C)?))\s+")?,
            color: compile(r"^(BLACK)?(BLU|GRN|WHT|RED)\+?(/?(BLACK)?(BLU|GRN|WHT|RED)\+?)*\s*")?,
            trend: compile(r"^(?P<trend>TEMPO|BECMG|FCST|NOSIG)\s+")?,

            auto_station: compile(r"^AO(?P<type>\d)\s+")?,
            sea_level_pressure: compile(r"^SLP(?P<press>\d{3})\s+")?,
            peak_wind: compile(
                r"^PK\s+WND\s+(?P<dir>\d{3})(?P<speed>P?\d{2,3})/(?P<hour>\d\d)?(?P<min>\d\d)\s+",
            )?,
            wind_shift: compile(r"^WSHFT\s+(?P<hour>\d\d)?(?P<min>\d\d)(\s+(?P<front>FROPA))?\s+")?,
            lightning: compile(
                r"^((?P<freq>OCNL|FRQ|CONS)\s+)?LTG(?P<type>(IC|CC|CG|CA)*)(\s+(?P<loc>(OHD|VC|DSNT\s+|\s+AND\s+|[NSEW][EW]?(-[NSEW][EW]?)*)+))?\s+",
            )?,
            thunderstorm_location: compile(
                r"^TS(\s+(?P<loc>(OHD|VC|DSNT\s+|\s+AND\s+|[NSEW][EW]?(-[NSEW][EW]?)*)+))?(\s+MOV\s+(?P<dir>[NSEW][EW]?))?\s+",
            )?,
            temp_1hr: compile(
                r"^T(?P<tsign>0|1)(?P<temp>\d{3})((?P<dsign>0|1)(?P<dewpt>\d{3}))?\s+",
            )?,
            precip_1hr: compile(r"^P(?P<precip>\d{4})\s+")?,
            precip_cumulative: compile(r"^(?P<type>6|7)(?P<precip>\d{4})\s+")?,
            press_3hr: compile(r"^5(?P<tend>[0-8])(?P<press>\d{3})\s+")?,
            temp_6hr: compile(r"^(?P<type>1|2)(?P<sign>0|1)(?P<temp>\d{3})\s+")?,
            temp_24hr: compile(r"^4(?P<smaxt>0|1)(?P<maxt>\d{3})(?P<smint>0|1)(?P<mint>\d{3})\s+")?,
            unparsed: compile(r"^(?P<group>\S+)\s+")?,
        })
    }
}

/// Compile one pattern, mapping a compile failure to a configuration error
///
/// Patterns are static literals, so a failure here means the catalog itself
/// is broken; surfacing it as an error keeps catalog construction total.
fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::configuration(format!("invalid grammar pattern '{}': {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> GrammarCatalog {
        GrammarCatalog::new().expect("catalog must compile")
    }

    #[test]
    fn test_catalog_compiles() {
        catalog();
    }

    #[test]
    fn test_wind_group_shapes() {
        let c = catalog();
        assert!(c.wind.is_match("18010KT "));
        assert!(c.wind.is_match("27015G25KT "));
        assert!(c.wind.is_match("VRB03KT "));
        assert!(c.wind.is_match("///10KT "));
        assert!(c.wind.is_match("18010KT 150V210 "));
        assert!(c.wind.is_match("210P99MPS "));
        assert!(!c.wind.is_match("KJFK "));
    }

    #[test]
    fn test_visibility_group_shapes() {
        let c = catalog();
        assert!(c.visibility.is_match("10SM "));
        assert!(c.visibility.is_match("1/4SM "));
        assert!(c.visibility.is_match("1 1/2SM "));
        assert!(c.visibility.is_match("M1/4SM "));
        assert!(c.visibility.is_match("9999 "));
        assert!(c.visibility.is_match("2000NE "));
        assert!(c.visibility.is_match("CAVOK "));
        assert!(c.visibility.is_match("5KM "));
    }

    #[test]
    fn test_weather_group_requires_whitespace_after_codes() {
        let c = catalog();
        assert!(c.weather.is_match("-RA "));
        assert!(c.weather.is_match("+TSRA "));
        assert!(c.weather.is_match("FG "));
        // A pressure group must not be mistaken for weather
        assert!(!c.weather.is_match("A3000 "));
    }

    #[test]
    fn test_sky_group_shapes() {
        let c = catalog();
        assert!(c.sky.is_match("FEW250 "));
        assert!(c.sky.is_match("VV002 "));
        assert!(c.sky.is_match("BKN/// "));
        assert!(c.sky.is_match("SCT030CB "));
        assert!(c.sky.is_match("CLR "));
    }

    #[test]
    fn test_runway_group_shapes() {
        let c = catalog();
        assert!(c.runway.is_match("R28L/2600FT "));
        assert!(c.runway.is_match("R04/P6000FT "));
        assert!(c.runway.is_match("R22/0700V1200FT "));
        assert!(c.runway.is_match("R09C/M0300 "));
    }

    #[test]
    fn test_remark_group_shapes() {
        let c = catalog();
        assert!(c.auto_station.is_match("AO2 "));
        assert!(c.sea_level_pressure.is_match("SLP132 "));
        assert!(c.peak_wind.is_match("PK WND 28030/2340 "));
        assert!(c.wind_shift.is_match("WSHFT 2243 FROPA "));
        assert!(c.lightning.is_match("OCNL LTGICCG NE "));
        assert!(c.temp_1hr.is_match("T02330206 "));
        assert!(c.press_3hr.is_match("52032 "));
        assert!(c.temp_24hr.is_match("401231023 "));
    }

    #[test]
    fn test_unparsed_matches_any_token() {
        let c = catalog();
        let caps = c.unparsed.captures("FOO123 BAR ").unwrap();
        assert_eq!(&caps["group"], "FOO123");
    }
}
