//! Integration tests for the full decode-and-render pipeline
//!
//! These tests run complete reports through the public decoder API and check
//! the structured fields and rendered phrases end to end.

use chrono::FixedOffset;
use metar_decoder::app::services::renderer;
use metar_decoder::app::models::values::{DistanceUnit, Qualifier};
use metar_decoder::{DecodeContext, Decoder, Error, Report, ReportKind};

/// Fixed decode context so tests are independent of the wall clock
fn context() -> DecodeContext {
    DecodeContext::new(6, 2019, FixedOffset::east_opt(0).unwrap()).unwrap()
}

fn decode(raw: &str) -> Report {
    Decoder::new().unwrap().decode(raw, &context()).unwrap()
}

#[test]
fn test_routine_fair_weather_report() {
    let report = decode("KJFK 161851Z 18010KT 10SM FEW250 24/18 A3000");

    assert_eq!(report.station_id.as_deref(), Some("KJFK"));
    assert_eq!(report.cycle, Some(19));

    let dir = report.wind_dir.unwrap();
    assert_eq!(dir.degrees(), 180.0);
    let speed = report.wind_speed.unwrap();
    assert_eq!(speed.value(), 10.0);
    assert_eq!(speed.qualifier(), Qualifier::Exact);

    let vis = report.visibility.unwrap();
    assert_eq!(vis.value(), 10.0);
    assert_eq!(vis.unit(), DistanceUnit::StatuteMiles);

    assert_eq!(report.sky_layers.len(), 1);
    assert_eq!(report.sky_layers[0].cover, "FEW");
    assert_eq!(report.sky_layers[0].height.unwrap().value(), 25000.0);

    assert_eq!(report.temperature.unwrap().celsius(), 24.0);
    assert_eq!(report.dew_point.unwrap().celsius(), 18.0);
    assert_eq!(report.pressure.unwrap().value(), 30.00);
}

#[test]
fn test_foggy_automated_report_with_remarks() {
    let report = decode("METAR KORD 161851Z 00000KT 1/4SM FG VV002 18/16 A2992 RMK AO2 SLP132");

    assert_eq!(report.kind, Some(ReportKind::Routine));
    assert_eq!(renderer::wind(&report, None), "calm");
    assert_eq!(report.visibility.unwrap().value(), 0.25);
    assert_eq!(report.sky_layers[0].cover, "VV");
    assert_eq!(report.sky_layers[0].height.unwrap().value(), 200.0);
    assert_eq!(
        report.remarks,
        vec![
            "Automated station (type 2)".to_string(),
            "sea-level pressure 1013.2hPa".to_string(),
        ]
    );
}

#[test]
fn test_special_report_with_peak_wind_remark() {
    let report = decode("SPECI KLAX 162353Z 27015G25KT 5SM RMK PK WND 28030/2340");

    assert_eq!(report.kind, Some(ReportKind::Special));
    assert_eq!(report.wind_gust.unwrap().value(), 25.0);
    assert_eq!(report.wind_gust.unwrap().qualifier(), Qualifier::Exact);
    assert_eq!(
        report.remarks,
        vec!["peak wind 30kt from 280 degrees at 23:40".to_string()]
    );
}

#[test]
fn test_unrecognized_body_token_fails_the_decode() {
    let result = Decoder::new()
        .unwrap()
        .decode("KJFK 161851Z 18010KT QWERTY12345", &context());
    match result {
        Err(Error::UnparsedBodyGroup { remainder, raw }) => {
            assert_eq!(remainder, "QWERTY12345");
            assert!(raw.contains("KJFK"));
        }
        other => panic!("expected UnparsedBodyGroup, got {:?}", other),
    }
}

#[test]
fn test_cycle_rounding_boundary() {
    let before = decode("KJFK 161844Z 18010KT 10SM CLR 24/18 A3000");
    assert_eq!(before.cycle, Some(18));

    let after = decode("KJFK 161845Z 18010KT 10SM CLR 24/18 A3000");
    assert_eq!(after.cycle, Some(19));

    let late = decode("KJFK 162345Z 18010KT 10SM CLR 24/18 A3000");
    assert_eq!(late.cycle, Some(24));
}

#[test]
fn test_second_visibility_group_becomes_maximum() {
    let report = decode("EDDF 161851Z 21010KT 1500 6000NE BR BKN008 11/10 Q1008");

    assert_eq!(report.visibility.unwrap().value(), 1500.0);
    assert_eq!(report.max_visibility.unwrap().value(), 6000.0);
    assert_eq!(report.max_visibility_dir.unwrap().compass(), "NE");
    assert_eq!(
        renderer::visibility(&report, None),
        "1500 meters; 6000 meters to NE"
    );
}

#[test]
fn test_cumulative_precipitation_phrase_depends_on_cycle() {
    let three_hourly = decode("KJFK 160251Z 18010KT 10SM CLR 24/18 A3000 RMK 60217");
    assert_eq!(
        three_hourly.remarks,
        vec!["3-hour precipitation 2.17in".to_string()]
    );

    let six_hourly = decode("KJFK 160551Z 18010KT 10SM CLR 24/18 A3000 RMK 60217");
    assert_eq!(six_hourly.remarks, vec!["6-hr precip 2.17in".to_string()]);
}

#[test]
fn test_remark_groups_decode_out_of_priority_order() {
    let report = decode(
        "KJFK 161851Z 18010KT 10SM CLR 24/18 A3000 RMK T02440183 WSHFT 2243 FROPA AO2",
    );

    // Hourly temperature overrides the whole-degree body values
    assert_eq!(report.temperature.unwrap().celsius(), 24.4);
    assert_eq!(report.dew_point.unwrap().celsius(), 18.3);
    assert!(report.remarks.contains(&"wind shift at 22:43 (front)".to_string()));
    assert!(report.remarks.contains(&"Automated station (type 2)".to_string()));
    assert!(report.unparsed_remarks.is_empty());
}

#[test]
fn test_trend_forecast_is_discarded_up_to_remarks() {
    let report =
        decode("EGLL 161851Z 21010KT 9999 SCT030 12/08 Q1013 TEMPO 2000 SHRA RMK AO2");

    // The trend body must not leak into visibility or weather fields
    assert_eq!(report.visibility.unwrap().value(), 10000.0);
    assert!(report.max_visibility.is_none());
    assert!(report.present_weather.is_empty());
    assert_eq!(report.remarks, vec!["Automated station (type 2)".to_string()]);
}

#[test]
fn test_rendered_report_text() {
    let report = decode("METAR KJFK 161851Z 18010KT 10SM FEW250 24/18 A3000 RMK AO2");
    let text = renderer::render(&report).unwrap();

    assert!(text.contains("station: KJFK"));
    assert!(text.contains("type: routine report, cycle 19 (automatic)"));
    assert!(text.contains("temperature: 24.0C"));
    assert!(text.contains("dew point: 18.0C"));
    assert!(text.contains("wind: S at 10kt"));
    assert!(text.contains("visibility: 10 miles"));
    assert!(text.contains("sky: a few clouds at 25000 feet"));
    assert!(text.contains("- Automated station (type 2)"));
}

#[test]
fn test_json_serialization_of_decoded_report() {
    let report = decode("KJFK 161851Z 18010KT 10SM FEW250 24/18 A3000");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["station_id"], "KJFK");
    assert_eq!(json["cycle"], 19);
    assert!(json["sky_layers"].as_array().unwrap().len() == 1);
}

#[test]
fn test_whitespace_normalization_and_idempotent_raw() {
    let report = decode("  KJFK 161851Z  18010KT   10SM CLR 24/18 A3000  ");
    assert_eq!(report.raw, "KJFK 161851Z  18010KT   10SM CLR 24/18 A3000");
    assert_eq!(report.station_id.as_deref(), Some("KJFK"));
    assert_eq!(report.pressure.unwrap().value(), 30.00);
}
