//! Remarks loop tests

use super::decode;

/// A routine body so tests only vary the remarks trailer
fn decode_remarks(trailer: &str) -> crate::app::models::Report {
    decode(&format!(
        "KJFK 161851Z 18010KT 10SM FEW250 22/11 A3001 RMK {}",
        trailer
    ))
}

#[test]
fn test_automated_station_types() {
    assert_eq!(
        decode_remarks("AO1").remarks,
        vec!["Automated station".to_string()]
    );
    assert_eq!(
        decode_remarks("AO2").remarks,
        vec!["Automated station (type 2)".to_string()]
    );
}

#[test]
fn test_sea_level_pressure_folds_into_the_1000s() {
    let report = decode_remarks("SLP132");
    assert_eq!(report.remarks, vec!["sea-level pressure 1013.2hPa".to_string()]);
}

#[test]
fn test_sea_level_pressure_folds_into_the_900s() {
    let report = decode_remarks("SLP982");
    assert_eq!(report.remarks, vec!["sea-level pressure 998.2hPa".to_string()]);
}

#[test]
fn test_peak_wind_with_hour() {
    let report = decode_remarks("PK WND 28045/2215");
    assert_eq!(
        report.remarks,
        vec!["peak wind 45kt from 280 degrees at 22:15".to_string()]
    );
}

#[test]
fn test_peak_wind_without_hour_uses_observation_hour() {
    let report = decode_remarks("PK WND 32035/15");
    assert_eq!(
        report.remarks,
        vec!["peak wind 35kt from 320 degrees at 18:15".to_string()]
    );
}

#[test]
fn test_peak_wind_above_sensor_maximum() {
    let report = decode_remarks("PK WND 280P99/2215");
    assert_eq!(
        report.remarks,
        vec!["peak wind 99kt from 280 degrees at 22:15".to_string()]
    );
}

#[test]
fn test_wind_shift_with_frontal_passage() {
    let report = decode_remarks("WSHFT 2243 FROPA");
    assert_eq!(report.remarks, vec!["wind shift at 22:43 (front)".to_string()]);
}

#[test]
fn test_wind_shift_without_hour_uses_observation_hour() {
    let report = decode_remarks("WSHFT 43");
    assert_eq!(report.remarks, vec!["wind shift at 18:43".to_string()]);
}

#[test]
fn test_lightning_with_frequency_types_and_location() {
    let report = decode_remarks("OCNL LTGICCG DSNT NE");
    assert_eq!(
        report.remarks,
        vec!["occasional lightning (intracloud,cloud-to-ground) distant NE".to_string()]
    );
}

#[test]
fn test_lightning_bare() {
    let report = decode_remarks("LTG OHD");
    assert_eq!(report.remarks, vec!["lightning overhead".to_string()]);
}

#[test]
fn test_thunderstorm_location_and_movement() {
    let report = decode_remarks("TS SE MOV NE");
    assert_eq!(report.remarks, vec!["thunderstorm SE moving NE".to_string()]);
}

#[test]
fn test_hourly_temperature_overrides_body_fields() {
    let report = decode_remarks("T02330206");
    assert_eq!(report.temperature.unwrap().celsius(), 23.3);
    assert_eq!(report.dew_point.unwrap().celsius(), 20.6);
    assert!(report.remarks.is_empty());
}

#[test]
fn test_hourly_temperature_negative_sign_digit() {
    let report = decode_remarks("T10171022");
    assert_eq!(report.temperature.unwrap().celsius(), -1.7);
    assert_eq!(report.dew_point.unwrap().celsius(), -2.2);
}

#[test]
fn test_hourly_precipitation() {
    let report = decode_remarks("P0009");
    assert_eq!(report.remarks, vec!["1-hr precip 0.09in".to_string()]);
}

#[test]
fn test_cumulative_precipitation_at_a_3_hourly_cycle() {
    // 0251Z rounds up to cycle 3, so a "6" group covers three hours
    let report = decode("KJFK 160251Z 18010KT 10SM FEW250 22/11 A3001 RMK 60217");
    assert_eq!(report.cycle, Some(3));
    assert_eq!(report.remarks, vec!["3-hour precipitation 2.17in".to_string()]);
}

#[test]
fn test_cumulative_precipitation_at_a_6_hourly_cycle() {
    let report = decode("KJFK 160551Z 18010KT 10SM FEW250 22/11 A3001 RMK 60217");
    assert_eq!(report.cycle, Some(6));
    assert_eq!(report.remarks, vec!["6-hr precip 2.17in".to_string()]);
}

#[test]
fn test_24_hour_precipitation() {
    let report = decode_remarks("70125");
    assert_eq!(report.remarks, vec!["24-hr precip 1.25in".to_string()]);
}

#[test]
fn test_3_hour_pressure_tendency() {
    let report = decode_remarks("52032");
    assert_eq!(
        report.remarks,
        vec!["3-hr pressure change 3.2hPa, increasing".to_string()]
    );
}

#[test]
fn test_6_hour_extreme_temperatures() {
    assert_eq!(
        decode_remarks("10066").remarks,
        vec!["6-hr max temp 6.6C".to_string()]
    );
    assert_eq!(
        decode_remarks("21012").remarks,
        vec!["6-hr min temp -1.2C".to_string()]
    );
}

#[test]
fn test_24_hour_extreme_temperatures() {
    let report = decode_remarks("401231023");
    assert_eq!(
        report.remarks,
        vec![
            "24-hr max temp 12.3C".to_string(),
            "24-hr min temp -2.3C".to_string(),
        ]
    );
}

#[test]
fn test_unrecognized_tokens_are_collected() {
    let report = decode_remarks("COWABUNGA AO2 $");
    assert_eq!(report.remarks, vec!["Automated station (type 2)".to_string()]);
    assert_eq!(
        report.unparsed_remarks,
        vec!["COWABUNGA".to_string(), "$".to_string()]
    );
}

#[test]
fn test_groups_decode_regardless_of_order() {
    // Same groups, reversed order: the scan restarts from the top after
    // every match, so priority never blocks a later-listed group
    let forward = decode_remarks("AO2 SLP132 T02330206");
    let reverse = decode_remarks("T02330206 SLP132 AO2");

    let mut forward_remarks = forward.remarks.clone();
    let mut reverse_remarks = reverse.remarks.clone();
    forward_remarks.sort();
    reverse_remarks.sort();
    assert_eq!(forward_remarks, reverse_remarks);
    assert_eq!(
        forward.temperature.unwrap().celsius(),
        reverse.temperature.unwrap().celsius()
    );
}

#[test]
fn test_full_remarks_trailer() {
    let report = decode_remarks("AO2 PK WND 28045/2215 SLP132 P0009 T02330206");
    assert_eq!(
        report.remarks,
        vec![
            "Automated station (type 2)".to_string(),
            "peak wind 45kt from 280 degrees at 22:15".to_string(),
            "sea-level pressure 1013.2hPa".to_string(),
            "1-hr precip 0.09in".to_string(),
        ]
    );
    assert_eq!(report.temperature.unwrap().celsius(), 23.3);
    assert!(report.unparsed_remarks.is_empty());
}
