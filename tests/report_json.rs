//! A report must serialize cleanly so presentation layers can consume it
//! (table rows, chart datasets) without reaching into the core.

use psatrend::prelude::*;

#[test]
fn report_serializes_for_presentation() {
    let report =
        TrendReport::from_text("1.2 2024-01-01\n2.4 2024-04-01\n4.8 2024-07-01").expect("report");

    let json = serde_json::to_value(&report).expect("serialize");

    // The pieces a renderer needs are all addressable.
    assert_eq!(json["series"]["measurements"][0]["date"], "2024-01-01");
    assert_eq!(json["series"]["measurements"][0]["value"], 1.2);
    assert_eq!(json["fit"]["epoch"], "2024-01-01");
    assert_eq!(json["doubling_time"]["class"], "Months");

    let restored: TrendReport = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored, report);
}

#[test]
fn curve_points_serialize_as_date_value_pairs() {
    let report =
        TrendReport::from_text("2.0 2024-01-01\n4.0 2024-03-31").expect("report");
    let curve = report.projection(0.5);

    let json = serde_json::to_value(&curve).expect("serialize");
    assert_eq!(json[0]["date"], "2024-01-01");
    assert!(json[0]["value"].as_f64().unwrap() > 0.0);
}
