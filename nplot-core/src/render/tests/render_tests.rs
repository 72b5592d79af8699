use crate::render::text::sparkline;
use crate::render::{JsonRenderer, Renderer, TextRenderer, thousands};
use crate::series::{SeriesReport, SkipCounts};
use std::collections::BTreeMap;

fn report() -> SeriesReport {
    let mut series = BTreeMap::new();
    series.insert("/a".to_string(), vec![0, 1, 1, 1, 0, 0, 0, 0, 0, 0]);
    series.insert("/b".to_string(), vec![0, 1, 0, 1, 0, 0, 0, 0, 0, 0]);

    SeriesReport {
        total_hits: 1_234,
        start_time: 0,
        end_time: 30,
        interval: 10,
        boundaries: (0..=10).map(|i| i * 10).collect(),
        labels: (0..=10).map(|i| format!("t{i}")).collect(),
        series,
        skipped: SkipCounts {
            no_match: 2,
            bad_timestamp: 0,
        },
    }
}

#[test]
fn thousands_groups_digits() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(999), "999");
    assert_eq!(thousands(1_000), "1,000");
    assert_eq!(thousands(1_234_567), "1,234,567");
}

#[test]
fn sparkline_scales_to_peak() {
    assert_eq!(sparkline(&[0, 1, 7], 7), " ▂█");
    assert_eq!(sparkline(&[0, 0], 0), "  ");
}

#[test]
fn text_output_lists_title_buckets_and_endpoints() {
    // Arrange
    let mut out: Vec<u8> = Vec::new();

    // Act
    TextRenderer::plain().render(&report(), &mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Access Log Endpoint Hits - 1,234 hits\n"));
    assert!(text.contains("skipped 2 malformed lines"));
    assert!(text.contains("Buckets (10s each):"));
    assert!(text.contains("  10  t10"));
    assert!(text.contains("[0 1 1 1 0 0 0 0 0 0]"));
    assert!(text.contains("[0 1 0 1 0 0 0 0 0 0]"));
}

#[test]
fn json_output_round_trips_fields() {
    // Arrange
    let mut out: Vec<u8> = Vec::new();

    // Act
    JsonRenderer.render(&report(), &mut out).unwrap();

    // Assert
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["total_hits"], 1_234);
    assert_eq!(json["interval"], 10);
    assert_eq!(json["boundaries"].as_array().unwrap().len(), 11);
    assert_eq!(json["series"]["/b"][3], 1);
    assert_eq!(json["skipped"]["no_match"], 2);
}
