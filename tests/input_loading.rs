use std::fs;
use std::io::Write;

use chrono::NaiveDate;
use flate2::Compression;
use flate2::write::GzEncoder;
use mobility_qc::input::{Timestamp, age_in_years, label_from_path, load_evaluation, parse_evaluation};
use mobility_qc::scores::TestType;
use serde_json::json;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn loads_snake_case_evaluation() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("eval.json");
    let doc = json!({
        "id": "eval-1",
        "test_type": "TIMED_UP_AND_GO",
        "evaluation_date": "2024-03-01",
        "patient": { "id": "p-1", "birth_date": "1950-06-12" },
        "samples": [
            { "timestamp": "2024-03-01T10:00:00Z", "accel_x": 0.1, "accel_y": 0.2, "accel_z": 9.8,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.1 },
            { "timestamp": "2024-03-01T10:00:01.500Z", "accel_x": 0.3, "accel_y": 0.1, "accel_z": 9.7,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.2 }
        ]
    });
    fs::write(&path, doc.to_string()).unwrap();

    let eval = load_evaluation(&path).unwrap();
    assert_eq!(eval.id.as_deref(), Some("eval-1"));
    assert_eq!(eval.test_type, TestType::TimedUpAndGo);
    assert_eq!(eval.samples.len(), 2);
    assert_eq!(eval.samples[1].timestamp.to_millis().unwrap() - eval.samples[0].timestamp.to_millis().unwrap(), 1500);
    assert_eq!(eval.patient_age_years(), Some(73));
}

#[test]
fn accepts_camel_case_and_time_alias() {
    let doc = json!({
        "testType": "sts",
        "elapsedSeconds": 12.5,
        "samples": [
            { "time": 1700000000000i64, "accelX": 1.0, "accelY": 0.0, "accelZ": 9.8,
              "gyroX": 0.0, "gyroY": 0.0, "gyroZ": 0.0 }
        ]
    });
    let eval = parse_evaluation(&doc.to_string()).unwrap();
    assert_eq!(eval.test_type, TestType::SitToStand);
    assert_eq!(eval.elapsed_seconds, Some(12.5));
    assert_eq!(eval.samples[0].timestamp, Timestamp::EpochMillis(1_700_000_000_000));
    assert_eq!(eval.samples[0].accel_x, 1.0);
}

#[test]
fn unknown_test_type_is_rejected() {
    let doc = json!({ "test_type": "BALANCE_BOARD", "samples": [] });
    let err = parse_evaluation(&doc.to_string()).unwrap_err();
    assert!(format!("{:#}", err).contains("unknown test type"));
}

#[test]
fn bad_timestamp_text_still_loads() {
    let doc = json!({
        "test_type": "TUG",
        "samples": [
            { "timestamp": "not a time", "accel_x": 0.0, "accel_y": 0.0, "accel_z": 9.8,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.0 }
        ]
    });
    let eval = parse_evaluation(&doc.to_string()).unwrap();
    assert_eq!(eval.samples[0].timestamp.to_millis(), None);
}

#[test]
fn loads_gzip_evaluation() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("eval.json.gz");
    let doc = json!({ "test_type": "TIMED_UP_AND_GO", "samples": [] });
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(doc.to_string().as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let eval = load_evaluation(&path).unwrap();
    assert_eq!(eval.test_type, TestType::TimedUpAndGo);
    assert!(eval.samples.is_empty());
    assert_eq!(label_from_path(&path), "eval");
}

#[test]
fn missing_file_reports_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.json");
    let err = load_evaluation(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.json"));
}

#[test]
fn naive_timestamps_are_utc() {
    let a = Timestamp::from("2024-03-01T10:00:00");
    let b = Timestamp::from("2024-03-01T10:00:00Z");
    let c = Timestamp::from("2024-03-01T11:00:00+01:00");
    assert_eq!(a.to_millis(), b.to_millis());
    assert_eq!(b.to_millis(), c.to_millis());
    assert_eq!(a.date(), Some(date(2024, 3, 1)));
}

#[test]
fn age_counts_whole_years() {
    assert_eq!(age_in_years(date(1950, 6, 12), date(2024, 6, 11)), Some(73));
    assert_eq!(age_in_years(date(1950, 6, 12), date(2024, 6, 12)), Some(74));
    assert_eq!(age_in_years(date(2000, 1, 1), date(1999, 12, 31)), None);
}

#[test]
fn age_falls_back_to_sample_date() {
    let doc = json!({
        "test_type": "TUG",
        "patient": { "birthDate": "1960-01-15" },
        "samples": [
            { "timestamp": "2024-01-20T09:00:00Z", "accel_x": 0.0, "accel_y": 0.0, "accel_z": 9.8,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.0 }
        ]
    });
    let eval = parse_evaluation(&doc.to_string()).unwrap();
    assert_eq!(eval.effective_date(), Some(date(2024, 1, 20)));
    assert_eq!(eval.patient_age_years(), Some(64));
}
