use std::fs;

use mobility_qc::ctx::Ctx;
use mobility_qc::io::tsv_writer::{HEADER, write_tsv};
use mobility_qc::pipeline::Pipeline;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn tsv_rows_per_indicator() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("sts.json");
    let doc = json!({
        "test_type": "STS",
        "samples": [
            { "timestamp": 0, "accel_x": 3.0, "accel_y": 4.0, "accel_z": 0.0,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.0 },
            { "timestamp": 1000, "accel_x": -3.0, "accel_y": 4.0, "accel_z": 0.0,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.0 },
            { "timestamp": 2000, "accel_x": 0.0, "accel_y": 0.0, "accel_z": 5.0,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.0 },
            { "timestamp": 3000, "accel_x": 0.0, "accel_y": 5.0, "accel_z": 0.0,
              "gyro_x": 0.0, "gyro_y": 0.0, "gyro_z": 0.0 }
        ]
    });
    fs::write(&input, doc.to_string()).unwrap();

    let mut ctx = Ctx::new(input, tmp.path().to_path_buf(), false, false, "0.0.0-test");
    Pipeline::validate().run(&mut ctx).unwrap();

    let path = tmp.path().join("mobility_qc.tsv");
    write_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "sts\tSIT_TO_STAND\tTime\t3.00\t60\tExcellent");
    assert_eq!(lines[2], "sts\tSIT_TO_STAND\tPower\t5.00\t20\tCritical");
    assert_eq!(lines[3], "sts\tSIT_TO_STAND\tFatigue\t0.00\t10\tExcellent");
    assert_eq!(lines[4], "sts\tSIT_TO_STAND\tSymmetry\t5.00\t10\tPoor");
}

#[test]
fn tsv_header_only_without_indicators() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("empty.json");
    fs::write(&input, json!({ "id": "e1", "test_type": "TUG" }).to_string()).unwrap();

    let mut ctx = Ctx::new(input, tmp.path().to_path_buf(), false, false, "0.0.0-test");
    Pipeline::validate().run(&mut ctx).unwrap();

    let path = tmp.path().join("mobility_qc.tsv");
    write_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content, format!("{}\n", HEADER));
}
