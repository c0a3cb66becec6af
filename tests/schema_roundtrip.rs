use std::fs;

use mobility_qc::ctx::Ctx;
use mobility_qc::io::json_writer::build_report;
use mobility_qc::pipeline::Pipeline;
use mobility_qc::schema::v1::MobilityQcV1;
use mobility_qc::scores::{Classification, TestType};
use serde_json::json;
use tempfile::TempDir;

fn report_for(test_type: &str) -> MobilityQcV1 {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("empty.json");
    fs::write(&input, json!({ "test_type": test_type }).to_string()).unwrap();
    let mut ctx = Ctx::new(input, tmp.path().join("out"), false, false, "0.0.0-test");
    Pipeline::validate().run(&mut ctx).unwrap();
    build_report(&ctx).unwrap()
}

#[test]
fn schema_roundtrip_v1() {
    let report = report_for("SIT_TO_STAND");
    let json = serde_json::to_string(&report).unwrap();
    let decoded: MobilityQcV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "mobility-qc");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.evaluation.test_type, TestType::SitToStand);
    assert_eq!(decoded.overall_classification, Classification::Unknown);
    assert!(decoded.indicators.is_none());
    assert_eq!(decoded.warnings, report.warnings);
}

#[test]
fn enums_serialize_as_labels() {
    let report = report_for("TIMED_UP_AND_GO");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["evaluation"]["test_type"], "TIMED_UP_AND_GO");
    assert_eq!(json["evaluation"]["elapsed_source"], "timestamps");
    assert_eq!(json["time_classification"], "Unknown");
}
