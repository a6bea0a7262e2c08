//! 리포트 직렬화 round-trip 테스트

use fisr::{sweep_accuracy, AccuracyReport, SweepConfig};

#[test]
/// 정확도 리포트가 JSON 파일로 저장했다 읽어도 값이 보존되는지 확인합니다.
fn test_report_json_roundtrip() {
    let config = SweepConfig {
        exp_min: -2,
        exp_max: 2,
        samples_per_exp: 32,
        seed: 9,
    };
    let report = sweep_accuracy(&config);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("accuracy_report.json");

    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
    std::fs::write(&path, json).expect("Failed to write report file");

    let loaded: AccuracyReport =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("Failed to read report file"))
            .expect("Failed to deserialize report");

    assert_eq!(loaded.samples, report.samples);
    assert_eq!(
        loaded.max_rel_error.to_bits(),
        report.max_rel_error.to_bits(),
        "JSON roundtrip must preserve the exact value"
    );
    assert_eq!(loaded.worst_input.to_bits(), report.worst_input.to_bits());
    assert_eq!(loaded.mean_rel_error.to_bits(), report.mean_rel_error.to_bits());
}
