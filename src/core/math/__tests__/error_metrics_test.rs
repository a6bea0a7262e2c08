use crate::core::math::error_metrics::*;
use crate::core::types::SweepConfig;

#[test]
fn 상대오차_계산_테스트() {
    assert_eq!(relative_error(1.0, 1.0), 0.0, "같은 값의 상대 오차는 0");
    assert!((relative_error(0.99, 1.0) - 0.01).abs() < 1e-6, "1% 오차 계산이 틀림");
    assert_eq!(relative_error(1.0, 0.0), f32::INFINITY, "기준값이 0이면 무한대");
}

#[test]
fn 기준값_테스트() {
    assert!((reference_inv_sqrt(4.0) - 0.5).abs() < 1e-7, "1/sqrt(4) = 0.5");
    assert!((reference_inv_sqrt(1.0) - 1.0).abs() < 1e-7, "1/sqrt(1) = 1");
    assert!((reference_inv_sqrt(0.25) - 2.0).abs() < 1e-6, "1/sqrt(0.25) = 2");
}

#[test]
fn 스윕_오차한계_테스트() {
    let config = SweepConfig {
        exp_min: -8,
        exp_max: 8,
        samples_per_exp: 64,
        seed: 7,
    };
    let report = sweep_accuracy(&config);

    assert_eq!(report.samples, 17 * 64, "샘플 수 계산이 틀림");
    assert!(
        report.max_rel_error < 0.002,
        "최대 상대 오차가 0.2%를 초과: {}",
        report.max_rel_error
    );
    assert!(report.mean_rel_error <= report.max_rel_error, "평균이 최대를 초과");
    assert!(report.worst_input > 0.0, "최악 입력은 양수여야 함");
}

#[test]
fn 스윕_재현성_테스트() {
    let config = SweepConfig {
        exp_min: -4,
        exp_max: 4,
        samples_per_exp: 32,
        seed: 123,
    };
    let a = sweep_accuracy(&config);
    let b = sweep_accuracy(&config);

    assert_eq!(
        a.max_rel_error.to_bits(),
        b.max_rel_error.to_bits(),
        "같은 시드는 같은 최대 오차를 내야 함"
    );
    assert_eq!(
        a.worst_input.to_bits(),
        b.worst_input.to_bits(),
        "같은 시드는 같은 최악 입력을 내야 함"
    );
}

#[test]
fn 빈_스윕_테스트() {
    // 지수 범위가 비면 기본 리포트를 반환
    let config = SweepConfig {
        exp_min: 4,
        exp_max: -4,
        samples_per_exp: 32,
        seed: 0,
    };
    let report = sweep_accuracy(&config);
    assert_eq!(report.samples, 0, "빈 범위의 샘플 수는 0");
    assert_eq!(report.max_rel_error, 0.0, "빈 범위의 최대 오차는 0");
}
