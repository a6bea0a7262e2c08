//! 성능 측정 및 정확도 검증 함수들
//!
//! 커널 속도와 오차 분포를 측정해 콘솔 리포트와 구조화된 결과를 만든다.

use std::time::Instant;

use crate::core::math::{inv_sqrt, reference_inv_sqrt, relative_error, sweep_accuracy};
use crate::core::types::{AccuracyReport, BenchmarkResult, ComprehensiveReport, SweepConfig};

/// 연산 속도 벤치마크 - 실제 ns/op 측정
pub fn benchmark_speed(iterations: usize) -> BenchmarkResult {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    println!("=== 고속 역제곱근 성능 측정 ===");
    println!("반복 횟수: {}", iterations);

    // 측정용 입력: [0.5, 100.5) 균일 샘플 1024개를 순환
    let inputs: Vec<f32> = (0..1024).map(|_| 0.5 + rng.gen::<f32>() * 100.0).collect();

    // 1. 근사 커널 측정
    let start = Instant::now();
    let mut approx_sum = 0.0f32;
    for i in 0..iterations {
        approx_sum += inv_sqrt(inputs[i & 1023]);
    }
    let elapsed = start.elapsed();
    let approx_ns = elapsed.as_nanos() as f64 / iterations as f64;

    println!("inv_sqrt 속도: {:.2} ns/op", approx_ns);
    println!("결과 합계: {:.6} (최적화 방지)", approx_sum);

    // 2. 기준 연산 측정
    let start = Instant::now();
    let mut exact_sum = 0.0f32;
    for i in 0..iterations {
        let x = inputs[i & 1023];
        exact_sum += 1.0 / x.sqrt();
    }
    let elapsed = start.elapsed();
    let exact_ns = elapsed.as_nanos() as f64 / iterations as f64;

    println!("1/sqrt 속도: {:.2} ns/op", exact_ns);
    println!("결과 합계: {:.6} (최적화 방지)", exact_sum);

    let speedup = if approx_ns > 0.0 { exact_ns / approx_ns } else { 0.0 };
    println!("속도 배율: {:.2}x", speedup);

    BenchmarkResult {
        iterations,
        approx_ns_per_op: approx_ns,
        exact_ns_per_op: exact_ns,
        speedup,
    }
}

/// 정확도 측정 - 상대 오차 통계 분석
pub fn measure_accuracy(samples_per_exp: usize) -> AccuracyReport {
    let config = SweepConfig {
        samples_per_exp,
        ..SweepConfig::default()
    };
    log::debug!("스윕 구성: {:?}", config);

    println!("\n=== 정확도 분석 ===");
    println!(
        "지수 범위: {}..={}, 지수당 샘플: {}",
        config.exp_min, config.exp_max, config.samples_per_exp
    );

    let report = sweep_accuracy(&config);

    println!("총 샘플 수: {}", report.samples);
    println!(
        "최대 상대 오차: {:.6}% (입력 {:e})",
        report.max_rel_error * 100.0,
        report.worst_input
    );
    println!("평균 상대 오차: {:.6}%", report.mean_rel_error * 100.0);

    // 대표 입력별 오차
    for &x in &[1.0f32, 4.0, 0.25, 100.0] {
        let approx = inv_sqrt(x);
        let exact = reference_inv_sqrt(x);
        println!(
            "  x = {:>6}: 근사 {:.6}, 기준 {:.6}, 상대 오차 {:.4}%",
            x,
            approx,
            exact,
            relative_error(approx, exact) * 100.0
        );
    }

    report
}

/// 속도와 정확도를 모두 측정한 종합 리포트
pub fn generate_comprehensive_report() -> ComprehensiveReport {
    println!("==========================================");
    println!("  고속 역제곱근 근사 종합 리포트");
    println!("==========================================");

    let benchmark = benchmark_speed(1_000_000);
    let accuracy = measure_accuracy(512);

    println!("\n리포트 완료");

    ComprehensiveReport { accuracy, benchmark }
}
