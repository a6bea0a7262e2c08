use fisr::generate_comprehensive_report;

fn main() {
    println!("고속 역제곱근 근사 성능 분석 시작...\n");

    let report = generate_comprehensive_report();

    println!(
        "\n요약: 최대 상대 오차 {:.4}%, 속도 배율 {:.2}x",
        report.accuracy.max_rel_error * 100.0,
        report.benchmark.speedup
    );

    println!("\n개별 측정 함수들:");
    println!("1. benchmark_speed(1_000_000) - 속도 측정");
    println!("2. measure_accuracy(512) - 정확도 측정");
    println!("3. fisr_cli sweep --json report.json - 리포트 저장");
}
