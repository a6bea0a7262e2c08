//! 측정 구성과 결과 타입들

use serde::{Deserialize, Serialize};

/// 정확도 스윕 구성
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// 최소 이진 지수 (포함)
    pub exp_min: i32,
    /// 최대 이진 지수 (포함)
    pub exp_max: i32,
    /// 지수당 샘플 수
    pub samples_per_exp: usize,
    /// 가수 샘플링 시드
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        // 2^-34 ~ 2^35 구간, 대략 1e-10 ~ 1e10을 덮는다
        Self {
            exp_min: -34,
            exp_max: 34,
            samples_per_exp: 256,
            seed: 42,
        }
    }
}

/// 정확도 스윕 결과
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// 총 샘플 수
    pub samples: usize,
    /// 최대 상대 오차
    pub max_rel_error: f32,
    /// 평균 상대 오차
    pub mean_rel_error: f32,
    /// 최대 오차가 관측된 입력
    pub worst_input: f32,
}

impl AccuracyReport {
    /// 최대 상대 오차가 허용 한계 이내인지 확인
    pub fn within_bound(&self, bound: f32) -> bool {
        self.max_rel_error <= bound
    }
}

/// 속도 벤치마크 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// 반복 횟수
    pub iterations: usize,
    /// 근사 커널 ns/op
    pub approx_ns_per_op: f64,
    /// `1.0 / x.sqrt()` ns/op
    pub exact_ns_per_op: f64,
    /// 기준 연산 대비 속도 배율
    pub speedup: f64,
}

/// 종합 리포트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveReport {
    pub accuracy: AccuracyReport,
    pub benchmark: BenchmarkResult,
}
