//! # FISR (Fast Inverse Square Root) 라이브러리
//!
//! 비트 재해석 초기 근사와 뉴턴-랩슨 반복으로 1/sqrt(x)를 고속으로 근사하는 라이브러리

pub mod core;

// 핵심 커널 재수출
pub use crate::core::math::{
    // 근사 커널
    inv_sqrt, inv_sqrt_precise, inv_sqrt_raw, RSQRT_MAGIC,
    // 오차 측정
    reference_inv_sqrt, relative_error, sweep_accuracy,
};

// 검증 래퍼
pub use crate::core::checked::{try_inv_sqrt, DomainError};

// 성능/정확도 리포트
pub use crate::core::analysis::{benchmark_speed, generate_comprehensive_report, measure_accuracy};

// 측정 구성 및 결과 타입들
pub use crate::core::types::{AccuracyReport, BenchmarkResult, ComprehensiveReport, SweepConfig};

// 편의 타입 별칭
pub type InvSqrtResult = Result<f32, DomainError>;
