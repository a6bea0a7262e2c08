//! # math 모듈 테스트
//!
//! 근사 커널과 오차 측정의 단위테스트

pub mod error_metrics_test;
pub mod inv_sqrt_test;
