//! 근사 오차 측정
//!
//! 커널을 기준값 `1/sqrt(x)`와 비교해 상대 오차 통계를 수집한다.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::core::math::inv_sqrt::inv_sqrt;
use crate::core::types::{AccuracyReport, SweepConfig};

/// 기준값: `1 / sqrt(x)` (libm)
#[inline]
pub fn reference_inv_sqrt(x: f32) -> f32 {
    1.0 / libm::sqrtf(x)
}

/// 상대 오차 `|approx - exact| / |exact|`
pub fn relative_error(approx: f32, exact: f32) -> f32 {
    if exact == 0.0 {
        return f32::INFINITY;
    }
    ((approx - exact) / exact).abs()
}

/// 지수별 가수 샘플링으로 상대 오차를 스윕한다
///
/// 각 이진 지수 `e`에 대해 `[2^e, 2^(e+1))` 구간에서 가수를 균일
/// 샘플링한다. 첫 샘플은 항상 구간 하한 `2^e` 자체로 두고,
/// 지수별 시드를 고정해 같은 구성이면 같은 결과가 나온다.
pub fn sweep_accuracy(config: &SweepConfig) -> AccuracyReport {
    let per_exp: Vec<(f32, f64, f32)> = (config.exp_min..=config.exp_max)
        .into_par_iter()
        .map(|exp| {
            let stream = config.seed ^ (exp as u64).wrapping_mul(0x9E37_79B9);
            let mut rng = StdRng::seed_from_u64(stream);
            let base = (exp as f32).exp2();

            let mut max_err = 0.0f32;
            let mut sum_err = 0.0f64;
            let mut worst = base;

            for k in 0..config.samples_per_exp {
                let x = if k == 0 {
                    base
                } else {
                    base * (1.0 + rng.gen::<f32>())
                };
                let err = relative_error(inv_sqrt(x), reference_inv_sqrt(x));
                sum_err += err as f64;
                if err > max_err {
                    max_err = err;
                    worst = x;
                }
            }
            (max_err, sum_err, worst)
        })
        .collect();

    let samples = per_exp.len() * config.samples_per_exp;
    if samples == 0 {
        return AccuracyReport::default();
    }

    let mut max_rel_error = 0.0f32;
    let mut worst_input = 0.0f32;
    let mut total = 0.0f64;
    for (max_err, sum_err, worst) in per_exp {
        total += sum_err;
        if max_err > max_rel_error {
            max_rel_error = max_err;
            worst_input = worst;
        }
    }

    AccuracyReport {
        samples,
        max_rel_error,
        mean_rel_error: (total / samples as f64) as f32,
        worst_input,
    }
}
