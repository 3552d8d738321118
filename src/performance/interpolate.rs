//! 성능 곡선 선형 보간.
//!
//! 곡선 범위 밖은 외삽하지 않고 0을 돌려준다. 곡선 점 수가 적으므로(보통 20개 미만)
//! 인덱스 없이 매 호출마다 선형 탐색한다.

use super::curve::{PerformanceCurve, PerformancePoint};

/// 보간 대상 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveField {
    StaticPressure,
    Power,
    Efficiency,
}

impl CurveField {
    fn value(self, point: &PerformancePoint) -> f64 {
        match self {
            CurveField::StaticPressure => point.static_pressure,
            CurveField::Power => point.power,
            CurveField::Efficiency => point.efficiency.unwrap_or(0.0),
        }
    }
}

/// 주어진 풍량(m³/h)에서의 정압(Pa)을 구한다.
pub fn interpolate(curve: &PerformanceCurve, airflow: f64) -> f64 {
    interpolate_field(curve, airflow, CurveField::StaticPressure)
}

/// 주어진 풍량에서 임의 필드 값을 구한다.
///
/// 1. 같은 풍량의 점이 있으면 그 값을 그대로 반환
/// 2. 양쪽 이웃 점이 모두 있으면 두 점 선형 보간
/// 3. 한쪽만 있거나 곡선이 비어 있으면 0
pub fn interpolate_field(curve: &PerformanceCurve, airflow: f64, field: CurveField) -> f64 {
    let mut lo: Option<&PerformancePoint> = None;
    let mut hi: Option<&PerformancePoint> = None;
    for point in curve {
        if point.airflow == airflow {
            return field.value(point);
        }
        if point.airflow < airflow {
            lo = Some(point);
        } else {
            hi = Some(point);
            break;
        }
    }
    match (lo, hi) {
        (Some(lo), Some(hi)) => lerp(
            airflow,
            (lo.airflow, field.value(lo)),
            (hi.airflow, field.value(hi)),
        ),
        _ => 0.0,
    }
}

fn lerp(x: f64, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
    if x1 == x2 {
        return y1;
    }
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// [`resample`] 구간 수 상한.
pub const MAX_RESAMPLE_STEPS: usize = 1000;

/// 곡선을 첫 점~마지막 점 사이 `steps` 등간격으로 다시 샘플링한다.
///
/// 정압/동력은 보간하고 효율은 보간된 값으로 다시 계산한다. 점이 두 개 미만이거나
/// `steps == 0`이면 원래 곡선을 그대로 돌려준다. `steps`는 [`MAX_RESAMPLE_STEPS`]로 자른다.
pub fn resample(curve: &PerformanceCurve, steps: usize) -> PerformanceCurve {
    let Some((min, max)) = curve.airflow_range() else {
        return curve.clone();
    };
    if steps == 0 || curve.len() < 2 {
        return curve.clone();
    }
    if steps > MAX_RESAMPLE_STEPS {
        tracing::warn!(steps, max = MAX_RESAMPLE_STEPS, "resample steps clamped");
    }
    let steps = steps.min(MAX_RESAMPLE_STEPS);
    let step = (max - min) / steps as f64;
    let points = (0..=steps)
        .map(|i| {
            // 마지막 점은 누적 오차 없이 원래 끝점에 맞춘다
            let q = if i == steps { max } else { min + step * i as f64 };
            PerformancePoint::new(
                q,
                interpolate_field(curve, q, CurveField::StaticPressure),
                interpolate_field(curve, q, CurveField::Power),
            )
        })
        .collect();
    match PerformanceCurve::new(points) {
        Ok(resampled) => resampled,
        Err(err) => {
            tracing::warn!("resample failed ({err}); keeping original samples");
            curve.clone()
        }
    }
}
