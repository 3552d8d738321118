use serde::{Deserialize, Serialize};

use super::curve::PerformanceCurve;
use crate::catalog::Fan;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// 사용자가 입력한 시스템 요구 운전점. 풍량은 m³/h, 압력은 Pa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemRequirement {
    pub airflow: f64,
    pub pressure: f64,
}

impl SystemRequirement {
    pub const fn new(airflow: f64, pressure: f64) -> Self {
        Self { airflow, pressure }
    }

    /// 팬 상세 화면 진입 시 기본 요구점.
    ///
    /// 풍량은 최대 풍량의 60%를 100 단위로 반올림한 값이고, 압력은 그 풍량 이상인
    /// 첫 곡선 점의 정압이다. 해당 점이 없거나 정압이 0이면 최대 정압의 절반을 쓴다.
    pub fn default_for(fan: &Fan) -> Self {
        let target = fan.max_airflow * 0.6;
        let airflow = (target / 100.0).round() * 100.0;
        let pressure = first_pressure_at_or_above(&fan.performance_curve, target)
            .filter(|p| *p != 0.0)
            .unwrap_or(fan.max_static_pressure * 0.5);
        Self { airflow, pressure }
    }
}

fn first_pressure_at_or_above(curve: &PerformanceCurve, airflow: f64) -> Option<f64> {
    curve
        .iter()
        .find(|p| p.airflow >= airflow)
        .map(|p| p.static_pressure)
}

/// 이차 저항 곡선 `ΔP = k·Q²` (Q는 m³/s).
///
/// 요구점 하나에 고정된 팬 상사 법칙 근사이며 덕트망 해석이 아니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemCurve {
    k: f64,
}

impl SystemCurve {
    /// 저항 계수 k [Pa/(m³/s)²].
    pub fn coefficient(&self) -> f64 {
        self.k
    }

    /// 풍량(m³/h)에서 시스템 저항 압력(Pa).
    pub fn pressure_at(&self, airflow_m3h: f64) -> f64 {
        let q = airflow_m3h / SECONDS_PER_HOUR;
        self.k * q * q
    }
}

/// 요구점으로부터 시스템 곡선을 만든다. 풍량이 0 이하이거나 k가 유한하지 않으면 `None`.
pub fn build_system_curve(requirement: &SystemRequirement) -> Option<SystemCurve> {
    let q = requirement.airflow / SECONDS_PER_HOUR;
    // q가 아주 작으면 q²이 0으로 떨어져 k가 무한대가 된다
    let k = requirement.pressure / (q * q);
    if !q.is_finite() || q <= 0.0 || !k.is_finite() {
        tracing::warn!(
            airflow = requirement.airflow,
            pressure = requirement.pressure,
            "invalid system requirement; no system curve"
        );
        return None;
    }
    tracing::debug!(k, "system curve built");
    Some(SystemCurve { k })
}
