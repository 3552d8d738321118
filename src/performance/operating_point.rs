use super::curve::{PerformanceCurve, PerformancePoint};
use super::system_curve::{build_system_curve, SystemCurve, SystemRequirement};
use crate::units::DisplayUnits;

/// 팬 곡선과 시스템 곡선이 (샘플 해상도 안에서) 가장 가까운 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub point: PerformancePoint,
    /// 같은 풍량에서의 시스템 저항 압력(Pa)
    pub system_pressure: f64,
}

impl OperatingPoint {
    pub fn airflow(&self) -> f64 {
        self.point.airflow
    }

    pub fn static_pressure(&self) -> f64 {
        self.point.static_pressure
    }

    pub fn power(&self) -> f64 {
        self.point.power
    }

    pub fn efficiency(&self) -> Option<f64> {
        self.point.efficiency
    }

    /// |팬 정압 - 시스템 압력|
    pub fn pressure_gap(&self) -> f64 {
        (self.point.static_pressure - self.system_pressure).abs()
    }
}

/// 곡선 점마다 시스템 압력을 평가해 차이가 최소인 점을 운전점으로 고른다.
///
/// 동률이면 풍량이 작은(먼저 나온) 점이 이긴다. 곡선이 비어 있으면 `None`.
/// 곡선 밖으로 외삽하지 않으므로 해상도는 곡선 샘플 간격에 묶인다. 더 촘촘한
/// 결과가 필요하면 [`super::interpolate::resample`]로 먼저 재샘플링한다.
pub fn solve_operating_point(
    curve: &PerformanceCurve,
    system: &SystemCurve,
) -> Option<OperatingPoint> {
    let mut best: Option<OperatingPoint> = None;
    let mut min_diff = f64::INFINITY;
    for point in curve {
        let system_pressure = system.pressure_at(point.airflow);
        let diff = (point.static_pressure - system_pressure).abs();
        if diff < min_diff {
            min_diff = diff;
            best = Some(OperatingPoint {
                point: *point,
                system_pressure,
            });
        }
    }
    if let Some(op) = &best {
        tracing::debug!(
            airflow = op.airflow(),
            pressure = op.static_pressure(),
            gap = min_diff,
            "operating point resolved"
        );
    }
    best
}

/// 시스템 압력이 덧붙은 곡선 점 (차트 한 줄).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSample {
    pub point: PerformancePoint,
    /// 요구점이 유효하지 않으면 `None`
    pub system_pressure: Option<f64>,
}

/// 한 번의 시뮬레이션 결과: 차트 데이터와 운전점.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub samples: Vec<SimulationSample>,
    pub operating_point: Option<OperatingPoint>,
}

/// 요구점 하나로 시스템 곡선을 만들고 팬 곡선 위 운전점을 찾는다.
///
/// 요구 풍량이 0 이하이면 샘플은 시스템 압력 없이 그대로 두고 운전점은 `None`이다.
pub fn simulate(curve: &PerformanceCurve, requirement: &SystemRequirement) -> Simulation {
    let Some(system) = build_system_curve(requirement) else {
        return Simulation {
            samples: curve
                .iter()
                .map(|p| SimulationSample {
                    point: *p,
                    system_pressure: None,
                })
                .collect(),
            operating_point: None,
        };
    };
    let samples = curve
        .iter()
        .map(|p| SimulationSample {
            point: *p,
            system_pressure: Some(system.pressure_at(p.airflow)),
        })
        .collect();
    Simulation {
        samples,
        operating_point: solve_operating_point(curve, &system),
    }
}

impl Simulation {
    /// 풍량/압력을 표시 단위로 바꾼 사본. 동력과 효율은 그대로 둔다.
    pub fn converted(&self, units: DisplayUnits) -> Simulation {
        let convert_point = |p: &PerformancePoint| PerformancePoint {
            airflow: units.airflow_from_base(p.airflow),
            static_pressure: units.pressure_from_base(p.static_pressure),
            ..*p
        };
        Simulation {
            samples: self
                .samples
                .iter()
                .map(|s| SimulationSample {
                    point: convert_point(&s.point),
                    system_pressure: s.system_pressure.map(|v| units.pressure_from_base(v)),
                })
                .collect(),
            operating_point: self.operating_point.map(|op| OperatingPoint {
                point: convert_point(&op.point),
                system_pressure: units.pressure_from_base(op.system_pressure),
            }),
        }
    }
}
