use std::collections::BTreeMap;

use super::curve::PerformanceCurve;
use super::interpolate::interpolate;
use crate::catalog::FanId;
use crate::units::DisplayUnits;

/// 공통 풍량 축 위 한 행: 각 팬의 정압.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    pub airflow: f64,
    pub pressure_by_fan: BTreeMap<FanId, f64>,
}

impl AlignedRow {
    pub fn pressure_for(&self, id: FanId) -> Option<f64> {
        self.pressure_by_fan.get(&id).copied()
    }

    pub fn converted(&self, units: DisplayUnits) -> AlignedRow {
        AlignedRow {
            airflow: units.airflow_from_base(self.airflow),
            pressure_by_fan: self
                .pressure_by_fan
                .iter()
                .map(|(id, p)| (*id, units.pressure_from_base(*p)))
                .collect(),
        }
    }
}

/// 여러 팬의 곡선을 하나의 풍량 축으로 맞춘다.
///
/// 축은 모든 곡선 풍량의 합집합(정렬, 중복 제거)이고, 각 팬 값은 [`interpolate`]로
/// 구한다. 자기 곡선 범위 밖인 풍량에서는 0이 된다.
pub fn align_curves<'a, I>(curves: I) -> Vec<AlignedRow>
where
    I: IntoIterator<Item = (FanId, &'a PerformanceCurve)>,
{
    let curves: Vec<(FanId, &PerformanceCurve)> = curves.into_iter().collect();
    let mut airflows: Vec<f64> = curves
        .iter()
        .flat_map(|(_, curve)| curve.iter().map(|p| p.airflow))
        .collect();
    airflows.sort_by(f64::total_cmp);
    airflows.dedup();

    airflows
        .into_iter()
        .map(|airflow| AlignedRow {
            airflow,
            pressure_by_fan: curves
                .iter()
                .map(|(id, curve)| (*id, interpolate(curve, airflow)))
                .collect(),
        })
        .collect()
}
