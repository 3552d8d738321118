use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 성능 곡선 구성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// 같은 풍량을 가진 점이 두 개 이상 존재
    #[error("중복된 풍량 값: {0} m³/h")]
    DuplicateAirflow(f64),
    /// NaN/무한대 값
    #[error("{index}번째 점에 유한하지 않은 값이 있습니다")]
    NonFinite { index: usize },
    /// 음수 풍량/압력/동력
    #[error("{index}번째 점에 음수 값이 있습니다")]
    Negative { index: usize },
    /// 존재하지 않는 점 인덱스
    #[error("점 인덱스 범위 초과: {0}")]
    IndexOutOfRange(usize),
    /// 곡선에 남은 유일한 점은 삭제할 수 없음
    #[error("마지막 남은 점은 삭제할 수 없습니다")]
    LastPoint,
}

/// 팬 특성 곡선 위의 측정점 하나.
///
/// 풍량은 m³/h, 정압은 Pa, 동력은 kW, 효율은 % 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub airflow: f64,
    pub static_pressure: f64,
    pub power: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
}

impl PerformancePoint {
    /// 풍량·정압·동력으로 점을 만들고 효율은 계산해서 채운다.
    pub fn new(airflow: f64, static_pressure: f64, power: f64) -> Self {
        Self {
            airflow,
            static_pressure,
            power,
            efficiency: Some(efficiency_percent(airflow, static_pressure, power)),
        }
    }

    /// 측정값 효율을 그대로 보존하는 생성자.
    pub const fn measured(
        airflow: f64,
        static_pressure: f64,
        power: f64,
        efficiency: Option<f64>,
    ) -> Self {
        Self {
            airflow,
            static_pressure,
            power,
            efficiency,
        }
    }

    fn validate(&self, index: usize) -> Result<(), CurveError> {
        let values = [self.airflow, self.static_pressure, self.power];
        if values.iter().any(|v| !v.is_finite())
            || self.efficiency.is_some_and(|e| !e.is_finite())
        {
            return Err(CurveError::NonFinite { index });
        }
        if values.iter().any(|v| *v < 0.0) {
            return Err(CurveError::Negative { index });
        }
        Ok(())
    }
}

/// 공기동력/축동력 비로 정압 효율(%)을 구한다. 소수 첫째 자리로 반올림한다.
///
/// 입력 중 하나라도 0이면 0을 반환한다.
pub fn efficiency_percent(airflow_m3h: f64, static_pressure_pa: f64, power_kw: f64) -> f64 {
    if airflow_m3h == 0.0 || static_pressure_pa == 0.0 || power_kw == 0.0 {
        return 0.0;
    }
    let airflow_m3s = airflow_m3h / 3600.0;
    let power_w = power_kw * 1000.0;
    let efficiency = airflow_m3s * static_pressure_pa / power_w * 100.0;
    (efficiency * 10.0).round() / 10.0
}

/// 풍량 오름차순으로 정렬된 불변 성능 곡선.
///
/// 생성 시 중복 풍량과 음수/비유한 값을 거부한다. 편집 연산은 기존 곡선을
/// 건드리지 않고 새로 정렬된 곡선을 돌려준다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PerformancePoint>", into = "Vec<PerformancePoint>")]
pub struct PerformanceCurve {
    points: Vec<PerformancePoint>,
}

impl PerformanceCurve {
    pub fn new(mut points: Vec<PerformancePoint>) -> Result<Self, CurveError> {
        for (index, p) in points.iter().enumerate() {
            p.validate(index)?;
        }
        points.sort_by(|a, b| a.airflow.total_cmp(&b.airflow));
        if let Some(dup) = points.windows(2).find(|w| w[0].airflow == w[1].airflow) {
            return Err(CurveError::DuplicateAirflow(dup[0].airflow));
        }
        Ok(Self { points })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PerformancePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PerformancePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PerformancePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PerformancePoint> {
        self.points.last()
    }

    /// 샘플링된 풍량 범위 (최소, 최대).
    pub fn airflow_range(&self) -> Option<(f64, f64)> {
        Some((self.first()?.airflow, self.last()?.airflow))
    }

    /// 점 하나를 추가한 새 곡선.
    pub fn with_point(&self, point: PerformancePoint) -> Result<Self, CurveError> {
        let mut points = self.points.clone();
        points.push(point);
        Self::new(points)
    }

    /// `index` 위치의 점을 교체한 새 곡선. 풍량이 바뀌면 다시 정렬된다.
    pub fn with_point_replaced(
        &self,
        index: usize,
        point: PerformancePoint,
    ) -> Result<Self, CurveError> {
        let mut points = self.points.clone();
        let slot = points
            .get_mut(index)
            .ok_or(CurveError::IndexOutOfRange(index))?;
        *slot = point;
        Self::new(points)
    }

    /// `index` 위치의 점을 뺀 새 곡선. 마지막 남은 점은 지울 수 없다.
    pub fn without_point(&self, index: usize) -> Result<Self, CurveError> {
        if index >= self.points.len() {
            return Err(CurveError::IndexOutOfRange(index));
        }
        if self.points.len() <= 1 {
            return Err(CurveError::LastPoint);
        }
        let mut points = self.points.clone();
        points.remove(index);
        Ok(Self { points })
    }

    /// 관리자 입력용으로 다음 측정점을 제안한다.
    ///
    /// 마지막 점 기준으로 풍량 +5000 m³/h (100 단위), 정압 90% (10 단위, 0 이상),
    /// 동력 +0.5 kW (소수 첫째 자리)로 채운다. 빈 곡선이면 모두 0.
    pub fn suggest_next_point(&self) -> PerformancePoint {
        let Some(last) = self.last() else {
            return PerformancePoint::new(0.0, 0.0, 0.0);
        };
        let airflow = ((last.airflow + 5000.0) / 100.0).round() * 100.0;
        let static_pressure = ((last.static_pressure * 0.9 / 10.0).round() * 10.0).max(0.0);
        let power = ((last.power + 0.5) * 10.0).round() / 10.0;
        PerformancePoint::new(airflow, static_pressure, power)
    }
}

impl TryFrom<Vec<PerformancePoint>> for PerformanceCurve {
    type Error = CurveError;

    fn try_from(points: Vec<PerformancePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PerformanceCurve> for Vec<PerformancePoint> {
    fn from(curve: PerformanceCurve) -> Self {
        curve.points
    }
}

impl<'a> IntoIterator for &'a PerformanceCurve {
    type Item = &'a PerformancePoint;
    type IntoIter = std::slice::Iter<'a, PerformancePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
