use serde::{Deserialize, Serialize};

use super::fan::Fan;

/// 고객 화면의 선정 조건. 풍량 m³/h, 정압 Pa, 온도 °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanFilter {
    pub airflow: f64,
    pub static_pressure: f64,
    pub temperature: f64,
}

impl Default for FanFilter {
    fn default() -> Self {
        Self {
            airflow: 15_000.0,
            static_pressure: 400.0,
            temperature: 25.0,
        }
    }
}

impl FanFilter {
    /// 정격 풍량/정압이 조건 이상이고 운전 온도 범위가 조건 온도를 포함하면 통과.
    pub fn matches(&self, fan: &Fan) -> bool {
        fan.max_airflow >= self.airflow
            && fan.max_static_pressure >= self.static_pressure
            && fan.supports_temperature(self.temperature)
    }

    /// 조건을 만족하는 팬을 카탈로그 순서대로 돌려준다.
    pub fn apply<'a, I>(&self, fans: I) -> Vec<&'a Fan>
    where
        I: IntoIterator<Item = &'a Fan>,
    {
        fans.into_iter().filter(|f| self.matches(f)).collect()
    }
}
