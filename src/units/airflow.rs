use serde::{Deserialize, Serialize};

/// 풍량 단위. 내부 기준은 m³/h 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirflowUnit {
    CubicMeterPerHour,
    Cfm,
}

/// 1 m³/h 당 CFM.
pub const CFM_PER_M3H: f64 = 0.588578;

pub fn m3h_to_cfm(value: f64) -> f64 {
    value * CFM_PER_M3H
}

pub fn cfm_to_m3h(value: f64) -> f64 {
    value / CFM_PER_M3H
}

fn to_m3h(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::CubicMeterPerHour => value,
        AirflowUnit::Cfm => cfm_to_m3h(value),
    }
}

fn from_m3h(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::CubicMeterPerHour => value,
        AirflowUnit::Cfm => m3h_to_cfm(value),
    }
}

/// 풍량을 변환한다. 모든 실수(음수, 0 포함)에 대해 정의된다.
pub fn convert_airflow(value: f64, from: AirflowUnit, to: AirflowUnit) -> f64 {
    if from == to {
        return value;
    }
    from_m3h(to_m3h(value, from), to)
}

impl AirflowUnit {
    /// 화면 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            AirflowUnit::CubicMeterPerHour => "m³/h",
            AirflowUnit::Cfm => "CFM",
        }
    }
}
