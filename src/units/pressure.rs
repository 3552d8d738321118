use serde::{Deserialize, Serialize};

/// 정압 단위. 내부 기준은 Pa 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    InchWaterGauge,
}

/// 1 Pa 당 inWG.
pub const INWG_PER_PA: f64 = 0.00401463;

pub fn pa_to_inwg(value: f64) -> f64 {
    value * INWG_PER_PA
}

pub fn inwg_to_pa(value: f64) -> f64 {
    value / INWG_PER_PA
}

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::InchWaterGauge => inwg_to_pa(value),
    }
}

fn from_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::InchWaterGauge => pa_to_inwg(value),
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_pascal(to_pascal(value, from), to)
}

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::InchWaterGauge => "inWG",
        }
    }
}
