//! 단위 정의 및 변환 모듈 모음.

pub mod airflow;
pub mod pressure;

pub use airflow::{cfm_to_m3h, convert_airflow, m3h_to_cfm, AirflowUnit};
pub use pressure::{convert_pressure, inwg_to_pa, pa_to_inwg, PressureUnit};

/// 풍량/압력 표시 단위 한 쌍. 차트와 표를 같은 단위로 맞출 때 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUnits {
    pub airflow: AirflowUnit,
    pub pressure: PressureUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            airflow: AirflowUnit::CubicMeterPerHour,
            pressure: PressureUnit::Pascal,
        }
    }
}

impl DisplayUnits {
    /// 내부 기준(m³/h) 풍량을 표시 단위로 바꾼다.
    pub fn airflow_from_base(&self, m3h: f64) -> f64 {
        convert_airflow(m3h, AirflowUnit::CubicMeterPerHour, self.airflow)
    }

    /// 내부 기준(Pa) 압력을 표시 단위로 바꾼다.
    pub fn pressure_from_base(&self, pa: f64) -> f64 {
        convert_pressure(pa, PressureUnit::Pascal, self.pressure)
    }

    pub fn airflow_to_base(&self, value: f64) -> f64 {
        convert_airflow(value, self.airflow, AirflowUnit::CubicMeterPerHour)
    }

    pub fn pressure_to_base(&self, value: f64) -> f64 {
        convert_pressure(value, self.pressure, PressureUnit::Pascal)
    }
}
