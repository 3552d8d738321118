use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m3/h`, `cfm`, `Pa`, `inWG` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Airflow => {
            let from = parse_airflow_unit(from_unit_str)?;
            let to = parse_airflow_unit(to_unit_str)?;
            Ok(convert_airflow(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
    }
}

pub fn parse_airflow_unit(s: &str) -> Result<AirflowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/h" | "m³/h" | "m3h" | "cmh" => Ok(AirflowUnit::CubicMeterPerHour),
        "cfm" | "ft3/min" => Ok(AirflowUnit::Cfm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "inwg" | "inwc" | "in.wg" | "inh2o" => Ok(PressureUnit::InchWaterGauge),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
