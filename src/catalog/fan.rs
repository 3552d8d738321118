use serde::{Deserialize, Serialize};

use crate::performance::{PerformanceCurve, PerformancePoint};

/// 카탈로그 안에서 팬을 식별하는 번호.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FanId(pub u32);

impl std::fmt::Display for FanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 전기 사양.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricalSpecs {
    /// V
    pub voltage: f64,
    pub phase: u8,
    /// Hz
    pub frequency: f64,
}

impl Default for ElectricalSpecs {
    fn default() -> Self {
        Self {
            voltage: 380.0,
            phase: 3,
            frequency: 50.0,
        }
    }
}

/// 외형 치수(mm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
}

/// 카탈로그의 팬 한 대.
///
/// 정격값 단위: 풍량 m³/h, 정압 Pa, 동력 kW, 소음 dB, 온도 °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fan {
    pub id: FanId,
    pub model: String,
    #[serde(rename = "type")]
    pub fan_type: String,
    pub manufacturer: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    pub max_airflow: f64,
    pub max_static_pressure: f64,
    pub power_consumption: f64,
    pub motor_rpm: f64,
    pub noise_level: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    #[serde(default)]
    pub fluid_types: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub electrical_specs: ElectricalSpecs,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub performance_curve: PerformanceCurve,
}

impl Default for Fan {
    /// 관리자 신규 등록 폼의 초기값.
    fn default() -> Self {
        Self {
            id: FanId(0),
            model: String::new(),
            fan_type: "Axial".to_string(),
            manufacturer: String::new(),
            image_url: String::new(),
            description: String::new(),
            max_airflow: 0.0,
            max_static_pressure: 0.0,
            power_consumption: 0.0,
            motor_rpm: 0.0,
            noise_level: 0.0,
            min_temp: -20.0,
            max_temp: 60.0,
            fluid_types: vec!["Clean air".to_string()],
            price: 0.0,
            electrical_specs: ElectricalSpecs::default(),
            dimensions: Dimensions::default(),
            performance_curve: PerformanceCurve::new(vec![PerformancePoint::new(0.0, 0.0, 0.0)])
                .unwrap_or_default(),
        }
    }
}

impl Fan {
    /// 운전 온도 범위 안인지.
    pub fn supports_temperature(&self, temp_c: f64) -> bool {
        self.min_temp <= temp_c && temp_c <= self.max_temp
    }
}
