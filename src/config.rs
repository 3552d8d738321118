use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::units::{AirflowUnit, DisplayUnits, PressureUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// m³/h, Pa. 내부 계산 기본값.
    Metric,
    /// CFM, inWG
    Imperial,
}

/// 각 물리량별 기본 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub airflow: AirflowUnit,
    pub pressure: PressureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

impl DefaultUnits {
    /// 프리셋에 맞는 단위 세트.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                airflow: AirflowUnit::CubicMeterPerHour,
                pressure: PressureUnit::Pascal,
            },
            UnitSystem::Imperial => Self {
                airflow: AirflowUnit::Cfm,
                pressure: PressureUnit::InchWaterGauge,
            },
        }
    }
}

impl From<DefaultUnits> for DisplayUnits {
    fn from(value: DefaultUnits) -> Self {
        DisplayUnits {
            airflow: value.airflow,
            pressure: value.pressure,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 언어팩 TOML 디렉터리
    pub language_pack_dir: Option<String>,
    /// 팬 카탈로그 TOML 경로. 없으면 내장 데모 카탈로그를 쓴다.
    pub catalog_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            language: "auto".to_string(),
            language_pack_dir: None,
            catalog_path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// 프리셋을 바꾸고 기본 단위도 함께 맞춘다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }

    pub fn display_units(&self) -> DisplayUnits {
        self.default_units.into()
    }
}
