//! 팬 비교: 비교 목록(최대 4대), 사양 비교표, 공통 축 성능 차트.

use super::fan::{Fan, FanId};
use super::store::FanCatalog;
use crate::performance::{align_curves, AlignedRow};
use crate::units::DisplayUnits;

/// 한 번에 비교할 수 있는 최대 팬 수.
pub const MAX_COMPARE: usize = 4;

/// [`CompareList::toggle`] 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// 이미 가득 차서 추가하지 않음
    Full,
}

/// 선택 순서를 유지하는 비교 대상 목록.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareList {
    ids: Vec<FanId>,
}

impl CompareList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: FanId) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= MAX_COMPARE {
            return ToggleOutcome::Full;
        }
        self.ids.push(id);
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: FanId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[FanId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 두 대 이상이어야 비교 화면을 띄운다.
    pub fn can_compare(&self) -> bool {
        self.ids.len() >= 2
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// 카탈로그에서 실제 팬을 찾는다. 그 사이 삭제된 팬은 건너뛴다.
    pub fn resolve<'a>(&self, catalog: &'a FanCatalog) -> Vec<&'a Fan> {
        self.ids.iter().filter_map(|id| catalog.get(*id)).collect()
    }
}

/// 비교표에서 더 좋은 값의 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Min,
    Max,
}

/// 비교표 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecField {
    Type,
    Manufacturer,
    MaxAirflow,
    MaxStaticPressure,
    PowerConsumption,
    MotorRpm,
    NoiseLevel,
    TemperatureRange,
    Dimensions,
    Electrical,
    Price,
}

impl SpecField {
    pub const ALL: [SpecField; 11] = [
        SpecField::Type,
        SpecField::Manufacturer,
        SpecField::MaxAirflow,
        SpecField::MaxStaticPressure,
        SpecField::PowerConsumption,
        SpecField::MotorRpm,
        SpecField::NoiseLevel,
        SpecField::TemperatureRange,
        SpecField::Dimensions,
        SpecField::Electrical,
        SpecField::Price,
    ];

    pub fn highlight(&self) -> Option<Highlight> {
        match self {
            SpecField::MaxAirflow | SpecField::MaxStaticPressure => Some(Highlight::Max),
            SpecField::PowerConsumption | SpecField::NoiseLevel | SpecField::Price => {
                Some(Highlight::Min)
            }
            _ => None,
        }
    }

    fn value(&self, fan: &Fan, units: DisplayUnits) -> SpecValue {
        match self {
            SpecField::Type => SpecValue::Text(fan.fan_type.clone()),
            SpecField::Manufacturer => SpecValue::Text(fan.manufacturer.clone()),
            SpecField::MaxAirflow => SpecValue::Number(units.airflow_from_base(fan.max_airflow)),
            SpecField::MaxStaticPressure => {
                SpecValue::Number(units.pressure_from_base(fan.max_static_pressure))
            }
            SpecField::PowerConsumption => SpecValue::Number(fan.power_consumption),
            SpecField::MotorRpm => SpecValue::Number(fan.motor_rpm),
            SpecField::NoiseLevel => SpecValue::Number(fan.noise_level),
            SpecField::TemperatureRange => {
                SpecValue::Text(format!("{} ~ {}", fan.min_temp, fan.max_temp))
            }
            SpecField::Dimensions => SpecValue::Text(format!(
                "{}x{}x{}",
                fan.dimensions.height, fan.dimensions.width, fan.dimensions.depth
            )),
            SpecField::Electrical => SpecValue::Text(format!(
                "{}V / {}Ph / {}Hz",
                fan.electrical_specs.voltage,
                fan.electrical_specs.phase,
                fan.electrical_specs.frequency
            )),
            SpecField::Price => SpecValue::Number(fan.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl SpecValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SpecValue::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpecValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecValue::Number(v) => write!(f, "{v:.2}"),
            SpecValue::Text(s) => f.write_str(s),
        }
    }
}

/// 비교표 한 행 (팬 순서대로 값).
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRow {
    pub field: SpecField,
    pub values: Vec<SpecValue>,
}

impl SpecRow {
    /// 최선 값을 가진 열 인덱스. 숫자 값이 두 개 이상일 때만 정해지며 동률이면 모두 포함한다.
    pub fn best_indices(&self) -> Vec<usize> {
        let Some(highlight) = self.field.highlight() else {
            return Vec::new();
        };
        let numbers: Vec<f64> = self.values.iter().filter_map(SpecValue::as_number).collect();
        if numbers.len() < 2 {
            return Vec::new();
        }
        let best = match highlight {
            Highlight::Max => numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Highlight::Min => numbers.iter().copied().fold(f64::INFINITY, f64::min),
        };
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.as_number() == Some(best))
            .map(|(i, _)| i)
            .collect()
    }
}

/// 사양 비교표를 만든다. 풍량/정압은 표시 단위로 환산한다.
pub fn comparison_table(fans: &[&Fan], units: DisplayUnits) -> Vec<SpecRow> {
    SpecField::ALL
        .iter()
        .map(|field| SpecRow {
            field: *field,
            values: fans.iter().map(|fan| field.value(fan, units)).collect(),
        })
        .collect()
}

/// 공통 풍량 축 성능 차트 데이터 (표시 단위).
pub fn aligned_chart(fans: &[&Fan], units: DisplayUnits) -> Vec<AlignedRow> {
    align_curves(fans.iter().map(|f| (f.id, &f.performance_curve)))
        .iter()
        .map(|row| row.converted(units))
        .collect()
}
