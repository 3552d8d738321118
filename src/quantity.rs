/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Airflow,
    Pressure,
}

impl QuantityKind {
    /// 내부 기준 단위 기호(m³/h, Pa).
    pub fn base_symbol(&self) -> &'static str {
        match self {
            QuantityKind::Airflow => "m³/h",
            QuantityKind::Pressure => "Pa",
        }
    }
}
