/// 연간 운전비 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyUsage {
    /// 전력 단가 (통화/kWh)
    pub cost_per_kwh: f64,
    /// 일일 가동 시간(h)
    pub hours_per_day: f64,
    /// 연간 가동 일수
    pub days_per_year: f64,
}

impl Default for EnergyUsage {
    fn default() -> Self {
        Self {
            cost_per_kwh: 5000.0,
            hours_per_day: 8.0,
            days_per_year: 250.0,
        }
    }
}

impl EnergyUsage {
    pub fn annual_hours(&self) -> f64 {
        self.hours_per_day * self.days_per_year
    }
}

/// 정격 소비동력(kW) 기준 연간 전력 사용량(kWh).
pub fn annual_energy_kwh(power_kw: f64, usage: &EnergyUsage) -> f64 {
    power_kw * usage.annual_hours()
}

/// 연간 운전비 = 동력 × 연간 가동시간 × 단가.
pub fn annual_operating_cost(power_kw: f64, usage: &EnergyUsage) -> f64 {
    annual_energy_kwh(power_kw, usage) * usage.cost_per_kwh
}
