//! 풍량/압력 단위 변환 회귀 테스트.
use approx::assert_relative_eq;
use fan_selection_toolbox::conversion::{convert, parse_airflow_unit, ConversionError};
use fan_selection_toolbox::quantity::QuantityKind;
use fan_selection_toolbox::units::{
    cfm_to_m3h, convert_airflow, convert_pressure, inwg_to_pa, m3h_to_cfm, pa_to_inwg,
    AirflowUnit, DisplayUnits, PressureUnit,
};

fn sweep() -> impl Iterator<Item = f64> {
    (-20..=200).map(|i| i as f64 * 137.25).chain([1e-3, 0.5, 1e7])
}

#[test]
fn airflow_round_trip_sweep() {
    for x in sweep() {
        assert_relative_eq!(cfm_to_m3h(m3h_to_cfm(x)), x, max_relative = 1e-6);
        assert_relative_eq!(m3h_to_cfm(cfm_to_m3h(x)), x, max_relative = 1e-6);
    }
}

#[test]
fn pressure_round_trip_sweep() {
    for x in sweep() {
        assert_relative_eq!(inwg_to_pa(pa_to_inwg(x)), x, max_relative = 1e-6);
        assert_relative_eq!(pa_to_inwg(inwg_to_pa(x)), x, max_relative = 1e-6);
    }
}

#[test]
fn fixed_factors() {
    assert_relative_eq!(m3h_to_cfm(1000.0), 588.578, epsilon = 1e-9);
    assert_relative_eq!(pa_to_inwg(249.0), 249.0 * 0.00401463, epsilon = 1e-12);
    assert_eq!(m3h_to_cfm(0.0), 0.0);
}

#[test]
fn same_unit_is_identity() {
    assert_eq!(
        convert_airflow(1234.5, AirflowUnit::Cfm, AirflowUnit::Cfm),
        1234.5
    );
    assert_eq!(
        convert_pressure(-3.0, PressureUnit::Pascal, PressureUnit::Pascal),
        -3.0
    );
}

#[test]
fn string_conversion() {
    let cfm = convert(QuantityKind::Airflow, 1000.0, "m3/h", "CFM").expect("airflow");
    assert_relative_eq!(cfm, 588.578, epsilon = 1e-9);
    let pa = convert(QuantityKind::Pressure, 1.0, "inWG", "Pa").expect("pressure");
    assert_relative_eq!(pa, 1.0 / 0.00401463, max_relative = 1e-12);
    assert_eq!(parse_airflow_unit(" m³/h ").ok(), Some(AirflowUnit::CubicMeterPerHour));
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(QuantityKind::Pressure, 1.0, "bar", "Pa").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(u) if u == "bar"));
}

#[test]
fn display_units_round_trip() {
    let imperial = DisplayUnits {
        airflow: AirflowUnit::Cfm,
        pressure: PressureUnit::InchWaterGauge,
    };
    let shown = imperial.airflow_from_base(15_000.0);
    assert_relative_eq!(imperial.airflow_to_base(shown), 15_000.0, max_relative = 1e-9);
    let shown = imperial.pressure_from_base(400.0);
    assert_relative_eq!(imperial.pressure_to_base(shown), 400.0, max_relative = 1e-9);
    assert_eq!(DisplayUnits::default().airflow_from_base(42.0), 42.0);
}
