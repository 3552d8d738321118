//! 곡선 보간, 시스템 곡선, 운전점, 다중 곡선 정렬 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use fan_selection_toolbox::catalog::FanId;
use fan_selection_toolbox::performance::{
    align_curves, build_system_curve, efficiency_percent, interpolate, interpolate_field, resample,
    simulate, solve_operating_point, CurveError, CurveField, PerformanceCurve, PerformancePoint,
    SystemRequirement, MAX_RESAMPLE_STEPS,
};
use fan_selection_toolbox::units::{m3h_to_cfm, AirflowUnit, DisplayUnits, PressureUnit};

fn curve(points: &[(f64, f64, f64)]) -> PerformanceCurve {
    PerformanceCurve::new(
        points
            .iter()
            .map(|&(q, p, kw)| PerformancePoint::new(q, p, kw))
            .collect(),
    )
    .expect("valid curve")
}

fn axial() -> PerformanceCurve {
    curve(&[(0.0, 480.0, 2.5), (10_000.0, 400.0, 3.2), (25_000.0, 150.0, 4.5)])
}

#[test]
fn interpolate_midpoint() {
    assert_abs_diff_eq!(interpolate(&axial(), 5000.0), 440.0, epsilon = 1e-9);
}

#[test]
fn interpolate_exact_point() {
    assert_eq!(interpolate(&axial(), 10_000.0), 400.0);
}

#[test]
fn interpolate_out_of_range_is_zero() {
    let c = curve(&[(0.0, 480.0, 2.5), (25_000.0, 150.0, 4.5)]);
    assert_eq!(interpolate(&c, 30_000.0), 0.0);
    assert_eq!(interpolate(&c, -100.0), 0.0);
    assert_eq!(interpolate(&PerformanceCurve::empty(), 100.0), 0.0);
}

#[test]
fn interpolate_other_fields() {
    let c = axial();
    assert_abs_diff_eq!(
        interpolate_field(&c, 5000.0, CurveField::Power),
        2.85,
        epsilon = 1e-9
    );
    let e0 = c.points()[0].efficiency.unwrap_or(0.0);
    let e1 = c.points()[1].efficiency.unwrap_or(0.0);
    assert_abs_diff_eq!(
        interpolate_field(&c, 5000.0, CurveField::Efficiency),
        (e0 + e1) / 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn efficiency_is_derived_and_rounded() {
    assert_eq!(efficiency_percent(10_000.0, 400.0, 3.2), 34.7);
    assert_eq!(efficiency_percent(0.0, 400.0, 3.2), 0.0);
    assert_eq!(efficiency_percent(10_000.0, 400.0, 0.0), 0.0);
    assert_eq!(PerformancePoint::new(10_000.0, 400.0, 3.2).efficiency, Some(34.7));
    assert_eq!(
        PerformancePoint::measured(10_000.0, 400.0, 3.2, None).efficiency,
        None
    );
}

#[test]
fn curve_is_sorted_on_construction() {
    let c = curve(&[(25_000.0, 150.0, 4.5), (0.0, 480.0, 2.5), (10_000.0, 400.0, 3.2)]);
    let airflows: Vec<f64> = c.iter().map(|p| p.airflow).collect();
    assert_eq!(airflows, vec![0.0, 10_000.0, 25_000.0]);
    assert_eq!(c.airflow_range(), Some((0.0, 25_000.0)));
}

#[test]
fn curve_rejects_bad_points() {
    let dup = PerformanceCurve::new(vec![
        PerformancePoint::new(10_000.0, 400.0, 3.2),
        PerformancePoint::new(10_000.0, 390.0, 3.3),
    ]);
    assert_eq!(dup, Err(CurveError::DuplicateAirflow(10_000.0)));

    let nan = PerformanceCurve::new(vec![
        PerformancePoint::new(0.0, 480.0, 2.5),
        PerformancePoint::measured(f64::NAN, 1.0, 1.0, None),
    ]);
    assert_eq!(nan, Err(CurveError::NonFinite { index: 1 }));

    let negative = PerformanceCurve::new(vec![PerformancePoint::new(0.0, -1.0, 2.5)]);
    assert_eq!(negative, Err(CurveError::Negative { index: 0 }));
}

#[test]
fn curve_edits_return_new_curves() {
    let original = axial();
    let added = original
        .with_point(PerformancePoint::new(5000.0, 450.0, 2.9))
        .expect("add");
    assert_eq!(original.len(), 3);
    assert_eq!(added.len(), 4);
    assert_eq!(added.points()[1].airflow, 5000.0);

    // 풍량을 바꾸면 다시 정렬된다
    let moved = original
        .with_point_replaced(0, PerformancePoint::new(30_000.0, 100.0, 5.0))
        .expect("replace");
    assert_eq!(moved.last().map(|p| p.airflow), Some(30_000.0));
    assert_eq!(moved.first().map(|p| p.airflow), Some(10_000.0));

    let removed = original.without_point(1).expect("remove");
    assert_eq!(removed.len(), 2);
    assert_eq!(
        original.without_point(3),
        Err(CurveError::IndexOutOfRange(3))
    );
    let single = curve(&[(0.0, 480.0, 2.5)]);
    assert_eq!(single.without_point(0), Err(CurveError::LastPoint));
    assert!(original
        .with_point(PerformancePoint::new(10_000.0, 1.0, 1.0))
        .is_err());
}

#[test]
fn next_point_suggestion() {
    let next = axial().suggest_next_point();
    assert_eq!(next.airflow, 30_000.0);
    // 150 * 0.9 = 135 -> 10 단위 반올림 140
    assert_eq!(next.static_pressure, 140.0);
    assert_eq!(next.power, 5.0);
    assert_eq!(next.efficiency, Some(efficiency_percent(30_000.0, 140.0, 5.0)));

    let odd = curve(&[(0.0, 100.0, 1.0), (12_345.0, 50.0, 1.23)]);
    let next = odd.suggest_next_point();
    assert_eq!(next.airflow, 17_300.0);
    assert_eq!(next.static_pressure, 50.0);
    assert_eq!(next.power, 1.7);

    let empty = PerformanceCurve::empty().suggest_next_point();
    assert_eq!(
        (empty.airflow, empty.static_pressure, empty.power),
        (0.0, 0.0, 0.0)
    );
}

#[test]
fn curve_deserializes_through_validation() {
    #[derive(serde::Deserialize)]
    struct Holder {
        curve: PerformanceCurve,
    }
    let ok: Holder = toml::from_str(
        "curve = [{ airflow = 5.0, static_pressure = 1.0, power = 1.0 }, { airflow = 0.0, static_pressure = 2.0, power = 1.0 }]",
    )
    .expect("parse");
    assert_eq!(ok.curve.first().map(|p| p.airflow), Some(0.0));
    assert_eq!(ok.curve.first().and_then(|p| p.efficiency), None);

    let dup = toml::from_str::<Holder>(
        "curve = [{ airflow = 5.0, static_pressure = 1.0, power = 1.0 }, { airflow = 5.0, static_pressure = 2.0, power = 1.0 }]",
    );
    assert!(dup.is_err());
}

#[test]
fn resample_even_steps() {
    let r = resample(&axial(), 5);
    assert_eq!(r.len(), 6);
    assert_eq!(r.points()[1].airflow, 5000.0);
    assert_abs_diff_eq!(r.points()[1].static_pressure, 440.0, epsilon = 1e-9);
    assert_eq!(r.last().map(|p| p.airflow), Some(25_000.0));
    assert_eq!(r.last().map(|p| p.static_pressure), Some(150.0));

    assert_eq!(resample(&axial(), 0), axial());
    assert_eq!(resample(&axial(), usize::MAX).len(), MAX_RESAMPLE_STEPS + 1);
    let huge = resample(&axial(), 1e30_f64 as usize);
    assert_eq!(huge.last().map(|p| p.airflow), Some(25_000.0));
    let single = curve(&[(1000.0, 100.0, 1.0)]);
    assert_eq!(resample(&single, 10), single);
}

#[test]
fn system_curve_rejects_non_positive_airflow() {
    assert!(build_system_curve(&SystemRequirement::new(0.0, 400.0)).is_none());
    assert!(build_system_curve(&SystemRequirement::new(-10.0, 400.0)).is_none());
    assert!(build_system_curve(&SystemRequirement::new(f64::NAN, 400.0)).is_none());
    // q² 가 0으로 떨어지면 k 가 무한대
    assert!(build_system_curve(&SystemRequirement::new(1e-160, 400.0)).is_none());
    assert!(build_system_curve(&SystemRequirement::new(3600.0, f64::INFINITY)).is_none());
    let sim = simulate(&axial(), &SystemRequirement::new(1e-160, 400.0));
    assert!(sim.samples.iter().all(|s| s.system_pressure.is_none()));
}

#[test]
fn system_curve_reproduces_anchor() {
    let sys = build_system_curve(&SystemRequirement::new(3600.0, 100.0)).expect("curve");
    assert_eq!(sys.coefficient(), 100.0);
    assert_eq!(sys.pressure_at(3600.0), 100.0);
    assert_eq!(sys.pressure_at(0.0), 0.0);

    let sys = build_system_curve(&SystemRequirement::new(15_000.0, 300.0)).expect("curve");
    assert_relative_eq!(sys.pressure_at(15_000.0), 300.0, max_relative = 1e-12);
    assert_relative_eq!(sys.pressure_at(30_000.0), 1200.0, max_relative = 1e-12);
}

#[test]
fn operating_point_picks_smaller_gap() {
    let c = curve(&[(0.0, 480.0, 2.5), (25_000.0, 150.0, 4.5)]);
    let sys = build_system_curve(&SystemRequirement::new(15_000.0, 300.0)).expect("curve");
    let gap = |q: f64, p: f64| (p - sys.pressure_at(q)).abs();
    let expected = if gap(25_000.0, 150.0) < gap(0.0, 480.0) {
        25_000.0
    } else {
        0.0
    };
    let op = solve_operating_point(&c, &sys).expect("operating point");
    assert_eq!(op.airflow(), expected);
    assert_eq!(op.airflow(), 0.0);
    assert_eq!(op.power(), 2.5);
    assert_abs_diff_eq!(op.pressure_gap(), 480.0, epsilon = 1e-9);
}

#[test]
fn operating_point_tie_goes_to_lower_airflow() {
    // k = 100: 0에서 |100-0|, 7200에서 |300-400| 으로 동률
    let c = curve(&[(0.0, 100.0, 1.0), (7200.0, 300.0, 2.0)]);
    let sys = build_system_curve(&SystemRequirement::new(3600.0, 100.0)).expect("curve");
    let op = solve_operating_point(&c, &sys).expect("operating point");
    assert_eq!(op.airflow(), 0.0);
}

#[test]
fn operating_point_on_empty_curve() {
    let sys = build_system_curve(&SystemRequirement::new(3600.0, 100.0)).expect("curve");
    assert!(solve_operating_point(&PerformanceCurve::empty(), &sys).is_none());
    let sim = simulate(&PerformanceCurve::empty(), &SystemRequirement::new(3600.0, 100.0));
    assert!(sim.samples.is_empty());
    assert!(sim.operating_point.is_none());
}

#[test]
fn simulation_samples_and_conversion() {
    let sim = simulate(&axial(), &SystemRequirement::new(15_000.0, 300.0));
    assert_eq!(sim.samples.len(), 3);
    assert!(sim.samples.iter().all(|s| s.system_pressure.is_some()));
    let op = sim.operating_point.expect("operating point");
    assert_eq!(op.airflow(), 10_000.0);

    let imperial = sim.converted(DisplayUnits {
        airflow: AirflowUnit::Cfm,
        pressure: PressureUnit::InchWaterGauge,
    });
    let shown = imperial.operating_point.expect("operating point");
    assert_relative_eq!(shown.airflow(), m3h_to_cfm(10_000.0), max_relative = 1e-12);
    assert_eq!(shown.power(), op.power());
    assert_eq!(shown.efficiency(), op.efficiency());

    let invalid = simulate(&axial(), &SystemRequirement::new(0.0, 300.0));
    assert_eq!(invalid.samples.len(), 3);
    assert!(invalid.samples.iter().all(|s| s.system_pressure.is_none()));
    assert!(invalid.operating_point.is_none());
}

#[test]
fn align_disjoint_curves() {
    let a = axial();
    let b = curve(&[(5000.0, 900.0, 4.0), (20_000.0, 500.0, 6.0)]);
    let rows = align_curves([(FanId(1), &a), (FanId(2), &b)]);

    let airflows: Vec<f64> = rows.iter().map(|r| r.airflow).collect();
    assert_eq!(airflows, vec![0.0, 5000.0, 10_000.0, 20_000.0, 25_000.0]);
    for row in &rows {
        assert_eq!(row.pressure_for(FanId(1)), Some(interpolate(&a, row.airflow)));
        assert_eq!(row.pressure_for(FanId(2)), Some(interpolate(&b, row.airflow)));
    }
    assert_eq!(rows[0].pressure_for(FanId(2)), Some(0.0));
    assert_abs_diff_eq!(rows[1].pressure_for(FanId(1)).unwrap_or(0.0), 440.0, epsilon = 1e-9);
    assert_eq!(rows[0].pressure_for(FanId(3)), None);
}

#[test]
fn align_shared_points_are_deduplicated() {
    let a = axial();
    let rows = align_curves([(FanId(1), &a), (FanId(2), &a)]);
    assert_eq!(rows.len(), 3);
}
