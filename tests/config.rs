//! 설정 파일 로드/저장 테스트.
use fan_selection_toolbox::config::{load_or_default, Config, UnitSystem};
use fan_selection_toolbox::units::{AirflowUnit, PressureUnit};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
}

#[test]
fn unit_system_survives_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.apply_unit_system(UnitSystem::Imperial);
    cfg.catalog_path = Some("fans.toml".to_string());
    cfg.save_to(&path).expect("save");

    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
    let units = loaded.display_units();
    assert_eq!(units.airflow, AirflowUnit::Cfm);
    assert_eq!(units.pressure, PressureUnit::InchWaterGauge);
}

#[test]
fn partial_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"ko\"\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.unit_system, UnitSystem::Metric);
    assert_eq!(cfg.display_units().airflow, AirflowUnit::CubicMeterPerHour);
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn broken_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = [").expect("write");
    assert!(load_or_default(&path).is_err());
}
