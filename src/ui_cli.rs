use std::io::{self, BufRead, Write};

use crate::app::{AppError, Session};
use crate::catalog::{
    aligned_chart, annual_energy_kwh, annual_operating_cost, comparison_table, Dimensions,
    ElectricalSpecs, EnergyUsage, Fan, FanId, SpecField, SpecRow, ToggleOutcome,
};
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::performance::{
    resample, simulate, PerformancePoint, Simulation, SystemRequirement, MAX_RESAMPLE_STEPS,
};
use crate::quantity::QuantityKind;
use crate::units::DisplayUnits;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Selection,
    Details,
    Compare,
    UnitConversion,
    Admin,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_SELECTION,
        keys::MAIN_MENU_DETAILS,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_ADMIN,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Selection),
            "2" => return Ok(MenuChoice::Details),
            "3" => return Ok(MenuChoice::Compare),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Admin),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 선정 조건을 입력받아 맞는 팬 목록을 보여주고 비교 목록을 편집한다.
pub fn handle_selection(
    tr: &Translator,
    cfg: &Config,
    session: &mut Session,
) -> Result<(), AppError> {
    let units = cfg.display_units();
    println!("{}", tr.t(keys::SELECTION_HEADING));
    println!("{} {}", tr.t(keys::SELECTION_CURRENT_FILTER), tr.t(keys::KEEP_DEFAULT_HINT));

    let filter = &mut session.filter;
    let airflow = read_f64_or(
        &unit_prompt(tr.t(keys::PROMPT_FILTER_AIRFLOW), units.airflow.symbol()),
        units.airflow_from_base(filter.airflow),
        tr,
    )?;
    filter.airflow = units.airflow_to_base(airflow).max(0.0);
    let pressure = read_f64_or(
        &unit_prompt(tr.t(keys::PROMPT_FILTER_PRESSURE), units.pressure.symbol()),
        units.pressure_from_base(filter.static_pressure),
        tr,
    )?;
    filter.static_pressure = units.pressure_to_base(pressure).max(0.0);
    filter.temperature = read_f64_or(
        &format!("{}: ", tr.t(keys::PROMPT_FILTER_TEMPERATURE)),
        filter.temperature,
        tr,
    )?;

    let matches = session.filter.apply(session.catalog.iter());
    println!("{} {}", tr.t(keys::SELECTION_RESULT_COUNT), matches.len());
    if matches.is_empty() {
        println!("{}", tr.t(keys::SELECTION_NO_MATCH));
        return Ok(());
    }
    for fan in &matches {
        println!("{}", fan_summary_line(fan, units, session.compare.contains(fan.id)));
    }

    let input = read_line(tr.t(keys::PROMPT_TOGGLE_COMPARE))?;
    for id in parse_id_list(&input) {
        if session.catalog.get(id).is_none() {
            println!("{} {id}", tr.t(keys::FAN_NOT_FOUND));
            continue;
        }
        let key = match session.compare.toggle(id) {
            ToggleOutcome::Added => keys::COMPARE_ADDED,
            ToggleOutcome::Removed => keys::COMPARE_REMOVED,
            ToggleOutcome::Full => keys::COMPARE_FULL,
        };
        println!("{} {id}", tr.t(key));
    }
    Ok(())
}

/// 팬 사양, 운전점 시뮬레이션, 경제성 분석을 차례로 보여준다.
pub fn handle_details(tr: &Translator, cfg: &Config, session: &Session) -> Result<(), AppError> {
    let units = cfg.display_units();
    println!("{}", tr.t(keys::DETAILS_HEADING));
    let Some(fan) = read_fan(tr, session)? else {
        return Ok(());
    };
    println!("{}", tr.t(keys::SPECS_HEADING));
    let table = comparison_table(&[fan], units);
    for row in &table {
        println!("  {}: {}", spec_label(tr, row.field, units), row.values[0]);
    }

    println!("{} {}", tr.t(keys::SIMULATION_HEADING), tr.t(keys::KEEP_DEFAULT_HINT));
    let default_req = SystemRequirement::default_for(fan);
    let airflow = read_f64_or(
        &unit_prompt(tr.t(keys::PROMPT_SYSTEM_AIRFLOW), units.airflow.symbol()),
        units.airflow_from_base(default_req.airflow),
        tr,
    )?;
    let pressure = read_f64_or(
        &unit_prompt(tr.t(keys::PROMPT_SYSTEM_PRESSURE), units.pressure.symbol()),
        units.pressure_from_base(default_req.pressure),
        tr,
    )?;
    // 음수 입력은 0으로 막는다
    let requirement = SystemRequirement::new(
        units.airflow_to_base(airflow).max(0.0),
        units.pressure_to_base(pressure).max(0.0),
    );
    let input = read_f64_or(&format!("{}: ", tr.t(keys::PROMPT_RESAMPLE_STEPS)), 0.0, tr)?;
    if input > MAX_RESAMPLE_STEPS as f64 {
        println!("{} {MAX_RESAMPLE_STEPS}", tr.t(keys::RESAMPLE_STEPS_LIMITED));
    }
    let steps = resample_steps(input);
    let curve = if steps > 0 {
        resample(&fan.performance_curve, steps)
    } else {
        fan.performance_curve.clone()
    };

    let simulation = simulate(&curve, &requirement);
    println!("{}", tr.t(keys::SIMULATION_TABLE_HEADER));
    for line in simulation_table_lines(&simulation, units) {
        println!("{line}");
    }
    match operating_point_line(&simulation, units) {
        Some(line) => println!("{} {line}", tr.t(keys::OPERATING_POINT_HEADING)),
        None => println!("{}", tr.t(keys::OPERATING_POINT_NONE)),
    }

    println!("{} {}", tr.t(keys::ECONOMICS_HEADING), tr.t(keys::KEEP_DEFAULT_HINT));
    let defaults = EnergyUsage::default();
    let usage = EnergyUsage {
        cost_per_kwh: read_f64_or(
            &format!("{}: ", tr.t(keys::PROMPT_COST_PER_KWH)),
            defaults.cost_per_kwh,
            tr,
        )?,
        hours_per_day: read_f64_or(
            &format!("{}: ", tr.t(keys::PROMPT_HOURS_PER_DAY)),
            defaults.hours_per_day,
            tr,
        )?,
        days_per_year: read_f64_or(
            &format!("{}: ", tr.t(keys::PROMPT_DAYS_PER_YEAR)),
            defaults.days_per_year,
            tr,
        )?,
    };
    println!(
        "{} {:.0} ({:.0} kWh)",
        tr.t(keys::ECONOMICS_RESULT),
        annual_operating_cost(fan.power_consumption, &usage),
        annual_energy_kwh(fan.power_consumption, &usage)
    );
    Ok(())
}

/// 비교 목록의 팬들을 사양표와 공통 축 곡선으로 비교한다.
pub fn handle_compare(tr: &Translator, cfg: &Config, session: &Session) -> Result<(), AppError> {
    let units = cfg.display_units();
    println!("{}", tr.t(keys::COMPARE_HEADING));
    let fans = session.compare.resolve(&session.catalog);
    if fans.len() < 2 {
        println!("{}", tr.t(keys::COMPARE_NEED_TWO));
        return Ok(());
    }
    let header: Vec<String> = fans.iter().map(|f| format!("{} {}", f.id, f.model)).collect();
    println!("{:<28} | {}", "", header.join(" | "));
    for row in comparison_table(&fans, units) {
        println!(
            "{:<28} | {}",
            spec_label(tr, row.field, units),
            comparison_cells(&row).join(" | ")
        );
    }

    println!("{}", tr.t(keys::COMPARE_CHART_HEADING));
    println!("{:>12} | {}", units.airflow.symbol(), header.join(" | "));
    for row in aligned_chart(&fans, units) {
        let cells: Vec<String> = fans
            .iter()
            .map(|f| format!("{:.2}", row.pressure_for(f.id).unwrap_or(0.0)))
            .collect();
        println!("{:>12.0} | {}", row.airflow, cells.join(" | "));
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => QuantityKind::Airflow,
        "2" => QuantityKind::Pressure,
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(());
        }
    };
    let value = read_f64(tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE), tr)?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result:.4} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

/// 카탈로그 관리(팬 추가/삭제/수정, 곡선 점 편집) 메뉴를 처리한다.
pub fn handle_admin(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ADMIN_HEADING));
    for fan in session.catalog.iter() {
        println!("  {} {} ({})", fan.id, fan.model, fan.manufacturer);
    }
    println!("{}", tr.t(keys::ADMIN_OPTIONS));
    match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => {
            let fan = read_fan_fields(&mut io::stdin().lock(), tr, Fan::default())?;
            let id = session.catalog.add(fan);
            println!("{} {id}", tr.t(keys::ADMIN_FAN_ADDED));
        }
        "2" => {
            let id = FanId(read_f64(tr.t(keys::PROMPT_FAN_ID), tr)? as u32);
            let removed = session.catalog.remove(id)?;
            if session.compare.contains(id) {
                session.compare.toggle(id);
            }
            println!("{} {} {}", tr.t(keys::ADMIN_FAN_REMOVED), removed.id, removed.model);
        }
        "3" => {
            let Some(fan) = read_fan(tr, session)? else {
                return Ok(());
            };
            let id = fan.id;
            let suggested = fan.performance_curve.suggest_next_point();
            let point = read_point(tr, &suggested)?;
            session.catalog.edit_curve(id, |c| c.with_point(point))?;
            print_curve(tr, session, id);
        }
        "4" => {
            let Some(fan) = read_fan(tr, session)? else {
                return Ok(());
            };
            let id = fan.id;
            print_curve(tr, session, id);
            let index = read_point_index(tr)?;
            let current = session
                .catalog
                .get(id)
                .and_then(|f| f.performance_curve.points().get(index).copied())
                .unwrap_or_else(|| PerformancePoint::new(0.0, 0.0, 0.0));
            let point = read_point(tr, &current)?;
            session
                .catalog
                .edit_curve(id, |c| c.with_point_replaced(index, point))?;
            print_curve(tr, session, id);
        }
        "5" => {
            let Some(fan) = read_fan(tr, session)? else {
                return Ok(());
            };
            let id = fan.id;
            print_curve(tr, session, id);
            let index = read_point_index(tr)?;
            session.catalog.edit_curve(id, |c| c.without_point(index))?;
            print_curve(tr, session, id);
        }
        "6" => {
            let Some(fan) = read_fan(tr, session)? else {
                return Ok(());
            };
            let edited = read_fan_fields(&mut io::stdin().lock(), tr, fan.clone())?;
            let id = edited.id;
            session.catalog.update(edited)?;
            println!("{} {id}", tr.t(keys::ADMIN_FAN_UPDATED));
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let system = match sel.trim() {
        "" => return Ok(()),
        "1" => UnitSystem::Metric,
        "2" => UnitSystem::Imperial,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.apply_unit_system(system);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn read_fan<'a>(tr: &Translator, session: &'a Session) -> Result<Option<&'a Fan>, AppError> {
    let id = FanId(read_f64(tr.t(keys::PROMPT_FAN_ID), tr)? as u32);
    let fan = session.catalog.get(id);
    if fan.is_none() {
        println!("{}", tr.t(keys::FAN_NOT_FOUND));
    }
    Ok(fan)
}

/// 팬 정보 입력 폼. `base`의 값을 기본값으로 보여주며 엔터면 그대로 둔다.
/// 성능 곡선과 ID는 건드리지 않는다.
fn read_fan_fields<R: BufRead>(
    input: &mut R,
    tr: &Translator,
    base: Fan,
) -> Result<Fan, AppError> {
    println!("{}", tr.t(keys::KEEP_DEFAULT_HINT));
    let model = read_text_or_from(input, tr.t(keys::PROMPT_MODEL), &base.model)?;
    let fan_type = read_text_or_from(input, tr.t(keys::PROMPT_FAN_TYPE), &base.fan_type)?;
    let manufacturer = read_text_or_from(input, tr.t(keys::PROMPT_MANUFACTURER), &base.manufacturer)?;
    let description = read_text_or_from(input, tr.t(keys::PROMPT_DESCRIPTION), &base.description)?;
    let image_url = read_text_or_from(input, tr.t(keys::PROMPT_IMAGE_URL), &base.image_url)?;
    let fluid_types = read_text_or_from(input, tr.t(keys::PROMPT_FLUID_TYPES), &base.fluid_types.join(", "))?;
    let max_airflow = read_f64_or_from(input, tr.t(keys::PROMPT_MAX_AIRFLOW), base.max_airflow, tr)?;
    let max_static_pressure =
        read_f64_or_from(input, tr.t(keys::PROMPT_MAX_PRESSURE), base.max_static_pressure, tr)?;
    let power_consumption = read_f64_or_from(input, tr.t(keys::PROMPT_POWER), base.power_consumption, tr)?;
    let motor_rpm = read_f64_or_from(input, tr.t(keys::PROMPT_RPM), base.motor_rpm, tr)?;
    let noise_level = read_f64_or_from(input, tr.t(keys::PROMPT_NOISE), base.noise_level, tr)?;
    let min_temp = read_f64_or_from(input, tr.t(keys::PROMPT_MIN_TEMP), base.min_temp, tr)?;
    let max_temp = read_f64_or_from(input, tr.t(keys::PROMPT_MAX_TEMP), base.max_temp, tr)?;
    let price = read_f64_or_from(input, tr.t(keys::PROMPT_PRICE), base.price, tr)?;

    let e = base.electrical_specs;
    let electrical_specs = ElectricalSpecs {
        voltage: read_f64_or_from(input, tr.t(keys::PROMPT_VOLTAGE), e.voltage, tr)?,
        phase: read_f64_or_from(input, tr.t(keys::PROMPT_PHASE), f64::from(e.phase), tr)?
            .round()
            .clamp(0.0, f64::from(u8::MAX)) as u8,
        frequency: read_f64_or_from(input, tr.t(keys::PROMPT_FREQUENCY), e.frequency, tr)?,
    };
    let d = base.dimensions;
    let dimensions = Dimensions {
        height: read_f64_or_from(input, tr.t(keys::PROMPT_HEIGHT), d.height, tr)?,
        width: read_f64_or_from(input, tr.t(keys::PROMPT_WIDTH), d.width, tr)?,
        depth: read_f64_or_from(input, tr.t(keys::PROMPT_DEPTH), d.depth, tr)?,
    };

    Ok(Fan {
        model,
        fan_type,
        manufacturer,
        description,
        image_url,
        fluid_types: parse_text_list(&fluid_types),
        max_airflow,
        max_static_pressure,
        power_consumption,
        motor_rpm,
        noise_level,
        min_temp,
        max_temp,
        price,
        electrical_specs,
        dimensions,
        ..base
    })
}

fn read_point(tr: &Translator, current: &PerformancePoint) -> Result<PerformancePoint, AppError> {
    println!("{}", tr.t(keys::KEEP_DEFAULT_HINT));
    let airflow = read_f64_or(
        &format!("{}: ", tr.t(keys::PROMPT_POINT_AIRFLOW)),
        current.airflow,
        tr,
    )?;
    let pressure = read_f64_or(
        &format!("{}: ", tr.t(keys::PROMPT_POINT_PRESSURE)),
        current.static_pressure,
        tr,
    )?;
    let power = read_f64_or(&format!("{}: ", tr.t(keys::PROMPT_POINT_POWER)), current.power, tr)?;
    Ok(PerformancePoint::new(airflow, pressure, power))
}

fn read_point_index(tr: &Translator) -> Result<usize, AppError> {
    let n = read_f64(tr.t(keys::PROMPT_POINT_INDEX), tr)?;
    // 화면에는 1부터 번호를 붙인다
    Ok((n.max(1.0) as usize) - 1)
}

fn print_curve(tr: &Translator, session: &Session, id: FanId) {
    let Some(fan) = session.catalog.get(id) else {
        return;
    };
    println!("{} {}", tr.t(keys::CURVE_HEADING), fan.model);
    for (i, p) in fan.performance_curve.iter().enumerate() {
        println!(
            "  {:>2}) {:>10.0} m³/h  {:>8.1} Pa  {:>6.2} kW  {:>5.1} %",
            i + 1,
            p.airflow,
            p.static_pressure,
            p.power,
            p.efficiency.unwrap_or(0.0)
        );
    }
    println!("{} {}", tr.t(keys::ADMIN_CURVE_UPDATED), fan.performance_curve.len());
}

fn spec_label(tr: &Translator, field: SpecField, units: DisplayUnits) -> String {
    let key = match field {
        SpecField::Type => keys::SPEC_TYPE,
        SpecField::Manufacturer => keys::SPEC_MANUFACTURER,
        SpecField::MaxAirflow => keys::SPEC_MAX_AIRFLOW,
        SpecField::MaxStaticPressure => keys::SPEC_MAX_PRESSURE,
        SpecField::PowerConsumption => keys::SPEC_POWER,
        SpecField::MotorRpm => keys::SPEC_RPM,
        SpecField::NoiseLevel => keys::SPEC_NOISE,
        SpecField::TemperatureRange => keys::SPEC_TEMP_RANGE,
        SpecField::Dimensions => keys::SPEC_DIMENSIONS,
        SpecField::Electrical => keys::SPEC_ELECTRICAL,
        SpecField::Price => keys::SPEC_PRICE,
    };
    match field {
        SpecField::MaxAirflow => format!("{} [{}]", tr.t(key), units.airflow.symbol()),
        SpecField::MaxStaticPressure => format!("{} [{}]", tr.t(key), units.pressure.symbol()),
        _ => tr.t(key).to_string(),
    }
}

/// 비교표 셀. 최선 값에는 `*`를 붙인다.
fn comparison_cells(row: &SpecRow) -> Vec<String> {
    let best = row.best_indices();
    row.values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if best.contains(&i) {
                format!("*{v}")
            } else {
                v.to_string()
            }
        })
        .collect()
}

fn fan_summary_line(fan: &Fan, units: DisplayUnits, in_compare: bool) -> String {
    format!(
        "{} {:>4} {:<12} {:<14} {:>10.0} {} {:>8.1} {} {:>6.2} kW",
        if in_compare { "[*]" } else { "[ ]" },
        fan.id,
        fan.model,
        fan.fan_type,
        units.airflow_from_base(fan.max_airflow),
        units.airflow.symbol(),
        units.pressure_from_base(fan.max_static_pressure),
        units.pressure.symbol(),
        fan.power_consumption
    )
}

/// 시뮬레이션 차트 데이터를 표 형태 문자열로 만든다.
fn simulation_table_lines(simulation: &Simulation, units: DisplayUnits) -> Vec<String> {
    let shown = simulation.converted(units);
    shown
        .samples
        .iter()
        .map(|s| {
            let system = s
                .system_pressure
                .map(|v| format!("{v:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let efficiency = s
                .point
                .efficiency
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "N/A".to_string());
            format!(
                "{:>10.0} | {:>10.2} | {:>10} | {:>6.2} | {:>5}",
                s.point.airflow, s.point.static_pressure, system, s.point.power, efficiency
            )
        })
        .collect()
}

/// 운전점 한 줄 요약. 운전점이 없으면 `None`.
fn operating_point_line(simulation: &Simulation, units: DisplayUnits) -> Option<String> {
    let op = simulation.converted(units).operating_point?;
    let efficiency = op
        .efficiency()
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "N/A".to_string());
    Some(format!(
        "{:.0} {} / {:.2} {} / {:.2} kW / {} %",
        op.airflow(),
        units.airflow.symbol(),
        op.static_pressure(),
        units.pressure.symbol(),
        op.power(),
        efficiency
    ))
}

fn unit_prompt(label: &str, unit: &str) -> String {
    format!("{label} [{unit}]: ")
}

/// 쉼표/공백으로 구분된 팬 ID 목록을 읽는다. 숫자가 아닌 조각은 무시한다.
fn parse_id_list(input: &str) -> Vec<FanId> {
    input
        .split([',', ' '])
        .filter_map(|s| s.trim().parse::<u32>().ok())
        .map(FanId)
        .collect()
}

/// 입력한 재샘플링 구간 수. 1 미만이면 0(재샘플링 안 함), 상한을 넘으면 상한.
fn resample_steps(input: f64) -> usize {
    if input.is_nan() || input < 1.0 {
        return 0;
    }
    input.min(MAX_RESAMPLE_STEPS as f64) as usize
}

/// 빈 입력이면 `current`를 그대로 쓴다.
fn text_or(input: &str, current: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        current.to_string()
    } else {
        input.to_string()
    }
}

/// 쉼표로 구분된 목록. 빈 항목은 버린다.
fn parse_text_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof`.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_text_or_from<R: BufRead>(
    input: &mut R,
    prompt: &str,
    current: &str,
) -> Result<String, AppError> {
    let s = read_line_from(input, &format!("{prompt}({current}) "))?;
    Ok(text_or(&s, current))
}

fn read_f64(prompt: &str, tr: &Translator) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 `current`를 그대로 쓴다.
fn read_f64_or(prompt: &str, current: f64, tr: &Translator) -> Result<f64, AppError> {
    read_f64_or_from(&mut io::stdin().lock(), prompt, current, tr)
}

fn read_f64_or_from<R: BufRead>(
    input: &mut R,
    prompt: &str,
    current: f64,
    tr: &Translator,
) -> Result<f64, AppError> {
    loop {
        let s = read_line_from(input, &format!("{}({current:.2}) ", prompt))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FanCatalog;
    use crate::performance::{PerformanceCurve, PerformancePoint};
    use crate::units::{AirflowUnit, PressureUnit};

    fn curve() -> PerformanceCurve {
        PerformanceCurve::new(vec![
            PerformancePoint::new(0.0, 480.0, 2.5),
            PerformancePoint::new(10_000.0, 400.0, 3.2),
            PerformancePoint::new(25_000.0, 150.0, 4.5),
        ])
        .unwrap()
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut empty = io::Cursor::new(Vec::<u8>::new());
        let err = read_line_from(&mut empty, "> ").unwrap_err();
        assert!(matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));

        let mut blank = io::Cursor::new(b"\n".to_vec());
        assert_eq!(read_line_from(&mut blank, "> ").unwrap(), "\n");
        assert!(read_line_from(&mut blank, "> ").is_err());

        // 숫자 재입력 루프도 입력이 끝나면 빠져나온다
        let tr = Translator::new("en");
        let mut junk = io::Cursor::new(b"abc\n".to_vec());
        assert!(read_f64_or_from(&mut junk, "> ", 1.0, &tr).is_err());
    }

    #[test]
    fn fan_form_edits_existing_record() {
        let tr = Translator::new("en");
        let mut catalog = FanCatalog::builtin().unwrap();
        let base = catalog.get(FanId(1)).unwrap().clone();
        // model, type, manufacturer, description, image, fluids,
        // airflow, pressure, power, rpm, noise, min/max temp, price,
        // voltage, phase, frequency, height, width, depth
        let answers = "AX-710\n\n\nNew description\nhttp://img/ax.png\nClean air, Smoke\n\
                       26000\n\n\n\n\n\n\n\n\
                       400\n1\n60\n\n\n500\n";
        let mut input = io::Cursor::new(answers.as_bytes().to_vec());
        let edited = read_fan_fields(&mut input, &tr, base.clone()).unwrap();

        assert_eq!(edited.id, base.id);
        assert_eq!(edited.model, "AX-710");
        assert_eq!(edited.fan_type, base.fan_type);
        assert_eq!(edited.description, "New description");
        assert_eq!(edited.image_url, "http://img/ax.png");
        assert_eq!(edited.fluid_types, vec!["Clean air".to_string(), "Smoke".to_string()]);
        assert_eq!(edited.max_airflow, 26_000.0);
        assert_eq!(edited.price, base.price);
        assert_eq!(edited.electrical_specs.voltage, 400.0);
        assert_eq!(edited.electrical_specs.phase, 1);
        assert_eq!(edited.electrical_specs.frequency, 60.0);
        assert_eq!(edited.dimensions.height, base.dimensions.height);
        assert_eq!(edited.dimensions.depth, 500.0);
        assert_eq!(edited.performance_curve, base.performance_curve);

        catalog.update(edited).unwrap();
        assert_eq!(catalog.get(FanId(1)).map(|f| f.model.as_str()), Some("AX-710"));
    }

    #[test]
    fn resample_steps_are_bounded() {
        assert_eq!(resample_steps(0.0), 0);
        assert_eq!(resample_steps(0.9), 0);
        assert_eq!(resample_steps(-5.0), 0);
        assert_eq!(resample_steps(12.7), 12);
        assert_eq!(resample_steps(1e30), MAX_RESAMPLE_STEPS);
        assert_eq!(resample_steps(f64::INFINITY), MAX_RESAMPLE_STEPS);
    }

    #[test]
    fn text_fields_keep_current_on_blank() {
        assert_eq!(text_or("  \n", "AX-630"), "AX-630");
        assert_eq!(text_or(" AX-710\n", "AX-630"), "AX-710");
        assert_eq!(
            parse_text_list("Clean air, , Dusty air"),
            vec!["Clean air".to_string(), "Dusty air".to_string()]
        );
        assert!(parse_text_list("").is_empty());
    }

    #[test]
    fn id_list_ignores_garbage() {
        assert_eq!(parse_id_list("1, 3,x  4"), vec![FanId(1), FanId(3), FanId(4)]);
        assert!(parse_id_list("\n").is_empty());
    }

    #[test]
    fn invalid_requirement_prints_dash_for_system_pressure() {
        let sim = simulate(&curve(), &SystemRequirement::new(0.0, 300.0));
        let lines = simulation_table_lines(&sim, DisplayUnits::default());
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.contains(" - ")));
        assert!(operating_point_line(&sim, DisplayUnits::default()).is_none());
    }

    #[test]
    fn operating_point_line_uses_display_units() {
        let sim = simulate(&curve(), &SystemRequirement::new(15_000.0, 300.0));
        let imperial = DisplayUnits {
            airflow: AirflowUnit::Cfm,
            pressure: PressureUnit::InchWaterGauge,
        };
        let line = operating_point_line(&sim, imperial).expect("operating point");
        assert!(line.contains("CFM"));
        assert!(line.contains("inWG"));
    }

    #[test]
    fn comparison_cells_mark_best_value() {
        let catalog = FanCatalog::builtin().unwrap();
        let fans: Vec<&Fan> = catalog.iter().collect();
        let table = comparison_table(&fans, DisplayUnits::default());
        let noise = table
            .iter()
            .find(|r| r.field == SpecField::NoiseLevel)
            .unwrap();
        let cells = comparison_cells(noise);
        assert_eq!(cells.iter().filter(|c| c.starts_with('*')).count(), 1);
        assert!(cells[2].starts_with('*'));
    }
}
