use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const KEEP_DEFAULT_HINT: &str = "general.keep_default_hint";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SELECTION: &str = "main_menu.selection";
    pub const MAIN_MENU_DETAILS: &str = "main_menu.details";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_ADMIN: &str = "main_menu.admin";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SELECTION_HEADING: &str = "selection.heading";
    pub const SELECTION_CURRENT_FILTER: &str = "selection.current_filter";
    pub const PROMPT_FILTER_AIRFLOW: &str = "prompt.filter_airflow";
    pub const PROMPT_FILTER_PRESSURE: &str = "prompt.filter_pressure";
    pub const PROMPT_FILTER_TEMPERATURE: &str = "prompt.filter_temperature";
    pub const SELECTION_RESULT_COUNT: &str = "selection.result_count";
    pub const SELECTION_NO_MATCH: &str = "selection.no_match";
    pub const PROMPT_TOGGLE_COMPARE: &str = "prompt.toggle_compare";
    pub const COMPARE_ADDED: &str = "compare.added";
    pub const COMPARE_REMOVED: &str = "compare.removed";
    pub const COMPARE_FULL: &str = "compare.full";

    pub const DETAILS_HEADING: &str = "details.heading";
    pub const PROMPT_FAN_ID: &str = "prompt.fan_id";
    pub const FAN_NOT_FOUND: &str = "error.fan_not_found";
    pub const SPECS_HEADING: &str = "details.specs_heading";
    pub const SIMULATION_HEADING: &str = "simulation.heading";
    pub const PROMPT_SYSTEM_AIRFLOW: &str = "prompt.system_airflow";
    pub const PROMPT_SYSTEM_PRESSURE: &str = "prompt.system_pressure";
    pub const PROMPT_RESAMPLE_STEPS: &str = "prompt.resample_steps";
    pub const RESAMPLE_STEPS_LIMITED: &str = "simulation.resample_steps_limited";
    pub const SIMULATION_TABLE_HEADER: &str = "simulation.table_header";
    pub const OPERATING_POINT_HEADING: &str = "simulation.operating_point";
    pub const OPERATING_POINT_NONE: &str = "simulation.operating_point_none";
    pub const ECONOMICS_HEADING: &str = "economics.heading";
    pub const PROMPT_COST_PER_KWH: &str = "prompt.cost_per_kwh";
    pub const PROMPT_HOURS_PER_DAY: &str = "prompt.hours_per_day";
    pub const PROMPT_DAYS_PER_YEAR: &str = "prompt.days_per_year";
    pub const ECONOMICS_RESULT: &str = "economics.result";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_NEED_TWO: &str = "compare.need_two";
    pub const COMPARE_CHART_HEADING: &str = "compare.chart_heading";

    pub const SPEC_TYPE: &str = "spec.type";
    pub const SPEC_MANUFACTURER: &str = "spec.manufacturer";
    pub const SPEC_MAX_AIRFLOW: &str = "spec.max_airflow";
    pub const SPEC_MAX_PRESSURE: &str = "spec.max_pressure";
    pub const SPEC_POWER: &str = "spec.power";
    pub const SPEC_RPM: &str = "spec.rpm";
    pub const SPEC_NOISE: &str = "spec.noise";
    pub const SPEC_TEMP_RANGE: &str = "spec.temp_range";
    pub const SPEC_DIMENSIONS: &str = "spec.dimensions";
    pub const SPEC_ELECTRICAL: &str = "spec.electrical";
    pub const SPEC_PRICE: &str = "spec.price";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const ADMIN_HEADING: &str = "admin.heading";
    pub const ADMIN_OPTIONS: &str = "admin.options";
    pub const PROMPT_MODEL: &str = "prompt.model";
    pub const PROMPT_FAN_TYPE: &str = "prompt.fan_type";
    pub const PROMPT_MANUFACTURER: &str = "prompt.manufacturer";
    pub const PROMPT_MAX_AIRFLOW: &str = "prompt.max_airflow";
    pub const PROMPT_MAX_PRESSURE: &str = "prompt.max_pressure";
    pub const PROMPT_POWER: &str = "prompt.power";
    pub const PROMPT_RPM: &str = "prompt.rpm";
    pub const PROMPT_NOISE: &str = "prompt.noise";
    pub const PROMPT_MIN_TEMP: &str = "prompt.min_temp";
    pub const PROMPT_MAX_TEMP: &str = "prompt.max_temp";
    pub const PROMPT_PRICE: &str = "prompt.price";
    pub const PROMPT_DESCRIPTION: &str = "prompt.description";
    pub const PROMPT_IMAGE_URL: &str = "prompt.image_url";
    pub const PROMPT_FLUID_TYPES: &str = "prompt.fluid_types";
    pub const PROMPT_VOLTAGE: &str = "prompt.voltage";
    pub const PROMPT_PHASE: &str = "prompt.phase";
    pub const PROMPT_FREQUENCY: &str = "prompt.frequency";
    pub const PROMPT_HEIGHT: &str = "prompt.height";
    pub const PROMPT_WIDTH: &str = "prompt.width";
    pub const PROMPT_DEPTH: &str = "prompt.depth";
    pub const PROMPT_POINT_AIRFLOW: &str = "prompt.point_airflow";
    pub const PROMPT_POINT_PRESSURE: &str = "prompt.point_pressure";
    pub const PROMPT_POINT_POWER: &str = "prompt.point_power";
    pub const PROMPT_POINT_INDEX: &str = "prompt.point_index";
    pub const ADMIN_FAN_ADDED: &str = "admin.fan_added";
    pub const ADMIN_FAN_REMOVED: &str = "admin.fan_removed";
    pub const ADMIN_FAN_UPDATED: &str = "admin.fan_updated";
    pub const ADMIN_CURVE_UPDATED: &str = "admin.curve_updated";
    pub const CURVE_HEADING: &str = "admin.curve_heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "language pack overrides loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 번역 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let built_in = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.unwrap_or("[missing translation]")
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    std::env::var("LANG")
        .ok()
        .as_deref()
        .and_then(normalize_locale_string)
}

fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        KEEP_DEFAULT_HINT => "(엔터 = 현재값 유지)",
        MAIN_MENU_TITLE => "\n=== Fan Selection Toolbox ===",
        MAIN_MENU_SELECTION => "1) 팬 선정 (조건 검색)",
        MAIN_MENU_DETAILS => "2) 팬 상세 / 운전점 시뮬레이션",
        MAIN_MENU_COMPARE => "3) 팬 비교",
        MAIN_MENU_UNIT_CONVERSION => "4) 단위 변환기",
        MAIN_MENU_ADMIN => "5) 카탈로그 관리",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_SELECTION => "잘못된 선택입니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SELECTION_HEADING => "\n-- 팬 선정 --",
        SELECTION_CURRENT_FILTER => "현재 조건:",
        PROMPT_FILTER_AIRFLOW => "필요 풍량",
        PROMPT_FILTER_PRESSURE => "필요 정압",
        PROMPT_FILTER_TEMPERATURE => "운전 온도 [°C]",
        SELECTION_RESULT_COUNT => "조건에 맞는 팬 수:",
        SELECTION_NO_MATCH => "조건에 맞는 팬이 없습니다. 조건을 완화해 보세요.",
        PROMPT_TOGGLE_COMPARE => "비교 목록에 추가/제거할 팬 ID (쉼표 구분, 엔터 = 건너뛰기): ",
        COMPARE_ADDED => "비교 목록에 추가:",
        COMPARE_REMOVED => "비교 목록에서 제거:",
        COMPARE_FULL => "비교 목록이 가득 찼습니다 (최대 4대):",
        DETAILS_HEADING => "\n-- 팬 상세 --",
        PROMPT_FAN_ID => "팬 ID: ",
        FAN_NOT_FOUND => "해당 ID의 팬이 없습니다.",
        SPECS_HEADING => "[사양]",
        SIMULATION_HEADING => "[운전점 시뮬레이션]",
        PROMPT_SYSTEM_AIRFLOW => "시스템 요구 풍량",
        PROMPT_SYSTEM_PRESSURE => "시스템 정압",
        PROMPT_RESAMPLE_STEPS => "재샘플링 구간 수 (0 = 원본 곡선 사용)",
        RESAMPLE_STEPS_LIMITED => "구간 수가 너무 커서 상한으로 줄였습니다:",
        SIMULATION_TABLE_HEADER => "풍량 | 팬 정압 | 시스템 압력 | 동력[kW] | 효율[%]",
        OPERATING_POINT_HEADING => "시뮬레이션 운전점:",
        OPERATING_POINT_NONE => "유효한 요구 풍량(0 초과)을 입력해야 운전점을 계산할 수 있습니다.",
        ECONOMICS_HEADING => "[경제성 분석]",
        PROMPT_COST_PER_KWH => "전력 단가 [/kWh]",
        PROMPT_HOURS_PER_DAY => "일일 가동 시간 [h]",
        PROMPT_DAYS_PER_YEAR => "연간 가동 일수",
        ECONOMICS_RESULT => "연간 예상 운전비:",
        COMPARE_HEADING => "\n-- 팬 비교 --",
        COMPARE_NEED_TWO => "비교하려면 팬을 2대 이상 선택하세요 (팬 선정 메뉴).",
        COMPARE_CHART_HEADING => "[성능 곡선 비교 - 공통 풍량 축]",
        SPEC_TYPE => "팬 종류",
        SPEC_MANUFACTURER => "제조사",
        SPEC_MAX_AIRFLOW => "최대 풍량",
        SPEC_MAX_PRESSURE => "최대 정압",
        SPEC_POWER => "소비 동력 [kW]",
        SPEC_RPM => "모터 회전수 [RPM]",
        SPEC_NOISE => "소음 [dB]",
        SPEC_TEMP_RANGE => "운전 온도 범위 [°C]",
        SPEC_DIMENSIONS => "치수 HxWxD [mm]",
        SPEC_ELECTRICAL => "전기 사양",
        SPEC_PRICE => "예상 가격",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 풍량 (m3/h, cfm)  2) 정압 (Pa, inWG)",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위: ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위: ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        ADMIN_HEADING => "\n-- 카탈로그 관리 --",
        ADMIN_OPTIONS => "1) 팬 추가  2) 팬 삭제  3) 곡선 점 추가  4) 곡선 점 수정  5) 곡선 점 삭제  6) 팬 정보 수정",
        PROMPT_MODEL => "모델명: ",
        PROMPT_FAN_TYPE => "팬 종류: ",
        PROMPT_MANUFACTURER => "제조사: ",
        PROMPT_MAX_AIRFLOW => "최대 풍량 [m³/h]: ",
        PROMPT_MAX_PRESSURE => "최대 정압 [Pa]: ",
        PROMPT_POWER => "소비 동력 [kW]: ",
        PROMPT_RPM => "모터 회전수 [RPM]: ",
        PROMPT_NOISE => "소음 [dB]: ",
        PROMPT_MIN_TEMP => "최저 운전 온도 [°C]: ",
        PROMPT_MAX_TEMP => "최고 운전 온도 [°C]: ",
        PROMPT_PRICE => "가격: ",
        PROMPT_DESCRIPTION => "설명: ",
        PROMPT_IMAGE_URL => "이미지 URL: ",
        PROMPT_FLUID_TYPES => "취급 유체 (쉼표로 구분): ",
        PROMPT_VOLTAGE => "전압 [V]: ",
        PROMPT_PHASE => "상 수: ",
        PROMPT_FREQUENCY => "주파수 [Hz]: ",
        PROMPT_HEIGHT => "높이 [mm]: ",
        PROMPT_WIDTH => "폭 [mm]: ",
        PROMPT_DEPTH => "깊이 [mm]: ",
        PROMPT_POINT_AIRFLOW => "풍량 [m³/h]",
        PROMPT_POINT_PRESSURE => "정압 [Pa]",
        PROMPT_POINT_POWER => "동력 [kW]",
        PROMPT_POINT_INDEX => "점 번호: ",
        ADMIN_FAN_ADDED => "팬이 추가되었습니다:",
        ADMIN_FAN_REMOVED => "팬이 삭제되었습니다:",
        ADMIN_FAN_UPDATED => "팬 정보가 수정되었습니다:",
        ADMIN_CURVE_UPDATED => "성능 곡선이 갱신되었습니다. 점 수:",
        CURVE_HEADING => "[성능 곡선]",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Metric (m³/h, Pa)  2) Imperial (CFM, inWG)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        KEEP_DEFAULT_HINT => "(enter = keep current)",
        MAIN_MENU_TITLE => "\n=== Fan Selection Toolbox ===",
        MAIN_MENU_SELECTION => "1) Fan selection (filter)",
        MAIN_MENU_DETAILS => "2) Fan details / operating-point simulation",
        MAIN_MENU_COMPARE => "3) Compare fans",
        MAIN_MENU_UNIT_CONVERSION => "4) Unit converter",
        MAIN_MENU_ADMIN => "5) Catalog admin",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INVALID_SELECTION => "Invalid selection.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SELECTION_HEADING => "\n-- Fan Selection --",
        SELECTION_CURRENT_FILTER => "Current filter:",
        PROMPT_FILTER_AIRFLOW => "Required airflow",
        PROMPT_FILTER_PRESSURE => "Required static pressure",
        PROMPT_FILTER_TEMPERATURE => "Operating temperature [°C]",
        SELECTION_RESULT_COUNT => "Matching fans:",
        SELECTION_NO_MATCH => "No fan matches the filter. Try relaxing it.",
        PROMPT_TOGGLE_COMPARE => "Fan IDs to add/remove from compare list (comma separated, enter = skip): ",
        COMPARE_ADDED => "Added to compare list:",
        COMPARE_REMOVED => "Removed from compare list:",
        COMPARE_FULL => "Compare list is full (max 4):",
        DETAILS_HEADING => "\n-- Fan Details --",
        PROMPT_FAN_ID => "Fan ID: ",
        FAN_NOT_FOUND => "No fan with that ID.",
        SPECS_HEADING => "[Specifications]",
        SIMULATION_HEADING => "[Operating-point simulation]",
        PROMPT_SYSTEM_AIRFLOW => "System required airflow",
        PROMPT_SYSTEM_PRESSURE => "System static pressure",
        PROMPT_RESAMPLE_STEPS => "Resample intervals (0 = use measured curve)",
        RESAMPLE_STEPS_LIMITED => "Too many intervals; limited to:",
        SIMULATION_TABLE_HEADER => "Airflow | Fan pressure | System pressure | Power[kW] | Eff[%]",
        OPERATING_POINT_HEADING => "Simulated operating point:",
        OPERATING_POINT_NONE => "Enter a valid required airflow (> 0) to compute the operating point.",
        ECONOMICS_HEADING => "[Economic analysis]",
        PROMPT_COST_PER_KWH => "Energy cost [/kWh]",
        PROMPT_HOURS_PER_DAY => "Operating hours per day",
        PROMPT_DAYS_PER_YEAR => "Operating days per year",
        ECONOMICS_RESULT => "Estimated annual running cost:",
        COMPARE_HEADING => "\n-- Fan Comparison --",
        COMPARE_NEED_TWO => "Select at least 2 fans to compare (fan selection menu).",
        COMPARE_CHART_HEADING => "[Performance curves - shared airflow axis]",
        SPEC_TYPE => "Fan type",
        SPEC_MANUFACTURER => "Manufacturer",
        SPEC_MAX_AIRFLOW => "Max airflow",
        SPEC_MAX_PRESSURE => "Max static pressure",
        SPEC_POWER => "Power [kW]",
        SPEC_RPM => "Motor speed [RPM]",
        SPEC_NOISE => "Noise [dB]",
        SPEC_TEMP_RANGE => "Temperature range [°C]",
        SPEC_DIMENSIONS => "Dimensions HxWxD [mm]",
        SPEC_ELECTRICAL => "Electrical",
        SPEC_PRICE => "Estimated price",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Airflow (m3/h, cfm)  2) Static pressure (Pa, inWG)",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit: ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit: ",
        UNIT_CONVERSION_RESULT => "Result:",
        ADMIN_HEADING => "\n-- Catalog Admin --",
        ADMIN_OPTIONS => "1) Add fan  2) Delete fan  3) Add curve point  4) Edit curve point  5) Delete curve point  6) Edit fan",
        PROMPT_MODEL => "Model: ",
        PROMPT_FAN_TYPE => "Fan type: ",
        PROMPT_MANUFACTURER => "Manufacturer: ",
        PROMPT_MAX_AIRFLOW => "Max airflow [m³/h]: ",
        PROMPT_MAX_PRESSURE => "Max static pressure [Pa]: ",
        PROMPT_POWER => "Power consumption [kW]: ",
        PROMPT_RPM => "Motor speed [RPM]: ",
        PROMPT_NOISE => "Noise level [dB]: ",
        PROMPT_MIN_TEMP => "Min operating temperature [°C]: ",
        PROMPT_MAX_TEMP => "Max operating temperature [°C]: ",
        PROMPT_PRICE => "Price: ",
        PROMPT_DESCRIPTION => "Description: ",
        PROMPT_IMAGE_URL => "Image URL: ",
        PROMPT_FLUID_TYPES => "Fluid types (comma separated): ",
        PROMPT_VOLTAGE => "Voltage [V]: ",
        PROMPT_PHASE => "Phase: ",
        PROMPT_FREQUENCY => "Frequency [Hz]: ",
        PROMPT_HEIGHT => "Height [mm]: ",
        PROMPT_WIDTH => "Width [mm]: ",
        PROMPT_DEPTH => "Depth [mm]: ",
        PROMPT_POINT_AIRFLOW => "Airflow [m³/h]",
        PROMPT_POINT_PRESSURE => "Static pressure [Pa]",
        PROMPT_POINT_POWER => "Power [kW]",
        PROMPT_POINT_INDEX => "Point number: ",
        ADMIN_FAN_ADDED => "Fan added:",
        ADMIN_FAN_REMOVED => "Fan removed:",
        ADMIN_FAN_UPDATED => "Fan updated:",
        ADMIN_CURVE_UPDATED => "Performance curve updated. Points:",
        CURVE_HEADING => "[Performance curve]",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Metric (m³/h, Pa)  2) Imperial (CFM, inWG)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_fallback_for_unknown_language() {
        let tr = Translator::new("de-de");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
    }

    #[test]
    fn korean_table_is_used_for_ko() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn pack_overrides_builtin_strings() {
        let map = parse_toml_to_map("[general]\napp_exit = \"bye\"\n").expect("map");
        let tr = Translator {
            lang: Language::En,
            overrides: Some(map),
        };
        assert_eq!(tr.t(keys::APP_EXIT), "bye");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
    }
}
