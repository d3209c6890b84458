use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EVALUATE: &str = "main_menu.evaluate";
    pub const MAIN_MENU_SWEEP: &str = "main_menu.sweep";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const EVALUATE_HEADING: &str = "evaluate.heading";
    pub const PROMPT_DRY_BULB: &str = "prompt.dry_bulb";
    pub const EVALUATE_NON_POSITIVE: &str = "evaluate.non_positive";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const RESULT_HEAT_RATE: &str = "result.heat_rate";
    pub const RESULT_NET_POWER: &str = "result.net_power";
    pub const RESULT_SFC: &str = "result.sfc";

    pub const SWEEP_HEADING: &str = "sweep.heading";
    pub const SWEEP_TABLE_HEADER: &str = "sweep.table_header";
    pub const SWEEP_POWER_RISES: &str = "sweep.power_rises";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT: &str = "settings.current_unit";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_DESIGN_HEADING: &str = "settings.design_heading";
    pub const SETTINGS_KEEP_HINT: &str = "settings.keep_hint";

    pub const DESIGN_RHO_AIR: &str = "design.rho_air";
    pub const DESIGN_RHO_GAS: &str = "design.rho_gas";
    pub const DESIGN_COMB_TEMP: &str = "design.comb_mean_temp";
    pub const DESIGN_LHV: &str = "design.lhv";
    pub const DESIGN_DISCHARGE_PRESSURE: &str = "design.discharge_pressure";
    pub const DESIGN_FUEL_FLOW: &str = "design.fuel_flow";

    pub const GUI_TITLE: &str = "gui.title";
    pub const GUI_DRY_BULB: &str = "gui.dry_bulb";
    pub const GUI_ENTER_POSITIVE: &str = "gui.enter_positive";
    pub const GUI_DESIGN: &str = "gui.design";
    pub const GUI_RESET_DESIGN: &str = "gui.reset_design";
    pub const GUI_SAVE: &str = "gui.save";
    pub const GUI_AXIS_DRY_BULB: &str = "gui.axis_dry_bulb";
    pub const GUI_AXIS_HEAT_RATE: &str = "gui.axis_heat_rate";
    pub const GUI_AXIS_EFFICIENCY: &str = "gui.axis_efficiency";
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en 으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 locales/ 를 확인하고, 그래도 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or("[missing translation]")
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
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
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
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
                    walk(&format!("{prefix}.{k}"), v, out);
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
        MAIN_MENU_TITLE => "\n=== 가스터빈 성능 계산기 ===",
        MAIN_MENU_EVALUATE => "1) 건구 온도별 성능 계산",
        MAIN_MENU_SWEEP => "2) 건구 온도 스윕",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        EVALUATE_HEADING => "\n-- 성능 계산 --",
        PROMPT_DRY_BULB => "건구 온도",
        EVALUATE_NON_POSITIVE => "건구 온도는 0 보다 커야 합니다. 계산하지 않습니다.",
        RESULT_EFFICIENCY => "열효율:",
        RESULT_HEAT_RATE => "열소비율(Heat Rate):",
        RESULT_NET_POWER => "순출력:",
        RESULT_SFC => "연료소비율(SFC):",
        SWEEP_HEADING => "\n-- 건구 온도 스윕 --",
        SWEEP_TABLE_HEADER => "  Tdb[°F]   효율[%]   HR[BTU/kW]   Pt[MW]        SFC",
        SWEEP_POWER_RISES => "주의: 스윕 구간에서 순출력이 증가하는 구간이 있습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT => "현재 온도 입력 단위:",
        SETTINGS_UNIT_OPTIONS => "1) °F  2) °C  3) K  4) °R",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_DESIGN_HEADING => "설계 변수 (엔터 = 유지)",
        SETTINGS_KEEP_HINT => "현재값",
        DESIGN_RHO_AIR => "공기 밀도 [lb/ft³]",
        DESIGN_RHO_GAS => "연료가스 밀도 [lb/ft³]",
        DESIGN_COMB_TEMP => "연소기 평균 온도 [°F]",
        DESIGN_LHV => "저위발열량 [BTU/lb]",
        DESIGN_DISCHARGE_PRESSURE => "압축기 토출 압력 [psi]",
        DESIGN_FUEL_FLOW => "연료가스 유량 [ft³/h]",
        GUI_TITLE => "가스터빈 열역학 해석",
        GUI_DRY_BULB => "건구 온도",
        GUI_ENTER_POSITIVE => "0 보다 큰 건구 온도를 입력하세요.",
        GUI_DESIGN => "설계 변수",
        GUI_RESET_DESIGN => "기본값으로",
        GUI_SAVE => "설정 저장",
        GUI_AXIS_DRY_BULB => "건구 온도 (°F)",
        GUI_AXIS_HEAT_RATE => "Heat Rate (BTU/kW)",
        GUI_AXIS_EFFICIENCY => "열효율 (%)",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Gas Turbine Performance ===",
        MAIN_MENU_EVALUATE => "1) Evaluate at dry-bulb temperature",
        MAIN_MENU_SWEEP => "2) Dry-bulb sweep",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        EVALUATE_HEADING => "\n-- Cycle Evaluation --",
        PROMPT_DRY_BULB => "Dry-bulb temperature",
        EVALUATE_NON_POSITIVE => "Dry-bulb temperature must be greater than 0; nothing computed.",
        RESULT_EFFICIENCY => "Thermal efficiency:",
        RESULT_HEAT_RATE => "Heat rate:",
        RESULT_NET_POWER => "Net power:",
        RESULT_SFC => "Specific fuel consumption:",
        SWEEP_HEADING => "\n-- Dry-bulb Sweep --",
        SWEEP_TABLE_HEADER => "  Tdb[°F]   nth[%]    HR[BTU/kW]   Pt[MW]        SFC",
        SWEEP_POWER_RISES => "Note: net power rises somewhere in this sweep.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT => "Current input temperature unit:",
        SETTINGS_UNIT_OPTIONS => "1) °F  2) °C  3) K  4) °R",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_DESIGN_HEADING => "Design parameters (enter = keep)",
        SETTINGS_KEEP_HINT => "current",
        DESIGN_RHO_AIR => "Air density [lb/ft³]",
        DESIGN_RHO_GAS => "Fuel gas density [lb/ft³]",
        DESIGN_COMB_TEMP => "Mean combustor temperature [°F]",
        DESIGN_LHV => "Lower heating value [BTU/lb]",
        DESIGN_DISCHARGE_PRESSURE => "Compressor discharge pressure [psi]",
        DESIGN_FUEL_FLOW => "Fuel gas flow [ft³/h]",
        GUI_TITLE => "Thermodynamic Analysis of a Gas Turbine",
        GUI_DRY_BULB => "Dry-bulb temperature",
        GUI_ENTER_POSITIVE => "Enter a dry-bulb temperature greater than 0.",
        GUI_DESIGN => "Design parameters",
        GUI_RESET_DESIGN => "Reset to defaults",
        GUI_SAVE => "Save settings",
        GUI_AXIS_DRY_BULB => "Dry-bulb temperature (°F)",
        GUI_AXIS_HEAT_RATE => "Heat Rate (BTU/kW)",
        GUI_AXIS_EFFICIENCY => "Thermal efficiency (%)",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn korean_table_covers_menu() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) 종료");
        assert_eq!(tr.language(), Language::Ko);
    }

    #[test]
    fn unknown_key_is_marked() {
        assert_eq!(Translator::new("en").t("nope"), "[missing translation]");
    }

    #[test]
    fn sectioned_pack_flattens_keys() {
        let map = parse_toml_to_map("[result]\nheat_rate = \"HR:\"\n").unwrap();
        assert_eq!(map.get(keys::RESULT_HEAT_RATE).map(String::as_str), Some("HR:"));
    }
}
