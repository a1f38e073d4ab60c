use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CYCLE: &str = "main_menu.cycle_analysis";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CYCLE_HEADING: &str = "cycle.heading";
    pub const PROMPT_PRESSURE_RATIO: &str = "prompt.pressure_ratio";
    pub const PROMPT_TURBINE_INLET: &str = "prompt.turbine_inlet_temp";
    pub const PROMPT_AMBIENT: &str = "prompt.ambient_temp";
    pub const PROMPT_HEAT_RATIO: &str = "prompt.heat_ratio";
    pub const PROMPT_CP: &str = "prompt.cp";
    pub const RESULT_T2: &str = "result.compressor_exit_temp";
    pub const RESULT_T4: &str = "result.turbine_exit_temp";
    pub const RESULT_COMPRESSOR_WORK: &str = "result.compressor_work";
    pub const RESULT_TURBINE_WORK: &str = "result.turbine_work";
    pub const RESULT_HEAT_INPUT: &str = "result.heat_input";
    pub const RESULT_NET_WORK: &str = "result.net_work";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const NOTE_DEGENERATE: &str = "cycle.note_degenerate";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_USING_DEFAULTS: &str = "report.using_defaults";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_SESSION_ONLY: &str = "settings.session_only";
    pub const SETTINGS_INVALID: &str = "settings.invalid";

    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
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

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
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
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
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

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== AD-HTC Gas Cycle Analyzer ===",
        MAIN_MENU_CYCLE => "1) 가스 사이클 해석",
        MAIN_MENU_REPORT => "2) 기술 보고서 출력",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CYCLE_HEADING => "\n-- 브레이튼 사이클 해석 --",
        PROMPT_PRESSURE_RATIO => "압력비 (통상 5~20): ",
        PROMPT_TURBINE_INLET => "터빈 입구 온도 값: ",
        PROMPT_AMBIENT => "대기 온도 값: ",
        PROMPT_HEAT_RATIO => "비열비 k (엔터 시 1.4): ",
        PROMPT_CP => "정압비열 cp [kJ/(kg·K)] (엔터 시 1.005): ",
        RESULT_T2 => "압축기 출구 온도 t2",
        RESULT_T4 => "터빈 출구 온도 t4",
        RESULT_COMPRESSOR_WORK => "압축기 일",
        RESULT_TURBINE_WORK => "터빈 일",
        RESULT_HEAT_INPUT => "열입력",
        RESULT_NET_WORK => "정미 출력",
        RESULT_EFFICIENCY => "열효율",
        NOTE_DEGENERATE => "참고: 열입력이 0 이하이므로 효율은 정의상 0으로 표기합니다.",
        REPORT_HEADING => "\n-- 기술 보고서 --",
        REPORT_USING_DEFAULTS => "설정 파일의 기본 운전점으로 보고서를 생성합니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 입력 (ko/en, 취소하려면 엔터): ",
        SETTINGS_SESSION_ONLY => "변경은 이번 세션에만 적용되며 저장되지 않습니다.",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=K 2=°C 3=°F",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== AD-HTC Gas Cycle Analyzer ===",
        MAIN_MENU_CYCLE => "1) Gas cycle analysis",
        MAIN_MENU_REPORT => "2) Technical report",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        CYCLE_HEADING => "\n-- Brayton Cycle Analysis --",
        PROMPT_PRESSURE_RATIO => "Pressure ratio (typically 5-20): ",
        PROMPT_TURBINE_INLET => "Turbine inlet temperature: ",
        PROMPT_AMBIENT => "Ambient temperature: ",
        PROMPT_HEAT_RATIO => "Specific heat ratio k (Enter for 1.4): ",
        PROMPT_CP => "Specific heat cp [kJ/(kg·K)] (Enter for 1.005): ",
        RESULT_T2 => "Compressor exit temp t2",
        RESULT_T4 => "Turbine exit temp t4",
        RESULT_COMPRESSOR_WORK => "Compressor work",
        RESULT_TURBINE_WORK => "Turbine work",
        RESULT_HEAT_INPUT => "Heat input",
        RESULT_NET_WORK => "Net work output",
        RESULT_EFFICIENCY => "Thermal efficiency",
        NOTE_DEGENERATE => "Note: heat input is non-positive; efficiency is reported as 0 by definition.",
        REPORT_HEADING => "\n-- Technical Report --",
        REPORT_USING_DEFAULTS => "Generating the report from the default operating point in the config.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en, Enter to cancel): ",
        SETTINGS_SESSION_ONLY => "Changes apply to this session only and are not saved.",
        SETTINGS_INVALID => "Invalid input, keeping the current value.",
        TEMPERATURE_UNIT_OPTIONS => "Temperature unit: 1=K 2=°C 3=°F",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => Box::leak(key.to_string().into_boxed_str()),
    }
}
