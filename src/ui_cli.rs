use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::cycle::{brayton, report, SteamSettings};
use crate::i18n::{keys, Translator};
use crate::units::temperature::{from_kelvin, to_kelvin};
use crate::units::TemperatureUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CycleAnalysis,
    Report,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CYCLE));
    println!("{}", tr.t(keys::MAIN_MENU_REPORT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::CycleAnalysis),
            "2" => return Ok(MenuChoice::Report),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 브레이튼 사이클 해석 메뉴를 처리한다.
pub fn handle_cycle_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CYCLE_HEADING));
    let pressure_ratio = read_f64(tr, tr.t(keys::PROMPT_PRESSURE_RATIO))?;
    let t_unit = read_temperature_unit(tr)?;
    let turbine_inlet = read_f64(tr, tr.t(keys::PROMPT_TURBINE_INLET))?;
    let ambient = read_f64(tr, tr.t(keys::PROMPT_AMBIENT))?;
    let k = read_f64_or(tr, tr.t(keys::PROMPT_HEAT_RATIO), cfg.cycle.specific_heat_ratio)?;
    let cp = read_f64_or(tr, tr.t(keys::PROMPT_CP), cfg.cycle.specific_heat_cp)?;

    let input = brayton::CycleInput {
        pressure_ratio,
        turbine_inlet_temp_k: to_kelvin(turbine_inlet, t_unit),
        ambient_temp_k: to_kelvin(ambient, t_unit),
        specific_heat_ratio: k,
        specific_heat_cp_kj_per_kgk: cp,
    };
    match brayton::evaluate(input) {
        Ok(result) => print_cycle_result(tr, &result, cfg.default_units.temperature),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정의 기본 운전점으로 기술 보고서를 출력한다.
pub fn handle_report(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REPORT_HEADING));
    println!("{}", tr.t(keys::REPORT_USING_DEFAULTS));
    let input = brayton::CycleInput {
        pressure_ratio: cfg.cycle.pressure_ratio,
        turbine_inlet_temp_k: cfg.cycle.turbine_inlet_temp_k,
        ambient_temp_k: cfg.cycle.ambient_temp_k,
        specific_heat_ratio: cfg.cycle.specific_heat_ratio,
        specific_heat_cp_kj_per_kgk: cfg.cycle.specific_heat_cp,
    };
    let steam = SteamSettings {
        boiler_pressure_bar: cfg.steam.boiler_pressure_bar,
        steam_temp_c: cfg.steam.steam_temp_c,
    };
    let result = brayton::evaluate(input)?;
    println!();
    println!(
        "{}",
        report::technical_report(&input, &steam, &result, cfg.default_units.pressure)
    );
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경은 세션에만 적용된다.
pub fn handle_settings(tr: &mut Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        tr.language_code()
    );
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let code = sel.trim();
    if code.is_empty() {
        return Ok(());
    }
    match code.to_lowercase().as_str() {
        "ko" | "en" => {
            cfg.language = code.to_lowercase();
            *tr = Translator::new_with_pack(&cfg.language, cfg.language_pack_dir.as_deref());
            println!("{}", tr.t(keys::SETTINGS_SESSION_ONLY));
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn print_cycle_result(tr: &Translator, result: &brayton::CycleResult, unit: TemperatureUnit) {
    println!(
        "{}: {:.1} {}",
        tr.t(keys::RESULT_T2),
        from_kelvin(result.compressor_exit_temp_k, unit),
        unit.symbol()
    );
    println!(
        "{}: {:.1} {}",
        tr.t(keys::RESULT_T4),
        from_kelvin(result.turbine_exit_temp_k, unit),
        unit.symbol()
    );
    println!(
        "{}: {:.2} kJ/kg",
        tr.t(keys::RESULT_COMPRESSOR_WORK),
        result.compressor_work_kj_per_kg
    );
    println!(
        "{}: {:.2} kJ/kg",
        tr.t(keys::RESULT_TURBINE_WORK),
        result.turbine_work_kj_per_kg
    );
    println!(
        "{}: {:.2} kJ/kg",
        tr.t(keys::RESULT_HEAT_INPUT),
        result.heat_input_kj_per_kg
    );
    println!(
        "{}: {:.2} kJ/kg",
        tr.t(keys::RESULT_NET_WORK),
        result.net_work_kj_per_kg
    );
    println!(
        "{}: {:.1} %",
        tr.t(keys::RESULT_EFFICIENCY),
        result.thermal_efficiency_pct
    );
    if result.is_degenerate() {
        println!("{}", tr.t(keys::NOTE_DEGENERATE));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓰는 숫자 프롬프트.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_temperature_unit(tr: &Translator) -> Result<TemperatureUnit, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let unit = match sel.trim() {
        "2" => TemperatureUnit::Celsius,
        "3" => TemperatureUnit::Fahrenheit,
        _ => TemperatureUnit::Kelvin,
    };
    Ok(unit)
}
