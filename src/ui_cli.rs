use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::turbine::{evaluate_cycle, sweep, CycleResult, DesignParameters, SweepSeries};
use crate::units::{Fahrenheit, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Evaluate,
    Sweep,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_EVALUATE));
    println!("{}", tr.t(keys::MAIN_MENU_SWEEP));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Evaluate),
            "2" => return Ok(MenuChoice::Sweep),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 입력값을 °F 로 바꾸고, 0 이하이거나 유한하지 않으면 None 을 돌려준다.
pub fn dry_bulb_from_input(value: f64, unit: TemperatureUnit) -> Option<Fahrenheit> {
    let t = Fahrenheit::from_unit(value, unit);
    (t.value().is_finite() && t.value() > 0.0).then_some(t)
}

/// 단일 건구 온도 성능 계산 메뉴를 처리한다.
pub fn handle_evaluate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EVALUATE_HEADING));
    let unit = cfg.input_temperature_unit;
    let prompt = format!("{} [{}]: ", tr.t(keys::PROMPT_DRY_BULB), unit.symbol());
    let value = read_f64(tr, &prompt)?;
    match dry_bulb_from_input(value, unit) {
        Some(t) => {
            let result = evaluate_cycle(t, &cfg.design);
            for line in format_result(tr, &result) {
                println!("{line}");
            }
        }
        None => println!("{}", tr.t(keys::EVALUATE_NON_POSITIVE)),
    }
    Ok(())
}

/// 설정된 범위로 스윕을 수행해 표로 출력한다.
pub fn handle_sweep(tr: &Translator, cfg: &Config) {
    println!("{}", tr.t(keys::SWEEP_HEADING));
    let series = sweep(&cfg.design, &cfg.sweep);
    for line in format_sweep_table(tr, &series) {
        println!("{line}");
    }
}

/// 결과를 화면 표시용 문장으로 만든다. 열효율/열소비율은 소수 2자리, 출력은 1자리.
pub fn format_result(tr: &Translator, result: &CycleResult) -> Vec<String> {
    vec![
        format!(
            "{} {:.2} %",
            tr.t(keys::RESULT_EFFICIENCY),
            result.thermal_efficiency_pct
        ),
        format!("{} {:.2} BTU/kW", tr.t(keys::RESULT_HEAT_RATE), result.heat_rate),
        format!("{} {:.1} MW", tr.t(keys::RESULT_NET_POWER), result.net_power_mw),
        format!("{} {:.1}", tr.t(keys::RESULT_SFC), result.sfc),
    ]
}

/// 스윕 결과를 표 형태의 줄 목록으로 만든다.
pub fn format_sweep_table(tr: &Translator, series: &SweepSeries) -> Vec<String> {
    let mut lines = Vec::with_capacity(series.len() + 2);
    lines.push(tr.t(keys::SWEEP_TABLE_HEADER).to_string());
    for p in &series.points {
        let r = &p.result;
        lines.push(format!(
            "{:>9.1} {:>9.3} {:>12.2} {:>8.3} {:>12.1}",
            p.dry_bulb.value(),
            r.thermal_efficiency_pct,
            r.heat_rate,
            r.net_power_mw,
            r.sfc
        ));
    }
    if !series.is_power_non_increasing() {
        lines.push(tr.t(keys::SWEEP_POWER_RISES).to_string());
    }
    lines
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_UNIT),
        cfg.input_temperature_unit.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        match parse_unit_choice(sel.trim()) {
            Some(unit) => cfg.input_temperature_unit = unit,
            None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    println!("{}", tr.t(keys::SETTINGS_DESIGN_HEADING));
    let d: &mut DesignParameters = &mut cfg.design;
    d.rho_air = read_f64_or_keep(tr, keys::DESIGN_RHO_AIR, d.rho_air)?;
    d.rho_gas = read_f64_or_keep(tr, keys::DESIGN_RHO_GAS, d.rho_gas)?;
    d.comb_mean_temp = Fahrenheit(read_f64_or_keep(
        tr,
        keys::DESIGN_COMB_TEMP,
        d.comb_mean_temp.value(),
    )?);
    d.lhv = read_f64_or_keep(tr, keys::DESIGN_LHV, d.lhv)?;
    d.discharge_pressure_psi =
        read_f64_or_keep(tr, keys::DESIGN_DISCHARGE_PRESSURE, d.discharge_pressure_psi)?;
    d.fuel_flow = read_f64_or_keep(tr, keys::DESIGN_FUEL_FLOW, d.fuel_flow)?;
    Ok(())
}

fn parse_unit_choice(sel: &str) -> Option<TemperatureUnit> {
    match sel {
        "1" => Some(TemperatureUnit::Fahrenheit),
        "2" => Some(TemperatureUnit::Celsius),
        "3" => Some(TemperatureUnit::Kelvin),
        "4" => Some(TemperatureUnit::Rankine),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
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

fn read_f64_or_keep(tr: &Translator, label_key: &str, current: f64) -> Result<f64, AppError> {
    let prompt = format!(
        "{} ({} {current}): ",
        tr.t(label_key),
        tr.t(keys::SETTINGS_KEEP_HINT)
    );
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turbine::SweepRange;

    #[test]
    fn non_positive_dry_bulb_is_rejected() {
        assert!(dry_bulb_from_input(0.0, TemperatureUnit::Fahrenheit).is_none());
        assert!(dry_bulb_from_input(-5.0, TemperatureUnit::Fahrenheit).is_none());
        assert!(dry_bulb_from_input(f64::NAN, TemperatureUnit::Fahrenheit).is_none());
        // -20 °C = -4 °F
        assert!(dry_bulb_from_input(-20.0, TemperatureUnit::Celsius).is_none());
    }

    #[test]
    fn celsius_input_is_converted() {
        let t = dry_bulb_from_input(30.0, TemperatureUnit::Celsius).unwrap();
        assert!((t.value() - 86.0).abs() < 1e-9);
    }

    #[test]
    fn result_lines_use_display_precision() {
        let tr = Translator::new("en");
        let lines = format_result(
            &tr,
            &CycleResult {
                thermal_efficiency_pct: 33.545118,
                heat_rate: 10731.8148,
                net_power_mw: 152.1166,
                sfc: 576564.05,
            },
        );
        assert_eq!(lines[0], "Thermal efficiency: 33.55 %");
        assert_eq!(lines[1], "Heat rate: 10731.81 BTU/kW");
        assert_eq!(lines[2], "Net power: 152.1 MW");
    }

    #[test]
    fn sweep_table_has_header_and_rows() {
        let tr = Translator::new("en");
        let series = sweep(
            &DesignParameters::default(),
            &SweepRange {
                start_f: 60.0,
                end_f: 100.0,
                points: 5,
            },
        );
        let lines = format_sweep_table(&tr, &series);
        assert_eq!(lines.len(), 6);
        assert!(lines[1].trim_start().starts_with("60.0"));
    }

    #[test]
    fn unit_menu_choices() {
        assert_eq!(parse_unit_choice("2"), Some(TemperatureUnit::Celsius));
        assert_eq!(parse_unit_choice("9"), None);
    }
}
