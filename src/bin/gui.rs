#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use image::GenericImageView;
use std::{env, fs, path::Path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gas_turbine_performance::{
    config,
    i18n::{self, keys},
    turbine::{self, CycleResult, DesignParameters, SweepSeries},
    ui_cli,
};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 820.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        config::Config::default()
    });
    let lang = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );
    info!(%lang, "starting GUI");
    eframe::run_native(
        "Gas Turbine Performance",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg, &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 폴백 폰트로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 등록한다. assets/fonts → 운영체제 기본 위치 순으로 찾는다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        Path::new("assets/fonts/NanumGothic.ttf").to_path_buf(),
        Path::new("/usr/share/fonts/truetype/nanum/NanumGothic.ttf").to_path_buf(),
        Path::new("/System/Library/Fonts/AppleSDGothicNeo.ttc").to_path_buf(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.insert(0, fonts.join("malgun.ttf"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; Hangul labels may not render.".into())
}

fn series_points(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    xs.iter().zip(ys).map(|(x, y)| [*x, *y]).collect()
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    dry_bulb_input: f64,
    series: SweepSeries,
    series_design: DesignParameters,
    save_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, lang: &str) -> Self {
        let series = turbine::sweep(&config.design, &config.sweep);
        let series_design = config.design;
        Self {
            config,
            tr: i18n::Translator::new_with_pack(lang, None),
            dry_bulb_input: 0.0,
            series,
            series_design,
            save_status: None,
        }
    }

    /// 설계 변수가 바뀌었을 때만 스윕을 다시 계산한다.
    fn refresh_series(&mut self) {
        if self.series_design != self.config.design {
            self.series = turbine::sweep(&self.config.design, &self.config.sweep);
            self.series_design = self.config.design;
        }
    }

    /// 현재 입력값으로 계산한 결과. 0 이하 입력이면 None.
    fn current_result(&self) -> Option<CycleResult> {
        ui_cli::dry_bulb_from_input(self.dry_bulb_input, self.config.input_temperature_unit)
            .map(|t| turbine::evaluate_cycle(t, &self.config.design))
    }

    fn ui_design(&mut self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        ui.heading(tr.t(keys::GUI_DESIGN));
        let d = &mut self.config.design;
        egui::Grid::new("design_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::DESIGN_RHO_AIR));
            ui.add(egui::DragValue::new(&mut d.rho_air).speed(0.0005));
            ui.end_row();
            ui.label(tr.t(keys::DESIGN_RHO_GAS));
            ui.add(egui::DragValue::new(&mut d.rho_gas).speed(0.0005));
            ui.end_row();
            ui.label(tr.t(keys::DESIGN_COMB_TEMP));
            ui.add(egui::DragValue::new(&mut d.comb_mean_temp.0).speed(1.0));
            ui.end_row();
            ui.label(tr.t(keys::DESIGN_LHV));
            ui.add(egui::DragValue::new(&mut d.lhv).speed(10.0));
            ui.end_row();
            ui.label(tr.t(keys::DESIGN_DISCHARGE_PRESSURE));
            ui.add(egui::DragValue::new(&mut d.discharge_pressure_psi).speed(0.5));
            ui.end_row();
            ui.label(tr.t(keys::DESIGN_FUEL_FLOW));
            ui.add(egui::DragValue::new(&mut d.fuel_flow).speed(1000.0));
            ui.end_row();
        });
        ui.horizontal(|ui| {
            if ui.button(tr.t(keys::GUI_RESET_DESIGN)).clicked() {
                self.config.design = DesignParameters::default();
            }
            if ui.button(tr.t(keys::GUI_SAVE)).clicked() {
                self.save_status = Some(match self.config.save() {
                    Ok(()) => tr.t(keys::SETTINGS_SAVED).to_string(),
                    Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                });
            }
        });
        if let Some(status) = &self.save_status {
            ui.label(status);
        }
    }

    fn ui_result(&mut self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        let suffix = format!(" {}", self.config.input_temperature_unit.symbol());
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::GUI_DRY_BULB));
            ui.add(
                egui::DragValue::new(&mut self.dry_bulb_input)
                    .speed(0.5)
                    .suffix(suffix),
            );
        });
        match self.current_result() {
            Some(result) => {
                for line in ui_cli::format_result(tr, &result) {
                    ui.label(egui::RichText::new(line).italics());
                }
            }
            None => {
                ui.label(tr.t(keys::GUI_ENTER_POSITIVE));
            }
        }
    }

    /// 열소비율과 열효율을 같은 건구 온도 축에 위아래로 그린다.
    fn ui_plots(&self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        let xs = self.series.dry_bulbs();
        let hr = series_points(&xs, &self.series.heat_rates());
        let nth = series_points(&xs, &self.series.thermal_efficiencies());
        let height = (ui.available_height() / 2.0 - 8.0).max(180.0);
        let (x_min, x_max) = (self.config.sweep.start_f, self.config.sweep.end_f);

        Plot::new("heat_rate_plot")
            .legend(Legend::default())
            .x_axis_label(tr.t(keys::GUI_AXIS_DRY_BULB))
            .y_axis_label(tr.t(keys::GUI_AXIS_HEAT_RATE))
            .include_x(x_min)
            .include_x(x_max)
            .height(height)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(hr.clone()))
                        .color(egui::Color32::RED)
                        .name(tr.t(keys::GUI_AXIS_HEAT_RATE)),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(hr))
                        .color(egui::Color32::RED)
                        .radius(3.0),
                );
            });

        Plot::new("efficiency_plot")
            .legend(Legend::default())
            .x_axis_label(tr.t(keys::GUI_AXIS_DRY_BULB))
            .y_axis_label(tr.t(keys::GUI_AXIS_EFFICIENCY))
            .include_x(x_min)
            .include_x(x_max)
            .height(height)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(nth.clone()))
                        .color(egui::Color32::BLUE)
                        .name(tr.t(keys::GUI_AXIS_EFFICIENCY)),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(nth))
                        .color(egui::Color32::BLUE)
                        .radius(3.0),
                );
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        self.refresh_series();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.heading(tr.t(keys::GUI_TITLE));
        });
        egui::SidePanel::left("design_panel")
            .resizable(true)
            .show(ctx, |ui| self.ui_design(ui, &tr));
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_result(ui, &tr);
            ui.separator();
            self.ui_plots(ui, &tr);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gas_turbine_performance::units::Fahrenheit;

    #[test]
    fn new_app_precomputes_default_sweep() {
        let app = GuiApp::new(config::Config::default(), "en");
        assert_eq!(app.series.len(), 41);
        assert!(app.current_result().is_none());
    }

    #[test]
    fn design_change_triggers_recompute() {
        let mut app = GuiApp::new(config::Config::default(), "en");
        let before = app.series.net_powers()[0];
        app.config.design.discharge_pressure_psi = 200.0;
        app.refresh_series();
        assert_ne!(app.series.net_powers()[0], before);
    }

    #[test]
    fn positive_input_shows_result() {
        let mut app = GuiApp::new(config::Config::default(), "en");
        app.dry_bulb_input = 90.0;
        let r = app.current_result().expect("result");
        let direct = turbine::evaluate_cycle(Fahrenheit(90.0), &DesignParameters::default());
        assert_eq!(r, direct);
    }

    #[test]
    fn points_pair_columns() {
        assert_eq!(
            series_points(&[1.0, 2.0], &[3.0, 4.0]),
            vec![[1.0, 3.0], [2.0, 4.0]]
        );
    }
}
