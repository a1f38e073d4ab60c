#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 대시보드 진입점.
//!
//! 왼쪽 패널의 슬라이더가 바뀔 때마다 사이클을 새로 평가하고 두 예시
//! 곡선을 다시 생성한다. 캐싱이나 백그라운드 작업은 없다.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use gas_cycle_analyzer::{
    config,
    cycle::{brayton, charts, report, SteamSettings},
    i18n,
    units::{convert_pressure, temperature::from_kelvin, PressureUnit, TemperatureUnit},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "AD-HTC Gas Cycle Analyzer",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 내 폰트
/// 2) 플랫폼 시스템 폰트 (Windows 맑은 고딕, Linux 나눔/노토)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        Path::new("assets/fonts/malgun.ttf").to_path_buf(),
        Path::new("assets/fonts/NanumGothic.ttf").to_path_buf(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "malgunbd.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    for cand in [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ] {
        candidates.push(Path::new(cand).to_path_buf());
    }

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found. Set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn metric_card(ui: &mut egui::Ui, title: &str, value: &str, tip: &str) {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical(|ui| {
                ui.small(title);
                ui.label(egui::RichText::new(value).size(22.0).strong());
            });
        })
        .response
        .on_hover_text(tip.to_string());
}

fn temperature_unit_combo(ui: &mut egui::Ui, id: &str, value: &mut TemperatureUnit) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.symbol())
        .show_ui(ui, |ui| {
            for unit in [
                TemperatureUnit::Kelvin,
                TemperatureUnit::Celsius,
                TemperatureUnit::Fahrenheit,
            ] {
                ui.selectable_value(value, unit, unit.symbol());
            }
        });
}

fn pressure_unit_combo(ui: &mut egui::Ui, id: &str, value: &mut PressureUnit) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.symbol())
        .show_ui(ui, |ui| {
            for unit in [
                PressureUnit::Bar,
                PressureUnit::KiloPascal,
                PressureUnit::MegaPascal,
                PressureUnit::Psi,
                PressureUnit::Atm,
            ] {
                ui.selectable_value(value, unit, unit.symbol());
            }
        });
}

/// 본문 텍스트 스타일 크기를 일괄 적용한다.
fn apply_text_styles(ctx: &egui::Context, base: f32) {
    use egui::{FontFamily, FontId, TextStyle};
    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(base + 6.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(base, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(base - 1.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(base, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(base - 3.0, FontFamily::Proportional)),
    ]
    .into();
    ctx.set_style(style);
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    tab: Tab,
    theme: ThemeChoice,
    font_size: f32,
    ui_scale: f32,
    show_settings_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 가스 사이클 입력
    pressure_ratio: f64,
    turbine_inlet_k: f64,
    ambient_k: f64,
    heat_ratio: f64,
    cp: f64,
    // 증기 사이클 입력
    boiler_pressure_bar: f64,
    boiler_pressure_unit: PressureUnit,
    steam_temp_c: f64,
    // 결과 표시
    temp_out_unit: TemperatureUnit,
    report_save_status: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Schematic,
    Analysis,
    Report,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        Self {
            pressure_ratio: config.cycle.pressure_ratio,
            turbine_inlet_k: config.cycle.turbine_inlet_temp_k,
            ambient_k: config.cycle.ambient_temp_k,
            heat_ratio: config.cycle.specific_heat_ratio,
            cp: config.cycle.specific_heat_cp,
            boiler_pressure_bar: config.steam.boiler_pressure_bar,
            boiler_pressure_unit: config.default_units.pressure,
            steam_temp_c: config.steam.steam_temp_c,
            temp_out_unit: config.default_units.temperature,
            config,
            tr,
            lang_input,
            tab: Tab::Analysis,
            theme: ThemeChoice::System,
            font_size: 16.0,
            ui_scale: 1.0,
            show_settings_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
            report_save_status: None,
        }
    }

    fn cycle_input(&self) -> brayton::CycleInput {
        brayton::CycleInput {
            pressure_ratio: self.pressure_ratio,
            turbine_inlet_temp_k: self.turbine_inlet_k,
            ambient_temp_k: self.ambient_k,
            specific_heat_ratio: self.heat_ratio,
            specific_heat_cp_kj_per_kgk: self.cp,
        }
    }

    fn steam_settings(&self) -> SteamSettings {
        SteamSettings {
            boiler_pressure_bar: self.boiler_pressure_bar,
            steam_temp_c: self.steam_temp_c,
        }
    }

    /// 사이드 메뉴와 컨트롤 패널을 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.app_title", "Gas Cycle Analyzer"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Schematic, txt("gui.tab.schematic", "System Schematic")),
            (Tab::Analysis, txt("gui.tab.analysis", "Thermal Analysis")),
            (Tab::Report, txt("gui.tab.report", "Technical Report")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 30.0));
            if ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch view"))
                .clicked()
            {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }

        ui.separator();
        heading_with_tip(
            ui,
            &txt("gui.panel.heading", "Control Panel"),
            &txt(
                "gui.panel.tip",
                "Every change re-evaluates the cycle immediately.",
            ),
        );
        ui.add_space(4.0);

        egui::CollapsingHeader::new(txt("gui.panel.gas", "Gas Power Cycle Settings"))
            .default_open(true)
            .show(ui, |ui| {
                ui.add(
                    egui::Slider::new(&mut self.pressure_ratio, 5.0..=20.0)
                        .text(txt("gui.input.pressure_ratio", "Pressure Ratio (r_p)")),
                );
                ui.add(
                    egui::Slider::new(&mut self.turbine_inlet_k, 1000.0..=1600.0)
                        .text(txt("gui.input.turbine_inlet", "Turbine Inlet Temp (K)")),
                );
                ui.horizontal(|ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.input.ambient", "Ambient Temp (K)"),
                        &txt("gui.input.ambient_tip", "Compressor inlet temperature"),
                    );
                    ui.add(egui::DragValue::new(&mut self.ambient_k).speed(1.0).suffix(" K"));
                });
                egui::CollapsingHeader::new(txt("gui.panel.gas_props", "Gas properties"))
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            label_with_tip(
                                ui,
                                "k",
                                &txt("gui.input.k_tip", "Specific heat ratio, must exceed 1"),
                            );
                            ui.add(
                                egui::DragValue::new(&mut self.heat_ratio)
                                    .speed(0.005)
                                    .clamp_range(1.01..=1.9),
                            );
                        });
                        ui.horizontal(|ui| {
                            label_with_tip(
                                ui,
                                "cp",
                                &txt("gui.input.cp_tip", "Specific heat at constant pressure [kJ/(kg·K)]"),
                            );
                            ui.add(
                                egui::DragValue::new(&mut self.cp)
                                    .speed(0.005)
                                    .clamp_range(0.2..=2.5),
                            );
                        });
                    });
            });

        egui::CollapsingHeader::new(txt("gui.panel.steam", "HTC Steam Cycle Settings"))
            .default_open(true)
            .show(ui, |ui| {
                ui.add(
                    egui::Slider::new(&mut self.boiler_pressure_bar, 10.0..=100.0)
                        .text(txt("gui.input.boiler_pressure", "Boiler Pressure (bar)")),
                );
                ui.horizontal(|ui| {
                    ui.small(format!(
                        "= {:.1}",
                        convert_pressure(
                            self.boiler_pressure_bar,
                            PressureUnit::Bar,
                            self.boiler_pressure_unit,
                        )
                    ));
                    pressure_unit_combo(ui, "boiler_p_unit", &mut self.boiler_pressure_unit);
                });
                ui.add(
                    egui::Slider::new(&mut self.steam_temp_c, 200.0..=500.0)
                        .text(txt("gui.input.steam_temp", "Steam Temp (°C)")),
                );
            });

        ui.separator();
        if ui.button(txt("gui.nav.settings", "Settings")).clicked() {
            self.show_settings_modal = true;
        }
    }

    fn ui_schematic(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.schem.heading", "Process Flow Diagram"),
            &txt(
                "gui.schem.tip",
                "Static overview of the AD-HTC waste-to-energy train.",
            ),
        );
        ui.small(txt(
            "gui.schem.note",
            "The homogenizer conditions the feedstock for two chemical pathways (AD vs HTC).",
        ));
        ui.add_space(8.0);

        let desired = egui::vec2(ui.available_width().max(620.0), 430.0);
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
        let canvas = response.rect;

        let node_size = egui::vec2(0.14 * canvas.width(), 0.09 * canvas.height());
        let node_rect = |cx: f32, cy: f32| {
            egui::Rect::from_center_size(
                egui::pos2(
                    canvas.left() + cx * canvas.width(),
                    canvas.top() + cy * canvas.height(),
                ),
                node_size,
            )
        };

        // rankdir=LR 배치
        let nodes: &[(&str, f32, f32)] = &[
            ("Feedstock", 0.09, 0.46),
            ("Homogenizer", 0.27, 0.46),
            ("Steam Cycle", 0.27, 0.12),
            ("HTC Reactor", 0.46, 0.28),
            ("AD", 0.46, 0.66),
            ("Biogas Collector", 0.64, 0.46),
            ("Combustion Chamber", 0.82, 0.46),
            ("Compressor", 0.82, 0.84),
            ("Turbine", 0.93, 0.20),
            ("Exhaust", 0.93, 0.84),
        ];

        let fill = egui::Color32::from_rgb(0xE1, 0xF5, 0xFE);
        let border = egui::Stroke::new(1.0, egui::Color32::from_gray(90));
        let text_color = egui::Color32::from_gray(30);
        let arrow = egui::Stroke::new(1.5, ui.visuals().text_color());

        let mut rects = std::collections::HashMap::new();
        for (label, cx, cy) in nodes {
            let rect = node_rect(*cx, *cy);
            painter.rect_filled(rect, egui::Rounding::same(4.0), fill);
            painter.rect_stroke(rect, egui::Rounding::same(4.0), border);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                *label,
                egui::FontId::proportional(12.0),
                text_color,
            );
            rects.insert(*label, rect);
        }

        let edges: &[(&str, &str, Option<&str>)] = &[
            ("Feedstock", "Homogenizer", None),
            ("Homogenizer", "HTC Reactor", Some("Dry Path")),
            ("Homogenizer", "AD", Some("Wet Path")),
            ("Steam Cycle", "HTC Reactor", Some("Heat Input")),
            ("HTC Reactor", "Biogas Collector", None),
            ("AD", "Biogas Collector", None),
            ("Biogas Collector", "Combustion Chamber", None),
            ("Compressor", "Combustion Chamber", None),
            ("Combustion Chamber", "Turbine", None),
            ("Turbine", "Exhaust", None),
        ];
        for (from, to, label) in edges {
            let (Some(a), Some(b)) = (rects.get(from), rects.get(to)) else {
                continue;
            };
            let start = edge_point(*a, b.center());
            let end = edge_point(*b, a.center());
            painter.arrow(start, end - start, arrow);
            if let Some(label) = label {
                let mid = start + (end - start) * 0.5;
                painter.text(
                    mid,
                    egui::Align2::CENTER_BOTTOM,
                    *label,
                    egui::FontId::proportional(10.0),
                    ui.visuals().weak_text_color(),
                );
            }
        }
    }

    fn ui_analysis(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.analysis.heading", "Thermal Analysis"),
            &txt(
                "gui.analysis.tip",
                "Ideal-gas Brayton cycle with isentropic compression/expansion.",
            ),
        );
        ui.add_space(6.0);

        let result = match brayton::evaluate(self.cycle_input()) {
            Ok(r) => r,
            Err(e) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {e}", txt("gui.analysis.error_prefix", "Input error")),
                );
                return;
            }
        };

        ui.columns(3, |cols| {
            metric_card(
                &mut cols[0],
                &txt("gui.metric.net_work", "Net Work Output"),
                &format!("{:.2} kJ/kg", result.net_work_kj_per_kg),
                &txt("gui.metric.net_work_tip", "Turbine work minus compressor work"),
            );
            metric_card(
                &mut cols[1],
                &txt("gui.metric.efficiency", "Thermal Efficiency"),
                &format!("{:.1} %", result.thermal_efficiency_pct),
                &txt("gui.metric.efficiency_tip", "Net work divided by heat input"),
            );
            metric_card(
                &mut cols[2],
                &txt("gui.metric.sfc", "Specific Fuel Consumption"),
                &format!("{:.2} kg/kWh", report::SPECIFIC_FUEL_CONSUMPTION_KG_PER_KWH),
                &txt("gui.metric.sfc_tip", "Nominal display value, not computed"),
            );
        });
        if result.is_degenerate() {
            ui.colored_label(
                egui::Color32::from_rgb(0xB7, 0x6E, 0x00),
                txt(
                    "gui.analysis.degenerate",
                    "Heat input is non-positive at this operating point; efficiency is shown as 0.",
                ),
            );
        }

        ui.separator();
        ui.columns(2, |cols| {
            cols[0].strong(txt("gui.chart.hs_title", "h-s Diagram (Steam Cycle)"));
            Plot::new("hs_plot")
                .height(300.0)
                .legend(Legend::default())
                .x_axis_label(txt("gui.chart.hs_x", "Entropy (s)"))
                .y_axis_label(txt("gui.chart.hs_y", "Enthalpy (h)"))
                .show(&mut cols[0], |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::from(charts::expansion_line(self.steam_temp_c)))
                            .color(egui::Color32::from_rgb(0x02, 0x88, 0xD1))
                            .name(txt("gui.chart.hs_series", "Expansion Line")),
                    );
                });

            cols[1].strong(txt("gui.chart.th_title", "T-H Chart (Gas Cycle)"));
            Plot::new("th_plot")
                .height(300.0)
                .legend(Legend::default())
                .x_axis_label(txt("gui.chart.th_x", "Heat Flow (H)"))
                .y_axis_label(txt("gui.chart.th_y", "Temperature (T)"))
                .show(&mut cols[1], |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::from(charts::combustion_line(
                            result.compressor_exit_temp_k,
                            self.turbine_inlet_k,
                        )))
                        .color(egui::Color32::from_rgb(0xD3, 0x2F, 0x2F))
                        .name(txt("gui.chart.th_series", "Combustion")),
                    );
                });
        });

        ui.separator();
        ui.horizontal(|ui| {
            label_with_tip(
                ui,
                &txt("gui.analysis.display_unit", "Display unit"),
                &txt("gui.analysis.display_unit_tip", "Temperature unit for the state table"),
            );
            temperature_unit_combo(ui, "temp_out_unit", &mut self.temp_out_unit);
        });
        let unit = self.temp_out_unit;
        egui::Grid::new("state_grid")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label(txt("gui.state.t2", "Compressor exit temp (t2)"));
                ui.label(format!(
                    "{:.1} {}",
                    from_kelvin(result.compressor_exit_temp_k, unit),
                    unit.symbol()
                ));
                ui.end_row();
                ui.label(txt("gui.state.t4", "Turbine exit temp (t4)"));
                ui.label(format!(
                    "{:.1} {}",
                    from_kelvin(result.turbine_exit_temp_k, unit),
                    unit.symbol()
                ));
                ui.end_row();
                ui.label(txt("gui.state.compressor_work", "Compressor work"));
                ui.label(format!("{:.2} kJ/kg", result.compressor_work_kj_per_kg));
                ui.end_row();
                ui.label(txt("gui.state.turbine_work", "Turbine work"));
                ui.label(format!("{:.2} kJ/kg", result.turbine_work_kj_per_kg));
                ui.end_row();
                ui.label(txt("gui.state.heat_input", "Heat input"));
                ui.label(format!("{:.2} kJ/kg", result.heat_input_kj_per_kg));
                ui.end_row();
            });
    }

    fn ui_report(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.report.heading", "Final Project Report Summary"),
            &txt("gui.report.tip", "Canned summary plus the current operating point."),
        );
        ui.add_space(4.0);
        ui.label(txt(
            "gui.report.intro",
            "1. Introduction: This project implements an integrated waste-to-energy system.",
        ));
        ui.label(txt(
            "gui.report.method",
            "2. Methodology: A dual-pathway (AD-HTC) process is used to enhance biogas quality.",
        ));
        ui.label(txt(
            "gui.report.results",
            "3. Thermodynamic Results: The system shows a marked increase in thermal efficiency when the pressure ratio is optimized between 12 and 15.",
        ));
        ui.separator();

        let input = self.cycle_input();
        match brayton::evaluate(input) {
            Ok(result) => {
                let text = report::technical_report(
                    &input,
                    &self.steam_settings(),
                    &result,
                    self.boiler_pressure_unit,
                );
                ui.add(
                    egui::TextEdit::multiline(&mut text.as_str())
                        .desired_rows(18)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button(txt("gui.report.save", "Export report…")).clicked() {
                        let picked = FileDialog::new()
                            .set_file_name("gas_cycle_report.txt")
                            .save_file();
                        if let Some(path) = picked {
                            self.report_save_status = Some(match fs::write(&path, &text) {
                                Ok(()) => format!(
                                    "{} {}",
                                    txt("gui.report.saved", "Saved to"),
                                    path.display()
                                ),
                                Err(e) => format!(
                                    "{}: {e}",
                                    txt("gui.report.save_error", "Save failed")
                                ),
                            });
                        }
                    }
                    if let Some(status) = &self.report_save_status {
                        ui.small(status);
                    }
                });
            }
            Err(e) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {e}", txt("gui.analysis.error_prefix", "Input error")),
                );
            }
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.settings.language", "Language (ko/en/auto)"),
                        &txt(
                            "gui.settings.language_tip",
                            "Applies to this session only; nothing is written to disk.",
                        ),
                    );
                    ui.text_edit_singleline(&mut self.lang_input);
                    if ui.button(txt("gui.settings.apply", "Apply")).clicked() {
                        let code = i18n::resolve_language(&self.lang_input, None);
                        self.config.language = self.lang_input.clone();
                        self.tr = i18n::Translator::new_with_pack(
                            &code,
                            self.config.language_pack_dir.as_deref(),
                        );
                    }
                });
                ui.small(txt(
                    "gui.settings.session_note",
                    "Settings are not persisted between runs.",
                ));
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(txt("gui.settings.theme", "Theme"));
                    for (choice, label) in [
                        (ThemeChoice::System, txt("gui.settings.theme_system", "System")),
                        (ThemeChoice::Light, txt("gui.settings.theme_light", "Light")),
                        (ThemeChoice::Dark, txt("gui.settings.theme_dark", "Dark")),
                    ] {
                        ui.selectable_value(&mut self.theme, choice, label);
                    }
                });
                ui.add(
                    egui::Slider::new(&mut self.font_size, 12.0..=24.0)
                        .text(txt("gui.settings.font_size", "Font size")),
                );
                ui.add(
                    egui::Slider::new(&mut self.ui_scale, 0.8..=1.6)
                        .text(txt("gui.settings.ui_scale", "UI scale")),
                );
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(txt("gui.settings.custom_font", "Custom font"));
                    ui.text_edit_singleline(&mut self.custom_font_path);
                    if ui.button("…").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            self.custom_font_path = path.display().to_string();
                        }
                    }
                    if ui.button(txt("gui.settings.font_load", "Load")).clicked() {
                        self.font_load_error =
                            load_custom_font(ui.ctx(), &self.custom_font_path).err();
                    }
                });
                if let Some(err) = &self.font_load_error {
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        self.show_settings_modal = open;
    }
}

/// 사각형 중심에서 대상 방향으로 나가는 경계점을 구한다 (화살표 시작/끝).
fn edge_point(rect: egui::Rect, toward: egui::Pos2) -> egui::Pos2 {
    let c = rect.center();
    let d = toward - c;
    if d.x.abs() < f32::EPSILON && d.y.abs() < f32::EPSILON {
        return c;
    }
    let tx = if d.x.abs() < f32::EPSILON {
        f32::INFINITY
    } else {
        (rect.width() / 2.0) / d.x.abs()
    };
    let ty = if d.y.abs() < f32::EPSILON {
        f32::INFINITY
    } else {
        (rect.height() / 2.0) / d.y.abs()
    };
    c + d * tx.min(ty)
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.set_pixels_per_point(self.ui_scale);
        apply_text_styles(ctx, self.font_size);
        match self.theme {
            ThemeChoice::System => {}
            ThemeChoice::Light => ctx.set_visuals(egui::Visuals::light()),
            ThemeChoice::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.ui_nav(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Schematic => self.ui_schematic(ui),
                Tab::Analysis => self.ui_analysis(ui),
                Tab::Report => self.ui_report(ui),
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }
    }
}
