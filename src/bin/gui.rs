#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::collections::BTreeSet;
use std::{env, fs, path::Path};
use workstation_toolbox::{
    catalog::{Catalog, DeviceId, DurationId, LocationId, ProductTier},
    config,
    contact::{self, ContactError, ContactForm, Field, LogMailer, NewsletterSignup, ValidationErrors},
    diy::{self, DiyInput},
    error::CalcError,
    finance::{self, BreakEvenInput, BreakEvenPoint, Payback, RoiInput},
    i18n::{self, keys},
    logging,
    recommend::{self, UseCaseInput},
    report::{self, Row},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko), -v는 디버그 로그
    let mut cli_lang: Option<String> = None;
    let mut verbose = false;
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
        } else if a == "-v" || a == "--verbose" {
            verbose = true;
        }
        i += 1;
    }
    logging::init(verbose);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1080.0, 720.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        log::warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Portable Workstation Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx, app_cfg.font_path.as_deref()) {
                log::warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
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

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn result_grid(ui: &mut egui::Ui, id: &str, rows: &[Row]) {
    egui::Grid::new(id)
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in rows {
                ui.label(label);
                ui.strong(value);
                ui.end_row();
            }
        });
}

fn calc_error_label(ui: &mut egui::Ui, prefix: &str, err: &CalcError) {
    let color = ui.visuals().error_fg_color;
    ui.colored_label(color, format!("{prefix}: {err}"));
}

fn field_error_label(ui: &mut egui::Ui, errors: &ValidationErrors, field: Field) {
    if let Some(e) = errors.for_field(field) {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, e.to_string());
    }
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

/// 한글 표시용 폰트를 적용한다.
/// 1) 설정의 사용자 폰트
/// 2) assets/fonts/ 아래 폰트
/// 3) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 모두 실패하면 기본 폰트를 유지하고 Err를 돌려준다.
fn setup_fonts(ctx: &egui::Context, user_font: Option<&str>) -> Result<(), String> {
    if let Some(path) = user_font {
        return load_custom_font(ctx, path);
    }

    for cand in ["assets/fonts/malgun.ttf", "assets/fonts/NanumGothic.ttf"] {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"] {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean font not found. Please set a user font (.ttf/.ttc) in settings.".into())
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

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    BreakEven,
    Roi,
    Diy,
    Recommend,
    Contact,
    Catalog,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    catalog: Catalog,
    mailer: LogMailer,
    tab: Tab,
    lang_input: String,
    settings_status: Option<String>,
    window_alpha: f32,
    show_settings_modal: bool,
    show_formula_modal: bool,
    show_help_modal: bool,
    // 손익분기
    be_selling_price: f64,
    be_variable_cost: f64,
    be_fixed_costs: f64,
    be_units_sold: u32,
    // ROI
    roi_outages: f64,
    roi_hours: f64,
    roi_rate: f64,
    roi_cafe: f64,
    roi_lifespan: f64,
    // DIY
    diy_quality: u8,
    diy_skill: u8,
    diy_time_value: f64,
    // 추천
    rec_devices: BTreeSet<DeviceId>,
    rec_location: LocationId,
    rec_duration: DurationId,
    // 문의
    contact_form: ContactForm,
    contact_errors: ValidationErrors,
    newsletter: NewsletterSignup,
    newsletter_errors: ValidationErrors,
    contact_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let d = config.defaults.clone();
        Self {
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            tr,
            catalog: Catalog::default(),
            mailer: LogMailer::default(),
            tab: Tab::BreakEven,
            settings_status: None,
            show_settings_modal: false,
            show_formula_modal: false,
            show_help_modal: false,
            be_selling_price: d.selling_price,
            be_variable_cost: d.variable_cost,
            be_fixed_costs: d.fixed_costs,
            be_units_sold: d.units_sold,
            roi_outages: d.outages_per_month,
            roi_hours: d.hours_per_outage,
            roi_rate: d.hourly_rate,
            roi_cafe: d.cafe_purchases_per_month,
            roi_lifespan: d.power_bank_lifespan_months,
            diy_quality: d.quality_level.clamp(diy::MIN_LEVEL, diy::MAX_LEVEL),
            diy_skill: d.skill_level.clamp(diy::MIN_LEVEL, diy::MAX_LEVEL),
            diy_time_value: d.time_value_per_hour,
            rec_devices: BTreeSet::from([DeviceId::Laptop]),
            rec_location: LocationId::Office,
            rec_duration: DurationId::Day,
            contact_form: ContactForm::default(),
            contact_errors: ValidationErrors::default(),
            newsletter: NewsletterSignup::default(),
            newsletter_errors: ValidationErrors::default(),
            contact_status: None,
            config,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.txt("gui.nav.heading", "Calculators"));
            ui.add_space(8.0);
        });
        let entries = [
            (Tab::BreakEven, self.txt("gui.tab.break_even", "Break-even")),
            (Tab::Roi, self.txt("gui.tab.roi", "ROI")),
            (Tab::Diy, self.txt("gui.tab.diy", "DIY vs. buy")),
            (Tab::Recommend, self.txt("gui.tab.recommend", "Find your setup")),
            (Tab::Contact, self.txt("gui.tab.contact", "Contact")),
            (Tab::Catalog, self.txt("gui.tab.catalog", "Products")),
        ];
        let tip = self.txt("gui.nav.switch_tip", "Switch calculator");
        for (tab, label) in entries {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).on_hover_text(&tip).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_break_even(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.break_even.title", "Break-even calculator"));
        ui.label(self.txt(
            "gui.break_even.intro",
            "How many units per month cover your fixed costs?",
        ));
        ui.separator();
        let sym = self.config.currency_symbol.clone();
        egui::Grid::new("be_inputs").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_SELLING_PRICE).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.be_selling_price, 0.0..=5000.0).prefix(&sym));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_VARIABLE_COST).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.be_variable_cost, 0.0..=5000.0).prefix(&sym));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_FIXED_COSTS).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.be_fixed_costs, 0.0..=50_000.0).prefix(&sym));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_UNITS_SOLD).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.be_units_sold, 0..=500));
            ui.end_row();
        });
        ui.separator();
        let input = BreakEvenInput {
            selling_price: self.be_selling_price,
            variable_cost: self.be_variable_cost,
            fixed_costs: self.be_fixed_costs,
            units_sold: self.be_units_sold,
        };
        match finance::compute_break_even(&input) {
            Ok(res) => {
                let headline = match res.break_even {
                    BreakEvenPoint::Units(n) => fill_template(
                        &self.txt("gui.break_even.headline", "You break even at {units} units per month."),
                        &[("units", n.to_string())],
                    ),
                    BreakEvenPoint::Unreachable => self.txt(
                        "gui.break_even.unreachable",
                        "Selling price does not cover the variable cost; break-even is unreachable.",
                    ),
                };
                ui.strong(headline);
                result_grid(ui, "be_result", &report::break_even_rows(&self.tr, &self.config, &res));
            }
            Err(e) => calc_error_label(ui, self.tr.t(keys::ERROR_PREFIX), &e),
        }
    }

    fn ui_roi(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.roi.title", "Return on investment"));
        ui.label(fill_template(
            &self.txt(
                "gui.roi.intro",
                "What dead batteries and outages cost you, compared to a {price} workstation.",
            ),
            &[("price", self.config.money(self.config.pricing.product_price))],
        ));
        ui.separator();
        let lifespan_tip = self.txt(
            "gui.roi.lifespan_tip",
            "0 means you do not buy power banks at all.",
        );
        egui::Grid::new("roi_inputs").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_OUTAGES).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.roi_outages, 0.0..=30.0).step_by(1.0));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_HOURS_PER_OUTAGE).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.roi_hours, 0.0..=12.0).step_by(0.5));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_HOURLY_RATE).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.roi_rate, 0.0..=300.0));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_CAFE_PURCHASES).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.roi_cafe, 0.0..=60.0).step_by(1.0));
            ui.end_row();
            label_with_tip(
                ui,
                self.tr.t(keys::PROMPT_POWER_BANK_LIFESPAN).trim_end_matches([':', ' ']),
                &lifespan_tip,
            );
            ui.add(egui::Slider::new(&mut self.roi_lifespan, 0.0..=36.0).step_by(1.0));
            ui.end_row();
        });
        ui.separator();
        let input = RoiInput {
            outages_per_month: self.roi_outages,
            hours_per_outage: self.roi_hours,
            hourly_rate: self.roi_rate,
            cafe_purchases_per_month: self.roi_cafe,
            power_bank_lifespan_months: self.roi_lifespan,
        };
        match finance::compute_roi(&input, &self.config.pricing) {
            Ok(res) => {
                if let Payback::Months(m) = res.payback {
                    ui.strong(fill_template(
                        &self.txt("gui.roi.headline", "Pays for itself in {months} months."),
                        &[("months", format!("{m:.1}"))],
                    ));
                }
                result_grid(ui, "roi_result", &report::roi_rows(&self.tr, &self.config, &res));
            }
            Err(e) => calc_error_label(ui, self.tr.t(keys::ERROR_PREFIX), &e),
        }
    }

    fn ui_diy(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.diy.title", "Build it yourself?"));
        ui.label(self.txt(
            "gui.diy.intro",
            "Estimate parts, tools and your time for a home-built equivalent.",
        ));
        ui.separator();
        egui::Grid::new("diy_inputs").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_QUALITY_LEVEL).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.diy_quality, diy::MIN_LEVEL..=diy::MAX_LEVEL));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_SKILL_LEVEL).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.diy_skill, diy::MIN_LEVEL..=diy::MAX_LEVEL));
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_TIME_VALUE).trim_end_matches([':', ' ']));
            ui.add(egui::Slider::new(&mut self.diy_time_value, 0.0..=200.0));
            ui.end_row();
        });
        ui.separator();
        let input = DiyInput {
            quality_level: self.diy_quality,
            skill_level: self.diy_skill,
            time_value_per_hour: self.diy_time_value,
        };
        match diy::compute_diy_cost(&input, &self.catalog.diy_features, &self.config.pricing) {
            Ok(res) => {
                let key = if res.difference_vs_product > 0.0 {
                    ("gui.diy.headline_more", "Building costs {diff} more than buying.")
                } else {
                    ("gui.diy.headline_less", "Building saves {diff}, if nothing goes wrong.")
                };
                ui.strong(fill_template(
                    &self.txt(key.0, key.1),
                    &[("diff", self.config.money(res.difference_vs_product.abs()))],
                ));
                result_grid(ui, "diy_result", &report::diy_rows(&self.tr, &self.config, &res));
            }
            Err(e) => calc_error_label(ui, self.tr.t(keys::ERROR_PREFIX), &e),
        }
    }

    fn ui_recommend(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.recommend.title", "Find your setup"));
        ui.separator();
        ui.label(self.txt("gui.recommend.devices", "Which devices will you power?"));
        ui.horizontal_wrapped(|ui| {
            for d in &self.catalog.devices {
                let mut on = self.rec_devices.contains(&d.id);
                let tip = format!("{:.0} W × {:.0} h", d.power_watts, d.daily_usage_hours);
                if ui.checkbox(&mut on, d.name).on_hover_text(tip).changed() {
                    if on {
                        self.rec_devices.insert(d.id);
                    } else {
                        self.rec_devices.remove(&d.id);
                    }
                }
            }
        });
        ui.add_space(6.0);
        ui.label(self.txt("gui.recommend.location", "Where will you work?"));
        ui.horizontal_wrapped(|ui| {
            for l in &self.catalog.locations {
                ui.selectable_value(&mut self.rec_location, l.id, l.name);
            }
        });
        ui.add_space(6.0);
        ui.label(self.txt("gui.recommend.duration", "For how long?"));
        ui.horizontal_wrapped(|ui| {
            for d in &self.catalog.durations {
                ui.selectable_value(&mut self.rec_duration, d.id, d.name);
            }
        });
        ui.separator();
        let input = UseCaseInput {
            devices: self.rec_devices.clone(),
            location: self.rec_location,
            duration: self.rec_duration,
        };
        match recommend::recommend(&input, &self.catalog) {
            Ok(rec) => {
                ui.strong(fill_template(
                    &self.txt("gui.recommend.headline", "We recommend the {tier} workstation."),
                    &[("tier", rec.tier.to_string())],
                ));
                result_grid(
                    ui,
                    "rec_result",
                    &report::recommendation_rows(&self.tr, &self.config, &rec),
                );
            }
            Err(e) => calc_error_label(ui, self.tr.t(keys::ERROR_PREFIX), &e),
        }
    }

    fn ui_contact(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.contact.title", "Get in touch"));
        ui.separator();
        let name_label = self.tr.t(keys::PROMPT_NAME).trim_end_matches([':', ' ']).to_string();
        let email_label = self.tr.t(keys::PROMPT_EMAIL).trim_end_matches([':', ' ']).to_string();
        let subject_label = self.tr.t(keys::PROMPT_SUBJECT).trim_end_matches([':', ' ']).to_string();
        let message_label = self.tr.t(keys::PROMPT_MESSAGE).trim_end_matches([':', ' ']).to_string();

        ui.label(&name_label);
        ui.text_edit_singleline(&mut self.contact_form.name);
        field_error_label(ui, &self.contact_errors, Field::Name);
        ui.label(&email_label);
        ui.text_edit_singleline(&mut self.contact_form.email);
        field_error_label(ui, &self.contact_errors, Field::Email);
        ui.label(&subject_label);
        ui.text_edit_singleline(&mut self.contact_form.subject);
        ui.label(&message_label);
        ui.add(egui::TextEdit::multiline(&mut self.contact_form.message).desired_rows(5));
        field_error_label(ui, &self.contact_errors, Field::Message);
        if ui.button(self.txt("gui.contact.send", "Send message")).clicked() {
            match contact::submit_contact(&mut self.mailer, &self.contact_form) {
                Ok(()) => {
                    self.contact_errors = ValidationErrors::default();
                    self.contact_form = ContactForm::default();
                    self.contact_status = Some(self.tr.t(keys::CONTACT_SENT).to_string());
                }
                Err(ContactError::Validation(errors)) => {
                    self.contact_errors = errors;
                    self.contact_status = None;
                }
                Err(e) => {
                    log::warn!("contact submission failed: {e}");
                    self.contact_status = Some(e.to_string());
                }
            }
        }

        ui.separator();
        ui.heading(self.txt("gui.newsletter.title", "Newsletter"));
        let subscribe_label = self.txt("gui.newsletter.subscribe", "Subscribe");
        ui.horizontal(|ui| {
            ui.label(&email_label);
            ui.text_edit_singleline(&mut self.newsletter.email);
            if ui.button(subscribe_label).clicked() {
                match contact::submit_newsletter(&mut self.mailer, &self.newsletter) {
                    Ok(()) => {
                        self.newsletter_errors = ValidationErrors::default();
                        self.newsletter = NewsletterSignup::default();
                        self.contact_status = Some(self.tr.t(keys::CONTACT_SUBSCRIBED).to_string());
                    }
                    Err(ContactError::Validation(errors)) => self.newsletter_errors = errors,
                    Err(e) => {
                        log::warn!("newsletter signup failed: {e}");
                        self.contact_status = Some(e.to_string());
                    }
                }
            }
        });
        field_error_label(ui, &self.newsletter_errors, Field::Email);
        if let Some(msg) = &self.contact_status {
            ui.add_space(6.0);
            ui.strong(msg);
        }
    }

    fn ui_catalog(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::CATALOG_TIERS));
        egui::Grid::new("tiers").num_columns(3).striped(true).show(ui, |ui| {
            for tier in ProductTier::ALL {
                ui.strong(tier.display_name());
                ui.label(self.config.money(tier.list_price()));
                ui.label(format!("{} mAh", tier.battery_capacity_mah()));
                ui.end_row();
            }
        });
        ui.separator();
        ui.heading(self.tr.t(keys::CATALOG_DEVICES));
        egui::Grid::new("devices").num_columns(3).striped(true).show(ui, |ui| {
            for d in &self.catalog.devices {
                ui.label(d.name);
                ui.label(format!("{:.0} W × {:.0} h", d.power_watts, d.daily_usage_hours));
                ui.label(format!("{:.0} Wh", d.watt_hours_per_day()));
                ui.end_row();
            }
        });
        ui.separator();
        ui.heading(self.tr.t(keys::CATALOG_SHOWROOM));
        let showroom = &self.catalog.showroom;
        ui.label(format!(
            "{} ({:.4}, {:.4})",
            showroom.label, showroom.latitude, showroom.longitude
        ));
        ui.hyperlink_to(self.txt("gui.catalog.map", "Open map"), showroom.map_url());
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let title = self.txt("gui.settings.title", "Settings");
        egui::Window::new(title)
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "{} ({})",
                    self.txt("gui.settings.lang", "Language"),
                    self.tr.language_code()
                ));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "System");
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                    });
                ui.horizontal(|ui| {
                    ui.label(self.txt("gui.settings.currency", "Currency symbol"));
                    ui.text_edit_singleline(&mut self.config.currency_symbol);
                });
                ui.separator();
                ui.label(self.txt("gui.settings.pricing", "Pricing"));
                egui::Grid::new("pricing").num_columns(2).show(ui, |ui| {
                    ui.label(self.tr.t(keys::RESULT_PRODUCT_PRICE));
                    ui.add(
                        egui::DragValue::new(&mut self.config.pricing.product_price)
                            .speed(5.0)
                            .clamp_range(1.0..=100_000.0),
                    );
                    ui.end_row();
                    ui.label(self.txt("gui.settings.cafe_price", "Cafe purchase"));
                    ui.add(
                        egui::DragValue::new(&mut self.config.pricing.cafe_unit_price)
                            .speed(0.5)
                            .clamp_range(0.0..=100.0),
                    );
                    ui.end_row();
                    ui.label(self.txt("gui.settings.power_bank_price", "Power bank replacement"));
                    ui.add(
                        egui::DragValue::new(&mut self.config.pricing.power_bank_price)
                            .speed(1.0)
                            .clamp_range(0.0..=2_000.0),
                    );
                    ui.end_row();
                });
                ui.separator();
                ui.label(self.txt("gui.settings.alpha", "Window transparency"));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.horizontal(|ui| {
                    let font = self.config.font_path.clone().unwrap_or_else(|| "-".into());
                    ui.label(format!("{}: {font}", self.txt("gui.settings.font", "Font")));
                    if ui.button(self.txt("gui.settings.font_pick", "Choose...")).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            let path = path.display().to_string();
                            match load_custom_font(ctx, &path) {
                                Ok(()) => self.config.font_path = Some(path),
                                Err(e) => self.settings_status = Some(e),
                            }
                        }
                    }
                });
                ui.separator();
                if ui.button(self.txt("gui.settings.save", "Save settings")).clicked() {
                    self.config.language = self.lang_input.clone();
                    self.config.window_alpha = self.window_alpha;
                    let resolved = i18n::resolve_language(&self.config.language, None);
                    self.tr = i18n::Translator::new_with_pack(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                    );
                    self.settings_status = Some(match self.config.save() {
                        Ok(()) => self.txt("gui.settings.saved", "Saved."),
                        Err(e) => format!("Save error: {e}"),
                    });
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt("gui.nav.app_title", "Portable Workstation Toolbox"));
                ui.separator();
                if ui.button(self.txt("gui.formula.button", "Formulas")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(self.txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_help_modal {
            let title = self.txt("gui.about.title", "Help / About");
            let lines = [
                self.txt("gui.about.app", "Offline calculators for the portable workstation."),
                self.txt("gui.about.version", "Version: 1.0.1"),
                self.txt(
                    "gui.about.contact_stub",
                    "Contact and newsletter submissions are only logged, never transmitted.",
                ),
                self.txt("gui.about.hint", "Set a user font in settings if Korean text shows as boxes."),
            ];
            egui::Window::new(title)
                .collapsible(false)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    for line in &lines {
                        ui.label(line);
                    }
                });
        }

        if self.show_formula_modal {
            let title = self.txt("gui.formula.title", "Formula reference");
            let lines = [
                self.txt(
                    "gui.formula.break_even",
                    "Break-even: units = ceil(fixed / (price - variable)); profit = units × margin - fixed.",
                ),
                self.txt(
                    "gui.formula.roi",
                    "ROI: savings = outages × hours × rate + cafe × unit price + power bank / lifespan; payback = price / savings.",
                ),
                self.txt(
                    "gui.formula.diy",
                    "DIY: part = min + (max - min)(quality - 1)/4; hours = base × difficulty × (6 - skill)/3.",
                ),
                self.txt(
                    "gui.formula.recommend",
                    "Battery: Σ W × h × 1000 / 12 V × days; tiers at 20k / 40k / 80k mAh.",
                ),
            ];
            egui::Window::new(title)
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    for line in &lines {
                        ui.label(line);
                    }
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(190.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::BreakEven => self.ui_break_even(ui),
                    Tab::Roi => self.ui_roi(ui),
                    Tab::Diy => self.ui_diy(ui),
                    Tab::Recommend => self.ui_recommend(ui),
                    Tab::Contact => self.ui_contact(ui),
                    Tab::Catalog => self.ui_catalog(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_takes_inputs_from_config_defaults() {
        let mut cfg = config::Config::default();
        cfg.defaults.selling_price = 999.0;
        cfg.defaults.quality_level = 9;
        let app = GuiApp::new(cfg);
        assert_eq!(app.be_selling_price, 999.0);
        assert_eq!(app.diy_quality, diy::MAX_LEVEL);
        assert_eq!(app.tab, Tab::BreakEven);
    }

    #[test]
    fn fill_template_replaces_all_placeholders() {
        let out = fill_template("{a} and {b} and {a}", &[("a", "1".into()), ("b", "2".into())]);
        assert_eq!(out, "1 and 2 and 1");
    }

    #[test]
    fn invalid_contact_keeps_form_and_lists_errors() {
        let mut app = GuiApp::new(config::Config::default());
        app.contact_form.email = "nope".into();
        let err = contact::submit_contact(&mut app.mailer, &app.contact_form).unwrap_err();
        match err {
            ContactError::Validation(errors) => {
                assert!(errors.for_field(Field::Name).is_some());
                assert!(errors.for_field(Field::Email).is_some());
                assert!(errors.for_field(Field::Message).is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(app.mailer.sent, 0);
    }
}
