use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::catalog::{Catalog, DeviceId, DurationId, LocationId};
use crate::config::Config;
use crate::contact::{self, ContactError, ContactForm, Mailer, NewsletterSignup};
use crate::diy::{self, DiyInput};
use crate::error::CalcError;
use crate::finance::{self, BreakEvenInput, RoiInput};
use crate::i18n::{keys, Translator};
use crate::recommend::{self, UseCaseInput};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BreakEven,
    Roi,
    Diy,
    Recommend,
    Contact,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_BREAK_EVEN,
        keys::MAIN_MENU_ROI,
        keys::MAIN_MENU_DIY,
        keys::MAIN_MENU_RECOMMEND,
        keys::MAIN_MENU_CONTACT,
        keys::MAIN_MENU_CATALOG,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::BreakEven),
            "2" => return Ok(MenuChoice::Roi),
            "3" => return Ok(MenuChoice::Diy),
            "4" => return Ok(MenuChoice::Recommend),
            "5" => return Ok(MenuChoice::Contact),
            "6" => return Ok(MenuChoice::Catalog),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산 오류는 메뉴를 빠져나가지 않고 메시지만 출력한다.
fn report_calc_error(tr: &Translator, err: &CalcError) {
    println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
}

/// 손익분기 메뉴를 처리한다.
pub fn handle_break_even(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BREAK_EVEN_HEADING));
    let input = BreakEvenInput {
        selling_price: read_f64(tr, keys::PROMPT_SELLING_PRICE)?,
        variable_cost: read_f64(tr, keys::PROMPT_VARIABLE_COST)?,
        fixed_costs: read_f64(tr, keys::PROMPT_FIXED_COSTS)?,
        units_sold: read_u32(tr, keys::PROMPT_UNITS_SOLD)?,
    };
    match finance::compute_break_even(&input) {
        Ok(res) => report::print_rows(&report::break_even_rows(tr, cfg, &res)),
        Err(e) => report_calc_error(tr, &e),
    }
    Ok(())
}

/// ROI 메뉴를 처리한다.
pub fn handle_roi(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROI_HEADING));
    let input = RoiInput {
        outages_per_month: read_f64(tr, keys::PROMPT_OUTAGES)?,
        hours_per_outage: read_f64(tr, keys::PROMPT_HOURS_PER_OUTAGE)?,
        hourly_rate: read_f64(tr, keys::PROMPT_HOURLY_RATE)?,
        cafe_purchases_per_month: read_f64(tr, keys::PROMPT_CAFE_PURCHASES)?,
        power_bank_lifespan_months: read_f64(tr, keys::PROMPT_POWER_BANK_LIFESPAN)?,
    };
    match finance::compute_roi(&input, &cfg.pricing) {
        Ok(res) => report::print_rows(&report::roi_rows(tr, cfg, &res)),
        Err(e) => report_calc_error(tr, &e),
    }
    Ok(())
}

/// DIY 비용 비교 메뉴를 처리한다.
pub fn handle_diy(tr: &Translator, cfg: &Config, catalog: &Catalog) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DIY_HEADING));
    let input = DiyInput {
        quality_level: read_level(tr, keys::PROMPT_QUALITY_LEVEL)?,
        skill_level: read_level(tr, keys::PROMPT_SKILL_LEVEL)?,
        time_value_per_hour: read_f64(tr, keys::PROMPT_TIME_VALUE)?,
    };
    match diy::compute_diy_cost(&input, &catalog.diy_features, &cfg.pricing) {
        Ok(res) => report::print_rows(&report::diy_rows(tr, cfg, &res)),
        Err(e) => report_calc_error(tr, &e),
    }
    Ok(())
}

/// 사용 환경별 추천 메뉴를 처리한다.
pub fn handle_recommend(tr: &Translator, cfg: &Config, catalog: &Catalog) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RECOMMEND_HEADING));
    for (i, d) in catalog.devices.iter().enumerate() {
        println!("  {}) {} ({:.0} W, {:.0} h)", i + 1, d.name, d.power_watts, d.daily_usage_hours);
    }
    let devices = loop {
        let line = read_line(tr.t(keys::PROMPT_DEVICES))?;
        match parse_device_list(&line, catalog) {
            Some(set) => break set,
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    for (i, l) in catalog.locations.iter().enumerate() {
        println!("  {}) {}", i + 1, l.name);
    }
    let location = read_index(tr, keys::PROMPT_LOCATION, catalog.locations.len())?;
    let location: LocationId = catalog.locations[location].id;
    for (i, d) in catalog.durations.iter().enumerate() {
        println!("  {}) {} ({} d)", i + 1, d.name, d.days);
    }
    let duration = read_index(tr, keys::PROMPT_DURATION, catalog.durations.len())?;
    let duration: DurationId = catalog.durations[duration].id;

    let input = UseCaseInput {
        devices,
        location,
        duration,
    };
    match recommend::recommend(&input, catalog) {
        Ok(rec) => report::print_rows(&report::recommendation_rows(tr, cfg, &rec)),
        Err(e) => report_calc_error(tr, &e),
    }
    Ok(())
}

/// "1,3" 같은 번호 목록을 기기 집합으로 바꾼다. 빈 입력은 빈 집합.
pub fn parse_device_list(line: &str, catalog: &Catalog) -> Option<BTreeSet<DeviceId>> {
    let mut set = BTreeSet::new();
    for part in line.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let n: usize = part.parse().ok()?;
        let device = catalog.devices.get(n.checked_sub(1)?)?;
        set.insert(device.id);
    }
    Some(set)
}

/// 문의/뉴스레터 메뉴를 처리한다.
pub fn handle_contact<M: Mailer>(tr: &Translator, mailer: &mut M) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONTACT_HEADING));
    println!("{}", tr.t(keys::CONTACT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let outcome = match sel.trim() {
        "1" => {
            let form = ContactForm {
                name: read_line(tr.t(keys::PROMPT_NAME))?,
                email: read_line(tr.t(keys::PROMPT_EMAIL))?,
                subject: read_line(tr.t(keys::PROMPT_SUBJECT))?,
                message: read_line(tr.t(keys::PROMPT_MESSAGE))?,
            };
            contact::submit_contact(mailer, &form).map(|_| keys::CONTACT_SENT)
        }
        "2" => {
            let signup = NewsletterSignup {
                email: read_line(tr.t(keys::PROMPT_EMAIL))?,
            };
            contact::submit_newsletter(mailer, &signup).map(|_| keys::CONTACT_SUBSCRIBED)
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    match outcome {
        Ok(key) => println!("{}", tr.t(key)),
        Err(ContactError::Validation(errors)) => {
            println!("{}", tr.t(keys::CONTACT_INVALID));
            for e in &errors.0 {
                println!("  - {e}");
            }
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub fn handle_catalog(tr: &Translator, cfg: &Config, catalog: &Catalog) {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    for line in report::catalog_lines(tr, cfg, catalog) {
        println!("{line}");
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} ({})",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        tr.language_code(),
        cfg.language
    );
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    if !lang.trim().is_empty() {
        cfg.language = lang.trim().to_string();
    }
    let currency = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
    if !currency.trim().is_empty() {
        cfg.currency_symbol = currency.trim().to_string();
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 입력이 끝나면(EOF) 재입력 루프가 돌지 않도록 `UnexpectedEof`를 돌려준다.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt_key: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_level(tr: &Translator, prompt_key: &str) -> Result<u8, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<u8>() {
            Ok(v) if (diy::MIN_LEVEL..=diy::MAX_LEVEL).contains(&v) => return Ok(v),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 1부터 시작하는 번호를 읽어 0 기반 인덱스로 돌려준다.
fn read_index(tr: &Translator, prompt_key: &str, len: usize) -> Result<usize, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(n - 1),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
