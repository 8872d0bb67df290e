use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const YES: &str = "general.yes";
    pub const NO: &str = "general.no";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_BREAK_EVEN: &str = "main_menu.break_even";
    pub const MAIN_MENU_ROI: &str = "main_menu.roi";
    pub const MAIN_MENU_DIY: &str = "main_menu.diy";
    pub const MAIN_MENU_RECOMMEND: &str = "main_menu.recommend";
    pub const MAIN_MENU_CONTACT: &str = "main_menu.contact";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const BREAK_EVEN_HEADING: &str = "break_even.heading";
    pub const PROMPT_SELLING_PRICE: &str = "prompt.selling_price";
    pub const PROMPT_VARIABLE_COST: &str = "prompt.variable_cost";
    pub const PROMPT_FIXED_COSTS: &str = "prompt.fixed_costs";
    pub const PROMPT_UNITS_SOLD: &str = "prompt.units_sold";

    pub const ROI_HEADING: &str = "roi.heading";
    pub const PROMPT_OUTAGES: &str = "prompt.outages";
    pub const PROMPT_HOURS_PER_OUTAGE: &str = "prompt.hours_per_outage";
    pub const PROMPT_HOURLY_RATE: &str = "prompt.hourly_rate";
    pub const PROMPT_CAFE_PURCHASES: &str = "prompt.cafe_purchases";
    pub const PROMPT_POWER_BANK_LIFESPAN: &str = "prompt.power_bank_lifespan";

    pub const DIY_HEADING: &str = "diy.heading";
    pub const PROMPT_QUALITY_LEVEL: &str = "prompt.quality_level";
    pub const PROMPT_SKILL_LEVEL: &str = "prompt.skill_level";
    pub const PROMPT_TIME_VALUE: &str = "prompt.time_value";

    pub const RECOMMEND_HEADING: &str = "recommend.heading";
    pub const PROMPT_DEVICES: &str = "prompt.devices";
    pub const PROMPT_LOCATION: &str = "prompt.location";
    pub const PROMPT_DURATION: &str = "prompt.duration";

    pub const CONTACT_HEADING: &str = "contact.heading";
    pub const CONTACT_OPTIONS: &str = "contact.options";
    pub const PROMPT_NAME: &str = "prompt.name";
    pub const PROMPT_EMAIL: &str = "prompt.email";
    pub const PROMPT_SUBJECT: &str = "prompt.subject";
    pub const PROMPT_MESSAGE: &str = "prompt.message";
    pub const CONTACT_SENT: &str = "contact.sent";
    pub const CONTACT_SUBSCRIBED: &str = "contact.subscribed";
    pub const CONTACT_INVALID: &str = "contact.invalid";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_DEVICES: &str = "catalog.devices";
    pub const CATALOG_LOCATIONS: &str = "catalog.locations";
    pub const CATALOG_DURATIONS: &str = "catalog.durations";
    pub const CATALOG_TIERS: &str = "catalog.tiers";
    pub const CATALOG_SHOWROOM: &str = "catalog.showroom";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const RESULT_PROFIT_PER_UNIT: &str = "result.profit_per_unit";
    pub const RESULT_BREAK_EVEN_UNITS: &str = "result.break_even_units";
    pub const RESULT_UNREACHABLE: &str = "result.unreachable";
    pub const RESULT_MONTHLY_PROFIT: &str = "result.monthly_profit";
    pub const RESULT_ANNUAL_PROFIT: &str = "result.annual_profit";
    pub const RESULT_LOST_PRODUCTIVITY: &str = "result.lost_productivity";
    pub const RESULT_CAFE_COST: &str = "result.cafe_cost";
    pub const RESULT_POWER_BANK_COST: &str = "result.power_bank_cost";
    pub const RESULT_MONTHLY_SAVINGS: &str = "result.monthly_savings";
    pub const RESULT_ANNUAL_SAVINGS: &str = "result.annual_savings";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_NOT_RECOVERABLE: &str = "result.not_recoverable";
    pub const RESULT_FIVE_YEAR_SAVINGS: &str = "result.five_year_savings";
    pub const RESULT_ROI_PERCENT: &str = "result.roi_percent";
    pub const RESULT_COMPONENT_COST: &str = "result.component_cost";
    pub const RESULT_EXTRAS_COST: &str = "result.extras_cost";
    pub const RESULT_TOOLS_COST: &str = "result.tools_cost";
    pub const RESULT_HOURS_NEEDED: &str = "result.hours_needed";
    pub const RESULT_TIME_COST: &str = "result.time_cost";
    pub const RESULT_TOTAL_COST: &str = "result.total_cost";
    pub const RESULT_PRODUCT_PRICE: &str = "result.product_price";
    pub const RESULT_DIFFERENCE: &str = "result.difference";
    pub const RESULT_ENERGY_PER_DAY: &str = "result.energy_per_day";
    pub const RESULT_BATTERY_NEEDED: &str = "result.battery_needed";
    pub const RESULT_POWER_TIER: &str = "result.power_tier";
    pub const RESULT_CONNECTIVITY: &str = "result.connectivity";
    pub const RESULT_WORKSPACE: &str = "result.workspace";
    pub const RESULT_TIER: &str = "result.tier";
    pub const RESULT_ADDONS: &str = "result.addons";
    pub const UNIT_MONTHS: &str = "unit.months";
    pub const UNIT_PIECES: &str = "unit.pieces";
    pub const UNIT_HOURS: &str = "unit.hours";
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
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
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

    /// 실제로 적용된 언어 코드. 설정이 auto여도 감지된 값을 돌려준다.
    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾고, 모두 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key)
    }

    pub fn yes_no(&self, value: bool) -> &str {
        if value {
            self.t(keys::YES)
        } else {
            self.t(keys::NO)
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
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
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
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
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
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
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

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함). GUI 문자열이 주로 들어 있다.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        YES => "예",
        NO => "아니오",
        MAIN_MENU_TITLE => "\n=== Portable Workstation Toolbox ===",
        MAIN_MENU_BREAK_EVEN => "1) 손익분기 계산기",
        MAIN_MENU_ROI => "2) ROI 계산기",
        MAIN_MENU_DIY => "3) DIY 비용 비교",
        MAIN_MENU_RECOMMEND => "4) 사용 환경별 추천",
        MAIN_MENU_CONTACT => "5) 문의 / 뉴스레터",
        MAIN_MENU_CATALOG => "6) 제품/기기 정보",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        BREAK_EVEN_HEADING => "\n-- 손익분기 계산 --",
        PROMPT_SELLING_PRICE => "판매가 [$/대]: ",
        PROMPT_VARIABLE_COST => "변동비 [$/대]: ",
        PROMPT_FIXED_COSTS => "월 고정비 [$]: ",
        PROMPT_UNITS_SOLD => "월 판매 수량 [대]: ",
        ROI_HEADING => "\n-- ROI 계산 --",
        PROMPT_OUTAGES => "월 전원 끊김 횟수: ",
        PROMPT_HOURS_PER_OUTAGE => "1회당 손실 시간 [h]: ",
        PROMPT_HOURLY_RATE => "시간당 단가 [$/h]: ",
        PROMPT_CAFE_PURCHASES => "충전 목적 카페 이용 [회/월]: ",
        PROMPT_POWER_BANK_LIFESPAN => "보조배터리 교체 주기 [개월] (사용 안 하면 0): ",
        DIY_HEADING => "\n-- DIY 비용 비교 --",
        PROMPT_QUALITY_LEVEL => "부품 품질 수준 (1~5): ",
        PROMPT_SKILL_LEVEL => "조립 숙련도 (1~5): ",
        PROMPT_TIME_VALUE => "시간 가치 [$/h]: ",
        RECOMMEND_HEADING => "\n-- 사용 환경별 추천 --",
        PROMPT_DEVICES => "사용 기기 번호(쉼표 구분): ",
        PROMPT_LOCATION => "사용 장소 번호: ",
        PROMPT_DURATION => "사용 기간 번호: ",
        CONTACT_HEADING => "\n-- 문의 / 뉴스레터 --",
        CONTACT_OPTIONS => "1) 문의 보내기  2) 뉴스레터 구독",
        PROMPT_NAME => "이름: ",
        PROMPT_EMAIL => "이메일: ",
        PROMPT_SUBJECT => "제목(선택): ",
        PROMPT_MESSAGE => "문의 내용: ",
        CONTACT_SENT => "문의가 접수되었습니다.",
        CONTACT_SUBSCRIBED => "뉴스레터 구독이 완료되었습니다.",
        CONTACT_INVALID => "입력을 확인하세요:",
        CATALOG_HEADING => "\n-- 제품/기기 정보 --",
        CATALOG_DEVICES => "기기",
        CATALOG_LOCATIONS => "장소",
        CATALOG_DURATIONS => "기간",
        CATALOG_TIERS => "제품 등급",
        CATALOG_SHOWROOM => "쇼룸",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/ko/en, 엔터=유지): ",
        SETTINGS_PROMPT_CURRENCY => "통화 기호 (엔터=유지): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        RESULT_PROFIT_PER_UNIT => "단위당 이익",
        RESULT_BREAK_EVEN_UNITS => "손익분기 수량",
        RESULT_UNREACHABLE => "도달 불가 (단위당 이익 ≤ 0)",
        RESULT_MONTHLY_PROFIT => "월 이익",
        RESULT_ANNUAL_PROFIT => "연 이익",
        RESULT_LOST_PRODUCTIVITY => "생산성 손실",
        RESULT_CAFE_COST => "카페 지출",
        RESULT_POWER_BANK_COST => "보조배터리 비용",
        RESULT_MONTHLY_SAVINGS => "월 절감액",
        RESULT_ANNUAL_SAVINGS => "연 절감액",
        RESULT_PAYBACK => "회수 기간",
        RESULT_NOT_RECOVERABLE => "회수 불가 (절감액 없음)",
        RESULT_FIVE_YEAR_SAVINGS => "5년 순절감액",
        RESULT_ROI_PERCENT => "5년 ROI",
        RESULT_COMPONENT_COST => "부품비",
        RESULT_EXTRAS_COST => "잡자재비",
        RESULT_TOOLS_COST => "공구비",
        RESULT_HOURS_NEEDED => "예상 작업 시간",
        RESULT_TIME_COST => "시간 비용",
        RESULT_TOTAL_COST => "DIY 총비용",
        RESULT_PRODUCT_PRICE => "제품가",
        RESULT_DIFFERENCE => "제품 대비 차액",
        RESULT_ENERGY_PER_DAY => "일일 소비 전력량",
        RESULT_BATTERY_NEEDED => "필요 배터리 용량",
        RESULT_POWER_TIER => "전력 등급",
        RESULT_CONNECTIVITY => "별도 통신 필요",
        RESULT_WORKSPACE => "작업 공간 필요",
        RESULT_TIER => "추천 제품",
        RESULT_ADDONS => "추천 액세서리",
        UNIT_MONTHS => "개월",
        UNIT_PIECES => "대",
        UNIT_HOURS => "시간",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        YES => "yes",
        NO => "no",
        MAIN_MENU_TITLE => "\n=== Portable Workstation Toolbox ===",
        MAIN_MENU_BREAK_EVEN => "1) Break-even calculator",
        MAIN_MENU_ROI => "2) ROI calculator",
        MAIN_MENU_DIY => "3) DIY cost comparison",
        MAIN_MENU_RECOMMEND => "4) Use-case recommendation",
        MAIN_MENU_CONTACT => "5) Contact / newsletter",
        MAIN_MENU_CATALOG => "6) Product & device info",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        BREAK_EVEN_HEADING => "\n-- Break-even --",
        PROMPT_SELLING_PRICE => "Selling price [$/unit]: ",
        PROMPT_VARIABLE_COST => "Variable cost [$/unit]: ",
        PROMPT_FIXED_COSTS => "Monthly fixed costs [$]: ",
        PROMPT_UNITS_SOLD => "Units sold per month: ",
        ROI_HEADING => "\n-- ROI --",
        PROMPT_OUTAGES => "Power outages per month: ",
        PROMPT_HOURS_PER_OUTAGE => "Hours lost per outage: ",
        PROMPT_HOURLY_RATE => "Hourly rate [$/h]: ",
        PROMPT_CAFE_PURCHASES => "Cafe visits for charging [per month]: ",
        PROMPT_POWER_BANK_LIFESPAN => "Power bank replacement cycle [months] (0 if none): ",
        DIY_HEADING => "\n-- DIY cost comparison --",
        PROMPT_QUALITY_LEVEL => "Component quality (1-5): ",
        PROMPT_SKILL_LEVEL => "Build skill (1-5): ",
        PROMPT_TIME_VALUE => "Value of your time [$/h]: ",
        RECOMMEND_HEADING => "\n-- Use-case recommendation --",
        PROMPT_DEVICES => "Device numbers (comma separated): ",
        PROMPT_LOCATION => "Location number: ",
        PROMPT_DURATION => "Duration number: ",
        CONTACT_HEADING => "\n-- Contact / newsletter --",
        CONTACT_OPTIONS => "1) Send a message  2) Subscribe to newsletter",
        PROMPT_NAME => "Name: ",
        PROMPT_EMAIL => "Email: ",
        PROMPT_SUBJECT => "Subject (optional): ",
        PROMPT_MESSAGE => "Message: ",
        CONTACT_SENT => "Thanks, your message was received.",
        CONTACT_SUBSCRIBED => "You are subscribed to the newsletter.",
        CONTACT_INVALID => "Please check your input:",
        CATALOG_HEADING => "\n-- Product & device info --",
        CATALOG_DEVICES => "Devices",
        CATALOG_LOCATIONS => "Locations",
        CATALOG_DURATIONS => "Durations",
        CATALOG_TIERS => "Product tiers",
        CATALOG_SHOWROOM => "Showroom",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/ko/en, enter to keep): ",
        SETTINGS_PROMPT_CURRENCY => "Currency symbol (enter to keep): ",
        SETTINGS_SAVED => "Settings saved.",
        RESULT_PROFIT_PER_UNIT => "Profit per unit",
        RESULT_BREAK_EVEN_UNITS => "Break-even units",
        RESULT_UNREACHABLE => "unreachable (profit per unit <= 0)",
        RESULT_MONTHLY_PROFIT => "Monthly profit",
        RESULT_ANNUAL_PROFIT => "Annual profit",
        RESULT_LOST_PRODUCTIVITY => "Lost productivity",
        RESULT_CAFE_COST => "Cafe spending",
        RESULT_POWER_BANK_COST => "Power bank cost",
        RESULT_MONTHLY_SAVINGS => "Monthly savings",
        RESULT_ANNUAL_SAVINGS => "Annual savings",
        RESULT_PAYBACK => "Payback period",
        RESULT_NOT_RECOVERABLE => "not recoverable (no savings)",
        RESULT_FIVE_YEAR_SAVINGS => "5-year net savings",
        RESULT_ROI_PERCENT => "5-year ROI",
        RESULT_COMPONENT_COST => "Components",
        RESULT_EXTRAS_COST => "Extra parts",
        RESULT_TOOLS_COST => "Tools",
        RESULT_HOURS_NEEDED => "Estimated build time",
        RESULT_TIME_COST => "Time cost",
        RESULT_TOTAL_COST => "DIY total",
        RESULT_PRODUCT_PRICE => "Product price",
        RESULT_DIFFERENCE => "Difference vs product",
        RESULT_ENERGY_PER_DAY => "Energy per day",
        RESULT_BATTERY_NEEDED => "Battery needed",
        RESULT_POWER_TIER => "Power tier",
        RESULT_CONNECTIVITY => "Extra connectivity needed",
        RESULT_WORKSPACE => "Workspace needed",
        RESULT_TIER => "Recommended product",
        RESULT_ADDONS => "Suggested add-ons",
        UNIT_MONTHS => "months",
        UNIT_PIECES => "units",
        UNIT_HOURS => "h",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en-gb")), "en-us");
    }

    #[test]
    fn korean_falls_back_to_builtin_strings() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.t(keys::YES), "예");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn language_code_reports_resolved_language() {
        assert_eq!(Translator::new("ko-kr").language_code(), "ko");
        assert_eq!(Translator::new("en-us").language_code(), "en");
        assert_eq!(Translator::new_with_pack("fr-fr", None).language_code(), "en");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[gui.tab]\nroi = \"ROI\"\n").unwrap();
        assert_eq!(map.get("gui.tab.roi").map(String::as_str), Some("ROI"));
    }
}
