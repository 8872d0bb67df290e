use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::catalog::Pricing;

pub const CONFIG_FILE: &str = "config.toml";

/// 계산기 입력창의 초기값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub selling_price: f64,
    pub variable_cost: f64,
    pub fixed_costs: f64,
    pub units_sold: u32,
    pub outages_per_month: f64,
    pub hours_per_outage: f64,
    pub hourly_rate: f64,
    pub cafe_purchases_per_month: f64,
    pub power_bank_lifespan_months: f64,
    pub quality_level: u8,
    pub skill_level: u8,
    pub time_value_per_hour: f64,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            selling_price: 850.0,
            variable_cost: 630.0,
            fixed_costs: 1200.0,
            units_sold: 6,
            outages_per_month: 2.0,
            hours_per_outage: 3.0,
            hourly_rate: 50.0,
            cafe_purchases_per_month: 20.0,
            power_bank_lifespan_months: 12.0,
            quality_level: 3,
            skill_level: 3,
            time_value_per_hour: 25.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en-us)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub currency_symbol: String,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// GUI 사용자 폰트(.ttf/.ttc) 경로
    pub font_path: Option<String>,
    pub pricing: Pricing,
    pub defaults: CalculatorDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            currency_symbol: "$".into(),
            window_alpha: 1.0,
            font_path: None,
            pricing: Pricing::default(),
            defaults: CalculatorDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정 경로에서 설정을 읽는다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("설정 저장: {}", path.display());
        Ok(())
    }

    /// 금액을 통화 기호와 함께 표시한다.
    pub fn money(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, -value)
        } else {
            format!("{}{:.2}", self.currency_symbol, value)
        }
    }
}
