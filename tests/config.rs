//! config.toml 로드/저장 테스트.
use pretty_assertions::assert_eq;
use workstation_toolbox::catalog::Pricing;
use workstation_toolbox::config::{load_from, Config};
use workstation_toolbox::finance::{compute_roi, RoiInput};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.currency_symbol = "€".into();
    cfg.pricing.product_price = 990.0;
    cfg.defaults.skill_level = 5;
    cfg.save_to(&path).unwrap();
    assert_eq!(load_from(&path).unwrap(), cfg);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n[pricing]\nproduct_price = 1000.0\n").unwrap();
    let cfg = load_from(&path).unwrap();
    assert_eq!(cfg.language, "en");
    assert_eq!(
        cfg.pricing,
        Pricing {
            product_price: 1000.0,
            ..Pricing::default()
        }
    );
    assert_eq!(cfg.defaults, Config::default().defaults);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").unwrap();
    assert!(load_from(&path).is_err());
}

#[test]
fn pricing_override_changes_payback() {
    let mut cfg = Config::default();
    cfg.pricing.product_price = 1650.0;
    let input = RoiInput {
        outages_per_month: 2.0,
        hours_per_outage: 3.0,
        hourly_rate: 50.0,
        cafe_purchases_per_month: 20.0,
        power_bank_lifespan_months: 12.0,
    };
    let res = compute_roi(&input, &cfg.pricing).unwrap();
    assert!((res.payback.months().unwrap() - 4.0).abs() < 1e-9);
}

#[test]
fn money_formats_sign_before_symbol() {
    let cfg = Config::default();
    assert_eq!(cfg.money(-12.5), "-$12.50");
    assert_eq!(cfg.money(850.0), "$850.00");
}
