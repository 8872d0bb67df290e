//! 계산 결과를 (항목, 값) 행으로 만들어 CLI와 GUI가 같이 쓴다.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::diy::DiyCostResult;
use crate::finance::{BreakEvenPoint, BreakEvenResult, Payback, RoiResult};
use crate::i18n::{keys, Translator};
use crate::recommend::{PowerTier, Recommendation};

pub type Row = (String, String);

fn row(tr: &Translator, key: &str, value: String) -> Row {
    (tr.t(key).to_string(), value)
}

pub fn break_even_rows(tr: &Translator, cfg: &Config, res: &BreakEvenResult) -> Vec<Row> {
    let point = match res.break_even {
        BreakEvenPoint::Units(n) => format!("{n} {}", tr.t(keys::UNIT_PIECES)),
        BreakEvenPoint::Unreachable => tr.t(keys::RESULT_UNREACHABLE).to_string(),
    };
    vec![
        row(tr, keys::RESULT_PROFIT_PER_UNIT, cfg.money(res.profit_per_unit)),
        row(tr, keys::RESULT_BREAK_EVEN_UNITS, point),
        row(tr, keys::RESULT_MONTHLY_PROFIT, cfg.money(res.monthly_profit)),
        row(tr, keys::RESULT_ANNUAL_PROFIT, cfg.money(res.annual_profit)),
    ]
}

pub fn roi_rows(tr: &Translator, cfg: &Config, res: &RoiResult) -> Vec<Row> {
    let payback = match res.payback {
        Payback::Months(m) => format!("{m:.1} {}", tr.t(keys::UNIT_MONTHS)),
        Payback::NotRecoverable => tr.t(keys::RESULT_NOT_RECOVERABLE).to_string(),
    };
    vec![
        row(tr, keys::RESULT_LOST_PRODUCTIVITY, cfg.money(res.lost_productivity_cost)),
        row(tr, keys::RESULT_CAFE_COST, cfg.money(res.cafe_cost)),
        row(tr, keys::RESULT_POWER_BANK_COST, cfg.money(res.power_bank_cost)),
        row(tr, keys::RESULT_MONTHLY_SAVINGS, cfg.money(res.monthly_savings)),
        row(tr, keys::RESULT_ANNUAL_SAVINGS, cfg.money(res.annual_savings)),
        row(tr, keys::RESULT_PAYBACK, payback),
        row(tr, keys::RESULT_FIVE_YEAR_SAVINGS, cfg.money(res.five_year_savings)),
        row(tr, keys::RESULT_ROI_PERCENT, format!("{:.1} %", res.roi_percent)),
    ]
}

pub fn diy_rows(tr: &Translator, cfg: &Config, res: &DiyCostResult) -> Vec<Row> {
    let mut rows: Vec<Row> = res
        .features
        .iter()
        .map(|f| (format!("  {}", f.name), cfg.money(f.cost)))
        .collect();
    rows.extend([
        row(tr, keys::RESULT_COMPONENT_COST, cfg.money(res.component_cost)),
        row(tr, keys::RESULT_EXTRAS_COST, cfg.money(res.extras_cost)),
        row(tr, keys::RESULT_TOOLS_COST, cfg.money(res.tools_cost)),
        row(
            tr,
            keys::RESULT_HOURS_NEEDED,
            format!("{:.1} {}", res.hours_needed, tr.t(keys::UNIT_HOURS)),
        ),
        row(tr, keys::RESULT_TIME_COST, cfg.money(res.time_cost)),
        row(tr, keys::RESULT_TOTAL_COST, cfg.money(res.total_cost)),
        row(tr, keys::RESULT_PRODUCT_PRICE, cfg.money(res.product_price)),
        row(tr, keys::RESULT_DIFFERENCE, cfg.money(res.difference_vs_product)),
    ]);
    rows
}

pub fn power_tier_label(tier: PowerTier) -> &'static str {
    match tier {
        PowerTier::Standard => "Standard",
        PowerTier::Medium => "Medium",
        PowerTier::High => "High",
        PowerTier::Maximum => "Maximum",
    }
}

pub fn recommendation_rows(tr: &Translator, cfg: &Config, rec: &Recommendation) -> Vec<Row> {
    let addons = if rec.addons.is_empty() {
        "-".to_string()
    } else {
        rec.addons
            .iter()
            .map(|a| a.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    vec![
        row(
            tr,
            keys::RESULT_ENERGY_PER_DAY,
            format!("{:.0} Wh", rec.watt_hours_per_day),
        ),
        row(
            tr,
            keys::RESULT_BATTERY_NEEDED,
            format!("{:.0} mAh", rec.battery_needed_mah),
        ),
        row(tr, keys::RESULT_POWER_TIER, power_tier_label(rec.power_tier).to_string()),
        row(tr, keys::RESULT_CONNECTIVITY, tr.yes_no(rec.connectivity_needed).to_string()),
        row(tr, keys::RESULT_WORKSPACE, tr.yes_no(rec.workspace_needed).to_string()),
        row(
            tr,
            keys::RESULT_TIER,
            format!("{} ({})", rec.tier, cfg.money(rec.tier.list_price())),
        ),
        row(tr, keys::RESULT_ADDONS, addons),
    ]
}

/// 카탈로그 요약 텍스트.
pub fn catalog_lines(tr: &Translator, cfg: &Config, catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![format!("[{}]", tr.t(keys::CATALOG_TIERS))];
    for tier in crate::catalog::ProductTier::ALL {
        lines.push(format!(
            "  {:<14} {:>10}  {} mAh",
            tier.display_name(),
            cfg.money(tier.list_price()),
            tier.battery_capacity_mah()
        ));
    }
    lines.push(format!("[{}]", tr.t(keys::CATALOG_DEVICES)));
    for d in &catalog.devices {
        lines.push(format!(
            "  {:<24} {:>5.0} W × {:>4.1} h = {:>5.0} Wh",
            d.id.as_str(),
            d.power_watts,
            d.daily_usage_hours,
            d.watt_hours_per_day()
        ));
    }
    lines.push(format!("[{}]", tr.t(keys::CATALOG_LOCATIONS)));
    for l in &catalog.locations {
        lines.push(format!(
            "  {:<10} {:<20} power={} internet={}",
            l.id.as_str(),
            l.name,
            tr.yes_no(l.has_power),
            tr.yes_no(l.has_internet)
        ));
    }
    lines.push(format!("[{}]", tr.t(keys::CATALOG_DURATIONS)));
    for d in &catalog.durations {
        lines.push(format!("  {:<10} {} d", d.id.as_str(), d.days));
    }
    lines.push(format!("[{}]", tr.t(keys::CATALOG_SHOWROOM)));
    lines.push(format!(
        "  {} ({:.4}, {:.4})",
        catalog.showroom.label, catalog.showroom.latitude, catalog.showroom.longitude
    ));
    lines.push(format!("  {}", catalog.showroom.map_url()));
    lines
}

pub fn print_rows(rows: &[Row]) {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        let pad = width.saturating_sub(label.chars().count());
        println!("{label}{}: {value}", " ".repeat(pad));
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{compute_break_even, BreakEvenInput};

    #[test]
    fn unreachable_break_even_is_spelled_out() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let res = compute_break_even(&BreakEvenInput {
            selling_price: 100.0,
            variable_cost: 120.0,
            fixed_costs: 50.0,
            units_sold: 1,
        })
        .unwrap();
        let rows = break_even_rows(&tr, &cfg, &res);
        assert_eq!(rows[1].1, "unreachable (profit per unit <= 0)");
        assert_eq!(rows[0].1, "-$20.00");
    }

    #[test]
    fn json_uses_tagged_break_even_point() {
        let res = compute_break_even(&BreakEvenInput {
            selling_price: 850.0,
            variable_cost: 630.0,
            fixed_costs: 1200.0,
            units_sold: 6,
        })
        .unwrap();
        let json = to_json(&res).unwrap();
        assert!(json.contains("\"kind\": \"units\""));
        assert!(json.contains("\"units\": 6"));
    }
}
