use log::debug;
use serde::Serialize;

use crate::error::{ensure_non_negative, CalcError};

/// 손익분기 계산 입력.
#[derive(Debug, Clone, Serialize)]
pub struct BreakEvenInput {
    /// 판매가 [$/대]
    pub selling_price: f64,
    /// 변동비 [$/대]
    pub variable_cost: f64,
    /// 월 고정비 [$]
    pub fixed_costs: f64,
    /// 월 판매 수량 [대]
    pub units_sold: u32,
}

/// 손익분기점. 단위당 이익이 0 이하이면 도달할 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "units")]
pub enum BreakEvenPoint {
    Units(u64),
    Unreachable,
}

impl BreakEvenPoint {
    pub fn units(self) -> Option<u64> {
        match self {
            BreakEvenPoint::Units(n) => Some(n),
            BreakEvenPoint::Unreachable => None,
        }
    }
}

/// 손익분기 계산 결과.
#[derive(Debug, Clone, Serialize)]
pub struct BreakEvenResult {
    pub profit_per_unit: f64,
    pub break_even: BreakEvenPoint,
    /// 월 이익 [$] (음수면 손실)
    pub monthly_profit: f64,
    pub annual_profit: f64,
}

impl BreakEvenInput {
    /// 판매 수량별 월 이익 = 수량 × 단위당 이익 − 고정비.
    pub fn monthly_profit_at(&self, units: u64) -> f64 {
        units as f64 * (self.selling_price - self.variable_cost) - self.fixed_costs
    }
}

/// 몫의 올림을 초기값으로 잡고, 부동소수점 오차로 어긋난 만큼 이익선에 맞춰 보정한다.
/// 결과 n은 `monthly_profit_at(n - 1) < 0 <= monthly_profit_at(n)`을 만족한다.
fn first_profitable_volume(input: &BreakEvenInput, profit_per_unit: f64) -> u64 {
    let mut n = (input.fixed_costs / profit_per_unit).ceil() as u64;
    while n > 0 && input.monthly_profit_at(n - 1) >= 0.0 {
        n -= 1;
    }
    while input.monthly_profit_at(n) < 0.0 {
        n += 1;
    }
    n
}

/// 단위당 이익, 손익분기 수량, 월/연 이익을 계산한다.
pub fn compute_break_even(input: &BreakEvenInput) -> Result<BreakEvenResult, CalcError> {
    ensure_non_negative(input.selling_price, "판매가는 0 이상이어야 합니다.")?;
    ensure_non_negative(input.variable_cost, "변동비는 0 이상이어야 합니다.")?;
    ensure_non_negative(input.fixed_costs, "고정비는 0 이상이어야 합니다.")?;

    let profit_per_unit = input.selling_price - input.variable_cost;
    let break_even = if profit_per_unit > 0.0 {
        BreakEvenPoint::Units(first_profitable_volume(input, profit_per_unit))
    } else {
        BreakEvenPoint::Unreachable
    };
    let monthly_profit = input.monthly_profit_at(u64::from(input.units_sold));
    debug!(
        "break-even: ppu={profit_per_unit} point={break_even:?} monthly={monthly_profit}"
    );
    Ok(BreakEvenResult {
        profit_per_unit,
        break_even,
        monthly_profit,
        annual_profit: monthly_profit * 12.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(price: f64, var: f64, fixed: f64, units: u32) -> BreakEvenInput {
        BreakEvenInput {
            selling_price: price,
            variable_cost: var,
            fixed_costs: fixed,
            units_sold: units,
        }
    }

    #[test]
    fn zero_fixed_costs_break_even_immediately() {
        let res = compute_break_even(&scenario(100.0, 40.0, 0.0, 3)).unwrap();
        assert_eq!(res.break_even, BreakEvenPoint::Units(0));
        assert!((res.monthly_profit - 180.0).abs() < 1e-9);
    }

    #[test]
    fn exact_division_is_not_rounded_up() {
        let res = compute_break_even(&scenario(850.0, 630.0, 1320.0, 6)).unwrap();
        assert_eq!(res.break_even, BreakEvenPoint::Units(6));
        assert!(res.monthly_profit.abs() < 1e-9);
    }

    #[test]
    fn cent_prices_land_on_first_profitable_unit() {
        // 이론상 정확히 11대지만 부동소수점 이익선에선 11대가 아직 손실
        let input = scenario(99.23, 65.01, 376.42, 0);
        let n = compute_break_even(&input).unwrap().break_even.units().unwrap();
        assert!(input.monthly_profit_at(n) >= 0.0);
        assert!(input.monthly_profit_at(n - 1) < 0.0);

        // 522.24 / 2.72 = 192 인데 몫이 192보다 크게 나와 193으로 올림되던 경우
        let input = scenario(7.83, 5.11, 522.24, 0);
        let res = compute_break_even(&input).unwrap();
        assert_eq!(res.break_even, BreakEvenPoint::Units(192));
        assert!(input.monthly_profit_at(191) < 0.0);
    }

    #[test]
    fn non_positive_margin_is_unreachable() {
        let res = compute_break_even(&scenario(500.0, 500.0, 1000.0, 10)).unwrap();
        assert_eq!(res.break_even, BreakEvenPoint::Unreachable);
        assert_eq!(res.break_even.units(), None);
        let res = compute_break_even(&scenario(400.0, 500.0, 1000.0, 10)).unwrap();
        assert_eq!(res.break_even, BreakEvenPoint::Unreachable);
        assert!(res.monthly_profit < 0.0);
    }

    #[test]
    fn rejects_negative_or_nan_money() {
        assert!(compute_break_even(&scenario(-1.0, 0.0, 0.0, 1)).is_err());
        assert!(compute_break_even(&scenario(10.0, f64::NAN, 0.0, 1)).is_err());
        assert!(compute_break_even(&scenario(10.0, 5.0, f64::INFINITY, 1)).is_err());
    }
}
