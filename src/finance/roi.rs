use log::debug;
use serde::Serialize;

use crate::catalog::Pricing;
use crate::error::{ensure_non_negative, CalcError};

/// 분석 기간 [개월]
pub const ROI_HORIZON_MONTHS: f64 = 60.0;

/// ROI 계산 입력.
#[derive(Debug, Clone, Serialize)]
pub struct RoiInput {
    /// 월 정전/배터리 방전 횟수
    pub outages_per_month: f64,
    /// 1회당 작업 손실 시간 [h]
    pub hours_per_outage: f64,
    /// 시간당 인건비 [$/h]
    pub hourly_rate: f64,
    /// 충전 때문에 카페를 이용하는 월 횟수
    pub cafe_purchases_per_month: f64,
    /// 보조배터리 교체 주기 [개월]. 0이면 보조배터리를 쓰지 않는 것으로 본다.
    pub power_bank_lifespan_months: f64,
}

/// 회수기간. 월 절감액이 0이면 회수할 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "months")]
pub enum Payback {
    Months(f64),
    NotRecoverable,
}

impl Payback {
    pub fn months(self) -> Option<f64> {
        match self {
            Payback::Months(m) => Some(m),
            Payback::NotRecoverable => None,
        }
    }
}

/// ROI 계산 결과.
#[derive(Debug, Clone, Serialize)]
pub struct RoiResult {
    pub lost_productivity_cost: f64,
    pub cafe_cost: f64,
    pub power_bank_cost: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub payback: Payback,
    /// 5년 누적 절감액에서 제품가를 뺀 값 [$]
    pub five_year_savings: f64,
    pub roi_percent: f64,
}

/// 월 절감액과 회수기간, 5년 ROI를 계산한다.
pub fn compute_roi(input: &RoiInput, pricing: &Pricing) -> Result<RoiResult, CalcError> {
    let outages = ensure_non_negative(input.outages_per_month, "월 정전 횟수는 0 이상이어야 합니다.")?;
    let hours = ensure_non_negative(input.hours_per_outage, "손실 시간은 0 이상이어야 합니다.")?;
    let rate = ensure_non_negative(input.hourly_rate, "시간당 단가는 0 이상이어야 합니다.")?;
    let cafe = ensure_non_negative(
        input.cafe_purchases_per_month,
        "카페 이용 횟수는 0 이상이어야 합니다.",
    )?;
    let lifespan = ensure_non_negative(
        input.power_bank_lifespan_months,
        "보조배터리 교체 주기는 0 이상이어야 합니다.",
    )?;
    let price = pricing.product_price;
    if !price.is_finite() || price <= 0.0 {
        return Err(CalcError::InvalidInput("제품가는 0보다 커야 합니다."));
    }
    ensure_non_negative(pricing.cafe_unit_price, "카페 단가는 0 이상이어야 합니다.")?;
    ensure_non_negative(pricing.power_bank_price, "보조배터리 가격은 0 이상이어야 합니다.")?;

    let lost_productivity_cost = outages * hours * rate;
    let cafe_cost = cafe * pricing.cafe_unit_price;
    let power_bank_cost = if lifespan > 0.0 {
        pricing.power_bank_price / lifespan
    } else {
        0.0
    };
    let monthly_savings = lost_productivity_cost + cafe_cost + power_bank_cost;
    let payback = if monthly_savings > 0.0 {
        Payback::Months(price / monthly_savings)
    } else {
        Payback::NotRecoverable
    };
    let horizon_savings = monthly_savings * ROI_HORIZON_MONTHS;
    debug!("roi: monthly={monthly_savings} payback={payback:?}");
    Ok(RoiResult {
        lost_productivity_cost,
        cafe_cost,
        power_bank_cost,
        monthly_savings,
        annual_savings: monthly_savings * 12.0,
        payback,
        five_year_savings: horizon_savings - price,
        roi_percent: (horizon_savings / price - 1.0) * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_input() -> RoiInput {
        RoiInput {
            outages_per_month: 0.0,
            hours_per_outage: 0.0,
            hourly_rate: 0.0,
            cafe_purchases_per_month: 0.0,
            power_bank_lifespan_months: 0.0,
        }
    }

    #[test]
    fn all_zero_inputs_are_not_recoverable() {
        let res = compute_roi(&zero_input(), &Pricing::default()).unwrap();
        assert_eq!(res.monthly_savings, 0.0);
        assert_eq!(res.payback, Payback::NotRecoverable);
        assert!((res.roi_percent + 100.0).abs() < 1e-9);
        assert!((res.five_year_savings + 850.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_product_price() {
        let pricing = Pricing {
            product_price: 0.0,
            ..Pricing::default()
        };
        assert!(compute_roi(&zero_input(), &pricing).is_err());
    }

    #[test]
    fn roi_is_zero_when_savings_match_price_over_horizon() {
        let input = RoiInput {
            cafe_purchases_per_month: 850.0 / 60.0 / 5.0,
            ..zero_input()
        };
        let res = compute_roi(&input, &Pricing::default()).unwrap();
        assert!(res.roi_percent.abs() < 1e-9);
        assert!(res.five_year_savings.abs() < 1e-9);
        assert!((res.payback.months().unwrap() - 60.0).abs() < 1e-9);
    }
}
