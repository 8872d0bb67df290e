//! 손익분기/ROI 계산 회귀 및 성질 테스트.
use proptest::prelude::*;
use workstation_toolbox::catalog::Pricing;
use workstation_toolbox::finance::{
    compute_break_even, compute_roi, BreakEvenInput, BreakEvenPoint, Payback, RoiInput,
};

#[test]
fn reference_break_even_scenario() {
    let input = BreakEvenInput {
        selling_price: 850.0,
        variable_cost: 630.0,
        fixed_costs: 1200.0,
        units_sold: 6,
    };
    let res = compute_break_even(&input).expect("break-even calc");
    assert!((res.profit_per_unit - 220.0).abs() < 1e-9);
    assert_eq!(res.break_even, BreakEvenPoint::Units(6));
    // 6 × 220 − 1200
    assert!((res.monthly_profit - 120.0).abs() < 1e-9);
    assert!((res.annual_profit - 1440.0).abs() < 1e-9);
    assert!(input.monthly_profit_at(5) < 0.0);
}

#[test]
fn reference_roi_scenario() {
    let input = RoiInput {
        outages_per_month: 2.0,
        hours_per_outage: 3.0,
        hourly_rate: 50.0,
        cafe_purchases_per_month: 20.0,
        power_bank_lifespan_months: 12.0,
    };
    let res = compute_roi(&input, &Pricing::default()).expect("roi calc");
    assert!((res.lost_productivity_cost - 300.0).abs() < 1e-9);
    assert!((res.cafe_cost - 100.0).abs() < 1e-9);
    assert!((res.power_bank_cost - 12.5).abs() < 1e-9);
    assert!((res.monthly_savings - 412.5).abs() < 1e-9);
    assert!((res.annual_savings - 4950.0).abs() < 1e-9);
    let months = res.payback.months().expect("recoverable");
    assert!((months - 850.0 / 412.5).abs() < 1e-9);
    assert!((res.five_year_savings - (412.5 * 60.0 - 850.0)).abs() < 1e-9);
    assert!((res.roi_percent - (412.5 * 60.0 / 850.0 - 1.0) * 100.0).abs() < 1e-9);
}

#[test]
fn no_power_bank_means_no_power_bank_cost() {
    let input = RoiInput {
        outages_per_month: 0.0,
        hours_per_outage: 0.0,
        hourly_rate: 0.0,
        cafe_purchases_per_month: 0.0,
        power_bank_lifespan_months: 0.0,
    };
    let res = compute_roi(&input, &Pricing::default()).unwrap();
    assert_eq!(res.power_bank_cost, 0.0);
    assert_eq!(res.payback, Payback::NotRecoverable);
}

#[test]
fn negative_roi_inputs_are_rejected() {
    let input = RoiInput {
        outages_per_month: -1.0,
        hours_per_outage: 1.0,
        hourly_rate: 1.0,
        cafe_purchases_per_month: 0.0,
        power_bank_lifespan_months: 0.0,
    };
    assert!(compute_roi(&input, &Pricing::default()).is_err());
}

proptest! {
    #[test]
    fn break_even_is_first_profitable_volume(
        variable in 0u32..5_000,
        margin in 1u32..5_000,
        fixed in 0u32..1_000_000,
    ) {
        let input = BreakEvenInput {
            selling_price: f64::from(variable + margin),
            variable_cost: f64::from(variable),
            fixed_costs: f64::from(fixed),
            units_sold: 0,
        };
        let res = compute_break_even(&input).unwrap();
        let expected = u64::from(fixed.div_ceil(margin));
        prop_assert_eq!(res.break_even, BreakEvenPoint::Units(expected));
        prop_assert!(input.monthly_profit_at(expected) >= 0.0);
        if expected > 0 {
            prop_assert!(input.monthly_profit_at(expected - 1) < 0.0);
        }
    }

    #[test]
    fn cent_priced_break_even_is_first_profitable_volume(
        variable_cents in 0u32..500_000,
        margin_cents in 1u32..500_000,
        fixed_cents in 0u32..100_000_000,
    ) {
        let input = BreakEvenInput {
            selling_price: f64::from(variable_cents + margin_cents) / 100.0,
            variable_cost: f64::from(variable_cents) / 100.0,
            fixed_costs: f64::from(fixed_cents) / 100.0,
            units_sold: 0,
        };
        let res = compute_break_even(&input).unwrap();
        let n = res.break_even.units().unwrap();
        prop_assert!(input.monthly_profit_at(n) >= 0.0);
        if n > 0 {
            prop_assert!(input.monthly_profit_at(n - 1) < 0.0);
        }
    }

    #[test]
    fn higher_savings_shorten_payback(
        outages in 1.0f64..20.0,
        hours in 0.5f64..8.0,
        rate in 1.0f64..200.0,
        extra_rate in 0.0f64..200.0,
        cafe in 0.0f64..40.0,
    ) {
        let base = RoiInput {
            outages_per_month: outages,
            hours_per_outage: hours,
            hourly_rate: rate,
            cafe_purchases_per_month: cafe,
            power_bank_lifespan_months: 12.0,
        };
        let richer = RoiInput { hourly_rate: rate + extra_rate, ..base.clone() };
        let pricing = Pricing::default();
        let a = compute_roi(&base, &pricing).unwrap();
        let b = compute_roi(&richer, &pricing).unwrap();
        prop_assert!(b.monthly_savings >= a.monthly_savings);
        prop_assert!(b.payback.months().unwrap() <= a.payback.months().unwrap());
        prop_assert!(b.roi_percent >= a.roi_percent);
    }
}
