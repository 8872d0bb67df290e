//! DIY 비용 추정 테스트.
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use workstation_toolbox::catalog::{Catalog, Pricing};
use workstation_toolbox::diy::{compute_diy_cost, DiyInput};

fn estimate(quality_level: u8, skill_level: u8, time_value_per_hour: f64) -> workstation_toolbox::diy::DiyCostResult {
    let cat = Catalog::default();
    compute_diy_cost(
        &DiyInput {
            quality_level,
            skill_level,
            time_value_per_hour,
        },
        &cat.diy_features,
        &Pricing::default(),
    )
    .expect("diy calc")
}

#[test]
fn midpoint_levels_use_range_midpoints() {
    let cat = Catalog::default();
    let res = estimate(3, 3, 25.0);
    let expected: Vec<(&str, f64)> = cat
        .diy_features
        .iter()
        .filter_map(|f| f.diy_cost.map(|r| (f.name, r.midpoint())))
        .collect();
    let names: Vec<&str> = res.features.iter().map(|f| f.name).collect();
    assert_eq!(names, expected.iter().map(|(n, _)| *n).collect::<Vec<_>>());
    for (feature, (_, mid)) in res.features.iter().zip(&expected) {
        assert!((feature.cost - mid).abs() < 1e-9, "{}", feature.name);
    }
}

#[test]
fn totals_add_up_and_compare_with_product() {
    let res = estimate(4, 2, 30.0);
    let sum = res.component_cost + res.extras_cost + res.tools_cost + res.time_cost;
    assert!((res.total_cost - sum).abs() < 1e-9);
    assert!((res.time_cost - res.hours_needed * 30.0).abs() < 1e-9);
    assert_eq!(res.product_price, 850.0);
    assert!((res.difference_vs_product - (res.total_cost - 850.0)).abs() < 1e-9);
}

#[test]
fn mid_skill_takes_base_hours_times_difficulty() {
    let cat = Catalog::default();
    let diffs: Vec<f64> = cat
        .diy_features
        .iter()
        .filter(|f| f.diy_cost.is_some())
        .map(|f| f.difficulty)
        .collect();
    let avg = diffs.iter().sum::<f64>() / diffs.len() as f64;
    let res = estimate(3, 3, 0.0);
    assert!((res.hours_needed - 30.0 * avg).abs() < 1e-9);
    assert_eq!(res.time_cost, 0.0);
}

proptest! {
    #[test]
    fn better_parts_never_cost_less(quality in 1u8..5, skill in 1u8..=5, tv in 0.0f64..200.0) {
        let lo = estimate(quality, skill, tv);
        let hi = estimate(quality + 1, skill, tv);
        prop_assert!(hi.component_cost >= lo.component_cost);
        prop_assert!(hi.extras_cost >= lo.extras_cost);
    }

    #[test]
    fn more_skill_never_costs_more(quality in 1u8..=5, skill in 1u8..5, tv in 0.0f64..200.0) {
        let novice = estimate(quality, skill, tv);
        let expert = estimate(quality, skill + 1, tv);
        prop_assert!(expert.tools_cost <= novice.tools_cost);
        prop_assert!(expert.time_cost <= novice.time_cost);
        prop_assert!(expert.hours_needed <= novice.hours_needed);
    }
}
