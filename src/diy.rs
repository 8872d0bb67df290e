//! 제품 대신 직접 조립(DIY)할 때의 비용 추정.

use log::debug;
use serde::Serialize;

use crate::catalog::{DiyFeature, Pricing};
use crate::error::{ensure_non_negative, CalcError};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// 케이블 타이, 퓨즈 등 잡자재 기본 비용 [$]
const EXTRAS_BASE: f64 = 40.0;
const EXTRAS_PER_QUALITY_LEVEL: f64 = 15.0;
/// 공구 구입비 [$]. 숙련도가 높을수록 이미 가진 공구가 많다.
const TOOLS_BASE: f64 = 220.0;
const TOOLS_DISCOUNT_PER_SKILL_LEVEL: f64 = 45.0;
/// 보통 숙련도 기준 조립 시간 [h]
const BASE_HOURS: f64 = 30.0;

/// DIY 비용 추정 입력.
#[derive(Debug, Clone, Serialize)]
pub struct DiyInput {
    /// 부품 품질 수준(1~5)
    pub quality_level: u8,
    /// 작업자 숙련도(1~5)
    pub skill_level: u8,
    /// 본인 시간 가치 [$/h]
    pub time_value_per_hour: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCost {
    pub name: &'static str,
    pub cost: f64,
}

/// DIY 비용 추정 결과.
#[derive(Debug, Clone, Serialize)]
pub struct DiyCostResult {
    pub features: Vec<FeatureCost>,
    pub component_cost: f64,
    pub extras_cost: f64,
    pub tools_cost: f64,
    pub hours_needed: f64,
    pub time_cost: f64,
    pub total_cost: f64,
    pub product_price: f64,
    /// 양수면 DIY가 제품보다 비싸다.
    pub difference_vs_product: f64,
}

fn check_level(level: u8, msg: &'static str) -> Result<f64, CalcError> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(f64::from(level))
    } else {
        Err(CalcError::InvalidInput(msg))
    }
}

/// 품질 수준으로 부품 단가를 선형 보간하고 공구/시간 비용을 더한다.
pub fn compute_diy_cost(
    input: &DiyInput,
    features: &[DiyFeature],
    pricing: &Pricing,
) -> Result<DiyCostResult, CalcError> {
    let quality = check_level(input.quality_level, "품질 수준은 1~5 사이여야 합니다.")?;
    let skill = check_level(input.skill_level, "숙련도는 1~5 사이여야 합니다.")?;
    let time_value = ensure_non_negative(
        input.time_value_per_hour,
        "시간 가치는 0 이상이어야 합니다.",
    )?;

    let t = (quality - 1.0) / 4.0;
    let mut breakdown = Vec::new();
    let mut difficulty_sum = 0.0;
    for feature in features {
        let Some(range) = feature.diy_cost else {
            continue;
        };
        breakdown.push(FeatureCost {
            name: feature.name,
            cost: range.min + (range.max - range.min) * t,
        });
        difficulty_sum += feature.difficulty;
    }
    let avg_difficulty = if breakdown.is_empty() {
        0.0
    } else {
        difficulty_sum / breakdown.len() as f64
    };

    let component_cost: f64 = breakdown.iter().map(|f| f.cost).sum();
    let extras_cost = EXTRAS_BASE + quality * EXTRAS_PER_QUALITY_LEVEL;
    let tools_cost = (TOOLS_BASE - skill * TOOLS_DISCOUNT_PER_SKILL_LEVEL).max(0.0);
    let hours_needed = BASE_HOURS * avg_difficulty * (6.0 - skill) / 3.0;
    let time_cost = hours_needed * time_value;
    let total_cost = component_cost + extras_cost + tools_cost + time_cost;
    debug!("diy: components={component_cost} hours={hours_needed} total={total_cost}");

    Ok(DiyCostResult {
        features: breakdown,
        component_cost,
        extras_cost,
        tools_cost,
        hours_needed,
        time_cost,
        total_cost,
        product_price: pricing.product_price,
        difference_vs_product: total_cost - pricing.product_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn input(quality_level: u8, skill_level: u8) -> DiyInput {
        DiyInput {
            quality_level,
            skill_level,
            time_value_per_hour: 25.0,
        }
    }

    #[test]
    fn level_bounds_use_range_ends() {
        let cat = Catalog::default();
        let low = compute_diy_cost(&input(1, 3), &cat.diy_features, &Pricing::default()).unwrap();
        let high = compute_diy_cost(&input(5, 3), &cat.diy_features, &Pricing::default()).unwrap();
        let mins: f64 = cat.diy_features.iter().filter_map(|f| f.diy_cost).map(|r| r.min).sum();
        let maxs: f64 = cat.diy_features.iter().filter_map(|f| f.diy_cost).map(|r| r.max).sum();
        assert!((low.component_cost - mins).abs() < 1e-9);
        assert!((high.component_cost - maxs).abs() < 1e-9);
    }

    #[test]
    fn expert_buys_no_new_tools() {
        let cat = Catalog::default();
        let res = compute_diy_cost(&input(3, 5), &cat.diy_features, &Pricing::default()).unwrap();
        assert_eq!(res.tools_cost, 0.0);
    }

    #[test]
    fn non_diy_features_are_skipped() {
        let cat = Catalog::default();
        let res = compute_diy_cost(&input(3, 3), &cat.diy_features, &Pricing::default()).unwrap();
        assert!(res.features.iter().all(|f| f.name != "Two-year warranty"));
        assert_eq!(res.features.len(), 7);
    }

    #[test]
    fn no_diy_features_means_no_time_spent() {
        let res = compute_diy_cost(&input(3, 1), &[], &Pricing::default()).unwrap();
        assert_eq!(res.component_cost, 0.0);
        assert_eq!(res.hours_needed, 0.0);
    }

    #[test]
    fn rejects_out_of_range_levels() {
        let cat = Catalog::default();
        assert!(compute_diy_cost(&input(0, 3), &cat.diy_features, &Pricing::default()).is_err());
        assert!(compute_diy_cost(&input(3, 6), &cat.diy_features, &Pricing::default()).is_err());
    }
}
