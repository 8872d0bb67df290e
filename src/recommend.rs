//! 사용 기기/장소/기간으로 필요한 배터리 용량과 제품 등급을 추천한다.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Catalog, DeviceId, DurationId, LocationId, ProductTier};
use crate::error::CalcError;

/// 배터리 공칭 전압 [V]
pub const NOMINAL_VOLTAGE: f64 = 12.0;

const MEDIUM_THRESHOLD_MAH: f64 = 20_000.0;
const HIGH_THRESHOLD_MAH: f64 = 40_000.0;
const MAXIMUM_THRESHOLD_MAH: f64 = 80_000.0;

/// 필요 전력 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerTier {
    Standard,
    Medium,
    High,
    Maximum,
}

impl PowerTier {
    pub fn from_mah(mah: f64) -> Self {
        if mah >= MAXIMUM_THRESHOLD_MAH {
            PowerTier::Maximum
        } else if mah >= HIGH_THRESHOLD_MAH {
            PowerTier::High
        } else if mah >= MEDIUM_THRESHOLD_MAH {
            PowerTier::Medium
        } else {
            PowerTier::Standard
        }
    }
}

/// 추천 결과에 붙는 추가 액세서리.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Addon {
    ExtraBatteryModule,
    SolarPanel,
    CellularHotspot,
    ErgonomicWorkspaceKit,
    WeatherproofCover,
}

impl Addon {
    pub fn display_name(self) -> &'static str {
        match self {
            Addon::ExtraBatteryModule => "Extra battery module",
            Addon::SolarPanel => "Foldable solar panel",
            Addon::CellularHotspot => "Cellular hotspot module",
            Addon::ErgonomicWorkspaceKit => "Ergonomic workspace kit",
            Addon::WeatherproofCover => "Weatherproof cover",
        }
    }
}

/// 추천기 입력.
#[derive(Debug, Clone, Serialize)]
pub struct UseCaseInput {
    pub devices: BTreeSet<DeviceId>,
    pub location: LocationId,
    pub duration: DurationId,
}

/// 추천 결과.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub watt_hours_per_day: f64,
    pub daily_mah: f64,
    pub battery_needed_mah: f64,
    pub power_tier: PowerTier,
    pub connectivity_needed: bool,
    pub workspace_needed: bool,
    pub tier: ProductTier,
    pub addons: Vec<Addon>,
}

/// 선택한 기기의 일일 소비전력을 mAh로 환산하고 규칙에 따라 등급을 고른다.
pub fn recommend(input: &UseCaseInput, catalog: &Catalog) -> Result<Recommendation, CalcError> {
    let location = catalog
        .location(input.location)
        .ok_or_else(|| CalcError::UnknownId {
            kind: "location",
            id: input.location.to_string(),
        })?;
    let duration = catalog
        .duration(input.duration)
        .ok_or_else(|| CalcError::UnknownId {
            kind: "duration",
            id: input.duration.to_string(),
        })?;

    let mut watt_hours_per_day = 0.0;
    let mut workspace_needed = false;
    for id in &input.devices {
        let device = catalog.device(*id).ok_or_else(|| CalcError::UnknownId {
            kind: "device",
            id: id.to_string(),
        })?;
        watt_hours_per_day += device.watt_hours_per_day();
        workspace_needed |= device.needs_workspace;
    }

    let daily_mah = watt_hours_per_day * 1000.0 / NOMINAL_VOLTAGE;
    let battery_needed_mah = daily_mah * f64::from(duration.days);
    let power_tier = PowerTier::from_mah(battery_needed_mah);
    let connectivity_needed =
        !location.has_internet || input.devices.contains(&DeviceId::WifiRouter);

    let tier = if power_tier == PowerTier::Maximum || (!location.has_power && duration.days >= 7) {
        ProductTier::Expedition
    } else if power_tier == PowerTier::High || (workspace_needed && connectivity_needed) {
        ProductTier::Professional
    } else {
        ProductTier::Essential
    };

    let mut addons = Vec::new();
    if power_tier >= PowerTier::High {
        addons.push(Addon::ExtraBatteryModule);
    }
    if !location.has_power && duration.days > 1 {
        addons.push(Addon::SolarPanel);
    }
    if connectivity_needed {
        addons.push(Addon::CellularHotspot);
    }
    if workspace_needed {
        addons.push(Addon::ErgonomicWorkspaceKit);
    }
    if location.exposed {
        addons.push(Addon::WeatherproofCover);
    }
    debug!(
        "recommend: {} device(s) at {} for {} -> {battery_needed_mah:.0} mAh, {tier}",
        input.devices.len(),
        input.location,
        input.duration
    );

    Ok(Recommendation {
        watt_hours_per_day,
        daily_mah,
        battery_needed_mah,
        power_tier,
        connectivity_needed,
        workspace_needed,
        tier,
        addons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(devices: &[DeviceId], location: LocationId, duration: DurationId) -> UseCaseInput {
        UseCaseInput {
            devices: devices.iter().copied().collect(),
            location,
            duration,
        }
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(PowerTier::from_mah(19_999.0), PowerTier::Standard);
        assert_eq!(PowerTier::from_mah(20_000.0), PowerTier::Medium);
        assert_eq!(PowerTier::from_mah(40_000.0), PowerTier::High);
        assert_eq!(PowerTier::from_mah(80_000.0), PowerTier::Maximum);
    }

    #[test]
    fn empty_selection_needs_nothing() {
        let rec = recommend(
            &input(&[], LocationId::Office, DurationId::Day),
            &Catalog::default(),
        )
        .unwrap();
        assert_eq!(rec.battery_needed_mah, 0.0);
        assert_eq!(rec.power_tier, PowerTier::Standard);
        assert_eq!(rec.tier, ProductTier::Essential);
        assert!(rec.addons.is_empty());
    }

    #[test]
    fn router_forces_connectivity_even_with_internet() {
        let rec = recommend(
            &input(&[DeviceId::WifiRouter], LocationId::Office, DurationId::Day),
            &Catalog::default(),
        )
        .unwrap();
        assert!(rec.connectivity_needed);
        assert!(!rec.workspace_needed);
        assert!(rec.addons.contains(&Addon::CellularHotspot));
    }

    #[test]
    fn phone_at_cafe_for_a_day_is_essential() {
        let rec = recommend(
            &input(&[DeviceId::Smartphone], LocationId::Cafe, DurationId::Day),
            &Catalog::default(),
        )
        .unwrap();
        // 10 W × 3 h = 30 Wh → 2,500 mAh
        assert!((rec.battery_needed_mah - 2_500.0).abs() < 1e-6);
        assert_eq!(rec.tier, ProductTier::Essential);
    }

    #[test]
    fn missing_location_in_custom_catalog_is_reported() {
        let mut cat = Catalog::default();
        cat.locations.retain(|l| l.id != LocationId::Vehicle);
        let err = recommend(&input(&[], LocationId::Vehicle, DurationId::Day), &cat).unwrap_err();
        assert!(matches!(err, CalcError::UnknownId { kind: "location", .. }));
    }
}
