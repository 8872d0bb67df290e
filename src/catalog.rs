//! 제품 사이트에 하드코딩되어 있던 정적 데이터(가격, 기기 소비전력, 장소/기간 프로필,
//! DIY 부품 단가표, 쇼룸 좌표)를 모아둔다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// 가격 상수. `config.toml`의 `[pricing]`으로 덮어쓸 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    /// 제품 판매가 [$]
    pub product_price: f64,
    /// 카페 음료 1회 단가 [$]
    pub cafe_unit_price: f64,
    /// 보조배터리 교체 비용 [$]
    pub power_bank_price: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            product_price: 850.0,
            cafe_unit_price: 5.0,
            power_bank_price: 150.0,
        }
    }
}

/// 제품 라인업 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductTier {
    Essential,
    Professional,
    Expedition,
}

impl ProductTier {
    pub const ALL: [ProductTier; 3] = [
        ProductTier::Essential,
        ProductTier::Professional,
        ProductTier::Expedition,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ProductTier::Essential => "Essential",
            ProductTier::Professional => "Professional",
            ProductTier::Expedition => "Expedition",
        }
    }

    /// 등급별 정가 [$]. Essential은 기본 제품가와 같다.
    pub fn list_price(self) -> f64 {
        match self {
            ProductTier::Essential => 850.0,
            ProductTier::Professional => 1290.0,
            ProductTier::Expedition => 1890.0,
        }
    }

    pub fn battery_capacity_mah(self) -> u32 {
        match self {
            ProductTier::Essential => 40_000,
            ProductTier::Professional => 80_000,
            ProductTier::Expedition => 160_000,
        }
    }
}

impl fmt::Display for ProductTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 추천기에서 다루는 기기 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceId {
    Laptop,
    Tablet,
    Smartphone,
    Monitor,
    WifiRouter,
    Camera,
    Lighting,
    SpecializedEquipment,
}

impl DeviceId {
    pub const ALL: [DeviceId; 8] = [
        DeviceId::Laptop,
        DeviceId::Tablet,
        DeviceId::Smartphone,
        DeviceId::Monitor,
        DeviceId::WifiRouter,
        DeviceId::Camera,
        DeviceId::Lighting,
        DeviceId::SpecializedEquipment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceId::Laptop => "laptop",
            DeviceId::Tablet => "tablet",
            DeviceId::Smartphone => "smartphone",
            DeviceId::Monitor => "monitor",
            DeviceId::WifiRouter => "wifi-router",
            DeviceId::Camera => "camera",
            DeviceId::Lighting => "lighting",
            DeviceId::SpecializedEquipment => "specialized-equipment",
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        DeviceId::ALL
            .into_iter()
            .find(|d| d.as_str() == key)
            .ok_or_else(|| CalcError::UnknownId {
                kind: "device",
                id: s.to_string(),
            })
    }
}

/// 사용 장소 프로필.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationId {
    Office,
    Home,
    Cafe,
    Vehicle,
    Outdoor,
    Remote,
}

impl LocationId {
    pub const ALL: [LocationId; 6] = [
        LocationId::Office,
        LocationId::Home,
        LocationId::Cafe,
        LocationId::Vehicle,
        LocationId::Outdoor,
        LocationId::Remote,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationId::Office => "office",
            LocationId::Home => "home",
            LocationId::Cafe => "cafe",
            LocationId::Vehicle => "vehicle",
            LocationId::Outdoor => "outdoor",
            LocationId::Remote => "remote",
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        LocationId::ALL
            .into_iter()
            .find(|l| l.as_str() == key)
            .ok_or_else(|| CalcError::UnknownId {
                kind: "location",
                id: s.to_string(),
            })
    }
}

/// 사용 기간 프로필.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationId {
    Day,
    Weekend,
    Week,
    Month,
}

impl DurationId {
    pub const ALL: [DurationId; 4] = [
        DurationId::Day,
        DurationId::Weekend,
        DurationId::Week,
        DurationId::Month,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DurationId::Day => "day",
            DurationId::Weekend => "weekend",
            DurationId::Week => "week",
            DurationId::Month => "month",
        }
    }
}

impl fmt::Display for DurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        DurationId::ALL
            .into_iter()
            .find(|d| d.as_str() == key)
            .ok_or_else(|| CalcError::UnknownId {
                kind: "duration",
                id: s.to_string(),
            })
    }
}

/// 기기별 전력 프로필.
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: &'static str,
    /// 평균 소비전력 [W]
    pub power_watts: f64,
    /// 하루 사용 시간 [h]
    pub daily_usage_hours: f64,
    /// 책상/작업면이 필요한 기기인지
    pub needs_workspace: bool,
}

impl Device {
    pub fn watt_hours_per_day(&self) -> f64 {
        self.power_watts * self.daily_usage_hours
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: &'static str,
    pub has_power: bool,
    pub has_internet: bool,
    /// 비/먼지에 노출되는 장소
    pub exposed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Duration {
    pub id: DurationId,
    pub name: &'static str,
    pub days: u32,
}

/// DIY 부품 단가 범위 [$].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

impl CostRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// 제품 기능과 DIY로 대체할 때의 비용/난이도.
#[derive(Debug, Clone, Serialize)]
pub struct DiyFeature {
    pub name: &'static str,
    /// None이면 DIY로 대체 불가(펌웨어, 보증 등)
    pub diy_cost: Option<CostRange>,
    /// 난이도 계수(1.0 = 보통)
    pub difficulty: f64,
}

/// 쇼룸 위치. 지도 임베드 대신 링크로 보여준다.
#[derive(Debug, Clone, Serialize)]
pub struct Showroom {
    pub label: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Showroom {
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat:.4}&mlon={lon:.4}#map=15/{lat:.4}/{lon:.4}",
            lat = self.latitude,
            lon = self.longitude
        )
    }
}

/// 계산기가 참조하는 정적 데이터 묶음.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub devices: Vec<Device>,
    pub locations: Vec<Location>,
    pub durations: Vec<Duration>,
    pub diy_features: Vec<DiyFeature>,
    pub showroom: Showroom,
}

impl Catalog {
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn duration(&self, id: DurationId) -> Option<&Duration> {
        self.durations.iter().find(|d| d.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            devices: default_devices(),
            locations: default_locations(),
            durations: vec![
                Duration { id: DurationId::Day, name: "Single day", days: 1 },
                Duration { id: DurationId::Weekend, name: "Long weekend", days: 3 },
                Duration { id: DurationId::Week, name: "One week", days: 7 },
                Duration { id: DurationId::Month, name: "One month", days: 30 },
            ],
            diy_features: default_diy_features(),
            showroom: Showroom {
                label: "Workstation Showroom",
                latitude: 52.5200,
                longitude: 13.4050,
            },
        }
    }
}

fn default_devices() -> Vec<Device> {
    let d = |id, name, power_watts, daily_usage_hours, needs_workspace| Device {
        id,
        name,
        power_watts,
        daily_usage_hours,
        needs_workspace,
    };
    vec![
        d(DeviceId::Laptop, "Laptop", 60.0, 8.0, true),
        d(DeviceId::Tablet, "Tablet", 15.0, 6.0, true),
        d(DeviceId::Smartphone, "Smartphone", 10.0, 3.0, false),
        d(DeviceId::Monitor, "Portable monitor", 25.0, 8.0, true),
        d(DeviceId::WifiRouter, "Wi-Fi router", 10.0, 10.0, false),
        d(DeviceId::Camera, "Camera", 8.0, 4.0, false),
        d(DeviceId::Lighting, "LED lighting", 10.0, 5.0, false),
        d(
            DeviceId::SpecializedEquipment,
            "Specialized equipment",
            100.0,
            4.0,
            true,
        ),
    ]
}

fn default_locations() -> Vec<Location> {
    let l = |id, name, has_power, has_internet, exposed| Location {
        id,
        name,
        has_power,
        has_internet,
        exposed,
    };
    vec![
        l(LocationId::Office, "Office", true, true, false),
        l(LocationId::Home, "Home", true, true, false),
        l(LocationId::Cafe, "Cafe / co-working", true, true, false),
        l(LocationId::Vehicle, "Vehicle / van", true, false, false),
        l(LocationId::Outdoor, "Park / outdoor", false, true, true),
        l(LocationId::Remote, "Remote site", false, false, true),
    ]
}

fn default_diy_features() -> Vec<DiyFeature> {
    let f = |name, range: Option<(f64, f64)>, difficulty| DiyFeature {
        name,
        diy_cost: range.map(|(min, max)| CostRange { min, max }),
        difficulty,
    };
    vec![
        f("LiFePO4 battery pack", Some((180.0, 420.0)), 1.4),
        f("Foldable solar panel", Some((90.0, 260.0)), 1.0),
        f("MPPT charge controller", Some((35.0, 140.0)), 1.2),
        f("Pure sine inverter", Some((45.0, 180.0)), 1.1),
        f("Rugged enclosure", Some((60.0, 220.0)), 1.3),
        f("Display mount", Some((25.0, 90.0)), 0.8),
        f("Wiring and connectors", Some((20.0, 70.0)), 0.9),
        f("Battery management firmware", None, 2.0),
        f("Two-year warranty", None, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_from_kebab_case() {
        assert_eq!("wifi-router".parse::<DeviceId>(), Ok(DeviceId::WifiRouter));
        assert_eq!(" Remote ".parse::<LocationId>(), Ok(LocationId::Remote));
        assert_eq!("week".parse::<DurationId>(), Ok(DurationId::Week));
    }

    #[test]
    fn unknown_id_reports_kind() {
        let err = "toaster".parse::<DeviceId>().unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownId {
                kind: "device",
                id: "toaster".into()
            }
        );
    }

    #[test]
    fn default_catalog_covers_every_id() {
        let cat = Catalog::default();
        for id in DeviceId::ALL {
            assert!(cat.device(id).is_some(), "missing device {id}");
        }
        for id in LocationId::ALL {
            assert!(cat.location(id).is_some(), "missing location {id}");
        }
        for id in DurationId::ALL {
            assert!(cat.duration(id).is_some(), "missing duration {id}");
        }
    }

    #[test]
    fn showroom_link_contains_coordinates() {
        let url = Catalog::default().showroom.map_url();
        assert!(url.contains("mlat=52.5200"));
        assert!(url.contains("mlon=13.4050"));
    }
}
