//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod temperature;
pub mod volume;
pub mod weight;

pub use length::LengthUnit;
pub use temperature::TemperatureUnit;
pub use volume::VolumeUnit;
pub use weight::WeightUnit;

use crate::category::UnitCategory;

/// 분류에 관계없이 단위 하나를 가리키는 태그.
///
/// 각 분류의 변환식은 기준 단위 값 → 해당 단위 값 방향(`from_base`)으로 정의되며,
/// `to_base`는 그 역함수이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Temperature(TemperatureUnit),
    Volume(VolumeUnit),
}

impl Unit {
    pub fn name(self) -> &'static str {
        match self {
            Unit::Length(u) => u.name(),
            Unit::Weight(u) => u.name(),
            Unit::Temperature(u) => u.name(),
            Unit::Volume(u) => u.name(),
        }
    }

    pub fn category(self) -> UnitCategory {
        match self {
            Unit::Length(_) => UnitCategory::Length,
            Unit::Weight(_) => UnitCategory::Weight,
            Unit::Temperature(_) => UnitCategory::Temperature,
            Unit::Volume(_) => UnitCategory::Volume,
        }
    }

    /// 분류 안에서 이름으로 단위를 찾는다. 다른 분류의 단위는 `None`.
    pub fn parse(category: UnitCategory, name: &str) -> Option<Self> {
        match category {
            UnitCategory::Length => LengthUnit::from_name(name).map(Unit::Length),
            UnitCategory::Weight => WeightUnit::from_name(name).map(Unit::Weight),
            UnitCategory::Temperature => TemperatureUnit::from_name(name).map(Unit::Temperature),
            UnitCategory::Volume => VolumeUnit::from_name(name).map(Unit::Volume),
        }
    }

    /// 기준 단위 값을 이 단위 값으로 환산한다.
    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Unit::Length(u) => length::from_meter(value, u),
            Unit::Weight(u) => weight::from_kg(value, u),
            Unit::Temperature(u) => temperature::from_celsius(value, u),
            Unit::Volume(u) => volume::from_liter(value, u),
        }
    }

    /// 이 단위 값을 기준 단위 값으로 환산한다.
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Unit::Length(u) => length::to_meter(value, u),
            Unit::Weight(u) => weight::to_kg(value, u),
            Unit::Temperature(u) => temperature::to_celsius(value, u),
            Unit::Volume(u) => volume::to_liter(value, u),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_units_of_other_categories() {
        assert_eq!(
            Unit::parse(UnitCategory::Weight, "pound"),
            Some(Unit::Weight(WeightUnit::Pound))
        );
        assert_eq!(Unit::parse(UnitCategory::Weight, "meter"), None);
        assert_eq!(Unit::parse(UnitCategory::Length, "Meter"), None);
    }

    #[test]
    fn to_base_inverts_from_base() {
        for category in UnitCategory::ALL {
            for unit in category.units() {
                let back = unit.to_base(unit.from_base(12.5));
                assert!((back - 12.5).abs() < 1e-9, "{unit}: {back}");
            }
        }
    }
}
