use serde::{Deserialize, Serialize};

use crate::units::{LengthUnit, TemperatureUnit, Unit, VolumeUnit, WeightUnit};

/// 변환기가 다루는 단위 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    #[default]
    Length,
    Weight,
    Temperature,
    Volume,
}

impl UnitCategory {
    /// 화면 표시 순서.
    pub const ALL: [UnitCategory; 4] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Volume => "volume",
        }
    }

    /// 첫 글자만 대문자로 바꾼 표시용 이름.
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// 분류에 속한 단위를 표시 순서대로 반환한다.
    pub fn units(self) -> Vec<Unit> {
        match self {
            UnitCategory::Length => LengthUnit::ALL.into_iter().map(Unit::Length).collect(),
            UnitCategory::Weight => WeightUnit::ALL.into_iter().map(Unit::Weight).collect(),
            UnitCategory::Temperature => TemperatureUnit::ALL
                .into_iter()
                .map(Unit::Temperature)
                .collect(),
            UnitCategory::Volume => VolumeUnit::ALL.into_iter().map(Unit::Volume).collect(),
        }
    }

    /// 변환의 기준이 되는 단위 (변환식이 항등 함수인 단위).
    pub fn base_unit(self) -> Unit {
        match self {
            UnitCategory::Length => Unit::Length(LengthUnit::Meter),
            UnitCategory::Weight => Unit::Weight(WeightUnit::Kilogram),
            UnitCategory::Temperature => Unit::Temperature(TemperatureUnit::Celsius),
            UnitCategory::Volume => Unit::Volume(VolumeUnit::Liter),
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_capitalizes_first_letter() {
        assert_eq!(UnitCategory::Temperature.label(), "Temperature");
    }

    #[test]
    fn unit_lists_keep_display_order() {
        let names: Vec<_> = UnitCategory::Length
            .units()
            .into_iter()
            .map(Unit::name)
            .collect();
        assert_eq!(
            names,
            ["meter", "kilometer", "centimeter", "mile", "inch", "foot"]
        );
        let names: Vec<_> = UnitCategory::Volume
            .units()
            .into_iter()
            .map(Unit::name)
            .collect();
        assert_eq!(names, ["liter", "milliliter", "gallon", "cubic_meter"]);
    }

    #[test]
    fn base_unit_belongs_to_category() {
        for category in UnitCategory::ALL {
            assert!(category.units().contains(&category.base_unit()));
            assert_eq!(category.base_unit().category(), category);
        }
    }
}
