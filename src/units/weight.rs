use serde::{Deserialize, Serialize};

/// 무게(질량) 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 4] = [
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kilogram",
            WeightUnit::Gram => "gram",
            WeightUnit::Pound => "pound",
            WeightUnit::Ounce => "ounce",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.name() == name)
    }
}

pub fn from_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilogram => value,
        WeightUnit::Gram => value * 1000.0,
        WeightUnit::Pound => value * 2.20462,
        WeightUnit::Ounce => value * 35.274,
    }
}

pub fn to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilogram => value,
        WeightUnit::Gram => value / 1000.0,
        WeightUnit::Pound => value / 2.20462,
        WeightUnit::Ounce => value / 35.274,
    }
}
