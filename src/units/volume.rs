use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    Gallon,
    CubicMeter,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 4] = [
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::Gallon,
        VolumeUnit::CubicMeter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "liter",
            VolumeUnit::Milliliter => "milliliter",
            VolumeUnit::Gallon => "gallon",
            VolumeUnit::CubicMeter => "cubic_meter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.name() == name)
    }
}

pub fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_l,
        VolumeUnit::Milliliter => value_l * 1000.0,
        // US liquid gallon
        VolumeUnit::Gallon => value_l * 0.264172,
        VolumeUnit::CubicMeter => value_l / 1000.0,
    }
}

pub fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value / 1000.0,
        VolumeUnit::Gallon => value / 0.264172,
        VolumeUnit::CubicMeter => value * 1000.0,
    }
}
