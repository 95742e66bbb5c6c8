use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Mile,
    Inch,
    Foot,
}

impl LengthUnit {
    /// 화면 표시 순서대로 나열한 전체 단위.
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Mile,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meter",
            LengthUnit::Kilometer => "kilometer",
            LengthUnit::Centimeter => "centimeter",
            LengthUnit::Mile => "mile",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "foot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.name() == name)
    }
}

/// 미터 값을 지정한 단위로 환산한다.
pub fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Kilometer => value_m / 1000.0,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Mile => value_m * 0.000621371,
        LengthUnit::Inch => value_m * 39.3701,
        LengthUnit::Foot => value_m * 3.28084,
    }
}

/// `from_meter`의 역함수.
pub fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Kilometer => value * 1000.0,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Mile => value / 0.000621371,
        LengthUnit::Inch => value / 39.3701,
        LengthUnit::Foot => value / 3.28084,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for unit in LengthUnit::ALL {
            assert_eq!(LengthUnit::from_name(unit.name()), Some(unit));
        }
        assert_eq!(LengthUnit::from_name("yard"), None);
    }

    #[test]
    fn kilometer_to_foot_through_meter() {
        let m = to_meter(1.0, LengthUnit::Kilometer);
        assert!((from_meter(m, LengthUnit::Foot) - 3280.84).abs() < 1e-9);
    }
}
