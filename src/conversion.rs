use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::registry;

/// 결과를 반올림할 소수점 자릿수.
pub const DECIMAL_PLACES: i32 = 4;

/// 변환 요청에 필요한 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    FromUnit,
    ToUnit,
    Value,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Category => "category",
            Field::FromUnit => "from unit",
            Field::ToUnit => "to unit",
            Field::Value => "value",
        };
        f.write_str(name)
    }
}

/// 단위 변환 시 발생 가능한 오류. 모두 호출자가 복구할 수 있다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 필수 입력이 비어 있음
    #[error("missing required field: {0}")]
    MissingField(Field),
    /// 분류 안에 해당 이름의 단위가 등록되어 있지 않음
    #[error("no unit `{unit}` registered in category `{category}`")]
    LookupFailure { category: String, unit: String },
}

/// 변환 방향 해석 방식.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    /// 입력 단위와 목표 단위의 변환식을 차례로 그대로 적용한다.
    #[default]
    Literal,
    /// 입력 단위 변환식의 역함수로 기준 단위 값을 구한 뒤 목표 단위로 환산한다.
    Physical,
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConversionMode::Literal => "literal",
            ConversionMode::Physical => "physical",
        };
        f.write_str(name)
    }
}

/// 한 번의 변환 요청. 비어 있는 항목은 `None` 또는 빈 문자열로 표현된다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionRequest {
    pub category: Option<String>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
    pub value: Option<f64>,
}

impl ConversionRequest {
    pub fn new(category: &str, from_unit: &str, to_unit: &str, value: f64) -> Self {
        Self {
            category: Some(category.to_string()),
            from_unit: Some(from_unit.to_string()),
            to_unit: Some(to_unit.to_string()),
            value: Some(value),
        }
    }

    /// 필수 항목을 확인한 뒤 변환을 수행한다.
    pub fn execute(&self, mode: ConversionMode) -> Result<ConversionResult, ConversionError> {
        let category = required(self.category.as_deref(), Field::Category)?;
        let from_unit = required(self.from_unit.as_deref(), Field::FromUnit)?;
        let to_unit = required(self.to_unit.as_deref(), Field::ToUnit)?;
        let value = self
            .value
            .filter(|v| v.is_finite())
            .ok_or(ConversionError::MissingField(Field::Value))?;
        let converted = convert_with_mode(mode, category, from_unit, to_unit, value)?;
        Ok(ConversionResult {
            value: converted,
            unit: to_unit.to_string(),
        })
    }
}

fn required(field: Option<&str>, name: Field) -> Result<&str, ConversionError> {
    match field {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ConversionError::MissingField(name)),
    }
}

/// 반올림된 변환 값과 표시용 목표 단위.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: String,
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// 소수점 4자리로 반올림한다. 음의 0은 0으로 정규화한다.
pub fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// 분류/단위 이름으로 값을 변환한다 (`ConversionMode::Literal`).
///
/// 입력 단위의 변환식을 값에 적용해 중간값을 얻고, 목표 단위의 변환식을 중간값에
/// 적용한 뒤 소수점 4자리로 반올림한다.
pub fn convert(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    convert_with_mode(ConversionMode::Literal, category, from_unit, to_unit, value)
}

/// 요청의 필수 항목을 확인한 뒤 `ConversionMode::Literal`로 변환한다.
pub fn convert_request(req: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
    req.execute(ConversionMode::Literal)
}

/// 지정한 해석 방식으로 값을 변환한다.
pub fn convert_with_mode(
    mode: ConversionMode,
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let lookup = |unit: &str| {
        registry()
            .function(category, unit)
            .ok_or_else(|| ConversionError::LookupFailure {
                category: category.to_string(),
                unit: unit.to_string(),
            })
    };
    let from = lookup(from_unit)?;
    let to = lookup(to_unit)?;

    let intermediate = match mode {
        ConversionMode::Literal => from.from_base(value),
        ConversionMode::Physical => from.to_base(value),
    };
    let result = round_result(to.from_base(intermediate));
    debug!("{category}: {value} {from_unit} -> {result} {to_unit} ({mode})");
    Ok(result)
}
