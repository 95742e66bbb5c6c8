//! 변환 입력 폼의 상태 모델. 화면 구성 없이 선택/입력/변환/초기화 흐름만 다룬다.

use log::warn;

use crate::category::UnitCategory;
use crate::conversion::{ConversionError, ConversionMode, ConversionRequest, ConversionResult};
use crate::registry::registry;

pub const MSG_SUCCESS: &str = "Conversion successful!";
pub const MSG_MISSING_FIELDS: &str = "All fields are required!";
pub const MSG_FAILED: &str = "Conversion failed.";

/// 사용자에게 보여줄 알림.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(&'static str),
    Error(&'static str),
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Success(m) | Notification::Error(m) => *m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

/// 변환 폼의 현재 상태.
#[derive(Debug, Clone)]
pub struct ConverterForm {
    default_category: UnitCategory,
    mode: ConversionMode,
    category: UnitCategory,
    from_unit: Option<String>,
    to_unit: Option<String>,
    value: Option<f64>,
    result: Option<ConversionResult>,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new(UnitCategory::default(), ConversionMode::default())
    }
}

impl ConverterForm {
    pub fn new(default_category: UnitCategory, mode: ConversionMode) -> Self {
        Self {
            default_category,
            mode,
            category: default_category,
            from_unit: None,
            to_unit: None,
            value: None,
            result: None,
        }
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn from_unit(&self) -> Option<&str> {
        self.from_unit.as_deref()
    }

    pub fn to_unit(&self) -> Option<&str> {
        self.to_unit.as_deref()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// 현재 분류의 단위 이름 (선택 목록용).
    pub fn units(&self) -> &'static [&'static str] {
        registry()
            .table(self.category)
            .map(|t| t.units())
            .unwrap_or(&[])
    }

    /// 분류를 바꾸면 이전 분류의 단위 선택은 모두 지운다.
    pub fn select_category(&mut self, category: UnitCategory) {
        self.category = category;
        self.from_unit = None;
        self.to_unit = None;
    }

    pub fn set_from_unit(&mut self, unit: &str) -> Result<(), ConversionError> {
        self.check_unit(unit)?;
        self.from_unit = Some(unit.to_string());
        Ok(())
    }

    pub fn set_to_unit(&mut self, unit: &str) -> Result<(), ConversionError> {
        self.check_unit(unit)?;
        self.to_unit = Some(unit.to_string());
        Ok(())
    }

    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value;
    }

    fn check_unit(&self, unit: &str) -> Result<(), ConversionError> {
        let known = registry()
            .table(self.category)
            .is_some_and(|t| t.contains(unit));
        if known {
            Ok(())
        } else {
            Err(ConversionError::LookupFailure {
                category: self.category.name().to_string(),
                unit: unit.to_string(),
            })
        }
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            category: Some(self.category.name().to_string()),
            from_unit: self.from_unit.clone(),
            to_unit: self.to_unit.clone(),
            value: self.value,
        }
    }

    /// 변환을 실행한다. 실패하면 입력과 이전 결과는 그대로 남는다.
    pub fn submit(&mut self) -> Notification {
        match self.request().execute(self.mode) {
            Ok(result) => {
                self.result = Some(result);
                Notification::Success(MSG_SUCCESS)
            }
            Err(err) => {
                warn!("conversion rejected: {err}");
                match err {
                    ConversionError::MissingField(_) => Notification::Error(MSG_MISSING_FIELDS),
                    ConversionError::LookupFailure { .. } => Notification::Error(MSG_FAILED),
                }
            }
        }
    }

    /// 모든 입력을 지우고 기본 분류로 되돌린다.
    pub fn reset(&mut self) {
        self.category = self.default_category;
        self.from_unit = None;
        self.to_unit = None;
        self.value = None;
        self.result = None;
    }

    /// 마지막 변환 결과를 "Result: 값 단위" 형태로 반환한다.
    pub fn display_result(&self) -> Option<String> {
        self.result.as_ref().map(|r| format!("Result: {r}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(category: UnitCategory, from: &str, to: &str, value: f64) -> ConverterForm {
        let mut form = ConverterForm::default();
        form.select_category(category);
        form.set_from_unit(from).unwrap();
        form.set_to_unit(to).unwrap();
        form.set_value(Some(value));
        form
    }

    #[test]
    fn submit_stores_result() {
        let mut form = filled(UnitCategory::Length, "meter", "foot", 10.0);
        let note = form.submit();
        assert_eq!(note, Notification::Success(MSG_SUCCESS));
        assert_eq!(form.display_result().as_deref(), Some("Result: 32.8084 foot"));
    }

    #[test]
    fn category_change_clears_units() {
        let mut form = filled(UnitCategory::Length, "meter", "foot", 10.0);
        form.select_category(UnitCategory::Weight);
        assert_eq!(form.from_unit(), None);
        assert_eq!(form.to_unit(), None);
        assert_eq!(form.value(), Some(10.0));
        assert!(form.set_from_unit("meter").is_err());
        assert_eq!(form.from_unit(), None);
    }

    #[test]
    fn failed_submit_keeps_previous_state() {
        let mut form = filled(UnitCategory::Weight, "kilogram", "gram", 2.0);
        assert!(form.submit().is_success());
        form.set_value(None);
        let note = form.submit();
        assert_eq!(note, Notification::Error(MSG_MISSING_FIELDS));
        assert_eq!(form.result().map(|r| r.value), Some(2000.0));
        assert_eq!(form.from_unit(), Some("kilogram"));
    }

    #[test]
    fn reset_returns_to_default_category() {
        let mut form = ConverterForm::new(UnitCategory::Volume, ConversionMode::Literal);
        form.select_category(UnitCategory::Temperature);
        form.set_from_unit("kelvin").unwrap();
        form.set_value(Some(1.0));
        form.reset();
        assert_eq!(form.category(), UnitCategory::Volume);
        assert_eq!(form.from_unit(), None);
        assert_eq!(form.value(), None);
        assert!(form.result().is_none());
    }

    #[test]
    fn units_follow_selected_category() {
        let mut form = ConverterForm::default();
        assert_eq!(form.units().len(), 6);
        form.select_category(UnitCategory::Temperature);
        assert_eq!(form.units(), ["celsius", "fahrenheit", "kelvin"]);
    }
}
