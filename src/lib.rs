//! 단위 변환 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면에서도 재사용한다.

pub mod app;
pub mod category;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod form;
pub mod registry;
pub mod ui_cli;
pub mod units;

pub use category::UnitCategory;
pub use conversion::{
    convert, convert_request, convert_with_mode, ConversionError, ConversionMode,
    ConversionRequest, ConversionResult, Field,
};
pub use registry::registry;
pub use units::Unit;
