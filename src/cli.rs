//! 명령행 인자 정의.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::conversion::ConversionMode;

#[derive(Debug, Parser)]
#[command(
    name = "unit_converter",
    version,
    about = "Convert values between units of length, weight, temperature and volume"
)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 설정 파일의 변환 방식을 이번 실행에 한해 덮어쓴다
    #[arg(long, global = true, value_enum)]
    pub mode: Option<ConversionMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// 값 하나를 변환해 출력한다
    Convert {
        category: String,
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// 분류와 단위 목록을 출력한다
    List { category: Option<String> },
    /// 대화형 폼을 실행한다 (기본값)
    Interactive,
}
