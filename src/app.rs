use std::io::{BufRead, Write};

use log::info;
use thiserror::Error;

use crate::category::UnitCategory;
use crate::cli::{Cli, Command};
use crate::config::{self, Config, ConfigError};
use crate::conversion::{ConversionError, ConversionRequest};
use crate::form::ConverterForm;
use crate::registry::registry;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// 설정을 로드하고 명령행 인자에 따라 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(mode) = cli.mode {
        cfg.mode = mode;
    }
    let command = cli.command.unwrap_or(Command::Interactive);
    info!("running {command:?} in {} mode", cfg.mode);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(command, &cfg, &mut stdin.lock(), &mut stdout.lock())
}

/// 명령 하나를 주어진 입출력으로 실행한다.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    cfg: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Convert {
            category,
            from,
            to,
            value,
        } => {
            let result = ConversionRequest::new(&category, &from, &to, value).execute(cfg.mode)?;
            writeln!(out, "Result: {result}")?;
        }
        Command::List { category } => {
            let categories = match category {
                Some(name) => {
                    vec![UnitCategory::from_name(&name).ok_or(AppError::UnknownCategory(name))?]
                }
                None => registry().categories().collect(),
            };
            for category in categories {
                print_units(out, category)?;
            }
        }
        Command::Interactive => {
            if cfg.show_units_on_start {
                for category in registry().categories() {
                    print_units(out, category)?;
                }
            }
            let mut form = ConverterForm::new(cfg.default_category, cfg.mode);
            ui_cli::run_form(&mut form, input, out)?;
        }
    }
    Ok(())
}

fn print_units<W: Write>(out: &mut W, category: UnitCategory) -> Result<(), AppError> {
    let units = registry()
        .table(category)
        .map(|t| t.units().join(", "))
        .unwrap_or_default();
    writeln!(out, "{}: {units}", category.label())?;
    Ok(())
}
