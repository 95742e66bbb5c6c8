use std::io::Cursor;
use std::path::PathBuf;

use unit_converter::app::{self, AppError};
use unit_converter::cli::Command;
use unit_converter::config::{self, Config};
use unit_converter::{ConversionMode, UnitCategory};

fn run(command: Command, cfg: &Config, script: &str) -> Result<String, AppError> {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    app::execute(command, cfg, &mut input, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

fn temp_config_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "unit_converter_{}_{name}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn convert_command_prints_result() {
    let out = run(
        Command::Convert {
            category: "temperature".into(),
            from: "celsius".into(),
            to: "fahrenheit".into(),
            value: 100.0,
        },
        &Config::default(),
        "",
    )
    .expect("convert");
    assert_eq!(out, "Result: 212 fahrenheit\n");
}

#[test]
fn convert_command_honors_physical_mode() {
    let cfg = Config {
        mode: ConversionMode::Physical,
        ..Config::default()
    };
    let out = run(
        Command::Convert {
            category: "weight".into(),
            from: "gram".into(),
            to: "kilogram".into(),
            value: 2500.0,
        },
        &cfg,
        "",
    )
    .expect("convert");
    assert_eq!(out, "Result: 2.5 kilogram\n");
}

#[test]
fn convert_command_rejects_foreign_unit() {
    let err = run(
        Command::Convert {
            category: "volume".into(),
            from: "meter".into(),
            to: "liter".into(),
            value: 1.0,
        },
        &Config::default(),
        "",
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Conversion(_)), "{err}");
}

#[test]
fn list_command_prints_units_in_order() {
    let out = run(
        Command::List {
            category: Some("weight".into()),
        },
        &Config::default(),
        "",
    )
    .expect("list");
    assert_eq!(out, "Weight: kilogram, gram, pound, ounce\n");

    let err = run(
        Command::List {
            category: Some("speed".into()),
        },
        &Config::default(),
        "",
    )
    .unwrap_err();
    assert!(matches!(err, AppError::UnknownCategory(_)));
}

#[test]
fn interactive_starts_in_configured_category() {
    let cfg = Config {
        default_category: UnitCategory::Volume,
        show_units_on_start: false,
        ..Config::default()
    };
    let out = run(Command::Interactive, &cfg, "2\nliter\n3\n2\n4\n1.5\n5\n0\n").expect("form");
    assert!(out.contains("Type: Volume"));
    assert!(out.contains("Result: 1500 milliliter"));
    assert!(!out.contains("Length: meter"));
}

#[test]
fn missing_config_is_created_with_defaults() {
    let path = temp_config_path("defaults");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let saved = Config {
        default_category: UnitCategory::Temperature,
        mode: ConversionMode::Physical,
        show_units_on_start: false,
    };
    saved.save(&path).expect("save");
    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, saved);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_config_is_parse_error() {
    let path = temp_config_path("malformed");
    std::fs::write(&path, "mode = 3").expect("write");
    let err = config::load_or_default(&path).unwrap_err();
    assert!(matches!(err, config::ConfigError::Parse(_)), "{err}");
    let _ = std::fs::remove_file(&path);
}
