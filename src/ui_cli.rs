use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::category::UnitCategory;
use crate::form::ConverterForm;
use crate::registry::registry;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Category,
    FromUnit,
    ToUnit,
    Value,
    Convert,
    Reset,
    Exit,
}

/// 폼 메뉴 루프를 실행한다. 입력이 끝나면(EOF) 종료한다.
pub fn run_form<R: BufRead, W: Write>(
    form: &mut ConverterForm,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    loop {
        match main_menu(form, input, out)? {
            MenuChoice::Category => handle_category(form, input, out)?,
            MenuChoice::FromUnit => {
                if let Some(unit) = read_unit(form, "From unit: ", input, out)? {
                    form.set_from_unit(&unit)?;
                }
            }
            MenuChoice::ToUnit => {
                if let Some(unit) = read_unit(form, "To unit: ", input, out)? {
                    form.set_to_unit(&unit)?;
                }
            }
            MenuChoice::Value => {
                let value = read_f64("Value (empty to clear): ", input, out)?;
                form.set_value(value);
            }
            MenuChoice::Convert => {
                let note = form.submit();
                writeln!(out, "{}", note.message())?;
                if let Some(line) = form.display_result() {
                    writeln!(out, "{line}")?;
                }
            }
            MenuChoice::Reset => {
                form.reset();
                writeln!(out, "Form cleared.")?;
            }
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    form: &ConverterForm,
    input: &mut R,
    out: &mut W,
) -> Result<MenuChoice, AppError> {
    writeln!(out, "\n=== Unit Converter ({}) ===", form.mode())?;
    writeln!(
        out,
        "Type: {} | From: {} | To: {} | Value: {}",
        form.category().label(),
        form.from_unit().unwrap_or("-"),
        form.to_unit().unwrap_or("-"),
        form.value().map_or_else(|| "-".to_string(), |v| v.to_string()),
    )?;
    writeln!(out, "1) Unit type  2) From  3) To  4) Value")?;
    writeln!(out, "5) Convert  6) Reset  0) Exit")?;
    loop {
        let Some(sel) = read_line("Select: ", input, out)? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Category),
            "2" => return Ok(MenuChoice::FromUnit),
            "3" => return Ok(MenuChoice::ToUnit),
            "4" => return Ok(MenuChoice::Value),
            "5" => return Ok(MenuChoice::Convert),
            "6" => return Ok(MenuChoice::Reset),
            "0" => return Ok(MenuChoice::Exit),
            _ => writeln!(out, "Invalid selection, try again.")?,
        }
    }
}

fn handle_category<R: BufRead, W: Write>(
    form: &mut ConverterForm,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let categories: Vec<UnitCategory> = registry().categories().collect();
    for (i, c) in categories.iter().enumerate() {
        writeln!(out, "{}) {}", i + 1, c.label())?;
    }
    let Some(sel) = read_line("Unit type: ", input, out)? else {
        return Ok(());
    };
    let sel = sel.trim();
    let picked = pick(sel, categories.len())
        .map(|i| categories[i])
        .or_else(|| UnitCategory::from_name(&sel.to_lowercase()));
    match picked {
        Some(category) => form.select_category(category),
        None => writeln!(out, "Unsupported unit type: {sel}")?,
    }
    Ok(())
}

/// 현재 분류의 단위 목록을 보여주고 번호 또는 이름으로 선택받는다.
fn read_unit<R: BufRead, W: Write>(
    form: &ConverterForm,
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, AppError> {
    let units = form.units();
    for (i, u) in units.iter().enumerate() {
        writeln!(out, "{}) {u}", i + 1)?;
    }
    loop {
        let Some(sel) = read_line(prompt, input, out)? else {
            return Ok(None);
        };
        let sel = sel.trim();
        if let Some(i) = pick(sel, units.len()) {
            return Ok(Some(units[i].to_string()));
        }
        if units.iter().any(|u| *u == sel) {
            return Ok(Some(sel.to_string()));
        }
        writeln!(out, "Unknown {} unit: {sel}", form.category().name())?;
    }
}

/// 1부터 시작하는 메뉴 번호를 인덱스로 바꾼다.
fn pick(sel: &str, len: usize) -> Option<usize> {
    sel.parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn read_f64<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<f64>, AppError> {
    loop {
        let Some(s) = read_line(prompt, input, out)? else {
            return Ok(None);
        };
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(Some(v)),
            _ => writeln!(out, "Please enter a number.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drive(script: &str) -> (ConverterForm, String) {
        let mut form = ConverterForm::default();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_form(&mut form, &mut input, &mut out).unwrap();
        (form, String::from_utf8(out).unwrap())
    }

    #[test]
    fn converts_through_menu() {
        let (form, out) = drive("2\nmeter\n3\n6\n4\n10\n5\n0\n");
        assert_eq!(form.to_unit(), Some("foot"));
        assert!(out.contains("Conversion successful!"));
        assert!(out.contains("Result: 32.8084 foot"));
        assert!(out.contains("=== Unit Converter (literal) ==="));
    }

    #[test]
    fn missing_fields_are_reported() {
        let (form, out) = drive("5\n0\n");
        assert!(out.contains("All fields are required!"));
        assert!(form.result().is_none());
    }

    #[test]
    fn category_by_name_clears_units() {
        let (form, _) = drive("2\n1\n1\ntemperature\n0\n");
        assert_eq!(form.category(), UnitCategory::Temperature);
        assert_eq!(form.from_unit(), None);
    }

    #[test]
    fn bad_number_reprompts() {
        let (form, out) = drive("4\nabc\n2.5\n0\n");
        assert!(out.contains("Please enter a number."));
        assert_eq!(form.value(), Some(2.5));
    }

    #[test]
    fn eof_exits_loop() {
        let (form, _) = drive("4\n");
        assert_eq!(form.value(), None);
    }
}
