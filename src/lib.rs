#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod symbol_table;

/// A byte offset into a source file, together with the file name.
///
/// Positions are attributed to tree nodes by the external parser; the
/// core only carries them through into diagnostics. `Position::null()`
/// stands in when no source location exists (e.g. runtime I/O errors).
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

pub fn get_line_at_position(file: PathBuf, position: u32) -> (usize, String, usize) {
    let content = fs::read_to_string(&file).unwrap();
    let pos = position as usize;

    if pos >= content.len() {
        panic!("Position exceeds file length");
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing position");
}

/// Renders a fatal error against its source file as a caret report:
///
/// ```text
/// Error: TypeMatchError (Expected type `Integer`, received `Float`)
/// -> program.tl
///    |
///  3 | y := x + 1.5;
///    | -----^
/// ```
///
/// The external driver owns the source file; the core only knows the
/// offset recorded at construction time.
pub fn format_error(error: &Error, file: PathBuf) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(file.clone(), position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    report.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos - removed_whitespace + 1;

    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    report
}

pub fn display_error(error: &Error, file: PathBuf) {
    print!("{}", format_error(error, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
