use std::path::Path;

use colored::Colorize;
use dialoguer::Input;

use crate::error::{NormError, Result};

/// Trim whitespace and the quotes a pasted path often carries.
pub fn clean_path(raw: &str) -> String {
    raw.trim().trim_matches(|c: char| c == '"' || c == '\'').to_string()
}

/// Why a typed path cannot be used, if it cannot.
pub fn check_path(path: &str, must_exist: bool) -> Option<String> {
    if path.is_empty() {
        return Some("Path cannot be empty. Please try again.".to_string());
    }
    if must_exist && !Path::new(path).exists() {
        return Some(format!("Path does not exist: {path}\nPlease enter a valid path."));
    }
    None
}

/// A failed terminal read is an I/O failure, not a bad path.
fn terminal_error(e: dialoguer::Error) -> NormError {
    match e {
        dialoguer::Error::IO(io) => NormError::Io(io),
    }
}

/// Ask for a path until a usable one is entered.
pub fn ask_path(prompt: &str, must_exist: bool) -> Result<String> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(terminal_error)?;
        let path = clean_path(&raw);
        match check_path(&path, must_exist) {
            Some(problem) => println!("{}", problem.red()),
            None => return Ok(path),
        }
    }
}
