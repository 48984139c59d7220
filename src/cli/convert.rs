use std::path::PathBuf;

use colored::Colorize;

use crate::cli::prompt::{ask_path, check_path, clean_path};
use crate::detect::get_by_key;
use crate::error::{NormError, Result};
use crate::fmt::amount;
use crate::importer::{ensure_directory, output_path_for, standardize_statement, ImportResult};
use crate::settings::load_settings;

pub fn run(file: Option<&str>, output_dir: Option<&str>, format: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let forced = format
        .map(|key| get_by_key(key).ok_or_else(|| NormError::UnknownFormatKey(key.to_string())))
        .transpose()?;

    let file = match file {
        Some(f) => clean_path(f),
        None => ask_path("Enter the path to input CSV file", true)?,
    };
    if check_path(&file, true).is_some() {
        return Err(NormError::InvalidPath(file));
    }
    let input = PathBuf::from(&file);

    let output_dir = PathBuf::from(output_dir.map(clean_path).unwrap_or(settings.output_dir.clone()));
    ensure_directory(&output_dir)?;
    let output = output_path_for(&input, &output_dir, &settings)?;

    println!("Processing file: {}", input.display());
    let result = standardize_statement(&input, &output, forced)?;
    print_summary(&result);
    Ok(())
}

pub fn print_summary(result: &ImportResult) {
    println!("Layout:      {}", result.format.name());
    println!(
        "Rows:        {} read, {} extracted, {} failed, {} without a date",
        result.rows_read, result.extracted, result.failed, result.dropped_undated
    );
    match &result.output {
        Some(path) => {
            println!("Debits:      {}", amount(result.total_debit));
            println!("Credits:     {}", amount(result.total_credit));
            println!(
                "{}",
                format!(
                    "Standardized data written to: {} ({} transactions)",
                    path.display(),
                    result.written
                )
                .green()
            );
        }
        None => println!("{}", "No transactions found; nothing written.".yellow()),
    }
}
