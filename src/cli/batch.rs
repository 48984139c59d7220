use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::prompt::clean_path;
use crate::error::{NormError, Result};
use crate::importer::process_directory;
use crate::settings::load_settings;

pub fn run(input_dir: &str, output_dir: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let input_dir = PathBuf::from(clean_path(input_dir));
    if !input_dir.is_dir() {
        return Err(NormError::InvalidPath(input_dir.display().to_string()));
    }
    let output_dir = PathBuf::from(output_dir.map(clean_path).unwrap_or(settings.output_dir.clone()));

    let batch = process_directory(&input_dir, &output_dir, &settings)?;
    if batch.files.is_empty() {
        println!("No .csv files found in {}", input_dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["File", "Layout", "Written", "Failed rows", "Result"]);
    for file in &batch.files {
        let name = file
            .input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match &file.result {
            Ok(r) => table.add_row(vec![
                Cell::new(name),
                Cell::new(r.format.name()),
                Cell::new(r.written),
                Cell::new(r.failed),
                Cell::new(
                    r.output
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(nothing written)".to_string()),
                ),
            ]),
            Err(e) => table.add_row(vec![
                Cell::new(name),
                Cell::new("-"),
                Cell::new(0),
                Cell::new("-"),
                Cell::new(e.to_string().red()),
            ]),
        };
    }
    println!("{table}");
    println!(
        "{} files processed, {} written, {} failed",
        batch.files.len(),
        batch.written(),
        batch.failed()
    );
    Ok(())
}
