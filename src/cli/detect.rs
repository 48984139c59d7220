use std::path::Path;

use comfy_table::{Cell, Table};

use crate::detect::{detect_format, predicate_report, SAMPLE_ROWS};
use crate::error::{NormError, Result};
use crate::importer::read_table;

pub fn run(file: &str) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(NormError::InvalidPath(file.to_string()));
    }
    let rows = read_table(path)?;

    let mut table = Table::new();
    table.set_header(vec!["Layout", "Matches first rows"]);
    for (format, matched) in predicate_report(&rows) {
        table.add_row(vec![
            Cell::new(format.name()),
            Cell::new(if matched { "yes" } else { "no" }),
        ]);
    }
    println!("Checked first {SAMPLE_ROWS} rows\n{table}");
    println!("Detected: {}", detect_format(&rows).name());
    Ok(())
}
