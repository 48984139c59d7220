use comfy_table::{Cell, Table};

use crate::detect::ALL_FORMATS;
use crate::error::Result;

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Priority", "Key", "Bank", "Columns"]);
    for (i, format) in ALL_FORMATS.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format.key()),
            Cell::new(format.name()),
            Cell::new(format.columns().join(", ")),
        ]);
    }
    println!("Statement layouts\n{table}");
    Ok(())
}
