use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classifier::{classify_row, RowOutcome};
use crate::context::ContextTracker;
use crate::detect::{detect_format, FormatKind};
use crate::error::{NormError, Result};
use crate::models::{RawRow, TransactionRecord};
use crate::settings::Settings;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Cell contents read as "no value", the same set spreadsheet exports use.
const MISSING_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "NULL", "null", "None", "#N/A", "<NA>",
];

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

fn to_cell(field: &str) -> Option<String> {
    if field.is_empty() || MISSING_MARKERS.contains(&field) {
        None
    } else {
        Some(field.to_string())
    }
}

/// Parse a headerless CSV table. Ragged rows are padded to the widest row.
pub fn parse_table<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(RawRow::new(record.iter().map(to_cell).collect()));
    }
    let width = rows.iter().map(RawRow::len).max().unwrap_or(0);
    for row in &mut rows {
        row.pad_to(width);
    }
    Ok(rows)
}

pub fn read_table(file_path: &Path) -> Result<Vec<RawRow>> {
    let data = std::fs::read(file_path)?;
    let body = data.strip_prefix(UTF8_BOM).unwrap_or(&data[..]);
    parse_table(body)
}

// ---------------------------------------------------------------------------
// Assembling
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct Assembly {
    pub records: Vec<TransactionRecord>,
    pub extracted: usize,
    pub failed: usize,
    pub dropped_undated: usize,
}

/// Run every row through the classifier in order and keep the dated records.
pub fn assemble(rows: &[RawRow], format: FormatKind) -> Assembly {
    let mut ctx = ContextTracker::new();
    let mut assembly = Assembly::default();
    let mut records = Vec::new();

    for row in rows {
        match classify_row(format, &mut ctx, row) {
            RowOutcome::Record(record) => records.push(record),
            RowOutcome::Banner(banner) => log::debug!("Context change: {banner:?}"),
            RowOutcome::Skipped(reason) => log::trace!("Skipped row ({reason:?}): {:?}", row.cells()),
            RowOutcome::Failed(e) => {
                log::warn!("Error processing row: {:?}: {e}", row.cells());
                assembly.failed += 1;
            }
        }
    }

    assembly.extracted = records.len();
    for record in records {
        if record.date.is_some() {
            assembly.records.push(record);
        } else {
            log::debug!("Dropping undated record: {}", record.description);
            assembly.dropped_undated += 1;
        }
    }
    assembly
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Transaction Description")]
    description: &'a str,
    #[serde(rename = "Debit")]
    debit: f64,
    #[serde(rename = "Credit")]
    credit: f64,
    #[serde(rename = "Currency")]
    currency: &'a str,
    #[serde(rename = "CardName")]
    card_name: &'a str,
    #[serde(rename = "Transaction")]
    section: &'a str,
    #[serde(rename = "Location")]
    location: &'a str,
}

impl<'a> From<&'a TransactionRecord> for OutputRow<'a> {
    fn from(r: &'a TransactionRecord) -> Self {
        Self {
            date: r
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            description: &r.description,
            debit: r.debit,
            credit: r.credit,
            currency: &r.currency,
            card_name: r.card_holder.label(),
            section: r.section.label(),
            location: &r.location,
        }
    }
}

pub fn write_table(file_path: &Path, records: &[TransactionRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(file_path)?;
    for record in records {
        wtr.serialize(OutputRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// standardize_statement
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ImportResult {
    pub format: FormatKind,
    pub rows_read: usize,
    pub extracted: usize,
    pub failed: usize,
    pub dropped_undated: usize,
    pub written: usize,
    pub total_debit: f64,
    pub total_credit: f64,
    /// `None` when no record survived and nothing was written.
    pub output: Option<PathBuf>,
}

/// Whether writing `output_file` would replace `input_file` itself.
fn overwrites_input(input_file: &Path, output_file: &Path) -> bool {
    if !output_file.exists() {
        return false;
    }
    match (input_file.canonicalize(), output_file.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input_file == output_file,
    }
}

/// Normalize one statement file into `output_file`.
///
/// A file that yields no dated records leaves `output_file` untouched.
/// An output path that resolves to the input file is refused.
pub fn standardize_statement(
    input_file: &Path,
    output_file: &Path,
    forced: Option<FormatKind>,
) -> Result<ImportResult> {
    if overwrites_input(input_file, output_file) {
        return Err(NormError::InvalidPath(format!(
            "output would overwrite input: {}",
            input_file.display()
        )));
    }
    let rows = read_table(input_file)?;

    let format = match forced {
        Some(f) => f,
        None if rows.is_empty() => FormatKind::Unknown,
        None => detect_format(&rows),
    };
    if format == FormatKind::Unknown && !rows.is_empty() {
        return Err(NormError::UnknownFormat(input_file.display().to_string()));
    }
    log::info!("Detected {} layout in {}", format.name(), input_file.display());

    let assembly = assemble(&rows, format);
    let written = assembly.records.len();
    let total_debit: f64 = assembly.records.iter().map(|r| r.debit).sum();
    let total_credit: f64 = assembly.records.iter().map(|r| r.credit).sum();

    let output = if written > 0 {
        write_table(output_file, &assembly.records)?;
        log::info!("Wrote {written} transactions to {}", output_file.display());
        Some(output_file.to_path_buf())
    } else {
        log::info!("No transactions found in {}", input_file.display());
        None
    };

    Ok(ImportResult {
        format,
        rows_read: rows.len(),
        extracted: assembly.extracted,
        failed: assembly.failed,
        dropped_undated: assembly.dropped_undated,
        written,
        total_debit,
        total_credit,
        output,
    })
}

// ---------------------------------------------------------------------------
// Directory glue
// ---------------------------------------------------------------------------

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        log::info!("Created output directory: {}", dir.display());
    }
    Ok(())
}

/// Files directly inside `dir` whose name ends in ".csv", sorted by name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for `input_file` inside `output_dir`.
pub fn output_path_for(input_file: &Path, output_dir: &Path, settings: &Settings) -> Result<PathBuf> {
    let name = input_file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| NormError::InvalidPath(input_file.display().to_string()))?;
    Ok(output_dir.join(settings.output_file_name(name)))
}

pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<ImportResult>,
}

pub struct BatchResult {
    pub files: Vec<FileOutcome>,
}

impl BatchResult {
    pub fn written(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(&f.result, Ok(r) if r.output.is_some()))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_err()).count()
    }
}

/// Normalize every CSV in `input_dir` into `output_dir`. One file failing
/// never stops the rest; each gets its own context.
pub fn process_directory(input_dir: &Path, output_dir: &Path, settings: &Settings) -> Result<BatchResult> {
    ensure_directory(output_dir)?;
    let mut files = Vec::new();
    for input in list_csv_files(input_dir)? {
        log::info!("Processing file: {}", input.display());
        let result = output_path_for(&input, output_dir, settings)
            .and_then(|output| standardize_statement(&input, &output, None));
        if let Err(e) = &result {
            log::warn!("Skipping {}: {e}", input.display());
        }
        files.push(FileOutcome { input, result });
    }
    Ok(BatchResult { files })
}
