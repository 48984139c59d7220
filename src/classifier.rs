use chrono::NaiveDate;

use crate::cells::{parse_amount_opt, parse_date, parse_number};
use crate::context::{Banner, ContextTracker};
use crate::detect::FormatKind;
use crate::error::RowError;
use crate::models::{RawRow, TransactionRecord};
use crate::splitter::split_description;

/// Header cells that mark a row as column titles rather than data.
const HEADER_MARKERS: [&str; 3] = ["Transaction Details", "Date", "Amount"];

/// Section and column titles ICICI repeats inside the table body.
const ICICI_NON_TRANSACTION: [&str; 5] = [
    "Domestic Transactions",
    "International Transaction",
    "Date",
    "Debit",
    "Credit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Header,
    NotTransaction,
    EmptyDescription,
    ZeroAmount,
}

/// What became of one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Record(TransactionRecord),
    Banner(Banner),
    Skipped(SkipReason),
    Failed(RowError),
}

/// Semantic fields pulled out of a row before the description is split.
#[derive(Debug, Clone, PartialEq)]
struct Fields {
    date: Option<NaiveDate>,
    description: String,
    debit: f64,
    credit: f64,
}

enum Extraction {
    Fields(Fields),
    Skip(SkipReason),
}

fn text_of(cell: Option<&str>) -> String {
    cell.map(str::trim).unwrap_or_default().to_string()
}

/// Split one signed amount into (debit, credit); positive is a charge.
fn split_signed(amount: f64) -> (f64, f64) {
    if amount > 0.0 {
        (amount, 0.0)
    } else if amount < 0.0 {
        (0.0, amount.abs())
    } else {
        (0.0, 0.0)
    }
}

// ---------------------------------------------------------------------------
// Per-layout accessors
// ---------------------------------------------------------------------------

/// IDFC: description, date, signed amount.
struct IdfcRow<'a>(&'a RawRow);

impl IdfcRow<'_> {
    fn description(&self) -> Result<String, RowError> {
        Ok(text_of(self.0.column(0, "description")?))
    }
    fn date(&self) -> Result<Option<NaiveDate>, RowError> {
        Ok(self.0.column(1, "date")?.and_then(parse_date))
    }
    fn amount(&self) -> Result<f64, RowError> {
        Ok(parse_amount_opt(self.0.column(2, "amount")?))
    }
}

/// HDFC: date, description, signed amount.
struct HdfcRow<'a>(&'a RawRow);

impl HdfcRow<'_> {
    fn date(&self) -> Result<Option<NaiveDate>, RowError> {
        Ok(self.0.column(0, "date")?.and_then(parse_date))
    }
    fn description(&self) -> Result<String, RowError> {
        Ok(text_of(self.0.column(1, "description")?))
    }
    fn amount(&self) -> Result<f64, RowError> {
        Ok(parse_amount_opt(self.0.column(2, "amount")?))
    }
}

/// AXIS: date, debit, credit, description. Amount columns are plain numbers.
struct AxisRow<'a>(&'a RawRow);

impl AxisRow<'_> {
    fn date(&self) -> Result<Option<NaiveDate>, RowError> {
        Ok(self.0.column(0, "date")?.and_then(parse_date))
    }
    fn number(&self, column: usize, field: &'static str) -> Result<f64, RowError> {
        let raw = self.0.column(column, field)?;
        parse_number(raw).ok_or_else(|| RowError::InvalidNumber {
            column,
            value: raw.unwrap_or_default().to_string(),
        })
    }
    fn debit(&self) -> Result<f64, RowError> {
        self.number(1, "debit")
    }
    fn credit(&self) -> Result<f64, RowError> {
        self.number(2, "credit")
    }
    fn description(&self) -> Result<String, RowError> {
        Ok(text_of(self.0.column(3, "description")?))
    }
}

/// ICICI: date, description, debit, credit.
struct IciciRow<'a>(&'a RawRow);

impl IciciRow<'_> {
    fn date_cell(&self) -> Result<Option<&str>, RowError> {
        Ok(self.0.column(0, "date")?.filter(|c| !c.trim().is_empty()))
    }
    fn description(&self) -> Result<String, RowError> {
        Ok(text_of(self.0.column(1, "description")?))
    }
    fn debit(&self) -> Result<f64, RowError> {
        Ok(parse_amount_opt(self.0.column(2, "debit")?))
    }
    fn credit(&self) -> Result<f64, RowError> {
        Ok(parse_amount_opt(self.0.column(3, "credit")?))
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

fn extract_idfc(row: &RawRow) -> Result<Extraction, RowError> {
    let r = IdfcRow(row);
    let date = r.date()?;
    let description = r.description()?;
    let (debit, credit) = split_signed(r.amount()?);
    Ok(Extraction::Fields(Fields {
        date,
        description,
        debit,
        credit,
    }))
}

fn extract_hdfc(row: &RawRow) -> Result<Extraction, RowError> {
    let r = HdfcRow(row);
    let date = r.date()?;
    let description = r.description()?;
    let (debit, credit) = split_signed(r.amount()?);
    Ok(Extraction::Fields(Fields {
        date,
        description,
        debit,
        credit,
    }))
}

fn extract_axis(row: &RawRow) -> Result<Extraction, RowError> {
    let r = AxisRow(row);
    let date = r.date()?;
    let description = r.description()?;
    let debit = r.debit()?;
    let credit = r.credit()?;
    Ok(Extraction::Fields(Fields {
        date,
        description,
        debit,
        credit,
    }))
}

fn extract_icici(row: &RawRow, text: &str) -> Result<Extraction, RowError> {
    if ICICI_NON_TRANSACTION.iter().any(|m| text.contains(m)) {
        return Ok(Extraction::Skip(SkipReason::NotTransaction));
    }
    let r = IciciRow(row);
    let Some(date_cell) = r.date_cell()? else {
        return Ok(Extraction::Skip(SkipReason::NotTransaction));
    };
    let date = parse_date(date_cell);
    let description = r.description()?;
    let debit = r.debit()?;
    let credit = r.credit()?;
    if description.is_empty() {
        return Ok(Extraction::Skip(SkipReason::EmptyDescription));
    }
    if debit == 0.0 && credit == 0.0 {
        return Ok(Extraction::Skip(SkipReason::ZeroAmount));
    }
    Ok(Extraction::Fields(Fields {
        date,
        description,
        debit,
        credit,
    }))
}

/// Classify one row of a table in `format`, updating `ctx` on banner rows.
///
/// Rows must be fed in input order: a transaction takes the section and
/// cardholder of the nearest banner above it.
pub fn classify_row(format: FormatKind, ctx: &mut ContextTracker, row: &RawRow) -> RowOutcome {
    let text = row.text();

    if let Some(banner) = ctx.observe(&text) {
        return RowOutcome::Banner(banner);
    }
    if row.is_blank() {
        return RowOutcome::Skipped(SkipReason::Blank);
    }
    if HEADER_MARKERS.iter().any(|m| text.contains(m)) {
        return RowOutcome::Skipped(SkipReason::Header);
    }

    let extraction = match format {
        FormatKind::Idfc => extract_idfc(row),
        FormatKind::Hdfc => extract_hdfc(row),
        FormatKind::Axis => extract_axis(row),
        FormatKind::Icici => extract_icici(row, &text),
        FormatKind::Unknown => Err(RowError::UnknownLayout),
    };

    let fields = match extraction {
        Ok(Extraction::Fields(fields)) => fields,
        Ok(Extraction::Skip(reason)) => return RowOutcome::Skipped(reason),
        Err(e) => return RowOutcome::Failed(e),
    };

    if fields.description.is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyDescription);
    }

    let split = split_description(&fields.description, ctx.section());
    if split.description.trim().is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyDescription);
    }

    RowOutcome::Record(TransactionRecord {
        date: fields.date,
        description: split.description.trim().to_string(),
        debit: fields.debit,
        credit: fields.credit,
        currency: split.currency,
        card_holder: ctx.card_holder(),
        section: ctx.section(),
        location: split.location,
    })
}
