use crate::models::RawRow;

/// Rows inspected when guessing the layout of a statement.
pub const SAMPLE_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Layout kinds: enum dispatch, declaration order is detection priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Idfc,
    Hdfc,
    Icici,
    Axis,
    Unknown,
}

impl FormatKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Idfc => "idfc",
            Self::Hdfc => "hdfc",
            Self::Icici => "icici",
            Self::Axis => "axis",
            Self::Unknown => "unknown",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idfc => "IDFC First Bank",
            Self::Hdfc => "HDFC Bank",
            Self::Icici => "ICICI Bank",
            Self::Axis => "Axis Bank",
            Self::Unknown => "Unknown",
        }
    }

    /// Positional column order of the layout's transaction rows.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Idfc => &["Description", "Date", "Signed amount"],
            Self::Hdfc => &["Date", "Description", "Signed amount"],
            Self::Icici => &["Date", "Description", "Debit", "Credit"],
            Self::Axis => &["Date", "Debit", "Credit", "Description"],
            Self::Unknown => &[],
        }
    }

    /// Whether any row of `sample` carries this layout's fingerprint.
    /// Each marker has to sit inside one cell.
    pub fn matches(&self, sample: &[RawRow]) -> bool {
        sample.iter().any(|row| {
            let has = |marker: &str| row.any_cell_contains(marker);
            match self {
                Self::Idfc => {
                    has("Transaction Details")
                        && row.cell(0).map_or(0, |c| c.chars().count()) > 10
                }
                Self::Hdfc => has("Amount"),
                Self::Icici => {
                    has("Domestic Transactions")
                        || (row.len() >= 4 && has("Debit") && has("Credit"))
                }
                Self::Axis => has("Date") && has("Transaction Details"),
                Self::Unknown => false,
            }
        })
    }
}

pub const ALL_FORMATS: &[FormatKind] = &[
    FormatKind::Idfc,
    FormatKind::Hdfc,
    FormatKind::Icici,
    FormatKind::Axis,
];

pub fn get_by_key(key: &str) -> Option<FormatKind> {
    let key = key.trim().to_lowercase();
    ALL_FORMATS.iter().find(|f| f.key() == key).copied()
}

fn sample(rows: &[RawRow]) -> &[RawRow] {
    &rows[..rows.len().min(SAMPLE_ROWS)]
}

/// Pick the layout of a whole table from its first rows; first match wins.
pub fn detect_format(rows: &[RawRow]) -> FormatKind {
    let sample = sample(rows);
    ALL_FORMATS
        .iter()
        .find(|f| f.matches(sample))
        .copied()
        .unwrap_or(FormatKind::Unknown)
}

/// Every layout predicate evaluated against the sample, in priority order.
pub fn predicate_report(rows: &[RawRow]) -> Vec<(FormatKind, bool)> {
    let sample = sample(rows);
    ALL_FORMATS.iter().map(|f| (*f, f.matches(sample))).collect()
}
