use chrono::NaiveDate;

use crate::error::RowError;

/// One physical line of a statement export: positional cells, no names.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    cells: Vec<Option<String>>,
}

impl RawRow {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Build a row from literal text cells, treating "" as an absent cell.
    #[cfg(test)]
    pub fn from_strs(cells: &[&str]) -> Self {
        Self::new(
            cells
                .iter()
                .map(|c| if c.is_empty() { None } else { Some(c.to_string()) })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Text of a cell, `None` when the cell is absent or past the end of the row.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// Like [`RawRow::cell`] but a column past the end of the row is an error.
    pub fn column(&self, index: usize, field: &'static str) -> Result<Option<&str>, RowError> {
        match self.cells.get(index) {
            Some(c) => Ok(c.as_deref()),
            None => Err(RowError::MissingColumn {
                column: index,
                field,
            }),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Whether a single present cell contains `needle`.
    pub fn any_cell_contains(&self, needle: &str) -> bool {
        self.cells.iter().flatten().any(|c| c.contains(needle))
    }

    /// Present cells joined by a single space; all substring matching runs on this.
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn pad_to(&mut self, width: usize) {
        if self.cells.len() < width {
            self.cells.resize(width, None);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionKind {
    Domestic,
    International,
    #[default]
    Unknown,
}

impl SectionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::International => "International",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardHolder {
    Rahul,
    Ritu,
    Raj,
    Rajat,
    #[default]
    Unknown,
}

impl CardHolder {
    /// Known holders in the order banner rows are checked against.
    pub const KNOWN: [CardHolder; 4] = [Self::Rahul, Self::Ritu, Self::Raj, Self::Rajat];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rahul => "Rahul",
            Self::Ritu => "Ritu",
            Self::Raj => "Raj",
            Self::Rajat => "Rajat",
            Self::Unknown => "Unknown",
        }
    }

    /// First known holder whose name occurs anywhere in `text`.
    pub fn find_in(text: &str) -> Option<CardHolder> {
        Self::KNOWN.into_iter().find(|h| text.contains(h.label()))
    }
}

/// A normalized statement line, created once per extracted row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub currency: String,
    pub card_holder: CardHolder,
    pub section: SectionKind,
    pub location: String,
}
