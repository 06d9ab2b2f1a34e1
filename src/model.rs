use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content of a single spreadsheet cell, resolved at the read boundary.
///
/// Only the display text participates in normalization and script
/// generation; a hyperlink target is carried along but never matched on.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Cell without content. Distinct from an empty string so re-export can
    /// leave the position blank.
    Empty,
    /// Plain text content.
    Text(String),
    /// Hyperlink-bearing cell with its display text and link target.
    Hyperlink { text: String, target: String },
}

impl CellValue {
    /// Returns the text content that participates in matching and output.
    pub fn display_text(&self) -> &str {
        match self {
            CellValue::Empty => "",
            CellValue::Text(text) => text,
            CellValue::Hyperlink { text, .. } => text,
        }
    }

    /// True when the cell carries no displayable content.
    pub fn is_empty(&self) -> bool {
        self.display_text().is_empty()
    }
}

/// One source row, addressed by its 1-based sheet row number, holding the
/// full ordered cell sequence including empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub number: u32,
    pub cells: Vec<CellValue>,
}

impl RawRow {
    /// Returns the cell at the given 0-based column, empty when the row is
    /// narrower than the requested position.
    pub fn cell(&self, column: u16) -> &CellValue {
        self.cells.get(column as usize).unwrap_or(&CellValue::Empty)
    }
}

/// Immutable snapshot of the source sheet's used range. Rows are padded to
/// a uniform width so column addressing stays aligned across the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    rows: Vec<RawRow>,
}

impl SheetGrid {
    pub fn new(mut rows: Vec<RawRow>) -> Self {
        let width = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.cells.resize(width, CellValue::Empty);
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Looks up a row by its 1-based sheet row number.
    pub fn row(&self, number: u32) -> Option<&RawRow> {
        self.rows.iter().find(|row| row.number == number)
    }
}

/// Read-only snapshot of one authoritative-store record. Fetched once per
/// run and never mutated; the non-identifying business fields ride along in
/// the flattened map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub tel: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl CandidateRecord {
    /// Creates a record carrying only the identifying fields.
    pub fn new(name: impl Into<String>, tel: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tel: tel.into(),
            fields: BTreeMap::new(),
        }
    }
}

/// Per-row outcome of the reconciliation: the normalized identifying values
/// and every candidate attached to the row. A row is matched exactly when
/// its candidate list is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub row: u32,
    pub name: String,
    pub tel: String,
    pub candidates: Vec<CandidateRecord>,
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        !self.candidates.is_empty()
    }
}
