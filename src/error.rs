use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ReconError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads the source workbook, matches rows, or emits artifacts.
#[derive(Debug, Error)]
pub enum ReconError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing of the store snapshot fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when the configured sheet is absent from the workbook. Fatal
    /// before any artifact is written.
    #[error("missing sheet '{0}' in source workbook")]
    SheetNotFound(String),

    /// Raised when a data column has no entry in the update-column mapping.
    /// Fatal: the run aborts rather than emit an incomplete statement.
    #[error("no update mapping for column {column} (row {row})")]
    UnmappedColumn { column: String, row: u32 },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
