use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::config::ReconConfig;
use crate::error::Result;
use crate::io::{excel_read, excel_write};
use crate::store::CandidateStore;
use crate::{matcher, report, sqlgen};

/// Outcome of a reconciliation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconSummary {
    pub matched_rows: usize,
    pub unmatched_rows: usize,
    pub script_path: PathBuf,
    pub unmatched_path: PathBuf,
}

/// Runs the full reconciliation pipeline: load the sheet, project and
/// normalize the identifying columns, fetch the candidate pool with one
/// batch query, attribute candidates per row, then emit the UPDATE script
/// for the matched partition and the "NotMatch" workbook for the rest.
///
/// The script is generated before either artifact is written, so a mapping
/// gap aborts the run without partial output.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output_dir.display())
)]
pub fn reconcile(
    input: &Path,
    store: &dyn CandidateStore,
    config: &ReconConfig,
    output_dir: &Path,
) -> Result<ReconSummary> {
    let grid = excel_read::read_grid(input, &config.sheet_name)?;
    info!(row_count = grid.rows().len(), "sheet loaded");

    let (names, phones) = matcher::project_identifiers(&grid, config);
    let pool = matcher::fetch_candidates(store, &names, &phones)?;
    info!(candidate_count = pool.len(), "candidate pool fetched");

    let results = report::build_report(&names, &phones, &pool);
    let (matched, unmatched) = report::partition(results);
    debug!(
        matched = matched.len(),
        unmatched = unmatched.len(),
        "rows partitioned"
    );

    let script = sqlgen::build_update_script(&grid, &matched, config)?;
    let script_path = output_dir.join(&config.script_file);
    fs::write(&script_path, script)?;

    let unmatched_path = output_dir.join(&config.unmatched_file);
    excel_write::write_unmatched(&unmatched_path, &grid, &unmatched)?;
    info!(
        script = %script_path.display(),
        unmatched = %unmatched_path.display(),
        "artifacts written"
    );

    Ok(ReconSummary {
        matched_rows: matched.len(),
        unmatched_rows: unmatched.len(),
        script_path,
        unmatched_path,
    })
}
