use std::collections::{BTreeMap, BTreeSet};

use crate::config::ReconConfig;
use crate::error::Result;
use crate::model::{CandidateRecord, SheetGrid};
use crate::normalize::{FieldKind, normalize};
use crate::store::CandidateStore;

/// Row number → normalized identifying text for one field kind.
pub type Projection = BTreeMap<u32, String>;

/// Builds the name and phone projections from the configured identifying
/// columns, starting at the first data row. Both projections cover the same
/// row numbers since they are read from the same sheet range.
pub fn project_identifiers(grid: &SheetGrid, config: &ReconConfig) -> (Projection, Projection) {
    let mut names = Projection::new();
    let mut phones = Projection::new();

    for row in grid.rows() {
        if row.number < config.data_start_row {
            continue;
        }
        names.insert(row.number, normalize(row.cell(config.name_column), FieldKind::Name));
        phones.insert(
            row.number,
            normalize(row.cell(config.phone_column), FieldKind::Phone),
        );
    }

    (names, phones)
}

/// Fetches the flat candidate pool for the whole batch with one disjunctive
/// store query. Empty normalized values never participate; when the batch
/// carries no usable identifying value at all, the store is not queried.
pub fn fetch_candidates(
    store: &dyn CandidateStore,
    names: &Projection,
    phones: &Projection,
) -> Result<Vec<CandidateRecord>> {
    let names = distinct_non_empty(names);
    let phones = distinct_non_empty(phones);

    if names.is_empty() && phones.is_empty() {
        return Ok(Vec::new());
    }

    store.find_candidates(&names, &phones)
}

fn distinct_non_empty(projection: &Projection) -> Vec<String> {
    let values: BTreeSet<&String> = projection
        .values()
        .filter(|value| !value.is_empty())
        .collect();
    values.into_iter().cloned().collect()
}
