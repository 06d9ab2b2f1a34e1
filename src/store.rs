use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::CandidateRecord;

/// Capability exposed by the authoritative table: a single disjunctive
/// batch query over the normalized identifying values.
pub trait CandidateStore {
    /// Returns every record whose `tel` exactly equals any of `phones`, or
    /// whose `name` contains (case-sensitive) any of `names`. Callers pass
    /// distinct, non-empty normalized values only; per-row attribution
    /// happens downstream.
    fn find_candidates(
        &self,
        names: &[String],
        phones: &[String],
    ) -> Result<Vec<CandidateRecord>>;
}

/// Store backed by an in-memory snapshot of the authoritative table,
/// decoded from a JSON export (an array of records).
pub struct SnapshotStore {
    records: Vec<CandidateRecord>,
}

impl SnapshotStore {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self { records }
    }

    /// Loads the snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let records: Vec<CandidateRecord> = serde_json::from_str(&data)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CandidateStore for SnapshotStore {
    fn find_candidates(
        &self,
        names: &[String],
        phones: &[String],
    ) -> Result<Vec<CandidateRecord>> {
        let matches = self
            .records
            .iter()
            .filter(|record| {
                phones.iter().any(|phone| record.tel == *phone)
                    || names.iter().any(|name| record.name.contains(name.as_str()))
            })
            .cloned()
            .collect();
        Ok(matches)
    }
}
