use crate::matcher::Projection;
use crate::model::{CandidateRecord, MatchResult};

/// Attributes the batch candidate pool back to individual rows. For every
/// row in the phone projection the pool is re-filtered with the same
/// predicate the batch query used, so a candidate fetched because of one
/// row's phone can also attach to another row whose name it contains.
pub fn build_report(
    names: &Projection,
    phones: &Projection,
    pool: &[CandidateRecord],
) -> Vec<MatchResult> {
    phones
        .iter()
        .map(|(&row, tel)| {
            let name = names.get(&row).cloned().unwrap_or_default();
            let candidates = pool
                .iter()
                .filter(|candidate| attaches(candidate, &name, tel))
                .cloned()
                .collect();
            MatchResult {
                row,
                name,
                tel: tel.clone(),
                candidates,
            }
        })
        .collect()
}

/// Splits the results into (matched, unmatched), preserving ascending row
/// order within both partitions. Every input row lands in exactly one side.
pub fn partition(results: Vec<MatchResult>) -> (Vec<MatchResult>, Vec<MatchResult>) {
    results.into_iter().partition(MatchResult::is_matched)
}

fn attaches(candidate: &CandidateRecord, name: &str, tel: &str) -> bool {
    (!tel.is_empty() && candidate.tel == tel) || (!name.is_empty() && candidate.name.contains(name))
}
