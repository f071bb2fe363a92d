use crate::{EngineError, Result};
use indexmap::IndexMap;
use laurel_types::{CandidateId, ScoreMap, VoterId};

/// Normalize one ballot's raw allocations into proportions summing to 1.
///
/// Division is by the ballot's own total, never by a global total. A
/// zero-sum ballot cannot be normalized; the voter who cast it should be
/// excluded upstream, so it is reported instead of being treated as a
/// null ballot.
pub fn normalize_allocation(
    allocation: &IndexMap<CandidateId, f64>,
    voter: &VoterId,
) -> Result<IndexMap<CandidateId, f64>> {
    let total: f64 = allocation.values().sum();

    if total == 0.0 {
        crate::metrics::DEGENERATE_INPUTS
            .with_label_values(&["zero_sum_ballot"])
            .inc();
        return Err(EngineError::DegenerateBallot {
            voter: voter.clone(),
        });
    }

    Ok(allocation
        .iter()
        .map(|(candidate, amount)| (candidate.clone(), amount / total))
        .collect())
}

/// Convert a raw score map into percentages summing to 100.
///
/// An all-zero map stays all-zero: a stakeholder group may legitimately
/// cast no votes, and inventing a uniform 100/N split would misreport it.
pub fn to_percentages(scores: &ScoreMap) -> ScoreMap {
    let total: f64 = scores.values().sum();

    if total == 0.0 {
        return scores.keys().map(|c| (c.clone(), 0.0)).collect();
    }

    scores
        .iter()
        .map(|(candidate, score)| (candidate.clone(), 100.0 * score / total))
        .collect()
}
