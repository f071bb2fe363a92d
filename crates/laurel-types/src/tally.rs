use crate::CandidateId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Candidate scores in candidate first-encountered order.
///
/// Every candidate that appears in at least one ballot has an entry, with
/// score 0 when nothing was allocated to them.
pub type ScoreMap = IndexMap<CandidateId, f64>;

/// Outcome of one mechanism invocation: the winner plus the full
/// auditable score breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub winner: CandidateId,
    pub scores: ScoreMap,
}

impl Tally {
    pub fn new(winner: CandidateId, scores: ScoreMap) -> Self {
        Self { winner, scores }
    }

    pub fn score_of(&self, candidate: &CandidateId) -> f64 {
        self.scores.get(candidate).copied().unwrap_or(0.0)
    }
}
