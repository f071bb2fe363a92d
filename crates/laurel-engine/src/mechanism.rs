use crate::{EngineError, Result};
use laurel_types::{BallotBox, CandidateId, Electorate, ScoreMap, Tally};

/// Common contract for every vote-aggregation mechanism.
///
/// `calculate` is a pure function of the inputs and the mechanism's
/// construction-time configuration: same input, same output. It is total
/// over well-formed input, leaving no ballot-referenced candidate
/// unscored.
///
/// Where a mechanism has no explicit tie policy, the winner among equal
/// maxima is the candidate first encountered in ballot iteration order.
/// With ordered ballot boxes that order is the caller's insertion order,
/// but it is a weak guarantee, not a fairness contract; callers needing a
/// deliberate tie policy should use [`GroupHug`](crate::GroupHug).
pub trait VotingMechanism {
    /// Stable mechanism label, used in diagnostics and metrics
    fn name(&self) -> &'static str;

    /// Score the ballots and produce a winner plus the full breakdown
    fn calculate(&self, electorate: &Electorate, ballots: &BallotBox) -> Result<Tally>;
}

/// Voters allowed to have their ballots counted.
///
/// Candidates are struck from the electorate before any mechanism runs;
/// a voter flagged as a candidate never contributes to any score.
pub fn eligible(electorate: &Electorate) -> Electorate {
    electorate
        .iter()
        .filter(|(_, profile)| !profile.is_candidate)
        .map(|(voter, profile)| (voter.clone(), profile.clone()))
        .collect()
}

/// Score map seeded with 0 for every candidate any ballot references.
///
/// The candidate set is the union of ballot targets in first-encountered
/// order; it is never supplied independently. An empty set means there is
/// no election to score.
pub fn zeroed_scores(ballots: &BallotBox) -> Result<ScoreMap> {
    let mut scores = ScoreMap::new();
    for ballot in ballots.values() {
        for candidate in ballot.candidates() {
            scores.entry(candidate.clone()).or_insert(0.0);
        }
    }

    if scores.is_empty() {
        return Err(EngineError::EmptyElection);
    }

    Ok(scores)
}

/// First-encountered candidate with the maximal score
pub fn argmax(scores: &ScoreMap) -> Result<CandidateId> {
    let mut best: Option<(&CandidateId, f64)> = None;
    for (candidate, score) in scores {
        match best {
            Some((_, top)) if *score <= top => {}
            _ => best = Some((candidate, *score)),
        }
    }

    best.map(|(candidate, _)| candidate.clone())
        .ok_or(EngineError::EmptyElection)
}
