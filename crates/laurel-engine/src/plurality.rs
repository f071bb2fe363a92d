use crate::mechanism::{argmax, eligible, zeroed_scores, VotingMechanism};
use crate::weighting::CredentialWeights;
use crate::{EngineError, Result};
use laurel_types::{BallotBox, Electorate, Tally};
use tracing::{debug, info};

/// One voter, one weighted vote for exactly one candidate.
///
/// Each voter's scalar weight is derived from their credentials at
/// calculation time and added to their chosen candidate's total. Ties go
/// to the first-encountered candidate.
pub struct SingleChoiceWeightedPlurality {
    weights: CredentialWeights,
}

impl SingleChoiceWeightedPlurality {
    pub fn new(weights: CredentialWeights) -> Self {
        Self { weights }
    }
}

impl VotingMechanism for SingleChoiceWeightedPlurality {
    fn name(&self) -> &'static str {
        "single_choice_weighted_plurality"
    }

    fn calculate(&self, electorate: &Electorate, ballots: &BallotBox) -> Result<Tally> {
        let voters = eligible(electorate);
        let mut scores = zeroed_scores(ballots)?;

        for (voter, ballot) in ballots {
            let Some(profile) = voters.get(voter) else {
                debug!(voter = %voter, "Voter is a candidate or unknown, skipping ballot");
                continue;
            };

            let choice = ballot
                .as_single_choice()
                .ok_or_else(|| EngineError::InvalidBallot {
                    voter: voter.clone(),
                    expected: "single-choice ballot",
                })?;

            let weight = self.weights.score(profile);
            scores[choice] += weight;

            debug!(voter = %voter, candidate = %choice, weight, "Vote counted");
        }

        let winner = argmax(&scores)?;

        crate::metrics::ELECTIONS_SCORED
            .with_label_values(&[self.name()])
            .inc();
        info!(
            winner = %winner,
            candidates = scores.len(),
            "📊 Weighted plurality tally completed"
        );

        Ok(Tally::new(winner, scores))
    }
}

/// One voter, weight split across candidates by ballot percentages.
///
/// Ballot values are taken as already-normalized shares of the voter's
/// support; this mechanism deliberately does not re-normalize them.
pub struct PercentageAllocationWeightedPlurality {
    weights: CredentialWeights,
}

impl PercentageAllocationWeightedPlurality {
    pub fn new(weights: CredentialWeights) -> Self {
        Self { weights }
    }
}

impl VotingMechanism for PercentageAllocationWeightedPlurality {
    fn name(&self) -> &'static str {
        "percentage_allocation_weighted_plurality"
    }

    fn calculate(&self, electorate: &Electorate, ballots: &BallotBox) -> Result<Tally> {
        let voters = eligible(electorate);
        let mut scores = zeroed_scores(ballots)?;

        for (voter, ballot) in ballots {
            let Some(profile) = voters.get(voter) else {
                debug!(voter = %voter, "Voter is a candidate or unknown, skipping ballot");
                continue;
            };

            let allocation = ballot
                .as_allocation()
                .ok_or_else(|| EngineError::InvalidBallot {
                    voter: voter.clone(),
                    expected: "percentage-allocation ballot",
                })?;

            let weight = self.weights.score(profile);
            for (candidate, share) in allocation {
                scores[candidate] += weight * share;
            }

            debug!(voter = %voter, weight, candidates = allocation.len(), "Ballot counted");
        }

        let winner = argmax(&scores)?;

        crate::metrics::ELECTIONS_SCORED
            .with_label_values(&[self.name()])
            .inc();
        info!(
            winner = %winner,
            candidates = scores.len(),
            "📊 Percentage-allocation tally completed"
        );

        Ok(Tally::new(winner, scores))
    }
}
