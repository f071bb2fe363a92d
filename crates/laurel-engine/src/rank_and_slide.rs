use crate::mechanism::{argmax, eligible, zeroed_scores, VotingMechanism};
use crate::normalize::normalize_allocation;
use crate::weighting::{CredentialWeights, DEFAULT_POINT_BUDGET};
use crate::{EngineError, Result};
use laurel_types::{BallotBox, CandidateId, Electorate, ScoreMap, Tally};
use tracing::{debug, info};

/// Credential-derived point budgets split across candidates by normalized
/// ballot proportions.
///
/// A fixed total budget is distributed across the eligible electorate in
/// proportion to credential scores, then each voter's share flows to
/// candidates according to their normalized allocations. Influence scales
/// with both credential weight and how the voter chooses to spread it.
/// The returned score map is sorted descending for transparency.
pub struct RankAndSlide {
    weights: CredentialWeights,
    budget: f64,
}

impl RankAndSlide {
    pub fn new(weights: CredentialWeights) -> Self {
        Self {
            weights,
            budget: DEFAULT_POINT_BUDGET,
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }
}

impl VotingMechanism for RankAndSlide {
    fn name(&self) -> &'static str {
        "rank_and_slide"
    }

    fn calculate(&self, electorate: &Electorate, ballots: &BallotBox) -> Result<Tally> {
        let voters = eligible(electorate);
        let mut scores = zeroed_scores(ballots)?;

        let budgets = self.weights.allocate_budget(&voters, self.budget)?;

        for (voter, ballot) in ballots {
            if !voters.contains_key(voter) {
                debug!(voter = %voter, "Voter is a candidate or unknown, skipping ballot");
                continue;
            }

            let allocation = ballot
                .as_allocation()
                .ok_or_else(|| EngineError::InvalidBallot {
                    voter: voter.clone(),
                    expected: "proportion-allocation ballot",
                })?;

            let proportions = normalize_allocation(allocation, voter)?;
            let budget = budgets[voter];

            for (candidate, proportion) in &proportions {
                scores[candidate] += budget * proportion;
            }

            debug!(voter = %voter, budget, candidates = proportions.len(), "Budget allocated");
        }

        // Descending by score; the sort is stable so equal scores keep
        // their first-encountered order
        let mut ranked: Vec<(CandidateId, f64)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        let scores: ScoreMap = ranked.into_iter().collect();

        let winner = argmax(&scores)?;

        crate::metrics::ELECTIONS_SCORED
            .with_label_values(&[self.name()])
            .inc();
        info!(
            winner = %winner,
            candidates = scores.len(),
            total_budget = self.budget,
            "📊 Rank-and-slide tally completed"
        );

        Ok(Tally::new(winner, scores))
    }
}
