use crate::mechanism::{argmax, eligible, zeroed_scores, VotingMechanism};
use crate::{EngineError, Result};
use laurel_types::{BallotBox, Electorate, ScoreMap, Tally};
use tracing::{debug, info};

/// Quadratic aggregation of point allocations.
///
/// For each candidate, every voter's allocation is square-rooted, the
/// roots are summed, and the sum is squared. Square-rooting before the
/// sum dampens the marginal influence of one large allocation relative to
/// many small ones; squaring restores comparable scale across candidates.
/// Ties go to the first-encountered candidate, a weak guarantee.
#[derive(Debug, Default)]
pub struct QuadraticCredibility;

impl QuadraticCredibility {
    pub fn new() -> Self {
        Self
    }
}

impl VotingMechanism for QuadraticCredibility {
    fn name(&self) -> &'static str {
        "quadratic_credibility"
    }

    fn calculate(&self, electorate: &Electorate, ballots: &BallotBox) -> Result<Tally> {
        let voters = eligible(electorate);
        let mut root_sums = zeroed_scores(ballots)?;

        for (voter, ballot) in ballots {
            if !voters.contains_key(voter) {
                debug!(voter = %voter, "Voter is a candidate or unknown, skipping ballot");
                continue;
            }

            let allocation = ballot
                .as_allocation()
                .ok_or_else(|| EngineError::InvalidBallot {
                    voter: voter.clone(),
                    expected: "point-allocation ballot",
                })?;

            for (candidate, amount) in allocation {
                if !amount.is_finite() || *amount < 0.0 {
                    return Err(EngineError::InvalidBallot {
                        voter: voter.clone(),
                        expected: "non-negative finite point allocations",
                    });
                }
                root_sums[candidate] += amount.sqrt();
            }

            debug!(voter = %voter, candidates = allocation.len(), "Allocation counted");
        }

        let scores: ScoreMap = root_sums
            .into_iter()
            .map(|(candidate, root_sum)| (candidate, root_sum * root_sum))
            .collect();

        let winner = argmax(&scores)?;

        crate::metrics::ELECTIONS_SCORED
            .with_label_values(&[self.name()])
            .inc();
        info!(
            winner = %winner,
            candidates = scores.len(),
            "📊 Quadratic credibility tally completed"
        );

        Ok(Tally::new(winner, scores))
    }
}
