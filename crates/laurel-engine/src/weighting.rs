use crate::{EngineError, Result};
use indexmap::IndexMap;
use laurel_types::{CredentialId, Electorate, VoterId, VoterProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Point budget distributed across voters by [`CredentialWeights::allocate_budget`]
/// unless the caller picks another total. Large enough that rounding noise
/// in the per-voter shares stays negligible.
pub const DEFAULT_POINT_BUDGET: f64 = 10_000.0;

/// Immutable credential → weight table.
///
/// Lookups default to 0 for unmapped credentials, so an unrecognized
/// credential can never fail a scoring pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialWeights {
    weights: IndexMap<CredentialId, f64>,
}

impl CredentialWeights {
    pub fn new(weights: IndexMap<CredentialId, f64>) -> Result<Self> {
        for (credential, weight) in &weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "weight for credential {} must be a non-negative finite number, got {}",
                    credential, weight
                )));
            }
        }
        Ok(Self { weights })
    }

    pub fn from_entries<I, C>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, f64)>,
        C: Into<CredentialId>,
    {
        Self::new(entries.into_iter().map(|(c, w)| (c.into(), w)).collect())
    }

    /// Weight of a single credential, 0 when unmapped
    pub fn weight_of(&self, credential: &CredentialId) -> f64 {
        self.weights.get(credential).copied().unwrap_or(0.0)
    }

    /// Scalar score of one voter: Σ holding count × credential weight
    pub fn score(&self, profile: &VoterProfile) -> f64 {
        profile
            .credentials
            .iter()
            .map(|(credential, count)| f64::from(*count) * self.weight_of(credential))
            .sum()
    }

    /// Like [`score`](Self::score), but only credentials on the qualifying
    /// list contribute
    pub fn score_restricted(&self, profile: &VoterProfile, qualifying: &[CredentialId]) -> f64 {
        profile
            .credentials
            .iter()
            .filter(|&(credential, _)| qualifying.contains(credential))
            .map(|(credential, count)| f64::from(*count) * self.weight_of(credential))
            .sum()
    }

    /// Scalar weight per voter over the whole electorate
    pub fn voter_weights(&self, electorate: &Electorate) -> IndexMap<VoterId, f64> {
        electorate
            .iter()
            .map(|(voter, profile)| (voter.clone(), self.score(profile)))
            .collect()
    }

    /// Distribute a fixed point budget across the electorate in proportion
    /// to raw credential scores.
    ///
    /// The division by the cross-voter raw sum makes the budget independent
    /// of the weight table's absolute scale. A raw sum of 0 means no voter
    /// holds any weighted credential, which is a data-integrity failure and
    /// is reported as [`EngineError::DegenerateWeights`].
    pub fn allocate_budget(
        &self,
        electorate: &Electorate,
        total_points: f64,
    ) -> Result<IndexMap<VoterId, f64>> {
        if !total_points.is_finite() || total_points <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "point budget must be a positive finite number, got {}",
                total_points
            )));
        }

        let raw: IndexMap<VoterId, f64> = self.voter_weights(electorate);
        let total_raw: f64 = raw.values().sum();

        if total_raw == 0.0 {
            crate::metrics::DEGENERATE_INPUTS
                .with_label_values(&["credential_weights"])
                .inc();
            return Err(EngineError::DegenerateWeights);
        }

        let budgets: IndexMap<VoterId, f64> = raw
            .into_iter()
            .map(|(voter, score)| (voter, total_points * score / total_raw))
            .collect();

        debug!(
            voters = budgets.len(),
            total_points, total_raw, "Point budget allocated"
        );

        Ok(budgets)
    }
}
