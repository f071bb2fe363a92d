use crate::mechanism::{eligible, zeroed_scores, VotingMechanism};
use crate::normalize::to_percentages;
use crate::weighting::CredentialWeights;
use crate::{EngineError, Result};
use laurel_types::{BallotBox, CandidateId, CredentialId, Electorate, ScoreMap, Tally};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Scores closer than this on the percentage scale count as tied
const TIE_EPSILON: f64 = 1e-9;

/// How a stakeholder group turns its members' ballots into raw scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupScoring {
    /// Every member's ballot counts as 1
    OnePersonOneVote,
    /// Every member's ballot counts as their credential score, restricted
    /// to the group's qualifying credentials
    CredentialWeighted,
}

/// A named subset of the electorate defined by credential qualification,
/// scored independently and combined by its weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeholderGroup {
    pub name: String,
    /// Credentials qualifying a voter for membership. An empty list means
    /// the whole electorate qualifies unconditionally.
    pub qualifying: Vec<CredentialId>,
    pub weight: f64,
    pub scoring: GroupScoring,
}

impl StakeholderGroup {
    pub fn new<I, C>(name: impl Into<String>, qualifying: I, weight: f64, scoring: GroupScoring) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CredentialId>,
    {
        Self {
            name: name.into(),
            qualifying: qualifying.into_iter().map(Into::into).collect(),
            weight,
            scoring,
        }
    }
}

/// Construction-time configuration for [`GroupHug`]: the credential table
/// and the four stakeholder groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupHugConfig {
    pub credential_weights: CredentialWeights,
    pub experts: StakeholderGroup,
    pub intellectuals: StakeholderGroup,
    pub participants: StakeholderGroup,
    pub community: StakeholderGroup,
}

/// Stage of the tie-break cascade.
///
/// Transitions run forward only, while more than one candidate remains
/// after filtering by the current stage's scores:
/// `Aggregate → Experts → Community`, then the cascade is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreakStage {
    /// The aggregate had a unique maximum
    Aggregate,
    /// Narrowed by the expert group's scores
    Experts,
    /// Narrowed by the community group's scores
    Community,
}

impl TieBreakStage {
    /// Next stage and the score map that narrows the tied set; `None`
    /// once the cascade is exhausted
    fn advance<'a>(
        self,
        experts: &'a ScoreMap,
        community: &'a ScoreMap,
    ) -> Option<(Self, &'a ScoreMap)> {
        match self {
            Self::Aggregate => Some((Self::Experts, experts)),
            Self::Experts => Some((Self::Community, community)),
            Self::Community => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Aggregate => "aggregate",
            Self::Experts => "experts",
            Self::Community => "community",
        }
    }
}

/// Partitions voters into overlapping stakeholder groups, scores each
/// group independently, combines by group weight, and resolves ties by
/// cascading through the expert and community results.
///
/// Group membership is not exclusive: one voter may qualify for several
/// groups and contributes to each. The aggregate is a percentage map
/// (summing to 100, or to 0 when no votes were cast). Unlike the other
/// mechanisms, a tie that survives the whole cascade is an error rather
/// than an arbitrary pick.
pub struct GroupHug {
    config: GroupHugConfig,
}

impl GroupHug {
    pub fn new(config: GroupHugConfig) -> Result<Self> {
        for group in [
            &config.experts,
            &config.intellectuals,
            &config.participants,
            &config.community,
        ] {
            if !group.weight.is_finite() || group.weight < 0.0 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "group {} has weight {}, expected a non-negative finite number",
                    group.name, group.weight
                )));
            }
        }
        Ok(Self { config })
    }

    fn groups(&self) -> [&StakeholderGroup; 4] {
        [
            &self.config.experts,
            &self.config.intellectuals,
            &self.config.participants,
            &self.config.community,
        ]
    }

    /// Raw score map for one group over the shared candidate set.
    ///
    /// Candidates a group gave no votes keep score 0 so the per-group
    /// maps stay summable.
    fn group_scores(
        &self,
        group: &StakeholderGroup,
        voters: &Electorate,
        ballots: &BallotBox,
        template: &ScoreMap,
    ) -> Result<ScoreMap> {
        let mut scores = template.clone();

        for (voter, profile) in voters {
            if !group.qualifying.is_empty() && !profile.holds_any(&group.qualifying) {
                continue;
            }

            let Some(ballot) = ballots.get(voter) else {
                debug!(voter = %voter, group = %group.name, "Member cast no ballot, skipping");
                continue;
            };

            let choice = ballot
                .as_single_choice()
                .ok_or_else(|| EngineError::InvalidBallot {
                    voter: voter.clone(),
                    expected: "single-choice ballot",
                })?;

            let contribution = match group.scoring {
                GroupScoring::OnePersonOneVote => 1.0,
                GroupScoring::CredentialWeighted => self
                    .config
                    .credential_weights
                    .score_restricted(profile, &group.qualifying),
            };

            scores[choice] += contribution;
        }

        Ok(scores)
    }

    /// Candidates within `TIE_EPSILON` of the maximal score, restricted
    /// to `within` when given, in score-map order
    fn maximal_candidates(scores: &ScoreMap, within: Option<&[CandidateId]>) -> Vec<CandidateId> {
        let in_scope = |candidate: &CandidateId| match within {
            Some(set) => set.contains(candidate),
            None => true,
        };

        let mut top = f64::NEG_INFINITY;
        for (candidate, score) in scores {
            if in_scope(candidate) && *score > top {
                top = *score;
            }
        }

        scores
            .iter()
            .filter(|&(candidate, score)| in_scope(candidate) && top - *score <= TIE_EPSILON)
            .map(|(candidate, _)| candidate.clone())
            .collect()
    }

    /// Run the tie-break cascade over the aggregate and the two fallback
    /// score maps
    fn declare_winner(
        aggregate: &ScoreMap,
        experts: &ScoreMap,
        community: &ScoreMap,
    ) -> Result<(CandidateId, TieBreakStage)> {
        let mut stage = TieBreakStage::Aggregate;
        let mut tied = Self::maximal_candidates(aggregate, None);

        while tied.len() > 1 {
            match stage.advance(experts, community) {
                Some((next, fallback)) => {
                    info!(
                        stage = next.label(),
                        tied = tied.len(),
                        "⚖️ Tie unresolved, advancing cascade"
                    );
                    stage = next;
                    tied = Self::maximal_candidates(fallback, Some(tied.as_slice()));
                }
                None => {
                    crate::metrics::TIE_BREAKS
                        .with_label_values(&["unresolved"])
                        .inc();
                    return Err(EngineError::UnresolvedTie { candidates: tied });
                }
            }
        }

        let winner = tied.into_iter().next().ok_or(EngineError::EmptyElection)?;
        Ok((winner, stage))
    }
}

impl VotingMechanism for GroupHug {
    fn name(&self) -> &'static str {
        "group_hug"
    }

    fn calculate(&self, electorate: &Electorate, ballots: &BallotBox) -> Result<Tally> {
        let voters = eligible(electorate);
        let template = zeroed_scores(ballots)?;

        let mut aggregate: ScoreMap = template.clone();
        let mut normalized: Vec<ScoreMap> = Vec::with_capacity(4);

        for group in self.groups() {
            let raw = self.group_scores(group, &voters, ballots, &template)?;
            let percentages = to_percentages(&raw);

            debug!(group = %group.name, scores = ?percentages, "Group scored");

            for (candidate, percentage) in &percentages {
                aggregate[candidate] += percentage * group.weight;
            }
            normalized.push(percentages);
        }

        let aggregate = to_percentages(&aggregate);
        let experts = &normalized[0];
        let community = &normalized[3];

        let (winner, stage) = Self::declare_winner(&aggregate, experts, community)?;

        crate::metrics::TIE_BREAKS
            .with_label_values(&[stage.label()])
            .inc();
        crate::metrics::ELECTIONS_SCORED
            .with_label_values(&[self.name()])
            .inc();
        info!(
            winner = %winner,
            stage = stage.label(),
            candidates = aggregate.len(),
            "📊 Group hug tally completed"
        );

        Ok(Tally::new(winner, aggregate))
    }
}
