use crate::CandidateId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A voter's expressed preference.
///
/// Mechanisms accept one shape and reject the other at their boundary;
/// the engine never reinterprets one shape as the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ballot {
    /// The entire vote goes to one candidate
    SingleChoice(CandidateId),
    /// Non-negative support spread across candidates; depending on the
    /// mechanism the values are percentages, proportions, or point amounts
    Allocation(IndexMap<CandidateId, f64>),
}

impl Ballot {
    pub fn single(candidate: impl Into<CandidateId>) -> Self {
        Self::SingleChoice(candidate.into())
    }

    pub fn allocation<I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, f64)>,
        C: Into<CandidateId>,
    {
        Self::Allocation(entries.into_iter().map(|(c, v)| (c.into(), v)).collect())
    }

    /// Candidates this ballot targets, in ballot order
    pub fn candidates(&self) -> Vec<&CandidateId> {
        match self {
            Self::SingleChoice(candidate) => vec![candidate],
            Self::Allocation(entries) => entries.keys().collect(),
        }
    }

    /// Amount this ballot allocates to a candidate
    pub fn amount_for(&self, candidate: &CandidateId) -> f64 {
        match self {
            Self::SingleChoice(chosen) => {
                if chosen == candidate {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Allocation(entries) => entries.get(candidate).copied().unwrap_or(0.0),
        }
    }

    pub fn as_single_choice(&self) -> Option<&CandidateId> {
        match self {
            Self::SingleChoice(candidate) => Some(candidate),
            Self::Allocation(_) => None,
        }
    }

    pub fn as_allocation(&self) -> Option<&IndexMap<CandidateId, f64>> {
        match self {
            Self::SingleChoice(_) => None,
            Self::Allocation(entries) => Some(entries),
        }
    }
}
