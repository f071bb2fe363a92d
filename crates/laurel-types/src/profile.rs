use crate::CredentialId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A voter's credential holdings plus their candidacy flag.
///
/// Holding counts are 0 or 1 for possession-style credentials and larger
/// non-negative integers for repeatable ones. Voters flagged as candidates
/// are excluded from every electorate before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoterProfile {
    pub credentials: IndexMap<CredentialId, u32>,
    pub is_candidate: bool,
}

impl VoterProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile holding each listed credential exactly once
    pub fn holding<I, C>(credentials: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CredentialId>,
    {
        Self {
            credentials: credentials.into_iter().map(|c| (c.into(), 1)).collect(),
            is_candidate: false,
        }
    }

    pub fn with_count(mut self, credential: impl Into<CredentialId>, count: u32) -> Self {
        self.credentials.insert(credential.into(), count);
        self
    }

    pub fn as_candidate(mut self) -> Self {
        self.is_candidate = true;
        self
    }

    /// Holding count for a credential, 0 when absent
    pub fn count(&self, credential: &CredentialId) -> u32 {
        self.credentials.get(credential).copied().unwrap_or(0)
    }

    pub fn holds(&self, credential: &CredentialId) -> bool {
        self.count(credential) > 0
    }

    /// True when the voter holds at least one of the listed credentials
    pub fn holds_any(&self, credentials: &[CredentialId]) -> bool {
        credentials.iter().any(|c| self.holds(c))
    }
}
