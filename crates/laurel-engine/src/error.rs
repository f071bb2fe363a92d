use laurel_types::{CandidateId, VoterId};
use thiserror::Error;

/// Engine operation result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Decision-engine errors.
///
/// All variants propagate to the caller immediately. Silent degradation
/// (treating a divide-by-zero as 0, guessing a tie winner) would corrupt
/// an election outcome, so there is no local recovery and no partial
/// result.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No candidates could be derived from the ballots")]
    EmptyElection,

    #[error("Ballot from voter {voter} allocates a total of zero")]
    DegenerateBallot { voter: VoterId },

    #[error("No voter holds any weighted credential; cannot allocate a point budget")]
    DegenerateWeights,

    #[error("Tie between {candidates:?} survived every fallback stage")]
    UnresolvedTie { candidates: Vec<CandidateId> },

    #[error("Ballot from voter {voter} has the wrong shape: expected {expected}")]
    InvalidBallot {
        voter: VoterId,
        expected: &'static str,
    },
}
