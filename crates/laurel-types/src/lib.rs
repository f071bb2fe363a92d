//! Core data model for the laurel election decision engine.
//!
//! Voters are weighted by possession of non-transferable achievement
//! credentials. This crate defines the identifiers, voter profiles, the
//! tagged ballot union, and the tally types every mechanism consumes and
//! produces. All mappings are [`indexmap::IndexMap`], so iteration order
//! is the caller's insertion order.

pub mod ballot;
pub mod id;
pub mod profile;
pub mod tally;

pub use ballot::Ballot;
pub use id::{CandidateId, CredentialId, VoterId};
pub use profile::VoterProfile;
pub use tally::{ScoreMap, Tally};

use indexmap::IndexMap;

/// The full set of voters keyed by id, candidacy flags included
pub type Electorate = IndexMap<VoterId, VoterProfile>;

/// One ballot per voter
pub type BallotBox = IndexMap<VoterId, Ballot>;
