/*!
# Laurel Decision Engine

Vote-aggregation mechanisms for elections whose voters are weighted by
possession of non-transferable achievement credentials:

- Credential weighting with configurable credential → weight tables and a
  normalized fixed point budget
- Single-choice and percentage-allocation weighted plurality
- Rank-and-slide budget allocation over normalized ballot proportions
- Quadratic credibility aggregation with square-root dampening
- Group Hug stakeholder-group scoring with a cascading tie-break

Every mechanism implements [`VotingMechanism`] and is a pure function of
its inputs and its construction-time configuration: synchronous,
deterministic, and total over well-formed input. Degenerate inputs
(zero-sum ballots, empty candidate sets, weightless electorates,
exhausted tie cascades) are reported as [`EngineError`]s, never silently
absorbed, because a quietly wrong score corrupts an election outcome.

## Example

```
use laurel_engine::{CredentialWeights, SingleChoiceWeightedPlurality, VotingMechanism};
use laurel_types::{Ballot, BallotBox, Electorate, VoterId, VoterProfile};

let weights = CredentialWeights::from_entries([("COURSE_MOD_1", 3.0)])?;

let mut electorate = Electorate::new();
electorate.insert(VoterId::from("alice"), VoterProfile::holding(["COURSE_MOD_1"]));
electorate.insert(VoterId::from("bob"), VoterProfile::new());

let mut ballots = BallotBox::new();
ballots.insert(VoterId::from("alice"), Ballot::single("X"));
ballots.insert(VoterId::from("bob"), Ballot::single("Y"));

let mechanism = SingleChoiceWeightedPlurality::new(weights);
let tally = mechanism.calculate(&electorate, &ballots)?;

assert_eq!(tally.winner.as_str(), "X");
# Ok::<(), laurel_engine::EngineError>(())
```
*/

pub mod error;
pub mod group_hug;
pub mod mechanism;
pub mod metrics;
pub mod normalize;
pub mod plurality;
pub mod quadratic;
pub mod rank_and_slide;
pub mod weighting;

pub use error::{EngineError, Result};
pub use group_hug::{GroupHug, GroupHugConfig, GroupScoring, StakeholderGroup, TieBreakStage};
pub use mechanism::{argmax, eligible, zeroed_scores, VotingMechanism};
pub use normalize::{normalize_allocation, to_percentages};
pub use plurality::{PercentageAllocationWeightedPlurality, SingleChoiceWeightedPlurality};
pub use quadratic::QuadraticCredibility;
pub use rank_and_slide::RankAndSlide;
pub use weighting::{CredentialWeights, DEFAULT_POINT_BUDGET};
