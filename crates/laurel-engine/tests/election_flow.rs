//! Decision-engine integration tests
//!
//! Exercises the mechanisms end-to-end over one shared electorate:
//! - Mechanism interchangeability behind the trait object
//! - Full candidate coverage in every score breakdown
//! - Percentage normalization bounds
//! - Determinism of repeated calculation
//! - The tie-break cascade under the full four-group configuration

use laurel_engine::{
    to_percentages, CredentialWeights, GroupHug, GroupHugConfig, GroupScoring,
    PercentageAllocationWeightedPlurality, QuadraticCredibility, RankAndSlide,
    SingleChoiceWeightedPlurality, StakeholderGroup, VotingMechanism,
};
use laurel_types::{Ballot, BallotBox, CandidateId, CredentialId, Electorate, VoterId, VoterProfile};

fn weights() -> CredentialWeights {
    CredentialWeights::from_entries([
        ("AUTHOR", 20.0),
        ("FELLOW", 16.0),
        ("COURSE_1", 7.0),
        ("COURSE_2", 7.0),
        ("SESSION_1", 10.0),
    ])
    .unwrap()
}

fn group_config() -> GroupHugConfig {
    GroupHugConfig {
        credential_weights: weights(),
        experts: StakeholderGroup::new(
            "experts",
            ["AUTHOR", "FELLOW"],
            1.0,
            GroupScoring::OnePersonOneVote,
        ),
        intellectuals: StakeholderGroup::new(
            "intellectuals",
            ["COURSE_1", "COURSE_2"],
            1.0,
            GroupScoring::CredentialWeighted,
        ),
        participants: StakeholderGroup::new(
            "participants",
            ["SESSION_1"],
            1.0,
            GroupScoring::CredentialWeighted,
        ),
        community: StakeholderGroup::new(
            "community",
            Vec::<CredentialId>::new(),
            1.0,
            GroupScoring::OnePersonOneVote,
        ),
    }
}

fn electorate() -> Electorate {
    let mut voters = Electorate::new();
    voters.insert(
        VoterId::from("fellow"),
        VoterProfile::holding(["FELLOW", "COURSE_1"]),
    );
    voters.insert(
        VoterId::from("author"),
        VoterProfile::holding(["AUTHOR", "COURSE_1", "COURSE_2"]),
    );
    voters.insert(VoterId::from("student1"), VoterProfile::holding(["COURSE_1"]));
    voters.insert(
        VoterId::from("student2"),
        VoterProfile::holding(["COURSE_2", "SESSION_1"]),
    );
    voters.insert(VoterId::from("host"), VoterProfile::holding(["SESSION_1"]));
    voters.insert(VoterId::from("lurker"), VoterProfile::new());
    voters
}

fn single_choice_ballots() -> BallotBox {
    let mut ballots = BallotBox::new();
    ballots.insert(VoterId::from("fellow"), Ballot::single("X"));
    ballots.insert(VoterId::from("author"), Ballot::single("X"));
    ballots.insert(VoterId::from("student1"), Ballot::single("Y"));
    ballots.insert(VoterId::from("student2"), Ballot::single("Y"));
    ballots.insert(VoterId::from("host"), Ballot::single("X"));
    ballots.insert(VoterId::from("lurker"), Ballot::single("Y"));
    ballots
}

#[test]
fn test_single_choice_mechanisms_are_interchangeable() {
    let voters = electorate();
    let ballots = single_choice_ballots();

    let mechanisms: Vec<Box<dyn VotingMechanism>> = vec![
        Box::new(SingleChoiceWeightedPlurality::new(weights())),
        Box::new(GroupHug::new(group_config()).unwrap()),
    ];

    for mechanism in &mechanisms {
        let tally = mechanism
            .calculate(&voters, &ballots)
            .unwrap_or_else(|e| panic!("{} failed: {}", mechanism.name(), e));

        // Every ballot target is present in the breakdown
        for candidate in ["X", "Y"] {
            assert!(
                tally.scores.contains_key(&CandidateId::from(candidate)),
                "{} left {} unscored",
                mechanism.name(),
                candidate
            );
        }
    }
}

#[test]
fn test_repeated_calculation_is_deterministic() {
    let voters = electorate();
    let ballots = single_choice_ballots();
    let mechanism = GroupHug::new(group_config()).unwrap();

    let first = mechanism.calculate(&voters, &ballots).unwrap();
    let second = mechanism.calculate(&voters, &ballots).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_percentage_allocation_end_to_end() {
    let voters = electorate();

    let mut ballots = BallotBox::new();
    ballots.insert(VoterId::from("fellow"), Ballot::allocation([("X", 1.0)]));
    ballots.insert(
        VoterId::from("author"),
        Ballot::allocation([("X", 0.5), ("Y", 0.5)]),
    );
    ballots.insert(VoterId::from("student1"), Ballot::allocation([("Y", 1.0)]));
    ballots.insert(VoterId::from("student2"), Ballot::allocation([("Y", 1.0)]));
    ballots.insert(VoterId::from("host"), Ballot::allocation([("X", 1.0)]));
    ballots.insert(VoterId::from("lurker"), Ballot::allocation([("Y", 1.0)]));

    let mechanism = PercentageAllocationWeightedPlurality::new(weights());
    let tally = mechanism.calculate(&voters, &ballots).unwrap();

    // fellow 23 + half of author's 34 + host 10 = 50 for X;
    // half of author's 34 + student1 7 + student2 17 + lurker 0 = 41 for Y
    assert!((tally.score_of(&CandidateId::from("X")) - 50.0).abs() < 1e-9);
    assert!((tally.score_of(&CandidateId::from("Y")) - 41.0).abs() < 1e-9);
    assert_eq!(tally.winner, CandidateId::from("X"));

    // Normalizing any raw breakdown yields percentages summing to 100
    let percentages = to_percentages(&tally.scores);
    let total: f64 = percentages.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_rank_and_slide_spends_the_whole_budget() {
    let voters = electorate();

    let mut ballots = BallotBox::new();
    ballots.insert(VoterId::from("fellow"), Ballot::allocation([("X", 1.0)]));
    ballots.insert(
        VoterId::from("author"),
        Ballot::allocation([("X", 1.0), ("Y", 3.0)]),
    );
    ballots.insert(VoterId::from("student1"), Ballot::allocation([("Y", 1.0)]));
    ballots.insert(VoterId::from("student2"), Ballot::allocation([("Y", 1.0)]));
    ballots.insert(VoterId::from("host"), Ballot::allocation([("X", 1.0)]));

    let mechanism = RankAndSlide::new(weights());
    let tally = mechanism.calculate(&voters, &ballots).unwrap();

    // The lurker holds no weighted credential and cast no ballot, so the
    // full 10,000-point budget lands on the candidates
    let total: f64 = tally.scores.values().sum();
    assert!((total - 10_000.0).abs() < 1e-6);
    assert_eq!(tally.winner, CandidateId::from("Y"));
}

#[test]
fn test_quadratic_favors_broad_support() {
    let voters = electorate();

    let mut ballots = BallotBox::new();
    ballots.insert(VoterId::from("fellow"), Ballot::allocation([("X", 4.0)]));
    ballots.insert(
        VoterId::from("author"),
        Ballot::allocation([("X", 1.0), ("Y", 9.0)]),
    );
    ballots.insert(VoterId::from("student1"), Ballot::allocation([("Y", 1.0)]));
    ballots.insert(VoterId::from("student2"), Ballot::allocation([("X", 1.0)]));
    ballots.insert(VoterId::from("host"), Ballot::allocation([("Y", 4.0)]));

    let mechanism = QuadraticCredibility::new();
    let tally = mechanism.calculate(&voters, &ballots).unwrap();

    assert!((tally.score_of(&CandidateId::from("X")) - 16.0).abs() < 1e-9);
    assert!((tally.score_of(&CandidateId::from("Y")) - 36.0).abs() < 1e-9);
    assert_eq!(tally.winner, CandidateId::from("Y"));
}

#[test]
fn test_candidate_exclusion_holds_across_mechanisms() {
    let mut voters = electorate();
    // A heavily credentialed candidate who also tries to vote
    voters.insert(
        VoterId::from("X"),
        VoterProfile::holding(["AUTHOR", "FELLOW", "COURSE_1", "SESSION_1"]).as_candidate(),
    );

    let mut ballots = single_choice_ballots();
    ballots.insert(VoterId::from("X"), Ballot::single("X"));

    let with_candidate_vote = SingleChoiceWeightedPlurality::new(weights())
        .calculate(&voters, &ballots)
        .unwrap();

    let mut honest_ballots = single_choice_ballots();
    honest_ballots.insert(VoterId::from("X"), Ballot::single("X"));
    let mut honest_voters = electorate();
    honest_voters.insert(
        VoterId::from("X"),
        VoterProfile::new().as_candidate(),
    );
    let without_credentials = SingleChoiceWeightedPlurality::new(weights())
        .calculate(&honest_voters, &honest_ballots)
        .unwrap();

    // The candidate's credentials change nothing; their ballot never lands
    assert_eq!(with_candidate_vote.scores, without_credentials.scores);
}

#[test]
fn test_cascade_resolves_through_experts_with_full_config() {
    let mut voters = Electorate::new();
    for expert in ["e1", "e2", "e3"] {
        voters.insert(VoterId::from(expert), VoterProfile::holding(["FELLOW"]));
    }
    for plain in ["c1", "c2", "c3"] {
        voters.insert(VoterId::from(plain), VoterProfile::new());
    }

    let mut ballots = BallotBox::new();
    ballots.insert(VoterId::from("e1"), Ballot::single("X"));
    ballots.insert(VoterId::from("e2"), Ballot::single("X"));
    ballots.insert(VoterId::from("e3"), Ballot::single("Y"));
    ballots.insert(VoterId::from("c1"), Ballot::single("Y"));
    ballots.insert(VoterId::from("c2"), Ballot::single("Y"));
    ballots.insert(VoterId::from("c3"), Ballot::single("Y"));

    let mechanism = GroupHug::new(group_config()).unwrap();
    let tally = mechanism.calculate(&voters, &ballots).unwrap();

    // Experts 2:1 for X, community 2:1 against; the aggregate ties and
    // the expert fallback decides
    assert_eq!(tally.winner, CandidateId::from("X"));
}
