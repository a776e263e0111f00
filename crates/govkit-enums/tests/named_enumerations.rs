//! # Named Enumeration Tests
//!
//! Exercises the crate the way fixture code consumes it: through the
//! re-exported statics and typed enums only.

use std::thread;

use govkit_enums::{
    enumeration, Enumeration, Member, ProposalState, VoteType, PROPOSAL_STATE,
    PROPOSAL_STATE_COUNT, VOTE_TYPE, VOTE_TYPE_COUNT,
};

#[test]
fn test_proposal_state_exports() {
    assert_eq!(PROPOSAL_STATE.len(), PROPOSAL_STATE_COUNT);
    assert_eq!(PROPOSAL_STATE.get("Pending"), Some(0));
    assert_eq!(PROPOSAL_STATE.get("Active"), Some(1));
    assert_eq!(PROPOSAL_STATE.get("Executed"), Some(7));
}

#[test]
fn test_vote_type_exports() {
    assert_eq!(VOTE_TYPE.len(), VOTE_TYPE_COUNT);
    assert_eq!(VOTE_TYPE.get("Against"), Some(0));
    assert_eq!(VOTE_TYPE.get("For"), Some(1));
    assert_eq!(VOTE_TYPE.get("Abstain"), Some(2));
}

#[test]
fn test_statics_match_factory_output() {
    let proposal = enumeration![
        "Pending",
        "Active",
        "Canceled",
        "Defeated",
        "Succeeded",
        "Queued",
        "Expired",
        "Executed",
    ];
    assert_eq!(*PROPOSAL_STATE, proposal);
    assert_eq!(*VOTE_TYPE, enumeration!["Against", "For", "Abstain"]);
}

#[test]
fn test_contract_value_decodes_to_typed_state() {
    // A governor's `state(proposalId)` call returns the raw ordinal.
    let raw: usize = 4;
    let state = ProposalState::try_from(raw).unwrap();
    assert_eq!(state, ProposalState::Succeeded);
    assert_eq!(PROPOSAL_STATE.name_of(raw), Some("Succeeded"));
}

#[test]
fn test_concurrent_readers_see_same_mapping() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let states: &'static Enumeration = ProposalState::enumeration();
                let votes: &'static Enumeration = VoteType::enumeration();
                (
                    states as *const Enumeration as usize,
                    states.iter().map(|(n, o)| (n.to_string(), o)).collect::<Vec<_>>(),
                    votes.get("Abstain"),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let (first_addr, first_pairs, _) = &results[0];
    for (addr, pairs, abstain) in &results {
        assert_eq!(addr, first_addr);
        assert_eq!(pairs, first_pairs);
        assert_eq!(*abstain, Some(2));
    }
}
