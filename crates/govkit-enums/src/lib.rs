//! # govkit-enums — Ordinal Enumerations for Governance Fixtures
//!
//! Test code for governor contracts needs to talk about proposal states and
//! vote choices by the small integers the contract reports. This crate
//! provides those sets and the factory that builds them.
//!
//! ## Pieces
//!
//! - **Factory** (`enumeration.rs`): [`Enumeration::new`] and the
//!   [`enumeration!`] macro turn an ordered list of names into an immutable
//!   name → ordinal mapping. Duplicates resolve last-write-wins.
//!
//! - **Proposal state** (`proposal.rs`): [`ProposalState`] with the eight
//!   lifecycle stages, plus the process-wide [`PROPOSAL_STATE`] mapping.
//!
//! - **Vote type** (`vote.rs`): [`VoteType`] (Against, For, Abstain), plus
//!   the process-wide [`VOTE_TYPE`] mapping.
//!
//! Each fixed set exists twice: as a typed enum for compile-time checking,
//! and as a runtime [`Enumeration`] built by the factory on first access.
//! The [`Member`] trait ties the two together.
//!
//! ```
//! use govkit_enums::{ProposalState, VoteType, PROPOSAL_STATE, VOTE_TYPE};
//!
//! assert_eq!(PROPOSAL_STATE.get("Executed"), Some(7));
//! assert_eq!(ProposalState::Executed.ordinal(), 7);
//! assert_eq!(VOTE_TYPE.ordinal("Abstain").unwrap(), VoteType::Abstain.ordinal());
//! ```
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Library code logs through `tracing` and never installs a subscriber.

pub mod enumeration;
pub mod error;
pub mod member;
pub mod proposal;
pub mod vote;

pub use enumeration::Enumeration;
pub use error::GovkitError;
pub use member::Member;
pub use proposal::{ProposalState, PROPOSAL_STATE, PROPOSAL_STATE_COUNT};
pub use vote::{VoteType, VOTE_TYPE, VOTE_TYPE_COUNT};
