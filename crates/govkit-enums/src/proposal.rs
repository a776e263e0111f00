//! # Proposal State
//!
//! The eight lifecycle stages of a governance proposal, in the order a
//! governor contract reports them.
//!
//! | # | State |
//! |---|-------|
//! | 0 | Pending |
//! | 1 | Active |
//! | 2 | Canceled |
//! | 3 | Defeated |
//! | 4 | Succeeded |
//! | 5 | Queued |
//! | 6 | Expired |
//! | 7 | Executed |
//!
//! This module only names the stages. Moving a proposal between them is
//! the job of the code under test.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::enumeration::Enumeration;
use crate::error::GovkitError;
use crate::member::{build_enumeration, Member};

/// Number of proposal states.
pub const PROPOSAL_STATE_COUNT: usize = 8;

/// Process-wide name → ordinal mapping of [`ProposalState`].
pub static PROPOSAL_STATE: LazyLock<Enumeration> =
    LazyLock::new(build_enumeration::<ProposalState>);

/// Lifecycle stage of a governance proposal.
///
/// Discriminants are the ordinals; serde uses the member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProposalState {
    /// Created; voting has not started.
    Pending = 0,
    /// Voting is open.
    Active = 1,
    /// Withdrawn before execution.
    Canceled = 2,
    /// Voting closed without quorum or majority.
    Defeated = 3,
    /// Voting closed in favour.
    Succeeded = 4,
    /// Waiting out the timelock.
    Queued = 5,
    /// Not executed within the grace period.
    Expired = 6,
    /// Carried out.
    Executed = 7,
}

impl ProposalState {
    /// All states in ordinal order.
    pub fn all() -> &'static [ProposalState] {
        &[
            Self::Pending,
            Self::Active,
            Self::Canceled,
            Self::Defeated,
            Self::Succeeded,
            Self::Queued,
            Self::Expired,
            Self::Executed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Canceled => "Canceled",
            Self::Defeated => "Defeated",
            Self::Succeeded => "Succeeded",
            Self::Queued => "Queued",
            Self::Expired => "Expired",
            Self::Executed => "Executed",
        }
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Whether a proposal in this state can never leave it.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Canceled | Self::Defeated | Self::Expired | Self::Executed
        )
    }
}

impl Member for ProposalState {
    const ENUMERATION: &'static str = "ProposalState";

    fn all() -> &'static [Self] {
        ProposalState::all()
    }

    fn as_str(&self) -> &'static str {
        ProposalState::as_str(self)
    }

    fn ordinal(&self) -> usize {
        ProposalState::ordinal(self)
    }

    fn enumeration() -> &'static Enumeration {
        &PROPOSAL_STATE
    }
}

impl std::fmt::Display for ProposalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalState {
    type Err = GovkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

impl TryFrom<usize> for ProposalState {
    type Error = GovkitError;

    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}
