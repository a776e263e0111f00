//! # Vote Type
//!
//! The three choices a voter may cast: Against(0), For(1), Abstain(2).

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::enumeration::Enumeration;
use crate::error::GovkitError;
use crate::member::{build_enumeration, Member};

/// Number of vote types.
pub const VOTE_TYPE_COUNT: usize = 3;

/// Process-wide name → ordinal mapping of [`VoteType`].
pub static VOTE_TYPE: LazyLock<Enumeration> = LazyLock::new(build_enumeration::<VoteType>);

/// A vote choice. Discriminants are the ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VoteType {
    Against = 0,
    For = 1,
    Abstain = 2,
}

impl VoteType {
    pub fn all() -> &'static [VoteType] {
        &[Self::Against, Self::For, Self::Abstain]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Against => "Against",
            Self::For => "For",
            Self::Abstain => "Abstain",
        }
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl Member for VoteType {
    const ENUMERATION: &'static str = "VoteType";

    fn all() -> &'static [Self] {
        VoteType::all()
    }

    fn as_str(&self) -> &'static str {
        VoteType::as_str(self)
    }

    fn ordinal(&self) -> usize {
        VoteType::ordinal(self)
    }

    fn enumeration() -> &'static Enumeration {
        &VOTE_TYPE
    }
}

impl std::fmt::Display for VoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = GovkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

impl TryFrom<usize> for VoteType {
    type Error = GovkitError;

    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}
