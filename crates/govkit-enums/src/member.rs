//! # Typed Members
//!
//! A typed enumeration is a fieldless Rust enum whose discriminants equal
//! the ordinals of a process-wide [`Enumeration`]. The [`Member`] trait
//! gives generic access to both views.

use std::fmt;

use crate::enumeration::Enumeration;
use crate::error::GovkitError;

mod private {
    pub trait Sealed {}
    impl Sealed for crate::ProposalState {}
    impl Sealed for crate::VoteType {}
}

/// A member of one of the fixed governance enumerations.
///
/// Sealed. Only [`ProposalState`](crate::ProposalState) and
/// [`VoteType`](crate::VoteType) implement it.
pub trait Member: private::Sealed + Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Name of the enumeration, e.g. `"ProposalState"`.
    const ENUMERATION: &'static str;

    /// Every member, in ordinal order.
    fn all() -> &'static [Self];

    /// The member name, identical to its key in [`Member::enumeration`].
    fn as_str(&self) -> &'static str;

    /// Zero-based declaration position.
    fn ordinal(&self) -> usize;

    /// The process-wide runtime mapping for this enumeration.
    fn enumeration() -> &'static Enumeration;

    fn from_ordinal(ordinal: usize) -> Result<Self, GovkitError> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.ordinal() == ordinal)
            .ok_or_else(|| GovkitError::OrdinalOutOfRange {
                enumeration: Self::ENUMERATION.to_string(),
                ordinal,
            })
    }

    /// Parse a member from its exact, case-sensitive name.
    fn parse_name(name: &str) -> Result<Self, GovkitError> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.as_str() == name)
            .ok_or_else(|| GovkitError::UnknownMember {
                enumeration: Self::ENUMERATION.to_string(),
                name: name.to_string(),
            })
    }
}

/// Run the factory over a typed enumeration's member names.
///
/// Backs the `LazyLock` statics, so it runs once per enumeration.
pub(crate) fn build_enumeration<M: Member>() -> Enumeration {
    let enumeration =
        Enumeration::new(M::all().iter().map(|member| member.as_str())).labeled(M::ENUMERATION);
    tracing::debug!(
        enumeration = M::ENUMERATION,
        members = enumeration.len(),
        "initialized process-wide enumeration"
    );
    enumeration
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProposalState, VoteType};

    fn assert_views_agree<M: Member>() {
        let enumeration = M::enumeration();
        assert_eq!(enumeration.len(), M::all().len());
        assert_eq!(enumeration.label(), M::ENUMERATION);
        for member in M::all() {
            assert_eq!(enumeration.get(member.as_str()), Some(member.ordinal()));
            assert_eq!(enumeration.name_of(member.ordinal()), Some(member.as_str()));
            assert_eq!(M::from_ordinal(member.ordinal()).unwrap(), *member);
            assert_eq!(M::parse_name(member.as_str()).unwrap(), *member);
        }
    }

    #[test]
    fn test_proposal_state_views_agree() {
        assert_views_agree::<ProposalState>();
    }

    #[test]
    fn test_vote_type_views_agree() {
        assert_views_agree::<VoteType>();
    }

    #[test]
    fn test_all_is_in_ordinal_order() {
        for (i, state) in ProposalState::all().iter().enumerate() {
            assert_eq!(state.ordinal(), i);
        }
        for (i, vote) in VoteType::all().iter().enumerate() {
            assert_eq!(vote.ordinal(), i);
        }
    }

    #[test]
    fn test_build_is_repeatable() {
        assert_eq!(
            build_enumeration::<VoteType>(),
            build_enumeration::<VoteType>()
        );
    }
}
