//! # Error Types
//!
//! Building an [`Enumeration`](crate::Enumeration) never fails. Errors only
//! arise when looking up a name or ordinal that has no member.

use thiserror::Error;

/// Top-level error type for govkit enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovkitError {
    /// The name is not a member of the enumeration.
    #[error("unknown {enumeration} member: {name:?}")]
    UnknownMember {
        /// Name of the enumeration that was searched.
        enumeration: String,
        /// The name that was not found.
        name: String,
    },

    /// No member carries this ordinal.
    #[error("ordinal {ordinal} is out of range for {enumeration}")]
    OrdinalOutOfRange {
        /// Name of the enumeration that was searched.
        enumeration: String,
        /// The ordinal that was not found.
        ordinal: usize,
    },
}
