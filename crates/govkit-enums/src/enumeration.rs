//! # Enumeration Factory
//!
//! Turns an ordered list of names into an immutable name → ordinal mapping.
//! Ordinals are the zero-based positions of the names in the input.
//!
//! ## Duplicate Names
//!
//! Duplicates are accepted. The later occurrence's ordinal replaces the
//! earlier one, so `["A", "A"]` yields `{A: 1}`. The member keeps the
//! iteration slot of its first occurrence. Each overwrite emits a `warn`
//! event, since a repeated name in a fixture is almost always a typo.
//!
//! ## Example
//!
//! ```
//! use govkit_enums::{enumeration, Enumeration};
//!
//! let states = enumeration!["Open", "Closed"];
//! assert_eq!(states.get("Closed"), Some(1));
//! assert_eq!(states, Enumeration::new(vec!["Open".to_string(), "Closed".to_string()]));
//! ```

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::GovkitError;

const DEFAULT_LABEL: &str = "enumeration";

/// An immutable mapping from member name to ordinal.
///
/// Equality compares content only: two enumerations are equal when they
/// hold the same names with the same ordinals, regardless of label or
/// iteration order.
#[derive(Debug, Clone)]
pub struct Enumeration {
    label: String,
    /// Members in first-occurrence order.
    members: Vec<(String, usize)>,
    /// Name → slot in `members`.
    slots: HashMap<String, usize>,
}

impl Default for Enumeration {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            members: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl Enumeration {
    /// Build an enumeration, assigning each name its position in `names`.
    ///
    /// Never fails. An empty input yields an empty enumeration.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut enumeration = Self::default();
        for (ordinal, name) in names.into_iter().enumerate() {
            enumeration.assign(name.into(), ordinal);
        }
        enumeration
    }

    /// Attach a label used in error messages and log events.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    fn assign(&mut self, name: String, ordinal: usize) {
        if let Some(member) = self
            .slots
            .get(&name)
            .and_then(|&slot| self.members.get_mut(slot))
        {
            let previous = std::mem::replace(&mut member.1, ordinal);
            tracing::warn!(
                member = %name,
                previous,
                ordinal,
                "duplicate enumeration member; later ordinal wins"
            );
            return;
        }
        self.slots.insert(name.clone(), self.members.len());
        self.members.push((name, ordinal));
    }

    /// The label of this enumeration ("enumeration" unless set).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The ordinal of `name`, if it is a member.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots
            .get(name)
            .and_then(|&slot| self.members.get(slot))
            .map(|(_, ordinal)| *ordinal)
    }

    /// The ordinal of `name`, or [`GovkitError::UnknownMember`].
    pub fn ordinal(&self, name: &str) -> Result<usize, GovkitError> {
        self.get(name).ok_or_else(|| GovkitError::UnknownMember {
            enumeration: self.label.clone(),
            name: name.to_string(),
        })
    }

    /// Reverse lookup: the member carrying `ordinal`.
    pub fn name_of(&self, ordinal: usize) -> Option<&str> {
        self.members
            .iter()
            .find(|(_, o)| *o == ordinal)
            .map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `(name, ordinal)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.members
            .iter()
            .map(|(name, ordinal)| (name.as_str(), *ordinal))
    }

    /// Member names in first-occurrence order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for Enumeration {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, ordinal)| other.get(name) == Some(ordinal))
    }
}

impl Eq for Enumeration {}

impl<S: Into<String>> FromIterator<S> for Enumeration {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Serialize for Enumeration {
    /// Serializes as an object in iteration order, e.g. `{"For":1}`.
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, ordinal) in self.iter() {
            map.serialize_entry(name, &ordinal)?;
        }
        map.end()
    }
}

/// Build an [`Enumeration`] from a literal list of names.
///
/// `enumeration!["A", "B"]` is `Enumeration::new(["A", "B"])`, and
/// `enumeration![]` is the empty enumeration.
#[macro_export]
macro_rules! enumeration {
    () => {
        $crate::Enumeration::default()
    };
    ($($name:expr),+ $(,)?) => {
        $crate::Enumeration::new([$($name),+])
    };
}
