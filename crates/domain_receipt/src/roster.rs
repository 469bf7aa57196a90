//! Participant roster
//!
//! The roster is the list of names offered when entering receipts. It is
//! parsed from comma-separated input and never consulted by validation.

use serde::{Deserialize, Serialize};

use core_kernel::ParticipantName;

/// Ordered list of distinct participant names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<ParticipantName>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses comma-separated names, trimming each and dropping blanks and repeats
    pub fn parse(input: &str) -> Self {
        let mut roster = Self::new();
        for name in input.split(',') {
            roster.add(name);
        }
        roster
    }

    /// Adds a trimmed name; returns false if it was blank or already present
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(ParticipantName::new(name));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.as_str() == name)
    }

    pub fn names(&self) -> &[ParticipantName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Formats the roster back into comma-separated input
    pub fn to_input(&self) -> String {
        self.names
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
