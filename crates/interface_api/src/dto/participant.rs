//! Participant DTOs

use serde::{Deserialize, Serialize};

use core_kernel::ParticipantName;
use domain_receipt::Roster;

/// Replaces the roster from comma-separated names, e.g. "Ann, Bo, Cy"
#[derive(Debug, Deserialize)]
pub struct UpdateParticipantsRequest {
    pub names: String,
}

#[derive(Debug, Serialize)]
pub struct ParticipantsResponse {
    pub names: Vec<ParticipantName>,
    /// The roster as comma-separated input
    pub input: String,
}

impl From<&Roster> for ParticipantsResponse {
    fn from(roster: &Roster) -> Self {
        Self {
            names: roster.names().to_vec(),
            input: roster.to_input(),
        }
    }
}
