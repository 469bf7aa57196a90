//! Participant roster handlers

use axum::{extract::State, Json};
use tracing::info;

use domain_receipt::Roster;

use crate::AppState;
use crate::dto::participant::*;

/// Lists the participant roster
pub async fn list_participants(State(state): State<AppState>) -> Json<ParticipantsResponse> {
    let session = state.session.read().await;
    Json(ParticipantsResponse::from(&session.roster))
}

/// Replaces the roster with parsed comma-separated names
///
/// Receipts already entered are left alone, even if they name people no
/// longer on the roster.
pub async fn replace_participants(
    State(state): State<AppState>,
    Json(request): Json<UpdateParticipantsRequest>,
) -> Json<ParticipantsResponse> {
    let roster = Roster::parse(&request.names);
    let mut session = state.session.write().await;
    session.roster = roster;
    info!(participants = session.roster.len(), "Roster replaced");
    Json(ParticipantsResponse::from(&session.roster))
}
