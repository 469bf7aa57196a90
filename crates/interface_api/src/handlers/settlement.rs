//! Settlement handlers

use axum::{extract::State, Json};

use domain_settlement::SettlementEngine;

use crate::AppState;
use crate::dto::settlement::SettlementResponse;

/// Computes balances and payments for every stored receipt
pub async fn get_settlement(State(state): State<AppState>) -> Json<SettlementResponse> {
    let receipts = state.session.read().await.book.snapshot();
    let report = SettlementEngine::compute(&receipts);
    Json(SettlementResponse::from(report))
}
