//! Receipt handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use domain_receipt::{ReceiptError, ReceiptForm, ReceiptSummary, ReceiptValidator, SubmitOutcome};

use crate::{AppState, Session, error::ApiError};
use crate::dto::receipt::*;

/// Lists every receipt with its display totals
pub async fn list_receipts(
    State(state): State<AppState>,
) -> Result<Json<ReceiptListResponse>, ApiError> {
    let session = state.session.read().await;
    let receipts = ReceiptSummary::for_all(session.book.receipts(), &session.rate)?;
    Ok(Json(ReceiptListResponse {
        count: receipts.len(),
        receipts,
    }))
}

/// Gets one receipt's display totals
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ReceiptSummary>, ApiError> {
    let session = state.session.read().await;
    let receipt = session
        .book
        .get(index)
        .ok_or(ReceiptError::IndexOutOfRange { index, len: session.book.len() })?;
    Ok(Json(ReceiptSummary::from_receipt(index, receipt, &session.rate)?))
}

/// Gets the entry form pre-filled from a stored receipt, in its entered currency
pub async fn get_receipt_form(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ReceiptForm>, ApiError> {
    let session = state.session.read().await;
    let receipt = session
        .book
        .get(index)
        .ok_or(ReceiptError::IndexOutOfRange { index, len: session.book.len() })?;
    Ok(Json(ReceiptForm::from_receipt(receipt)))
}

/// Submits a new receipt
///
/// Returns 422 with every validation message when the receipt is rejected.
pub async fn create_receipt(
    State(state): State<AppState>,
    Json(form): Json<ReceiptForm>,
) -> Result<(StatusCode, Json<SubmitReceiptResponse>), ApiError> {
    let mut session = state.session.write().await;
    let rate = session.rate;
    let outcome = session.book.submit(&form, &rate)?;
    let response = submit_response(&session, outcome)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Replaces the receipt at `index` with a validated form
pub async fn replace_receipt(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(form): Json<ReceiptForm>,
) -> Result<Json<SubmitReceiptResponse>, ApiError> {
    let mut session = state.session.write().await;
    let rate = session.rate;

    // Missing positions are reported before the form is validated
    let len = session.book.len();
    if index >= len {
        return Err(ReceiptError::IndexOutOfRange { index, len }.into());
    }

    let receipt = ReceiptValidator::accept(&form, &rate)?;
    session.book.replace(index, receipt)?;
    let response = submit_response(&session, SubmitOutcome::Replaced(index))?;
    Ok(Json(response))
}

/// Removes the receipt at `index`; later receipts move up one position
pub async fn delete_receipt(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.session.write().await;
    session.book.remove(index)?;
    Ok(StatusCode::NO_CONTENT)
}

fn submit_response(
    session: &Session,
    outcome: SubmitOutcome,
) -> Result<SubmitReceiptResponse, ApiError> {
    let index = match outcome {
        SubmitOutcome::Added(index) | SubmitOutcome::Replaced(index) => index,
    };
    let receipt = session
        .book
        .get(index)
        .ok_or_else(|| ApiError::Internal(format!("Stored receipt {} is missing", index)))?;
    Ok(SubmitReceiptResponse::new(
        outcome,
        ReceiptSummary::from_receipt(index, receipt, &session.rate)?,
    ))
}
