//! Currency and conversion rate handlers

use axum::{extract::State, Json};
use tracing::{info, warn};

use core_kernel::{ConversionRate, CurrencyCode};
use domain_receipt::ReceiptSummary;

use crate::{AppState, error::ApiError};
use crate::dto::currency::*;

/// Gets the foreign currency and rate used for new receipts
pub async fn get_currency(State(state): State<AppState>) -> Json<CurrencyResponse> {
    let session = state.session.read().await;
    Json(CurrencyResponse::new(session.currency.clone(), session.rate))
}

/// Sets the foreign currency and rate
///
/// Stored receipts keep the USD amounts they were converted to; only the
/// foreign column of USD receipts follows the new rate. A rate that would
/// push that column out of range is rejected and the old rate kept.
pub async fn update_currency(
    State(state): State<AppState>,
    Json(request): Json<UpdateCurrencyRequest>,
) -> Result<Json<CurrencyResponse>, ApiError> {
    let rate = ConversionRate::new(request.rate)?;
    let currency = CurrencyCode::parse(&request.currency);

    let mut session = state.session.write().await;
    if let Err(err) = ReceiptSummary::for_all(session.book.receipts(), &rate) {
        warn!(rate = %request.rate, error = %err, "Rate rejected for stored receipts");
        return Err(ApiError::BadRequest(format!(
            "Rate {} cannot be applied to the stored receipts: {}",
            request.rate, err
        )));
    }
    session.currency = currency.clone();
    session.rate = rate;
    info!(currency = %currency, rate = %rate, "Conversion rate updated");

    Ok(Json(CurrencyResponse::new(currency, rate)))
}
