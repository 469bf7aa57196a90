//! HTTP API Layer
//!
//! This crate provides the REST API for entering receipts and settling them
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for participants, receipts, currency and settlement
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! All mutable data lives in one [`Session`] behind a single lock. Writers
//! take the write lock; settlement clones the receipts under the read lock
//! and computes without holding it.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config)?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::{ConversionRate, CoreError, CurrencyCode};
use domain_receipt::{ReceiptBook, Roster};

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{currency, health, participants, receipts, settlement};

/// Everything one group of people has entered so far
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub book: ReceiptBook,
    pub roster: Roster,
    /// Foreign currency offered for entry
    pub currency: CurrencyCode,
    /// Current "1 USD = rate foreign" rate
    pub rate: ConversionRate,
}

impl Session {
    /// Creates an empty session with the configured currency and rate
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` if the configured rate is negative
    pub fn from_config(config: &ApiConfig) -> Result<Self, CoreError> {
        Ok(Self {
            book: ReceiptBook::new(),
            roster: Roster::new(),
            currency: config.currency(),
            rate: config.conversion_rate()?,
        })
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
///
/// # Errors
///
/// Returns `CoreError::InvalidRate` if the configured conversion rate is negative
pub fn create_router(config: ApiConfig) -> Result<Router, CoreError> {
    let session = Session::from_config(&config)?;
    let state = AppState {
        session: Arc::new(RwLock::new(session)),
        config,
    };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Receipt routes
    let receipt_routes = Router::new()
        .route("/", get(receipts::list_receipts).post(receipts::create_receipt))
        .route(
            "/:index",
            get(receipts::get_receipt)
                .put(receipts::replace_receipt)
                .delete(receipts::delete_receipt),
        )
        .route("/:index/form", get(receipts::get_receipt_form));

    let api_routes = Router::new()
        .route(
            "/participants",
            get(participants::list_participants).put(participants::replace_participants),
        )
        .route(
            "/currency",
            get(currency::get_currency).put(currency::update_currency),
        )
        .nest("/receipts", receipt_routes)
        .route("/settlement", get(settlement::get_settlement))
        .layer(axum_middleware::from_fn(audit_middleware));

    Ok(Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state))
}
