//! # Request Handlers
//!
//! Axum request handlers for the shipping quote API. The storefront
//! posts a cart snapshot and receives one rate per registered method.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use ship_core::{CartSnapshot, ShippingError, ShippingRate};
use tracing::{info, instrument};
use uuid::Uuid;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Quote request carrying the storefront's cart snapshot
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Cart state at calculation time
    pub cart: CartSnapshot,
}

/// Quote response
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// Generated quote id
    pub quote_id: String,
    /// When the quote was produced (RFC 3339)
    pub quoted_at: String,
    /// One rate per quoted method
    pub rates: Vec<ShippingRate>,
    /// Number of rates
    pub count: usize,
}

/// Method summary returned by the listing endpoints
#[derive(Debug, Serialize)]
pub struct MethodSummary {
    /// Method id
    pub id: String,
    /// Checkout title
    pub title: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn shipping_error_to_response(err: ShippingError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn quote_response(rates: Vec<ShippingRate>) -> QuoteResponse {
    QuoteResponse {
        quote_id: Uuid::new_v4().to_string(),
        quoted_at: Utc::now().to_rfc3339(),
        count: rates.len(),
        rates,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "curbside",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Quote shipping for a cart across all registered methods
#[instrument(skip(state, request), fields(items = request.cart.items.len()))]
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let cart = request.cart;

    let rates: Vec<ShippingRate> = state
        .methods
        .methods()
        .map(|method| method.calculate(&cart))
        .collect();

    info!(
        "Quoted {} rate(s): {} shippable unit(s), contents {}",
        rates.len(),
        cart.shippable_units(),
        cart.contents_cost.display()
    );

    Json(quote_response(rates))
}

/// Quote a single shipping method by id
#[instrument(skip(state, request), fields(method_id = %method_id))]
pub async fn quote_for_method(
    State(state): State<AppState>,
    Path(method_id): Path<String>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let method = state.methods.get(&method_id).ok_or_else(|| {
        shipping_error_to_response(ShippingError::MethodNotFound {
            method_id: method_id.clone(),
        })
    })?;

    let rate = method.calculate(&request.cart);

    info!("Quoted {}: {}", rate.id, rate.cost.display());

    Ok(Json(quote_response(vec![rate])))
}

/// List registered shipping methods
pub async fn list_methods(State(state): State<AppState>) -> impl IntoResponse {
    let methods: Vec<MethodSummary> = state
        .methods
        .methods()
        .map(|method| MethodSummary {
            id: method.id().to_string(),
            title: method.title(),
        })
        .collect();

    Json(serde_json::json!({
        "methods": methods,
        "count": methods.len()
    }))
}

/// Get a single shipping method
pub async fn get_method(
    State(state): State<AppState>,
    Path(method_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let method = state.methods.get(&method_id).ok_or_else(|| {
        shipping_error_to_response(ShippingError::MethodNotFound {
            method_id: method_id.clone(),
        })
    })?;

    Ok(Json(MethodSummary {
        id: method.id().to_string(),
        title: method.title(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
        assert!(err.details.is_none());

        let err = err.with_details("more context");
        assert_eq!(err.details.as_deref(), Some("more context"));
    }

    #[test]
    fn test_shipping_error_conversion() {
        let err = ShippingError::MethodNotFound {
            method_id: "flat_rate".to_string(),
        };
        let (status, _json) = shipping_error_to_response(err);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_quote_request_wire_shape() {
        let request: QuoteRequest = serde_json::from_value(serde_json::json!({
            "cart": {
                "currency": "usd",
                "contents_cost": { "amount": 2500, "currency": "usd" }
            }
        }))
        .unwrap();

        assert_eq!(request.cart.contents_cost.amount, 2500);
        assert!(request.cart.items.is_empty());
    }
}
