//! REST seam between the desk controller and a concrete HTTP transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser front end implements [`LoanApi`] over `gloo-net` and the
//! terminal front end over `reqwest`. Both share the endpoint paths, the CSRF
//! header contract and the error-message extraction defined here.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
use crate::model::{ApiMessage, Equipment, InitialData, NewLoan, PendingLoan, ReturnRequest};

pub const INITIAL_DATA_PATH: &str = "/api/initial-data";
pub const EQUIPMENT_PATH: &str = "/api/equipos";
pub const LOANS_PATH: &str = "/api/prestamos";

/// Header carrying the anti-forgery token on mutating calls.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// `name` of the `<meta>` tag holding the anti-forgery token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Fallback shown when a failed response carries no `error` message.
pub const UNKNOWN_ERROR: &str = "Error desconocido";

/// Loan REST operations used by [`crate::Desk`].
pub trait LoanApi {
    /// `GET /api/initial-data`
    async fn fetch_initial_data(&self) -> Result<InitialData, ApiError>;
    /// `GET /api/equipos`
    async fn fetch_equipment(&self) -> Result<Vec<Equipment>, ApiError>;
    /// `GET /api/prestamos`
    async fn fetch_pending(&self) -> Result<Vec<PendingLoan>, ApiError>;
    /// `POST /api/prestamos`; returns the server's success message.
    async fn create_loan(&self, loan: &NewLoan) -> Result<String, ApiError>;
    /// `POST /api/prestamos/{id}/devolver`; returns the server's success message.
    async fn return_loan(&self, loan_id: i64, request: &ReturnRequest) -> Result<String, ApiError>;
}

#[must_use]
pub fn return_endpoint(loan_id: i64) -> String {
    format!("{LOANS_PATH}/{loan_id}/devolver")
}

/// Message to surface for a non-success response: the server `error` field
/// when the body carries one, otherwise [`UNKNOWN_ERROR`].
#[must_use]
pub fn failure_message(body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|message| message.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_owned())
}

/// Interpret the body of a mutating call.
///
/// # Errors
///
/// [`ApiError::Status`] with the server message for non-2xx statuses.
pub fn mutation_outcome(status: u16, body: &str) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, message: failure_message(body) });
    }
    let message = serde_json::from_str::<ApiMessage>(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(message.success.unwrap_or_default())
}

/// Check the status of a read call before its body is parsed.
///
/// # Errors
///
/// [`ApiError::Status`] for non-2xx statuses.
pub fn ensure_success(status: u16, path: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, message: format!("{path} failed: {status}") })
    }
}
