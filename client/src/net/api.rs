//! REST API transport for the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with
//! [`UNAVAILABLE`] since these endpoints are only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Reference fetches are rejected on non-2xx status before their body is
//! parsed. Mutating calls send the CSRF token read at startup and surface the
//! server's `error` message on failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use desk::api::{EQUIPMENT_PATH, INITIAL_DATA_PATH, LOANS_PATH, LoanApi, return_endpoint};
use desk::{ApiError, Equipment, InitialData, NewLoan, PendingLoan, ReturnRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Message of the transport error returned outside the browser.
pub const UNAVAILABLE: &str = "not available outside the browser";

/// `LoanApi` over the page's own origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserApi {
    csrf_token: Option<String>,
}

impl BrowserApi {
    #[must_use]
    pub fn new(csrf_token: Option<String>) -> Self {
        Self { csrf_token }
    }

    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::post(path);
            if let Some(token) = &self.csrf_token {
                request = request.header(desk::api::CSRF_HEADER, token);
            }
            let resp = request
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            desk::api::mutation_outcome(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        desk::api::ensure_success(resp.status(), path)?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Transport(UNAVAILABLE.to_owned()))
    }
}

impl LoanApi for BrowserApi {
    async fn fetch_initial_data(&self) -> Result<InitialData, ApiError> {
        get_json(INITIAL_DATA_PATH).await
    }

    async fn fetch_equipment(&self) -> Result<Vec<Equipment>, ApiError> {
        get_json(EQUIPMENT_PATH).await
    }

    async fn fetch_pending(&self) -> Result<Vec<PendingLoan>, ApiError> {
        get_json(LOANS_PATH).await
    }

    async fn create_loan(&self, loan: &NewLoan) -> Result<String, ApiError> {
        self.post_json(LOANS_PATH, loan).await
    }

    async fn return_loan(&self, loan_id: i64, request: &ReturnRequest) -> Result<String, ApiError> {
        self.post_json(&return_endpoint(loan_id), request).await
    }
}
