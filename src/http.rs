//! `reqwest` transport for the loan REST API.
//!
//! Keeps a cookie session so the CSRF token scraped from `/` stays valid for
//! the mutating calls that follow. Response handling reuses the shared
//! helpers in `desk::api`, so both front ends report failures identically.

use std::time::Duration;

use desk::api::{
    CSRF_HEADER, EQUIPMENT_PATH, INITIAL_DATA_PATH, LOANS_PATH, LoanApi, ensure_success, mutation_outcome,
    return_endpoint,
};
use desk::{ApiError, Equipment, InitialData, NewLoan, PendingLoan, ReturnRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::csrf;
use crate::error::CliError;

/// Page whose `<meta>` tag carries the CSRF token.
const SESSION_PAGE: &str = "/";

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: &str, config: &ClientConfig) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), csrf_token: None })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Load the desk page once to pick up the session cookie and CSRF token.
    ///
    /// A page without a token is accepted (requests go out without the
    /// header) unless `require` is set.
    pub async fn establish_session(&mut self, require: bool) -> Result<(), CliError> {
        let response = self.http.get(self.url(SESSION_PAGE)).send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(CliError::Server { path: SESSION_PAGE.to_owned(), status });
        }
        let page = response.text().await?;
        self.csrf_token = csrf::extract_token(&page)?;
        match (&self.csrf_token, require) {
            (Some(_), _) => tracing::debug!("csrf token loaded"),
            (None, true) => return Err(CliError::MissingCsrfToken(self.url(SESSION_PAGE))),
            (None, false) => tracing::warn!("no csrf token on desk page; sending requests without it"),
        }
        Ok(())
    }

    /// Fetch a binary report such as the Excel or PDF export.
    pub async fn download(&self, path: &str) -> Result<Vec<u8>, CliError> {
        tracing::debug!(path, "downloading");
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(CliError::Server { path: path.to_owned(), status });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_success(response.status().as_u16(), path)?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        tracing::debug!(path, csrf = self.csrf_token.is_some(), "POST");
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        mutation_outcome(status, &text)
    }
}

impl LoanApi for HttpApi {
    async fn fetch_initial_data(&self) -> Result<InitialData, ApiError> {
        self.get_json(INITIAL_DATA_PATH).await
    }

    async fn fetch_equipment(&self) -> Result<Vec<Equipment>, ApiError> {
        self.get_json(EQUIPMENT_PATH).await
    }

    async fn fetch_pending(&self) -> Result<Vec<PendingLoan>, ApiError> {
        self.get_json(LOANS_PATH).await
    }

    async fn create_loan(&self, loan: &NewLoan) -> Result<String, ApiError> {
        self.post_json(LOANS_PATH, loan).await
    }

    async fn return_loan(&self, loan_id: i64, request: &ReturnRequest) -> Result<String, ApiError> {
        self.post_json(&return_endpoint(loan_id), request).await
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
