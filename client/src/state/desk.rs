//! Session state for the loan desk page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `desk::Desk` controller with the browser-only pieces: the CSRF
//! token read at startup and an in-flight flag that keeps mutating actions
//! serialized.

#[cfg(test)]
#[path = "desk_test.rs"]
mod desk_test;

use desk::Desk;

use crate::net::api::BrowserApi;

/// Desk state shared through context as `RwSignal<DeskState>`.
#[derive(Clone, Debug, Default)]
pub struct DeskState {
    pub desk: Desk,
    pub csrf_token: Option<String>,
    /// A create or return request is in flight.
    pub busy: bool,
    /// Startup reference load failed; the form stays disabled.
    pub load_failed: bool,
}

impl DeskState {
    /// Transport configured with this session's CSRF token.
    #[must_use]
    pub fn api(&self) -> BrowserApi {
        BrowserApi::new(self.csrf_token.clone())
    }

    /// Whether the form and return modal may send requests.
    #[must_use]
    pub fn can_mutate(&self) -> bool {
        self.desk.is_ready() && !self.busy
    }
}
