//! Loan desk page: form, pending table, and return modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page reads the CSRF token, loads reference data and the
//! pending list, and only then enables the form. A failed reference load
//! leaves the desk disabled with an alert.

#[cfg(test)]
#[path = "loans_test.rs"]
mod loans_test;

use desk::{Desk, DeskError, LoanApi, NewLoan, ReturnRequest};
use desk::error::REFERENCE_LOAD_MESSAGE;
use leptos::prelude::*;

use crate::components::loan_form::LoanFormPanel;
use crate::components::pending_table::PendingLoansTable;
use crate::components::return_modal::ReturnModal;
use crate::state::desk::DeskState;
use crate::util::{clock, csrf, notify};

/// Equipment-loan desk.
#[component]
pub fn LoansPage() -> impl IntoView {
    let state = expect_context::<RwSignal<DeskState>>();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(initialize(state));

    view! {
        <div class="loans-page">
            <header class="loans-page__header">
                <h1>"Control de préstamos de equipos"</h1>
            </header>
            <Show when=move || state.with(|s| s.load_failed)>
                <p class="loans-page__error">{REFERENCE_LOAD_MESSAGE}</p>
            </Show>
            <LoanFormPanel/>
            <PendingLoansTable/>
            <ReturnModal/>
        </div>
    }
}

/// Load everything the desk needs, then publish it into the shared state.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) async fn initialize(state: RwSignal<DeskState>) {
    let csrf_token = csrf::read_token();
    let api = crate::net::api::BrowserApi::new(csrf_token.clone());
    let mut desk = Desk::new(clock::now());
    let result = desk.initialize(&api, clock::now()).await;
    if let Err(error) = &result {
        notify::alert_error("Error al cargar datos iniciales", error);
    }
    state.update(|s| {
        s.desk = desk;
        s.csrf_token = csrf_token;
        s.load_failed = result.is_err();
    });
}

/// Send a validated loan, then reset the form and reload the table.
///
/// `busy` is held for the whole sequence. On failure the form is kept.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) async fn submit_loan<A: LoanApi>(
    state: RwSignal<DeskState>,
    api: &A,
    loan: NewLoan,
) -> Result<String, DeskError> {
    state.update(|s| s.busy = true);
    let outcome = api.create_loan(&loan).await;
    if outcome.is_ok() {
        state.update(|s| s.desk.submission_succeeded(clock::now()));
        reload_pending(state, api).await;
    }
    state.update(|s| s.busy = false);
    Ok(outcome?)
}

/// Post a prepared return, then close the modal and reload the table.
///
/// On failure the modal stays open on the same loan.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) async fn return_loan<A: LoanApi>(
    state: RwSignal<DeskState>,
    api: &A,
    loan_id: i64,
    request: ReturnRequest,
) -> Result<String, DeskError> {
    state.update(|s| s.busy = true);
    let outcome = api.return_loan(loan_id, &request).await;
    if outcome.is_ok() {
        state.update(|s| s.desk.return_succeeded());
        reload_pending(state, api).await;
    }
    state.update(|s| s.busy = false);
    Ok(outcome?)
}

async fn reload_pending<A: LoanApi>(state: RwSignal<DeskState>, api: &A) {
    match api.fetch_pending().await {
        Ok(loans) => state.update(|s| s.desk.show_pending(&loans)),
        Err(error) => notify::log_error("Error al cargar registros", &error),
    }
}
