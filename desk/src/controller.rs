//! Loan-form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Desk`] is the single owner of session state: reference data, the loan
//! form, the pending table, and the return flow. Front ends call one method
//! per user action. Synchronous methods update state directly; the async ones
//! validate, call the [`LoanApi`], then apply the outcome.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors return before any request is made. Request errors leave
//! the form and the return modal untouched so the user can retry. A failed
//! reload after a successful mutation is logged but does not fail the command.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use time::PrimitiveDateTime;

use crate::api::LoanApi;
use crate::error::{DeskError, ReturnError};
use crate::form::{Accessory, LoanForm};
use crate::model::{NewLoan, PendingLoan};
use crate::reference::ReferenceData;
use crate::returns::ReturnFlow;
use crate::table::PendingTable;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Desk {
    reference: ReferenceData,
    form: LoanForm,
    table: PendingTable,
    returns: ReturnFlow,
    ready: bool,
}

impl Desk {
    #[must_use]
    pub fn new(now: PrimitiveDateTime) -> Self {
        Self { form: LoanForm::new(now), ..Self::default() }
    }

    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    #[must_use]
    pub fn form(&self) -> &LoanForm {
        &self.form
    }

    #[must_use]
    pub fn table(&self) -> &PendingTable {
        &self.table
    }

    #[must_use]
    pub fn returns(&self) -> &ReturnFlow {
        &self.returns
    }

    /// True once reference data loaded successfully.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    // ---------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------

    /// Install reference data fetched at startup.
    pub fn load_reference(&mut self, reference: ReferenceData) {
        self.reference = reference;
        self.ready = true;
    }

    /// Fetch reference data and equipment in parallel, then the pending list,
    /// then reset the form.
    ///
    /// # Errors
    ///
    /// [`DeskError::ReferenceLoad`] if either reference fetch fails; the desk
    /// stays not ready and nothing else is loaded.
    pub async fn initialize<A: LoanApi>(&mut self, api: &A, now: PrimitiveDateTime) -> Result<(), DeskError> {
        let (initial, equipment) = futures::join!(api.fetch_initial_data(), api.fetch_equipment());
        let reference = match (initial, equipment) {
            (Ok(initial), Ok(equipment)) => ReferenceData::new(initial, equipment),
            (Err(error), _) | (_, Err(error)) => {
                tracing::error!(%error, "reference data load failed");
                return Err(DeskError::ReferenceLoad(error));
            }
        };
        tracing::debug!(
            users = reference.users().len(),
            locations = reference.locations().len(),
            equipment = reference.equipment().len(),
            "reference data loaded"
        );
        self.load_reference(reference);
        self.refresh(api).await;
        self.form.reset(now);
        Ok(())
    }

    /// Rebuild the pending table from the server.
    ///
    /// # Errors
    ///
    /// [`DeskError::Api`] if the listing cannot be fetched; the table keeps its rows.
    pub async fn reload<A: LoanApi>(&mut self, api: &A) -> Result<(), DeskError> {
        let loans = api.fetch_pending().await?;
        self.table.replace(&loans);
        Ok(())
    }

    async fn refresh<A: LoanApi>(&mut self, api: &A) {
        if let Err(error) = self.reload(api).await {
            tracing::warn!(%error, "pending loans reload failed");
        }
    }

    // ---------------------------------------------------------
    // Form
    // ---------------------------------------------------------

    pub fn set_name(&mut self, name: &str) {
        self.form.set_name(&self.reference, name);
    }

    pub fn select_location(&mut self, location: &str) {
        self.form.select_location(&self.reference, location);
    }

    pub fn set_pc(&mut self, checked: bool) {
        self.form.set_pc(checked);
    }

    pub fn set_pc_number(&mut self, number: &str) {
        self.form.set_pc_number(&self.reference, number);
    }

    pub fn set_loaned_by(&mut self, assistant: &str) {
        self.form.set_loaned_by(&self.reference, assistant);
    }

    pub fn set_accessory(&mut self, accessory: Accessory, checked: bool) {
        self.form.set_accessory(accessory, checked);
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.form.set_notes(notes);
    }

    pub fn set_date(&mut self, date: &str) {
        self.form.set_date(date);
    }

    pub fn set_start_time(&mut self, start_time: &str) {
        self.form.set_start_time(start_time);
    }

    /// The "clear" button.
    pub fn clear_form(&mut self, now: PrimitiveDateTime) {
        self.form.reset(now);
    }

    /// Validate the form without sending it.
    ///
    /// # Errors
    ///
    /// [`DeskError::Form`] describing the first failed check.
    pub fn prepare_submission(&self) -> Result<NewLoan, DeskError> {
        Ok(self.form.build_submission(&self.reference)?)
    }

    /// Apply a successful create: reset the form for the next loan.
    pub fn submission_succeeded(&mut self, now: PrimitiveDateTime) {
        self.form.reset(now);
    }

    /// Validate, create the loan, then reset the form and reload the table.
    ///
    /// # Errors
    ///
    /// [`DeskError::Form`] before any request, [`DeskError::Api`] if the
    /// server rejects the loan. The form is kept in both cases.
    pub async fn submit<A: LoanApi>(&mut self, api: &A, now: PrimitiveDateTime) -> Result<String, DeskError> {
        let loan = self.prepare_submission()?;
        tracing::debug!(nombre = %loan.nombre, pc = loan.pc, "submitting loan");
        let message = api.create_loan(&loan).await?;
        tracing::info!(nombre = %loan.nombre, "loan registered");
        self.submission_succeeded(now);
        self.refresh(api).await;
        Ok(message)
    }

    // ---------------------------------------------------------
    // Table
    // ---------------------------------------------------------

    pub fn search(&mut self, term: &str) {
        self.table.set_filter(term);
    }

    /// Replace the table with an already fetched listing.
    pub fn show_pending(&mut self, loans: &[PendingLoan]) {
        self.table.replace(loans);
    }

    // ---------------------------------------------------------
    // Return flow
    // ---------------------------------------------------------

    /// Open the return modal for a row of the pending table.
    ///
    /// # Errors
    ///
    /// [`ReturnError::UnknownLoan`] if the id is not a displayed row.
    pub fn open_return(&mut self, loan_id: i64) -> Result<(), ReturnError> {
        if !self.table.contains(loan_id) {
            return Err(ReturnError::UnknownLoan(loan_id));
        }
        self.returns.open(loan_id);
        Ok(())
    }

    /// Receiver selector; names without an option select nothing.
    pub fn select_receiver(&mut self, name: &str) {
        let name = if self.reference.is_assistant(name) { name } else { "" };
        self.returns.select_receiver(name);
    }

    /// Cancel button or overlay close.
    pub fn cancel_return(&mut self) {
        self.returns.cancel();
    }

    /// Apply a successful return: close the modal.
    pub fn return_succeeded(&mut self) {
        self.returns.finish();
    }

    /// Validate the modal, post the return, then close and reload.
    ///
    /// # Errors
    ///
    /// [`DeskError::Return`] before any request, [`DeskError::Api`] if the
    /// server rejects it. The modal stays open with the same id in both cases.
    pub async fn confirm_return<A: LoanApi>(&mut self, api: &A) -> Result<String, DeskError> {
        let (loan_id, request) = self.returns.prepare()?;
        tracing::debug!(loan_id, recibido_por = %request.recibido_por, "confirming return");
        let message = api.return_loan(loan_id, &request).await?;
        tracing::info!(loan_id, "return registered");
        self.return_succeeded();
        self.refresh(api).await;
        Ok(message)
    }
}
