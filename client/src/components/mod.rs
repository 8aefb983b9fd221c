//! Reusable UI components for the loan desk page.

pub mod loan_form;
pub mod pending_table;
pub mod return_modal;
