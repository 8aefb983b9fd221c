//! Loan desk core shared by the browser and terminal front ends.
//!
//! This crate owns the equipment-loan behaviour: the REST wire model, the
//! reference data used to populate form controls, the loan form with its
//! dependent fields, the pending-loans table with client-side search, and the
//! two-state return flow. [`Desk`] ties them together and drives a [`LoanApi`]
//! implementation supplied by the front end.
//!
//! ARCHITECTURE
//! ============
//! Nothing here touches the DOM or a socket. Front ends translate user input
//! into `Desk` method calls and render the resulting state from typed fields.

pub mod api;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod reference;
pub mod returns;
pub mod table;

pub use api::LoanApi;
pub use controller::Desk;
pub use error::{ApiError, DeskError, FormError, ReturnError};
pub use form::{Accessory, LoanForm};
pub use model::{Assistant, Equipment, InitialData, Location, NewLoan, PendingLoan, ReturnRequest, User};
pub use reference::{ReferenceData, SelectOption};
pub use returns::ReturnFlow;
pub use table::{PendingRow, PendingTable};
