//! Networking for the loan REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `desk::LoanApi` seam over `gloo-net`; the wire schema
//! itself lives in `desk::model`.

pub mod api;
