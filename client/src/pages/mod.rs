//! Top-level pages.

pub mod loans;
