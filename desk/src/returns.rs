//! Two-state return confirmation flow.
//!
//! `Idle` until a row's return trigger opens the modal for that loan id.
//! Cancel, overlay close, and a successful confirm all lead back to `Idle`;
//! a failed confirm keeps the modal open with the same id.

#[cfg(test)]
#[path = "returns_test.rs"]
mod returns_test;

use crate::error::ReturnError;
use crate::model::ReturnRequest;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReturnFlow {
    #[default]
    Idle,
    Open {
        loan_id: i64,
        receiver: String,
    },
}

impl ReturnFlow {
    /// Capture the target loan and clear any previous receiver.
    pub fn open(&mut self, loan_id: i64) {
        *self = Self::Open { loan_id, receiver: String::new() };
    }

    /// Record the receiver selection. Ignored while idle.
    pub fn select_receiver(&mut self, name: &str) {
        if let Self::Open { receiver, .. } = self {
            *receiver = name.to_owned();
        }
    }

    /// Cancel button and overlay close share this transition.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Successful confirmation.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn loan_id(&self) -> Option<i64> {
        match self {
            Self::Idle => None,
            Self::Open { loan_id, .. } => Some(*loan_id),
        }
    }

    #[must_use]
    pub fn receiver(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Open { receiver, .. } => receiver,
        }
    }

    /// Validate the open modal and build the return request.
    ///
    /// # Errors
    ///
    /// [`ReturnError::NotOpen`] while idle, [`ReturnError::MissingReceiver`]
    /// when no receiver has been chosen. The state is left unchanged.
    pub fn prepare(&self) -> Result<(i64, ReturnRequest), ReturnError> {
        match self {
            Self::Idle => Err(ReturnError::NotOpen),
            Self::Open { receiver, .. } if receiver.trim().is_empty() => Err(ReturnError::MissingReceiver),
            Self::Open { loan_id, receiver } => Ok((*loan_id, ReturnRequest { recibido_por: receiver.clone() })),
        }
    }
}
