//! Error types for desk validation, return flow, and transport failures.
//!
//! User-facing messages are the ones the desk shows in its alerts.

/// Validation failure raised before a loan leaves the client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A name was typed but it matches no known user.
    #[error("El nombre ingresado no está en la lista. Por favor, seleccione un nombre válido.")]
    UnknownName,
    /// The PC box is checked but no unit number was chosen.
    #[error("Si selecciona PC, debe especificar el número.")]
    MissingPcNumber,
    /// A field the server requires is empty.
    #[error("Falta el campo requerido: {0}")]
    MissingField(&'static str),
}

/// Failure while confirming a return.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReturnError {
    #[error("Por favor, seleccione quién recibe el equipo.")]
    MissingReceiver,
    #[error("no hay una devolución en curso")]
    NotOpen,
    #[error("el préstamo {0} no está pendiente")]
    UnknownLoan(i64),
}

/// Failure talking to the loan API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Alert shown when the startup reference load fails.
pub const REFERENCE_LOAD_MESSAGE: &str = "No se pudieron cargar los datos para los formularios.";

/// Any failure surfaced by a [`crate::Desk`] command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    #[error("{}", REFERENCE_LOAD_MESSAGE)]
    ReferenceLoad(#[source] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Return(#[from] ReturnError),
    #[error("Error: {0}")]
    Api(#[from] ApiError),
}
